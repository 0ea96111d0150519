use super::load_document;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_editor::DEFAULT_CONFIG_NAME;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Document file or directory of documents (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

/// Findings for one document
#[derive(Debug, Default)]
pub(crate) struct Report {
    pub components: usize,
    pub problems: Vec<String>,
}

pub fn validate(args: ValidateArgs, cwd: &Path) -> Result<()> {
    let root = cwd.join(&args.path);
    if !root.exists() {
        return Err(anyhow!("Path does not exist: {}", root.display()));
    }

    println!("{}", "🔍 Validating documents...".bright_blue().bold());

    let files = find_documents(&root);
    if files.is_empty() {
        println!("{}", "⚠️  No .json documents found".yellow());
        return Ok(());
    }

    let mut invalid = 0;
    for file in &files {
        let relative = file.strip_prefix(&root).unwrap_or(file);
        let report = check_file(file);

        if report.problems.is_empty() {
            println!(
                "  {} {} ({} components)",
                "✓".green(),
                relative.display(),
                report.components
            );
        } else {
            invalid += 1;
            eprintln!("  {} {}", "✗".red(), relative.display());
            for problem in &report.problems {
                eprintln!("      {}", problem.red());
            }
        }
    }

    println!();
    if invalid == 0 {
        println!("{} {} documents valid", "✅".green(), files.len());
        Ok(())
    } else {
        Err(anyhow!("{} of {} documents invalid", invalid, files.len()))
    }
}

/// A single file, or every `.json` below a directory except builder configs
fn find_documents(root: &Path) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .filter(|path| path.file_name().and_then(|s| s.to_str()) != Some(DEFAULT_CONFIG_NAME))
        .collect();
    files.sort();
    files
}

pub(crate) fn check_file(path: &Path) -> Report {
    match load_document(path) {
        Ok(document) => Report {
            components: document.len(),
            problems: document
                .check_integrity()
                .iter()
                .map(ToString::to_string)
                .collect(),
        },
        Err(err) => Report {
            components: 0,
            problems: vec![format!("{:#}", err)],
        },
    }
}
