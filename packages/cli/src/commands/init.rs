use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_editor::{BuilderConfig, EditSession, DEFAULT_CONFIG_NAME};
use pagecraft_model::{Document, Registry};
use serde_json::json;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// File name of the starter page
    #[arg(short, long, default_value = "page.json")]
    pub page: String,

    /// Turn on auto-save in the generated config
    #[arg(long)]
    pub auto_save: bool,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Pagecraft project...".bright_blue().bold());

    let config = BuilderConfig {
        auto_save: args.auto_save,
        ..BuilderConfig::default()
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let page_path = cwd.join(&args.page);
    if !page_path.exists() || args.force {
        let page = starter_page(config)?;
        fs::write(&page_path, page.to_json_pretty()?)?;
        println!("  {} Created {} ({} components)", "✓".green(), args.page, page.len());
    }

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: pagecraft validate {}", args.page);
    println!("  2. Run: pagecraft render {} --out index.html", args.page);

    Ok(())
}

/// Hero followed by a three-card grid, built through the normal edit path
pub(crate) fn starter_page(config: BuilderConfig) -> Result<Document> {
    let mut session = EditSession::new(Arc::new(Registry::builtin()), None, config);

    session.insert("hero", None, None)?;
    let grid = session.insert("container", None, None)?;
    session.update_properties(&grid.id, json!({ "layout": "grid", "columns": 3, "gap": 24 }))?;

    for title in ["Fast", "Flexible", "Friendly"] {
        let card = session.insert("card", Some(grid.id.clone()), None)?;
        session.update_properties(&card.id, json!({ "title": title }))?;
    }

    let mut page = session.document().clone();
    page.metadata.title = Some("My page".to_string());
    Ok(page)
}
