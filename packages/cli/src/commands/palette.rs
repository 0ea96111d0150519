use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_editor::{BuilderConfig, EditSession, PaletteView};
use pagecraft_model::{ComponentDefinition, Registry};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct PaletteArgs {
    /// Filter by label, type or description (implies --categories)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Group entries by category
    #[arg(short, long)]
    pub categories: bool,

    /// Print definitions and their fields as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn palette(args: PaletteArgs, cwd: &Path) -> Result<()> {
    let registry = Arc::new(Registry::builtin());

    if args.json {
        println!("{}", serde_json::to_string_pretty(registry.palette())?);
        return Ok(());
    }

    let mut config = BuilderConfig::load(cwd)?;
    if args.categories || args.query.is_some() {
        config.enhanced_palette = true;
    }

    let session = EditSession::new(registry, None, config);
    let query = args.query.as_deref().unwrap_or("");

    match session.palette_view(query) {
        PaletteView::Grid(entries) => {
            for definition in entries {
                print_entry(definition);
            }
        }
        PaletteView::Categorized(groups) => {
            if groups.is_empty() {
                println!("{}", format!("⚠️  Nothing matches \"{}\"", query).yellow());
            }
            for (category, entries) in groups {
                println!("{}", category.label().bright_blue().bold());
                for definition in entries {
                    print!("  ");
                    print_entry(definition);
                }
            }
        }
    }

    Ok(())
}

fn print_entry(definition: &ComponentDefinition) {
    println!(
        "{:<10} {}",
        definition.component_type.as_str().bright_white(),
        definition.description.dimmed()
    );
}
