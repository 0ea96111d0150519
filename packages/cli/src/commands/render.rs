use super::load_document;
use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use pagecraft_model::{Breakpoint, Document};
use pagecraft_renderer::{render_document, render_page, to_html, HtmlOptions, RenderOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Canvas markup with selection frames and placeholders
    Editing,
    /// The published page
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BreakpointArg {
    Mobile,
    Tablet,
    Desktop,
}

impl From<BreakpointArg> for Breakpoint {
    fn from(arg: BreakpointArg) -> Self {
        match arg {
            BreakpointArg::Mobile => Breakpoint::Mobile,
            BreakpointArg::Tablet => Breakpoint::Tablet,
            BreakpointArg::Desktop => Breakpoint::Desktop,
        }
    }
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Stored document (.json)
    pub input: PathBuf,

    /// Render mode
    #[arg(short, long, value_enum, default_value = "static")]
    pub mode: ModeArg,

    /// Render as seen at a device width
    #[arg(short, long, value_enum)]
    pub breakpoint: Option<BreakpointArg>,

    /// Emit only the page markup, without <html>/<head>
    #[arg(long)]
    pub fragment: bool,

    /// Single-line output
    #[arg(long)]
    pub compact: bool,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn render(args: RenderArgs, cwd: &Path) -> Result<()> {
    let mut document = load_document(&cwd.join(&args.input))?;
    for violation in document.repair() {
        warn!(%violation, "Repaired document before rendering");
    }

    let html = render_to_string(&document, &args);

    match &args.out {
        Some(out) => {
            let out = cwd.join(out);
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&out, html)?;
            eprintln!(
                "  {} {} → {}",
                "✓".green(),
                args.input.display(),
                out.display()
            );
        }
        None => println!("{}", html),
    }

    Ok(())
}

fn render_to_string(document: &Document, args: &RenderArgs) -> String {
    let mut options = match args.mode {
        ModeArg::Editing => RenderOptions::editing(),
        ModeArg::Static => RenderOptions::static_page(),
    };
    if let Some(breakpoint) = args.breakpoint {
        options = options.at_breakpoint(breakpoint.into());
    }

    let html_options = if args.compact {
        HtmlOptions::compact()
    } else {
        HtmlOptions::default()
    };

    if args.fragment {
        to_html(&render_document(document, &options), html_options)
    } else {
        render_page(document, &options, html_options)
    }
}
