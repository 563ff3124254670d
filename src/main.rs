use anyhow::Result;
use clap::Parser;
use readme_page::build::build_page;
use readme_page::config::Config;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generates a themed HTML page from a project README.
///
/// With no arguments, reads `README.md` and `template.html` from the working
/// directory and writes `dist/about/index.html`.
#[derive(Parser)]
#[command(name = "readme-page", version, about)]
struct Cli {
    /// YAML project file with `source`, `template`, `output`, and
    /// `default_title` keys
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Markdown source document
    #[arg(long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// HTML template with the `{{...}}` placeholders
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Output page
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::from_project_file(path)?,
        None => Config::default(),
    }
    .with_overrides(cli.source, cli.template, cli.output);

    let report = build_page(&config)?;
    println!("✅  Generated: {}", report.output.display());
    println!("   Title   : {}", report.title);
    println!("   Images  : {} found", report.images);
    Ok(())
}
