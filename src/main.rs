use anyhow::{Context, Result};
use clap::Parser;
use std::{fs, path::PathBuf, time::Instant};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Render a lifepath table (CSV) into a LaTeX document
#[derive(Parser, Debug)]
#[command(name = "lifepaths")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input table; the first row must name the columns
    input: Option<PathBuf>,

    /// Where to write the document
    #[arg(short, long, env = "LIFEPATHS_OUTPUT", default_value = "test.tex")]
    output: PathBuf,

    /// Do not echo the document to stdout
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "startup");

    let Some(input) = cli.input else {
        println!("No input file provided.");
        return Ok(());
    };

    let start = Instant::now();
    info!(input = %input.display(), output = %cli.output.display(), "rendering");

    let text = fs::read_to_string(&input)
        .with_context(|| format!("reading {}", input.display()))?;
    let document = lifepaths::build_document(&text)
        .with_context(|| format!("rendering {}", input.display()))?;

    fs::write(&cli.output, &document)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    if !cli.quiet {
        println!("{document}");
    }

    info!(
        bytes = document.len(),
        elapsed = ?start.elapsed(),
        "wrote {}",
        cli.output.display()
    );
    Ok(())
}
