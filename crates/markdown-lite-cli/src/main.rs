use anyhow::{Context, Result};
use clap::Parser;
use markdown_lite_config::Config;
use markdown_lite_engine::io;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "markdown-lite", version)]
#[command(about = "Convert a small subset of Markdown to HTML on stdout")]
struct Cli {
    /// Markdown source file
    input: PathBuf,

    /// Config file (defaults to ~/.config/markdown-lite/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Refuse input files without an accepted extension
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            Config::load_from_path(&path)?
                .with_context(|| format!("config file not found: {}", path.display()))
        }
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

fn init_logging(config: &Config) {
    let level = log::LevelFilter::from_str(&config.log_level).unwrap_or(log::LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    log::debug!("log level {level}, config {config:?}");
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let strict = cli.strict || config.input.strict_extension;
    if let Err(e) = io::validate_extension(&cli.input, &config.input.extensions) {
        if strict {
            return Err(e.into());
        }
        // Not fatal: the file is still converted if it can be read.
        eprintln!("Error: {e}");
    }

    let markdown = io::read_markdown(&cli.input)?;

    let stdout = std::io::stdout().lock();
    let report = markdown_lite_engine::convert(&markdown, BufWriter::new(stdout))
        .context("failed to write HTML to stdout")?;

    for diagnostic in &report.diagnostics {
        eprintln!("Error: {diagnostic}");
    }
    log::info!(
        "{}: {} tokens, {} malformed",
        cli.input.display(),
        report.tokens,
        report.malformed
    );

    Ok(())
}
