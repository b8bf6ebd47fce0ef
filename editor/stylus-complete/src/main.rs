//! stylus-complete CLI

use anyhow::Context;
use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stylus-complete")]
#[command(about = "Context-aware completions for Arbitrum Stylus contracts")]
#[command(version)]
struct Cli {
    /// Rust source file to analyze (use - for stdin)
    file: PathBuf,

    /// Cursor line (1-based)
    line: u32,

    /// Cursor column (1-based)
    column: u32,

    /// Output format
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Verbose output (show the detected context)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Plain,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "plain" | "text" => Ok(OutputFormat::Plain),
            _ => Err(format!("Unknown format: {}. Use 'json' or 'plain'", s)),
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let source = if cli.file.to_string_lossy() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(&cli.file)
            .with_context(|| format!("failed to read {}", cli.file.display()))?
    };

    let prefix = stylus_complete::prefix_at(&source, cli.line, cli.column);

    if cli.verbose {
        eprintln!("Analyzing {}:{}:{}", cli.file.display(), cli.line, cli.column);
        eprintln!("Prefix: {:?}", prefix);
        eprintln!("Context: {}", stylus_complete::classify(prefix));
    }

    let completions = stylus_complete::complete_prefix(prefix);

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&completions)?;
            println!("{}", json);
        }
        OutputFormat::Plain => {
            for item in &completions {
                let detail = item.detail.as_deref().unwrap_or("");
                let kind = format!("{:?}", item.kind);
                println!("{:<22} {:<10} {}", item.label, kind, detail);
            }
        }
    }

    if cli.verbose {
        eprintln!("{} completions", completions.len());
    }

    Ok(())
}
