//! Parses one resume and prints the result as JSON.
//!
//! `parse-resume path/to/resume.pdf`, or pipe a document on stdin.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_parser::{Config, ResumeParser};

#[derive(Parser, Debug)]
#[command(name = "parse-resume", version, about = "Extract structured data from a resume")]
struct Args {
    /// Resume file (.pdf, .docx, .txt, .md). Reads stdin when omitted.
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    let outcome = runtime.block_on(run(args));
    // Exit without waiting on blocking-pool reads abandoned at the deadline.
    runtime.shutdown_background();
    outcome
}

async fn run(args: Args) -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_parser={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let parser_config = config
        .parser_config()
        .context("Failed to build parser configuration")?;
    let parser = ResumeParser::new(&parser_config)?;

    let result = match &args.path {
        Some(path) => parser
            .parse(path)
            .await
            .with_context(|| format!("Failed to parse {}", path.display()))?,
        None => {
            let mut bytes = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut bytes)
                .await
                .context("Failed to read resume from stdin")?;
            parser
                .parse_bytes(bytes, None)
                .await
                .context("Failed to parse resume from stdin")?
        }
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
