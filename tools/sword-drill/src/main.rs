mod fetch;
mod present;
mod settings;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sword_parser::Extractor;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::fetch::{BibleApi, VerseTextService};
use crate::present::{OutputFormat, Presenter};
use crate::settings::{Settings, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TRANSLATION};

#[derive(Parser)]
#[command(author, version, about = "Finds spoken Scripture references in recognized text and looks them up")]
struct Cli {
    /// Recognized utterances, one per line (stdin when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[arg(short, long, default_value = DEFAULT_TRANSLATION, env = "SWORD_DRILL_TRANSLATION")]
    translation: String,

    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL, env = "SWORD_DRILL_API_URL")]
    api_url: String,

    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Print references without fetching their text
    #[arg(long)]
    offline: bool,

    /// One JSON object per reference
    #[arg(long)]
    json: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::new(&cli.translation, &cli.api_url, cli.timeout_secs)?;
    info!(translation = %settings.translation, api_url = %settings.api_url, "starting");

    let api = if cli.offline {
        None
    } else {
        Some(BibleApi::new(&settings)?)
    };
    let service = api.as_ref().map(|api| api as &dyn VerseTextService);
    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };

    let stdout = std::io::stdout();
    let mut presenter = Presenter::new(stdout.lock(), service, &settings.translation, format);

    let input: Box<dyn AsyncBufRead + Unpin> = match &cli.input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("cannot open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let extractor = Extractor::default();
    let mut lines = input.lines();
    let mut utterances = 0usize;
    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        utterances += 1;
        for reference in extractor.extract(&line) {
            presenter.present(&reference).await?;
        }
    }

    debug!(utterances, "input exhausted");
    Ok(())
}
