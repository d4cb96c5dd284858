use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use sm_core::RawSummaryRequest;
use sm_inference::{Config, Summarizer};
use sm_web::AppState;
use tracing::{info, Level};

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize text with an LLM backend", long_about = None)]
pub struct Cli {
    #[arg(long, help = "Inference backend to use. Available backends: openai (default), dummy")]
    backend: Option<String>,
    #[arg(long, help = "API key for the openai backend (defaults to OPENAI_API_KEY)")]
    api_key: Option<String>,
    #[arg(long, help = "Model identifier sent to the backend (defaults to gpt-3.5-turbo)")]
    model: Option<String>,
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long)]
    temperature: Option<f32>,
    /// Timeout for each backend request, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
    #[arg(long, default_value = "info")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1:8000")]
        bind: String,
    },
    /// Summarize a file, or stdin when no file is given, and print the result as JSON
    Summarize {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, default_value = "general")]
        content_type: String,
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        length: i64,
        #[arg(long, default_value = "professional")]
        style: String,
        #[arg(long, default_value = "main ideas")]
        focus: String,
    },
}

impl Cli {
    /// Overrides `config` with any flag given on the command line.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(backend) = &self.backend {
            config.backend = backend.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.api_key = Some(api_key.clone());
        }
        if let Some(model) = &self.model {
            config.model_name = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Some(Duration::from_secs(secs));
        }
        config
    }
}

fn read_content(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok(content)
        }
    }
}

fn raw_request(
    content: String,
    content_type: &str,
    length: i64,
    style: &str,
    focus: &str,
) -> RawSummaryRequest {
    RawSummaryRequest {
        content: Some(Value::String(content)),
        content_type: Some(Value::String(content_type.to_string())),
        summary_length: Some(Value::from(length)),
        style: Some(Value::String(style.to_string())),
        focus_points: Some(Value::String(focus.to_string())),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init_logging(cli.log_level);

    let config = cli.apply(Config::from_env()?);
    let summarizer = Summarizer::from_config(&config)
        .context("failed to initialize summarizer")?;
    info!(
        "🧠 Summarizer initialized (backend {}, model {})",
        summarizer.backend_name(),
        summarizer.settings().model
    );

    match cli.command {
        Commands::Serve { bind } => {
            sm_web::serve(&bind, AppState::new(summarizer)).await?;
        }
        Commands::Summarize {
            file,
            content_type,
            length,
            style,
            focus,
        } => {
            let content = read_content(file.as_ref())?;
            let raw = raw_request(content, &content_type, length, &style, &focus);
            let result = summarizer.create_summary(&raw).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
