//! mever — verify a face image against the verification service.

mod commands;
mod render;

use clap::Parser;
use mever_client::{ClientConfig, HttpTransport, VerifyClient};
use mever_form::{FormOptions, VerificationForm};
use mever_utils::LogFormat;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "mever",
    version,
    about = "Verify a face image against the mever service"
)]
struct Cli {
    /// Base URL of the verification service (e.g. "http://127.0.0.1:5000").
    #[arg(long, env = "MEVER_URL")]
    url: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "MEVER_CONFIG")]
    config: Option<PathBuf>,

    /// Whole-request timeout in seconds.
    #[arg(long, env = "MEVER_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Largest image accepted locally, in megabytes.
    #[arg(long, env = "MEVER_MAX_UPLOAD_MB")]
    max_upload_mb: Option<u64>,

    /// Name shown in the result headline.
    #[arg(long, env = "MEVER_SUBJECT")]
    subject: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "MEVER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "MEVER_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Output machine-readable JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Upload an image (JPG or PNG) and print the verdict.
    Verify {
        /// Image file to verify.
        image: PathBuf,
    },
    /// Check the service's health endpoint.
    Health,
}

impl Cli {
    /// File settings (or defaults) with flags and env vars applied on top.
    fn resolve_config(&self) -> anyhow::Result<ClientConfig> {
        let base = match &self.config {
            Some(path) => ClientConfig::from_toml_file(path)?,
            None => ClientConfig::default(),
        };
        let config = self.apply_overrides(base);
        config.validate()?;
        Ok(config)
    }

    /// Replace every field set by a flag or env var; the rest of `config` stays.
    fn apply_overrides(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(url) = &self.url {
            config.base_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        if let Some(mb) = self.max_upload_mb {
            config.max_upload_mb = mb;
        }
        if let Some(subject) = &self.subject {
            config.subject = subject.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    mever_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::debug!("loaded config from {}", path.display());
    }

    let transport = HttpTransport::new(&config)?;

    let ok = match cli.command {
        Command::Verify { image } => {
            tracing::debug!(url = transport.base_url(), image = %image.display(), "verifying");
            let form = VerificationForm::new(transport, FormOptions::from(&config));
            let view = commands::verify_file(&form, &image).await?;
            render::print_view(&view, cli.json)?
        }
        Command::Health => {
            let client = VerifyClient::new(transport, config.max_upload_bytes());
            let health = client.health().await;
            render::print_health(&health, cli.json)?
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
