use std::path::PathBuf;

use clap::Parser;
use telstra_text::{
    ConfigError, DEFAULT_CONFIG_PATH, DestinationNumber, MessageText, TelstraClient, TelstraError,
    ValidationError, credentials_template, load_credentials,
};

/// Overrides the credentials file path, mainly for tests and local setups.
const CONFIG_ENV: &str = "TELSTRA_TEXT_CONFIG";

#[derive(Parser, Debug)]
#[command(name = "telstra-text")]
#[command(
    about = "Sends a text to a mobile number through Telstra's Messaging API.",
    long_about = None
)]
struct Cli {
    /// The mobile phone number to send the message to
    number: String,

    /// The message that will be sent
    message: String,
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] TelstraError),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        println!("{}", render_error(&err));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), RunError> {
    // The message length check comes first, then the number check; both run
    // before any file or network access.
    let body = MessageText::new(cli.message)?;
    let to = DestinationNumber::new(cli.number)?;

    let credentials = load_credentials(config_path())?;
    let client = TelstraClient::new(credentials);
    client.send_text(to, body).await?;
    Ok(())
}

fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

fn render_error(err: &RunError) -> String {
    match err {
        RunError::Validation(err) => render_validation_error(err),
        RunError::Config(err) => render_config_error(err),
        RunError::Api(err) => render_api_error(err),
    }
}

fn render_validation_error(err: &ValidationError) -> String {
    match err {
        ValidationError::MessageTooLong { .. } => "Message too long (>1900 chars)".to_owned(),
        ValidationError::InvalidNumber { .. } => "Not a valid mobile number".to_owned(),
        other => other.to_string(),
    }
}

fn render_config_error(err: &ConfigError) -> String {
    match err {
        ConfigError::Missing { path } => format!(
            "No existing config was found\n\
             Copy the following blank template into {} and fill in the blanks:\n{}",
            path.display(),
            credentials_template()
        ),
        ConfigError::MissingSection | ConfigError::MissingField { .. } | ConfigError::Invalid(_) => {
            format!("Failed to read config: {err}")
        }
        other => other.to_string(),
    }
}

fn render_api_error(err: &TelstraError) -> String {
    match err {
        TelstraError::Auth { body, .. } => with_body("Failed to get token", body.as_deref()),
        TelstraError::TokenParse(_) => format!("Failed to get token\n{err}"),
        TelstraError::Provision { body, .. } => {
            with_body("Failed to get dedicated number", body.as_deref())
        }
        TelstraError::SubscriptionParse(_) => format!("Failed to get dedicated number\n{err}"),
        TelstraError::Send { body, .. } => with_body("Failed to send SMS", body.as_deref()),
        other => other.to_string(),
    }
}

fn with_body(label: &str, body: Option<&str>) -> String {
    match body {
        Some(body) => format!("{label}\n{body}"),
        None => label.to_owned(),
    }
}
