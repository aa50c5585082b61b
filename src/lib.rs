//! Send SMS messages through Telstra's Messaging API v2.
//!
//! The crate backs the `telstra-text` binary but is usable on its own: a
//! domain layer of strong types, a transport layer for wire-format quirks,
//! and a small client layer orchestrating the token, subscription, and send
//! requests.
//!
//! ```rust,no_run
//! use telstra_text::{Credentials, DestinationNumber, MessageText, TelstraClient};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), telstra_text::TelstraError> {
//!     let client = TelstraClient::new(Credentials::new("id", "secret")?);
//!     let to = DestinationNumber::new("+61412345678")?;
//!     let body = MessageText::new("hello")?;
//!     client.send_text(to, body).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
mod transport;

pub use client::{Credentials, TelstraClient, TelstraClientBuilder, TelstraError};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, credentials_template, load_credentials};
pub use domain::{
    AccessGrant, ClientId, ClientSecret, DestinationNumber, MessageText, OutboundMessage,
    ProvisionedSubscription, SendingNumber, ValidationError,
};
