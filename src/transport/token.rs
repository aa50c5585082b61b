use serde::Deserialize;

use crate::domain::AccessGrant;

/// Form field carrying the OAuth grant type.
pub const GRANT_TYPE_FIELD: &str = "grant_type";

/// The only grant the messaging API accepts for machine clients.
pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct TokenJsonResponse {
    access_token: String,
    token_type: String,
}

pub fn decode_token_json_response(json: &str) -> Result<AccessGrant, TransportError> {
    let parsed: TokenJsonResponse = serde_json::from_str(json)?;
    Ok(AccessGrant {
        access_token: parsed.access_token,
        token_type: parsed.token_type,
    })
}
