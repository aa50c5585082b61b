use serde::Deserialize;

use crate::domain::ProvisionedSubscription;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty response body")]
    EmptyBody,
}

#[derive(Debug, Clone, Deserialize)]
struct SubscriptionJsonResponse {
    #[serde(rename = "destinationAddress")]
    destination_address: String,
}

/// Request body for the subscription endpoint. The endpoint takes no
/// parameters but still requires a JSON object.
pub fn empty_subscription_body() -> serde_json::Value {
    serde_json::json!({})
}

pub fn decode_subscription_json_response(
    json: &str,
) -> Result<ProvisionedSubscription, TransportError> {
    if json.trim().is_empty() {
        return Err(TransportError::EmptyBody);
    }
    let parsed: SubscriptionJsonResponse = serde_json::from_str(json)?;
    Ok(ProvisionedSubscription {
        destination_address: parsed.destination_address,
    })
}
