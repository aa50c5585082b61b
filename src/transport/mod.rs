//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod provision;
mod send_sms;
mod token;

pub use provision::{decode_subscription_json_response, empty_subscription_body};
pub use send_sms::encode_send_sms_json;
pub use token::{GRANT_TYPE_CLIENT_CREDENTIALS, GRANT_TYPE_FIELD, decode_token_json_response};
