use serde_json::Value;

use crate::domain::{DestinationNumber, MessageText, OutboundMessage, SendingNumber};

pub fn encode_send_sms_json(message: &OutboundMessage) -> Value {
    let mut body = serde_json::Map::new();
    body.insert(
        DestinationNumber::FIELD.to_owned(),
        Value::String(message.to().raw().to_owned()),
    );
    body.insert(
        MessageText::FIELD.to_owned(),
        Value::String(message.body().as_str().to_owned()),
    );
    body.insert(
        SendingNumber::FIELD.to_owned(),
        Value::String(message.from().raw().to_owned()),
    );
    Value::Object(body)
}
