use crate::domain::value::{DestinationNumber, MessageText, SendingNumber};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A fully assembled outbound SMS, ready to be encoded for the wire.
///
/// All three parts are already validated, so constructing one cannot fail.
pub struct OutboundMessage {
    to: DestinationNumber,
    body: MessageText,
    from: SendingNumber,
}

impl OutboundMessage {
    pub fn new(to: DestinationNumber, body: MessageText, from: SendingNumber) -> Self {
        Self { to, body, from }
    }

    pub fn to(&self) -> &DestinationNumber {
        &self.to
    }

    pub fn body(&self) -> &MessageText {
        &self.body
    }

    pub fn from(&self) -> &SendingNumber {
        &self.from
    }
}
