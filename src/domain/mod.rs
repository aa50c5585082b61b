//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::OutboundMessage;
pub use response::{AccessGrant, ProvisionedSubscription};
pub use validation::ValidationError;
pub use value::{ClientId, ClientSecret, DestinationNumber, MessageText, SendingNumber};
