#[derive(Debug, Clone, PartialEq, Eq)]
/// Token issued by the OAuth endpoint.
pub struct AccessGrant {
    pub access_token: String,
    pub token_type: String,
}

impl AccessGrant {
    /// Value for the `Authorization` header on subsequent requests,
    /// e.g. `Bearer eyJhbGci...`.
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Subscription returned by the provisioning endpoint.
pub struct ProvisionedSubscription {
    /// Dedicated number messages will be sent from.
    pub destination_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_joins_type_and_token() {
        let grant = AccessGrant {
            access_token: "tok-123".into(),
            token_type: "Bearer".into(),
        };
        assert_eq!(grant.authorization(), "Bearer tok-123");
    }
}
