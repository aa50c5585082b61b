//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    AccessGrant, ClientId, ClientSecret, DestinationNumber, MessageText, OutboundMessage,
    ProvisionedSubscription, SendingNumber, ValidationError,
};

const DEFAULT_BASE_URL: &str = "https://tapi.telstra.com";
const TOKEN_PATH: &str = "v2/oauth/token";
const PROVISION_PATH: &str = "v2/messages/provisioning/subscriptions";
const SMS_PATH: &str = "v2/messages/sms";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

fn join_endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

fn non_empty_body(body: String) -> Option<String> {
    if body.trim().is_empty() { None } else { Some(body) }
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        authorization: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .timeout(self.timeout)
                .form(&params)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        authorization: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .timeout(self.timeout)
                .header(reqwest::header::AUTHORIZATION, authorization)
                .json(&body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// OAuth2 client credentials for the messaging API.
///
/// The secret is redacted from `Debug` output.
pub struct Credentials {
    client_id: ClientId,
    client_secret: ClientSecret,
}

impl Credentials {
    /// Create [`Credentials`] and validate that both parts are non-empty.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            client_id: ClientId::new(client_id)?,
            client_secret: ClientSecret::new(client_secret)?,
        })
    }

    fn push_form_params(&self, params: &mut Vec<(String, String)>) {
        params.push((ClientId::FIELD.to_owned(), self.client_id.as_str().to_owned()));
        params.push((
            ClientSecret::FIELD.to_owned(),
            self.client_secret.as_str().to_owned(),
        ));
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TelstraClient`].
///
/// Each API stage gets its own variant so callers can tell which request
/// failed; the offending HTTP status and response body are preserved.
pub enum TelstraError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The token endpoint answered with anything other than HTTP 200.
    #[error("token request failed with HTTP status {status}")]
    Auth { status: u16, body: Option<String> },

    /// The subscription endpoint answered with anything other than HTTP 201 or 204.
    #[error("provisioning request failed with HTTP status {status}")]
    Provision { status: u16, body: Option<String> },

    /// The SMS endpoint answered with anything other than HTTP 201.
    #[error("send request failed with HTTP status {status}")]
    Send { status: u16, body: Option<String> },

    /// The token body was not JSON or lacked `access_token`/`token_type`.
    #[error("unusable token response: {0}")]
    TokenParse(#[source] Box<dyn StdError + Send + Sync>),

    /// The subscription body was not JSON or lacked a usable `destinationAddress`.
    #[error("unusable subscription response: {0}")]
    SubscriptionParse(#[source] Box<dyn StdError + Send + Sync>),

    /// An endpoint override is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`TelstraClient`].
///
/// Use this when you need to customize the endpoints, timeout, or user-agent.
pub struct TelstraClientBuilder {
    credentials: Credentials,
    token_endpoint: String,
    provision_endpoint: String,
    sms_endpoint: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl TelstraClientBuilder {
    /// Create a builder with the production endpoints and default timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            token_endpoint: join_endpoint(DEFAULT_BASE_URL, TOKEN_PATH),
            provision_endpoint: join_endpoint(DEFAULT_BASE_URL, PROVISION_PATH),
            sms_endpoint: join_endpoint(DEFAULT_BASE_URL, SMS_PATH),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Point all three endpoints at a different host, keeping the
    /// documented API paths. Useful for gateways and test servers.
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.token_endpoint = join_endpoint(&base, TOKEN_PATH);
        self.provision_endpoint = join_endpoint(&base, PROVISION_PATH);
        self.sms_endpoint = join_endpoint(&base, SMS_PATH);
        self
    }

    /// Override the OAuth token endpoint URL.
    pub fn token_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.token_endpoint = endpoint.into();
        self
    }

    /// Override the subscription provisioning endpoint URL.
    pub fn provision_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.provision_endpoint = endpoint.into();
        self
    }

    /// Override the SMS endpoint URL.
    pub fn sms_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.sms_endpoint = endpoint.into();
        self
    }

    /// Set the per-request timeout (default 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TelstraClient`], validating any endpoint overrides.
    pub fn build(self) -> Result<TelstraClient, TelstraError> {
        for endpoint in [
            &self.token_endpoint,
            &self.provision_endpoint,
            &self.sms_endpoint,
        ] {
            url::Url::parse(endpoint)?;
        }

        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TelstraError::Transport(Box::new(err)))?;

        Ok(TelstraClient {
            credentials: self.credentials,
            token_endpoint: self.token_endpoint,
            provision_endpoint: self.provision_endpoint,
            sms_endpoint: self.sms_endpoint,
            http: Arc::new(ReqwestTransport {
                client,
                timeout: self.timeout,
            }),
        })
    }
}

#[derive(Clone)]
/// High-level client for Telstra's Messaging API v2.
///
/// This type orchestrates the full flow of sending a message:
/// - `v2/oauth/token` exchanges client credentials for a bearer token,
/// - `v2/messages/provisioning/subscriptions` yields a dedicated sending number,
/// - `v2/messages/sms` delivers the message itself.
pub struct TelstraClient {
    credentials: Credentials,
    token_endpoint: String,
    provision_endpoint: String,
    sms_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl TelstraClient {
    /// Create a client using the production endpoints.
    ///
    /// For more customization, use [`TelstraClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            token_endpoint: join_endpoint(DEFAULT_BASE_URL, TOKEN_PATH),
            provision_endpoint: join_endpoint(DEFAULT_BASE_URL, PROVISION_PATH),
            sms_endpoint: join_endpoint(DEFAULT_BASE_URL, SMS_PATH),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                timeout: DEFAULT_TIMEOUT,
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> TelstraClientBuilder {
        TelstraClientBuilder::new(credentials)
    }

    /// Exchange the client credentials for a bearer token.
    ///
    /// Errors:
    /// - Returns [`TelstraError::Auth`] when the endpoint answers with
    ///   anything other than HTTP 200,
    /// - [`TelstraError::TokenParse`] when the token response is malformed.
    pub async fn request_token(&self) -> Result<AccessGrant, TelstraError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_form_params(&mut params);
        params.push((
            crate::transport::GRANT_TYPE_FIELD.to_owned(),
            crate::transport::GRANT_TYPE_CLIENT_CREDENTIALS.to_owned(),
        ));

        let response = self
            .http
            .post_form(&self.token_endpoint, params)
            .await
            .map_err(TelstraError::Transport)?;

        if response.status != 200 {
            return Err(TelstraError::Auth {
                status: response.status,
                body: non_empty_body(response.body),
            });
        }

        crate::transport::decode_token_json_response(&response.body)
            .map_err(|err| TelstraError::TokenParse(Box::new(err)))
    }

    /// Provision (or re-use) the dedicated number attached to the account.
    ///
    /// The endpoint answers HTTP 201 when a subscription is created and may
    /// answer HTTP 204 for an already-active one.
    ///
    /// Errors:
    /// - Returns [`TelstraError::Provision`] for any other HTTP status,
    /// - [`TelstraError::SubscriptionParse`] when no usable subscription
    ///   comes back.
    pub async fn provision_number(
        &self,
        grant: &AccessGrant,
    ) -> Result<ProvisionedSubscription, TelstraError> {
        let response = self
            .http
            .post_json(
                &self.provision_endpoint,
                &grant.authorization(),
                crate::transport::empty_subscription_body(),
            )
            .await
            .map_err(TelstraError::Transport)?;

        if !matches!(response.status, 201 | 204) {
            return Err(TelstraError::Provision {
                status: response.status,
                body: non_empty_body(response.body),
            });
        }

        crate::transport::decode_subscription_json_response(&response.body)
            .map_err(|err| TelstraError::SubscriptionParse(Box::new(err)))
    }

    /// Deliver an already assembled message.
    ///
    /// Errors:
    /// - Returns [`TelstraError::Send`] when the endpoint answers with
    ///   anything other than HTTP 201.
    pub async fn send_message(
        &self,
        grant: &AccessGrant,
        message: &OutboundMessage,
    ) -> Result<(), TelstraError> {
        let response = self
            .http
            .post_json(
                &self.sms_endpoint,
                &grant.authorization(),
                crate::transport::encode_send_sms_json(message),
            )
            .await
            .map_err(TelstraError::Transport)?;

        if response.status != 201 {
            return Err(TelstraError::Send {
                status: response.status,
                body: non_empty_body(response.body),
            });
        }

        Ok(())
    }

    /// Send a text message end to end: token, subscription, delivery.
    ///
    /// The stages run strictly in order and the first failure aborts the
    /// rest, so at most one message leaves the account per call.
    pub async fn send_text(
        &self,
        to: DestinationNumber,
        body: MessageText,
    ) -> Result<(), TelstraError> {
        let grant = self.request_token().await?;
        let subscription = self.provision_number(&grant).await?;
        let from = SendingNumber::new(subscription.destination_address)
            .map_err(|err| TelstraError::SubscriptionParse(Box::new(err)))?;
        let message = OutboundMessage::new(to, body, from);
        self.send_message(&grant, &message).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    const TOKEN_JSON: &str = r#"{ "access_token": "tok-123", "token_type": "Bearer" }"#;
    const SUBSCRIPTION_JSON: &str = r#"{ "destinationAddress": "+61472880123" }"#;

    #[derive(Debug, Clone, PartialEq)]
    enum RecordedRequest {
        Form {
            url: String,
            params: Vec<(String, String)>,
        },
        Json {
            url: String,
            authorization: String,
            body: serde_json::Value,
        },
    }

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<RecordedRequest>,
        responses: VecDeque<(u16, String)>,
    }

    impl FakeTransport {
        fn new<I>(responses: I) -> Self
        where
            I: IntoIterator<Item = (u16, &'static str)>,
        {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    responses: responses
                        .into_iter()
                        .map(|(status, body)| (status, body.to_owned()))
                        .collect(),
                })),
            }
        }

        fn requests(&self) -> Vec<RecordedRequest> {
            self.state.lock().unwrap().requests.clone()
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_form<'a>(
            &'a self,
            url: &'a str,
            params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.requests.push(RecordedRequest::Form {
                    url: url.to_owned(),
                    params,
                });
                let (status, body) = state
                    .responses
                    .pop_front()
                    .unwrap_or((500, "unscripted request".to_owned()));
                Ok(HttpResponse { status, body })
            })
        }

        fn post_json<'a>(
            &'a self,
            url: &'a str,
            authorization: &'a str,
            body: serde_json::Value,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.requests.push(RecordedRequest::Json {
                    url: url.to_owned(),
                    authorization: authorization.to_owned(),
                    body,
                });
                let (status, body) = state
                    .responses
                    .pop_front()
                    .unwrap_or((500, "unscripted request".to_owned()));
                Ok(HttpResponse { status, body })
            })
        }
    }

    fn credentials() -> Credentials {
        Credentials::new("test_id", "test_secret").unwrap()
    }

    fn make_client(transport: FakeTransport) -> TelstraClient {
        TelstraClient {
            credentials: credentials(),
            token_endpoint: "https://example.invalid/v2/oauth/token".to_owned(),
            provision_endpoint: "https://example.invalid/v2/messages/provisioning/subscriptions"
                .to_owned(),
            sms_endpoint: "https://example.invalid/v2/messages/sms".to_owned(),
            http: Arc::new(transport),
        }
    }

    fn destination() -> DestinationNumber {
        DestinationNumber::new("0412345678").unwrap()
    }

    fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    #[tokio::test]
    async fn send_text_runs_the_three_stages_in_order() {
        let transport = FakeTransport::new([
            (200, TOKEN_JSON),
            (201, SUBSCRIPTION_JSON),
            (201, r#"{ "messages": [] }"#),
        ]);
        let client = make_client(transport.clone());

        client
            .send_text(destination(), MessageText::new("hello").unwrap())
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);

        match &requests[0] {
            RecordedRequest::Form { url, params } => {
                assert_eq!(url, "https://example.invalid/v2/oauth/token");
                assert_param(params, "client_id", "test_id");
                assert_param(params, "client_secret", "test_secret");
                assert_param(params, "grant_type", "client_credentials");
            }
            other => panic!("expected form request, got: {other:?}"),
        }

        match &requests[1] {
            RecordedRequest::Json {
                url,
                authorization,
                body,
            } => {
                assert_eq!(
                    url,
                    "https://example.invalid/v2/messages/provisioning/subscriptions"
                );
                assert_eq!(authorization, "Bearer tok-123");
                assert_eq!(body, &serde_json::json!({}));
            }
            other => panic!("expected json request, got: {other:?}"),
        }

        match &requests[2] {
            RecordedRequest::Json {
                url,
                authorization,
                body,
            } => {
                assert_eq!(url, "https://example.invalid/v2/messages/sms");
                assert_eq!(authorization, "Bearer tok-123");
                assert_eq!(
                    body,
                    &serde_json::json!({
                        "to": "0412345678",
                        "body": "hello",
                        "from": "+61472880123"
                    })
                );
            }
            other => panic!("expected json request, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn token_failure_aborts_before_provisioning() {
        let transport = FakeTransport::new([(400, "invalid client")]);
        let client = make_client(transport.clone());

        let err = client
            .send_text(destination(), MessageText::new("hello").unwrap())
            .await
            .unwrap_err();

        match err {
            TelstraError::Auth { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body.as_deref(), Some("invalid client"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn token_endpoint_requires_exactly_http_200() {
        // 201 would be a success elsewhere; the token endpoint must say 200.
        let transport = FakeTransport::new([(201, TOKEN_JSON)]);
        let client = make_client(transport);

        let err = client.request_token().await.unwrap_err();
        assert!(matches!(err, TelstraError::Auth { status: 201, .. }));
    }

    #[tokio::test]
    async fn malformed_token_response_is_a_parse_error() {
        let transport = FakeTransport::new([(200, "{ not json }")]);
        let client = make_client(transport);

        let err = client.request_token().await.unwrap_err();
        assert!(matches!(err, TelstraError::TokenParse(_)));
    }

    #[tokio::test]
    async fn token_response_without_access_token_is_a_parse_error() {
        let transport = FakeTransport::new([(200, r#"{ "token_type": "Bearer" }"#)]);
        let client = make_client(transport);

        let err = client.request_token().await.unwrap_err();
        assert!(matches!(err, TelstraError::TokenParse(_)));
    }

    #[tokio::test]
    async fn provisioning_failure_aborts_before_sending() {
        let transport = FakeTransport::new([(200, TOKEN_JSON), (401, "token expired")]);
        let client = make_client(transport.clone());

        let err = client
            .send_text(destination(), MessageText::new("hello").unwrap())
            .await
            .unwrap_err();

        match err {
            TelstraError::Provision { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body.as_deref(), Some("token expired"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn provisioning_accepts_204_with_a_subscription_body() {
        let transport = FakeTransport::new([(204, SUBSCRIPTION_JSON)]);
        let client = make_client(transport);

        let grant = AccessGrant {
            access_token: "tok-123".into(),
            token_type: "Bearer".into(),
        };
        let subscription = client.provision_number(&grant).await.unwrap();
        assert_eq!(subscription.destination_address, "+61472880123");
    }

    #[tokio::test]
    async fn provisioning_without_a_body_is_a_parse_error() {
        let transport = FakeTransport::new([(204, "")]);
        let client = make_client(transport);

        let grant = AccessGrant {
            access_token: "tok-123".into(),
            token_type: "Bearer".into(),
        };
        let err = client.provision_number(&grant).await.unwrap_err();
        assert!(matches!(err, TelstraError::SubscriptionParse(_)));
    }

    #[tokio::test]
    async fn blank_subscription_address_aborts_before_sending() {
        let transport = FakeTransport::new([
            (200, TOKEN_JSON),
            (201, r#"{ "destinationAddress": "  " }"#),
        ]);
        let client = make_client(transport.clone());

        let err = client
            .send_text(destination(), MessageText::new("hello").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, TelstraError::SubscriptionParse(_)));
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn send_failure_carries_status_and_body() {
        let transport = FakeTransport::new([
            (200, TOKEN_JSON),
            (201, SUBSCRIPTION_JSON),
            (400, r#"{ "message": "TO-MSISDN-NOT-VALID" }"#),
        ]);
        let client = make_client(transport.clone());

        let err = client
            .send_text(destination(), MessageText::new("hello").unwrap())
            .await
            .unwrap_err();

        match err {
            TelstraError::Send { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body.as_deref(), Some(r#"{ "message": "TO-MSISDN-NOT-VALID" }"#));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn sms_endpoint_requires_exactly_http_201() {
        // A 200 here means the carrier did something other than queue the message.
        let transport =
            FakeTransport::new([(200, TOKEN_JSON), (201, SUBSCRIPTION_JSON), (200, "ok")]);
        let client = make_client(transport);

        let err = client
            .send_text(destination(), MessageText::new("hello").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, TelstraError::Send { status: 200, .. }));
    }

    #[tokio::test]
    async fn empty_failure_bodies_are_mapped_to_none() {
        let transport = FakeTransport::new([(503, "   ")]);
        let client = make_client(transport);

        let err = client.request_token().await.unwrap_err();
        assert!(matches!(
            err,
            TelstraError::Auth {
                status: 503,
                body: None
            }
        ));
    }

    #[test]
    fn credentials_constructor_validates_inputs() {
        assert!(Credentials::new("  ", "secret").is_err());
        assert!(Credentials::new("id", "").is_err());
        assert!(Credentials::new("id", "secret").is_ok());
    }

    #[test]
    fn builder_base_url_rewires_all_endpoints() {
        let client = TelstraClient::builder(credentials())
            .base_url("https://example.invalid/")
            .build()
            .unwrap();
        assert_eq!(
            client.token_endpoint,
            "https://example.invalid/v2/oauth/token"
        );
        assert_eq!(
            client.provision_endpoint,
            "https://example.invalid/v2/messages/provisioning/subscriptions"
        );
        assert_eq!(client.sms_endpoint, "https://example.invalid/v2/messages/sms");
    }

    #[test]
    fn builder_endpoint_overrides_are_applied() {
        let client = TelstraClient::builder(credentials())
            .token_endpoint("https://example.invalid/token")
            .provision_endpoint("https://example.invalid/provision")
            .sms_endpoint("https://example.invalid/sms")
            .build()
            .unwrap();
        assert_eq!(client.token_endpoint, "https://example.invalid/token");
        assert_eq!(client.provision_endpoint, "https://example.invalid/provision");
        assert_eq!(client.sms_endpoint, "https://example.invalid/sms");
    }

    #[test]
    fn builder_rejects_invalid_endpoint_overrides() {
        let result = TelstraClient::builder(credentials())
            .sms_endpoint("not a url")
            .build();
        assert!(matches!(result, Err(TelstraError::Endpoint(_))));
    }

    #[test]
    fn default_endpoints_point_at_the_production_host() {
        let client = TelstraClient::new(credentials());
        assert_eq!(client.token_endpoint, "https://tapi.telstra.com/v2/oauth/token");
        assert_eq!(
            client.provision_endpoint,
            "https://tapi.telstra.com/v2/messages/provisioning/subscriptions"
        );
        assert_eq!(client.sms_endpoint, "https://tapi.telstra.com/v2/messages/sms");
    }
}
