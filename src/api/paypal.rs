use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, ClientBuilder, Response};
use tracing::{debug, info};

use super::credentials::{Credentials, Secret};
use super::environment::Environment;
use super::error::ApiError;
use super::gateway::PayoutGateway;
use super::types::{ApiErrorBody, PayoutReceipt, PayoutRequest, PayoutResponse, TokenResponse};

const TOKEN_PATH: &str = "/v1/oauth2/token";
const PAYOUTS_PATH: &str = "/v1/payments/payouts";

/// Connection settings for the payout API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub environment: Environment,
    pub credentials: Credentials,
    /// Overrides the environment's base URL (test servers, proxies)
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(environment: Environment, credentials: Credentials) -> Self {
        Self {
            environment,
            credentials,
            base_url: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
            .trim_end_matches('/')
    }
}

/// Payout API client holding one bearer token for the whole run
#[derive(Debug, Clone)]
pub struct PaypalClient {
    http_client: Client,
    base_url: String,
    access_token: Secret,
}

impl PaypalClient {
    /// Build the HTTP client and authenticate once with client credentials
    pub async fn connect(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url().to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidConfig(format!(
                "base URL must be http(s): {}",
                base_url
            )));
        }

        let http_client = ClientBuilder::new().timeout(config.timeout).build()?;
        let access_token = Self::authenticate(&http_client, &base_url, &config.credentials).await?;

        info!(environment = %config.environment, base_url = %base_url, "Authenticated with payout API");

        Ok(Self {
            http_client,
            base_url,
            access_token,
        })
    }

    async fn authenticate(
        http_client: &Client,
        base_url: &str,
        credentials: &Credentials,
    ) -> Result<Secret, ApiError> {
        let response = http_client
            .post(format!("{}{}", base_url, TOKEN_PATH))
            .basic_auth(
                credentials.client_id(),
                Some(credentials.client_secret().expose()),
            )
            .header(ACCEPT, "application/json")
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response.json().await?;
        debug!(
            token_type = token.token_type.as_deref().unwrap_or("unknown"),
            expires_in = token.expires_in,
            "Received access token"
        );

        Ok(Secret::new(token.access_token))
    }

    async fn read_receipt(response: Response) -> Result<PayoutReceipt, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return serde_json::from_str::<PayoutResponse>(&body)
                .map(PayoutReceipt::from)
                .map_err(|_| ApiError::UnexpectedResponse {
                    status: status.as_u16(),
                    body,
                });
        }

        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(error) if !error.name.is_empty() || !error.message.is_empty() => {
                Err(ApiError::Rejected {
                    status: status.as_u16(),
                    error,
                })
            }
            _ => Err(ApiError::UnexpectedResponse {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

#[async_trait]
impl PayoutGateway for PaypalClient {
    async fn create_payout(&self, request: &PayoutRequest) -> Result<PayoutReceipt, ApiError> {
        debug!(
            sender_batch_id = %request.sender_batch_header.sender_batch_id,
            items = request.items.len(),
            "Sending payout request"
        );

        let response = self
            .http_client
            .post(format!("{}{}", self.base_url, PAYOUTS_PATH))
            .bearer_auth(self.access_token.expose())
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        Self::read_receipt(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: Option<&str>) -> ClientConfig {
        let mut config = ClientConfig::new(Environment::Sandbox, Credentials::new("id", "secret"));
        config.base_url = base_url.map(str::to_string);
        config
    }

    #[test]
    fn base_url_follows_environment() {
        assert_eq!(config(None).base_url(), "https://api-m.sandbox.paypal.com");

        let mut live = config(None);
        live.environment = Environment::Live;
        assert_eq!(live.base_url(), "https://api-m.paypal.com");
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        assert_eq!(
            config(Some("http://127.0.0.1:8080/")).base_url(),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn default_timeout_is_thirty_seconds() {
        assert_eq!(config(None).timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn connect_rejects_non_http_base_url() {
        let result = PaypalClient::connect(&config(Some("ftp://example.com"))).await;
        assert!(matches!(result, Err(ApiError::InvalidConfig(_))));
    }
}
