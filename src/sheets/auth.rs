use crate::{Error, Result};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::info;

const SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME: Duration = Duration::hours(1);
// Tokens this close to expiry are refreshed ahead of time
const EXPIRY_MARGIN: Duration = Duration::seconds(60);

/// The parts of a Google service account key file we care about.
#[derive(Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.into()
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> Result<ServiceAccountKey> {
        serde_json::from_str(json).map_err(|e| {
            Error::Config(format!(
                "GOOGLE_CREDENTIALS is not a valid service account key: {e}"
            ))
        })
    }
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

struct AccessToken {
    value: String,
    expires_at: OffsetDateTime,
}

/// Exchanges signed service account assertions for OAuth access tokens and
/// keeps the last one around until it's about to expire.
///
/// Only one exchange runs at a time. Callers arriving during a refresh wait
/// for it and reuse its token.
pub struct TokenProvider {
    client_email: String,
    token_uri: String,
    key: EncodingKey,
    http: reqwest::Client,
    cached: Mutex<Option<AccessToken>>,
}

impl TokenProvider {
    pub fn new(key: ServiceAccountKey, http: reqwest::Client) -> Result<TokenProvider> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(|e| {
            Error::Config(format!("Invalid service account private key: {e}"))
        })?;
        Ok(TokenProvider {
            client_email: key.client_email,
            token_uri: key.token_uri,
            key: encoding_key,
            http,
            cached: Mutex::new(None),
        })
    }

    pub async fn access_token(&self) -> Result<String> {
        // Held across the exchange
        let mut cached = self.cached.lock().await;
        let now = OffsetDateTime::now_utc();
        if let Some(token) = cached
            .as_ref()
            .filter(|it| it.expires_at - EXPIRY_MARGIN > now)
        {
            return Ok(token.value.clone());
        }
        let token = self.fetch(now).await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    async fn fetch(&self, now: OffsetDateTime) -> Result<AccessToken> {
        let claims = Claims {
            iss: &self.client_email,
            scope: SCOPE,
            aud: &self.token_uri,
            iat: now.unix_timestamp(),
            exp: (now + ASSERTION_LIFETIME).unix_timestamp(),
        };
        let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.key)?;

        let response = self
            .http
            .post(&self.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::SheetsApi(format!(
                "Token exchange failed with {status}: {body}"
            )));
        }

        let token: TokenResponse = response.json().await?;
        info!(expires_in = token.expires_in, "Obtained Sheets API access token");

        Ok(AccessToken {
            value: token.access_token,
            expires_at: now + Duration::seconds(token.expires_in),
        })
    }
}
