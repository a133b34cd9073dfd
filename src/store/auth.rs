//! OAuth2 JWT-bearer flow for service accounts.
//!
//! A signed RS256 assertion is exchanged at the key's `token_uri` for a
//! short-lived access token. Tokens are cached by `TokenSource` and renewed a
//! minute before they expire.

use super::credentials::ServiceAccountKey;
use crate::errors::{StoreError, StoreResult};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn for_key(key: &ServiceAccountKey, now: DateTime<Utc>) -> Self {
        let iat = now.timestamp();
        Self {
            iss: key.client_email.clone(),
            scope: ServiceAccountKey::scopes().join(" "),
            aud: key.token_uri.clone(),
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    ASSERTION_LIFETIME_SECS
}

#[derive(Debug, Clone)]
pub struct AccessToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(EXPIRY_MARGIN_SECS) < self.expires_at
    }
}

pub fn sign_assertion(key: &ServiceAccountKey, now: DateTime<Utc>) -> StoreResult<String> {
    let mut header = Header::new(Algorithm::RS256);
    if !key.private_key_id.is_empty() {
        header.kid = Some(key.private_key_id.clone());
    }

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| StoreError::InvalidCredentials(e.to_string()))?;

    jsonwebtoken::encode(&header, &Claims::for_key(key, now), &encoding_key)
        .map_err(|e| StoreError::Auth(e.to_string()))
}

/// Hands out bearer tokens for one service account.
pub struct TokenSource {
    key: ServiceAccountKey,
    agent: ureq::Agent,
    cached: Mutex<Option<AccessToken>>,
}

impl TokenSource {
    pub fn new(key: ServiceAccountKey, agent: ureq::Agent) -> Self {
        Self {
            key,
            agent,
            cached: Mutex::new(None),
        }
    }

    pub fn token(&self) -> StoreResult<String> {
        let now = Utc::now();
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(tok) = cached.as_ref()
            && tok.is_fresh(now)
        {
            return Ok(tok.value.clone());
        }

        let fresh = self.exchange(now)?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    fn exchange(&self, now: DateTime<Utc>) -> StoreResult<AccessToken> {
        tracing::debug!(client = %self.key.client_email, "requesting access token");

        let assertion = sign_assertion(&self.key, now)?;
        let response = self
            .agent
            .post(&self.key.token_uri)
            .send_form(&[("grant_type", GRANT_TYPE), ("assertion", &assertion)])
            .map_err(|e| match e {
                ureq::Error::Status(code, resp) => {
                    let body = resp.into_string().unwrap_or_default();
                    StoreError::Auth(format!("token endpoint returned {code}: {body}"))
                }
                ureq::Error::Transport(t) => StoreError::Transport(t.to_string()),
            })?;

        let token: TokenResponse = response
            .into_json()
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        Ok(AccessToken {
            value: token.access_token,
            expires_at: now + Duration::seconds(token.expires_in),
        })
    }
}
