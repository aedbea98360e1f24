use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried inside an access token.
///
/// Timestamps are JWT NumericDate values (seconds since the epoch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenPayload {
    #[serde(rename = "jti")]
    pub token_id: Uuid,
    #[serde(rename = "sub")]
    pub subject: String,
    #[serde(rename = "iat")]
    pub issued_at: i64,
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl AccessTokenPayload {
    /// Fresh payload with a new token id. `ttl` must be positive.
    pub fn new(subject: impl Into<String>, now: DateTime<Utc>, ttl: TimeDelta) -> Self {
        let issued_at = now.timestamp();
        Self {
            token_id: Uuid::new_v4(),
            subject: subject.into(),
            issued_at,
            expires_at: issued_at + ttl.num_seconds(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.expires_at
    }
}
