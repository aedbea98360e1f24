use chrono::{TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use tracing::{debug, error};

use crate::error::AppError;
use crate::services::token::payload::AccessTokenPayload;

/// Shorter HMAC keys are brute-forceable.
pub const MIN_SECRET_KEY_SIZE: usize = 32;

pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 5 * 60;

#[derive(Debug, Error)]
#[error("invalid key size: must be at least {min} bytes, got {actual}")]
pub struct InvalidKeySize {
    pub min: usize,
    pub actual: usize,
}

/// The two ways a presented token can fail. They are never folded into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// Malformed, foreign algorithm, or signature mismatch.
    #[error("token is invalid")]
    Invalid,
    /// Signature verified but `exp` is in the past.
    #[error("token has expired")]
    Expired,
}

/// Issues and verifies HS256 access tokens with a process-wide secret.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: TimeDelta,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithms", &self.validation.algorithms)
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenService {
    pub fn new(secret_key: impl AsRef<[u8]>) -> Result<Self, InvalidKeySize> {
        let secret_key = secret_key.as_ref();
        if secret_key.len() < MIN_SECRET_KEY_SIZE {
            return Err(InvalidKeySize {
                min: MIN_SECRET_KEY_SIZE,
                actual: secret_key.len(),
            });
        }

        // Only the HMAC family is accepted; anything else in the header is rejected
        // before the signature is looked at.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // Expiry is checked by `verify_access_token` itself, after the signature.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret_key),
            decoding_key: DecodingKey::from_secret(secret_key),
            validation,
            ttl: TimeDelta::seconds(ACCESS_TOKEN_TTL_SECONDS),
        })
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    pub fn create_access_token(&self, subject: &str) -> Result<String, AppError> {
        let payload = AccessTokenPayload::new(subject, Utc::now(), self.ttl);

        debug!(
            token_id = %payload.token_id,
            subject = %payload.subject,
            expires_at = payload.expires_at,
            "issuing access token"
        );

        self.sign(&payload)
    }

    /// Signs an arbitrary payload. `create_access_token` is the normal entry point.
    pub fn sign(&self, payload: &AccessTokenPayload) -> Result<String, AppError> {
        let header = Header::new(Algorithm::HS256);
        jsonwebtoken::encode(&header, payload, &self.encoding_key).map_err(|e| {
            error!(error = %e, "failed to sign access token");
            AppError::internal_wrapped(e, "failed to create access token")
        })
    }

    pub fn verify_access_token(&self, token: &str) -> Result<AccessTokenPayload, VerifyError> {
        let data =
            jsonwebtoken::decode::<AccessTokenPayload>(token, &self.decoding_key, &self.validation)
                .map_err(|e| {
                    debug!(error = %e, "access token rejected");
                    VerifyError::Invalid
                })?;

        let payload = data.claims;
        if payload.is_expired(Utc::now()) {
            return Err(VerifyError::Expired);
        }

        Ok(payload)
    }
}
