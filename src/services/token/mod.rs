//! Stateless access tokens: issue on login, verify at the auth gate.
pub mod payload;
pub mod service;

pub use payload::AccessTokenPayload;
pub use service::{
    ACCESS_TOKEN_TTL_SECONDS, InvalidKeySize, MIN_SECRET_KEY_SIZE, TokenService, VerifyError,
};
