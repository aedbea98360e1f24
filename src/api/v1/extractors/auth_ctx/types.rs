/*
 * Responsibility
 * - The "authenticated request" context visible to handlers
 * - The auth gate verifies the cookie and stores this in request extensions;
 *   handlers only ever receive this type
 */

use uuid::Uuid;

use crate::services::token::AccessTokenPayload;

/// Context attached to requests that passed the auth gate.
///
/// - `subject` is the login name the token was issued to
/// - `token_id` is the per-issuance `jti`, useful for correlating audit logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCtx {
    pub subject: String,
    pub token_id: Uuid,
}

impl From<AccessTokenPayload> for AuthCtx {
    fn from(payload: AccessTokenPayload) -> Self {
        Self {
            subject: payload.subject,
            token_id: payload.token_id,
        }
    }
}
