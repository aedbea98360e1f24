/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - Hand the subject verified by the auth gate to handlers
 * - axum-specific code stays in core; the type itself lives in types
 *
 * Public API:
 * - AuthCtx
 * - AuthCtxExtractor
 */

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::AuthCtx;
