/*
 * Responsibility
 * - v1 handler が受け取る extractor の公開口
 */
pub mod auth_ctx;

pub use auth_ctx::{AuthCtx, AuthCtxExtractor};
