/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - chain: decorator composition, auth: access-token gate,
 *   error_handler: AppError → HTTP, http/security_headers: router-wide layers
 */
pub mod auth;
pub mod chain;
pub mod error_handler;
pub mod http;
pub mod security_headers;
