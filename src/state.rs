/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - tokens: 発行と検証を同じ secret で行う TokenService
 *   - companies: CompanyStore を包んだ CompanyService
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::{CompanyService, TokenService};

#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub companies: CompanyService,
}

impl AppState {
    pub fn new(tokens: Arc<TokenService>, companies: CompanyService) -> Self {
        Self { tokens, companies }
    }
}
