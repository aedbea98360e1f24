/*
 * Responsibility
 * - POST /login の request DTO と、message だけを返す汎用 response
 */
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns the username the token will be issued to.
    pub fn validate(self) -> Result<String, AppError> {
        let username = self.username.filter(|u| !u.trim().is_empty());
        let password = self.password.filter(|p| !p.is_empty());

        match (username, password) {
            (Some(username), Some(_)) => Ok(username),
            (username, password) => {
                let missing: Vec<&str> = [
                    ("username", username.is_none()),
                    ("password", password.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
                Err(AppError::bad_request(format!(
                    "field validation error, missing fields: [{}]",
                    missing.join(", ")
                )))
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
