use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, AppResult};

/// `{ success, data, message? }` wrapper every backend response uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_result(self) -> AppResult<T> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(AppError::Decode("response has no data".to_string())),
            (false, _) => Err(AppError::Api(
                self.message.unwrap_or_else(|| "request rejected".to_string()),
            )),
        }
    }
}
