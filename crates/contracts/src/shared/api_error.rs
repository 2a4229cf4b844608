use serde::{Deserialize, Serialize};

/// Тело ответа API с ошибкой
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
