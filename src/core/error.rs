use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// `fetch` itself failed (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// The backend answered with `success: false`.
    #[error("API error: {0}")]
    Api(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("session storage error: {0}")]
    Storage(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Short Portuguese text for the page error banner.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => "Não foi possível conectar ao servidor.".to_string(),
            AppError::Http { status: 401 | 403, .. } => "Sessão expirada. Entre novamente.".to_string(),
            AppError::Http { status: 404, .. } => "Recurso não encontrado.".to_string(),
            AppError::Http { status, .. } => format!("O servidor respondeu com erro {status}."),
            AppError::Api(message) => message.clone(),
            AppError::Decode(_) => "Resposta inesperada do servidor.".to_string(),
            AppError::Storage(_) | AppError::Config(_) => "Erro de configuração local.".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Http { status: 401 | 403, .. })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}
