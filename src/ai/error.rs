use super::gateway::FallbackReason;

/// Everything that can go wrong between the gateway and the text service.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("API key not configured")]
    MissingCredential,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    pub fn reason(&self) -> FallbackReason {
        match self {
            GatewayError::MissingCredential => FallbackReason::MissingCredential,
            GatewayError::Transport(_) | GatewayError::Status { .. } => FallbackReason::Transport,
            GatewayError::MalformedResponse(_) => FallbackReason::MalformedResponse,
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::MalformedResponse(err.to_string())
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
