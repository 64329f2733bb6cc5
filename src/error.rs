use serde::Serialize;

static CREDENTIAL_HINT: &str =
    "check that the github token is valid and can read the repository contents";

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("github token is not configured. set {env} in the environment")]
    ConfigMissing { env: String },

    #[error("github returned an error ({status}): {reason}")]
    UpstreamStatus {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("unexpected response shape from github: expected an array of entries")]
    UpstreamShape,

    #[error("{0}")]
    Transport(String),
}

impl ListingError {
    /// The hint shown next to the message, for everything after the credential check
    pub fn details(&self) -> Option<&'static str> {
        match self {
            Self::ConfigMissing { .. } => None,
            _ => Some(CREDENTIAL_HINT),
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
            details: self.details(),
        }
    }
}

impl From<reqwest::Error> for ListingError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(format!("cannot reach github: {}", err))
    }
}

impl From<serde_json::Error> for ListingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("invalid json from github: {}", err))
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'static str>,
}
