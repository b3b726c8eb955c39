use serde::Serialize;

/// Body of every error response and of plain acknowledgements.
#[derive(Debug, Default, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<S: ToString>(message: S) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
