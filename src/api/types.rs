//! API request and response types

use crate::dialogue::Reply;
use serde::{Deserialize, Serialize};

/// Free text typed by the user
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

/// A button press, carrying the button's callback data
#[derive(Debug, Deserialize)]
pub struct CallbackRequest {
    pub data: String,
}

/// Replies produced by one event, in display order
#[derive(Debug, Serialize)]
pub struct RepliesResponse {
    pub replies: Vec<Reply>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
