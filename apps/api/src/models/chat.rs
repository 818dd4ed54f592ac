use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}
