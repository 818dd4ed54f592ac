use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::extract::{ApiBody, BodyRejection};
use crate::llm_client::prompts::SYSTEM_PROMPT;
use crate::llm_client::ChatCompletionRequest;
use crate::models::chat::{ChatMessage, ChatReply};
use crate::state::AppState;
use crate::validation::validate_chat_message;

const INVALID_BODY: &str = "Invalid request body";

/// POST /api/chat
///
/// Validates the message, then makes exactly one completion call with the
/// biography prompt as the system turn and the message as the user turn.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Result<ApiBody<ChatMessage>, BodyRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let ApiBody(chat) = body.map_err(|e| {
        tracing::debug!("Chat body rejected: {e}");
        AppError::validation(INVALID_BODY)
    })?;

    if let Err(rule) = validate_chat_message(&chat) {
        tracing::debug!("Chat message rejected: {rule}");
        return Err(AppError::validation(INVALID_BODY));
    }

    let api_key = state
        .config
        .groq_api_key
        .as_deref()
        .ok_or_else(|| AppError::Configuration("GROQ_API_KEY is not set".to_string()))?;

    let request = ChatCompletionRequest::new(SYSTEM_PROMPT, &chat.message);
    let reply = state.llm.complete(api_key, &request).await?;

    Ok(Json(ChatReply { reply }))
}
