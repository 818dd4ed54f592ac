use axum::Json;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{ApiBody, BodyRejection};
use crate::models::contact::{ContactAck, ContactSubmission};
use crate::validation::validate_contact;

const INVALID_CONTACT: &str = "Invalid contact form data";

/// POST /api/contact
///
/// Nothing is stored. The submission is written to the log and acknowledged.
pub async fn handle_contact(
    body: Result<ApiBody<ContactSubmission>, BodyRejection>,
) -> Result<Json<ContactAck>, AppError> {
    let ApiBody(contact) = body.map_err(|e| {
        tracing::debug!("Contact body rejected: {e}");
        AppError::validation(INVALID_CONTACT)
    })?;

    validate_contact(&contact)
        .map_err(|rule| AppError::validation_with_details(INVALID_CONTACT, rule))?;

    info!(
        name = %contact.name,
        email = %contact.email,
        subject = %contact.subject,
        message = %contact.message,
        "Contact form submission"
    );

    Ok(Json(ContactAck {
        message: "Contact form submitted successfully",
    }))
}
