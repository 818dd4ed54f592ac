//! Schema checks for the request bodies. Pure functions, no side effects.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::chat::ChatMessage;
use crate::models::contact::ContactSubmission;

pub const MESSAGE_EMPTY: &str = "Message cannot be empty";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const SUBJECT_TOO_SHORT: &str = "Subject must be at least 5 characters";
pub const CONTACT_MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

const NAME_MIN: usize = 2;
const SUBJECT_MIN: usize = 5;
const CONTACT_MESSAGE_MIN: usize = 10;

// The `regex` crate has no lookaround, so the leading-dot and double-dot
// rules are checked separately in `is_valid_email`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Length in characters, not bytes. Input is not trimmed.
fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

/// A chat message only has to be non-empty.
pub fn validate_chat_message(msg: &ChatMessage) -> Result<(), &'static str> {
    if msg.message.is_empty() {
        return Err(MESSAGE_EMPTY);
    }
    Ok(())
}

/// Checks name, email, subject and message in that order and returns the
/// first rule that fails.
pub fn validate_contact(contact: &ContactSubmission) -> Result<(), &'static str> {
    if char_len(&contact.name) < NAME_MIN {
        return Err(NAME_TOO_SHORT);
    }
    if !is_valid_email(&contact.email) {
        return Err(EMAIL_INVALID);
    }
    if char_len(&contact.subject) < SUBJECT_MIN {
        return Err(SUBJECT_TOO_SHORT);
    }
    if char_len(&contact.message) < CONTACT_MESSAGE_MIN {
        return Err(CONTACT_MESSAGE_TOO_SHORT);
    }
    Ok(())
}
