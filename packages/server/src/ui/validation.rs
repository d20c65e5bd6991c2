//! Request payload validation.
//!
//! Schema checks for inbound creation payloads. Payloads arrive as untyped
//! JSON; checks are non-short-circuiting so the client sees every field
//! error at once, in field order.

use serde_json::Value;

use crate::domain::{MessageKind, MessageText, ParticipantName};

/// A validated message-creation payload
#[derive(Debug)]
pub struct ValidatedMessage {
    pub to: ParticipantName,
    pub text: MessageText,
    pub kind: MessageKind,
}

/// Validate a participant-creation payload (`{name}`)
pub fn validate_registration(payload: &Value) -> Result<ParticipantName, Vec<String>> {
    let mut errors = Vec::new();
    let name = check_string_field(payload, "name", &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ParticipantName::new(name.expect("field checked above")).expect("checked non-empty"))
}

/// Validate a message-creation payload (`{to, text, type}`)
pub fn validate_message(payload: &Value) -> Result<ValidatedMessage, Vec<String>> {
    let mut errors = Vec::new();
    let to = check_string_field(payload, "to", &mut errors);
    let text = check_string_field(payload, "text", &mut errors);
    let kind = match check_string_field(payload, "type", &mut errors) {
        Some(raw) => match raw.as_str() {
            "message" => Some(MessageKind::Message),
            "private_message" => Some(MessageKind::PrivateMessage),
            // case-sensitive; "status" is server-generated and never accepted
            _ => {
                errors.push("\"type\" must be one of [message, private_message]".to_string());
                None
            }
        },
        None => None,
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ValidatedMessage {
        to: ParticipantName::new(to.expect("field checked above")).expect("checked non-empty"),
        text: MessageText::new(text.expect("field checked above")).expect("checked non-empty"),
        kind: kind.expect("field checked above"),
    })
}

/// Check a required string field, collecting errors instead of returning early
fn check_string_field(payload: &Value, field: &str, errors: &mut Vec<String>) -> Option<String> {
    match payload.get(field) {
        None | Some(Value::Null) => {
            errors.push(format!("\"{field}\" is required"));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.push(format!("\"{field}\" is not allowed to be empty"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(format!("\"{field}\" must be a string"));
            None
        }
    }
}
