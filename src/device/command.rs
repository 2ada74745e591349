use serde_json::Value;
use std::fmt;

/// Reasons a command payload could not be turned into a command token.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The payload was empty or whitespace only.
    Empty,
    /// The payload was neither JSON nor valid UTF-8 text.
    NotText,
    /// The payload was JSON but carried no usable `command` string.
    MissingCommand,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "Empty command payload"),
            CommandError::NotText => write!(f, "Command payload is not valid UTF-8"),
            CommandError::MissingCommand => write!(f, "No usable command in payload"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Extracts a command token from a request body.
///
/// A JSON object must carry a string `command` field; a bare JSON string is
/// taken as the token itself. Non-JSON bodies are interpreted as a verbatim
/// token after trimming surrounding whitespace.
pub fn extract_command(body: &[u8]) -> Result<String, CommandError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => match fields.get("command") {
            Some(Value::String(token)) => Ok(token.clone()),
            _ => Err(CommandError::MissingCommand),
        },
        Ok(Value::String(token)) => Ok(token),
        Ok(_) => Err(CommandError::MissingCommand),
        Err(_) => {
            let text = std::str::from_utf8(body).map_err(|_| CommandError::NotText)?;
            let token = text.trim();
            if token.is_empty() {
                Err(CommandError::Empty)
            } else {
                Ok(token.to_string())
            }
        }
    }
}
