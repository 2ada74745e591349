use devsim::device::{CommandError, extract_command};

#[test]
fn test_extract_from_json_object() {
    let token = extract_command(b"{\"command\":\"reboot\"}").unwrap();
    assert_eq!(token, "reboot");
}

#[test]
fn test_extract_from_raw_text() {
    let token = extract_command(b"reboot").unwrap();
    assert_eq!(token, "reboot");
}

#[test]
fn test_extract_trims_raw_text() {
    let token = extract_command(b"  reboot \r\n").unwrap();
    assert_eq!(token, "reboot");
}

#[test]
fn test_extract_from_bare_json_string() {
    let token = extract_command(b"\"reboot\"").unwrap();
    assert_eq!(token, "reboot");
}

#[test]
fn test_extract_preserves_escaped_characters() {
    // The token contains a literal quote; a substring scan would stop at it
    let token = extract_command(br#"{"command":"re\"boot"}"#).unwrap();
    assert_eq!(token, "re\"boot");
}

#[test]
fn test_extract_ignores_command_inside_string_value() {
    // "command" appearing inside another value must not be picked up
    let body = br#"{"note":"set \"command\": later","command":"start"}"#;
    let token = extract_command(body).unwrap();
    assert_eq!(token, "start");
}

#[test]
fn test_extract_unicode_token() {
    let token = extract_command("{\"command\":\"ᄀᄀᄀ\"}".as_bytes()).unwrap();
    assert_eq!(token, "ᄀᄀᄀ");
}

#[test]
fn test_empty_object_is_missing_command() {
    assert_eq!(extract_command(b"{}"), Err(CommandError::MissingCommand));
}

#[test]
fn test_non_string_command_is_missing() {
    assert_eq!(
        extract_command(b"{\"command\":123}"),
        Err(CommandError::MissingCommand)
    );
}

#[test]
fn test_json_array_is_missing_command() {
    assert_eq!(
        extract_command(b"[\"reboot\"]"),
        Err(CommandError::MissingCommand)
    );
}

#[test]
fn test_empty_body() {
    assert_eq!(extract_command(b""), Err(CommandError::Empty));
}

#[test]
fn test_whitespace_only_body() {
    assert_eq!(extract_command(b"   \r\n"), Err(CommandError::Empty));
}

#[test]
fn test_invalid_utf8_body() {
    assert_eq!(
        extract_command(&[0xff, 0xfe, 0x01]),
        Err(CommandError::NotText)
    );
}
