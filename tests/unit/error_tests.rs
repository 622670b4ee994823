//! Unit tests for `AppError` display format and caller-facing messages.

use switchboard::AppError;

#[test]
fn display_uses_lowercase_kind_prefix() {
    let cases = [
        (AppError::Config("x".into()), "config: x"),
        (AppError::Unauthorized("x".into()), "unauthorized: x"),
        (AppError::SessionNotFound("x".into()), "session not found: x"),
        (AppError::BadRequest("x".into()), "bad request: x"),
        (AppError::UnknownOperation("x".into()), "unknown operation: x"),
        (AppError::UnknownResource("x".into()), "unknown resource: x"),
        (AppError::InvalidParams("x".into()), "invalid params: x"),
        (AppError::Upstream("x".into()), "upstream: x"),
        (AppError::Mcp("x".into()), "mcp: x"),
        (AppError::Io("x".into()), "io: x"),
    ];
    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn unknown_operation_user_message_names_the_tool() {
    let err = AppError::UnknownOperation("does_not_exist".into());
    assert_eq!(err.user_message(), "Unknown tool: does_not_exist");
}

#[test]
fn unknown_resource_user_message_names_the_uri() {
    let err = AppError::UnknownResource("frontapp://nope".into());
    assert_eq!(err.user_message(), "Unknown resource: frontapp://nope");
}

#[test]
fn upstream_user_message_is_passed_through() {
    let err = AppError::Upstream("Conversation not found".into());
    assert_eq!(err.user_message(), "Conversation not found");
}

#[test]
fn io_errors_convert() {
    let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(err.to_string().starts_with("io:"));
}

#[test]
fn toml_errors_convert_to_config() {
    let parse = toml::from_str::<toml::Value>("= broken").expect_err("invalid toml");
    let err: AppError = parse.into();
    assert!(err.to_string().starts_with("config: invalid config"));
}

#[test]
fn implements_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&AppError::Mcp("closed".into()));
}
