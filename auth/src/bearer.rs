/// Authentication scheme expected in the `Authorization` header.
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from an `Authorization` header value.
///
/// The value must be exactly `Bearer <token>`: the scheme is case-sensitive,
/// followed by a single space, and the token is non-empty with no
/// whitespace. Anything else yields `None`.
pub fn extract_bearer_token(header_value: &str) -> Option<&str> {
    let token = header_value
        .strip_prefix(BEARER_SCHEME)?
        .strip_prefix(' ')?;

    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return None;
    }

    Some(token)
}
