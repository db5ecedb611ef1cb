//! JSONP response unwrapping
//!
//! Some deployments of the backend only answer cross-origin requests with a
//! script of the form `callback({...});`. The payload inside the call is the
//! same JSON the direct variant returns.

use crate::error::ClientError;

/// Extract the JSON argument from a `callback(...)` invocation
pub fn unwrap_jsonp<'a>(body: &'a str, callback: &str) -> Result<&'a str, ClientError> {
    let mut rest = body.trim_start();
    // Some JSONP servers prefix an empty comment to defuse content sniffing
    if let Some(stripped) = rest.strip_prefix("/**/") {
        rest = stripped.trim_start();
    }

    let rest = rest
        .strip_prefix(callback)
        .ok_or_else(|| ClientError::Jsonp(format!("expected call to `{callback}`")))?
        .trim_start();
    let rest = rest
        .strip_prefix('(')
        .ok_or_else(|| ClientError::Jsonp("missing opening parenthesis".to_string()))?;

    let trailer = rest.trim_end().trim_end_matches(';').trim_end();
    let inner = trailer
        .strip_suffix(')')
        .ok_or_else(|| ClientError::Jsonp("missing closing parenthesis".to_string()))?;

    Ok(inner.trim())
}
