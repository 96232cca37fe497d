//! Form-style body encoding for webhook requests.

use super::Payload;

/// Encodes a payload as an `&`-joined list of `key=value` pairs.
///
/// Values are written verbatim. No percent-encoding is applied, so a value
/// containing `&` or `=` appears unchanged in the output and receivers must
/// tolerate it. An empty payload encodes to an empty string.
///
/// # Example
///
/// ```
/// use twin_mills::webhook::{Payload, encode};
///
/// let payload = Payload::new().with("a", "1").with("b", "2");
/// assert_eq!(encode(&payload), "a=1&b=2");
/// ```
#[must_use]
pub fn encode(payload: &Payload) -> String {
    payload
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}
