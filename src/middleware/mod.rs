use hyper::{HeaderMap, Uri, header::{HeaderValue, HOST}};

#[cfg(test)]
mod tests;

/// Rewrites the Host header to the target origin's authority so the backend
/// sees the request as addressed to itself. Targets without a parseable
/// authority leave the headers untouched.
pub fn apply_change_origin(headers: &mut HeaderMap, target: &str) {
    let authority = target
        .parse::<Uri>()
        .ok()
        .and_then(|uri| uri.authority().map(|a| a.to_string()));

    if let Some(authority) = authority {
        if let Ok(value) = HeaderValue::from_str(&authority) {
            headers.insert(HOST, value);
        }
    }
}
