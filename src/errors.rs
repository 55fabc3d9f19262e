use std::fmt;

#[derive(Debug)]
pub enum DevProxyError {
    InvalidUri(String),
    Upstream(String),
    Timeout,
}

impl fmt::Display for DevProxyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidUri(e) => write!(f, "Invalid URI: {}", e),
            Self::Upstream(e) => write!(f, "Upstream error: {}", e),
            Self::Timeout => write!(f, "Backend request timed out"),
        }
    }
}

impl warp::reject::Reject for DevProxyError {}
