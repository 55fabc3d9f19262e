use std::convert::Infallible;
use hyper::StatusCode;
use warp::Reply;
use crate::errors::DevProxyError;

pub async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "No proxy rule for this path")
    } else if let Some(e) = err.find::<DevProxyError>() {
        match e {
            DevProxyError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "Backend timeout"),
            DevProxyError::Upstream(_) => (StatusCode::BAD_GATEWAY, "Backend unreachable"),
            DevProxyError::InvalidUri(_) => (StatusCode::BAD_GATEWAY, "Invalid backend URI"),
        }
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };

    Ok(warp::reply::with_status(message.to_string(), code))
}

#[cfg(test)]
mod tests {
    use warp::http::StatusCode;
    use warp::Reply;
    use crate::handlers::handle_rejection;
    use crate::DevProxyError;

    #[tokio::test]
    async fn test_handle_not_found_rejection() {
        let rejection = warp::reject::not_found();
        let response = handle_rejection(rejection).await.unwrap();
        assert_eq!(response.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_handle_timeout_rejection() {
        let rejection = warp::reject::custom(DevProxyError::Timeout);
        let response = handle_rejection(rejection).await.unwrap();
        assert_eq!(response.into_response().status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn test_handle_upstream_rejection() {
        let rejection = warp::reject::custom(DevProxyError::Upstream("connection refused".to_string()));
        let response = handle_rejection(rejection).await.unwrap();
        assert_eq!(response.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_handle_invalid_uri_rejection() {
        let rejection = warp::reject::custom(DevProxyError::InvalidUri("bad authority".to_string()));
        let response = handle_rejection(rejection).await.unwrap();
        assert_eq!(response.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
