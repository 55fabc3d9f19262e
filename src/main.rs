use bytes::Bytes;
use hyper::{Body, Client, Request, Response, Method, HeaderMap};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::time::timeout;
use warp::{Filter, http::Uri};
use dev_proxy::{
    DevProxyError,
    ProxyTable,
    config::{EnvironmentResolver, Settings},
    models::DevServerConfig,
    services::build_proxy_table,
    middleware::apply_change_origin,
    handlers::handle_rejection,
};
use std::convert::Infallible;

#[tokio::main]
async fn main() {
    let settings = Settings::from_env();
    let resolver = EnvironmentResolver::new(&settings);
    let profile = resolver.resolve_current().clone();

    println!("Backend target: {}", profile.backend_url);
    println!("Environment: {}", resolver.current_env_name());

    let table = build_proxy_table(&profile.backend_url);
    let config = DevServerConfig::new(table.clone(), &profile.backend_url);

    if !profile.enable_proxy {
        // Nothing to serve for this environment; emit the artifact for an
        // external runtime and stop.
        match serde_json::to_string_pretty(&config) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize config: {}", e),
        }
        return;
    }

    let table = Arc::new(table);
    let table_filter = warp::any().map(move || table.clone());
    let client = Client::new();
    let timeout_ms = profile.api_timeout_ms;

    let proxy = warp::any()
        .and(warp::method())
        .and(warp::header::headers_cloned())
        .and(warp::path::full())
        .and(warp::query::raw().or_else(|_| async { Ok::<(String,), Infallible>((String::new(),)) }))
        .and(warp::body::bytes())
        .and(table_filter)
        .and_then(move |method: Method,
                       headers: HeaderMap,
                       full_path: warp::path::FullPath,
                       query: String,
                       body: Bytes,
                       table: Arc<ProxyTable>| {
            let client = client.clone();
            async move {
                let start_time = SystemTime::now();

                let rule = match table.match_rule(full_path.as_str()) {
                    Some(rule) => rule.clone(),
                    None => return Err(warp::reject::not_found()),
                };

                let path = match &rule.rewrite {
                    Some(rewrite) => rewrite.apply(full_path.as_str()),
                    None => full_path.as_str(),
                };

                let mut uri_str = format!("{}{}", rule.target, path);
                if !query.is_empty() {
                    uri_str.push('?');
                    uri_str.push_str(&query);
                }

                let uri: Uri = uri_str.parse().map_err(|e: hyper::http::uri::InvalidUri| {
                    eprintln!("Failed to parse URI {}: {}", uri_str, e);
                    warp::reject::custom(DevProxyError::InvalidUri(e.to_string()))
                })?;

                let mut upstream_headers = headers.clone();
                upstream_headers.remove("host");
                if rule.change_origin {
                    apply_change_origin(&mut upstream_headers, &rule.target);
                }

                let mut req_builder = Request::builder()
                    .method(method.clone())
                    .uri(uri);

                for (name, value) in upstream_headers.iter() {
                    req_builder = req_builder.header(name, value);
                }

                let req = req_builder.body(Body::from(body)).map_err(|e| {
                    eprintln!("Error building request: {}", e);
                    warp::reject::custom(DevProxyError::Upstream(e.to_string()))
                })?;

                let response = match timeout(
                    Duration::from_millis(timeout_ms),
                    client.request(req)
                ).await {
                    Ok(result) => result.map_err(|e| {
                        eprintln!("Error forwarding request: {}", e);
                        warp::reject::custom(DevProxyError::Upstream(e.to_string()))
                    })?,
                    Err(_) => return Err(warp::reject::custom(DevProxyError::Timeout)),
                };

                let (parts, body) = response.into_parts();
                let body_bytes = hyper::body::to_bytes(body).await.map_err(|e| {
                    eprintln!("Error reading response body: {}", e);
                    warp::reject::custom(DevProxyError::Upstream(e.to_string()))
                })?;

                let mut response = Response::builder()
                    .status(parts.status)
                    .body(Body::from(body_bytes))
                    .map_err(|e| {
                        eprintln!("Error building response: {}", e);
                        warp::reject::custom(DevProxyError::Upstream(e.to_string()))
                    })?;

                let response_headers = response.headers_mut();
                for (name, value) in parts.headers.iter() {
                    response_headers.insert(name, value.clone());
                }

                if let Ok(duration) = start_time.elapsed() {
                    println!(
                        "{} {} -> {} {} {}ms",
                        method,
                        full_path.as_str(),
                        rule.path_prefix,
                        response.status(),
                        duration.as_millis()
                    );
                }

                Ok(response)
            }
        });

    let routes = proxy.recover(handle_rejection);

    println!("Dev proxy running on http://127.0.0.1:5173");
    warp::serve(routes).run(([127, 0, 0, 1], 5173)).await;
}
