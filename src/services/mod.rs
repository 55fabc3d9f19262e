use crate::models::{ProxyRule, ProxyTable, Rewrite};
use std::collections::HashMap;
use lazy_static::lazy_static;

#[cfg(test)]
mod tests;

/// The path prefixes the backend serves. `/api/readme` overlaps `/api` and
/// relies on longest-prefix matching to take priority.
pub const PROXY_PATH_PREFIXES: [&str; 12] = [
    "/api/readme",
    "/api",
    "/history",
    "/llm_status",
    "/list_LLM",
    "/get_model_health",
    "/get_model_qps",
    "/get_model_hit_count",
    "/get_model_cost",
    "/service-discovery",
    "/docs",
    "/llm_invoke",
];

lazy_static! {
    static ref RULE_REWRITES: HashMap<&'static str, Rewrite> = {
        let mut m = HashMap::new();
        // Pin the readme path so no default rewrite for the shorter /api prefix touches it.
        m.insert("/api/readme", Rewrite::Identity);
        m
    };
}

/// Builds the forwarding table for a backend origin. Every prefix forwards
/// to the same origin with `change_origin` set; only the target varies with
/// the input. The origin is not validated here, a bad one fails at connect
/// time inside the forwarding stack.
pub fn build_proxy_table(backend_url: &str) -> ProxyTable {
    let rules = PROXY_PATH_PREFIXES
        .iter()
        .map(|prefix| ProxyRule {
            path_prefix: prefix.to_string(),
            target: backend_url.to_string(),
            change_origin: true,
            rewrite: RULE_REWRITES.get(prefix).copied(),
        })
        .collect();

    ProxyTable { rules }
}
