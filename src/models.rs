use std::collections::HashMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Path rewrite applied before a request is forwarded. The only rewrite the
/// table uses is the identity, which pins the matched path in place so no
/// default rewriting applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rewrite {
    Identity,
}

impl Rewrite {
    pub fn apply<'a>(&self, path: &'a str) -> &'a str {
        match self {
            Self::Identity => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRule {
    #[serde(skip)]
    pub path_prefix: String,
    pub target: String,
    pub change_origin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<Rewrite>,
}

/// The fixed set of forwarding rules. Serializes as a prefix-keyed map, the
/// shape the dev-server runtime consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyTable {
    pub rules: Vec<ProxyRule>,
}

impl ProxyTable {
    /// Picks the rule for a request path. When prefixes overlap the longest
    /// one wins, so `/api/readme` is matched ahead of `/api`.
    pub fn match_rule(&self, path: &str) -> Option<&ProxyRule> {
        self.rules
            .iter()
            .filter(|rule| path.starts_with(&rule.path_prefix))
            .max_by_key(|rule| rule.path_prefix.len())
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.path_prefix.as_str())
    }
}

impl Serialize for ProxyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for rule in &self.rules {
            map.serialize_entry(&rule.path_prefix, rule)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerSection {
    pub proxy: ProxyTable,
}

/// The configuration artifact handed to the dev-server runtime: the proxy
/// table plus a `define` table injecting the backend URL as a quoted
/// build-time constant.
#[derive(Debug, Clone, Serialize)]
pub struct DevServerConfig {
    pub server: ServerSection,
    pub define: HashMap<String, String>,
}

pub const BACKEND_URL_DEFINE: &str = "__BACKEND_URL__";

impl DevServerConfig {
    pub fn new(proxy: ProxyTable, backend_url: &str) -> Self {
        let mut define = HashMap::new();
        define.insert(
            BACKEND_URL_DEFINE.to_string(),
            serde_json::Value::String(backend_url.to_string()).to_string(),
        );

        Self {
            server: ServerSection { proxy },
            define,
        }
    }
}
