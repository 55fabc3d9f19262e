use std::env;

pub const ENV_NAME_VAR: &str = "APP_ENV";
pub const BACKEND_OVERRIDE_VAR: &str = "BACKEND_URL";

pub const DEVELOPMENT_ORIGIN: &str = "http://127.0.0.1:4000";
pub const PRODUCTION_FALLBACK_ORIGIN: &str = "http://127.0.0.1:4005";
pub const TEST_ORIGIN: &str = "http://test-server:8000";

pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000; // development and test
pub const PRODUCTION_API_TIMEOUT_MS: u64 = 60_000;

/// Backend connectivity settings for one deployment context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentProfile {
    pub backend_url: String,
    pub api_timeout_ms: u64,
    pub enable_proxy: bool,
}

/// Snapshot of the two process environment variables the resolver depends
/// on. Captured once at startup so resolution never reads process state.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub env_name: Option<String>,
    pub backend_override: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            env_name: read_non_empty(ENV_NAME_VAR),
            backend_override: read_non_empty(BACKEND_OVERRIDE_VAR),
        }
    }
}

// Empty values count as unset.
fn read_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

pub struct EnvironmentResolver {
    env_name: Option<String>,
    development: EnvironmentProfile,
    production: EnvironmentProfile,
    test: EnvironmentProfile,
}

impl EnvironmentResolver {
    pub fn new(settings: &Settings) -> Self {
        let production_origin = settings
            .backend_override
            .clone()
            .unwrap_or_else(|| PRODUCTION_FALLBACK_ORIGIN.to_string());

        Self {
            env_name: settings.env_name.clone(),
            development: EnvironmentProfile {
                backend_url: DEVELOPMENT_ORIGIN.to_string(),
                api_timeout_ms: DEFAULT_API_TIMEOUT_MS,
                enable_proxy: true,
            },
            production: EnvironmentProfile {
                backend_url: production_origin,
                api_timeout_ms: PRODUCTION_API_TIMEOUT_MS,
                enable_proxy: false,
            },
            test: EnvironmentProfile {
                backend_url: TEST_ORIGIN.to_string(),
                api_timeout_ms: DEFAULT_API_TIMEOUT_MS,
                enable_proxy: true,
            },
        }
    }

    /// Looks up the profile for an environment name. Unknown or absent names
    /// fall back to the development profile; this never errors.
    pub fn resolve(&self, env_name: Option<&str>) -> &EnvironmentProfile {
        match env_name {
            Some("development") => &self.development,
            Some("production") => &self.production,
            Some("test") => &self.test,
            _ => &self.development,
        }
    }

    pub fn current_env_name(&self) -> &str {
        self.env_name.as_deref().unwrap_or("development")
    }

    pub fn resolve_current(&self) -> &EnvironmentProfile {
        self.resolve(self.env_name.as_deref())
    }

    pub fn backend_url(&self) -> &str {
        &self.resolve_current().backend_url
    }
}
