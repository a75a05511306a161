use axum::http::{HeaderName, HeaderValue, Method};
use core_config::{ConfigError, FromEnv, env_bool_or_default, env_list_or_default, env_list_required};
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

const WILDCARD: &str = "*";

/// Cross-origin settings.
///
/// Environment variables (lists accept a JSON array or comma-separated values):
/// - `ALLOW_ORIGINS` (required)
/// - `ALLOW_CREDENTIALS` (default: true)
/// - `ALLOW_METHODS` (default: `["*"]`)
/// - `ALLOW_HEADERS` (default: `["*"]`)
///
/// `*` accepts everything. Browsers ignore a literal `*` on credentialed
/// requests, so with credentials enabled the request's own origin, method
/// and headers are echoed back instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub allow_credentials: bool,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
}

impl CorsConfig {
    /// Config for the given origins with the default policy for everything else
    pub fn new<I, S>(allow_origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allow_origins: allow_origins.into_iter().map(Into::into).collect(),
            allow_credentials: true,
            allow_methods: vec![WILDCARD.to_string()],
            allow_headers: vec![WILDCARD.to_string()],
        }
    }

    /// Build the tower-http layer, validating every configured value.
    ///
    /// An empty origin list is valid and grants no cross-origin access.
    pub fn into_layer(self) -> Result<CorsLayer, ConfigError> {
        let credentials = self.allow_credentials;

        let origin = if has_wildcard(&self.allow_origins) {
            if credentials {
                AllowOrigin::mirror_request()
            } else {
                AllowOrigin::any()
            }
        } else {
            AllowOrigin::list(parse_all("ALLOW_ORIGINS", &self.allow_origins, |s| {
                HeaderValue::from_str(s).map_err(|e| e.to_string())
            })?)
        };

        let methods = if has_wildcard(&self.allow_methods) {
            if credentials {
                AllowMethods::mirror_request()
            } else {
                AllowMethods::any()
            }
        } else {
            AllowMethods::list(parse_all("ALLOW_METHODS", &self.allow_methods, |s| {
                Method::from_bytes(s.to_uppercase().as_bytes()).map_err(|e| e.to_string())
            })?)
        };

        let headers = if has_wildcard(&self.allow_headers) {
            if credentials {
                AllowHeaders::mirror_request()
            } else {
                AllowHeaders::any()
            }
        } else {
            AllowHeaders::list(parse_all("ALLOW_HEADERS", &self.allow_headers, |s| {
                HeaderName::from_bytes(s.as_bytes()).map_err(|e| e.to_string())
            })?)
        };

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(credentials)
            .max_age(Duration::from_secs(3600)))
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            allow_origins: env_list_required("ALLOW_ORIGINS")?,
            allow_credentials: env_bool_or_default("ALLOW_CREDENTIALS", true)?,
            allow_methods: env_list_or_default("ALLOW_METHODS", &[WILDCARD])?,
            allow_headers: env_list_or_default("ALLOW_HEADERS", &[WILDCARD])?,
        })
    }
}

fn has_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == WILDCARD)
}

fn parse_all<T>(
    key: &str,
    values: &[String],
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<Vec<T>, ConfigError> {
    values
        .iter()
        .map(|v| {
            parse(v).map_err(|details| ConfigError::ParseError {
                key: key.to_string(),
                details: format!("'{}': {}", v, details),
            })
        })
        .collect()
}
