// Configuration type definitions

use serde::Deserialize;

/// Endpoint configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EndpointConfig {
    /// GraphQL endpoint URL; the built-in default applies when unset
    #[serde(default)]
    pub url: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
}

impl Config {
    /// Endpoint URL from the config file, if one was given
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint.url.as_deref()
    }
}
