use std::fmt;

use serde::Serialize;

pub const OLLAMA_MODEL: &str = "qwen3-vl:30b-a3b-instruct";
pub const OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const GROQ_MODEL: &str = "llama-3.3-70b-versatile";
pub const GROQ_BASE_URL: &str = "https://api.groq.com";

/// Which model backend serves completions for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Ollama on the local machine.
    Local,
    /// Groq cloud API.
    #[default]
    Cloud,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Local => "local",
            ProviderKind::Cloud => "cloud",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved backend configuration. Built once at startup and shared read-only.
#[derive(Clone, PartialEq, Eq)]
pub enum BackendConfig {
    Local {
        model: String,
        base_url: String,
    },
    Cloud {
        model: String,
        base_url: String,
        api_key: Option<String>,
    },
}

impl BackendConfig {
    pub fn local(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::Local {
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    pub fn cloud(
        model: impl Into<String>,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self::Cloud {
            model: model.into(),
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            BackendConfig::Local { .. } => ProviderKind::Local,
            BackendConfig::Cloud { .. } => ProviderKind::Cloud,
        }
    }

    pub fn model(&self) -> &str {
        match self {
            BackendConfig::Local { model, .. } | BackendConfig::Cloud { model, .. } => model,
        }
    }

    pub fn base_url(&self) -> &str {
        match self {
            BackendConfig::Local { base_url, .. } | BackendConfig::Cloud { base_url, .. } => {
                base_url
            }
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        match self {
            BackendConfig::Local { .. } => None,
            BackendConfig::Cloud { api_key, .. } => api_key.as_deref(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::cloud(GROQ_MODEL, GROQ_BASE_URL, None)
    }
}

// Keeps the credential out of logs.
impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("BackendConfig");
        s.field("kind", &self.kind())
            .field("model", &self.model())
            .field("base_url", &self.base_url());
        if let BackendConfig::Cloud { api_key, .. } = self {
            s.field("api_key", &api_key.as_ref().map(|_| "<redacted>"));
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cloud_without_key() {
        let config = BackendConfig::default();
        assert_eq!(config.kind(), ProviderKind::Cloud);
        assert_eq!(config.model(), GROQ_MODEL);
        assert_eq!(config.base_url(), GROQ_BASE_URL);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = BackendConfig::cloud(GROQ_MODEL, GROQ_BASE_URL, Some("gsk_secret".into()));
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("gsk_secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_local_has_no_api_key() {
        let config = BackendConfig::local(OLLAMA_MODEL, OLLAMA_BASE_URL);
        assert_eq!(config.kind(), ProviderKind::Local);
        assert_eq!(config.api_key(), None);
    }
}
