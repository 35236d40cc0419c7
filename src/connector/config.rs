use std::path::Path;

use tracing::debug;

use crate::domain::{
    BackendConfig, DomainError, GROQ_BASE_URL, GROQ_MODEL, OLLAMA_BASE_URL, OLLAMA_MODEL,
};

/// Resolve the backend from environment-style variables.
///
/// | Variable          | Default                     | Purpose                          |
/// |-------------------|-----------------------------|----------------------------------|
/// | `USE_OLLAMA`      | `false`                     | `true` selects the local server  |
/// | `OLLAMA_MODEL`    | `qwen3-vl:30b-a3b-instruct` | Model served by Ollama           |
/// | `OLLAMA_BASE_URL` | `http://localhost:11434`    | Ollama endpoint                  |
/// | `GROQ_API_KEY`    | unset                       | Cloud credential, checked lazily |
/// | `GROQ_MODEL`      | `llama-3.3-70b-versatile`   | Cloud model                      |
/// | `GROQ_BASE_URL`   | `https://api.groq.com`      | Cloud endpoint                   |
pub fn resolve_backend<F>(lookup: F) -> BackendConfig
where
    F: Fn(&str) -> Option<String>,
{
    let use_ollama = lookup("USE_OLLAMA")
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let or_default = |key: &str, default: &str| {
        lookup(key)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    if use_ollama {
        BackendConfig::local(
            or_default("OLLAMA_MODEL", OLLAMA_MODEL),
            or_default("OLLAMA_BASE_URL", OLLAMA_BASE_URL),
        )
    } else {
        BackendConfig::cloud(
            or_default("GROQ_MODEL", GROQ_MODEL),
            or_default("GROQ_BASE_URL", GROQ_BASE_URL),
            lookup("GROQ_API_KEY"),
        )
    }
}

/// Load `.env` (if present) into the process environment, then resolve the
/// backend from it. Variables already set in the environment take precedence.
pub fn backend_from_env() -> BackendConfig {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => tracing::warn!("Failed to load .env file: {}", e),
    }
    resolve_backend(|key| std::env::var(key).ok())
}

/// Same as [`backend_from_env`] but reading an explicit dotenv file.
pub fn backend_from_env_file(path: &Path) -> Result<BackendConfig, DomainError> {
    dotenvy::from_path(path).map_err(|e| {
        DomainError::config(format!("failed to load {}: {e}", path.display()))
    })?;
    Ok(resolve_backend(|key| std::env::var(key).ok()))
}
