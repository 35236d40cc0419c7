use anyhow::Result;

use crate::domain::BackendConfig;

use super::super::Container;

pub struct ConfigController<'a> {
    container: &'a Container,
}

impl<'a> ConfigController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn show(&self) -> Result<String> {
        Ok(self.format_config(self.container.backend()))
    }

    fn format_config(&self, backend: &BackendConfig) -> String {
        let credential = match backend {
            BackendConfig::Local { .. } => "n/a",
            BackendConfig::Cloud { api_key: Some(_), .. } => "set",
            BackendConfig::Cloud { api_key: None, .. } => "unset",
        };

        format!(
            "Travel Planner Configuration\n============================\nProvider:   {}\nModel:      {}\nEndpoint:   {}\nAPI Key:    {}\nServing:    {}",
            backend.kind(),
            backend.model(),
            backend.base_url(),
            credential,
            self.container.model_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::api::ContainerConfig;

    #[tokio::test]
    async fn test_show_never_prints_api_key() {
        let container = Container::new(ContainerConfig {
            backend: BackendConfig::cloud(
                "llama-3.3-70b-versatile",
                "https://api.groq.com",
                Some("gsk_secret".to_string()),
            ),
            mock_llm: false,
        });

        let output = ConfigController::new(&container).show().await.unwrap();

        assert!(output.contains("Provider:   cloud"));
        assert!(output.contains("API Key:    set"));
        assert!(!output.contains("gsk_secret"));
    }
}
