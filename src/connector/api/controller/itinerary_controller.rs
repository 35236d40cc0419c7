use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use super::super::Container;

pub struct ItineraryController<'a> {
    container: &'a Container,
}

impl<'a> ItineraryController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn plan(&self, city: String, interests: String) -> Result<String> {
        let mut planner = self.container.planner();
        planner.set_city(&city);
        planner.set_interests(&interests);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed}] {msg}")
                .expect("Invalid spinner template"),
        );
        spinner.set_message(format!(
            "Planning a day in {} with {}",
            planner.city(),
            self.container.model_name()
        ));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = planner.generate_itinerary().await;
        spinner.finish_and_clear();

        let itinerary = result?;
        Ok(self.format_itinerary(planner.city(), &itinerary))
    }

    fn format_itinerary(&self, city: &str, itinerary: &str) -> String {
        format!("# Your Itinerary: {}\n\n{}", city, itinerary.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::api::ContainerConfig;
    use crate::domain::BackendConfig;

    fn mock_container() -> Container {
        Container::new(ContainerConfig {
            backend: BackendConfig::default(),
            mock_llm: true,
        })
    }

    #[tokio::test]
    async fn test_plan_formats_itinerary_under_heading() {
        let container = mock_container();
        let controller = ItineraryController::new(&container);

        let output = controller
            .plan(" Paris ".to_string(), "museums, food".to_string())
            .await
            .unwrap();

        assert!(output.starts_with("# Your Itinerary: Paris\n\n- "));
    }

    #[tokio::test]
    async fn test_plan_surfaces_validation_error() {
        let container = mock_container();
        let controller = ItineraryController::new(&container);

        let err = controller
            .plan("Paris".to_string(), " , ".to_string())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("failed to generate itinerary"));
    }
}
