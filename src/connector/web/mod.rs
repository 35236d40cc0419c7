//! HTML form front end served with axum.
//!
//! One page, two inputs. Each submission gets its own [`TravelPlanner`]
//! from the shared [`Container`].
//!
//! [`TravelPlanner`]: crate::application::TravelPlanner

pub mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Json};
use serde::Deserialize;
use tracing::{info, warn};

use crate::connector::api::Container;
use crate::domain::PlannerError;

use page::{markdown_to_html, render_page, PageView, MISSING_INPUT_WARNING};

#[derive(Clone)]
struct AppState {
    container: Arc<Container>,
}

#[derive(Debug, Deserialize)]
pub struct TravelForm {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub interests: String,
}

pub fn app(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/", get(index))
        .route("/itinerary", post(submit_itinerary))
        .route("/health", get(health))
        .with_state(AppState { container })
}

pub async fn serve(container: Arc<Container>, listen: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .context("bind server listener failed")?;
    info!("travel-planner listening on http://{}", listen);
    axum::serve(listener, app(container))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

async fn index() -> Html<String> {
    Html(render_page(&PageView::default()))
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let backend = state.container.backend();
    Json(serde_json::json!({
        "status": "ok",
        "provider": backend.kind().as_str(),
        "model": state.container.model_name(),
    }))
}

async fn submit_itinerary(
    State(state): State<AppState>,
    Form(form): Form<TravelForm>,
) -> (StatusCode, Html<String>) {
    let mut view = PageView::with_input(&form.city, &form.interests);

    if form.city.trim().is_empty() || form.interests.trim().is_empty() {
        view.warning = Some(MISSING_INPUT_WARNING.to_string());
        return (StatusCode::OK, Html(render_page(&view)));
    }

    let mut planner = state.container.planner();
    planner.set_city(&form.city);
    planner.set_interests(&form.interests);

    match planner.generate_itinerary().await {
        Ok(itinerary) => {
            view.itinerary_html = Some(markdown_to_html(&itinerary));
            (StatusCode::OK, Html(render_page(&view)))
        }
        Err(e) => {
            let status = status_for(&e);
            view.error = Some(e.to_string());
            (status, Html(render_page(&view)))
        }
    }
}

fn status_for(err: &PlannerError) -> StatusCode {
    if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else if err.is_provider() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn status_distinguishes_validation_from_provider_failures() {
        let validation = PlannerError::new("x", DomainError::invalid_input("no city"));
        let provider = PlannerError::new("x", DomainError::provider("timeout"));
        let internal = PlannerError::new("x", DomainError::internal("bug"));

        assert_eq!(status_for(&validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&provider), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for(&internal), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
