use crate::domain::metrics;
use crate::services::insights::{
    personalized_insights, Advisory, Severity, ALL_CLEAR_MESSAGE, INVALID_INPUT_MESSAGE,
};
use crate::state::SharedState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

/// Raw field values as the form submitted them. Parsing stays on our side
/// so a non-numeric entry gets the same warning as an out-of-range one.
#[derive(Debug, Deserialize)]
struct InsightRequest {
    weight: String,
    stress_level: String,
}

#[derive(Debug, Serialize)]
struct AdvisoryView {
    message: String,
    severity: Severity,
    icon: &'static str,
}

impl From<Advisory> for AdvisoryView {
    fn from(advisory: Advisory) -> Self {
        Self {
            icon: advisory.severity.icon(),
            message: advisory.message,
            severity: advisory.severity,
        }
    }
}

#[derive(Debug, Serialize)]
struct InsightsResponse {
    insights: Vec<AdvisoryView>,
}

pub fn router(state: SharedState) -> Router {
    Router::new().route("/", post(get_insights)).with_state(state)
}

/// Invalid input is a domain outcome, not a transport error: the handler
/// answers 200 either way and the page renders whatever list it gets.
async fn get_insights(
    State(state): State<SharedState>,
    Json(payload): Json<InsightRequest>,
) -> Json<InsightsResponse> {
    let metrics = match metrics::parse_metrics(&payload.weight, &payload.stress_level) {
        Ok(metrics) => metrics,
        Err(e) => {
            tracing::debug!("Rejected insight request: {}", e);
            return Json(render(vec![Advisory::warning(INVALID_INPUT_MESSAGE)]));
        }
    };

    tokio::time::sleep(state.processing_delay).await;

    let mut advisories = personalized_insights(&metrics);
    if advisories.is_empty() {
        // Unreachable with the current rules; an all-clear rule set would
        // still render something encouraging.
        advisories.push(Advisory::success(ALL_CLEAR_MESSAGE));
    }

    tracing::info!(
        weight = metrics.weight,
        stress_level = metrics.stress_level,
        count = advisories.len(),
        "Generated insights"
    );

    Json(render(advisories))
}

fn render(advisories: Vec<Advisory>) -> InsightsResponse {
    InsightsResponse {
        insights: advisories.into_iter().map(AdvisoryView::from).collect(),
    }
}
