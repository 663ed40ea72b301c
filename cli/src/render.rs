//! Terminal output, human or JSON.

use serde::Serialize;

use mever_client::VerifyError;
use mever_form::{FormView, ResultPanel};
use mever_types::HealthStatus;
use mever_utils::format_threshold;

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> JsonOut<T> {
    fn from_parts(data: Option<T>, error: Option<String>) -> Self {
        Self {
            ok: error.is_none(),
            data,
            error,
        }
    }
}

/// JSON document for a finished form; the preview is left out.
pub fn view_json(view: &FormView) -> serde_json::Result<String> {
    let out: JsonOut<&ResultPanel> = JsonOut::from_parts(view.result.as_ref(), view.error.clone());
    serde_json::to_string_pretty(&out)
}

pub fn health_json(health: &Result<HealthStatus, VerifyError>) -> serde_json::Result<String> {
    let out = match health {
        Ok(status) => JsonOut {
            ok: status.is_ok(),
            data: Some(status),
            error: None,
        },
        Err(e) => JsonOut::from_parts(None, Some(e.user_message())),
    };
    serde_json::to_string_pretty(&out)
}

pub fn health_text(health: &HealthStatus) -> String {
    format!(
        "status: {}\nmodel: {}\nthreshold: {}",
        health.status,
        health.model,
        format_threshold(health.threshold)
    )
}

/// Print the view; returns whether the attempt succeeded.
pub fn print_view(view: &FormView, json: bool) -> serde_json::Result<bool> {
    if json {
        println!("{}", view_json(view)?);
    } else if let Some(error) = &view.error {
        eprintln!("error: {error}");
    } else if let Some(result) = &view.result {
        println!("{result}");
    }
    Ok(view.error.is_none() && view.result.is_some())
}

/// Print a health check; returns whether the service reported ok.
pub fn print_health(
    health: &Result<HealthStatus, VerifyError>,
    json: bool,
) -> serde_json::Result<bool> {
    if json {
        println!("{}", health_json(health)?);
    } else {
        match health {
            Ok(status) => println!("{}", health_text(status)),
            Err(e) => {
                tracing::debug!("health check failed: {e}");
                eprintln!("error: {}", e.user_message());
            }
        }
    }
    Ok(matches!(health, Ok(status) if status.is_ok()))
}
