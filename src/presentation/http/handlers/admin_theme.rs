//! Admin Theme Handlers
//!
//! Branding and per-model presentation for the admin dashboard.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::config::{AdminSettings, ChangeformFormat};
use crate::startup::AppState;

/// Presentation of a single `app.Model` label
#[derive(Debug, Serialize)]
pub struct ModelPresentation {
    pub label: String,
    pub icon: String,
    pub changeform_format: ChangeformFormat,
}

impl ModelPresentation {
    pub fn for_label(admin: &AdminSettings, label: String) -> Self {
        Self {
            icon: admin.icon_for(&label).to_string(),
            changeform_format: admin.changeform_format_for(&label),
            label,
        }
    }
}

/// Full admin theme
pub async fn theme(State(state): State<AppState>) -> Json<AdminSettings> {
    Json(state.settings.admin.clone())
}

/// Icon and change-form layout for one model
pub async fn model_presentation(
    State(state): State<AppState>,
    Path(label): Path<String>,
) -> Json<ModelPresentation> {
    Json(ModelPresentation::for_label(&state.settings.admin, label))
}
