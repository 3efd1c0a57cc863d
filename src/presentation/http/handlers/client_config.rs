//! Public Client Configuration
//!
//! `GET /api/v1/config` hands the storefront frontend the values it needs to
//! talk to payment providers and load assets. Only publishable values are
//! exposed; secrets never leave the settings object.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::Settings;
use crate::startup::AppState;

#[derive(Debug, Serialize)]
pub struct ClientConfigResponse {
    pub site_url: String,
    pub stripe_public_key: String,
    pub paypal_client_id: String,
    pub static_url: String,
    pub media_url: String,
}

impl From<&Settings> for ClientConfigResponse {
    fn from(settings: &Settings) -> Self {
        Self {
            site_url: settings.site_url.to_string(),
            stripe_public_key: settings.payments.stripe.public_key.clone(),
            paypal_client_id: settings.payments.paypal.client_id.clone(),
            static_url: settings.static_files.static_url.clone(),
            media_url: settings.static_files.media_url.clone(),
        }
    }
}

pub async fn client_config(State(state): State<AppState>) -> Json<ClientConfigResponse> {
    Json(ClientConfigResponse::from(state.settings.as_ref()))
}
