use axum::{extract::State, http::StatusCode, Json};
use restaurant_storage::settings::Settings;
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    state::AppState,
    types::{AppError, ValidatedJson},
};

use super::products::MessageResponse;

/// All fields are optional; the save merges into the singleton document.
/// The three image fields carry base64 payloads, everything else is stored
/// verbatim.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveSettingsRequest {
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub login_page_image: Option<String>,
    pub home_page_image: Option<String>,
    pub final_week_schedules: Option<String>,
    pub business_day_hours: Option<String>,
    pub link_instagram: Option<String>,
    pub link_facebook: Option<String>,
    pub link_whats_app: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

/// Merge-saves the restaurant settings, uploading any provided images
#[instrument(skip(state, payload))]
pub async fn save_settings(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SaveSettingsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let company_logo = upload_if_present(&state, payload.company_logo).await?;
    let login_page_image = upload_if_present(&state, payload.login_page_image).await?;
    let home_page_image = upload_if_present(&state, payload.home_page_image).await?;

    let settings = Settings {
        company_name: payload.company_name,
        company_logo,
        login_page_image,
        home_page_image,
        final_week_schedules: payload.final_week_schedules,
        business_day_hours: payload.business_day_hours,
        link_instagram: payload.link_instagram,
        link_facebook: payload.link_facebook,
        link_whats_app: payload.link_whats_app,
        primary_color: payload.primary_color,
        secondary_color: payload.secondary_color,
    };

    state.settings_storage.upsert(&settings).await?;

    info!("Settings saved");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Servidor: Configurações salvas com sucesso",
        }),
    ))
}

/// Fetches the singleton settings document
#[instrument(skip(state))]
pub async fn get_settings(State(state): State<AppState>) -> Result<Json<Settings>, AppError> {
    let settings = state
        .settings_storage
        .get()
        .await?
        .ok_or_else(|| AppError::not_found("Configurações não encontradas"))?;

    Ok(Json(settings))
}

/// Uploads a base64 image when one was sent, returning its hosted URL
async fn upload_if_present(
    state: &AppState,
    image_base64: Option<String>,
) -> Result<Option<String>, AppError> {
    match image_base64.as_deref() {
        Some(image_base64) if !image_base64.is_empty() => {
            Ok(Some(state.image_host.upload_base64(image_base64).await?))
        }
        _ => Ok(None),
    }
}
