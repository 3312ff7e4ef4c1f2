// src/handlers/settings.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::{
    common::error::AppError,
    config::AppState,
    models::settings::{LaborHoursEstimate, StudioSettings},
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLaborHoursPayload {
    // Valor fora da faixa é corrigido para o piso de 1h, sem erro.
    #[schema(example = "160")]
    pub monthly_labor_hours: Decimal,
}

#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Configurações",
    responses((status = 200, description = "Configurações do estúdio", body = StudioSettings))
)]
pub async fn get_settings(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.settings_repo.get())))
}

#[utoipa::path(
    put,
    path = "/api/settings/labor-hours",
    tag = "Configurações",
    request_body = UpdateLaborHoursPayload,
    responses((status = 200, description = "Horas atualizadas", body = StudioSettings))
)]
pub async fn update_labor_hours(
    State(app_state): State<AppState>,
    Json(payload): Json<UpdateLaborHoursPayload>,
) -> Result<impl IntoResponse, AppError> {
    let settings = app_state
        .settings_repo
        .set_monthly_labor_hours(payload.monthly_labor_hours);
    Ok((StatusCode::OK, Json(settings)))
}

#[utoipa::path(
    get,
    path = "/api/settings/labor-hours/estimate",
    tag = "Configurações",
    responses(
        (status = 200, description = "Sugestão de horas a partir das vendas dos últimos 30 dias", body = LaborHoursEstimate)
    )
)]
pub async fn estimate_labor_hours(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let (estimated_hours, based_on_sales) =
        app_state.sales_service.estimate_monthly_labor_hours();
    Ok((
        StatusCode::OK,
        Json(LaborHoursEstimate {
            estimated_hours,
            based_on_sales,
        }),
    ))
}

// ---
// Zona de perigo: limpeza de dados (irreversível)
// ---

#[utoipa::path(
    post,
    path = "/api/settings/clear-sales",
    tag = "Configurações",
    responses(
        (status = 200, description = "Histórico de vendas apagado; o estoque NÃO é devolvido")
    )
)]
pub async fn clear_sales(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let removed = app_state.sales_service.clear_sales();
    Ok((StatusCode::OK, Json(json!({ "removed": removed }))))
}

#[utoipa::path(
    post,
    path = "/api/settings/clear-clients",
    tag = "Configurações",
    responses(
        (status = 200, description = "Clientes apagados; vendas antigas passam a exibir \"Desconhecido\"")
    )
)]
pub async fn clear_clients(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let removed = app_state.crm_service.clear_clients();
    Ok((StatusCode::OK, Json(json!({ "removed": removed }))))
}
