// src/handlers/costs.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::validate_not_negative,
    models::costs::{CostKind, FixedAsset, OperationalCost},
};

// ---
// Payload: custo operacional
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperationalCostPayload {
    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub description: String,

    pub kind: CostKind,

    #[validate(custom(function = validate_not_negative))]
    pub monthly_value: Decimal,
}

// ---
// Payload: ativo fixo
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FixedAssetPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(custom(function = validate_not_negative))]
    pub acquisition_cost: Decimal,

    // Zero é tolerado: o ativo só deixa de amortizar.
    #[validate(custom(function = validate_not_negative))]
    pub useful_life_hours: Decimal,

    #[serde(default)]
    pub related_services: Vec<Uuid>,
}

// ---
// Handlers: custos operacionais
// ---

#[utoipa::path(
    post,
    path = "/api/costs",
    tag = "Custos",
    request_body = OperationalCostPayload,
    responses(
        (status = 201, description = "Custo cadastrado", body = OperationalCost),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_cost(
    State(app_state): State<AppState>,
    Json(payload): Json<OperationalCostPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let cost = app_state.costs_service.create_cost(
        payload.description,
        payload.kind,
        payload.monthly_value,
    );
    Ok((StatusCode::CREATED, Json(cost)))
}

#[utoipa::path(
    get,
    path = "/api/costs",
    tag = "Custos",
    responses((status = 200, description = "Todos os custos operacionais", body = Vec<OperationalCost>))
)]
pub async fn get_all_costs(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.costs_service.list_costs())))
}

#[utoipa::path(
    put,
    path = "/api/costs/{id}",
    tag = "Custos",
    request_body = OperationalCostPayload,
    params(("id" = Uuid, Path, description = "ID do custo")),
    responses(
        (status = 200, description = "Custo atualizado", body = OperationalCost),
        (status = 404, description = "Custo não encontrado")
    )
)]
pub async fn update_cost(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<OperationalCostPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let cost = app_state.costs_service.update_cost(
        id,
        payload.description,
        payload.kind,
        payload.monthly_value,
    )?;
    Ok((StatusCode::OK, Json(cost)))
}

#[utoipa::path(
    delete,
    path = "/api/costs/{id}",
    tag = "Custos",
    params(("id" = Uuid, Path, description = "ID do custo")),
    responses(
        (status = 204, description = "Custo removido"),
        (status = 404, description = "Custo não encontrado")
    )
)]
pub async fn delete_cost(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.costs_service.delete_cost(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ---
// Handlers: ativos fixos
// ---

#[utoipa::path(
    post,
    path = "/api/costs/assets",
    tag = "Custos",
    request_body = FixedAssetPayload,
    responses(
        (status = 201, description = "Ativo cadastrado", body = FixedAsset),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_asset(
    State(app_state): State<AppState>,
    Json(payload): Json<FixedAssetPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let asset = app_state.costs_service.create_asset(
        payload.name,
        payload.acquisition_cost,
        payload.useful_life_hours,
        payload.related_services,
    );
    Ok((StatusCode::CREATED, Json(asset)))
}

#[utoipa::path(
    get,
    path = "/api/costs/assets",
    tag = "Custos",
    responses((status = 200, description = "Todos os ativos fixos", body = Vec<FixedAsset>))
)]
pub async fn get_all_assets(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.costs_service.list_assets())))
}

#[utoipa::path(
    put,
    path = "/api/costs/assets/{id}",
    tag = "Custos",
    request_body = FixedAssetPayload,
    params(("id" = Uuid, Path, description = "ID do ativo")),
    responses(
        (status = 200, description = "Ativo atualizado", body = FixedAsset),
        (status = 404, description = "Ativo não encontrado")
    )
)]
pub async fn update_asset(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<FixedAssetPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let asset = app_state.costs_service.update_asset(
        id,
        payload.name,
        payload.acquisition_cost,
        payload.useful_life_hours,
        payload.related_services,
    )?;
    Ok((StatusCode::OK, Json(asset)))
}

#[utoipa::path(
    delete,
    path = "/api/costs/assets/{id}",
    tag = "Custos",
    params(("id" = Uuid, Path, description = "ID do ativo")),
    responses(
        (status = 204, description = "Ativo removido"),
        (status = 404, description = "Ativo não encontrado")
    )
)]
pub async fn delete_asset(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.costs_service.delete_asset(id)?;
    Ok(StatusCode::NO_CONTENT)
}
