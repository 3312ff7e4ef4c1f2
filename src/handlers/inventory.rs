// src/handlers/inventory.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::validate_not_negative,
    models::inventory::{StockAlert, Supply, UnitOfMeasure},
    services::inventory_service::SupplyInput,
};

// ---
// Payload: insumo (criação e atualização usam o mesmo formato)
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplyPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    pub brand: String,

    pub unit: UnitOfMeasure,

    // Zero é tolerado (o insumo só deixa de contribuir no custo),
    // negativo não.
    #[validate(custom(function = validate_not_negative))]
    pub package_size: Decimal,

    #[validate(custom(function = validate_not_negative))]
    pub package_cost: Decimal,

    #[schema(value_type = String, format = Date)]
    pub purchase_date: NaiveDate,

    #[schema(value_type = String, format = Date)]
    pub expiry_date: NaiveDate,

    pub supplier: String,

    #[validate(custom(function = validate_not_negative))]
    pub current_stock: Decimal,

    #[validate(custom(function = validate_not_negative))]
    pub min_stock_alert: Decimal,
}

impl From<SupplyPayload> for SupplyInput {
    fn from(payload: SupplyPayload) -> Self {
        SupplyInput {
            name: payload.name,
            brand: payload.brand,
            unit: payload.unit,
            package_size: payload.package_size,
            package_cost: payload.package_cost,
            purchase_date: payload.purchase_date,
            expiry_date: payload.expiry_date,
            supplier: payload.supplier,
            current_stock: payload.current_stock,
            min_stock_alert: payload.min_stock_alert,
        }
    }
}

// ---
// Handlers
// ---

#[utoipa::path(
    post,
    path = "/api/inventory/supplies",
    tag = "Estoque",
    request_body = SupplyPayload,
    responses(
        (status = 201, description = "Insumo cadastrado", body = Supply),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_supply(
    State(app_state): State<AppState>,
    Json(payload): Json<SupplyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let supply = app_state.inventory_service.create_supply(payload.into());
    Ok((StatusCode::CREATED, Json(supply)))
}

#[utoipa::path(
    get,
    path = "/api/inventory/supplies",
    tag = "Estoque",
    responses(
        (status = 200, description = "Todos os insumos", body = Vec<Supply>)
    )
)]
pub async fn get_all_supplies(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.inventory_service.list_supplies())))
}

#[utoipa::path(
    put,
    path = "/api/inventory/supplies/{id}",
    tag = "Estoque",
    request_body = SupplyPayload,
    params(("id" = Uuid, Path, description = "ID do insumo")),
    responses(
        (status = 200, description = "Insumo atualizado", body = Supply),
        (status = 404, description = "Insumo não encontrado")
    )
)]
pub async fn update_supply(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SupplyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let supply = app_state
        .inventory_service
        .update_supply(id, payload.into())?;
    Ok((StatusCode::OK, Json(supply)))
}

#[utoipa::path(
    delete,
    path = "/api/inventory/supplies/{id}",
    tag = "Estoque",
    params(("id" = Uuid, Path, description = "ID do insumo")),
    responses(
        (status = 204, description = "Insumo removido"),
        (status = 404, description = "Insumo não encontrado")
    )
)]
pub async fn delete_supply(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.inventory_service.delete_supply(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/inventory/alerts",
    tag = "Estoque",
    responses(
        (status = 200, description = "Alertas de estoque baixo e validade próxima", body = Vec<StockAlert>)
    )
)]
pub async fn get_stock_alerts(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.inventory_service.alerts())))
}
