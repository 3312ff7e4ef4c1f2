// src/handlers/catalog.rs

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
    models::{
        catalog::{Service, ServiceComposition},
        pricing::ServicePriceEntry,
    },
    services::catalog_service::{CompositionInput, ServiceInput},
};

// ---
// Payload: serviço
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(range(min = 1, message = "A duração precisa ser de pelo menos 1 minuto."))]
    pub duration_minutes: u32,

    // Fração sobre o custo: 0.9 = 90%.
    #[validate(custom(function = validate_not_negative))]
    pub desired_margin: Decimal,

    // Preço fechado opcional; quando presente, a margem é ignorada.
    #[validate(custom(function = validate_not_negative))]
    pub manual_price: Option<Decimal>,
}

impl From<ServicePayload> for ServiceInput {
    fn from(payload: ServicePayload) -> Self {
        ServiceInput {
            name: payload.name,
            duration_minutes: payload.duration_minutes,
            desired_margin: payload.desired_margin,
            manual_price: payload.manual_price,
        }
    }
}

// ---
// Payload: ficha técnica (substituição em bloco)
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompositionEntryPayload {
    pub supply_id: Uuid,

    #[validate(custom(function = validate_not_negative))]
    pub consumption_per_service: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceCompositionsPayload {
    #[validate(nested)]
    pub compositions: Vec<CompositionEntryPayload>,
}

// ---
// Handlers: serviços
// ---

#[utoipa::path(
    post,
    path = "/api/services",
    tag = "Serviços",
    request_body = ServicePayload,
    responses(
        (status = 201, description = "Serviço cadastrado", body = Service),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_service(
    State(app_state): State<AppState>,
    Json(payload): Json<ServicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let service = app_state.catalog_service.create_service(payload.into());
    Ok((StatusCode::CREATED, Json(service)))
}

#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Serviços",
    responses((status = 200, description = "Todos os serviços", body = Vec<Service>))
)]
pub async fn get_all_services(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.catalog_service.list_services())))
}

#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = "Serviços",
    request_body = ServicePayload,
    params(("id" = Uuid, Path, description = "ID do serviço")),
    responses(
        (status = 200, description = "Serviço atualizado", body = Service),
        (status = 404, description = "Serviço não encontrado")
    )
)]
pub async fn update_service(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ServicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let service = app_state.catalog_service.update_service(id, payload.into())?;
    Ok((StatusCode::OK, Json(service)))
}

#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = "Serviços",
    params(("id" = Uuid, Path, description = "ID do serviço")),
    responses(
        (status = 204, description = "Serviço removido (com a ficha técnica)"),
        (status = 404, description = "Serviço não encontrado")
    )
)]
pub async fn delete_service(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_service(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ---
// Handlers: ficha técnica
// ---

#[utoipa::path(
    get,
    path = "/api/services/{id}/compositions",
    tag = "Serviços",
    params(("id" = Uuid, Path, description = "ID do serviço")),
    responses(
        (status = 200, description = "Ficha técnica do serviço", body = Vec<ServiceComposition>),
        (status = 404, description = "Serviço não encontrado")
    )
)]
pub async fn get_compositions(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let comps = app_state.catalog_service.compositions_for(id)?;
    Ok((StatusCode::OK, Json(comps)))
}

#[utoipa::path(
    put,
    path = "/api/services/{id}/compositions",
    tag = "Serviços",
    request_body = ReplaceCompositionsPayload,
    params(("id" = Uuid, Path, description = "ID do serviço")),
    responses(
        (status = 200, description = "Ficha técnica substituída", body = Vec<ServiceComposition>),
        (status = 404, description = "Serviço não encontrado")
    )
)]
pub async fn replace_compositions(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReplaceCompositionsPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let entries = payload
        .compositions
        .into_iter()
        .map(|entry| CompositionInput {
            supply_id: entry.supply_id,
            consumption_per_service: entry.consumption_per_service,
        })
        .collect();
    let comps = app_state.catalog_service.replace_compositions(id, entries)?;
    Ok((StatusCode::OK, Json(comps)))
}

// ---
// Handler: precificação
// ---

#[utoipa::path(
    get,
    path = "/api/services/pricing",
    tag = "Serviços",
    responses(
        (status = 200, description = "Custo, preço sugerido e margens de cada serviço", body = Vec<ServicePriceEntry>)
    )
)]
pub async fn get_pricing(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.catalog_service.price_entries())))
}
