// src/handlers/sales.rs

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
    models::sales::{AgendaDay, PaymentMethod, Sale},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSalePayload {
    pub client_id: Uuid,
    pub service_id: Uuid,

    #[validate(range(min = 1, message = "A quantidade mínima é 1."))]
    pub quantity: u32,

    // Valor efetivamente cobrado da cliente.
    #[validate(custom(function = validate_not_negative))]
    pub amount: Decimal,

    pub payment_method: PaymentMethod,
}

#[utoipa::path(
    post,
    path = "/api/sales",
    tag = "Caixa",
    request_body = RegisterSalePayload,
    responses(
        (status = 201, description = "Venda registrada (estoque baixado)", body = Sale),
        (status = 400, description = "Payload inválido"),
        (status = 404, description = "Cliente ou serviço não encontrado")
    )
)]
pub async fn register_sale(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterSalePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let sale = app_state.sales_service.register_sale(
        payload.client_id,
        payload.service_id,
        payload.quantity,
        payload.amount,
        payload.payment_method,
    )?;
    Ok((StatusCode::CREATED, Json(sale)))
}

#[utoipa::path(
    get,
    path = "/api/sales",
    tag = "Caixa",
    responses(
        (status = 200, description = "Histórico de vendas, da mais recente para a mais antiga", body = Vec<Sale>)
    )
)]
pub async fn get_all_sales(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.sales_service.list_sales())))
}

#[utoipa::path(
    delete,
    path = "/api/sales/{id}",
    tag = "Caixa",
    params(("id" = Uuid, Path, description = "ID da venda")),
    responses(
        (status = 204, description = "Venda apagada (estoque devolvido)"),
        (status = 404, description = "Venda não encontrada")
    )
)]
pub async fn delete_sale(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.sales_service.delete_sale(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/sales/agenda",
    tag = "Caixa",
    responses(
        (status = 200, description = "Vendas agrupadas por dia", body = Vec<AgendaDay>)
    )
)]
pub async fn get_agenda(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.sales_service.agenda())))
}
