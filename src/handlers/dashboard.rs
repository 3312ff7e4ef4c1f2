// src/handlers/dashboard.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    models::dashboard::{
        DashboardSummary, MonthlyRevenueEntry, ServiceProfitabilityEntry, TopServiceEntry,
    },
};

#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Faturamento, ticket médio e ponto de equilíbrio", body = DashboardSummary)
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.dashboard_service.summary())))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/monthly-revenue",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Faturamento por mês, em ordem cronológica", body = Vec<MonthlyRevenueEntry>)
    )
)]
pub async fn get_monthly_revenue(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((
        StatusCode::OK,
        Json(app_state.dashboard_service.monthly_revenue()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/top-services",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Top 3 serviços por faturamento", body = Vec<TopServiceEntry>)
    )
)]
pub async fn get_top_services(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((
        StatusCode::OK,
        Json(app_state.dashboard_service.top_services()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/profitability",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Margem de contribuição por hora de cada serviço", body = Vec<ServiceProfitabilityEntry>)
    )
)]
pub async fn get_profitability(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((
        StatusCode::OK,
        Json(app_state.dashboard_service.profitability()),
    ))
}
