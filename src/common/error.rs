// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// O motor de precificação nunca gera erro: aqui só entram erros de
// borda (validação de formulário e referências inexistentes).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Insumo não encontrado")]
    SupplyNotFound,

    #[error("Serviço não encontrado")]
    ServiceNotFound,

    #[error("Cliente não encontrado")]
    ClientNotFound,

    #[error("Venda não encontrada")]
    SaleNotFound,

    #[error("Custo operacional não encontrado")]
    CostNotFound,

    #[error("Ativo fixo não encontrado")]
    AssetNotFound,

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::SupplyNotFound => (StatusCode::NOT_FOUND, "Insumo não encontrado."),
            AppError::ServiceNotFound => (StatusCode::NOT_FOUND, "Serviço não encontrado."),
            AppError::ClientNotFound => (StatusCode::NOT_FOUND, "Cliente não encontrado."),
            AppError::SaleNotFound => (StatusCode::NOT_FOUND, "Venda não encontrada."),
            AppError::CostNotFound => {
                (StatusCode::NOT_FOUND, "Custo operacional não encontrado.")
            }
            AppError::AssetNotFound => (StatusCode::NOT_FOUND, "Ativo fixo não encontrado."),

            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
