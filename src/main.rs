// src/main.rs

use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use esmalteria_backend::{config::AppState, docs::ApiDoc, handlers};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não
    // deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    let inventory_routes = Router::new()
        .route(
            "/supplies",
            post(handlers::inventory::create_supply).get(handlers::inventory::get_all_supplies),
        )
        .route(
            "/supplies/{id}",
            put(handlers::inventory::update_supply).delete(handlers::inventory::delete_supply),
        )
        .route("/alerts", get(handlers::inventory::get_stock_alerts));

    let catalog_routes = Router::new()
        .route(
            "/",
            post(handlers::catalog::create_service).get(handlers::catalog::get_all_services),
        )
        .route("/pricing", get(handlers::catalog::get_pricing))
        .route(
            "/{id}",
            put(handlers::catalog::update_service).delete(handlers::catalog::delete_service),
        )
        .route(
            "/{id}/compositions",
            get(handlers::catalog::get_compositions).put(handlers::catalog::replace_compositions),
        );

    let client_routes = Router::new()
        .route(
            "/",
            post(handlers::crm::create_client).get(handlers::crm::get_all_clients),
        )
        .route(
            "/{id}",
            put(handlers::crm::update_client).delete(handlers::crm::delete_client),
        );

    let sales_routes = Router::new()
        .route(
            "/",
            post(handlers::sales::register_sale).get(handlers::sales::get_all_sales),
        )
        .route("/agenda", get(handlers::sales::get_agenda))
        .route("/{id}", axum::routing::delete(handlers::sales::delete_sale));

    let costs_routes = Router::new()
        .route(
            "/",
            post(handlers::costs::create_cost).get(handlers::costs::get_all_costs),
        )
        .route(
            "/assets",
            post(handlers::costs::create_asset).get(handlers::costs::get_all_assets),
        )
        .route(
            "/assets/{id}",
            put(handlers::costs::update_asset).delete(handlers::costs::delete_asset),
        )
        .route(
            "/{id}",
            put(handlers::costs::update_cost).delete(handlers::costs::delete_cost),
        );

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .route(
            "/monthly-revenue",
            get(handlers::dashboard::get_monthly_revenue),
        )
        .route("/top-services", get(handlers::dashboard::get_top_services))
        .route("/profitability", get(handlers::dashboard::get_profitability));

    let settings_routes = Router::new()
        .route("/", get(handlers::settings::get_settings))
        .route(
            "/labor-hours",
            put(handlers::settings::update_labor_hours),
        )
        .route(
            "/labor-hours/estimate",
            get(handlers::settings::estimate_labor_hours),
        )
        .route("/clear-sales", post(handlers::settings::clear_sales))
        .route("/clear-clients", post(handlers::settings::clear_clients));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/inventory", inventory_routes)
        .nest("/api/services", catalog_routes)
        .nest("/api/clients", client_routes)
        .nest("/api/sales", sales_routes)
        .nest("/api/costs", costs_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/settings", settings_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
