// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Estoque ---
        handlers::inventory::create_supply,
        handlers::inventory::get_all_supplies,
        handlers::inventory::update_supply,
        handlers::inventory::delete_supply,
        handlers::inventory::get_stock_alerts,

        // --- Serviços ---
        handlers::catalog::create_service,
        handlers::catalog::get_all_services,
        handlers::catalog::update_service,
        handlers::catalog::delete_service,
        handlers::catalog::get_compositions,
        handlers::catalog::replace_compositions,
        handlers::catalog::get_pricing,

        // --- Clientes ---
        handlers::crm::create_client,
        handlers::crm::get_all_clients,
        handlers::crm::update_client,
        handlers::crm::delete_client,

        // --- Caixa ---
        handlers::sales::register_sale,
        handlers::sales::get_all_sales,
        handlers::sales::delete_sale,
        handlers::sales::get_agenda,

        // --- Custos ---
        handlers::costs::create_cost,
        handlers::costs::get_all_costs,
        handlers::costs::update_cost,
        handlers::costs::delete_cost,
        handlers::costs::create_asset,
        handlers::costs::get_all_assets,
        handlers::costs::update_asset,
        handlers::costs::delete_asset,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_monthly_revenue,
        handlers::dashboard::get_top_services,
        handlers::dashboard::get_profitability,

        // --- Configurações ---
        handlers::settings::get_settings,
        handlers::settings::update_labor_hours,
        handlers::settings::estimate_labor_hours,
        handlers::settings::clear_sales,
        handlers::settings::clear_clients,
    ),
    components(
        schemas(
            // --- Estoque ---
            models::inventory::UnitOfMeasure,
            models::inventory::Supply,
            models::inventory::StockAlert,
            models::inventory::StockAlertKind,
            handlers::inventory::SupplyPayload,

            // --- Serviços ---
            models::catalog::Service,
            models::catalog::ServiceComposition,
            handlers::catalog::ServicePayload,
            handlers::catalog::CompositionEntryPayload,
            handlers::catalog::ReplaceCompositionsPayload,

            // --- Precificação ---
            models::pricing::MarkupConvention,
            models::pricing::CostAllocation,
            models::pricing::PricingPolicy,
            models::pricing::PriceDetails,
            models::pricing::ServicePriceEntry,

            // --- Clientes ---
            models::crm::Client,
            handlers::crm::ClientPayload,

            // --- Caixa ---
            models::sales::PaymentMethod,
            models::sales::Sale,
            models::sales::AgendaEntry,
            models::sales::AgendaDay,
            handlers::sales::RegisterSalePayload,

            // --- Custos ---
            models::costs::CostKind,
            models::costs::OperationalCost,
            models::costs::FixedAsset,
            handlers::costs::OperationalCostPayload,
            handlers::costs::FixedAssetPayload,

            // --- Dashboard ---
            models::dashboard::DashboardSummary,
            models::dashboard::MonthlyRevenueEntry,
            models::dashboard::TopServiceEntry,
            models::dashboard::ServiceProfitabilityEntry,

            // --- Configurações ---
            models::settings::StudioSettings,
            models::settings::LaborHoursEstimate,
            handlers::settings::UpdateLaborHoursPayload,
        )
    ),
    tags(
        (name = "Estoque", description = "Insumos e alertas de reposição"),
        (name = "Serviços", description = "Catálogo, ficha técnica e precificação"),
        (name = "Clientes", description = "Cadastro de clientes"),
        (name = "Caixa", description = "Registro de vendas e agenda"),
        (name = "Custos", description = "Custos operacionais e ativos fixos"),
        (name = "Dashboard", description = "Indicadores e gráficos gerenciais"),
        (name = "Configurações", description = "Horas trabalhadas e limpeza de dados")
    )
)]
pub struct ApiDoc;
