// src/config.rs

use std::env;

use anyhow::bail;
use rust_decimal::Decimal;

use crate::models::pricing::{CostAllocation, MarkupConvention, PricingPolicy};
use crate::services::{
    CatalogService, CostsService, CrmService, DashboardService, InventoryService, PricingService,
    SalesService,
};
use crate::store::{
    self, CatalogRepository, ClientRepository, CostRepository, SaleRepository, SettingsRepository,
    SupplyRepository, settings_repo::DEFAULT_MONTHLY_LABOR_HOURS,
};

#[derive(Clone)]
pub struct AppState {
    pub settings_repo: SettingsRepository,
    pub inventory_service: InventoryService,
    pub catalog_service: CatalogService,
    pub sales_service: SalesService,
    pub crm_service: CrmService,
    pub costs_service: CostsService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // A política de precificação é decisão de produto: fica explícita
        // no ambiente em vez de escondida no código.
        let policy = pricing_policy_from_env()?;
        let labor_hours = labor_hours_from_env()?;

        // --- Monta o gráfico de dependências ---
        let supply_repo = SupplyRepository::new();
        let catalog_repo = CatalogRepository::new();
        let client_repo = ClientRepository::new();
        let sale_repo = SaleRepository::new();
        let cost_repo = CostRepository::new();
        let settings_repo = SettingsRepository::new(labor_hours);

        let pricing_service = PricingService::new(
            catalog_repo.clone(),
            supply_repo.clone(),
            cost_repo.clone(),
            settings_repo.clone(),
            policy,
        );
        let inventory_service = InventoryService::new(supply_repo.clone());
        let catalog_service =
            CatalogService::new(catalog_repo.clone(), pricing_service.clone());
        let sales_service = SalesService::new(
            sale_repo.clone(),
            catalog_repo.clone(),
            supply_repo.clone(),
            client_repo.clone(),
        );
        let crm_service = CrmService::new(client_repo.clone());
        let costs_service = CostsService::new(cost_repo.clone());
        let dashboard_service = DashboardService::new(
            sale_repo.clone(),
            catalog_repo.clone(),
            pricing_service.clone(),
        );

        if env::var("SEED_DEMO").as_deref() == Ok("1") {
            store::seed::seed_demo(
                &supply_repo,
                &catalog_repo,
                &client_repo,
                &cost_repo,
                &sale_repo,
            );
            tracing::info!("✅ Dados de demonstração carregados!");
        }

        tracing::info!(
            "Política de precificação: {:?} / {:?}",
            policy.markup,
            policy.allocation
        );

        Ok(Self {
            settings_repo,
            inventory_service,
            catalog_service,
            sales_service,
            crm_service,
            costs_service,
            dashboard_service,
        })
    }
}

fn pricing_policy_from_env() -> anyhow::Result<PricingPolicy> {
    let markup = match env::var("PRICING_MARKUP").as_deref() {
        Err(_) | Ok("MARGIN_ON_COST") => MarkupConvention::MarginOnCost,
        Ok("MARGIN_ON_PRICE") => MarkupConvention::MarginOnPrice,
        Ok(other) => bail!("PRICING_MARKUP inválido: {other}"),
    };
    let allocation = match env::var("PRICING_ALLOCATION").as_deref() {
        Err(_) | Ok("SPLIT") => CostAllocation::Split,
        Ok("POOLED") => CostAllocation::Pooled,
        Ok(other) => bail!("PRICING_ALLOCATION inválido: {other}"),
    };
    Ok(PricingPolicy { markup, allocation })
}

fn labor_hours_from_env() -> anyhow::Result<Decimal> {
    match env::var("HORAS_TRABALHADAS_MES") {
        Err(_) => Ok(Decimal::from(DEFAULT_MONTHLY_LABOR_HOURS)),
        Ok(raw) => match raw.parse::<Decimal>() {
            Ok(hours) => Ok(hours),
            Err(_) => bail!("HORAS_TRABALHADAS_MES inválida: {raw}"),
        },
    }
}
