// src/services/dashboard_service.rs

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    models::dashboard::{
        DashboardSummary, MonthlyRevenueEntry, ServiceProfitabilityEntry, TopServiceEntry,
    },
    services::PricingService,
    store::{CatalogRepository, SaleRepository},
};

const TOP_SERVICES: usize = 3;

#[derive(Clone)]
pub struct DashboardService {
    sales: SaleRepository,
    catalog: CatalogRepository,
    pricing: PricingService,
}

impl DashboardService {
    pub fn new(
        sales: SaleRepository,
        catalog: CatalogRepository,
        pricing: PricingService,
    ) -> Self {
        Self {
            sales,
            catalog,
            pricing,
        }
    }

    pub fn summary(&self) -> DashboardSummary {
        let sales = self.sales.list();
        let total_revenue: Decimal = sales.iter().map(|v| v.amount).sum();
        let services_rendered = sales.len() as u64;
        let average_ticket = if services_rendered > 0 {
            total_revenue / Decimal::from(services_rendered)
        } else {
            Decimal::ZERO
        };

        DashboardSummary {
            total_revenue,
            services_rendered,
            average_ticket,
            break_even_revenue: self.pricing.break_even(&sales),
        }
    }

    /// Faturamento somado por mês (chave "AAAA-MM"), em ordem cronológica.
    pub fn monthly_revenue(&self) -> Vec<MonthlyRevenueEntry> {
        let mut by_month: HashMap<String, Decimal> = HashMap::new();
        for sale in self.sales.list() {
            let month = sale.sold_at.format("%Y-%m").to_string();
            *by_month.entry(month).or_insert(Decimal::ZERO) += sale.amount;
        }

        let mut entries: Vec<MonthlyRevenueEntry> = by_month
            .into_iter()
            .map(|(month, total)| MonthlyRevenueEntry { month, total })
            .collect();
        entries.sort_by(|a, b| a.month.cmp(&b.month));
        entries
    }

    /// Top 3 serviços por faturamento. Vendas de serviços apagados não
    /// entram no ranking.
    pub fn top_services(&self) -> Vec<TopServiceEntry> {
        let mut revenue_by_service: HashMap<Uuid, Decimal> = HashMap::new();
        for sale in self.sales.list() {
            if self.catalog.get_service(sale.service_id).is_some() {
                *revenue_by_service
                    .entry(sale.service_id)
                    .or_insert(Decimal::ZERO) += sale.amount;
            }
        }

        let mut entries: Vec<TopServiceEntry> = revenue_by_service
            .into_iter()
            .filter_map(|(service_id, total_revenue)| {
                self.catalog
                    .get_service(service_id)
                    .map(|service| TopServiceEntry {
                        service_id,
                        name: service.name,
                        total_revenue,
                    })
            })
            .collect();
        entries.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
        entries.truncate(TOP_SERVICES);
        entries
    }

    /// Ranking de rentabilidade: margem de contribuição por hora de cada
    /// serviço do catálogo, da maior para a menor.
    pub fn profitability(&self) -> Vec<ServiceProfitabilityEntry> {
        let details_map = self.pricing.price_details();
        let mut entries: Vec<ServiceProfitabilityEntry> = self
            .catalog
            .list_services()
            .into_iter()
            .map(|service| {
                let margin_per_hour = details_map
                    .get(&service.id)
                    .map(|d| d.contribution_margin_per_hour)
                    .unwrap_or(Decimal::ZERO);
                ServiceProfitabilityEntry {
                    service_id: service.id,
                    name: service.name,
                    contribution_margin_per_hour: margin_per_hour,
                }
            })
            .collect();
        entries.sort_by(|a, b| {
            b.contribution_margin_per_hour
                .cmp(&a.contribution_margin_per_hour)
        });
        entries
    }
}
