// src/services/sales_service.rs

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::sales::{AgendaDay, AgendaEntry, PaymentMethod, Sale},
    store::{CatalogRepository, ClientRepository, SaleRepository, SupplyRepository},
};

// Nome exibido quando a venda aponta para um cadastro apagado.
const UNKNOWN: &str = "Desconhecido";

// Base da sugestão de horas quando não há venda recente.
const FALLBACK_LABOR_HOURS: u32 = 160;

#[derive(Clone)]
pub struct SalesService {
    sales: SaleRepository,
    catalog: CatalogRepository,
    supplies: SupplyRepository,
    clients: ClientRepository,
}

impl SalesService {
    pub fn new(
        sales: SaleRepository,
        catalog: CatalogRepository,
        supplies: SupplyRepository,
        clients: ClientRepository,
    ) -> Self {
        Self {
            sales,
            catalog,
            supplies,
            clients,
        }
    }

    pub fn list_sales(&self) -> Vec<Sale> {
        self.sales.list()
    }

    /// Registra a venda e baixa o estoque da ficha técnica do serviço:
    /// cada insumo perde `consumo / tamanho da embalagem` embalagens.
    /// Insumo apagado ou com embalagem zerada fica de fora da baixa.
    pub fn register_sale(
        &self,
        client_id: Uuid,
        service_id: Uuid,
        quantity: u32,
        amount: Decimal,
        payment_method: PaymentMethod,
    ) -> Result<Sale, AppError> {
        self.catalog
            .get_service(service_id)
            .ok_or(AppError::ServiceNotFound)?;
        self.clients.get(client_id).ok_or(AppError::ClientNotFound)?;

        let sale = Sale {
            id: Uuid::new_v4(),
            sold_at: Utc::now(),
            client_id,
            service_id,
            quantity,
            amount,
            payment_method,
        };

        self.apply_stock_delta(service_id, Decimal::NEGATIVE_ONE);
        Ok(self.sales.add(sale))
    }

    /// Apaga a venda e devolve ao estoque exatamente o que a baixa tirou.
    pub fn delete_sale(&self, id: Uuid) -> Result<(), AppError> {
        let sale = self.sales.delete(id).ok_or(AppError::SaleNotFound)?;
        self.apply_stock_delta(sale.service_id, Decimal::ONE);
        Ok(())
    }

    /// Zera o histórico do caixa. O estoque NÃO é devolvido: limpar o
    /// histórico não desfaz os atendimentos que aconteceram.
    pub fn clear_sales(&self) -> usize {
        let removed = self.sales.clear();
        tracing::warn!("Histórico de vendas apagado ({removed} registros)");
        removed
    }

    fn apply_stock_delta(&self, service_id: Uuid, direction: Decimal) {
        for comp in self.catalog.compositions_for(service_id) {
            let Some(supply) = self.supplies.get(comp.supply_id) else {
                continue;
            };
            if supply.package_size.is_zero() {
                continue;
            }
            let packages = comp.consumption_per_service / supply.package_size;
            self.supplies.adjust_stock(comp.supply_id, packages * direction);
        }
    }

    // ---
    // Agenda
    // ---

    /// Vendas agrupadas por dia, do mais recente para o mais antigo.
    /// Cadastro apagado aparece como "Desconhecido".
    pub fn agenda(&self) -> Vec<AgendaDay> {
        let mut days: Vec<AgendaDay> = Vec::new();
        // O histórico já está do mais novo para o mais antigo.
        for sale in self.sales.list() {
            let date = sale.sold_at.date_naive();
            let entry = AgendaEntry {
                sale_id: sale.id,
                client_name: self
                    .clients
                    .get(sale.client_id)
                    .map(|c| c.name)
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                service_name: self
                    .catalog
                    .get_service(sale.service_id)
                    .map(|s| s.name)
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                amount: sale.amount,
            };
            match days.last_mut() {
                Some(day) if day.date == date => day.entries.push(entry),
                _ => days.push(AgendaDay {
                    date,
                    entries: vec![entry],
                }),
            }
        }
        days.sort_by(|a, b| b.date.cmp(&a.date));
        days
    }

    // ---
    // Sugestão de horas trabalhadas
    // ---

    /// Estima as horas trabalhadas por mês a partir do volume de vendas
    /// dos últimos 30 dias (duração do serviço vezes a quantidade).
    /// Sem venda recente, devolve o padrão de 160h.
    pub fn estimate_monthly_labor_hours(&self) -> (Decimal, u64) {
        let cutoff = Utc::now() - Duration::days(30);
        let mut minutes = Decimal::ZERO;
        let mut counted = 0u64;

        for sale in self.sales.list() {
            if sale.sold_at < cutoff {
                continue;
            }
            let Some(service) = self.catalog.get_service(sale.service_id) else {
                continue;
            };
            minutes += Decimal::from(service.duration_minutes) * Decimal::from(sale.quantity);
            counted += 1;
        }

        if counted == 0 {
            (Decimal::from(FALLBACK_LABOR_HOURS), 0)
        } else {
            (minutes / Decimal::from(60), counted)
        }
    }
}
