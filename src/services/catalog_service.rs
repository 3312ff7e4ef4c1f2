// src/services/catalog_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        catalog::{Service, ServiceComposition},
        pricing::ServicePriceEntry,
    },
    services::PricingService,
    store::CatalogRepository,
};

#[derive(Clone)]
pub struct CatalogService {
    catalog: CatalogRepository,
    pricing: PricingService,
}

pub struct ServiceInput {
    pub name: String,
    pub duration_minutes: u32,
    pub desired_margin: Decimal,
    pub manual_price: Option<Decimal>,
}

pub struct CompositionInput {
    pub supply_id: Uuid,
    pub consumption_per_service: Decimal,
}

impl CatalogService {
    pub fn new(catalog: CatalogRepository, pricing: PricingService) -> Self {
        Self { catalog, pricing }
    }

    // ---
    // Serviços
    // ---

    pub fn list_services(&self) -> Vec<Service> {
        self.catalog.list_services()
    }

    pub fn create_service(&self, input: ServiceInput) -> Service {
        let service = Service {
            id: Uuid::new_v4(),
            name: input.name,
            duration_minutes: input.duration_minutes,
            desired_margin: input.desired_margin,
            manual_price: input.manual_price,
        };
        tracing::info!("Serviço cadastrado: {}", service.name);
        self.catalog.add_service(service)
    }

    pub fn update_service(&self, id: Uuid, input: ServiceInput) -> Result<Service, AppError> {
        self.catalog.update_service(Service {
            id,
            name: input.name,
            duration_minutes: input.duration_minutes,
            desired_margin: input.desired_margin,
            manual_price: input.manual_price,
        })
    }

    pub fn delete_service(&self, id: Uuid) -> Result<(), AppError> {
        self.catalog.delete_service(id)
    }

    // ---
    // Composições
    // ---

    pub fn compositions_for(&self, service_id: Uuid) -> Result<Vec<ServiceComposition>, AppError> {
        self.catalog
            .get_service(service_id)
            .ok_or(AppError::ServiceNotFound)?;
        Ok(self.catalog.compositions_for(service_id))
    }

    /// Salva a ficha técnica inteira de uma vez, como o editor manda.
    pub fn replace_compositions(
        &self,
        service_id: Uuid,
        entries: Vec<CompositionInput>,
    ) -> Result<Vec<ServiceComposition>, AppError> {
        self.catalog
            .get_service(service_id)
            .ok_or(AppError::ServiceNotFound)?;

        let comps = entries
            .into_iter()
            .map(|entry| ServiceComposition {
                id: Uuid::new_v4(),
                service_id,
                supply_id: entry.supply_id,
                consumption_per_service: entry.consumption_per_service,
            })
            .collect();
        Ok(self.catalog.replace_compositions(service_id, comps))
    }

    // ---
    // Precificação
    // ---

    /// Detalhamento de preço de todos os serviços, na ordem do catálogo.
    pub fn price_entries(&self) -> Vec<ServicePriceEntry> {
        let details_map = self.pricing.price_details();
        self.catalog
            .list_services()
            .into_iter()
            .filter_map(|service| {
                details_map.get(&service.id).map(|details| ServicePriceEntry {
                    service_id: service.id,
                    service_name: service.name,
                    details: details.clone(),
                })
            })
            .collect()
    }
}
