// src/store/catalog_repo.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::catalog::{Service, ServiceComposition},
};

// Catálogo: serviços e suas fichas técnicas (composições). As duas
// coleções vivem no mesmo repositório porque compartilham o ciclo de
// vida: apagar um serviço apaga a composição dele junto.
#[derive(Clone)]
pub struct CatalogRepository {
    services: Arc<RwLock<Vec<Service>>>,
    compositions: Arc<RwLock<Vec<ServiceComposition>>>,
    version: Arc<AtomicU64>,
}

impl CatalogRepository {
    pub fn new() -> Self {
        Self {
            services: Arc::new(RwLock::new(Vec::new())),
            compositions: Arc::new(RwLock::new(Vec::new())),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    fn bump(&self) {
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    // ---
    // Serviços
    // ---

    pub fn list_services(&self) -> Vec<Service> {
        self.services.read().clone()
    }

    pub fn get_service(&self, id: Uuid) -> Option<Service> {
        self.services.read().iter().find(|s| s.id == id).cloned()
    }

    pub fn add_service(&self, service: Service) -> Service {
        self.services.write().push(service.clone());
        self.bump();
        service
    }

    pub fn update_service(&self, updated: Service) -> Result<Service, AppError> {
        let mut services = self.services.write();
        let slot = services
            .iter_mut()
            .find(|s| s.id == updated.id)
            .ok_or(AppError::ServiceNotFound)?;
        *slot = updated.clone();
        drop(services);
        self.bump();
        Ok(updated)
    }

    pub fn delete_service(&self, id: Uuid) -> Result<(), AppError> {
        let mut services = self.services.write();
        let before = services.len();
        services.retain(|s| s.id != id);
        if services.len() == before {
            return Err(AppError::ServiceNotFound);
        }
        drop(services);

        // A ficha técnica não sobrevive ao serviço.
        self.compositions.write().retain(|c| c.service_id != id);
        self.bump();
        Ok(())
    }

    // ---
    // Composições
    // ---

    pub fn list_compositions(&self) -> Vec<ServiceComposition> {
        self.compositions.read().clone()
    }

    pub fn compositions_for(&self, service_id: Uuid) -> Vec<ServiceComposition> {
        self.compositions
            .read()
            .iter()
            .filter(|c| c.service_id == service_id)
            .cloned()
            .collect()
    }

    /// Substitui em bloco a ficha técnica de um serviço, do jeito que o
    /// editor salva: remove tudo que era daquele serviço e grava a lista
    /// nova. Composições de outros serviços ficam intactas.
    pub fn replace_compositions(
        &self,
        service_id: Uuid,
        new_comps: Vec<ServiceComposition>,
    ) -> Vec<ServiceComposition> {
        let mut compositions = self.compositions.write();
        compositions.retain(|c| c.service_id != service_id);
        compositions.extend(new_comps.iter().cloned());
        drop(compositions);
        self.bump();
        new_comps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn service(name: &str) -> Service {
        Service {
            id: Uuid::new_v4(),
            name: name.to_string(),
            duration_minutes: 60,
            desired_margin: Decimal::ONE,
            manual_price: None,
        }
    }

    fn composition(service_id: Uuid) -> ServiceComposition {
        ServiceComposition {
            id: Uuid::new_v4(),
            service_id,
            supply_id: Uuid::new_v4(),
            consumption_per_service: Decimal::ONE,
        }
    }

    #[test]
    fn replace_compositions_preserva_outros_servicos() {
        let repo = CatalogRepository::new();
        let a = repo.add_service(service("Manicure"));
        let b = repo.add_service(service("Gel"));
        repo.replace_compositions(a.id, vec![composition(a.id), composition(a.id)]);
        repo.replace_compositions(b.id, vec![composition(b.id)]);

        repo.replace_compositions(a.id, vec![composition(a.id)]);

        assert_eq!(repo.compositions_for(a.id).len(), 1);
        assert_eq!(repo.compositions_for(b.id).len(), 1);
    }

    #[test]
    fn delete_service_remove_composicoes() {
        let repo = CatalogRepository::new();
        let a = repo.add_service(service("Fibra"));
        repo.replace_compositions(a.id, vec![composition(a.id)]);

        repo.delete_service(a.id).unwrap();

        assert!(repo.list_compositions().is_empty());
        assert!(repo.get_service(a.id).is_none());
    }

    #[test]
    fn escrita_incrementa_versao() {
        let repo = CatalogRepository::new();
        let v0 = repo.version();
        repo.add_service(service("Spa dos Pés"));
        assert!(repo.version() > v0);
    }
}
