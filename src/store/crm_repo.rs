// src/store/crm_repo.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use uuid::Uuid;

use crate::{common::error::AppError, models::crm::Client};

#[derive(Clone)]
pub struct ClientRepository {
    clients: Arc<RwLock<Vec<Client>>>,
    version: Arc<AtomicU64>,
}

impl ClientRepository {
    pub fn new() -> Self {
        Self {
            clients: Arc::new(RwLock::new(Vec::new())),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    fn bump(&self) {
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    pub fn list(&self) -> Vec<Client> {
        self.clients.read().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<Client> {
        self.clients.read().iter().find(|c| c.id == id).cloned()
    }

    pub fn add(&self, client: Client) -> Client {
        self.clients.write().push(client.clone());
        self.bump();
        client
    }

    pub fn update(&self, updated: Client) -> Result<Client, AppError> {
        let mut clients = self.clients.write();
        let slot = clients
            .iter_mut()
            .find(|c| c.id == updated.id)
            .ok_or(AppError::ClientNotFound)?;
        *slot = updated.clone();
        drop(clients);
        self.bump();
        Ok(updated)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut clients = self.clients.write();
        let before = clients.len();
        clients.retain(|c| c.id != id);
        if clients.len() == before {
            return Err(AppError::ClientNotFound);
        }
        drop(clients);
        self.bump();
        Ok(())
    }

    /// Apaga todos os clientes e devolve quantos eram. As vendas ficam:
    /// quem consultar vê o cliente como "Desconhecido".
    pub fn clear(&self) -> usize {
        let mut clients = self.clients.write();
        let removed = clients.len();
        clients.clear();
        drop(clients);
        self.bump();
        removed
    }
}
