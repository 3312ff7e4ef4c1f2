// src/services/crm_service.rs

use uuid::Uuid;

use crate::{common::error::AppError, models::crm::Client, store::ClientRepository};

#[derive(Clone)]
pub struct CrmService {
    clients: ClientRepository,
}

impl CrmService {
    pub fn new(clients: ClientRepository) -> Self {
        Self { clients }
    }

    pub fn list_clients(&self) -> Vec<Client> {
        self.clients.list()
    }

    pub fn create_client(&self, name: String, phone: Option<String>) -> Client {
        self.clients.add(Client {
            id: Uuid::new_v4(),
            name,
            phone,
        })
    }

    pub fn update_client(
        &self,
        id: Uuid,
        name: String,
        phone: Option<String>,
    ) -> Result<Client, AppError> {
        self.clients.update(Client { id, name, phone })
    }

    pub fn delete_client(&self, id: Uuid) -> Result<(), AppError> {
        self.clients.delete(id)
    }

    /// Apaga todos os clientes. As vendas associadas ficam no histórico
    /// e passam a exibir "Desconhecido".
    pub fn clear_clients(&self) -> usize {
        let removed = self.clients.clear();
        tracing::warn!("Cadastro de clientes apagado ({removed} registros)");
        removed
    }
}
