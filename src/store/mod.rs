// src/store/mod.rs
//
// O "banco" da aplicação: coleções em memória, uma por domínio.
// Nada é persistido; o estado zera a cada reinício do processo.
// Cada repositório carrega um contador de versão incrementado a cada
// escrita, usado como chave de memoização da precificação.

pub mod catalog_repo;
pub use catalog_repo::CatalogRepository;
pub mod costs_repo;
pub use costs_repo::CostRepository;
pub mod crm_repo;
pub use crm_repo::ClientRepository;
pub mod inventory_repo;
pub use inventory_repo::SupplyRepository;
pub mod sales_repo;
pub use sales_repo::SaleRepository;
pub mod settings_repo;
pub use settings_repo::SettingsRepository;

pub mod seed;
