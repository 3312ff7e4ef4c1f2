// src/services/mod.rs

pub mod catalog_service;
pub use catalog_service::CatalogService;
pub mod costs_service;
pub use costs_service::CostsService;
pub mod crm_service;
pub use crm_service::CrmService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod inventory_service;
pub use inventory_service::InventoryService;
pub mod pricing_service;
pub use pricing_service::PricingService;
pub mod sales_service;
pub use sales_service::SalesService;
