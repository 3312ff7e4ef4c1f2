// src/store/seed.rs
//
// Carga de demonstração com os dados reais do estúdio (ativada por
// SEED_DEMO=1). Como nada é persistido, é o jeito de subir a API já
// navegável.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    catalog::{Service, ServiceComposition},
    costs::{CostKind, FixedAsset, OperationalCost},
    crm::Client,
    inventory::{Supply, UnitOfMeasure},
    sales::{PaymentMethod, Sale},
};
use crate::store::{
    CatalogRepository, ClientRepository, CostRepository, SaleRepository, SupplyRepository,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("data fixa de demonstração válida")
}

fn supply(
    name: &str,
    brand: &str,
    unit: UnitOfMeasure,
    package_size: Decimal,
    package_cost: Decimal,
    purchase: NaiveDate,
    expiry: NaiveDate,
    supplier: &str,
    stock: Decimal,
    min_alert: Decimal,
) -> Supply {
    Supply {
        id: Uuid::new_v4(),
        name: name.to_string(),
        brand: brand.to_string(),
        unit,
        package_size,
        package_cost,
        purchase_date: purchase,
        expiry_date: expiry,
        supplier: supplier.to_string(),
        current_stock: stock,
        min_stock_alert: min_alert,
    }
}

pub fn seed_demo(
    supplies: &SupplyRepository,
    catalog: &CatalogRepository,
    clients: &ClientRepository,
    costs: &CostRepository,
    sales: &SaleRepository,
) {
    // --- Clientes ---
    let ana = clients.add(Client {
        id: Uuid::new_v4(),
        name: "Ana Silva".to_string(),
        phone: Some("11987654321".to_string()),
    });
    let beatriz = clients.add(Client {
        id: Uuid::new_v4(),
        name: "Beatriz Costa".to_string(),
        phone: Some("21912345678".to_string()),
    });
    let carla = clients.add(Client {
        id: Uuid::new_v4(),
        name: "Carla Dias".to_string(),
        phone: Some("31988887777".to_string()),
    });

    // --- Insumos ---
    let kit_descartavel = supplies.add(supply(
        "Kit Manicure Descartável",
        "Clean Express",
        UnitOfMeasure::Un,
        Decimal::ONE,
        Decimal::new(193, 2),
        date(2023, 10, 1),
        date(2025, 10, 1),
        "Distribuidor Local",
        Decimal::from(50),
        Decimal::from(10),
    ));
    let gel = supplies.add(supply(
        "Gel Construtor Classic Pink",
        "Vòlia",
        UnitOfMeasure::G,
        Decimal::from(24),
        Decimal::new(6700, 2),
        date(2023, 10, 1),
        date(2024, 10, 1),
        "Cosméticos Web",
        Decimal::from(2),
        Decimal::new(5, 1),
    ));
    let fibra = supplies.add(supply(
        "Fibra de Vidro em Rolo",
        "W&K",
        UnitOfMeasure::Un,
        Decimal::from(50),
        Decimal::new(600, 2),
        date(2023, 9, 15),
        date(2026, 9, 15),
        "MissNails",
        Decimal::from(3),
        Decimal::ONE,
    ));
    let primer = supplies.add(supply(
        "Desidratador/Primer",
        "Genérica",
        UnitOfMeasure::Ml,
        Decimal::from(15),
        Decimal::new(2000, 2),
        date(2023, 9, 1),
        date(2025, 3, 1),
        "Distribuidor Local",
        Decimal::ONE,
        Decimal::new(2, 1),
    ));
    let top_coat = supplies.add(supply(
        "Top Coat Selante",
        "Genérica",
        UnitOfMeasure::Ml,
        Decimal::from(15),
        Decimal::new(3000, 2),
        date(2023, 9, 1),
        date(2025, 9, 1),
        "Cosméticos Web",
        Decimal::new(15, 1),
        Decimal::new(5, 1),
    ));

    // --- Serviços ---
    let manicure = catalog.add_service(Service {
        id: Uuid::new_v4(),
        name: "Manicure Simples".to_string(),
        duration_minutes: 60,
        desired_margin: Decimal::new(90, 2),
        manual_price: None,
    });
    let esmaltacao = catalog.add_service(Service {
        id: Uuid::new_v4(),
        name: "Esmaltação em Gel".to_string(),
        duration_minutes: 90,
        desired_margin: Decimal::new(867, 3),
        manual_price: None,
    });
    let fibra_vidro = catalog.add_service(Service {
        id: Uuid::new_v4(),
        name: "Unha de Fibra de Vidro".to_string(),
        duration_minutes: 180,
        desired_margin: Decimal::new(875, 3),
        manual_price: None,
    });

    // --- Fichas técnicas ---
    let comp = |service_id: Uuid, supply_id: Uuid, consumption: Decimal| ServiceComposition {
        id: Uuid::new_v4(),
        service_id,
        supply_id,
        consumption_per_service: consumption,
    };
    catalog.replace_compositions(
        manicure.id,
        vec![comp(manicure.id, kit_descartavel.id, Decimal::ONE)],
    );
    catalog.replace_compositions(
        esmaltacao.id,
        vec![
            comp(esmaltacao.id, primer.id, Decimal::new(25, 2)), // 15ml / 60 aplicações
            comp(esmaltacao.id, gel.id, Decimal::new(6, 1)),     // 24g / 40 aplicações
            comp(esmaltacao.id, top_coat.id, Decimal::new(3, 1)), // 15ml / 50 aplicações
        ],
    );
    catalog.replace_compositions(
        fibra_vidro.id,
        vec![
            comp(fibra_vidro.id, primer.id, Decimal::new(25, 2)),
            comp(fibra_vidro.id, gel.id, Decimal::new(12, 1)), // 24g / 20 aplicações
            comp(fibra_vidro.id, fibra.id, Decimal::ONE),      // 50 unhas / 50 aplicações
            comp(fibra_vidro.id, top_coat.id, Decimal::new(3, 1)),
        ],
    );

    // --- Ativos fixos ---
    costs.add_asset(FixedAsset {
        id: Uuid::new_v4(),
        name: "Cabine UV/LED".to_string(),
        acquisition_cost: Decimal::new(15000, 2),
        useful_life_hours: Decimal::from(3000),
        related_services: vec![esmaltacao.id, fibra_vidro.id],
    });
    costs.add_asset(FixedAsset {
        id: Uuid::new_v4(),
        name: "Lixadeira Elétrica".to_string(),
        acquisition_cost: Decimal::new(12000, 2),
        useful_life_hours: Decimal::from(1000),
        related_services: vec![esmaltacao.id, fibra_vidro.id],
    });
    costs.add_asset(FixedAsset {
        id: Uuid::new_v4(),
        name: "Autoclave".to_string(),
        acquisition_cost: Decimal::new(150000, 2),
        useful_life_hours: Decimal::from(5000),
        related_services: vec![manicure.id, esmaltacao.id, fibra_vidro.id],
    });

    // --- Custos operacionais ---
    let cost = |description: &str, kind: CostKind, monthly: Decimal| OperationalCost {
        id: Uuid::new_v4(),
        description: description.to_string(),
        kind,
        monthly_value: monthly,
        registered_at: date(2023, 1, 1),
    };
    costs.add_cost(cost(
        "Aluguel do Espaço",
        CostKind::Fixed,
        Decimal::new(80000, 2),
    ));
    costs.add_cost(cost(
        "Plano de Internet",
        CostKind::Fixed,
        Decimal::new(9990, 2),
    ));
    costs.add_cost(cost(
        "Contribuição MEI (DAS)",
        CostKind::Fixed,
        Decimal::new(8090, 2),
    ));
    costs.add_cost(cost(
        "Energia Elétrica",
        CostKind::Variable,
        Decimal::new(15000, 2),
    ));

    // --- Vendas recentes ---
    // Entram direto no histórico, sem baixa de estoque: o saldo inicial
    // dos insumos já é o saldo de hoje.
    let sale = |days_ago: i64, client_id: Uuid, service_id: Uuid, amount: Decimal, payment| Sale {
        id: Uuid::new_v4(),
        sold_at: Utc::now() - Duration::days(days_ago),
        client_id,
        service_id,
        quantity: 1,
        amount,
        payment_method: payment,
    };
    sales.add(sale(
        2,
        ana.id,
        fibra_vidro.id,
        Decimal::new(12000, 2),
        PaymentMethod::Credito,
    ));
    sales.add(sale(
        1,
        beatriz.id,
        esmaltacao.id,
        Decimal::new(6000, 2),
        PaymentMethod::Pix,
    ));
    sales.add(sale(
        0,
        carla.id,
        manicure.id,
        Decimal::new(2500, 2),
        PaymentMethod::Dinheiro,
    ));
}
