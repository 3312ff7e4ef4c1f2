//! Testes do motor de precificação
//!
//! Cobre as propriedades observáveis do cálculo:
//! - serviços sem ficha técnica e sem ativos custam zero
//! - custo total nunca fica abaixo de material + amortização
//! - horas trabalhadas zeradas não geram divisão por zero
//! - preço manual vale ao pé da letra
//! - o motor é total: qualquer entrada bem tipada produz uma entrada
//!   por serviço, sem pânico

use std::str::FromStr;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use esmalteria_backend::models::{
    catalog::{Service, ServiceComposition},
    costs::{CostKind, FixedAsset, OperationalCost},
    inventory::{Supply, UnitOfMeasure},
    pricing::PricingPolicy,
};
use esmalteria_backend::services::pricing_service::compute_price_details;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn approx_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < dec("0.000000001")
}

fn service(name: &str, duration_minutes: u32, margin: &str) -> Service {
    Service {
        id: Uuid::new_v4(),
        name: name.to_string(),
        duration_minutes,
        desired_margin: dec(margin),
        manual_price: None,
    }
}

fn supply(name: &str, package_size: &str, package_cost: &str) -> Supply {
    Supply {
        id: Uuid::new_v4(),
        name: name.to_string(),
        brand: "Genérica".to_string(),
        unit: UnitOfMeasure::G,
        package_size: dec(package_size),
        package_cost: dec(package_cost),
        purchase_date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
        expiry_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        supplier: "Fornecedor".to_string(),
        current_stock: dec("2"),
        min_stock_alert: dec("0.5"),
    }
}

// ============================================================================
// Testes de unidade
// ============================================================================

#[test]
fn servicos_sem_ficha_e_sem_ativos_custam_zero() {
    let services = vec![
        service("Manicure Simples", 60, "0.9"),
        service("Spa dos Pés", 45, "0.8"),
    ];
    let map = compute_price_details(
        &services,
        &[],
        &[],
        &[],
        &[],
        dec("160"),
        PricingPolicy::default(),
    );

    assert_eq!(map.len(), 2);
    for details in map.values() {
        assert_eq!(details.material_cost, Decimal::ZERO);
        assert_eq!(details.amortization_cost, Decimal::ZERO);
    }
}

#[test]
fn custo_total_nunca_fica_abaixo_de_material_mais_amortizacao() {
    let svc = service("Esmaltação em Gel", 90, "0.867");
    let gel = supply("Gel Construtor", "24", "67.00");
    let comps = vec![ServiceComposition {
        id: Uuid::new_v4(),
        service_id: svc.id,
        supply_id: gel.id,
        consumption_per_service: dec("0.6"),
    }];
    let costs = vec![
        OperationalCost {
            id: Uuid::new_v4(),
            description: "Aluguel".to_string(),
            kind: CostKind::Fixed,
            monthly_value: dec("800.00"),
            registered_at: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        },
        OperationalCost {
            id: Uuid::new_v4(),
            description: "Energia".to_string(),
            kind: CostKind::Variable,
            monthly_value: dec("150.00"),
            registered_at: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        },
    ];

    let map = compute_price_details(
        std::slice::from_ref(&svc),
        &comps,
        std::slice::from_ref(&gel),
        &[],
        &costs,
        dec("160"),
        PricingPolicy::default(),
    );
    let details = &map[&svc.id];

    assert!(details.fixed_cost_share > Decimal::ZERO);
    assert!(details.variable_cost_share > Decimal::ZERO);
    assert!(details.total_cost >= details.material_cost + details.amortization_cost);
}

#[test]
fn horas_zeradas_nao_propagam_divisao_por_zero() {
    let svc = service("Manicure Simples", 60, "0.9");
    let costs = vec![OperationalCost {
        id: Uuid::new_v4(),
        description: "Aluguel".to_string(),
        kind: CostKind::Fixed,
        monthly_value: dec("800.00"),
        registered_at: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    }];

    let map = compute_price_details(
        std::slice::from_ref(&svc),
        &[],
        &[],
        &[],
        &costs,
        Decimal::ZERO,
        PricingPolicy::default(),
    );
    let details = &map[&svc.id];
    assert_eq!(details.fixed_cost_share, Decimal::ZERO);
    assert_eq!(details.variable_cost_share, Decimal::ZERO);
}

#[test]
fn preco_manual_ignora_a_margem() {
    let mut svc = service("Unha de Fibra de Vidro", 180, "0.875");
    svc.manual_price = Some(dec("150.00"));
    let gel = supply("Gel Construtor", "24", "67.00");
    let comps = vec![ServiceComposition {
        id: Uuid::new_v4(),
        service_id: svc.id,
        supply_id: gel.id,
        consumption_per_service: dec("1.2"),
    }];

    let map = compute_price_details(
        std::slice::from_ref(&svc),
        &comps,
        std::slice::from_ref(&gel),
        &[],
        &[],
        dec("160"),
        PricingPolicy::default(),
    );
    assert_eq!(map[&svc.id].suggested_price, dec("150.00"));
}

#[test]
fn exemplo_completo_com_amortizacao_e_rateio() {
    // O cenário da esmaltação em gel: 90 min, gel de 24 g a R$ 67,00
    // consumindo 0.6 g, cabine de R$ 150,00 com 3000h de vida útil,
    // aluguel de R$ 800,00 fixo e R$ 160,00 variável sobre 160h.
    let svc = service("Esmaltação em Gel", 90, "0.867");
    let gel = supply("Gel Construtor", "24", "67.00");
    let comps = vec![ServiceComposition {
        id: Uuid::new_v4(),
        service_id: svc.id,
        supply_id: gel.id,
        consumption_per_service: dec("0.6"),
    }];
    let assets = vec![FixedAsset {
        id: Uuid::new_v4(),
        name: "Cabine UV/LED".to_string(),
        acquisition_cost: dec("150.00"),
        useful_life_hours: dec("3000"),
        related_services: vec![svc.id],
    }];
    let costs = vec![
        OperationalCost {
            id: Uuid::new_v4(),
            description: "Aluguel".to_string(),
            kind: CostKind::Fixed,
            monthly_value: dec("800.00"),
            registered_at: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        },
        OperationalCost {
            id: Uuid::new_v4(),
            description: "Energia".to_string(),
            kind: CostKind::Variable,
            monthly_value: dec("160.00"),
            registered_at: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        },
    ];

    let map = compute_price_details(
        std::slice::from_ref(&svc),
        &comps,
        std::slice::from_ref(&gel),
        &assets,
        &costs,
        dec("160"),
        PricingPolicy::default(),
    );
    let details = &map[&svc.id];

    // material: (67/24) * 0.6 = 1.675
    assert!(approx_eq(details.material_cost, dec("1.675")));
    // amortização: (150/3000) * 1.5h = 0.075
    assert!(approx_eq(details.amortization_cost, dec("0.075")));
    // rateios: 5/h fixo e 1/h variável sobre 1.5h
    assert!(approx_eq(details.fixed_cost_share, dec("7.5")));
    assert!(approx_eq(details.variable_cost_share, dec("1.5")));
    // total: 1.675 + 0.075 + 7.5 + 1.5
    assert!(approx_eq(details.total_cost, dec("10.75")));
    // preço: (1.675 + 0.075) * 1.867 = 3.26725
    assert!(approx_eq(details.suggested_price, dec("3.26725")));
    // margem: preço - (1.675 + 0.075 + 1.5)
    assert!(approx_eq(details.contribution_margin, dec("0.01725")));
    // margem/hora: 0.01725 / 1.5
    assert!(approx_eq(details.contribution_margin_per_hour, dec("0.0115")));
}

// ============================================================================
// Propriedades (o motor é total)
// ============================================================================

fn decimal_strategy(max_mantissa: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_mantissa, 0u32..=2).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn service_strategy() -> impl Strategy<Value = Service> {
    (0u32..=600, decimal_strategy(300)).prop_map(|(duration_minutes, desired_margin)| Service {
        id: Uuid::new_v4(),
        name: "Serviço".to_string(),
        duration_minutes,
        desired_margin,
        manual_price: None,
    })
}

fn supply_strategy() -> impl Strategy<Value = Supply> {
    (decimal_strategy(100), decimal_strategy(20_000)).prop_map(|(package_size, package_cost)| {
        Supply {
            id: Uuid::new_v4(),
            name: "Insumo".to_string(),
            brand: "Genérica".to_string(),
            unit: UnitOfMeasure::Ml,
            package_size,
            package_cost,
            purchase_date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            supplier: "Fornecedor".to_string(),
            current_stock: Decimal::ONE,
            min_stock_alert: Decimal::ZERO,
        }
    })
}

proptest! {
    // Entradas arbitrárias (inclusive embalagens zeradas e fichas
    // apontando para insumos que não existem) nunca derrubam o motor e
    // sempre produzem uma entrada por serviço.
    #[test]
    fn motor_e_total_sobre_entradas_arbitrarias(
        services in prop::collection::vec(service_strategy(), 0..8),
        supplies in prop::collection::vec(supply_strategy(), 0..8),
        consumption in decimal_strategy(50),
        labor_hours in decimal_strategy(400),
    ) {
        // Liga cada serviço ao primeiro insumo e a um id inexistente.
        let mut compositions = Vec::new();
        for svc in &services {
            if let Some(sup) = supplies.first() {
                compositions.push(ServiceComposition {
                    id: Uuid::new_v4(),
                    service_id: svc.id,
                    supply_id: sup.id,
                    consumption_per_service: consumption,
                });
            }
            compositions.push(ServiceComposition {
                id: Uuid::new_v4(),
                service_id: svc.id,
                supply_id: Uuid::new_v4(),
                consumption_per_service: consumption,
            });
        }

        let map = compute_price_details(
            &services,
            &compositions,
            &supplies,
            &[],
            &[],
            labor_hours,
            PricingPolicy::default(),
        );

        prop_assert_eq!(map.len(), services.len());
        for svc in &services {
            let details = &map[&svc.id];
            prop_assert!(details.material_cost >= Decimal::ZERO);
            prop_assert!(
                details.total_cost >= details.material_cost + details.amortization_cost
            );
        }
    }
}
