// src/services/pricing_service.rs
//
// O motor de precificação. `compute_price_details` é uma função pura e
// total: para qualquer entrada bem tipada ela produz uma entrada por
// serviço, sem pânico e sem erro. Divisor potencialmente zero
// (embalagem, vida útil, horas, preço) zera o termo; referência
// quebrada (insumo apagado) contribui zero.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    catalog::{Service, ServiceComposition},
    costs::{CostKind, FixedAsset, OperationalCost},
    inventory::Supply,
    pricing::{CostAllocation, MarkupConvention, PriceDetails, PricingPolicy},
    sales::Sale,
};
use crate::store::{CatalogRepository, CostRepository, SettingsRepository, SupplyRepository};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);
const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Calcula o detalhamento de custo/preço/margem de cada serviço.
pub fn compute_price_details(
    services: &[Service],
    compositions: &[ServiceComposition],
    supplies: &[Supply],
    assets: &[FixedAsset],
    costs: &[OperationalCost],
    labor_hours: Decimal,
    policy: PricingPolicy,
) -> HashMap<Uuid, PriceDetails> {
    let total_fixed: Decimal = costs
        .iter()
        .filter(|c| c.kind == CostKind::Fixed)
        .map(|c| c.monthly_value)
        .sum();
    let total_variable: Decimal = costs
        .iter()
        .filter(|c| c.kind == CostKind::Variable)
        .map(|c| c.monthly_value)
        .sum();

    // Taxas horárias calculadas uma vez por rodada, não por serviço.
    let (fixed_rate, variable_rate) =
        hourly_rates(total_fixed, total_variable, labor_hours, policy.allocation);

    let mut details_map = HashMap::with_capacity(services.len());
    for service in services {
        let hours = Decimal::from(service.duration_minutes) / MINUTES_PER_HOUR;

        let material_cost: Decimal = compositions
            .iter()
            .filter(|c| c.service_id == service.id)
            .map(|comp| {
                supplies
                    .iter()
                    .find(|s| s.id == comp.supply_id)
                    .map(|s| s.unit_cost() * comp.consumption_per_service)
                    .unwrap_or(Decimal::ZERO)
            })
            .sum();

        let amortization_cost: Decimal = assets
            .iter()
            .filter(|a| a.related_services.contains(&service.id) && !a.useful_life_hours.is_zero())
            .map(|a| a.acquisition_cost / a.useful_life_hours * hours)
            .sum();

        let fixed_cost_share = fixed_rate * hours;
        let variable_cost_share = variable_rate * hours;
        let total_cost = material_cost + amortization_cost + fixed_cost_share + variable_cost_share;

        // Preço fechado manda; sem ele, aplica a convenção configurada.
        let suggested_price = match service.manual_price {
            Some(price) => price,
            None => match policy.markup {
                MarkupConvention::MarginOnCost => {
                    (material_cost + amortization_cost) * (Decimal::ONE + service.desired_margin)
                }
                MarkupConvention::MarginOnPrice => {
                    let denominator = Decimal::ONE - service.desired_margin;
                    if denominator <= Decimal::ZERO {
                        Decimal::ZERO
                    } else {
                        total_cost / denominator
                    }
                }
            },
        };

        let variable_costs = material_cost + amortization_cost + variable_cost_share;
        let contribution_margin = suggested_price - variable_costs;
        let contribution_margin_percent = if suggested_price > Decimal::ZERO {
            contribution_margin / suggested_price * HUNDRED
        } else {
            Decimal::ZERO
        };
        let contribution_margin_per_hour = if hours > Decimal::ZERO {
            contribution_margin / hours
        } else {
            Decimal::ZERO
        };

        details_map.insert(
            service.id,
            PriceDetails {
                material_cost,
                amortization_cost,
                fixed_cost_share,
                variable_cost_share,
                total_cost,
                suggested_price,
                contribution_margin,
                contribution_margin_percent,
                contribution_margin_per_hour,
            },
        );
    }

    details_map
}

fn hourly_rates(
    total_fixed: Decimal,
    total_variable: Decimal,
    labor_hours: Decimal,
    allocation: CostAllocation,
) -> (Decimal, Decimal) {
    if labor_hours <= Decimal::ZERO {
        return (Decimal::ZERO, Decimal::ZERO);
    }
    match allocation {
        CostAllocation::Split => (total_fixed / labor_hours, total_variable / labor_hours),
        // Uma taxa única; reportada como rateio fixo, a parcela variável
        // zera e não entra na margem de contribuição.
        CostAllocation::Pooled => ((total_fixed + total_variable) / labor_hours, Decimal::ZERO),
    }
}

/// Ponto de equilíbrio financeiro: custos fixos mensais divididos pela
/// razão média de margem de contribuição das vendas realizadas. Zero
/// sempre que não há faturamento ou a razão não é positiva.
pub fn compute_break_even(
    sales: &[Sale],
    details_map: &HashMap<Uuid, PriceDetails>,
    total_monthly_fixed_costs: Decimal,
) -> Decimal {
    let total_revenue: Decimal = sales.iter().map(|v| v.amount).sum();
    if total_revenue <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let total_variable_costs: Decimal = sales
        .iter()
        .map(|sale| {
            details_map
                .get(&sale.service_id)
                .map(|d| {
                    (d.material_cost + d.amortization_cost + d.variable_cost_share)
                        * Decimal::from(sale.quantity)
                })
                .unwrap_or(Decimal::ZERO)
        })
        .sum();

    let ratio = (total_revenue - total_variable_costs) / total_revenue;
    if ratio <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        total_monthly_fixed_costs / ratio
    }
}

// ---
// Serviço com memoização
// ---

// Chave estrutural do cache: as versões das coleções de entrada mais as
// horas configuradas. Qualquer escrita invalida a rodada anterior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SnapshotKey {
    catalog: u64,
    supplies: u64,
    costs: u64,
    settings: u64,
}

struct CachedRun {
    key: SnapshotKey,
    details: Arc<HashMap<Uuid, PriceDetails>>,
}

// O mapa inteiro é recalculado quando qualquer entrada muda; nunca é
// remendado incrementalmente. Com dezenas de registros, recalcular é
// mais simples e rápido que manter deltas.
#[derive(Clone)]
pub struct PricingService {
    catalog: CatalogRepository,
    supplies: SupplyRepository,
    costs: CostRepository,
    settings: SettingsRepository,
    policy: PricingPolicy,
    cache: Arc<Mutex<Option<CachedRun>>>,
}

impl PricingService {
    pub fn new(
        catalog: CatalogRepository,
        supplies: SupplyRepository,
        costs: CostRepository,
        settings: SettingsRepository,
        policy: PricingPolicy,
    ) -> Self {
        Self {
            catalog,
            supplies,
            costs,
            settings,
            policy,
            cache: Arc::new(Mutex::new(None)),
        }
    }

    pub fn policy(&self) -> PricingPolicy {
        self.policy
    }

    fn snapshot_key(&self) -> SnapshotKey {
        SnapshotKey {
            catalog: self.catalog.version(),
            supplies: self.supplies.version(),
            costs: self.costs.version(),
            settings: self.settings.version(),
        }
    }

    /// Mapa serviço -> detalhamento, memoizado pela versão das entradas.
    pub fn price_details(&self) -> Arc<HashMap<Uuid, PriceDetails>> {
        let key = self.snapshot_key();

        {
            let cache = self.cache.lock();
            if let Some(cached) = cache.as_ref() {
                if cached.key == key {
                    return Arc::clone(&cached.details);
                }
            }
        }

        let details = Arc::new(compute_price_details(
            &self.catalog.list_services(),
            &self.catalog.list_compositions(),
            &self.supplies.list(),
            &self.costs.list_assets(),
            &self.costs.list_costs(),
            self.settings.monthly_labor_hours(),
            self.policy,
        ));

        *self.cache.lock() = Some(CachedRun {
            key,
            details: Arc::clone(&details),
        });
        details
    }

    pub fn details_for(&self, service_id: Uuid) -> Option<PriceDetails> {
        self.price_details().get(&service_id).cloned()
    }

    pub fn total_monthly_fixed_costs(&self) -> Decimal {
        self.costs
            .list_costs()
            .iter()
            .filter(|c| c.kind == CostKind::Fixed)
            .map(|c| c.monthly_value)
            .sum()
    }

    pub fn break_even(&self, sales: &[Sale]) -> Decimal {
        compute_break_even(
            sales,
            &self.price_details(),
            self.total_monthly_fixed_costs(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    use crate::models::inventory::UnitOfMeasure;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn approx_eq(a: Decimal, b: Decimal) -> bool {
        (a - b).abs() < dec("0.000000001")
    }

    fn service(duration_minutes: u32, margin: &str) -> Service {
        Service {
            id: Uuid::new_v4(),
            name: "Serviço de Teste".to_string(),
            duration_minutes,
            desired_margin: dec(margin),
            manual_price: None,
        }
    }

    fn supply(package_size: &str, package_cost: &str) -> Supply {
        Supply {
            id: Uuid::new_v4(),
            name: "Insumo".to_string(),
            brand: "Marca".to_string(),
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

    fn composition(service_id: Uuid, supply_id: Uuid, consumption: &str) -> ServiceComposition {
        ServiceComposition {
            id: Uuid::new_v4(),
            service_id,
            supply_id,
            consumption_per_service: dec(consumption),
        }
    }

    fn fixed_cost(value: &str) -> OperationalCost {
        OperationalCost {
            id: Uuid::new_v4(),
            description: "Aluguel".to_string(),
            kind: CostKind::Fixed,
            monthly_value: dec(value),
            registered_at: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        }
    }

    fn variable_cost(value: &str) -> OperationalCost {
        OperationalCost {
            id: Uuid::new_v4(),
            description: "Energia".to_string(),
            kind: CostKind::Variable,
            monthly_value: dec(value),
            registered_at: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        }
    }

    #[test]
    fn servico_sem_composicao_e_sem_ativo_custa_zero() {
        let svc = service(60, "0.9");
        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &[],
            &[],
            &[],
            &[],
            dec("160"),
            PricingPolicy::default(),
        );
        let details = &map[&svc.id];
        assert_eq!(details.material_cost, Decimal::ZERO);
        assert_eq!(details.amortization_cost, Decimal::ZERO);
        assert_eq!(details.suggested_price, Decimal::ZERO);
    }

    #[test]
    fn exemplo_esmaltacao_em_gel() {
        // 90 min, 0.6 g de um gel de 24 g a R$ 67,00, margem 86,7%.
        let svc = service(90, "0.867");
        let gel = supply("24", "67.00");
        let comps = vec![composition(svc.id, gel.id, "0.6")];

        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &comps,
            std::slice::from_ref(&gel),
            &[],
            &[],
            dec("160"),
            PricingPolicy::default(),
        );
        let details = &map[&svc.id];

        // custo unitário 67/24 = 2.7916..., material = 1.675
        assert!(approx_eq(details.material_cost, dec("1.675")));
        // preço = 1.675 * 1.867
        assert!(approx_eq(details.suggested_price, dec("3.127225")));
    }

    #[test]
    fn preco_manual_vale_ao_pe_da_letra() {
        let mut svc = service(90, "0.867");
        svc.manual_price = Some(dec("80.00"));
        let gel = supply("24", "67.00");
        let comps = vec![composition(svc.id, gel.id, "0.6")];

        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &comps,
            std::slice::from_ref(&gel),
            &[],
            &[fixed_cost("800")],
            dec("160"),
            PricingPolicy::default(),
        );
        assert_eq!(map[&svc.id].suggested_price, dec("80.00"));
    }

    #[test]
    fn horas_zero_zera_os_rateios() {
        let svc = service(60, "0.9");
        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &[],
            &[],
            &[],
            &[fixed_cost("800"), variable_cost("150")],
            Decimal::ZERO,
            PricingPolicy::default(),
        );
        let details = &map[&svc.id];
        assert_eq!(details.fixed_cost_share, Decimal::ZERO);
        assert_eq!(details.variable_cost_share, Decimal::ZERO);
        assert_eq!(details.total_cost, Decimal::ZERO);
    }

    #[test]
    fn rateio_separa_fixo_de_variavel() {
        // 160h de base: fixo 800 -> 5/h, variável 160 -> 1/h. Serviço de
        // 2h recebe 10 de rateio fixo e 2 de variável.
        let svc = service(120, "0.9");
        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &[],
            &[],
            &[],
            &[fixed_cost("800"), variable_cost("160")],
            dec("160"),
            PricingPolicy::default(),
        );
        let details = &map[&svc.id];
        assert_eq!(details.fixed_cost_share, dec("10"));
        assert_eq!(details.variable_cost_share, dec("2"));
        assert_eq!(details.total_cost, dec("12"));
    }

    #[test]
    fn rateio_pooled_junta_tudo_na_taxa_fixa() {
        let svc = service(120, "0.9");
        let policy = PricingPolicy {
            markup: MarkupConvention::MarginOnCost,
            allocation: CostAllocation::Pooled,
        };
        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &[],
            &[],
            &[],
            &[fixed_cost("800"), variable_cost("160")],
            dec("160"),
            policy,
        );
        let details = &map[&svc.id];
        assert_eq!(details.fixed_cost_share, dec("12"));
        assert_eq!(details.variable_cost_share, Decimal::ZERO);
    }

    #[test]
    fn amortizacao_por_hora_de_uso() {
        // Ativo de 150 com vida útil de 3000h: 0.05/h. Serviço de 90 min
        // amortiza 0.075.
        let svc = service(90, "0.9");
        let asset = FixedAsset {
            id: Uuid::new_v4(),
            name: "Cabine UV/LED".to_string(),
            acquisition_cost: dec("150.00"),
            useful_life_hours: dec("3000"),
            related_services: vec![svc.id],
        };
        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &[],
            &[],
            std::slice::from_ref(&asset),
            &[],
            dec("160"),
            PricingPolicy::default(),
        );
        assert!(approx_eq(map[&svc.id].amortization_cost, dec("0.075")));
    }

    #[test]
    fn ativo_com_vida_util_zero_contribui_zero() {
        let svc = service(90, "0.9");
        let asset = FixedAsset {
            id: Uuid::new_v4(),
            name: "Quebrado".to_string(),
            acquisition_cost: dec("150.00"),
            useful_life_hours: Decimal::ZERO,
            related_services: vec![svc.id],
        };
        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &[],
            &[],
            std::slice::from_ref(&asset),
            &[],
            dec("160"),
            PricingPolicy::default(),
        );
        assert_eq!(map[&svc.id].amortization_cost, Decimal::ZERO);
    }

    #[test]
    fn composicao_com_insumo_apagado_nao_derruba_o_calculo() {
        let svc = service(60, "0.9");
        let gel = supply("24", "67.00");
        // Uma composição aponta para um insumo que não existe mais.
        let comps = vec![
            composition(svc.id, gel.id, "0.6"),
            composition(svc.id, Uuid::new_v4(), "1.0"),
        ];
        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &comps,
            std::slice::from_ref(&gel),
            &[],
            &[],
            dec("160"),
            PricingPolicy::default(),
        );
        assert!(approx_eq(map[&svc.id].material_cost, dec("1.675")));
    }

    #[test]
    fn embalagem_de_tamanho_zero_contribui_zero() {
        let svc = service(60, "0.9");
        let estranho = supply("0", "67.00");
        let comps = vec![composition(svc.id, estranho.id, "0.6")];
        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &comps,
            std::slice::from_ref(&estranho),
            &[],
            &[],
            dec("160"),
            PricingPolicy::default(),
        );
        assert_eq!(map[&svc.id].material_cost, Decimal::ZERO);
    }

    #[test]
    fn margem_sobre_preco_resolve_o_preco_final() {
        // custo total 12 (só rateio), margem 0.4 sobre o preço:
        // preco = 12 / 0.6 = 20.
        let svc = service(120, "0.4");
        let policy = PricingPolicy {
            markup: MarkupConvention::MarginOnPrice,
            allocation: CostAllocation::Split,
        };
        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &[],
            &[],
            &[],
            &[fixed_cost("800"), variable_cost("160")],
            dec("160"),
            policy,
        );
        assert_eq!(map[&svc.id].suggested_price, dec("20"));
    }

    #[test]
    fn margem_sobre_preco_maior_ou_igual_a_um_zera_o_preco() {
        let svc = service(120, "1.0");
        let policy = PricingPolicy {
            markup: MarkupConvention::MarginOnPrice,
            allocation: CostAllocation::Split,
        };
        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &[],
            &[],
            &[],
            &[fixed_cost("800")],
            dec("160"),
            policy,
        );
        assert_eq!(map[&svc.id].suggested_price, Decimal::ZERO);
    }

    #[test]
    fn margem_de_contribuicao_exclui_rateio_fixo() {
        // material 1.675 + rateio variável 1.5 (160/160 * 1.5h)... conta
        // fechada abaixo.
        let svc = service(90, "0.867");
        let gel = supply("24", "67.00");
        let comps = vec![composition(svc.id, gel.id, "0.6")];
        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &comps,
            std::slice::from_ref(&gel),
            &[],
            &[fixed_cost("800"), variable_cost("160")],
            dec("160"),
            PricingPolicy::default(),
        );
        let details = &map[&svc.id];

        let variable_share = dec("1.5"); // 160/160 por hora * 1.5h
        assert_eq!(details.variable_cost_share, variable_share);
        let expected_margin =
            details.suggested_price - (details.material_cost + variable_share);
        assert!(approx_eq(details.contribution_margin, expected_margin));
        assert!(details.total_cost >= details.material_cost + details.amortization_cost);
    }

    #[test]
    fn break_even_zera_sem_faturamento() {
        let map = HashMap::new();
        assert_eq!(compute_break_even(&[], &map, dec("800")), Decimal::ZERO);
    }

    #[test]
    fn break_even_zera_com_razao_negativa() {
        // Venda abaixo do custo variável: razão <= 0, nada de dividir.
        let svc = service(60, "0.9");
        let gel = supply("1", "50.00");
        let comps = vec![composition(svc.id, gel.id, "1")];
        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &comps,
            std::slice::from_ref(&gel),
            &[],
            &[],
            dec("160"),
            PricingPolicy::default(),
        );
        let sale = Sale {
            id: Uuid::new_v4(),
            sold_at: chrono::Utc::now(),
            client_id: Uuid::new_v4(),
            service_id: svc.id,
            quantity: 1,
            amount: dec("10.00"),
            payment_method: crate::models::sales::PaymentMethod::Pix,
        };
        assert_eq!(
            compute_break_even(&[sale], &map, dec("800")),
            Decimal::ZERO
        );
    }

    #[test]
    fn break_even_divide_fixos_pela_razao_media() {
        // Receita 100, custo variável 40 -> razão 0.6; fixos 300 -> 500.
        let svc = service(60, "0.9");
        let gel = supply("1", "40.00");
        let comps = vec![composition(svc.id, gel.id, "1")];
        let map = compute_price_details(
            std::slice::from_ref(&svc),
            &comps,
            std::slice::from_ref(&gel),
            &[],
            &[],
            dec("160"),
            PricingPolicy::default(),
        );
        let sale = Sale {
            id: Uuid::new_v4(),
            sold_at: chrono::Utc::now(),
            client_id: Uuid::new_v4(),
            service_id: svc.id,
            quantity: 1,
            amount: dec("100.00"),
            payment_method: crate::models::sales::PaymentMethod::Pix,
        };
        let break_even = compute_break_even(&[sale], &map, dec("300"));
        assert!(approx_eq(break_even, dec("500")));
    }

    #[test]
    fn cache_invalida_quando_uma_entrada_muda() {
        let catalog = CatalogRepository::new();
        let supplies = SupplyRepository::new();
        let costs = CostRepository::new();
        let settings = SettingsRepository::new(dec("160"));
        let pricing = PricingService::new(
            catalog.clone(),
            supplies.clone(),
            costs.clone(),
            settings.clone(),
            PricingPolicy::default(),
        );

        let svc = catalog.add_service(service(60, "0.9"));
        let first = pricing.price_details();
        // Sem escrita no meio, o Arc é o mesmo objeto.
        assert!(Arc::ptr_eq(&first, &pricing.price_details()));

        costs.add_cost(fixed_cost("800"));
        let second = pricing.price_details();
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(second[&svc.id].fixed_cost_share > Decimal::ZERO);
    }
}
