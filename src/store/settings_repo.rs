// src/store/settings_repo.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use parking_lot::RwLock;
use rust_decimal::Decimal;

use crate::models::settings::StudioSettings;

// 40h/semana, o padrão de quem trabalha sozinha no estúdio.
pub const DEFAULT_MONTHLY_LABOR_HOURS: u32 = 160;

#[derive(Clone)]
pub struct SettingsRepository {
    settings: Arc<RwLock<StudioSettings>>,
    version: Arc<AtomicU64>,
}

impl SettingsRepository {
    pub fn new(monthly_labor_hours: Decimal) -> Self {
        Self {
            settings: Arc::new(RwLock::new(StudioSettings {
                monthly_labor_hours: clamp_hours(monthly_labor_hours),
                updated_at: Utc::now(),
            })),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    pub fn get(&self) -> StudioSettings {
        self.settings.read().clone()
    }

    pub fn monthly_labor_hours(&self) -> Decimal {
        self.settings.read().monthly_labor_hours
    }

    pub fn set_monthly_labor_hours(&self, hours: Decimal) -> StudioSettings {
        let mut settings = self.settings.write();
        settings.monthly_labor_hours = clamp_hours(hours);
        settings.updated_at = Utc::now();
        let updated = settings.clone();
        drop(settings);
        self.version.fetch_add(1, Ordering::SeqCst);
        updated
    }
}

// Zero ou negativo vira 1h: o rateio precisa de uma base mínima.
fn clamp_hours(hours: Decimal) -> Decimal {
    if hours > Decimal::ZERO {
        hours
    } else {
        Decimal::ONE
    }
}
