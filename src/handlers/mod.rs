// src/handlers/mod.rs

pub mod catalog;
pub mod costs;
pub mod crm;
pub mod dashboard;
pub mod inventory;
pub mod sales;
pub mod settings;

use rust_decimal::Decimal;
use validator::ValidationError;

// Validação compartilhada pelos payloads com valores monetários e
// quantidades de estoque.
pub(crate) fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}
