//! Field-level checks for request bodies, run before dispatching to an orchestrator.
//!
//! Every violated rule is reported, not just the first one.

use serde::Serialize;

use crate::domain::{FruitInput, FruitRequest, ProviderInput, ProviderRequest};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self { Self { field, message } }
}

/// Human-readable one-liner, e.g. `name: Name cannot be blank; country: Country cannot be blank`.
pub fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ProviderRequest {
    pub fn validate(self) -> Result<ProviderInput, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = non_blank(self.name);
        if name.is_none() {
            errors.push(FieldError::new("name", "Name cannot be blank"));
        }
        let country = non_blank(self.country);
        if country.is_none() {
            errors.push(FieldError::new("country", "Country cannot be blank"));
        }
        match (name, country) {
            (Some(name), Some(country)) => Ok(ProviderInput { name, country }),
            _ => Err(errors),
        }
    }
}

impl FruitRequest {
    pub fn validate(self) -> Result<FruitInput, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = non_blank(self.name);
        if name.is_none() {
            errors.push(FieldError::new("name", "Name cannot be blank"));
        }
        // absent weight counts as zero
        let weight = self.weight_in_kilos.unwrap_or(0);
        if weight <= 0 {
            errors.push(FieldError::new("weightInKilos", "Weight must be positive"));
        }
        if self.provider_id.is_none() {
            errors.push(FieldError::new("providerId", "Provider ID cannot be null"));
        }
        match (name, self.provider_id) {
            (Some(name), Some(provider_id)) if errors.is_empty() => {
                Ok(FruitInput { name, weight_in_kilos: weight, provider_id })
            }
            _ => Err(errors),
        }
    }
}
