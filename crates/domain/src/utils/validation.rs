//! Field validators for the checkout forms
//!
//! Validators return the message key of the first rule that fails. Keys are
//! translated by the presentation layer.

use thiserror::Error;

use crate::constants::{ERROR_INVALID_CUIT, ERROR_MAX_LENGTH, ERROR_REQUIRED_FIELD};

const CUIT_LENGTH: usize = 11;
const CUIT_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Rejects empty or whitespace-only values.
pub fn validate_required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err(ERROR_REQUIRED_FIELD)
    } else {
        Ok(())
    }
}

/// Rejects values longer than `max` characters.
pub fn validate_max_length(value: &str, max: usize) -> Result<(), &'static str> {
    if value.chars().count() > max {
        Err(ERROR_MAX_LENGTH)
    } else {
        Ok(())
    }
}

/// Validates an Argentine CUIT/CUIL (`20-12345678-6` or `20123456786`).
pub fn validate_cuit(value: &str) -> Result<(), &'static str> {
    validate_required(value)?;

    let digits: Vec<u32> = value.chars().filter(|c| *c != '-').map_while(|c| c.to_digit(10)).collect();
    let stripped_len = value.chars().filter(|c| *c != '-').count();
    if digits.len() != CUIT_LENGTH || stripped_len != CUIT_LENGTH {
        return Err(ERROR_INVALID_CUIT);
    }

    let sum: u32 = digits.iter().zip(CUIT_WEIGHTS).map(|(digit, weight)| digit * weight).sum();
    let expected = match 11 - (sum % 11) {
        11 => 0,
        10 => 9,
        other => other,
    };

    if digits[CUIT_LENGTH - 1] == expected {
        Ok(())
    } else {
        Err(ERROR_INVALID_CUIT)
    }
}

/// One failed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message_key: &'static str,
}

/// Field errors collected while validating a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one validator for `field`.
    pub fn check(&mut self, field: &'static str, outcome: Result<(), &'static str>) {
        if let Err(message_key) = outcome {
            self.errors.push(FieldError { field, message_key });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message key of the first error recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors.iter().find(|error| error.field == field).map(|error| error.message_key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
