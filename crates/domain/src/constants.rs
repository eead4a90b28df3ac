//! Application constants
//!
//! Centralized location for domain-level constants shared by the clients and
//! the view-models.

// Authorization
pub const AUTHORIZATION_SCHEME: &str = "token";

// Billing countries with a transfer payment form
pub const COUNTRY_ARGENTINA: &str = "ar";
pub const COUNTRY_COLOMBIA: &str = "co";

// Consumer type that identifies with a DNI instead of a CUIT
pub const FINAL_CONSUMER: &str = "CF";

// Identification numbers (CUIT, DNI, NIT) never exceed this length
pub const IDENTIFICATION_NUMBER_MAX_LENGTH: usize = 11;

// Message keys
pub const PLAN_SELECTION_TITLE_KEY: &str = "buy_process.plan_selection.plan_title";
pub const ERROR_REQUIRED_FIELD: &str = "validation_messages.error_required_field";
pub const ERROR_MAX_LENGTH: &str = "validation_messages.error_max_length";
pub const ERROR_INVALID_CUIT: &str = "validation_messages.error_invalid_cuit";
