//! # Doppler Core
//!
//! Business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the backend services and the session
//! - The in-memory session store owned by the application context
//! - The plan service
//! - Headless view-models for plan selection, the transfer payment method,
//!   the control panel and breadcrumbs
//!
//! ## Architecture Principles
//! - Only depends on `doppler-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits

pub mod accounts;
pub mod billing;
pub mod plans;
pub mod session;
pub mod views;

// Re-export specific items to avoid ambiguity
pub use accounts::ports::DopplerApiClient;
pub use billing::ports::{BillingUserApiClient, StaticDataClient};
pub use plans::ports::{AccountPlansApiClient, PlanService};
pub use plans::service::AccountPlansService;
pub use session::ports::SessionProvider;
pub use session::store::SessionStore;
pub use views::{
    Breadcrumb, BreadcrumbItem, BreadcrumbTarget, ControlPanel, FetchTicket, PlanCard,
    PlanSelectionView, TransferForm, TransferMode, TransferView, ViewSlot, ViewState,
};
