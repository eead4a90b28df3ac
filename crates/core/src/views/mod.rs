//! Headless view-models
//!
//! Each view owns a [`ViewSlot`], triggers its client calls on load and
//! exposes what to render for the resulting [`ViewState`]. Markup and
//! translation stay with the presentation layer.

pub mod breadcrumb;
pub mod control_panel;
pub mod plan_selection;
pub mod state;
pub mod transfer;

pub use breadcrumb::{Breadcrumb, BreadcrumbItem, BreadcrumbTarget};
pub use control_panel::{ControlPanel, ControlPanelBox, ControlPanelSection};
pub use plan_selection::{PlanCard, PlanSelectionView};
pub use state::{FetchTicket, ViewSlot, ViewState};
pub use transfer::{
    ArgentinaSummary, ArgentinaTransferForm, ColombiaTransfer, IdentificationType, TransferForm,
    TransferMode, TransferValues, TransferView,
};
