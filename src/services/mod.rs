pub mod capabilities;
pub mod import_log;
pub mod queue_builder;
pub mod staff_service;
pub mod status_projector;

pub use capabilities::{CatalogLookup, PeriodLookup, StaffDirectory, UnitOperations};
pub use import_log::ImportLogWriter;
pub use queue_builder::{convenor_for, related_units, ImportQueue};
pub use staff_service::{StaffOption, StaffService};
pub use status_projector::candidate_status;
