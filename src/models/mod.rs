pub mod candidate;
pub mod loaders;
pub mod plan;
pub mod teaching_period;
pub mod unit;
pub mod user;

pub use candidate::{ImportCandidate, ImportOutcome, ImportStatus, RelatedUnit};
pub use loaders::{load_import_plan, parse_import_plan};
pub use plan::ImportPlan;
pub use teaching_period::TeachingPeriod;
pub use unit::{Unit, UnitRole};
pub use user::{SystemRole, UserRef};
