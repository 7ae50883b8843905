pub mod default;
pub mod error;
pub mod extract;
pub mod types;

pub use default::default_plan;
pub use error::ExtractError;
pub use extract::extract_plan;
pub use types::{Deliverable, Plan, Workstream};
