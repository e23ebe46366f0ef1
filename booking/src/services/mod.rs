pub mod system_manager;

pub use system_manager::{DiscountRules, SalesLog, SystemData, SystemManager};
