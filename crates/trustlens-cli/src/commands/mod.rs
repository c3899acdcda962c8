//! Command implementations.

pub mod agent;
pub mod analyze;
pub mod demo;

pub use self::agent::execute_agent;
pub use self::analyze::execute_analyze;
pub use self::demo::execute_demo;
