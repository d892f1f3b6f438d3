//! Command implementations

pub mod audit;
pub mod evaluate;
pub mod simple;

pub use audit::{AuditResult, run_audit};
pub use evaluate::{EvaluationResult, evaluate_pair};
pub use simple::run_simple;
