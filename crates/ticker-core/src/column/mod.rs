//! Column planning for whole-text ticker transitions
//!
//! When a ticker changes from one text to another, each character position
//! becomes a column. Columns are aligned first (`alignment`), then every
//! column is resolved to a scroll path through one of the configured
//! character lists (`planner`).

pub mod alignment;
pub mod planner;

pub use alignment::{compute_column_actions, ColumnAction};
pub use planner::{ColumnPath, ColumnTransition, TickerPlanner};
