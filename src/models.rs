// src/models.rs
pub mod algorithm;
pub mod final_stats;
pub mod frequency_table;
pub mod partial_stats;
pub mod task;

pub use algorithm::Algorithm;
pub use final_stats::{FinalStats, NOT_AVAILABLE};
pub use frequency_table::FrequencyTable;
pub use partial_stats::PartialStats;
pub use task::Task;
