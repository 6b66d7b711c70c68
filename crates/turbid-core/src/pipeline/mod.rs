pub mod config;
mod orchestrator;
pub mod types;

pub use orchestrator::{
    compute_restoration_outputs, compute_restoration_outputs_reported, restore_pair,
    restore_pair_reported, save_results, PairReport, SavedResults,
};
pub use types::{NoOpReporter, RestorationReporter, RestorationResults, RestorationStage};
