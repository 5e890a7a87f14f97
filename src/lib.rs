pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::supabase::SupabaseStore;
pub use config::Config;
pub use core::updater::ReputationUpdater;
pub use utils::error::{ReputationError, Result};
