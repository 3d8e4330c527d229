//! trackme-core
//!
//! Stateless computation services for the TrackMe engine: budget utilization
//! and alerting, recurring transaction scheduling and generation, goal
//! progress, and fleet-wide rollups. Depends on trackme-domain. No UI, no
//! storage transport; collaborators are expressed as traits and plain data.

pub mod budget_service;
pub mod error;
pub mod goal_service;
pub mod recurring_service;
pub mod store;
pub mod summary_service;
pub mod time;

pub use budget_service::*;
pub use error::CoreError;
pub use goal_service::*;
pub use recurring_service::*;
pub use store::*;
pub use summary_service::*;
pub use time::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("trackme_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("TrackMe engine tracing initialized.");
    });
}
