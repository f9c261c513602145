//! Check command implementation

use clap::Args;
use roster_core::{RosterError, Service};
use roster_runtime::Runtime;
use tracing::info;

/// Check command arguments
#[derive(Args, Debug)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Connect to the store, count the agents it holds, then disconnect
    pub async fn execute(&self, service: Service) -> Result<(), RosterError> {
        let runtime = Runtime::new(service).await?;
        let total = runtime.executor().count_all().await?;
        info!(
            "Store is reachable: {} agents on {}",
            total,
            runtime.service().store.connector
        );
        runtime.shutdown().await
    }
}
