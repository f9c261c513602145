//! Run command implementation

use clap::Args;
use roster_core::{RosterError, Service};
use roster_runtime::Runtime;

/// Run command arguments
#[derive(Args, Debug)]
pub struct RunCommand {
    /// Override server port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl RunCommand {
    /// Execute the run command
    pub async fn execute(&self, service: Service) -> Result<(), RosterError> {
        let runtime = Runtime::with_port_override(service, self.port).await?;
        runtime.run().await
    }
}
