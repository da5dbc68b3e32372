//! Serve Command
//!
//! Run the HTTP service until interrupted.

use std::path::Path;
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::cli::CommandContext;
use crate::server;
use crate::types::Result;

pub fn run(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut ctx = CommandContext::load(config_path)?;

    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    if let Some(port) = port {
        ctx.config.server.port = port;
    }

    let service = Arc::new(ctx.service()?);
    let rt = Runtime::new()?;
    rt.block_on(server::serve(&ctx.config.server, service))
}
