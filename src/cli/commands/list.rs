//! `list`: show every device node that opens

use std::path::PathBuf;

use super::expect_args;
use crate::core::args::Args;
use crate::core::context::Context;
use crate::core::node::CommandNode;
use crate::core::service::{DeviceService, OpenDevice};
use crate::error::{CommandResult, DeviceError};

pub fn node() -> CommandNode {
    CommandNode::new("list")
        .help("List the available devices")
        .handler(execute)
}

fn execute(node: &CommandNode, ctx: &mut Context<'_>, args: Args<'_>) -> CommandResult {
    expect_args(node.name(), args, 0)?;

    let found = supported_devices(ctx.service())?;
    if found.is_empty() {
        println!("No supported devices found");
        return Ok(());
    }

    for (path, name) in &found {
        println!("{}:\t{name}", path.display());
    }
    Ok(())
}

/// Path and name of every discovered device the service can open
pub fn supported_devices(service: &dyn DeviceService) -> Result<Vec<(PathBuf, String)>, DeviceError> {
    let mut found = Vec::new();
    for path in service.discover()? {
        match service.open(&path) {
            Ok(model) => {
                found.push((path.clone(), model.name.clone()));
                service.release(OpenDevice { path, model });
            }
            Err(err) => tracing::debug!("Skipping '{}': {err}", path.display()),
        }
    }
    Ok(found)
}
