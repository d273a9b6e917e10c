use std::io::{self, Write};

use tracing::info;

use wordweb_core::error::Result;
use wordweb_core::export::write_histogram;
use wordweb_core::graph::{connected_components, ComponentHistogram};

use super::dispatch::{Command, CommandContext};

/// Component size histogram (`--print-graph-sizes`)
pub struct SizesCommand;

impl Command for SizesCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let components = connected_components(&ctx.graph);
        info!("calculating sizes of {} subgraphs", components.len());
        let histogram = ComponentHistogram::from_components(&components);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_histogram(&histogram, ctx.format(), &mut out)?;
        out.flush()?;
        Ok(())
    }
}
