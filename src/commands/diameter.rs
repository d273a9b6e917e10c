use std::io::{self, Write};

use wordweb_core::error::Result;
use wordweb_core::export::write_diameter;
use wordweb_core::graph::{diameter_routes, RouteSelection};

use super::dispatch::{Command, CommandContext};

/// Longest shortest paths (`--longest-paths`)
pub struct DiameterCommand;

impl Command for DiameterCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let selection = if ctx.cli.all_routes {
            RouteSelection::AllFarthest
        } else {
            RouteSelection::LastDequeued
        };
        let diameter = diameter_routes(&ctx.graph, selection)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_diameter(&diameter, ctx.word_length, ctx.format(), &mut out)?;
        out.flush()?;
        Ok(())
    }
}
