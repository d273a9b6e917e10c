use std::io::{self, BufWriter, Write};

use wordweb_core::error::Result;
use wordweb_core::export::render_dot;

use super::dispatch::{Command, CommandContext};

/// Whole-graph dot export (`--print-dot`)
pub struct DotCommand;

impl Command for DotCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        render_dot(&ctx.graph, &mut out)?;
        out.flush()?;
        Ok(())
    }
}
