//! Command dispatch logic for wordweb

use std::time::Instant;

use tracing::{debug, info};

use crate::cli::{Cli, Mode};
use wordweb_core::config::AnalysisConfig;
use wordweb_core::dictionary::{load_word_list, LengthFilter};
use wordweb_core::error::Result;
use wordweb_core::export::OutputFormat;
use wordweb_core::graph::{GraphBuilder, IdAllocator, WordGraph};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    /// Word length asked for, even when the rules ignore it
    pub word_length: Option<usize>,
    pub graph: WordGraph,
    pub start: Instant,
}

impl CommandContext<'_> {
    pub fn format(&self) -> OutputFormat {
        self.cli.format.into()
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Merge the config file (if any) with command-line overrides
pub fn resolve_config(cli: &Cli) -> Result<AnalysisConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(rules) = cli.rules() {
        config.rules = rules;
    }
    if cli.word_length.is_some() {
        config.word_length = cli.word_length;
    }
    config.validate()?;
    Ok(config)
}

/// Load the word list and build the graph the command will analyse
pub fn build_graph(
    cli: &Cli,
    config: &AnalysisConfig,
    filter: LengthFilter,
    start: Instant,
) -> Result<WordGraph> {
    let words = load_word_list(&cli.word_list, filter)?;
    debug!(elapsed = ?start.elapsed(), "load_word_list");

    let graph = GraphBuilder::new(config.rules)
        .with_alphabet(config.alphabet()?)
        .build(words, &mut IdAllocator::new())?;
    info!("graph initialised");
    debug!(elapsed = ?start.elapsed(), "build_graph");
    Ok(graph)
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = resolve_config(cli)?;
    debug!(rules = %config.rules, word_length = ?config.word_length, "resolve_config");

    let filter = LengthFilter::for_rules(config.word_length, config.rules);
    let graph = build_graph(cli, &config, filter, start)?;
    let ctx = CommandContext {
        cli,
        word_length: config.word_length,
        graph,
        start,
    };

    let result = match cli.mode() {
        Mode::LongestPaths => super::diameter::DiameterCommand.execute(&ctx),
        Mode::PrintDot => super::dot::DotCommand.execute(&ctx),
        Mode::GraphSizes => super::sizes::SizesCommand.execute(&ctx),
    };
    debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
    result
}
