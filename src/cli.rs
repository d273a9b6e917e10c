//! CLI argument parsing for wordweb
//!
//! Exactly one analysis mode must be chosen: `--longest-paths`,
//! `--print-dot` or `--print-graph-sizes`.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use wordweb_core::export::OutputFormat;
use wordweb_core::graph::RuleSet;

/// Generate a graph from a word list
#[derive(Parser, Debug)]
#[command(name = "wordweb")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "The value of -l is ignored if -r is supplied. \
If none of -a, -s or -r are supplied, -s is implied.")]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["longest_paths", "print_dot", "print_graph_sizes"]),
))]
pub struct Cli {
    /// Path to file containing the list of words to process (one word per line)
    pub word_list: PathBuf,

    /// Allow anagrams
    #[arg(short = 'a', long)]
    pub anagrams: bool,

    /// Allow letter substitutions
    #[arg(short = 's', long)]
    pub substitutions: bool,

    /// Allow letters to be removed/added
    #[arg(short = 'r', long)]
    pub removals_additions: bool,

    /// Use words only of length LEN
    #[arg(short = 'l', long, value_name = "LEN")]
    pub word_length: Option<usize>,

    /// Find shortest paths of maximum length
    #[arg(short = 'L', long)]
    pub longest_paths: bool,

    /// Output the entire graph in dot notation
    #[arg(short = 'D', long)]
    pub print_dot: bool,

    /// Output histogram data of disjoint subgraph sizes and their frequencies
    #[arg(short = 'S', long)]
    pub print_graph_sizes: bool,

    /// Report every farthest word of each search, not only the last one reached
    #[arg(long, conflicts_with_all = ["print_dot", "print_graph_sizes"])]
    pub all_routes: bool,

    /// Read rules, alphabet and word length from a TOML file
    #[arg(long, value_name = "PATH", env = "WORDWEB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for reports
    #[arg(long, value_enum, default_value = "human")]
    pub format: Format,

    /// Increase output verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Set log level (error, warn, info, debug, trace), overrides -v
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Human,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Selected analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    LongestPaths,
    PrintDot,
    GraphSizes,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.longest_paths {
            Mode::LongestPaths
        } else if self.print_dot {
            Mode::PrintDot
        } else {
            Mode::GraphSizes
        }
    }

    /// Rules requested on the command line, if any flag was given
    pub fn rules(&self) -> Option<RuleSet> {
        let rules = RuleSet {
            substitution: self.substitutions,
            insertion_deletion: self.removals_additions,
            anagram: self.anagrams,
        };
        (!rules.is_empty()).then_some(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_mode_group_is_exclusive() {
        let err = Cli::try_parse_from(["wordweb", "words.txt", "-L", "-S"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_mode_is_required() {
        let err = Cli::try_parse_from(["wordweb", "words.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_rules_from_flags() {
        let cli = Cli::try_parse_from(["wordweb", "words.txt", "-S"]).unwrap();
        assert_eq!(cli.rules(), None);
        assert_eq!(cli.mode(), Mode::GraphSizes);

        let cli = Cli::try_parse_from(["wordweb", "words.txt", "-ar", "-L", "-vv"]).unwrap();
        assert_eq!(
            cli.rules(),
            Some(RuleSet {
                substitution: false,
                insertion_deletion: true,
                anagram: true,
            })
        );
        assert_eq!(cli.mode(), Mode::LongestPaths);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_all_routes_requires_longest_paths() {
        let err = Cli::try_parse_from(["wordweb", "words.txt", "-D", "--all-routes"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        assert!(Cli::try_parse_from(["wordweb", "words.txt", "-S", "--all-routes"]).is_err());

        let cli = Cli::try_parse_from(["wordweb", "words.txt", "-L", "--all-routes"]).unwrap();
        assert!(cli.all_routes);
    }
}
