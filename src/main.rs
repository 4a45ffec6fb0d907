//! Builds a BST from a list of values and prints traversals and query results.

use std::io::{self, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use textbook_bst::dataset::Dataset;
use textbook_bst::report::{Queries, Report};

#[derive(Parser, Debug)]
#[command(name = "textbook-bst")]
#[command(about = "Build a binary search tree and print what it knows", long_about = None)]
struct Cli {
    /// Values to insert, in order, separated by commas or spaces
    #[arg(long, default_value_t = Dataset::default(), allow_hyphen_values = true)]
    values: Dataset,

    /// Value to search for
    #[arg(long, default_value_t = Queries::default().search, allow_negative_numbers = true)]
    search: i64,

    /// Pair of values to find the lowest common ancestor of
    #[arg(long, num_args = 2, value_names = ["A", "B"], allow_negative_numbers = true)]
    lca: Vec<i64>,

    /// Value whose depth is reported
    #[arg(long, default_value_t = Queries::default().depth, allow_negative_numbers = true)]
    depth: i64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn queries(&self) -> Queries {
        // Empty when `--lca` wasn't given; the last pair wins if it was repeated.
        let lca = match *self.lca.as_slice() {
            [.., a, b] => (a, b),
            _ => Queries::default().lca,
        };
        Queries {
            search: self.search,
            lca,
            depth: self.depth,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let tree = cli.values.build();
    info!(nodes = tree.len(), height = tree.height(), "built tree");

    let report = Report::new(&tree, &cli.queries());
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", report)?;
    stdout.flush()?;

    Ok(())
}
