pub mod config;
pub mod error;
pub mod search;
pub mod sweep;
pub mod tree;

pub use config::SearchConfig;
pub use error::ConfigError;
pub use search::{search, SearchContext, SearchOutcome, INF};
pub use sweep::{run_sweep, SweepReport, SweepRow};
pub use tree::{generate_tree, Node, TreeParams};
