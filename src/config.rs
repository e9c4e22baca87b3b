use std::time::Duration;

use clap::Parser;

/// Fixed name of the local profile database file.
pub const DB_FILE: &str = "fbgraph.db";

/// Base host for Graph lookups.
pub const GRAPH_BASE_URL: &str = "https://graph.facebook.com";

/// How long to stall when the Graph reports the request limit reached.
pub const RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(3600);

#[derive(Parser, Debug)]
#[command(name = "fbgdl", about = "Cycles through Graph uids and stores them in a database")]
struct Cli {
    /// Exclusive upper bound uid to stop before.
    #[arg(short = 'u', value_name = "UID", default_value_t = u64::MAX)]
    max_uid: u64,

    /// Start from uid 0 instead of resuming past the highest stored uid.
    #[arg(long)]
    no_resume: bool,
}

/// Run configuration for one crawl.
///
/// Tests construct this directly with a mock base url, a scratch database
/// path and a short backoff; the binary builds it from the command line with
/// the fixed defaults above.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub graph_base_url: String,
    pub max_uid: u64,
    pub resume: bool,
    pub rate_limit_backoff: Duration,
}

impl Config {
    pub fn from_args() -> Self {
        let cli = Cli::parse();

        Self {
            db_path: DB_FILE.to_string(),
            graph_base_url: GRAPH_BASE_URL.to_string(),
            max_uid: cli.max_uid,
            resume: !cli.no_resume,
            rate_limit_backoff: RATE_LIMIT_BACKOFF,
        }
    }
}
