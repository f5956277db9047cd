use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/predict";

#[derive(Parser, Debug, Clone)]
#[command(name = "cringe-detector", version, about = "Check how cringe your post is")]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the window (default)
    Gui,
    /// Score one post and print the verdict
    Score {
        /// Text to score
        text: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Scoring endpoint receiving `{"text": ...}`
    #[arg(long, env = "CRINGE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Directory holding love.jpg, surprise.jpg, like.jpg, laugh.jpg, angry.jpg
    #[arg(long, env = "CRINGE_ASSETS_DIR", default_value = "public/images")]
    pub assets_dir: PathBuf,

    /// Give up on the scoring request after this many seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Seed for sphere placement (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Scene RNG, seeded when `--seed` was given.
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            assets_dir: PathBuf::from("public/images"),
            timeout_secs: 30,
            seed: None,
        }
    }
}
