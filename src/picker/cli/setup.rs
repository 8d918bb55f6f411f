use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipe-picker", bin_name = "recipe-picker", version)]
#[command(about = "Pick recipes for a cuisine, order the groceries, save the plan", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect preferences, pick recipes, order groceries and save the plan
    #[command(alias = "p")]
    Plan(PlanArgs),

    /// Print the saved meal plan
    Show {
        /// Plan file to read (defaults to the configured output)
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List the cuisines and their recipes
    #[command(alias = "ls")]
    Cuisines,

    /// Get or set configuration
    Config {
        /// Configuration key (default-meals, output, service, oversize, on-failure)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct PlanArgs {
    /// Preferred cuisine (skips the prompt)
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Dietary restrictions (skips the prompt)
    #[arg(long)]
    pub restrictions: Option<String>,

    /// Number of meals (skips the prompt; non-numbers fall back to the default)
    #[arg(long, allow_hyphen_values = true)]
    pub meals: Option<String>,

    /// Where to write the plan
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Seed for the recipe draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop at the first failed stage instead of saving a partial plan
    #[arg(long)]
    pub abort_on_failure: bool,

    /// Pick every recipe when more meals are asked than exist
    #[arg(long)]
    pub clamp: bool,
}
