//! The binary only calls `cli::run()`. Any error that escapes the pipeline is
//! reported and the process still exits normally.

use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        println!(
            "{}",
            format!(
                "An error occurred during the execution of the program: {}",
                e
            )
            .red()
        );
    }
}
