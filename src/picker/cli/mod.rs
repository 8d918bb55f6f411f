//! # CLI
//!
//! The terminal client for the recipe picker. Everything that touches stdin, stdout,
//! stderr or the environment lives here.
//!
//! Running `recipe-picker` with no subcommand is the same as `recipe-picker plan`:
//! ask the three questions, pick, order, save. Flags given to `plan` pre-answer
//! their question, so `recipe-picker plan --cuisine Italian --restrictions "" --meals 2`
//! runs without prompting.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context wiring and per-command handlers
//! - `print`: Output formatting (plan, cuisines, colored messages)
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod print;
pub mod setup;

pub use commands::run;
