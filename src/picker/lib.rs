//! # Recipe Picker
//!
//! Recipe Picker is a small library with a CLI client. It asks for a cuisine, a
//! dietary note and a meal count, draws recipes for that cuisine, places a mock
//! grocery order and writes the resulting meal plan to `meal_plan.json`.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints colored messages       │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Runs the pipeline, applies failure/oversize policies     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per stage: collect, select, deliver, save     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Sources & Storage (catalog.rs, grocery.rs, store/)         │
//! │  - RecipeSource, GroceryService and PlanStore traits        │
//! │  - Built-in/in-memory implementations for tests             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The preference collector is the one command that reads input. It is generic
//! over `BufRead`/`Write`, so tests feed it a `Cursor` and the CLI hands it stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and pipeline
//! - [`commands`]: Stage logic
//! - [`catalog`]: Cuisine to recipe lookup
//! - [`grocery`]: Mock grocery ordering
//! - [`store`]: Plan persistence
//! - [`model`]: `Preferences`, `MealPlan` and friends
//! - [`config`]: Configuration file and defaults
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod grocery;
pub mod model;
pub mod store;
