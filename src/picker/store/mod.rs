//! # Plan Storage
//!
//! The finished [`MealPlan`] goes through the [`PlanStore`] trait so the pipeline
//! can be exercised without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: writes a single JSON file (`meal_plan.json` by default),
//!   indented with four spaces and overwritten on every run.
//! - [`memory::InMemoryStore`]: keeps the last plan in memory, for tests. It can
//!   be told to fail writes so error paths are testable too.
//!
//! There is one plan per location. No history, no schema version.

use crate::error::Result;
use crate::model::MealPlan;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

pub trait PlanStore {
    /// Write the plan, replacing whatever was there. Returns where it went.
    fn save(&mut self, plan: &MealPlan) -> Result<PathBuf>;

    /// Read back the most recently saved plan.
    fn load(&self) -> Result<MealPlan>;

    /// Where plans are written.
    fn location(&self) -> &Path;
}
