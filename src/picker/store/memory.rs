use super::PlanStore;
use crate::error::{PlannerError, Result};
use crate::model::MealPlan;
use std::io;
use std::path::{Path, PathBuf};

/// Holds the last saved plan in memory.
pub struct InMemoryStore {
    location: PathBuf,
    plan: Option<MealPlan>,
    simulate_write_error: bool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            location: PathBuf::from("memory://meal_plan.json"),
            plan: None,
            simulate_write_error: false,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn saved(&self) -> Option<&MealPlan> {
        self.plan.as_ref()
    }
}

impl PlanStore for InMemoryStore {
    fn save(&mut self, plan: &MealPlan) -> Result<PathBuf> {
        if self.simulate_write_error {
            return Err(PlannerError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Simulated write error",
            )));
        }
        self.plan = Some(plan.clone());
        Ok(self.location.clone())
    }

    fn load(&self) -> Result<MealPlan> {
        self.plan.clone().ok_or_else(|| {
            PlannerError::Io(io::Error::new(io::ErrorKind::NotFound, "No plan saved yet"))
        })
    }

    fn location(&self) -> &Path {
        &self.location
    }
}
