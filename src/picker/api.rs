//! # API Facade
//!
//! [`PlannerApi`] is the single entry point for every recipe-picker operation. It owns
//! the injected pieces (recipe source, grocery service, plan store, random generator)
//! and dispatches to the stage functions in `commands/`.
//!
//! The API returns structured [`CmdResult`] values and never prints. Stage output that a
//! person should see (order summaries, warnings, failures) travels as [`CmdMessage`]s.
//!
//! ## The Pipeline
//!
//! [`PlannerApi::plan`] runs collect → select → deliver → save. Every stage returns a
//! `Result`; what happens after a failure is decided here, by [`FailurePolicy`]:
//!
//! - `Continue`: report the failure and carry on with the stage's empty value
//!   (no recipes, an empty delivery record). The plan is still written.
//! - `Abort`: report the failure and stop. Nothing is written.
//!
//! A failed save is reported either way. Running out of input while collecting
//! preferences is not a stage failure and is returned as `Err`.

use crate::catalog::RecipeSource;
use crate::commands;
use crate::config::{FailurePolicy, OversizePolicy, PickerConfig};
use crate::error::{PlannerError, Result};
use crate::grocery::GroceryService;
use crate::model::{GroceryDelivery, MealPlan, Preferences};
use crate::store::PlanStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Knobs the pipeline reads on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerSettings {
    pub default_num_meals: u64,
    pub oversize_policy: OversizePolicy,
    pub failure_policy: FailurePolicy,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self::from(&PickerConfig::default())
    }
}

impl From<&PickerConfig> for PlannerSettings {
    fn from(config: &PickerConfig) -> Self {
        Self {
            default_num_meals: config.default_num_meals,
            oversize_policy: config.oversize_policy,
            failure_policy: config.failure_policy,
        }
    }
}

pub struct PlannerApi<C: RecipeSource, G: GroceryService, S: PlanStore> {
    catalog: C,
    grocery: G,
    store: S,
    settings: PlannerSettings,
    config_dir: PathBuf,
    rng: StdRng,
}

impl<C: RecipeSource, G: GroceryService, S: PlanStore> PlannerApi<C, G, S> {
    pub fn new(
        catalog: C,
        grocery: G,
        store: S,
        settings: PlannerSettings,
        config_dir: PathBuf,
    ) -> Self {
        Self {
            catalog,
            grocery,
            store,
            settings,
            config_dir,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Make recipe draws reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn collect_preferences<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        prompt: &mut W,
        answers: PreferenceAnswers,
    ) -> Result<commands::collect::Collected> {
        commands::collect::run(input, prompt, answers, self.settings.default_num_meals)
    }

    pub fn select_recipes(&mut self, preferences: &Preferences) -> Result<commands::CmdResult> {
        commands::select::run(
            &self.catalog,
            preferences,
            self.settings.oversize_policy,
            &mut self.rng,
        )
    }

    pub fn arrange_delivery(&self, recipes: &[String]) -> Result<commands::CmdResult> {
        commands::deliver::run(&self.grocery, recipes)
    }

    pub fn save_plan(&mut self, plan: MealPlan) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, plan)
    }

    /// Run the whole pipeline once.
    pub fn plan<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        prompt: &mut W,
        answers: PreferenceAnswers,
    ) -> Result<commands::CmdResult> {
        let mut result = commands::CmdResult::default();

        let collected = self.collect_preferences(input, prompt, answers)?;
        result.extend_messages(collected.messages);
        let preferences = collected.preferences;

        let recipes = match self.select_recipes(&preferences) {
            Ok(selected) => {
                result.extend_messages(selected.messages);
                selected.recipes
            }
            Err(e) => {
                if self.stage_failed(&mut result, "Error fetching recipes", &e) {
                    return Ok(result.with_preferences(preferences));
                }
                Vec::new()
            }
        };

        let delivery = match self.arrange_delivery(&recipes) {
            Ok(arranged) => {
                result.extend_messages(arranged.messages);
                arranged.delivery.unwrap_or_default()
            }
            Err(e) => {
                if self.stage_failed(&mut result, "Error in grocery delivery integration", &e) {
                    return Ok(result
                        .with_preferences(preferences)
                        .with_recipes(recipes));
                }
                GroceryDelivery::empty()
            }
        };

        let plan = MealPlan::new(preferences.clone(), recipes.clone(), delivery.clone());
        match self.save_plan(plan.clone()) {
            Ok(saved) => {
                result.extend_messages(saved.messages);
                result.saved_to = saved.saved_to;
            }
            Err(e) => {
                tracing::warn!(error = %e, "meal plan not saved");
                result.add_message(commands::CmdMessage::error(format!("File error: {}", e)));
            }
        }

        Ok(result
            .with_preferences(preferences)
            .with_recipes(recipes)
            .with_delivery(delivery)
            .with_plan(plan))
    }

    /// Records a stage failure. Returns true when the pipeline should stop.
    fn stage_failed(
        &self,
        result: &mut commands::CmdResult,
        context: &str,
        error: &PlannerError,
    ) -> bool {
        tracing::warn!(error = %error, policy = ?self.settings.failure_policy, "{}", context);
        result.add_message(commands::CmdMessage::error(format!("{}: {}", context, error)));
        match self.settings.failure_policy {
            FailurePolicy::Continue => false,
            FailurePolicy::Abort => {
                result.add_message(commands::CmdMessage::warning(
                    "Stopping without saving a meal plan.",
                ));
                true
            }
        }
    }

    pub fn show_plan(&self) -> Result<commands::CmdResult> {
        commands::show::run(&self.store)
    }

    pub fn cuisines(&self) -> Result<commands::CmdResult> {
        commands::cuisines::run(&self.catalog)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::collect::PreferenceAnswers;
pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
