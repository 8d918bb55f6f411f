use crate::config::PickerConfig;
use crate::model::{GroceryDelivery, MealPlan, Preferences};
use std::path::PathBuf;

pub mod collect;
pub mod config;
pub mod cuisines;
pub mod deliver;
pub mod save;
pub mod select;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub preferences: Option<Preferences>,
    pub recipes: Vec<String>,
    pub delivery: Option<GroceryDelivery>,
    pub plan: Option<MealPlan>,
    pub saved_to: Option<PathBuf>,
    pub config: Option<PickerConfig>,
    pub cuisines: Vec<(String, Vec<String>)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn extend_messages(&mut self, messages: Vec<CmdMessage>) {
        self.messages.extend(messages);
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    pub fn with_recipes(mut self, recipes: Vec<String>) -> Self {
        self.recipes = recipes;
        self
    }

    pub fn with_delivery(mut self, delivery: GroceryDelivery) -> Self {
        self.delivery = Some(delivery);
        self
    }

    pub fn with_plan(mut self, plan: MealPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn with_config(mut self, config: PickerConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
