//! Mock grocery fulfilment. Nothing here talks to a network; [`MockGrocery`]
//! acknowledges every non-empty order with a canned confirmation.

use crate::error::{PlannerError, Result};
use crate::model::{DeliveryConfirmation, DeliveryStatus};

pub trait GroceryService {
    /// Name shown on confirmations and order summaries.
    fn name(&self) -> &str;

    /// Order the ingredients for `recipes`.
    fn place_order(&self, recipes: &[String]) -> Result<DeliveryConfirmation>;
}

#[derive(Debug, Clone)]
pub struct MockGrocery {
    service: String,
}

impl MockGrocery {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }
}

impl Default for MockGrocery {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DELIVERY_SERVICE)
    }
}

impl GroceryService for MockGrocery {
    fn name(&self) -> &str {
        &self.service
    }

    fn place_order(&self, recipes: &[String]) -> Result<DeliveryConfirmation> {
        if recipes.is_empty() {
            return Err(PlannerError::NoRecipes);
        }
        Ok(DeliveryConfirmation {
            service: self.service.clone(),
            status: DeliveryStatus::Success,
            recipes: recipes.to_vec(),
        })
    }
}
