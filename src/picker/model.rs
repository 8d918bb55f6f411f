use serde::{Deserialize, Serialize};

/// What the user asked for. Built once per run and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub cuisine: String,
    pub dietary_restrictions: String,
    pub num_meals: u64,
}

impl Preferences {
    pub fn new(
        cuisine: impl Into<String>,
        dietary_restrictions: impl Into<String>,
        num_meals: u64,
    ) -> Self {
        Self {
            cuisine: cuisine.into(),
            dietary_restrictions: dietary_restrictions.into(),
            num_meals,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryConfirmation {
    pub service: String,
    pub status: DeliveryStatus,
    pub recipes: Vec<String>,
}

/// Serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmptyRecord {}

/// The grocery section of a plan: a confirmation, or an empty record when
/// no order could be placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroceryDelivery {
    Confirmed(DeliveryConfirmation),
    Empty(EmptyRecord),
}

impl GroceryDelivery {
    pub fn empty() -> Self {
        GroceryDelivery::Empty(EmptyRecord::default())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GroceryDelivery::Empty(_))
    }

    pub fn confirmation(&self) -> Option<&DeliveryConfirmation> {
        match self {
            GroceryDelivery::Confirmed(c) => Some(c),
            GroceryDelivery::Empty(_) => None,
        }
    }
}

impl Default for GroceryDelivery {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<DeliveryConfirmation> for GroceryDelivery {
    fn from(confirmation: DeliveryConfirmation) -> Self {
        GroceryDelivery::Confirmed(confirmation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    pub preferences: Preferences,
    pub recipes: Vec<String>,
    pub grocery_delivery: GroceryDelivery,
}

impl MealPlan {
    pub fn new(
        preferences: Preferences,
        recipes: Vec<String>,
        grocery_delivery: GroceryDelivery,
    ) -> Self {
        Self {
            preferences,
            recipes,
            grocery_delivery,
        }
    }
}
