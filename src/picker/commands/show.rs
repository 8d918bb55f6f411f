use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PlannerError, Result};
use crate::store::PlanStore;
use std::io::ErrorKind;

pub fn run<S: PlanStore + ?Sized>(store: &S) -> Result<CmdResult> {
    match store.load() {
        Ok(plan) => Ok(CmdResult::default().with_plan(plan)),
        Err(PlannerError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!(
                "No meal plan at {}. Run `recipe-picker plan` first.",
                store.location().display()
            )));
            Ok(result)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::save;
    use crate::model::{GroceryDelivery, MealPlan, Preferences};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn missing_plan_is_informational() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.plan.is_none());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn returns_saved_plan() {
        let mut store = InMemoryStore::new();
        let plan = MealPlan::new(
            Preferences::new("Italian", "", 0),
            Vec::new(),
            GroceryDelivery::empty(),
        );
        save::run(&mut store, plan.clone()).unwrap();

        assert_eq!(run(&store).unwrap().plan, Some(plan));
    }
}
