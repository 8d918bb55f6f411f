use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MealPlan;
use crate::store::PlanStore;

pub fn run<S: PlanStore + ?Sized>(store: &mut S, plan: MealPlan) -> Result<CmdResult> {
    let path = store.save(&plan)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Meal plan saved to {}",
        path.display()
    )));
    result.saved_to = Some(path);
    Ok(result.with_plan(plan))
}
