use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::grocery::GroceryService;
use crate::model::GroceryDelivery;

pub fn run<G: GroceryService + ?Sized>(grocery: &G, recipes: &[String]) -> Result<CmdResult> {
    let confirmation = grocery.place_order(recipes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Order for {} confirmed with {}",
        recipes.join(", "),
        grocery.name()
    )));
    tracing::debug!(service = %confirmation.service, items = recipes.len(), "order confirmed");
    Ok(result.with_delivery(GroceryDelivery::Confirmed(confirmation)))
}
