use colored::Colorize;
use recipe_picker::api::{CmdMessage, MessageLevel};
use recipe_picker::model::MealPlan;
use std::fmt::Write;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_plan(plan: &MealPlan) -> String {
    let prefs = &plan.preferences;
    let mut out = String::new();

    let heading = if prefs.dietary_restrictions.is_empty() {
        format!("Meal plan: {}", prefs.cuisine)
    } else {
        format!("Meal plan: {} ({})", prefs.cuisine, prefs.dietary_restrictions)
    };
    let _ = writeln!(out, "{}", heading.bold());
    let _ = writeln!(out, "Meals requested: {}", prefs.num_meals);

    if plan.recipes.is_empty() {
        let _ = writeln!(out, "  {}", "No recipes selected.".dimmed());
    } else {
        for (i, recipe) in plan.recipes.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, recipe);
        }
    }

    match plan.grocery_delivery.confirmation() {
        Some(c) => {
            let _ = writeln!(out, "Groceries: {:?} via {}", c.status, c.service.yellow());
        }
        None => {
            let _ = writeln!(out, "Groceries: {}", "no order placed".dimmed());
        }
    }
    out
}

pub(super) fn render_cuisines(cuisines: &[(String, Vec<String>)]) -> String {
    if cuisines.is_empty() {
        return "No cuisines configured.\n".to_string();
    }

    let mut out = String::new();
    for (name, recipes) in cuisines {
        let _ = writeln!(out, "{}", name.bold());
        for recipe in recipes {
            let _ = writeln!(out, "  - {}", recipe);
        }
    }
    out
}

pub(super) fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_picker::model::{
        DeliveryConfirmation, DeliveryStatus, GroceryDelivery, MealPlan, Preferences,
    };

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn renders_confirmed_plan() {
        plain();
        let recipes = vec!["Tacos".to_string(), "Burritos".to_string()];
        let plan = MealPlan::new(
            Preferences::new("Mexican", "gluten-free", 2),
            recipes.clone(),
            DeliveryConfirmation {
                service: "GroceryNow".into(),
                status: DeliveryStatus::Success,
                recipes,
            }
            .into(),
        );

        assert_eq!(
            render_plan(&plan),
            "Meal plan: Mexican (gluten-free)\nMeals requested: 2\n  1. Tacos\n  2. Burritos\nGroceries: Success via GroceryNow\n"
        );
    }

    #[test]
    fn renders_empty_plan() {
        plain();
        let plan = MealPlan::new(
            Preferences::new("Thai", "", 2),
            Vec::new(),
            GroceryDelivery::empty(),
        );

        let out = render_plan(&plan);
        assert!(out.starts_with("Meal plan: Thai\n"));
        assert!(out.contains("No recipes selected."));
        assert!(out.ends_with("Groceries: no order placed\n"));
    }

    #[test]
    fn renders_cuisine_listing() {
        plain();
        let out = render_cuisines(&[("Mexican".into(), vec!["Tacos".into()])]);
        assert_eq!(out, "Mexican\n  - Tacos\n");
        assert_eq!(render_cuisines(&[]), "No cuisines configured.\n");
    }

    #[test]
    fn text_list_falls_back_to_empty_message() {
        assert_eq!(render_text_list(&[], "Nothing."), "Nothing.\n");
        assert_eq!(
            render_text_list(&["a = 1".into(), "b = 2".into()], "Nothing."),
            "a = 1\nb = 2\n"
        );
    }
}
