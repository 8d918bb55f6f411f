use crate::catalog::RecipeSource;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::OversizePolicy;
use crate::error::{PlannerError, Result};
use crate::model::Preferences;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Draw `num_meals` distinct recipes for the preferred cuisine, in random order.
pub fn run<C, R>(
    catalog: &C,
    preferences: &Preferences,
    policy: OversizePolicy,
    rng: &mut R,
) -> Result<CmdResult>
where
    C: RecipeSource + ?Sized,
    R: Rng + ?Sized,
{
    let cuisine = preferences.cuisine.as_str();
    let requested = usize::try_from(preferences.num_meals).unwrap_or(usize::MAX);
    if requested == 0 {
        // Drawing nothing succeeds whatever the cuisine.
        return Ok(CmdResult::default());
    }

    let candidates = catalog
        .recipes_for(cuisine)
        .ok_or_else(|| PlannerError::UnknownCuisine(cuisine.to_string()))?;

    let available = candidates.len();
    let mut result = CmdResult::default();

    let amount = if requested > available {
        match policy {
            OversizePolicy::Reject => {
                return Err(PlannerError::NotEnoughRecipes {
                    cuisine: cuisine.to_string(),
                    requested,
                    available,
                });
            }
            OversizePolicy::Clamp => {
                result.add_message(CmdMessage::warning(format!(
                    "Only {} {} recipes available, picking all of them.",
                    available, cuisine
                )));
                available
            }
        }
    } else {
        requested
    };

    let recipes: Vec<String> = candidates.choose_multiple(rng, amount).cloned().collect();
    tracing::debug!(cuisine, requested, picked = recipes.len(), "recipes selected");
    Ok(result.with_recipes(recipes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecipeCatalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{BTreeMap, HashSet};

    const ITALIAN: [&str; 3] = ["Pasta Carbonara", "Margherita Pizza", "Risotto"];

    fn pick(cuisine: &str, meals: u64, policy: OversizePolicy, seed: u64) -> Result<CmdResult> {
        let prefs = Preferences::new(cuisine, "", meals);
        let mut rng = StdRng::seed_from_u64(seed);
        run(&RecipeCatalog::builtin(), &prefs, policy, &mut rng)
    }

    #[test]
    fn picks_exact_number_of_distinct_recipes() {
        for seed in 0..20 {
            for meals in 0..=3 {
                let recipes = pick("Italian", meals, OversizePolicy::Reject, seed)
                    .unwrap()
                    .recipes;
                assert_eq!(recipes.len(), meals as usize);
                let distinct: HashSet<_> = recipes.iter().collect();
                assert_eq!(distinct.len(), recipes.len());
                assert!(recipes.iter().all(|r| ITALIAN.contains(&r.as_str())));
            }
        }
    }

    #[test]
    fn same_seed_same_pick() {
        let a = pick("Chinese", 2, OversizePolicy::Reject, 42).unwrap().recipes;
        let b = pick("Chinese", 2, OversizePolicy::Reject, 42).unwrap().recipes;
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_cuisine_fails() {
        let err = pick("Thai", 2, OversizePolicy::Reject, 1).unwrap_err();
        assert!(matches!(err, PlannerError::UnknownCuisine(ref c) if c == "Thai"));
    }

    #[test]
    fn zero_meals_from_unknown_cuisine_is_empty_not_an_error() {
        let result = pick("Thai", 0, OversizePolicy::Reject, 1).unwrap();
        assert!(result.recipes.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn huge_request_rejected() {
        let err = pick("Italian", u64::MAX, OversizePolicy::Reject, 1).unwrap_err();
        assert!(matches!(err, PlannerError::NotEnoughRecipes { available: 3, .. }));
    }

    #[test]
    fn oversized_request_rejected_by_default() {
        let err = pick("Mexican", 4, OversizePolicy::Reject, 1).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::NotEnoughRecipes {
                requested: 4,
                available: 3,
                ..
            }
        ));
    }

    #[test]
    fn oversized_request_clamped_when_asked() {
        let result = pick("Mexican", 10, OversizePolicy::Clamp, 1).unwrap();
        let mut recipes = result.recipes.clone();
        recipes.sort();
        assert_eq!(recipes, vec!["Burritos", "Quesadillas", "Tacos"]);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn works_with_any_recipe_source() {
        let mut table = BTreeMap::new();
        table.insert(
            "Thai".to_string(),
            vec!["Pad Thai".to_string(), "Green Curry".to_string()],
        );
        let catalog = RecipeCatalog::new(table);
        let prefs = Preferences::new("Thai", "", 2);
        let mut rng = StdRng::seed_from_u64(7);

        let mut recipes = run(&catalog, &prefs, OversizePolicy::Reject, &mut rng)
            .unwrap()
            .recipes;
        recipes.sort();
        assert_eq!(recipes, vec!["Green Curry", "Pad Thai"]);
    }
}
