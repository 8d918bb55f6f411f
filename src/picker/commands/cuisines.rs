use crate::catalog::RecipeSource;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run<C: RecipeSource + ?Sized>(catalog: &C) -> Result<CmdResult> {
    let cuisines = catalog
        .cuisines()
        .into_iter()
        .map(|name| {
            let recipes = catalog.recipes_for(name).unwrap_or_default().to_vec();
            (name.to_string(), recipes)
        })
        .collect();

    Ok(CmdResult {
        cuisines,
        ..Default::default()
    })
}
