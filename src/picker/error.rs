use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input ended before all preferences were given")]
    InputClosed,

    #[error("No recipes known for cuisine '{0}'")]
    UnknownCuisine(String),

    #[error("Sample larger than population: asked for {requested} meals but only {available} recipes exist for {cuisine}")]
    NotEnoughRecipes {
        cuisine: String,
        requested: usize,
        available: usize,
    },

    #[error("No recipes found to process for grocery delivery.")]
    NoRecipes,

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
