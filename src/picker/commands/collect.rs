use crate::commands::CmdMessage;
use crate::error::{PlannerError, Result};
use crate::model::Preferences;
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to the Smart Recipe Picker!";
pub const CUISINE_PROMPT: &str = "Enter your preferred cuisine (e.g., Italian, Chinese, Mexican): ";
pub const RESTRICTIONS_PROMPT: &str =
    "Enter any dietary restrictions (e.g., vegetarian, gluten-free): ";
pub const MEALS_PROMPT: &str = "Enter the number of meals you want: ";

/// Answers already known before prompting (e.g. from command-line flags).
/// Anything left as `None` is asked for.
#[derive(Debug, Clone, Default)]
pub struct PreferenceAnswers {
    pub cuisine: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub num_meals: Option<String>,
}

impl PreferenceAnswers {
    fn is_complete(&self) -> bool {
        self.cuisine.is_some() && self.dietary_restrictions.is_some() && self.num_meals.is_some()
    }
}

/// Preferences plus anything worth telling the user about how they were read.
#[derive(Debug)]
pub struct Collected {
    pub preferences: Preferences,
    pub messages: Vec<CmdMessage>,
}

/// Parse a typed meal count. Anything that is not a non-negative whole number
/// falls back to `default` and comes with a warning. A whole number too large
/// for `u64` is still a count and saturates, so selection rejects it as oversized.
pub fn parse_num_meals(raw: &str, default: u64) -> (u64, Option<CmdMessage>) {
    let trimmed = raw.trim();
    match trimmed.parse::<u64>() {
        Ok(n) => (n, None),
        Err(_) if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) => {
            (u64::MAX, None)
        }
        Err(_) => (
            default,
            Some(CmdMessage::warning(format!(
                "Invalid input. Defaulting to {} meals.",
                default
            ))),
        ),
    }
}

pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    prompt: &mut W,
    answers: PreferenceAnswers,
    default_meals: u64,
) -> Result<Collected> {
    if !answers.is_complete() {
        writeln!(prompt, "{}", WELCOME)?;
    }

    let cuisine = match answers.cuisine {
        Some(c) => c,
        None => ask(input, prompt, CUISINE_PROMPT)?,
    };
    let dietary_restrictions = match answers.dietary_restrictions {
        Some(r) => r,
        None => ask(input, prompt, RESTRICTIONS_PROMPT)?,
    };
    let raw_meals = match answers.num_meals {
        Some(m) => m,
        None => ask(input, prompt, MEALS_PROMPT)?,
    };

    let (num_meals, warning) = parse_num_meals(&raw_meals, default_meals);
    if warning.is_some() {
        tracing::debug!(input = %raw_meals, default_meals, "meal count not a number");
    }

    let preferences = Preferences::new(cuisine.trim(), dietary_restrictions.trim(), num_meals);
    tracing::debug!(?preferences, "preferences collected");
    Ok(Collected {
        preferences,
        messages: warning.into_iter().collect(),
    })
}

fn ask<R: BufRead, W: Write>(input: &mut R, prompt: &mut W, question: &str) -> Result<String> {
    write!(prompt, "{}", question)?;
    prompt.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PlannerError::InputClosed);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
