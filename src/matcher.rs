//! Ingredient list normalization and recipe rule matching.

use std::borrow::Cow;

use log::debug;

use crate::error::ToolError;
use crate::model::Recipe;

/// Suffix appended to the fallback dish name ("simple dish using ...")
const FALLBACK_NAME_SUFFIX: &str = "を使った簡単料理";

/// Fallback dish name when the list holds no usable ingredient names
const FALLBACK_NAME_BARE: &str = "簡単料理";

/// Separator between ingredient names in the fallback dish name
const FALLBACK_NAME_SEPARATOR: &str = ", ";

/// How many leading ingredients the fallback dish name mentions
const FALLBACK_NAME_TOKENS: usize = 3;

const FALLBACK_INSTRUCTIONS: &[&str] = &[
    "1. 材料を食べやすい大きさに切る",
    "2. フライパンで炒め合わせる",
    "3. 塩、胡椒で味を調える",
    "4. お好みで醤油やケチャップなどを加える",
];

/// A fixed recipe selected when every required ingredient is present.
#[derive(Debug)]
pub struct RecipeRule {
    pub required: &'static [&'static str],
    pub name: &'static str,
    pub ingredients: &'static str,
    pub instructions: &'static [&'static str],
}

impl RecipeRule {
    /// Exact-membership test against the normalized ingredient tokens.
    pub fn matches(&self, tokens: &[String]) -> bool {
        self.required
            .iter()
            .all(|required| tokens.iter().any(|token| token == required))
    }

    fn to_recipe(&self) -> Recipe {
        Recipe {
            name: Cow::Borrowed(self.name),
            ingredients: Cow::Borrowed(self.ingredients),
            instructions: self.instructions,
        }
    }
}

/// Rules in priority order; the first match wins.
pub static RECIPE_RULES: &[RecipeRule] = &[
    RecipeRule {
        required: &["卵", "ご飯"],
        name: "オムライス",
        ingredients: "卵、ご飯、玉ねぎ、ケチャップ、塩、胡椒、バター",
        instructions: &[
            "1. 玉ねぎをみじん切りにし、バターで炒める",
            "2. ご飯を加えて炒め、ケチャップで味付けする",
            "3. 卵を溶いて、塩胡椒で味付けする",
            "4. フライパンで薄焼き卵を作り、ケチャップライスを包む",
        ],
    },
    RecipeRule {
        required: &["豚肉", "キャベツ"],
        name: "豚キャベツ炒め",
        ingredients: "豚肉、キャベツ、塩、胡椒、醤油、ごま油",
        instructions: &[
            "1. 豚肉を一口大に切る",
            "2. キャベツを食べやすい大きさに切る",
            "3. フライパンで豚肉を炒め、火が通ったらキャベツを加える",
            "4. 塩、胡椒、醤油で味付けし、最後にごま油を回しかける",
        ],
    },
];

/// Split on commas, trim and lowercase each token, preserving order and duplicates.
pub fn normalize(ingredients: &str) -> Vec<String> {
    ingredients
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .collect()
}

/// Match an ingredient list against [`RECIPE_RULES`], falling back to a generic dish.
pub fn match_recipe(ingredients: &str) -> Result<Recipe, ToolError> {
    if ingredients.trim().is_empty() {
        return Err(ToolError::EmptyInput);
    }

    let tokens = normalize(ingredients);

    if let Some(rule) = RECIPE_RULES.iter().find(|rule| rule.matches(&tokens)) {
        debug!("Matched recipe rule '{}'", rule.name);
        return Ok(rule.to_recipe());
    }

    debug!("No recipe rule matched {:?}, using fallback", tokens);
    Ok(Recipe {
        name: Cow::Owned(fallback_name(&tokens)),
        ingredients: Cow::Owned(ingredients.to_string()),
        instructions: FALLBACK_INSTRUCTIONS,
    })
}

/// Build the fallback dish name from the first few tokens.
///
/// Only the leading tokens are considered; empty ones among them (from input like
/// `"卵,,"`) are dropped so the name never carries dangling separators.
fn fallback_name(tokens: &[String]) -> String {
    let named: Vec<&str> = tokens
        .iter()
        .take(FALLBACK_NAME_TOKENS)
        .map(String::as_str)
        .filter(|token| !token.is_empty())
        .collect();

    if named.is_empty() {
        return FALLBACK_NAME_BARE.to_string();
    }

    format!("{}{}", named.join(FALLBACK_NAME_SEPARATOR), FALLBACK_NAME_SUFFIX)
}
