use uuid::Uuid;

pub const DEFAULT_SERVINGS: u32 = 2;
pub const DEFAULT_RECIPE_LIMIT: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRecipeInput {
    pub profile_id: Uuid,
    /// `None` means "use the pantry"; an explicit list is used as given.
    pub ingredients: Option<Vec<String>>,
    pub cuisine_type: Option<String>,
    pub max_cooking_time: Option<u32>,
    pub dietary_preferences: Option<Vec<String>>,
    pub available_utensils: Option<Vec<String>>,
    pub disliked_ingredients: Option<Vec<String>>,
    pub servings: u32,
}

impl GenerateRecipeInput {
    pub fn for_profile(profile_id: Uuid) -> Self {
        Self {
            profile_id,
            ingredients: None,
            cuisine_type: None,
            max_cooking_time: None,
            dietary_preferences: None,
            available_utensils: None,
            disliked_ingredients: None,
            servings: DEFAULT_SERVINGS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetRecipesInput {
    pub profile_id: Uuid,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct AddFavoriteInput {
    pub profile_id: Uuid,
    pub recipe_id: Uuid,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FavoriteKey {
    pub profile_id: Uuid,
    pub recipe_id: Uuid,
}
