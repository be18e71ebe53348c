use crate::domain::recipe::value_objects::GenerateRecipeInput;

const OUTPUT_FORMAT: &str = r#"

Please provide the recipe in the following JSON format:
{
    "title": "Recipe Name",
    "cuisine_type": "Cuisine Type",
    "cooking_time": <time in minutes>,
    "difficulty": "easy/medium/hard",
    "servings": <number>,
    "ingredients": [
        {"name": "ingredient name", "quantity": "amount", "unit": "unit"},
        ...
    ],
    "instructions": "Step-by-step cooking instructions with numbered steps",
    "utensils_required": ["utensil1", "utensil2", ...],
    "nutritional_info": {
        "calories": "approximate calories per serving",
        "protein": "grams",
        "carbs": "grams",
        "fat": "grams"
    }
}

Make sure the recipe:
1. Uses primarily the available ingredients
2. Is practical and delicious
3. Includes clear, numbered steps
4. Respects all dietary preferences
5. Can be made with available utensils
6. Fits within the time constraint

Respond ONLY with valid JSON, no additional text."#;

/// Everything the recipe prompt depends on.
#[derive(Debug, Clone, Copy)]
pub struct RecipePromptParams<'a> {
    pub ingredients: &'a [String],
    pub cuisine_type: Option<&'a str>,
    pub max_cooking_time: Option<u32>,
    pub dietary_preferences: &'a [String],
    pub available_utensils: &'a [String],
    pub servings: u32,
    pub disliked_ingredients: &'a [String],
}

impl<'a> RecipePromptParams<'a> {
    pub fn new(ingredients: &'a [String], input: &'a GenerateRecipeInput) -> Self {
        Self {
            ingredients,
            cuisine_type: input.cuisine_type.as_deref(),
            max_cooking_time: input.max_cooking_time,
            dietary_preferences: input.dietary_preferences.as_deref().unwrap_or_default(),
            available_utensils: input.available_utensils.as_deref().unwrap_or_default(),
            servings: input.servings,
            disliked_ingredients: input.disliked_ingredients.as_deref().unwrap_or_default(),
        }
    }
}

/// Renders the generation prompt. Pure: equal params give byte-identical output.
pub fn build_recipe_prompt(params: &RecipePromptParams<'_>) -> String {
    let mut prompt = format!(
        "You are a professional chef assistant. Generate a detailed recipe based on the following criteria:\n\
         \n\
         **Available Ingredients:**\n\
         {}\n\
         \n\
         **Requirements:**\n\
         - Servings: {}",
        params.ingredients.join(", "),
        params.servings
    );

    if let Some(cuisine_type) = params.cuisine_type.filter(|c| !c.is_empty()) {
        prompt.push_str(&format!("\n- Cuisine Type: {cuisine_type}"));
    }

    if let Some(minutes) = params.max_cooking_time.filter(|m| *m > 0) {
        prompt.push_str(&format!("\n- Maximum Cooking Time: {minutes} minutes"));
    }

    if !params.dietary_preferences.is_empty() {
        prompt.push_str(&format!(
            "\n- Dietary Preferences: {}",
            params.dietary_preferences.join(", ")
        ));
    }

    if !params.available_utensils.is_empty() {
        prompt.push_str(&format!(
            "\n- Available Kitchen Tools: {}",
            params.available_utensils.join(", ")
        ));
    }

    if !params.disliked_ingredients.is_empty() {
        prompt.push_str(&format!(
            "\n- DO NOT USE: {}",
            params.disliked_ingredients.join(", ")
        ));
    }

    prompt.push_str(OUTPUT_FORMAT);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let ingredients = strings(&["chicken", "rice", "garlic"]);
        let dietary = strings(&["halal"]);
        let params = RecipePromptParams {
            ingredients: &ingredients,
            cuisine_type: Some("Thai"),
            max_cooking_time: Some(45),
            dietary_preferences: &dietary,
            available_utensils: &[],
            servings: 4,
            disliked_ingredients: &[],
        };

        assert_eq!(build_recipe_prompt(&params), build_recipe_prompt(&params));
    }

    #[test]
    fn test_base_block_lists_ingredients_in_order() {
        let ingredients = strings(&["tomato", "basil", "tomato"]);
        let params = RecipePromptParams {
            ingredients: &ingredients,
            cuisine_type: None,
            max_cooking_time: None,
            dietary_preferences: &[],
            available_utensils: &[],
            servings: 2,
            disliked_ingredients: &[],
        };

        let prompt = build_recipe_prompt(&params);

        assert!(prompt.starts_with("You are a professional chef assistant."));
        assert!(prompt.contains("**Available Ingredients:**\ntomato, basil, tomato\n"));
        assert!(prompt.contains("**Requirements:**\n- Servings: 2\n\nPlease provide"));
        assert!(!prompt.contains("Cuisine Type:"));
        assert!(!prompt.contains("Maximum Cooking Time"));
        assert!(!prompt.contains("DO NOT USE"));
        assert!(prompt.ends_with("Respond ONLY with valid JSON, no additional text."));
    }

    #[test]
    fn test_optional_lines_follow_fixed_order() {
        let ingredients = strings(&["tofu"]);
        let dietary = strings(&["vegan", "gluten-free"]);
        let utensils = strings(&["wok", "knife"]);
        let disliked = strings(&["cilantro"]);
        let params = RecipePromptParams {
            ingredients: &ingredients,
            cuisine_type: Some("Chinese"),
            max_cooking_time: Some(20),
            dietary_preferences: &dietary,
            available_utensils: &utensils,
            servings: 3,
            disliked_ingredients: &disliked,
        };

        let prompt = build_recipe_prompt(&params);

        let expected = "- Servings: 3\n\
                        - Cuisine Type: Chinese\n\
                        - Maximum Cooking Time: 20 minutes\n\
                        - Dietary Preferences: vegan, gluten-free\n\
                        - Available Kitchen Tools: wok, knife\n\
                        - DO NOT USE: cilantro\n\n";
        assert!(prompt.contains(expected));
    }

    #[test]
    fn test_empty_optional_values_are_omitted() {
        let ingredients = strings(&["oats"]);
        let params = RecipePromptParams {
            ingredients: &ingredients,
            cuisine_type: Some(""),
            max_cooking_time: Some(0),
            dietary_preferences: &[],
            available_utensils: &[],
            servings: 1,
            disliked_ingredients: &[],
        };

        let prompt = build_recipe_prompt(&params);

        assert!(prompt.contains("- Servings: 1\n\nPlease provide"));
    }

    #[test]
    fn test_output_schema_and_directives_are_present() {
        let ingredients = strings(&["beans"]);
        let params = RecipePromptParams {
            ingredients: &ingredients,
            cuisine_type: None,
            max_cooking_time: None,
            dietary_preferences: &[],
            available_utensils: &[],
            servings: 2,
            disliked_ingredients: &[],
        };

        let prompt = build_recipe_prompt(&params);

        for key in [
            "\"title\"",
            "\"cuisine_type\"",
            "\"cooking_time\"",
            "\"difficulty\"",
            "\"servings\"",
            "\"ingredients\"",
            "\"instructions\"",
            "\"utensils_required\"",
            "\"nutritional_info\"",
            "\"calories\"",
            "\"protein\"",
            "\"carbs\"",
            "\"fat\"",
        ] {
            assert!(prompt.contains(key), "missing {key}");
        }
        assert!(prompt.contains("6. Fits within the time constraint"));
    }

    #[test]
    fn test_params_from_input_forward_disliked_ingredients() {
        let mut input = GenerateRecipeInput::for_profile(uuid::Uuid::new_v4());
        input.disliked_ingredients = Some(strings(&["olives"]));
        let ingredients = strings(&["bread"]);

        let prompt = build_recipe_prompt(&RecipePromptParams::new(&ingredients, &input));

        assert!(prompt.contains("- DO NOT USE: olives"));
        assert!(prompt.contains("- Servings: 2"));
    }
}
