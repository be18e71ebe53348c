pub mod recipe_favorite_repository;
pub mod recipe_repository;

pub use recipe_favorite_repository::PostgresRecipeFavoriteRepository;
pub use recipe_repository::PostgresRecipeRepository;
