use crate::models::{Difficulty, Recipe};
use sqlx::PgPool;
use uuid::Uuid;

const RECIPE_COLUMNS: &str = "id, created_at, updated_at, user_id, title, ingredients, \
                              instructions, cooking_time, difficulty, category";

/// Fetch every recipe, newest first.
///
/// The landing page renders this set unpaginated; an empty result triggers
/// the fallback cards upstream.
pub async fn list_recipes(pool: &PgPool) -> Result<Vec<Recipe>, sqlx::Error> {
    let recipes = sqlx::query_as::<_, Recipe>(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(recipes)
}

/// Find a recipe by ID
pub async fn find_recipe_by_id(
    pool: &PgPool,
    recipe_id: Uuid,
) -> Result<Option<Recipe>, sqlx::Error> {
    let recipe = sqlx::query_as::<_, Recipe>(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1"
    ))
    .bind(recipe_id)
    .fetch_optional(pool)
    .await?;

    Ok(recipe)
}

/// Find all recipes by a user, newest first.
pub async fn find_recipes_by_user(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Recipe>, sqlx::Error> {
    let recipes = sqlx::query_as::<_, Recipe>(&format!(
        r#"
        SELECT {RECIPE_COLUMNS}
        FROM recipes
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#
    ))
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(recipes)
}

/// Create a new recipe.
///
/// Identity and timestamps come from the database; callers supply content
/// fields only. Returns the created row.
#[allow(clippy::too_many_arguments)]
pub async fn create_recipe(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    ingredients: &str,
    instructions: &str,
    cooking_time: Option<i32>,
    difficulty: Option<Difficulty>,
    category: Option<&str>,
) -> Result<Recipe, sqlx::Error> {
    let recipe = sqlx::query_as::<_, Recipe>(&format!(
        r#"
        INSERT INTO recipes (user_id, title, ingredients, instructions, cooking_time, difficulty, category)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {RECIPE_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(title)
    .bind(ingredients)
    .bind(instructions)
    .bind(cooking_time)
    .bind(difficulty)
    .bind(category)
    .fetch_one(pool)
    .await?;

    Ok(recipe)
}

/// Update a recipe in place. Omitted fields keep their current value.
#[allow(clippy::too_many_arguments)]
pub async fn update_recipe(
    pool: &PgPool,
    recipe_id: Uuid,
    title: Option<&str>,
    ingredients: Option<&str>,
    instructions: Option<&str>,
    cooking_time: Option<i32>,
    difficulty: Option<Difficulty>,
    category: Option<&str>,
) -> Result<Recipe, sqlx::Error> {
    let recipe = sqlx::query_as::<_, Recipe>(&format!(
        r#"
        UPDATE recipes
        SET title = COALESCE($2, title),
            ingredients = COALESCE($3, ingredients),
            instructions = COALESCE($4, instructions),
            cooking_time = COALESCE($5, cooking_time),
            difficulty = COALESCE($6, difficulty),
            category = COALESCE($7, category),
            updated_at = NOW()
        WHERE id = $1
        RETURNING {RECIPE_COLUMNS}
        "#
    ))
    .bind(recipe_id)
    .bind(title)
    .bind(ingredients)
    .bind(instructions)
    .bind(cooking_time)
    .bind(difficulty)
    .bind(category)
    .fetch_one(pool)
    .await?;

    Ok(recipe)
}

/// Delete a recipe. Returns whether a row was removed.
pub async fn delete_recipe(pool: &PgPool, recipe_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
        .bind(recipe_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
