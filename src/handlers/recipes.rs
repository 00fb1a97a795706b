/// Recipe handlers - JSON endpoints for authoring recipes
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::db::recipe_repo;
use crate::error::{AppError, Result};
use crate::middleware::{check_recipe_ownership, SessionUser};
use crate::models::Difficulty;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRecipeRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1))]
    pub ingredients: String,

    #[validate(length(min = 1))]
    pub instructions: String,

    #[validate(range(min = 1, max = 10080))]
    pub cooking_time: Option<i32>,

    pub difficulty: Option<Difficulty>,

    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRecipeRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub ingredients: Option<String>,

    #[validate(length(min = 1))]
    pub instructions: Option<String>,

    #[validate(range(min = 1, max = 10080))]
    pub cooking_time: Option<i32>,

    pub difficulty: Option<Difficulty>,

    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Create a new recipe owned by the signed-in user
pub async fn create_recipe(
    pool: web::Data<PgPool>,
    user: SessionUser,
    req: web::Json<CreateRecipeRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let recipe = recipe_repo::create_recipe(
        &pool,
        user.id,
        &req.title,
        &req.ingredients,
        &req.instructions,
        req.cooking_time,
        req.difficulty,
        req.category.as_deref(),
    )
    .await?;

    tracing::info!(recipe_id = %recipe.id, user_id = %user.id, "recipe created");

    Ok(HttpResponse::Created().json(recipe))
}

/// Fetch a single recipe
pub async fn get_recipe(
    pool: web::Data<PgPool>,
    recipe_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let recipe = recipe_repo::find_recipe_by_id(&pool, *recipe_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("recipe {} not found", *recipe_id)))?;

    Ok(HttpResponse::Ok().json(recipe))
}

/// List a user's recipes, newest first
pub async fn get_user_recipes(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse> {
    let limit = query.limit.unwrap_or(20).clamp(1, 100);
    let offset = query.offset.unwrap_or(0).max(0);

    let recipes = recipe_repo::find_recipes_by_user(&pool, *user_id, limit, offset).await?;

    Ok(HttpResponse::Ok().json(recipes))
}

/// Update a recipe. Only the owner may modify it.
pub async fn update_recipe(
    pool: web::Data<PgPool>,
    user: SessionUser,
    recipe_id: web::Path<Uuid>,
    req: web::Json<UpdateRecipeRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let existing = recipe_repo::find_recipe_by_id(&pool, *recipe_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("recipe {} not found", *recipe_id)))?;
    check_recipe_ownership(user.id, &existing)?;

    let updated = recipe_repo::update_recipe(
        &pool,
        *recipe_id,
        req.title.as_deref(),
        req.ingredients.as_deref(),
        req.instructions.as_deref(),
        req.cooking_time,
        req.difficulty,
        req.category.as_deref(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a recipe. Only the owner may remove it.
pub async fn delete_recipe(
    pool: web::Data<PgPool>,
    user: SessionUser,
    recipe_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let existing = recipe_repo::find_recipe_by_id(&pool, *recipe_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("recipe {} not found", *recipe_id)))?;
    check_recipe_ownership(user.id, &existing)?;

    recipe_repo::delete_recipe(&pool, *recipe_id).await?;

    tracing::info!(recipe_id = %recipe_id, user_id = %user.id, "recipe deleted");

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_empty_title() {
        let req = CreateRecipeRequest {
            title: String::new(),
            ingredients: "flour".to_string(),
            instructions: "mix".to_string(),
            cooking_time: None,
            difficulty: None,
            category: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_request_rejects_out_of_range_cooking_time() {
        let req = CreateRecipeRequest {
            title: "Bread".to_string(),
            ingredients: "flour".to_string(),
            instructions: "bake".to_string(),
            cooking_time: Some(0),
            difficulty: None,
            category: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_request_accepts_partial_payload() {
        let req = UpdateRecipeRequest {
            title: Some("New title".to_string()),
            ingredients: None,
            instructions: None,
            cooking_time: None,
            difficulty: Some(Difficulty::Easy),
            category: None,
        };
        assert!(req.validate().is_ok());
    }
}
