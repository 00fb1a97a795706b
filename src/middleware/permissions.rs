/// Ownership-based permission checks
///
/// Users can only modify recipes they authored.
use uuid::Uuid;

use crate::error::AppError;
use crate::models::Recipe;

/// Result type for permission checks
pub type PermissionResult = Result<(), AppError>;

/// Check if a user owns a recipe
pub fn check_recipe_ownership(user_id: Uuid, recipe: &Recipe) -> PermissionResult {
    if recipe.user_id == user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You don't have permission to modify this recipe".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn recipe_owned_by(user_id: Uuid) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            user_id,
            title: "Test".to_string(),
            ingredients: "flour".to_string(),
            instructions: "mix".to_string(),
            cooking_time: None,
            difficulty: None,
            category: None,
        }
    }

    #[test]
    fn owner_passes_check() {
        let user = Uuid::new_v4();
        assert!(check_recipe_ownership(user, &recipe_owned_by(user)).is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        let result = check_recipe_ownership(Uuid::new_v4(), &recipe_owned_by(Uuid::new_v4()));
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }
}
