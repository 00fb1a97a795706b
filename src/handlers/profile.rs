/// Profile handlers - the signed-in user's profile row
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::db::profile_repo;
use crate::error::{AppError, Result};
use crate::middleware::SessionUser;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: Option<String>,

    #[validate(length(min = 1, max = 120))]
    pub full_name: Option<String>,

    #[validate(length(min = 5, max = 30))]
    pub phone_number: Option<String>,
}

/// Fetch the signed-in user's profile
pub async fn get_profile(pool: web::Data<PgPool>, user: SessionUser) -> Result<HttpResponse> {
    let profile = profile_repo::find_profile_by_id(&pool, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("profile {} not found", user.id)))?;

    Ok(HttpResponse::Ok().json(profile))
}

/// Update the signed-in user's profile
pub async fn update_profile(
    pool: web::Data<PgPool>,
    user: SessionUser,
    req: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let profile = profile_repo::update_profile(
        &pool,
        user.id,
        req.username.as_deref(),
        req.full_name.as_deref(),
        req.phone_number.as_deref(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_username_is_rejected() {
        let req = UpdateProfileRequest {
            username: Some("ab".to_string()),
            full_name: None,
            phone_number: None,
        };
        assert!(req.validate().is_err());
    }
}
