use crate::models::Profile;
use sqlx::PgPool;
use uuid::Uuid;

/// Find a profile by the auth backend's user id.
pub async fn find_profile_by_id(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<Profile>, sqlx::Error> {
    let profile = sqlx::query_as::<_, Profile>(
        r#"
        SELECT id, username, full_name, phone_number, created_at, updated_at
        FROM profiles
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

/// Update a profile's editable fields. Omitted fields keep their value.
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    username: Option<&str>,
    full_name: Option<&str>,
    phone_number: Option<&str>,
) -> Result<Profile, sqlx::Error> {
    let profile = sqlx::query_as::<_, Profile>(
        r#"
        UPDATE profiles
        SET username = COALESCE($2, username),
            full_name = COALESCE($3, full_name),
            phone_number = COALESCE($4, phone_number),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, username, full_name, phone_number, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(username)
    .bind(full_name)
    .bind(phone_number)
    .fetch_one(pool)
    .await?;

    Ok(profile)
}
