/// Landing page rendering
///
/// Renders the hero, the (display-only) search and category controls, and
/// the recipe grid. When the persisted set is empty the grid falls back to
/// the six static cards.
use crate::middleware::AuthState;
use crate::models::{fallback_recipes, FallbackRecipe, Recipe};
use crate::pages::{escape_html, render_header, render_shell};

/// Maximum number of ingredient characters shown on a card.
const INGREDIENT_PREVIEW_CHARS: usize = 100;

/// Category chips shown under the search box. Display-only.
const CATEGORIES: [&str; 7] = [
    "All",
    "Breakfast",
    "Lunch",
    "Dinner",
    "Dessert",
    "Vegan",
    "Quick",
];

/// One grid card: either a persisted recipe or a static fallback entry.
#[derive(Debug)]
pub enum RecipeCard<'a> {
    Persisted(&'a Recipe),
    Fallback(FallbackRecipe),
}

/// Choose what the grid displays: the fetched rows in order, or the fixed
/// fallback set when there are none.
pub fn display_cards(recipes: &[Recipe]) -> Vec<RecipeCard<'_>> {
    if recipes.is_empty() {
        fallback_recipes().into_iter().map(RecipeCard::Fallback).collect()
    } else {
        recipes.iter().map(RecipeCard::Persisted).collect()
    }
}

/// Render the full landing page.
pub fn render_home(auth: &AuthState, recipes: &[Recipe]) -> String {
    let mut main = String::new();
    main.push_str(&render_hero());
    main.push_str(&render_search_and_filters());
    main.push_str(&render_grid(&display_cards(recipes)));

    render_shell("RecipeShare", &render_header(auth), &main)
}

fn render_hero() -> String {
    concat!(
        "<section>",
        "<h1>Discover and share your favorite recipes</h1>",
        r#"<p class="muted">Create, explore, and save delicious ideas from the community. "#,
        "Start with a search or browse by category.</p>",
        "</section>"
    )
    .to_string()
}

fn render_search_and_filters() -> String {
    let mut out = String::from("<section>");
    out.push_str(concat!(
        r#"<form class="search-form">"#,
        r#"<input name="q" placeholder="Search recipes, ingredients, or categories...">"#,
        r#"<button type="submit" class="btn-primary">Search</button>"#,
        "</form>"
    ));
    out.push_str(r#"<div class="chips">"#);
    for category in CATEGORIES {
        out.push_str(&format!(
            r#"<button type="button" class="chip">{category}</button>"#
        ));
    }
    out.push_str("</div></section>");
    out
}

fn render_grid(cards: &[RecipeCard<'_>]) -> String {
    let mut out = String::from(r#"<section class="grid">"#);
    for card in cards {
        out.push_str(&render_card(card));
    }
    out.push_str("</section>");
    out
}

fn render_card(card: &RecipeCard<'_>) -> String {
    match card {
        RecipeCard::Persisted(recipe) => render_recipe_card(recipe),
        RecipeCard::Fallback(fallback) => render_fallback_card(fallback),
    }
}

/// Preview of the ingredient text: the leading characters plus an ellipsis.
fn ingredient_preview(ingredients: &str) -> String {
    let mut preview: String = ingredients.chars().take(INGREDIENT_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

fn render_recipe_card(recipe: &Recipe) -> String {
    let category = recipe.category.as_deref().unwrap_or("Recipe");
    let cooking_time = recipe
        .cooking_time
        .map(|m| m.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let difficulty = recipe
        .difficulty
        .map(|d| d.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        concat!(
            r#"<article class="card">"#,
            r#"<div class="card-media">&#127869;&#65039;</div>"#,
            r#"<div class="card-body">"#,
            r#"<div class="card-title-row"><h3>{title}</h3>"#,
            r#"<span class="category-pill">{category}</span></div>"#,
            r#"<p class="muted">{ingredients}</p>"#,
            r#"<div class="card-meta"><div>"#,
            "<span>&#9201;&#65039; {cooking_time}min</span> ",
            "<span>&#128202; {difficulty}</span>",
            r#"</div><a href="/recipes/{id}">View</a></div>"#,
            "</div></article>"
        ),
        title = escape_html(&recipe.title),
        category = escape_html(category),
        ingredients = escape_html(&ingredient_preview(&recipe.ingredients)),
        cooking_time = cooking_time,
        difficulty = difficulty,
        id = recipe.id,
    )
}

fn render_fallback_card(fallback: &FallbackRecipe) -> String {
    format!(
        concat!(
            r#"<article class="card">"#,
            r#"<div class="card-media"><img src="{image_url}" alt="{title}" loading="lazy"></div>"#,
            r#"<div class="card-body">"#,
            r#"<div class="card-title-row"><h3>{title}</h3>"#,
            r#"<span class="category-pill">{category}</span></div>"#,
            r#"<p class="muted">{description}</p>"#,
            r#"<div class="card-meta"><div>"#,
            "<span>&#10084;&#65039; {likes}</span> ",
            "<span>&#128172; {comments}</span> ",
            "<span>&#128278; {saves}</span>",
            r##"</div><a href="#">View</a></div>"##,
            "</div></article>"
        ),
        image_url = fallback.image_url,
        title = fallback.title,
        category = fallback.category,
        description = fallback.description,
        likes = fallback.likes,
        comments = fallback.comments,
        saves = fallback.saves,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::models::Difficulty;

    fn recipe(title: &str, ingredients: &str) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            user_id: Uuid::new_v4(),
            title: title.to_string(),
            ingredients: ingredients.to_string(),
            instructions: "mix and cook".to_string(),
            cooking_time: None,
            difficulty: None,
            category: None,
        }
    }

    #[test]
    fn empty_set_renders_exactly_the_six_fallback_cards_in_order() {
        let html = render_home(&AuthState::SignedOut, &[]);

        let expected = fallback_recipes();
        assert_eq!(expected.len(), 6);
        let mut last_pos = 0;
        for card in &expected {
            let pos = html.find(card.title).expect("fallback title missing");
            assert!(pos > last_pos, "fallback cards out of order");
            last_pos = pos;
        }
        // Engagement counters only appear on fallback cards.
        assert!(html.contains("128"));
    }

    #[test]
    fn non_empty_set_renders_rows_and_no_fallback_cards() {
        let recipes = vec![recipe("Miso Ramen", "noodles, broth"), recipe("Shakshuka", "eggs")];
        let html = render_home(&AuthState::SignedOut, &recipes);

        let ramen = html.find("Miso Ramen").expect("first row missing");
        let shakshuka = html.find("Shakshuka").expect("second row missing");
        assert!(ramen < shakshuka, "rows must keep returned order");

        for fallback in fallback_recipes() {
            assert!(!html.contains(fallback.title), "fallback leaked into grid");
        }
    }

    #[test]
    fn recipe_card_defaults_category_and_metadata() {
        let html = render_recipe_card(&recipe("Plain", "salt"));
        assert!(html.contains(">Recipe</span>"));
        assert!(html.contains("N/Amin"));
        assert!(html.contains("salt..."));
    }

    #[test]
    fn recipe_card_shows_present_metadata() {
        let mut r = recipe("Stew", "beef, carrots");
        r.category = Some("Dinner".to_string());
        r.cooking_time = Some(45);
        r.difficulty = Some(Difficulty::Medium);

        let html = render_recipe_card(&r);
        assert!(html.contains(">Dinner</span>"));
        assert!(html.contains("45min"));
        assert!(html.contains("medium"));
    }

    #[test]
    fn ingredient_preview_truncates_at_one_hundred_characters() {
        let long = "x".repeat(250);
        let preview = ingredient_preview(&long);
        assert_eq!(preview.chars().count(), 103);
        assert!(preview.ends_with("..."));

        // Multi-byte input must not split a character.
        let accented = "é".repeat(150);
        let preview = ingredient_preview(&accented);
        assert_eq!(preview.chars().count(), 103);
    }

    #[test]
    fn short_ingredient_text_still_gets_an_ellipsis() {
        assert_eq!(ingredient_preview("eggs"), "eggs...");
    }

    #[test]
    fn recipe_card_escapes_user_text() {
        let html = render_recipe_card(&recipe("<img onerror=x>", "safe"));
        assert!(!html.contains("<img onerror"));
        assert!(html.contains("&lt;img onerror=x&gt;"));
    }

    #[test]
    fn page_carries_search_controls_and_category_chips() {
        let html = render_home(&AuthState::SignedOut, &[]);
        assert!(html.contains("Search recipes, ingredients, or categories..."));
        for category in CATEGORIES {
            assert!(html.contains(category));
        }
    }
}
