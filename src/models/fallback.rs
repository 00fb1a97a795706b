/// Static fallback cards for an empty recipes table
///
/// These six entries stand in for community content until the first real
/// recipe is published. They are never persisted and carry presentation-only
/// engagement counters.
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FallbackRecipe {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub image_url: &'static str,
    pub likes: u32,
    pub comments: u32,
    pub saves: u32,
}

/// The fixed fallback set, in display order.
pub fn fallback_recipes() -> Vec<FallbackRecipe> {
    vec![
        FallbackRecipe {
            id: "1",
            title: "Creamy Garlic Pasta",
            description: "Silky, garlicky pasta ready in 20 minutes.",
            category: "Dinner",
            image_url:
                "https://images.unsplash.com/photo-1523986371872-9d3ba2e2f642?w=800&q=60&auto=format&fit=crop",
            likes: 128,
            comments: 12,
            saves: 54,
        },
        FallbackRecipe {
            id: "2",
            title: "Avocado Toast Deluxe",
            description: "Crispy sourdough, creamy avo, chili flakes.",
            category: "Breakfast",
            image_url:
                "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=800&q=60&auto=format&fit=crop",
            likes: 86,
            comments: 5,
            saves: 33,
        },
        FallbackRecipe {
            id: "3",
            title: "Berry Yogurt Parfait",
            description: "Layers of yogurt, granola, and fresh berries.",
            category: "Dessert",
            image_url:
                "https://images.unsplash.com/photo-1490474418585-ba9bad8fd0ea?w=800&q=60&auto=format&fit=crop",
            likes: 64,
            comments: 3,
            saves: 21,
        },
        FallbackRecipe {
            id: "4",
            title: "Veggie Buddha Bowl",
            description: "Wholesome grains, greens, and tahini drizzle.",
            category: "Vegan",
            image_url:
                "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=800&q=60&auto=format&fit=crop",
            likes: 142,
            comments: 18,
            saves: 71,
        },
        FallbackRecipe {
            id: "5",
            title: "Chicken Tacos",
            description: "Zesty chicken with pico and lime crema.",
            category: "Lunch",
            image_url:
                "https://images.unsplash.com/photo-1551504734-5ee1c4a1479b?w=800&q=60&auto=format&fit=crop",
            likes: 97,
            comments: 10,
            saves: 40,
        },
        FallbackRecipe {
            id: "6",
            title: "Quick Fried Rice",
            description: "Weeknight-friendly, loaded with veggies.",
            category: "Quick",
            image_url:
                "https://images.unsplash.com/photo-1467003909585-2f8a72700288?w=800&q=60&auto=format&fit=crop",
            likes: 120,
            comments: 9,
            saves: 58,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_set_is_six_entries_in_fixed_order() {
        let cards = fallback_recipes();
        assert_eq!(cards.len(), 6);
        let ids: Vec<&str> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(cards[0].title, "Creamy Garlic Pasta");
        assert_eq!(cards[5].category, "Quick");
    }
}
