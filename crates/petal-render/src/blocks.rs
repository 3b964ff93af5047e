//! Renderers for the non-hero section blocks.
//!
//! These are deliberately thin: a typed view model per component, a
//! default for every displayed field, and lenient list parsing that
//! drops nothing and never fails. Layout, animation, and styling are
//! the frontend's concern, not this crate's.

use serde::Serialize;
use serde_json::Value;

use crate::extract::{array_field, string_field};

// ---------------------------------------------------------------------
// Icon + title + description panels (BrandPromise,
// IngredientTransparency, Sustainability)
// ---------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelListView {
    pub title: String,
    pub subtitle: String,
    pub panels: Vec<Panel>,
}

fn panels_from(content: &Value, defaults: &[(&str, &str, &str)]) -> Vec<Panel> {
    match array_field(content, "items") {
        Some(items) if !items.is_empty() => items
            .iter()
            .map(|item| Panel {
                icon: string_field(item, "icon", "Leaf"),
                title: string_field(item, "title", ""),
                description: string_field(item, "description", ""),
            })
            .collect(),
        _ => defaults
            .iter()
            .map(|(icon, title, description)| Panel {
                icon: (*icon).into(),
                title: (*title).into(),
                description: (*description).into(),
            })
            .collect(),
    }
}

pub fn render_brand_promise(content: &Value) -> PanelListView {
    PanelListView {
        title: string_field(content, "title", "Our Promise"),
        subtitle: string_field(content, "subtitle", ""),
        panels: panels_from(
            content,
            &[
                (
                    "MapPin",
                    "Made in Canada",
                    "Crafted with clean formulas in trusted GMP-certified facilities.",
                ),
                (
                    "FlaskConical",
                    "Backed by Clean Science",
                    "Effective botanical ingredients that are safe, gentle, and performance-driven.",
                ),
                (
                    "Sparkles",
                    "Luxurious Yet Affordable",
                    "Premium results without premium pricing.",
                ),
            ],
        ),
    }
}

pub fn render_ingredients(content: &Value) -> PanelListView {
    PanelListView {
        title: string_field(content, "title", "What's Inside Matters"),
        subtitle: string_field(
            content,
            "subtitle",
            "Every ingredient chosen with intention, nothing hidden.",
        ),
        panels: panels_from(
            content,
            &[
                (
                    "Leaf",
                    "Rosemary Extract",
                    "Stimulates the scalp and supports fuller-looking hair.",
                ),
                (
                    "Droplets",
                    "Peppermint Oil",
                    "A cooling boost of circulation with a fresh finish.",
                ),
                (
                    "Shield",
                    "No Sulfates or Parabens",
                    "Free of harsh detergents, safe for color-treated hair.",
                ),
            ],
        ),
    }
}

pub fn render_sustainability(content: &Value) -> PanelListView {
    PanelListView {
        title: string_field(content, "title", "Beauty That Gives Back"),
        subtitle: string_field(content, "subtitle", ""),
        panels: panels_from(
            content,
            &[
                (
                    "Recycle",
                    "Recyclable Packaging",
                    "Bottles and cartons designed for a second life.",
                ),
                (
                    "Leaf",
                    "Responsibly Sourced",
                    "Botanicals from growers we know by name.",
                ),
            ],
        ),
    }
}

// ---------------------------------------------------------------------
// Featured products grid
// ---------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductTile {
    pub name: String,
    pub image: String,
    pub benefits: Vec<String>,
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductGridView {
    pub title: String,
    pub subtitle: String,
    pub products: Vec<ProductTile>,
}

pub fn render_featured_products(content: &Value) -> ProductGridView {
    let products = match array_field(content, "products") {
        Some(items) if !items.is_empty() => items
            .iter()
            .map(|item| ProductTile {
                name: string_field(item, "name", ""),
                image: string_field(item, "image", ""),
                benefits: array_field(item, "benefits")
                    .map(|benefits| {
                        benefits
                            .iter()
                            .filter_map(|b| b.as_str().map(str::to_string))
                            .collect()
                    })
                    .unwrap_or_default(),
                badge: crate::extract::optional_string_field(item, "badge"),
            })
            .collect(),
        _ => Vec::new(),
    };

    ProductGridView {
        title: string_field(content, "title", "Bestsellers"),
        subtitle: string_field(
            content,
            "subtitle",
            "Our most-loved formulas for healthier, stronger hair",
        ),
        products,
    }
}

// ---------------------------------------------------------------------
// Brand story
// ---------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryView {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub image: String,
}

pub fn render_brand_story(content: &Value) -> StoryView {
    let paragraphs = match array_field(content, "paragraphs") {
        Some(items) if !items.is_empty() => items
            .iter()
            .filter_map(|p| p.as_str().map(str::to_string))
            .collect(),
        _ => vec![
            "We started in a home kitchen with one belief: effective beauty \
             should be clean, honest, and within reach."
                .to_string(),
        ],
    };

    StoryView {
        title: string_field(content, "title", "Our Story"),
        paragraphs,
        image: string_field(content, "image", ""),
    }
}

// ---------------------------------------------------------------------
// Customer reviews
// ---------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub quote: String,
    pub name: String,
    pub location: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewListView {
    pub title: String,
    pub subtitle: String,
    pub reviews: Vec<Review>,
}

pub fn render_reviews(content: &Value) -> ReviewListView {
    let reviews = match array_field(content, "reviews") {
        Some(items) if !items.is_empty() => items
            .iter()
            .map(|item| Review {
                quote: string_field(item, "quote", ""),
                name: string_field(item, "name", ""),
                location: string_field(item, "location", ""),
                avatar: string_field(item, "avatar", ""),
            })
            .collect(),
        _ => Vec::new(),
    };

    ReviewListView {
        title: string_field(content, "title", "Customer Love"),
        subtitle: string_field(
            content,
            "subtitle",
            "Trusted by 10,000+ happy customers across Canada",
        ),
        reviews,
    }
}

// ---------------------------------------------------------------------
// How-to-use steps
// ---------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub number: String,
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepListView {
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<Step>,
    pub cta_label: String,
}

pub fn render_how_to_use(content: &Value) -> StepListView {
    let steps = match array_field(content, "steps") {
        Some(items) if !items.is_empty() => items
            .iter()
            .map(|item| Step {
                number: string_field(item, "number", ""),
                icon: string_field(item, "icon", "Droplets"),
                title: string_field(item, "title", ""),
                description: string_field(item, "description", ""),
            })
            .collect(),
        _ => vec![
            Step {
                number: "1".into(),
                icon: "Droplets".into(),
                title: "Apply 2-3 drops to scalp".into(),
                description: "Focus on areas that need extra care".into(),
            },
            Step {
                number: "2".into(),
                icon: "HandMetal".into(),
                title: "Massage gently".into(),
                description: "Use circular motions to stimulate blood flow".into(),
            },
            Step {
                number: "3".into(),
                icon: "Clock".into(),
                title: "Leave overnight or 30 minutes".into(),
                description: "Let the botanicals work their magic".into(),
            },
            Step {
                number: "4".into(),
                icon: "Sparkles".into(),
                title: "Rinse with a gentle shampoo".into(),
                description: "For best results, use the complete system".into(),
            },
        ],
    };

    StepListView {
        title: string_field(content, "title", "Your Hair Care Ritual"),
        subtitle: string_field(content, "subtitle", "Simple steps for transformative results"),
        steps,
        cta_label: string_field(content, "ctaLabel", "See Full Routine"),
    }
}

// ---------------------------------------------------------------------
// Final call to action
// ---------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalCtaView {
    pub title: String,
    pub subtitle: String,
    pub button_label: String,
}

pub fn render_final_cta(content: &Value) -> FinalCtaView {
    FinalCtaView {
        title: string_field(content, "title", "Ready for stronger, healthier hair?"),
        subtitle: string_field(
            content,
            "subtitle",
            "Join thousands who've discovered the power of clean, botanical beauty",
        ),
        button_label: string_field(content, "buttonLabel", "Shop Now"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn panel_defaults_apply_on_empty_content() {
        let view = render_brand_promise(&json!({}));
        assert_eq!(view.panels.len(), 3);
        assert_eq!(view.panels[0].title, "Made in Canada");
    }

    #[test]
    fn authored_items_replace_panel_defaults() {
        let view = render_sustainability(&json!({
            "items": [{"icon": "Recycle", "title": "Refill", "description": "Bring it back"}]
        }));
        assert_eq!(view.panels.len(), 1);
        assert_eq!(view.panels[0].title, "Refill");
    }

    #[test]
    fn step_items_apply_per_field_defaults() {
        let view = render_how_to_use(&json!({
            "steps": [{"title": "Apply"}]
        }));
        assert_eq!(view.steps.len(), 1);
        assert_eq!(view.steps[0].title, "Apply");
        assert_eq!(view.steps[0].icon, "Droplets");
        assert_eq!(view.steps[0].number, "");
    }

    #[test]
    fn product_benefits_tolerate_mixed_arrays() {
        let view = render_featured_products(&json!({
            "products": [{"name": "Oil", "benefits": ["a", 1, null, "b"]}]
        }));
        assert_eq!(view.products[0].benefits, vec!["a", "b"]);
    }

    #[test]
    fn renderers_never_panic_on_garbage() {
        let garbage = [json!(null), json!("x"), json!([{}]), json!({"items": "no"})];
        for content in &garbage {
            render_brand_promise(content);
            render_ingredients(content);
            render_sustainability(content);
            render_featured_products(content);
            render_brand_story(content);
            render_reviews(content);
            render_how_to_use(content);
            render_final_cta(content);
        }
    }
}
