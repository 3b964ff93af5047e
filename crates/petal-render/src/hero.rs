//! Hero section renderer.

use serde::Serialize;
use serde_json::Value;

use crate::extract::{object_field, string_field};

const DEFAULT_TITLE: &str = "Clean Beauty That Works, Made With Care in Canada";
const DEFAULT_SUBTITLE: &str = "Luxurious hair care and skincare crafted with clean ingredients, \
     gentle botanicals, and modern science.";
const DEFAULT_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1739980213756-753aea153bb8?fit=max&fm=jpg&q=80&w=1080";
const DEFAULT_ACCENT_IMAGE: &str =
    "https://images.unsplash.com/photo-1763154045793-4be5374b3e70?fit=max&fm=jpg&q=80&w=1080";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cta {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub badge: Badge,
    pub title: String,
    pub subtitle: String,
    pub primary_cta: Cta,
    pub secondary_cta: Cta,
    pub hero_image: String,
    pub accent_image: String,
}

fn badge(content: &Value) -> Badge {
    let map = object_field(content, "badge");
    let badge_value = map
        .map(|m| Value::Object(m.clone()))
        .unwrap_or(Value::Null);
    Badge {
        icon: string_field(&badge_value, "icon", "Leaf"),
        text: string_field(&badge_value, "text", "Made in Canada"),
    }
}

fn cta(content: &Value, key: &str, default_label: &str, default_href: &str) -> Cta {
    match object_field(content, key) {
        Some(map) => {
            let cta_value = Value::Object(map.clone());
            Cta {
                label: string_field(&cta_value, "label", default_label),
                href: string_field(&cta_value, "href", default_href),
            }
        }
        None => Cta {
            label: default_label.into(),
            href: default_href.into(),
        },
    }
}

/// Render the hero. Every field has a display default; badge and CTA
/// subtrees tolerate partial records.
pub fn render(content: &Value) -> HeroView {
    HeroView {
        badge: badge(content),
        title: string_field(content, "title", DEFAULT_TITLE),
        subtitle: string_field(content, "subtitle", DEFAULT_SUBTITLE),
        primary_cta: cta(content, "primaryCta", "Shop Bestsellers", "#products"),
        secondary_cta: cta(content, "secondaryCta", "See Our Ingredients", "#ingredients"),
        hero_image: string_field(content, "heroImage", DEFAULT_HERO_IMAGE),
        accent_image: string_field(content, "accentImage", DEFAULT_ACCENT_IMAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_content_gets_full_defaults() {
        let view = render(&json!({}));
        assert_eq!(view.title, DEFAULT_TITLE);
        assert_eq!(view.badge.icon, "Leaf");
        assert_eq!(view.primary_cta.label, "Shop Bestsellers");
    }

    #[test]
    fn authored_fields_override_defaults() {
        let view = render(&json!({
            "title": "Hi",
            "badge": {"icon": "MapPin", "text": "Local"},
            "primaryCta": {"label": "Buy", "href": "/shop"}
        }));
        assert_eq!(view.title, "Hi");
        assert_eq!(view.badge.icon, "MapPin");
        assert_eq!(view.primary_cta.href, "/shop");
        // Untouched fields keep defaults.
        assert_eq!(view.subtitle, DEFAULT_SUBTITLE);
    }

    #[test]
    fn partial_badge_keeps_per_field_defaults() {
        let view = render(&json!({"badge": {"text": "Small Batch"}}));
        assert_eq!(view.badge.icon, "Leaf");
        assert_eq!(view.badge.text, "Small Batch");
    }

    #[test]
    fn garbage_shapes_never_panic() {
        for content in [
            json!("just a string"),
            json!(42),
            json!([1, 2, 3]),
            json!({"title": {"deep": {"nest": true}}, "badge": "not an object"}),
            Value::Null,
        ] {
            let view = render(&content);
            assert!(!view.title.is_empty());
        }
    }
}
