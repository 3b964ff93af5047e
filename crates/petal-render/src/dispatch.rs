//! Component dispatch — the fixed mapping from a section's declared
//! component name to its renderer.

use serde::Serialize;
use serde_json::Value;

use crate::blocks;
use crate::component::ComponentKind;
use crate::hero;

/// A rendered section: one variant per known component plus a visible
/// placeholder for anything unrecognized. A typo in externally
/// authored data must degrade, never crash the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedSection {
    Hero(hero::HeroView),
    BrandPromise(blocks::PanelListView),
    Ingredients(blocks::PanelListView),
    FeaturedProducts(blocks::ProductGridView),
    BrandStory(blocks::StoryView),
    Reviews(blocks::ReviewListView),
    HowToUse(blocks::StepListView),
    Sustainability(blocks::PanelListView),
    FinalCta(blocks::FinalCtaView),
    Placeholder { component: String },
}

/// Feed normalized content to the renderer selected by `component`.
pub fn dispatch(component: &str, content: &Value) -> RenderedSection {
    let Some(kind) = ComponentKind::parse(component) else {
        return RenderedSection::Placeholder {
            component: component.to_string(),
        };
    };

    match kind {
        ComponentKind::HeroSection => RenderedSection::Hero(hero::render(content)),
        ComponentKind::BrandPromise => {
            RenderedSection::BrandPromise(blocks::render_brand_promise(content))
        }
        ComponentKind::IngredientTransparency => {
            RenderedSection::Ingredients(blocks::render_ingredients(content))
        }
        ComponentKind::FeaturedProducts => {
            RenderedSection::FeaturedProducts(blocks::render_featured_products(content))
        }
        ComponentKind::BrandStory => RenderedSection::BrandStory(blocks::render_brand_story(content)),
        ComponentKind::CustomerReviews => RenderedSection::Reviews(blocks::render_reviews(content)),
        ComponentKind::HowToUse => RenderedSection::HowToUse(blocks::render_how_to_use(content)),
        ComponentKind::Sustainability => {
            RenderedSection::Sustainability(blocks::render_sustainability(content))
        }
        ComponentKind::FinalCta => RenderedSection::FinalCta(blocks::render_final_cta(content)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_component_renders_placeholder_naming_it() {
        let rendered = dispatch("SparkleCarousel", &json!({"title": "x"}));
        match rendered {
            RenderedSection::Placeholder { component } => {
                assert_eq!(component, "SparkleCarousel");
            }
            other => panic!("expected placeholder, got {other:?}"),
        }
    }

    #[test]
    fn every_known_component_dispatches() {
        let names = [
            "HeroSection",
            "BrandPromise",
            "IngredientTransparency",
            "FeaturedProducts",
            "BrandStory",
            "CustomerReviews",
            "HowToUse",
            "Sustainability",
            "FinalCTA",
        ];
        for name in names {
            let rendered = dispatch(name, &json!({}));
            assert!(
                !matches!(rendered, RenderedSection::Placeholder { .. }),
                "{name} fell through to placeholder"
            );
        }
    }

    #[test]
    fn hero_dispatch_applies_content() {
        match dispatch("HeroSection", &json!({"title": "Hi"})) {
            RenderedSection::Hero(view) => assert_eq!(view.title, "Hi"),
            other => panic!("expected hero, got {other:?}"),
        }
    }
}
