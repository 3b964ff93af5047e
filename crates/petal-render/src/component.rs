//! The closed set of renderable components.

/// Every component a section may declare. The `component` column is
/// free text written by the editor, so parsing is fallible and a miss
/// renders a placeholder rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    HeroSection,
    BrandPromise,
    IngredientTransparency,
    FeaturedProducts,
    BrandStory,
    CustomerReviews,
    HowToUse,
    Sustainability,
    FinalCta,
}

impl ComponentKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "HeroSection" => Some(Self::HeroSection),
            "BrandPromise" => Some(Self::BrandPromise),
            "IngredientTransparency" => Some(Self::IngredientTransparency),
            "FeaturedProducts" => Some(Self::FeaturedProducts),
            "BrandStory" => Some(Self::BrandStory),
            "CustomerReviews" => Some(Self::CustomerReviews),
            "HowToUse" => Some(Self::HowToUse),
            "Sustainability" => Some(Self::Sustainability),
            "FinalCTA" => Some(Self::FinalCta),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeroSection => "HeroSection",
            Self::BrandPromise => "BrandPromise",
            Self::IngredientTransparency => "IngredientTransparency",
            Self::FeaturedProducts => "FeaturedProducts",
            Self::BrandStory => "BrandStory",
            Self::CustomerReviews => "CustomerReviews",
            Self::HowToUse => "HowToUse",
            Self::Sustainability => "Sustainability",
            Self::FinalCta => "FinalCTA",
        }
    }
}
