//! Section content resolution — draft/publish precedence, visibility
//! filtering, and per-section content selection.

use petal_core::content::{has_content, normalize};
use petal_core::models::{PublishStatus, Section};
use petal_core::repository::{PreviewTokenRepository, SectionRepository};
use serde_json::{Map, Value};
use tracing::{info, warn};
use uuid::Uuid;

use crate::preview::{PreviewGate, TokenScope};

/// Component name carrying the legacy badge-capture shim.
const HERO_COMPONENT: &str = "HeroSection";

/// How long a public (non-preview) response may be cached, in seconds.
/// Preview responses are token-scoped and never cacheable.
const PUBLIC_CACHE_MAX_AGE_SECS: u32 = 300;

/// One section ready for dispatch: identity plus its selected,
/// canonicalized content.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ResolvedSection {
    pub id: Uuid,
    pub key: String,
    pub label: String,
    pub component: String,
    pub position: i64,
    pub content: Value,
}

/// Ordered resolution result for one page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ResolvedSections {
    pub sections: Vec<ResolvedSection>,
    pub draft_mode: bool,
}

impl ResolvedSections {
    fn empty(draft_mode: bool) -> Self {
        Self {
            sections: Vec::new(),
            draft_mode,
        }
    }

    /// Response-level cache hint: public views may be cached briefly,
    /// preview views never.
    pub fn cache_max_age(&self) -> Option<u32> {
        (!self.draft_mode).then_some(PUBLIC_CACHE_MAX_AGE_SECS)
    }
}

/// The core decision engine: fetches a page's sections and applies the
/// draft/publish precedence and fallback policy per section.
pub struct SectionResolver<S: SectionRepository, T: PreviewTokenRepository> {
    sections: S,
    gate: PreviewGate<T>,
}

impl<S: SectionRepository, T: PreviewTokenRepository> SectionResolver<S, T> {
    pub fn new(sections: S, tokens: T) -> Self {
        Self {
            sections,
            gate: PreviewGate::new(tokens),
        }
    }

    /// Resolve the ordered sections of a page.
    ///
    /// Draft mode is entered only with a token that validates against
    /// this page; an invalid token silently downgrades to the public
    /// view. A store failure yields an empty section list with the
    /// computed draft flag preserved — this boundary never faults.
    pub async fn resolve(&self, page_id: Uuid, preview_token: Option<&str>) -> ResolvedSections {
        let draft_mode = match preview_token {
            Some(token) => {
                self.gate
                    .validate(token, &TokenScope::page(page_id))
                    .await
                    .valid
            }
            None => false,
        };

        let rows = match self.sections.list_by_page(page_id).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(page_id = %page_id, error = %e, "section fetch failed");
                return ResolvedSections::empty(draft_mode);
            }
        };

        let sections = rows
            .into_iter()
            .filter(|section| draft_mode || is_publicly_visible(section))
            .map(|section| {
                let content = select_content(&section, draft_mode);
                ResolvedSection {
                    id: section.id,
                    key: section.key,
                    label: section.label,
                    component: section.component,
                    position: section.position,
                    content,
                }
            })
            .collect();

        ResolvedSections {
            sections,
            draft_mode,
        }
    }
}

/// Public visibility: published or dirty (dirty keeps showing its last
/// published state), and some content in *either* blob. A pure-draft
/// section has never been published and must not leak.
fn is_publicly_visible(section: &Section) -> bool {
    matches!(
        section.status,
        PublishStatus::Published | PublishStatus::Dirty
    ) && (has_content(&section.published_content) || has_content(&section.draft_content))
}

/// Pick the content blob for a section and canonicalize it.
///
/// Preview prefers draft, public prefers published; either falls back
/// to the other when the preferred blob is empty (the editor regularly
/// saves `{}`), and to an empty object when both are.
fn select_content(section: &Section, draft_mode: bool) -> Value {
    let (preferred, fallback) = if draft_mode {
        (&section.draft_content, &section.published_content)
    } else {
        (&section.published_content, &section.draft_content)
    };

    let mut chosen = if has_content(preferred) {
        preferred.clone()
    } else if has_content(fallback) {
        fallback.clone()
    } else {
        Value::Object(Map::new())
    };

    // Legacy shim: an upstream flattening bug used to store only the
    // hero's {icon, text} badge subtree as the whole record. When the
    // selection looks like that and the published blob is richer, take
    // the published blob instead.
    if section.component == HERO_COMPONENT
        && looks_like_stray_badge(&chosen)
        && let Value::Object(published) = &section.published_content
        && published.len() > 2
    {
        warn!(
            section = %section.key,
            "selected hero content is a stray badge subtree; falling back to published content"
        );
        chosen = section.published_content.clone();
    }

    let normalized = normalize(&chosen);
    if normalized != chosen {
        info!(
            section = %section.key,
            component = %section.component,
            "content normalization rewrote wrapped fields"
        );
    }
    normalized
}

/// Exactly the two keys of a hero badge record, nothing else.
fn looks_like_stray_badge(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            map.len() == 2 && map.contains_key("icon") && map.contains_key("text")
        }
        _ => false,
    }
}
