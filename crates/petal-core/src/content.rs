//! Content canonicalization — pure, total, no I/O.
//!
//! Content authored through the external visual editor sometimes
//! round-trips per-field metadata as wrapper objects, turning
//! `"Hello"` into `{ "title": "Hello" }` one level below a `title`
//! field, or `"Leaf"` into `{ "value": "Leaf" }`. [`normalize`]
//! collapses those wrappers back to the scalar the renderer expects.
//!
//! The single-key collapse is a heuristic: it cannot distinguish a
//! mis-wrapped scalar from a legitimately single-field record. An
//! object root is therefore never collapsed — the root of a content
//! record is a field map keyed by the component contract
//! (`{ "ctaLabel": "Buy" }` must stay a record) and only the field
//! values below it may be mis-wrapped. Multi-key objects
//! (`{icon, text}` badges, `{label, href}` CTAs) are structurally
//! meaningful and are never collapsed at any depth.

use serde_json::{Map, Value};

/// Keys the editor is known to use when wrapping a scalar.
const PRIMITIVE_CANDIDATE_KEYS: [&str; 5] = ["value", "text", "label", "title", "name"];

fn is_primitive(value: &Value) -> bool {
    matches!(
        value,
        Value::String(_) | Value::Number(_) | Value::Bool(_)
    )
}

/// If `map` is a single-key wrapper around a primitive, return that
/// primitive. Multi-key objects are never unwrapped.
fn try_extract_primitive(map: &Map<String, Value>, parent_key: Option<&str>) -> Option<Value> {
    if map.len() > 1 {
        return None;
    }

    // Prefer the field's own name: `{ "title": { "title": "…" } }`.
    if let Some(parent_key) = parent_key
        && let Some(value) = map.get(parent_key)
        && is_primitive(value)
    {
        return Some(value.clone());
    }

    for key in PRIMITIVE_CANDIDATE_KEYS {
        if let Some(value) = map.get(key)
            && is_primitive(value)
        {
            return Some(value.clone());
        }
    }

    if let Some(value) = map.values().next()
        && is_primitive(value)
    {
        return Some(value.clone());
    }

    None
}

fn normalize_value(value: &Value, parent_key: Option<&str>) -> Value {
    match value {
        Value::Null => Value::Null,
        v if is_primitive(v) => v.clone(),
        // Arrays keep the surrounding key as context for each item.
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| normalize_value(item, parent_key))
                .collect(),
        ),
        Value::Object(map) => {
            // Children first: the collapse decision must see the
            // canonical shape, otherwise a pass could produce a new
            // single-key wrapper for the next pass to collapse and the
            // function would not be a fixed point.
            let normalized: Map<String, Value> = map
                .iter()
                .map(|(key, nested)| (key.clone(), normalize_value(nested, Some(key))))
                .collect();
            if let Some(primitive) = try_extract_primitive(&normalized, parent_key) {
                return primitive;
            }
            Value::Object(normalized)
        }
        other => other.clone(),
    }
}

/// Canonicalize a content value.
///
/// An object root is a per-component field map and is never collapsed,
/// which keeps a legitimately single-field record (`{"ctaLabel":
/// "Buy"}`) from degenerating into a bare string; each field's subtree
/// is normalized with that field's key as parent context.
///
/// Total: never fails; unrecognized shapes pass through unchanged.
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, nested)| (key.clone(), normalize_value(nested, Some(key))))
                .collect(),
        ),
        other => normalize_value(other, None),
    }
}

/// Whether a value is meaningful enough to present on a section.
///
/// The editor regularly saves `{}` into one of the two content blobs;
/// this test is what keeps a section from silently disappearing in the
/// public view (or showing stale content in preview) because of that.
/// An object counts if at least one entry is non-null, a non-blank
/// string, a non-empty object, or a non-empty array. Non-empty arrays
/// count regardless of element shape.
pub fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(_) | Value::Number(_) => true,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => map.values().any(entry_has_substance),
    }
}

fn entry_has_substance(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(_) | Value::Number(_) => true,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives_pass_through() {
        assert_eq!(normalize(&json!("hello")), json!("hello"));
        assert_eq!(normalize(&json!(42)), json!(42));
        assert_eq!(normalize(&json!(true)), json!(true));
        assert_eq!(normalize(&Value::Null), Value::Null);
    }

    #[test]
    fn doubled_field_name_collapses() {
        let input = json!({ "title": { "title": "Welcome" } });
        assert_eq!(normalize(&input), json!({ "title": "Welcome" }));
    }

    #[test]
    fn candidate_key_wrapper_collapses() {
        let input = json!({ "icon": { "value": "Leaf" } });
        assert_eq!(normalize(&input), json!({ "icon": "Leaf" }));
    }

    #[test]
    fn multi_key_object_is_never_collapsed() {
        let input = json!({ "badge": { "icon": "Leaf", "text": "Made Local" } });
        assert_eq!(normalize(&input), input);
    }

    #[test]
    fn single_key_arbitrary_wrapper_collapses() {
        // The last-resort rule: any single-key object holding a
        // primitive unwraps, whatever the key is called.
        let input = json!({ "subtitle": { "copy": "Fresh daily" } });
        assert_eq!(normalize(&input), json!({ "subtitle": "Fresh daily" }));
    }

    #[test]
    fn arrays_normalize_elementwise_with_parent_context() {
        let input = json!({ "steps": [{ "steps": "one" }, { "value": "two" }] });
        assert_eq!(normalize(&input), json!({ "steps": ["one", "two"] }));
    }

    #[test]
    fn nested_structures_normalize_recursively() {
        let input = json!({
            "hero": {
                "title": { "title": "Hi" },
                "cta": { "label": "Go", "href": "#go" }
            }
        });
        assert_eq!(
            normalize(&input),
            json!({
                "hero": {
                    "title": "Hi",
                    "cta": { "label": "Go", "href": "#go" }
                }
            })
        );
    }

    #[test]
    fn single_key_wrapper_around_object_recurses_instead() {
        let input = json!({ "badge": { "badge": { "icon": "Leaf", "text": "Local" } } });
        assert_eq!(
            normalize(&input),
            json!({ "badge": { "badge": { "icon": "Leaf", "text": "Local" } } })
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            json!({ "title": { "title": "Welcome" } }),
            json!({ "badge": { "icon": "Leaf", "text": "Made Local" } }),
            json!({ "items": [{ "value": 1 }, { "name": "x" }, []] }),
            json!({ "a": { "b": { "c": { "value": "deep" } } } }),
            json!({ "ctaLabel": "Buy" }),
            json!([null, "x", { "text": "wrapped" }]),
        ];
        for input in inputs {
            let once = normalize(&input);
            let twice = normalize(&once);
            assert_eq!(once, twice, "not a fixed point for {input}");
        }
    }

    #[test]
    fn nested_wrapper_chain_collapses_in_one_pass() {
        // Collapsing bottom-up means a chain of wrappers resolves
        // completely in a single application, not one layer per call.
        let input = json!({ "a": { "b": { "c": { "value": "deep" } } } });
        let once = normalize(&input);
        assert_eq!(once, json!({ "a": "deep" }));
        assert_eq!(normalize(&once), once);
    }

    // Documented edge: a legitimately single-field record collapses to
    // a bare scalar when it is itself a value of some field. Only the
    // root of a record is protected from this.
    #[test]
    fn single_field_record_collapse_is_known_behavior() {
        let input = json!({ "cta": { "ctaLabel": "Buy" } });
        assert_eq!(normalize(&input), json!({ "cta": "Buy" }));
    }

    #[test]
    fn record_root_is_never_collapsed() {
        let input = json!({ "ctaLabel": "Buy" });
        assert_eq!(normalize(&input), json!({ "ctaLabel": "Buy" }));
    }

    #[test]
    fn record_fields_still_unwrap() {
        let input = json!({ "title": { "title": "Welcome" }, "badge": { "icon": "Leaf", "text": "Local" } });
        assert_eq!(
            normalize(&input),
            json!({ "title": "Welcome", "badge": { "icon": "Leaf", "text": "Local" } })
        );
    }

    #[test]
    fn empty_object_has_no_content() {
        assert!(!has_content(&json!({})));
        assert!(!has_content(&Value::Null));
    }

    #[test]
    fn blank_and_null_entries_do_not_count() {
        assert!(!has_content(&json!({ "a": null, "b": "   ", "c": {} , "d": [] })));
    }

    #[test]
    fn any_substantive_entry_counts() {
        assert!(has_content(&json!({ "a": null, "title": "Hi" })));
        assert!(has_content(&json!({ "n": 0 })));
        assert!(has_content(&json!({ "flag": false })));
        assert!(has_content(&json!({ "nested": { "x": null } })));
    }

    #[test]
    fn nonempty_arrays_count_regardless_of_shape() {
        assert!(has_content(&json!([null])));
        assert!(has_content(&json!({ "items": [{}] })));
        assert!(!has_content(&json!([])));
    }
}
