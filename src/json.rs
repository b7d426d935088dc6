use serde_json::Value;

/// Collapse the single-item lists Infinitude's XML-to-JSON conversion wraps
/// around most values: a list of length 1 becomes its sole element,
/// recursively, for both object and list values.
pub(crate) fn simplify(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, val)| (key.clone(), simplify(val)))
                .collect(),
        ),
        Value::Array(list) if list.len() == 1 => simplify(&list[0]),
        Value::Array(list) => Value::Array(list.iter().map(simplify).collect()),
        other => other.clone(),
    }
}

static EMPTY: &[Value] = &[];

/// Iterate a value that was a list before simplification. A lone object is
/// a collapsed single-item list and yields itself; null yields nothing.
pub(crate) fn items(value: &Value) -> std::slice::Iter<'_, Value> {
    match value {
        Value::Array(list) => list.iter(),
        Value::Null => EMPTY.iter(),
        other => std::slice::from_ref(other).iter(),
    }
}

/// The gateway reports "no value" as an empty string or an empty element
/// (which simplifies to an empty object), so both read as absent.
pub(crate) fn non_empty_str(value: &Value) -> Option<&str> {
    match value.as_str() {
        Some("") | None => None,
        Some(s) => Some(s),
    }
}

pub(crate) fn parse_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) if !s.is_empty() => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn parse_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if !s.is_empty() => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_item_lists_collapse_at_any_depth() {
        let raw = json!({
            "zones": [{
                "zone": [
                    {"id": "1", "fan": ["auto"], "rt": ["71.5"]},
                    {"id": "2", "fan": ["off"], "rt": ["68.0"]}
                ]
            }]
        });
        let simplified = simplify(&raw);
        assert_eq!(simplified["zones"]["zone"][0]["fan"], json!("auto"));
        assert_eq!(simplified["zones"]["zone"][1]["rt"], json!("68.0"));
    }

    #[test]
    fn longer_lists_preserve_length_and_order() {
        let raw = json!({"day": [["a"], ["b"], ["c"]]});
        let simplified = simplify(&raw);
        assert_eq!(simplified["day"], json!(["a", "b", "c"]));
    }

    #[test]
    fn simplify_is_idempotent() {
        let raw = json!({
            "status": [{"oat": ["38"], "zones": [{"zone": [{"id": "1"}, {"id": "2"}]}]}]
        });
        let once = simplify(&raw);
        assert_eq!(simplify(&once), once);
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(simplify(&json!("x")), json!("x"));
        assert_eq!(simplify(&json!(42)), json!(42));
        assert_eq!(simplify(&json!(null)), json!(null));
    }

    #[test]
    fn items_handles_collapsed_lists() {
        let list = json!([{"id": "1"}, {"id": "2"}]);
        assert_eq!(items(&list).count(), 2);

        let collapsed = json!({"id": "1"});
        let sole: Vec<_> = items(&collapsed).collect();
        assert_eq!(sole.len(), 1);
        assert_eq!(sole[0]["id"], json!("1"));

        assert_eq!(items(&Value::Null).count(), 0);
    }

    #[test]
    fn empty_values_read_as_absent() {
        assert_eq!(non_empty_str(&json!("")), None);
        assert_eq!(non_empty_str(&json!({})), None);
        assert_eq!(non_empty_str(&json!("on")), Some("on"));
        assert_eq!(parse_i64(&json!("42")), Some(42));
        assert_eq!(parse_i64(&json!("")), None);
        assert_eq!(parse_f64(&json!("71.5")), Some(71.5));
        assert_eq!(parse_f64(&json!({})), None);
    }
}
