use serde_json::Value;

/// One changed path between two snapshots. A `None` side means the key or
/// index was absent on that side.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Change {
    pub path: String,
    pub old: Option<Value>,
    pub new: Option<Value>,
}

/// Recursively compare two snapshots, returning the changed paths.
///
/// Diagnostic only: the result is logged, never acted on, so the comparison
/// tolerates heterogeneous types (a type change is reported as a plain
/// old/new pair) and treats a null tree on either side as "nothing to
/// compare" rather than a full-tree change.
pub(crate) fn diff_values(old: &Value, new: &Value) -> Vec<Change> {
    let mut changes = Vec::new();
    if old.is_null() || new.is_null() {
        return changes;
    }
    diff_inner(old, new, "", &mut changes);
    changes
}

fn diff_inner(old: &Value, new: &Value, path: &str, changes: &mut Vec<Change>) {
    match (old, new) {
        (Value::Object(old_map), Value::Object(new_map)) => {
            for (key, new_val) in new_map {
                let child = join(path, key);
                match old_map.get(key) {
                    Some(old_val) => diff_inner(old_val, new_val, &child, changes),
                    None => changes.push(Change {
                        path: child,
                        old: None,
                        new: Some(new_val.clone()),
                    }),
                }
            }
            for (key, old_val) in old_map {
                if !new_map.contains_key(key) {
                    changes.push(Change {
                        path: join(path, key),
                        old: Some(old_val.clone()),
                        new: None,
                    });
                }
            }
        }
        (Value::Array(old_list), Value::Array(new_list)) => {
            for (i, old_item) in old_list.iter().enumerate() {
                let child = format!("{path}[{i}]");
                match new_list.get(i) {
                    None => changes.push(Change {
                        path: child,
                        old: Some(old_item.clone()),
                        new: None,
                    }),
                    Some(new_item) if old_item.is_object() && new_item.is_object() => {
                        diff_inner(old_item, new_item, &child, changes);
                    }
                    Some(new_item) if old_item != new_item => changes.push(Change {
                        path: child,
                        old: Some(old_item.clone()),
                        new: Some(new_item.clone()),
                    }),
                    Some(_) => {}
                }
            }
            for (i, new_item) in new_list.iter().enumerate().skip(old_list.len()) {
                changes.push(Change {
                    path: format!("{path}[{i}]"),
                    old: None,
                    new: Some(new_item.clone()),
                });
            }
        }
        (old_val, new_val) if old_val != new_val => changes.push(Change {
            path: path.to_string(),
            old: Some(old_val.clone()),
            new: Some(new_val.clone()),
        }),
        _ => {}
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equal_trees_yield_no_changes() {
        let val = json!({"oat": "38", "zones": {"zone": [{"id": "1", "rt": "71.5"}]}});
        assert!(diff_values(&val, &val).is_empty());
    }

    #[test]
    fn leaf_change_reports_dotted_path() {
        let old = json!({"zones": {"zone": {"rt": "71.5"}}});
        let new = json!({"zones": {"zone": {"rt": "72.0"}}});
        let changes = diff_values(&old, &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].path, "zones.zone.rt");
        assert_eq!(changes[0].old, Some(json!("71.5")));
        assert_eq!(changes[0].new, Some(json!("72.0")));
    }

    #[test]
    fn added_and_removed_keys_have_a_missing_side() {
        let old = json!({"oat": "38"});
        let new = json!({"rh": "42"});
        let mut changes = diff_values(&old, &new);
        changes.sort_by(|a, b| a.path.cmp(&b.path));
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].path, "oat");
        assert_eq!(changes[0].new, None);
        assert_eq!(changes[1].path, "rh");
        assert_eq!(changes[1].old, None);
    }

    #[test]
    fn reversed_diff_reports_same_paths_swapped() {
        let old = json!({"oat": "38", "idu": {"cfm": "825"}, "gone": "x"});
        let new = json!({"oat": "40", "idu": {"cfm": "900"}, "added": "y"});
        let mut forward = diff_values(&old, &new);
        let mut backward = diff_values(&new, &old);
        forward.sort_by(|a, b| a.path.cmp(&b.path));
        backward.sort_by(|a, b| a.path.cmp(&b.path));
        assert_eq!(forward.len(), backward.len());
        for (f, b) in forward.iter().zip(&backward) {
            assert_eq!(f.path, b.path);
            assert_eq!(f.old, b.new);
            assert_eq!(f.new, b.old);
        }
    }

    #[test]
    fn null_on_either_side_is_a_no_op() {
        let val = json!({"oat": "38"});
        assert!(diff_values(&Value::Null, &val).is_empty());
        assert!(diff_values(&val, &Value::Null).is_empty());
    }

    #[test]
    fn list_elements_are_compared_by_index() {
        let old = json!({"zone": [{"id": "1", "rt": "71.0"}, {"id": "2", "rt": "68.0"}]});
        let new = json!({"zone": [{"id": "1", "rt": "71.5"}, {"id": "2", "rt": "68.0"}, {"id": "3"}]});
        let changes = diff_values(&old, &new);
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].path, "zone[0].rt");
        assert_eq!(changes[1].path, "zone[2]");
        assert_eq!(changes[1].old, None);
    }

    #[test]
    fn shrinking_list_reports_missing_tail() {
        let old = json!(["a", "b", "c"]);
        let new = json!(["a", "b"]);
        let changes = diff_values(&old, &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].path, "[2]");
        assert_eq!(changes[0].new, None);
    }

    #[test]
    fn type_mismatch_is_a_plain_change() {
        let old = json!({"otmr": {}});
        let new = json!({"otmr": "14:30"});
        let changes = diff_values(&old, &new);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].path, "otmr");
        assert_eq!(changes[0].old, Some(json!({})));
        assert_eq!(changes[0].new, Some(json!("14:30")));
    }
}
