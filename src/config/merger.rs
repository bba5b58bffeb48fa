//! Deep merge of settings layers.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely (not merged)
//! - Null values in overlay delete the corresponding key from base
//! - Scalars in overlay replace scalars in base

use serde_yaml::Value;

/// Deep merge two YAML values. `overlay` wins at the point of conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge layers in order (later overrides earlier).
///
/// Empty documents (a file with no keys parses as null) are skipped.
pub fn merge_layers(layers: &[Value]) -> Value {
    layers
        .iter()
        .filter(|layer| !layer.is_null())
        .fold(Value::Mapping(Default::default()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn later_layer_wins_for_scalars() {
        let result = deep_merge(
            &yaml("probe_timeout_secs: 3\nlocate_timeout_secs: 15"),
            &yaml("probe_timeout_secs: 8"),
        );

        assert_eq!(result["probe_timeout_secs"], 8);
        assert_eq!(result["locate_timeout_secs"], 15);
    }

    #[test]
    fn sequences_are_replaced_not_merged() {
        let result = deep_merge(
            &yaml("extra_candidates: [a, b]"),
            &yaml("extra_candidates: [c]"),
        );

        let candidates = result["extra_candidates"].as_sequence().unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0], "c");
    }

    #[test]
    fn null_removes_key() {
        let result = deep_merge(
            &yaml("claude_config_path: /tmp/a.json\nprobe_timeout_secs: 3"),
            &yaml("claude_config_path: ~"),
        );

        assert!(result.get("claude_config_path").is_none());
        assert_eq!(result["probe_timeout_secs"], 3);
    }

    #[test]
    fn empty_layers_are_skipped() {
        let result = merge_layers(&[yaml("probe_timeout_secs: 4"), Value::Null]);
        assert_eq!(result["probe_timeout_secs"], 4);
    }
}
