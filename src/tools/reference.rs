// Reference data for the generator (list_event_groups, list_known_classes, cluster_config_schema).

use serde_json::{json, Map as JsonMap, Value};

use crate::catalog::{EVENT_GROUPS, JAVA_BUILD_IN_CLASSES, JDBC_DIALECTS};
use crate::generator::variant_classes;
use crate::types::ClusterConfig;

pub fn list_event_groups_json() -> String {
    let groups: JsonMap<String, Value> = EVENT_GROUPS
        .iter()
        .map(|(group, members)| (group.to_string(), json!(members)))
        .collect();
    serde_json::to_string_pretty(&groups).unwrap_or_else(|_| "{}".to_string())
}

/// Short class names accepted in place of qualified ones, JDBC dialects and the
/// classes behind every polymorphic `kind`.
pub fn list_known_classes_json() -> String {
    let build_in: JsonMap<String, Value> = JAVA_BUILD_IN_CLASSES
        .iter()
        .map(|(short, full)| (short.to_string(), json!(full)))
        .collect();

    let dialects: JsonMap<String, Value> = JDBC_DIALECTS
        .iter()
        .map(|(short, dialect, data_source)| {
            (
                short.to_string(),
                json!({ "dialect": dialect, "dataSource": data_source }),
            )
        })
        .collect();

    let mut variants: JsonMap<String, Value> = JsonMap::new();
    for (slot, kind, class_name) in variant_classes() {
        if let Value::Object(kinds) = variants
            .entry(slot.to_string())
            .or_insert_with(|| Value::Object(JsonMap::new()))
        {
            kinds.insert(kind.to_string(), json!(class_name));
        }
    }

    let out = json!({
        "javaBuildInClasses": build_in,
        "jdbcDialects": dialects,
        "variants": variants,
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn cluster_config_schema_json() -> String {
    let schema = schemars::schema_for!(ClusterConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_event_groups_json() {
        let groups: Value = serde_json::from_str(&list_event_groups_json()).unwrap();
        assert_eq!(groups.as_object().unwrap().len(), EVENT_GROUPS.len());
        assert_eq!(groups["EVTS_CACHE_QUERY"][0], "EVT_CACHE_QUERY_EXECUTED");
    }

    #[test]
    fn test_list_known_classes_json() {
        let classes: Value = serde_json::from_str(&list_known_classes_json()).unwrap();
        assert_eq!(classes["javaBuildInClasses"]["String"], "java.lang.String");
        assert_eq!(classes["jdbcDialects"]["H2"]["dataSource"], "org.h2.jdbcx.JdbcDataSource");
        assert_eq!(
            classes["variants"]["evictionPolicy"]["LRU"],
            "org.apache.ignite.cache.eviction.lru.LruEvictionPolicy"
        );
        assert_eq!(classes["variants"]["discovery"].as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_cluster_config_schema_json() {
        let schema: Value = serde_json::from_str(&cluster_config_schema_json()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("discovery"));
        assert!(properties.contains_key("includeEventTypes"));
        assert!(properties.contains_key("caches"));
    }
}
