// Generate and validate cluster XML (generate_cluster_xml, generate_cache_xml,
// generate_secret_properties, validate_cluster_config).

use serde::de::DeserializeOwned;

use crate::generator::{self, GeneratorOptions};
use crate::types::{CacheConfig, ClusterConfig, NearCacheConfig};

/// Parses a JSON document (leading `{`) or a YAML one.
fn parse_document<T: DeserializeOwned>(param: &str, text: &str) -> Result<T, String> {
    if text.trim_start().starts_with('{') {
        serde_json::from_str(text).map_err(|e| format!("{} invalid JSON: {}", param, e))
    } else {
        serde_yaml::from_str(text).map_err(|e| format!("{} invalid YAML: {}", param, e))
    }
}

/// Generates the Spring XML document for a cluster description.
/// client_near_config, when given, makes the document a client node configuration with a near cache.
pub fn generate_cluster_xml(
    cluster_config: &str,
    client_near_config: Option<&str>,
    options: &GeneratorOptions,
) -> Result<String, String> {
    let cluster: ClusterConfig = parse_document("cluster_config", cluster_config)?;
    let near: Option<NearCacheConfig> = client_near_config
        .filter(|text| !text.trim().is_empty())
        .map(|text| parse_document("client_near_config", text))
        .transpose()?;

    let xml = generator::generate_cluster_configuration(&cluster, near.as_ref(), options)
        .map_err(|e| e.to_string())?;
    tracing::info!(
        cluster = cluster.name.as_deref().unwrap_or(""),
        caches = cluster.caches.len(),
        client = near.is_some(),
        "generated cluster configuration"
    );
    Ok(xml)
}

pub fn generate_cache_xml(cache_config: &str) -> Result<String, String> {
    let cache: CacheConfig = parse_document("cache_config", cache_config)?;
    let xml = generator::generate_cache_configuration(&cache).map_err(|e| e.to_string())?;
    tracing::info!(cache = cache.name.as_deref().unwrap_or(""), "generated cache configuration");
    Ok(xml)
}

pub fn generate_secret_properties(cluster_config: &str) -> Result<String, String> {
    let cluster: ClusterConfig = parse_document("cluster_config", cluster_config)?;
    generator::generate_secret_properties(&cluster).map_err(|e| e.to_string())
}

/// Validates a cluster description: parsing, then the consistency rules of the generator.
pub fn validate_cluster_config(cluster_config: &str) -> Result<(), Vec<String>> {
    let cluster: ClusterConfig =
        parse_document("cluster_config", cluster_config).map_err(|e| vec![e])?;
    generator::validate_cluster(&cluster)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLUSTER_YAML: &str = r#"
name: grid
discovery:
  kind: Vm
  Vm:
    addresses:
      - 127.0.0.1:47500..47509
caches:
  - name: people
    mode: PARTITIONED
    backups: 1
    cacheStoreFactory:
      kind: CacheJdbcPojoStoreFactory
      CacheJdbcPojoStoreFactory:
        dataSourceBean: dsH2
        dialect: H2
    readThrough: true
"#;

    #[test]
    fn test_generate_cluster_xml_from_yaml() {
        let xml = generate_cluster_xml(CLUSTER_YAML, None, &GeneratorOptions::default()).unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("org.apache.ignite.spi.discovery.tcp.ipfinder.vm.TcpDiscoveryVmIpFinder"));
        assert!(xml.contains("<value>127.0.0.1:47500..47509</value>"));
        assert!(xml.contains("<bean id=\"dsH2\" class=\"org.h2.jdbcx.JdbcDataSource\">"));
        assert!(xml.contains("<property name=\"backups\" value=\"1\"/>"));
    }

    #[test]
    fn test_generate_cluster_xml_from_json_with_client_near() {
        let xml = generate_cluster_xml(
            r#"{"name": "grid"}"#,
            Some(r#"{"nearStartSize": 10}"#),
            &GeneratorOptions::default(),
        )
        .unwrap();
        assert!(xml.contains("<bean id=\"nearCacheBean\""));
        assert!(xml.contains("<property name=\"clientMode\" value=\"true\"/>"));
    }

    #[test]
    fn test_blank_client_near_is_ignored() {
        let xml = generate_cluster_xml(r#"{"name": "grid"}"#, Some("  "), &GeneratorOptions::default()).unwrap();
        assert!(!xml.contains("clientMode"));
    }

    #[test]
    fn test_generate_cluster_xml_errors() {
        let err = generate_cluster_xml("{not json", None, &GeneratorOptions::default()).unwrap_err();
        assert!(err.starts_with("cluster_config invalid JSON"));

        let err = generate_cluster_xml(r#"{"discovery": {"kind": "Bogus"}}"#, None, &GeneratorOptions::default())
            .unwrap_err();
        assert_eq!(err, "unknown discovery kind: Bogus");

        let err = generate_cluster_xml(r#"{"name": "g"}"#, Some("nearStartSize: [1"), &GeneratorOptions::default())
            .unwrap_err();
        assert!(err.starts_with("client_near_config invalid YAML"));
    }

    #[test]
    fn test_generate_cache_xml() {
        let xml = generate_cache_xml("name: people\nmode: REPLICATED\n").unwrap();
        assert!(xml.starts_with("<bean class=\"org.apache.ignite.configuration.CacheConfiguration\">"));
        assert!(xml.contains("<property name=\"cacheMode\" value=\"REPLICATED\"/>"));
    }

    #[test]
    fn test_generate_secret_properties() {
        let out = generate_secret_properties(CLUSTER_YAML).unwrap();
        assert!(out.contains("dsH2.jdbc.url=\n"));
        assert!(out.contains("dsH2.jdbc.username=\n"));
        assert!(out.contains("dsH2.jdbc.password=\n"));
    }

    #[test]
    fn test_validate_cluster_config() {
        assert!(validate_cluster_config(CLUSTER_YAML).is_ok());

        let errors = validate_cluster_config(r#"{"caches": [{"name": "c", "writeThrough": true}]}"#).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("name is required"));
        assert!(errors[1].contains("require cacheStoreFactory"));

        let errors = validate_cluster_config("name: [").unwrap_err();
        assert!(errors[0].starts_with("cluster_config invalid YAML"));
    }
}
