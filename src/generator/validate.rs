// Consistency checks over a cluster description, run before generation by the validate tool.

use super::variants::DiscoveryKind;
use crate::catalog;
use crate::types::{CacheConfig, ClusterConfig, DiscoveryConfig};

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Checks `cluster` and returns every violation found.
pub fn validate_cluster(cluster: &ClusterConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if is_blank(&cluster.name) {
        errors.push("name is required".to_string());
    }

    if let Some(discovery) = &cluster.discovery {
        validate_discovery(discovery, &mut errors);
    }

    for group in &cluster.include_event_types {
        if catalog::event_group(group).is_none() {
            errors.push(format!("includeEventTypes: unknown event group {}", group));
        }
    }

    let swap_configured = cluster
        .swap_space_spi
        .as_ref()
        .is_some_and(|swap| !is_blank(&swap.kind));

    for (i, cache) in cluster.caches.iter().enumerate() {
        let label = match cache.name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => format!("caches[{}] ({})", i, name),
            None => format!("caches[{}]", i),
        };
        if cache.swap_enabled == Some(true) && !swap_configured {
            errors.push(format!("{}: swapEnabled requires swapSpaceSpi on the cluster", label));
        }
        validate_cache_store(cache, &label, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_discovery(discovery: &DiscoveryConfig, errors: &mut Vec<String>) {
    let kind = match DiscoveryKind::parse(&discovery.kind) {
        Ok(kind) => kind,
        Err(e) => {
            errors.push(format!("discovery: {}", e));
            return;
        }
    };

    match kind {
        DiscoveryKind::Vm => {
            if discovery.vm.as_ref().map_or(true, |vm| vm.addresses.is_empty()) {
                errors.push("discovery.Vm.addresses must contain at least one address".to_string());
            }
        }
        DiscoveryKind::S3 => {
            if discovery.s3.as_ref().map_or(true, |s3| is_blank(&s3.bucket_name)) {
                errors.push("discovery.S3.bucketName is required".to_string());
            }
        }
        DiscoveryKind::Cloud => {
            let cloud = discovery.cloud.clone().unwrap_or_default();
            if is_blank(&cloud.identity) {
                errors.push("discovery.Cloud.identity is required".to_string());
            }
            if is_blank(&cloud.provider) {
                errors.push("discovery.Cloud.provider is required".to_string());
            }
        }
        DiscoveryKind::GoogleStorage => {
            let gs = discovery.google_storage.clone().unwrap_or_default();
            let required = [
                ("projectName", &gs.project_name),
                ("bucketName", &gs.bucket_name),
                ("serviceAccountP12FilePath", &gs.service_account_p12_file_path),
                ("serviceAccountId", &gs.service_account_id),
            ];
            for (field, value) in required {
                if is_blank(value) {
                    errors.push(format!("discovery.GoogleStorage.{} is required", field));
                }
            }
        }
        DiscoveryKind::Multicast | DiscoveryKind::Jdbc | DiscoveryKind::SharedFs => {}
    }
}

fn validate_cache_store(cache: &CacheConfig, label: &str, errors: &mut Vec<String>) {
    let store_configured = cache
        .cache_store_factory
        .as_ref()
        .is_some_and(|factory| !is_blank(&factory.kind));
    let through = cache.read_through == Some(true) || cache.write_through == Some(true);

    if store_configured && !through {
        errors.push(format!(
            "{}: cacheStoreFactory requires readThrough or writeThrough",
            label
        ));
    }
    if through && !store_configured {
        errors.push(format!(
            "{}: readThrough and writeThrough require cacheStoreFactory",
            label
        ));
    }
    if cache.write_behind_enabled == Some(true) && !store_configured {
        errors.push(format!("{}: writeBehindEnabled requires cacheStoreFactory", label));
    }
}
