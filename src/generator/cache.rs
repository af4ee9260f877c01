// One `CacheConfiguration` bean.

use super::beans;
use super::builder::MarkupBuilder;
use super::datasource::DataSourceRegistry;
use super::error::GeneratorError;
use super::fields::{emit_list, emit_list_with, emit_scalar, escape_text};
use super::metadata::emit_type_metadata_list;
use super::variants::{emit_eviction_policy, emit_store_factory};
use crate::catalog;
use crate::types::{CacheConfig, CacheMode, NearCacheConfig};

/// Writes `<bean class="...CacheConfiguration">` for `cache`.
/// Data sources needed by the cache store are added to `data_sources`.
pub fn emit_cache_configuration(
    b: &mut MarkupBuilder,
    cache: &CacheConfig,
    data_sources: &mut DataSourceRegistry,
) -> Result<(), GeneratorError> {
    tracing::debug!(cache = cache.name.as_deref().unwrap_or(""), "rendering cache");

    b.start_block(&format!("<bean class=\"{}\">", beans::CACHE_CONFIGURATION));

    emit_scalar(b, "name", cache.name.as_ref());
    b.request_empty_line();

    let mode = emit_scalar(b, "cacheMode", cache.mode.as_ref()).copied();
    emit_scalar(b, "atomicityMode", cache.atomicity_mode.as_ref());
    if mode == Some(CacheMode::Partitioned) {
        emit_scalar(b, "backups", cache.backups.as_ref());
    }
    emit_scalar(b, "readFromBackup", cache.read_from_backup.as_ref());
    emit_scalar(b, "startSize", cache.start_size.as_ref());
    b.request_empty_line();

    emit_scalar(b, "memoryMode", cache.memory_mode.as_ref());
    emit_scalar(b, "offHeapMaxMemory", cache.off_heap_max_memory.as_ref());
    emit_scalar(b, "swapEnabled", cache.swap_enabled.as_ref());
    emit_scalar(b, "copyOnRead", cache.copy_on_read.as_ref());
    b.request_empty_line();

    emit_eviction_policy(b, cache.eviction_policy.as_ref(), "evictionPolicy")?;
    b.request_empty_line();

    if cache.near_cache_enabled == Some(true) {
        b.empty_line_if_needed();
        b.start_block("<property name=\"nearConfiguration\">");
        emit_near_cache_bean(b, None, cache.near_configuration.as_ref())?;
        b.end_block("</property>");
    }
    b.request_empty_line();

    emit_scalar(b, "sqlEscapeAll", cache.sql_escape_all.as_ref());
    emit_scalar(b, "sqlOnheapRowCacheSize", cache.sql_onheap_row_cache_size.as_ref());
    emit_scalar(b, "longQueryWarningTimeout", cache.long_query_warning_timeout.as_ref());
    // Key and value classes alternate in a flat list.
    let indexed: Vec<&str> = cache
        .indexed_types
        .iter()
        .flat_map(|pair| [pair.key_class.as_str(), pair.value_class.as_str()])
        .collect();
    emit_list_with(b, "indexedTypes", &indexed, "list", |class_name| {
        format!("<value>{}</value>", escape_text(catalog::resolve_class_name(class_name)))
    });
    emit_list(b, "sqlFunctionClasses", &cache.sql_function_classes, "array");
    b.request_empty_line();

    if mode != Some(CacheMode::Local) {
        emit_scalar(b, "rebalanceMode", cache.rebalance_mode.as_ref());
        emit_scalar(b, "rebalanceThreadPoolSize", cache.rebalance_thread_pool_size.as_ref());
        emit_scalar(b, "rebalanceBatchSize", cache.rebalance_batch_size.as_ref());
        emit_scalar(b, "rebalanceOrder", cache.rebalance_order.as_ref());
        emit_scalar(b, "rebalanceDelay", cache.rebalance_delay.as_ref());
        emit_scalar(b, "rebalanceTimeout", cache.rebalance_timeout.as_ref());
        emit_scalar(b, "rebalanceThrottle", cache.rebalance_throttle.as_ref());
        b.request_empty_line();
    }

    emit_store_factory(b, cache.cache_store_factory.as_ref(), data_sources)?;
    b.request_empty_line();

    emit_scalar(b, "loadPreviousValue", cache.load_previous_value.as_ref());
    emit_scalar(b, "readThrough", cache.read_through.as_ref());
    emit_scalar(b, "writeThrough", cache.write_through.as_ref());
    b.request_empty_line();

    emit_scalar(b, "invalidate", cache.invalidate.as_ref());
    emit_scalar(b, "defaultLockTimeout", cache.default_lock_timeout.as_ref());
    emit_scalar(
        b,
        "transactionManagerLookupClassName",
        cache.transaction_manager_lookup_class_name.as_ref(),
    );
    b.request_empty_line();

    emit_scalar(b, "writeBehindEnabled", cache.write_behind_enabled.as_ref());
    emit_scalar(b, "writeBehindBatchSize", cache.write_behind_batch_size.as_ref());
    emit_scalar(b, "writeBehindFlushSize", cache.write_behind_flush_size.as_ref());
    emit_scalar(b, "writeBehindFlushFrequency", cache.write_behind_flush_frequency.as_ref());
    emit_scalar(b, "writeBehindFlushThreadCount", cache.write_behind_flush_thread_count.as_ref());
    b.request_empty_line();

    emit_scalar(b, "statisticsEnabled", cache.statistics_enabled.as_ref());
    emit_scalar(b, "managementEnabled", cache.management_enabled.as_ref());
    b.request_empty_line();

    emit_scalar(b, "maxConcurrentAsyncOperations", cache.max_concurrent_async_operations.as_ref());

    emit_type_metadata_list(b, &cache.query_metadata, &cache.store_metadata);

    b.end_block("</bean>");
    Ok(())
}

/// Writes a `NearCacheConfiguration` bean, optionally with a bean id.
pub(crate) fn emit_near_cache_bean(
    b: &mut MarkupBuilder,
    id: Option<&str>,
    near: Option<&NearCacheConfig>,
) -> Result<(), GeneratorError> {
    match id {
        Some(id) => b.start_block(&format!(
            "<bean id=\"{}\" class=\"{}\">",
            id,
            beans::NEAR_CACHE_CONFIGURATION
        )),
        None => b.start_block(&format!("<bean class=\"{}\">", beans::NEAR_CACHE_CONFIGURATION)),
    }
    if let Some(near) = near {
        // Gated on presence like every scalar, so an explicit 0 is written.
        emit_scalar(b, "nearStartSize", near.near_start_size.as_ref());
        emit_eviction_policy(b, near.near_eviction_policy.as_ref(), "nearEvictionPolicy")?;
    }
    b.end_block("</bean>");
    Ok(())
}
