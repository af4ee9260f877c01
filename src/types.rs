// Cluster and cache descriptions as produced by the configuration editor.
// Field names follow the editor's camelCase documents; every scalar is optional
// and absent values are simply not rendered.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    pub name: Option<String>,
    pub discovery: Option<DiscoveryConfig>,
    pub atomic_configuration: Option<AtomicConfiguration>,

    pub network_timeout: Option<i64>,
    pub network_send_retry_delay: Option<i64>,
    pub network_send_retry_count: Option<i64>,
    pub segment_check_frequency: Option<i64>,
    pub wait_for_segment_on_start: Option<bool>,
    pub discovery_startup_delay: Option<i64>,

    pub deployment_mode: Option<String>,

    /// Event group names, e.g. `EVTS_CACHE`.
    #[serde(default)]
    pub include_event_types: Vec<String>,

    pub marshaller: Option<MarshallerConfig>,
    pub marshal_local_jobs: Option<bool>,
    pub marshaller_cache_keep_alive_time: Option<i64>,
    pub marshaller_cache_thread_pool_size: Option<i64>,

    pub metrics_expire_time: Option<i64>,
    pub metrics_history_size: Option<i64>,
    pub metrics_log_frequency: Option<i64>,
    pub metrics_update_frequency: Option<i64>,

    pub peer_class_loading_enabled: Option<bool>,
    #[serde(default)]
    pub peer_class_loading_local_class_path_exclude: Vec<String>,
    pub peer_class_loading_missed_resources_cache_size: Option<i64>,
    pub peer_class_loading_thread_pool_size: Option<i64>,

    pub swap_space_spi: Option<SwapSpaceSpiConfig>,

    pub clock_sync_samples: Option<i64>,
    pub clock_sync_frequency: Option<i64>,
    pub time_server_port_base: Option<i64>,
    pub time_server_port_range: Option<i64>,

    pub public_thread_pool_size: Option<i64>,
    pub system_thread_pool_size: Option<i64>,
    pub management_thread_pool_size: Option<i64>,
    pub igfs_thread_pool_size: Option<i64>,

    pub transaction_configuration: Option<TransactionConfiguration>,

    #[serde(default)]
    pub caches: Vec<CacheConfig>,
}

/// Discovery SPI settings. `kind` selects which of the payload sections is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DiscoveryConfig {
    #[serde(default)]
    pub kind: String,
    #[serde(rename = "Multicast")]
    pub multicast: Option<MulticastIpFinder>,
    #[serde(rename = "Vm")]
    pub vm: Option<VmIpFinder>,
    #[serde(rename = "S3")]
    pub s3: Option<S3IpFinder>,
    #[serde(rename = "Cloud")]
    pub cloud: Option<CloudIpFinder>,
    #[serde(rename = "GoogleStorage")]
    pub google_storage: Option<GoogleStorageIpFinder>,
    #[serde(rename = "Jdbc")]
    pub jdbc: Option<JdbcIpFinder>,
    #[serde(rename = "SharedFs")]
    pub shared_fs: Option<SharedFsIpFinder>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MulticastIpFinder {
    pub multicast_group: Option<String>,
    pub multicast_port: Option<i64>,
    pub response_wait_time: Option<i64>,
    pub address_request_attempts: Option<i64>,
    pub local_address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct VmIpFinder {
    #[serde(default)]
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct S3IpFinder {
    pub bucket_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CloudIpFinder {
    pub credential: Option<String>,
    pub credential_path: Option<String>,
    pub identity: Option<String>,
    pub provider: Option<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub zones: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoogleStorageIpFinder {
    pub project_name: Option<String>,
    pub bucket_name: Option<String>,
    pub service_account_p12_file_path: Option<String>,
    pub service_account_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JdbcIpFinder {
    pub init_schema: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SharedFsIpFinder {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtomicConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atomic_sequence_reserve_size: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tx_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_isolation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tx_timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pessimistic_tx_log_linger: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pessimistic_tx_log_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_serializable_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MarshallerConfig {
    pub kind: Option<String>,
    #[serde(rename = "OptimizedMarshaller")]
    pub optimized: Option<OptimizedMarshaller>,
    #[serde(rename = "JdkMarshaller")]
    pub jdk: Option<JdkMarshaller>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedMarshaller {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_serializable: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct JdkMarshaller {}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SwapSpaceSpiConfig {
    pub kind: Option<String>,
    #[serde(rename = "FileSwapSpaceSpi")]
    pub file: Option<FileSwapSpaceSpi>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileSwapSpaceSpi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_stripes_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_sparsity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_write_queue_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_buffer_size: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum CacheMode {
    Partitioned,
    Replicated,
    Local,
}

impl CacheMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheMode::Partitioned => "PARTITIONED",
            CacheMode::Replicated => "REPLICATED",
            CacheMode::Local => "LOCAL",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    pub name: Option<String>,
    pub mode: Option<CacheMode>,
    pub atomicity_mode: Option<String>,
    pub backups: Option<i64>,
    pub read_from_backup: Option<bool>,
    pub start_size: Option<i64>,

    pub memory_mode: Option<String>,
    pub off_heap_max_memory: Option<i64>,
    pub swap_enabled: Option<bool>,
    pub copy_on_read: Option<bool>,

    pub eviction_policy: Option<EvictionPolicyConfig>,

    pub near_cache_enabled: Option<bool>,
    pub near_configuration: Option<NearCacheConfig>,

    pub sql_escape_all: Option<bool>,
    pub sql_onheap_row_cache_size: Option<i64>,
    pub long_query_warning_timeout: Option<i64>,
    #[serde(default)]
    pub indexed_types: Vec<IndexedType>,
    #[serde(default)]
    pub sql_function_classes: Vec<String>,

    pub rebalance_mode: Option<String>,
    pub rebalance_thread_pool_size: Option<i64>,
    pub rebalance_batch_size: Option<i64>,
    pub rebalance_order: Option<i64>,
    pub rebalance_delay: Option<i64>,
    pub rebalance_timeout: Option<i64>,
    pub rebalance_throttle: Option<i64>,

    pub cache_store_factory: Option<StoreFactoryConfig>,

    pub load_previous_value: Option<bool>,
    pub read_through: Option<bool>,
    pub write_through: Option<bool>,

    pub invalidate: Option<bool>,
    pub default_lock_timeout: Option<i64>,
    pub transaction_manager_lookup_class_name: Option<String>,

    pub write_behind_enabled: Option<bool>,
    pub write_behind_batch_size: Option<i64>,
    pub write_behind_flush_size: Option<i64>,
    pub write_behind_flush_frequency: Option<i64>,
    pub write_behind_flush_thread_count: Option<i64>,

    pub statistics_enabled: Option<bool>,
    pub management_enabled: Option<bool>,

    pub max_concurrent_async_operations: Option<i64>,

    #[serde(default)]
    pub query_metadata: Vec<TypeMetadata>,
    #[serde(default)]
    pub store_metadata: Vec<TypeMetadata>,
}

/// Key/value class pair registered for SQL indexing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndexedType {
    pub key_class: String,
    pub value_class: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NearCacheConfig {
    pub near_start_size: Option<i64>,
    pub near_eviction_policy: Option<EvictionPolicyConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct EvictionPolicyConfig {
    pub kind: Option<String>,
    #[serde(rename = "LRU")]
    pub lru: Option<EvictionPolicyFields>,
    #[serde(rename = "RND")]
    pub rnd: Option<EvictionPolicyFields>,
    #[serde(rename = "FIFO")]
    pub fifo: Option<EvictionPolicyFields>,
    #[serde(rename = "SORTED")]
    pub sorted: Option<EvictionPolicyFields>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvictionPolicyFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_memory_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct StoreFactoryConfig {
    pub kind: Option<String>,
    #[serde(rename = "CacheJdbcPojoStoreFactory")]
    pub jdbc_pojo: Option<JdbcPojoStoreFactory>,
    #[serde(rename = "CacheJdbcBlobStoreFactory")]
    pub jdbc_blob: Option<JdbcBlobStoreFactory>,
    #[serde(rename = "CacheHibernateBlobStoreFactory")]
    pub hibernate_blob: Option<HibernateBlobStoreFactory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JdbcPojoStoreFactory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_bean: Option<String>,
    /// Short dialect name, e.g. `Oracle` or `MySQL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JdbcBlobStoreFactory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_bean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_schema: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_table_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_query: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HibernateBlobStoreFactory {
    /// `key=value` strings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hibernate_properties: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MetadataKind {
    Query,
    Store,
    Both,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeMetadata {
    pub name: String,
    pub kind: Option<MetadataKind>,
    pub key_type: Option<String>,
    pub value_type: Option<String>,
    pub database_schema: Option<String>,
    pub database_table: Option<String>,
    #[serde(default)]
    pub key_fields: Vec<DatabaseField>,
    #[serde(default)]
    pub value_fields: Vec<DatabaseField>,
    #[serde(default)]
    pub query_fields: Vec<QueryField>,
    #[serde(default)]
    pub ascending_fields: Vec<QueryField>,
    #[serde(default)]
    pub descending_fields: Vec<QueryField>,
    #[serde(default)]
    pub text_fields: Vec<String>,
    #[serde(default)]
    pub groups: Vec<FieldGroup>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseField {
    pub database_name: Option<String>,
    /// `java.sql.Types` constant name, e.g. `VARCHAR`.
    pub database_type: String,
    pub java_name: Option<String>,
    pub java_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryField {
    pub name: String,
    pub class_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FieldGroup {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<GroupField>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupField {
    pub name: String,
    pub class_name: String,
    /// `true` for descending order.
    #[serde(default)]
    pub direction: bool,
}

pub const SPRING_BEANS_NS: &str = "http://www.springframework.org/schema/beans";
pub const SPRING_UTIL_NS: &str = "http://www.springframework.org/schema/util";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const DEFAULT_PROPERTIES_LOCATION: &str = "classpath:secret.properties";
pub const DEFAULT_HEADER_COMMENT: &str = "This configuration was generated by gridgen-mcp";
