// Dispatch of the polymorphic configuration slots: discovery, eviction policy,
// store factory, marshaller and swap space.

use super::beans::{self, BeanDescriptor};
use super::builder::MarkupBuilder;
use super::datasource::DataSourceRegistry;
use super::error::GeneratorError;
use super::fields::{emit_bean_with_fields, emit_list, emit_scalar, escape_attr};
use crate::catalog;
use crate::types::{
    CloudIpFinder, DiscoveryConfig, EvictionPolicyConfig, EvictionPolicyFields,
    GoogleStorageIpFinder, JdbcIpFinder, MarshallerConfig, MulticastIpFinder, S3IpFinder,
    SharedFsIpFinder, StoreFactoryConfig, SwapSpaceSpiConfig, VmIpFinder,
};

/// An editor discriminant; empty strings mean "not set".
fn selected(kind: &Option<String>) -> Option<&str> {
    kind.as_deref().filter(|k| !k.is_empty())
}

fn required<'a, T>(
    payload: &'a Option<T>,
    slot: &'static str,
    kind: &str,
) -> Result<&'a T, GeneratorError> {
    payload
        .as_ref()
        .ok_or_else(|| GeneratorError::missing_payload(slot, kind))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryKind {
    Multicast,
    Vm,
    S3,
    Cloud,
    GoogleStorage,
    Jdbc,
    SharedFs,
}

impl DiscoveryKind {
    pub const ALL: [DiscoveryKind; 7] = [
        DiscoveryKind::Multicast,
        DiscoveryKind::Vm,
        DiscoveryKind::S3,
        DiscoveryKind::Cloud,
        DiscoveryKind::GoogleStorage,
        DiscoveryKind::Jdbc,
        DiscoveryKind::SharedFs,
    ];

    pub fn parse(kind: &str) -> Result<Self, GeneratorError> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == kind)
            .ok_or_else(|| GeneratorError::unrecognized("discovery", kind))
    }

    pub fn name(&self) -> &'static str {
        match self {
            DiscoveryKind::Multicast => "Multicast",
            DiscoveryKind::Vm => "Vm",
            DiscoveryKind::S3 => "S3",
            DiscoveryKind::Cloud => "Cloud",
            DiscoveryKind::GoogleStorage => "GoogleStorage",
            DiscoveryKind::Jdbc => "Jdbc",
            DiscoveryKind::SharedFs => "SharedFs",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            DiscoveryKind::Multicast => {
                "org.apache.ignite.spi.discovery.tcp.ipfinder.multicast.TcpDiscoveryMulticastIpFinder"
            }
            DiscoveryKind::Vm => "org.apache.ignite.spi.discovery.tcp.ipfinder.vm.TcpDiscoveryVmIpFinder",
            DiscoveryKind::S3 => "org.apache.ignite.spi.discovery.tcp.ipfinder.s3.TcpDiscoveryS3IpFinder",
            DiscoveryKind::Cloud => {
                "org.apache.ignite.spi.discovery.tcp.ipfinder.cloud.TcpDiscoveryCloudIpFinder"
            }
            DiscoveryKind::GoogleStorage => {
                "org.apache.ignite.spi.discovery.tcp.ipfinder.gce.TcpDiscoveryGoogleStorageIpFinder"
            }
            DiscoveryKind::Jdbc => {
                "org.apache.ignite.spi.discovery.tcp.ipfinder.jdbc.TcpDiscoveryJdbcIpFinder"
            }
            DiscoveryKind::SharedFs => {
                "org.apache.ignite.spi.discovery.tcp.ipfinder.sharedfs.TcpDiscoverySharedFsIpFinder"
            }
        }
    }
}

/// The IP finder selected by a discovery section, with its payload.
#[derive(Debug)]
pub enum IpFinder<'a> {
    Multicast(&'a MulticastIpFinder),
    Vm(&'a VmIpFinder),
    S3(Option<&'a S3IpFinder>),
    Cloud(&'a CloudIpFinder),
    GoogleStorage(&'a GoogleStorageIpFinder),
    Jdbc(&'a JdbcIpFinder),
    SharedFs(&'a SharedFsIpFinder),
}

impl<'a> IpFinder<'a> {
    pub fn select(discovery: &'a DiscoveryConfig) -> Result<Self, GeneratorError> {
        let kind = DiscoveryKind::parse(&discovery.kind)?;
        let name = kind.name();
        Ok(match kind {
            DiscoveryKind::Multicast => {
                IpFinder::Multicast(required(&discovery.multicast, "discovery", name)?)
            }
            DiscoveryKind::Vm => IpFinder::Vm(required(&discovery.vm, "discovery", name)?),
            DiscoveryKind::S3 => IpFinder::S3(discovery.s3.as_ref()),
            DiscoveryKind::Cloud => IpFinder::Cloud(required(&discovery.cloud, "discovery", name)?),
            DiscoveryKind::GoogleStorage => {
                IpFinder::GoogleStorage(required(&discovery.google_storage, "discovery", name)?)
            }
            DiscoveryKind::Jdbc => IpFinder::Jdbc(required(&discovery.jdbc, "discovery", name)?),
            DiscoveryKind::SharedFs => {
                IpFinder::SharedFs(required(&discovery.shared_fs, "discovery", name)?)
            }
        })
    }

    pub fn kind(&self) -> DiscoveryKind {
        match self {
            IpFinder::Multicast(_) => DiscoveryKind::Multicast,
            IpFinder::Vm(_) => DiscoveryKind::Vm,
            IpFinder::S3(_) => DiscoveryKind::S3,
            IpFinder::Cloud(_) => DiscoveryKind::Cloud,
            IpFinder::GoogleStorage(_) => DiscoveryKind::GoogleStorage,
            IpFinder::Jdbc(_) => DiscoveryKind::Jdbc,
            IpFinder::SharedFs(_) => DiscoveryKind::SharedFs,
        }
    }
}

/// Writes the `discoverySpi` property: a TCP discovery SPI wrapping the selected IP finder.
pub fn emit_discovery(b: &mut MarkupBuilder, discovery: &DiscoveryConfig) -> Result<(), GeneratorError> {
    let finder = IpFinder::select(discovery)?;
    let class_name = finder.kind().class_name();

    b.empty_line_if_needed();
    b.start_block("<property name=\"discoverySpi\">");
    b.start_block(&format!("<bean class=\"{}\">", beans::TCP_DISCOVERY_SPI));
    b.start_block("<property name=\"ipFinder\">");

    let open = format!("<bean class=\"{}\">", class_name);
    let empty = format!("<bean class=\"{}\"/>", class_name);

    match finder {
        IpFinder::Multicast(m) => {
            b.start_block(&open);
            emit_scalar(b, "multicastGroup", m.multicast_group.as_ref());
            emit_scalar(b, "multicastPort", m.multicast_port.as_ref());
            emit_scalar(b, "responseWaitTime", m.response_wait_time.as_ref());
            emit_scalar(b, "addressRequestAttempts", m.address_request_attempts.as_ref());
            emit_scalar(b, "localAddress", m.local_address.as_ref());
            b.end_block("</bean>");
        }
        IpFinder::Vm(vm) if vm.addresses.is_empty() => b.line(&empty),
        IpFinder::Vm(vm) => {
            b.start_block(&open);
            emit_list(b, "addresses", &vm.addresses, "list");
            b.end_block("</bean>");
        }
        IpFinder::S3(s3) => {
            b.start_block(&open);
            if let Some(bucket) = s3.and_then(|s3| s3.bucket_name.as_deref()).filter(|s| !s.is_empty()) {
                b.line(&format!(
                    "<property name=\"bucketName\" value=\"{}\"/>",
                    escape_attr(bucket)
                ));
            }
            b.end_block("</bean>");
        }
        IpFinder::Cloud(cloud) => {
            b.start_block(&open);
            emit_scalar(b, "credential", cloud.credential.as_ref());
            emit_scalar(b, "credentialPath", cloud.credential_path.as_ref());
            emit_scalar(b, "identity", cloud.identity.as_ref());
            emit_scalar(b, "provider", cloud.provider.as_ref());
            emit_list(b, "regions", &cloud.regions, "list");
            emit_list(b, "zones", &cloud.zones, "list");
            b.end_block("</bean>");
        }
        IpFinder::GoogleStorage(gs) => {
            b.start_block(&open);
            emit_scalar(b, "projectName", gs.project_name.as_ref());
            emit_scalar(b, "bucketName", gs.bucket_name.as_ref());
            emit_scalar(b, "serviceAccountP12FilePath", gs.service_account_p12_file_path.as_ref());
            emit_scalar(b, "serviceAccountId", gs.service_account_id.as_ref());
            b.end_block("</bean>");
        }
        IpFinder::Jdbc(jdbc) => {
            b.start_block(&open);
            let init_schema = jdbc.init_schema.unwrap_or(false);
            emit_scalar(b, "initSchema", Some(&init_schema));
            b.end_block("</bean>");
        }
        IpFinder::SharedFs(fs) => match fs.path.as_ref().filter(|p| !p.is_empty()) {
            Some(path) => {
                b.start_block(&open);
                emit_scalar(b, "path", Some(path));
                b.end_block("</bean>");
            }
            None => b.line(&empty),
        },
    }

    b.end_block("</property>");
    b.end_block("</bean>");
    b.end_block("</property>");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionPolicyKind {
    Lru,
    Random,
    Fifo,
    Sorted,
}

impl EvictionPolicyKind {
    pub const ALL: [EvictionPolicyKind; 4] = [
        EvictionPolicyKind::Lru,
        EvictionPolicyKind::Random,
        EvictionPolicyKind::Fifo,
        EvictionPolicyKind::Sorted,
    ];

    pub fn parse(kind: &str) -> Result<Self, GeneratorError> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == kind)
            .ok_or_else(|| GeneratorError::unrecognized("eviction policy", kind))
    }

    pub fn name(&self) -> &'static str {
        match self {
            EvictionPolicyKind::Lru => "LRU",
            EvictionPolicyKind::Random => "RND",
            EvictionPolicyKind::Fifo => "FIFO",
            EvictionPolicyKind::Sorted => "SORTED",
        }
    }

    pub fn descriptor(&self) -> &'static BeanDescriptor {
        match self {
            EvictionPolicyKind::Lru => &beans::LRU_EVICTION_POLICY,
            EvictionPolicyKind::Random => &beans::RANDOM_EVICTION_POLICY,
            EvictionPolicyKind::Fifo => &beans::FIFO_EVICTION_POLICY,
            EvictionPolicyKind::Sorted => &beans::SORTED_EVICTION_POLICY,
        }
    }

    fn payload<'a>(&self, policy: &'a EvictionPolicyConfig) -> Option<&'a EvictionPolicyFields> {
        match self {
            EvictionPolicyKind::Lru => policy.lru.as_ref(),
            EvictionPolicyKind::Random => policy.rnd.as_ref(),
            EvictionPolicyKind::Fifo => policy.fifo.as_ref(),
            EvictionPolicyKind::Sorted => policy.sorted.as_ref(),
        }
    }
}

/// Writes an eviction policy bean under `property_name`. Returns false when no kind is set.
pub fn emit_eviction_policy(
    b: &mut MarkupBuilder,
    policy: Option<&EvictionPolicyConfig>,
    property_name: &str,
) -> Result<bool, GeneratorError> {
    let Some(policy) = policy else {
        return Ok(false);
    };
    let Some(kind) = selected(&policy.kind) else {
        return Ok(false);
    };
    let kind = EvictionPolicyKind::parse(kind)?;
    emit_bean_with_fields(b, kind.payload(policy), property_name, kind.descriptor(), true)?;
    Ok(true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFactoryKind {
    JdbcPojo,
    JdbcBlob,
    HibernateBlob,
}

impl StoreFactoryKind {
    pub const ALL: [StoreFactoryKind; 3] = [
        StoreFactoryKind::JdbcPojo,
        StoreFactoryKind::JdbcBlob,
        StoreFactoryKind::HibernateBlob,
    ];

    pub fn parse(kind: &str) -> Result<Self, GeneratorError> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == kind)
            .ok_or_else(|| GeneratorError::unrecognized("store factory", kind))
    }

    pub fn name(&self) -> &'static str {
        match self {
            StoreFactoryKind::JdbcPojo => "CacheJdbcPojoStoreFactory",
            StoreFactoryKind::JdbcBlob => "CacheJdbcBlobStoreFactory",
            StoreFactoryKind::HibernateBlob => "CacheHibernateBlobStoreFactory",
        }
    }

    pub fn descriptor(&self) -> &'static BeanDescriptor {
        match self {
            StoreFactoryKind::JdbcPojo => &beans::JDBC_POJO_STORE_FACTORY,
            StoreFactoryKind::JdbcBlob => &beans::JDBC_BLOB_STORE_FACTORY,
            StoreFactoryKind::HibernateBlob => &beans::HIBERNATE_BLOB_STORE_FACTORY,
        }
    }
}

/// Writes the `cacheStoreFactory` property. A JDBC POJO factory that declares a
/// dialect also registers its data source bean.
pub fn emit_store_factory(
    b: &mut MarkupBuilder,
    factory: Option<&StoreFactoryConfig>,
    data_sources: &mut DataSourceRegistry,
) -> Result<bool, GeneratorError> {
    let Some(factory) = factory else {
        return Ok(false);
    };
    let Some(kind) = selected(&factory.kind) else {
        return Ok(false);
    };
    let kind = StoreFactoryKind::parse(kind)?;
    let name = kind.name();
    let descriptor = kind.descriptor();

    match kind {
        StoreFactoryKind::JdbcPojo => {
            let pojo = required(&factory.jdbc_pojo, "store factory", name)?;
            emit_bean_with_fields(b, Some(pojo), "cacheStoreFactory", descriptor, true)?;
            if let Some(dialect) = selected(&pojo.dialect) {
                let class_name = catalog::data_source_class(dialect)
                    .ok_or_else(|| GeneratorError::unrecognized("dialect", dialect))?;
                let bean_id = selected(&pojo.data_source_bean).ok_or(GeneratorError::MissingField {
                    bean: "CacheJdbcPojoStoreFactory",
                    field: "dataSourceBean",
                })?;
                data_sources.register(bean_id, class_name);
            }
        }
        StoreFactoryKind::JdbcBlob => {
            let blob = required(&factory.jdbc_blob, "store factory", name)?;
            emit_bean_with_fields(b, Some(blob), "cacheStoreFactory", descriptor, true)?;
        }
        StoreFactoryKind::HibernateBlob => {
            let hibernate = required(&factory.hibernate_blob, "store factory", name)?;
            emit_bean_with_fields(b, Some(hibernate), "cacheStoreFactory", descriptor, true)?;
        }
    }
    Ok(true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarshallerKind {
    Optimized,
    Jdk,
}

impl MarshallerKind {
    pub const ALL: [MarshallerKind; 2] = [MarshallerKind::Optimized, MarshallerKind::Jdk];

    pub fn parse(kind: &str) -> Result<Self, GeneratorError> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == kind)
            .ok_or_else(|| GeneratorError::unrecognized("marshaller", kind))
    }

    pub fn name(&self) -> &'static str {
        match self {
            MarshallerKind::Optimized => "OptimizedMarshaller",
            MarshallerKind::Jdk => "JdkMarshaller",
        }
    }

    pub fn descriptor(&self) -> &'static BeanDescriptor {
        match self {
            MarshallerKind::Optimized => &beans::OPTIMIZED_MARSHALLER,
            MarshallerKind::Jdk => &beans::JDK_MARSHALLER,
        }
    }
}

pub fn emit_marshaller(
    b: &mut MarkupBuilder,
    marshaller: Option<&MarshallerConfig>,
) -> Result<bool, GeneratorError> {
    let Some(marshaller) = marshaller else {
        return Ok(false);
    };
    let Some(kind) = selected(&marshaller.kind) else {
        return Ok(false);
    };
    let kind = MarshallerKind::parse(kind)?;
    match kind {
        MarshallerKind::Optimized => {
            emit_bean_with_fields(b, marshaller.optimized.as_ref(), "marshaller", kind.descriptor(), true)?
        }
        MarshallerKind::Jdk => {
            emit_bean_with_fields(b, marshaller.jdk.as_ref(), "marshaller", kind.descriptor(), true)?
        }
    }
    Ok(true)
}

pub const FILE_SWAP_SPACE_SPI_KIND: &str = "FileSwapSpaceSpi";

pub fn emit_swap_space_spi(
    b: &mut MarkupBuilder,
    swap: Option<&SwapSpaceSpiConfig>,
) -> Result<bool, GeneratorError> {
    let Some(swap) = swap else {
        return Ok(false);
    };
    match selected(&swap.kind) {
        None => Ok(false),
        Some(FILE_SWAP_SPACE_SPI_KIND) => {
            emit_bean_with_fields(b, swap.file.as_ref(), "swapSpaceSpi", &beans::FILE_SWAP_SPACE_SPI, true)?;
            Ok(true)
        }
        Some(other) => Err(GeneratorError::unrecognized("swap space SPI", other)),
    }
}

/// (slot, kind, class name) for every variant the generator knows.
pub fn variant_classes() -> Vec<(&'static str, &'static str, &'static str)> {
    let mut out = Vec::new();
    for kind in DiscoveryKind::ALL {
        out.push(("discovery", kind.name(), kind.class_name()));
    }
    for kind in EvictionPolicyKind::ALL {
        out.push(("evictionPolicy", kind.name(), kind.descriptor().class_name));
    }
    for kind in StoreFactoryKind::ALL {
        out.push(("cacheStoreFactory", kind.name(), kind.descriptor().class_name));
    }
    for kind in MarshallerKind::ALL {
        out.push(("marshaller", kind.name(), kind.descriptor().class_name));
    }
    out.push((
        "swapSpaceSpi",
        FILE_SWAP_SPACE_SPI_KIND,
        beans::FILE_SWAP_SPACE_SPI.class_name,
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn discovery(value: serde_json::Value) -> DiscoveryConfig {
        serde_json::from_value(value).unwrap()
    }

    fn render_discovery(value: serde_json::Value) -> Result<String, GeneratorError> {
        let mut b = MarkupBuilder::new();
        emit_discovery(&mut b, &discovery(value))?;
        assert_eq!(b.depth(), 0);
        Ok(b.join())
    }

    #[test]
    fn test_every_discovery_kind_renders_its_finder_class_once() {
        let inputs = [
            json!({"kind": "Multicast", "Multicast": {"multicastGroup": "228.10.10.157"}}),
            json!({"kind": "Vm", "Vm": {"addresses": ["127.0.0.1:47500..47510"]}}),
            json!({"kind": "S3", "S3": {"bucketName": "grid"}}),
            json!({"kind": "Cloud", "Cloud": {"identity": "id", "provider": "aws-ec2"}}),
            json!({"kind": "GoogleStorage", "GoogleStorage": {"projectName": "p", "bucketName": "b"}}),
            json!({"kind": "Jdbc", "Jdbc": {}}),
            json!({"kind": "SharedFs", "SharedFs": {"path": "/tmp/grid"}}),
        ];
        for (input, kind) in inputs.into_iter().zip(DiscoveryKind::ALL) {
            let out = render_discovery(input).unwrap();
            assert_eq!(out.matches(kind.class_name()).count(), 1, "{}", kind.name());
            assert_eq!(out.matches(beans::TCP_DISCOVERY_SPI).count(), 1);
        }
    }

    #[test]
    fn test_vm_without_addresses_is_self_closing() {
        let out = render_discovery(json!({"kind": "Vm", "Vm": {"addresses": []}})).unwrap();
        assert!(out.contains(
            "<bean class=\"org.apache.ignite.spi.discovery.tcp.ipfinder.vm.TcpDiscoveryVmIpFinder\"/>"
        ));
        assert!(!out.contains("<value>"));
    }

    #[test]
    fn test_vm_addresses_keep_input_order() {
        let out = render_discovery(json!({"kind": "Vm", "Vm": {"addresses": ["b:1", "a:2", "c:3"]}})).unwrap();
        let b = out.find("<value>b:1</value>").unwrap();
        let a = out.find("<value>a:2</value>").unwrap();
        let c = out.find("<value>c:3</value>").unwrap();
        assert!(b < a && a < c);
        assert_eq!(out.matches("<value>").count(), 3);
    }

    #[test]
    fn test_jdbc_init_schema_defaults_to_false() {
        let out = render_discovery(json!({"kind": "Jdbc", "Jdbc": {}})).unwrap();
        assert!(out.contains("<property name=\"initSchema\" value=\"false\"/>"));
        let out = render_discovery(json!({"kind": "Jdbc", "Jdbc": {"initSchema": true}})).unwrap();
        assert!(out.contains("<property name=\"initSchema\" value=\"true\"/>"));
    }

    #[test]
    fn test_shared_fs_without_path_is_self_closing() {
        let out = render_discovery(json!({"kind": "SharedFs", "SharedFs": {}})).unwrap();
        assert!(out.contains("TcpDiscoverySharedFsIpFinder\"/>"));
    }

    #[test]
    fn test_s3_tolerates_missing_section() {
        let out = render_discovery(json!({"kind": "S3"})).unwrap();
        assert!(out.contains("TcpDiscoveryS3IpFinder\">"));
        assert!(!out.contains("bucketName"));
    }

    #[test]
    fn test_unknown_discovery_kind_is_rejected() {
        let err = render_discovery(json!({"kind": "Bogus"})).unwrap_err();
        match err {
            GeneratorError::UnrecognizedVariant { slot, kind } => {
                assert_eq!(slot, "discovery");
                assert_eq!(kind, "Bogus");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_discovery_section_is_rejected() {
        let err = render_discovery(json!({"kind": "Cloud"})).unwrap_err();
        assert!(matches!(err, GeneratorError::MissingPayload { .. }));
    }

    #[test]
    fn test_eviction_policy_not_set_writes_nothing() {
        let mut b = MarkupBuilder::new();
        let policy: EvictionPolicyConfig = serde_json::from_value(json!({"LRU": {"maxSize": 10}})).unwrap();
        assert!(!emit_eviction_policy(&mut b, Some(&policy), "evictionPolicy").unwrap());
        assert_eq!(b.join(), "");
    }

    #[test]
    fn test_eviction_policy_reads_payload_of_selected_kind() {
        let mut b = MarkupBuilder::new();
        let policy: EvictionPolicyConfig = serde_json::from_value(json!({
            "kind": "FIFO",
            "LRU": {"maxSize": 10},
            "FIFO": {"batchSize": 5, "maxSize": 20}
        }))
        .unwrap();
        assert!(emit_eviction_policy(&mut b, Some(&policy), "evictionPolicy").unwrap());
        let out = b.join();
        assert!(out.contains("org.apache.ignite.cache.eviction.fifo.FifoEvictionPolicy"));
        assert!(out.contains("<property name=\"batchSize\" value=\"5\"/>"));
        assert!(out.contains("<property name=\"maxSize\" value=\"20\"/>"));
        assert!(!out.contains("value=\"10\""));
    }

    #[test]
    fn test_eviction_policy_without_payload_is_stubbed() {
        let mut b = MarkupBuilder::new();
        let policy: EvictionPolicyConfig = serde_json::from_value(json!({"kind": "SORTED"})).unwrap();
        emit_eviction_policy(&mut b, Some(&policy), "nearEvictionPolicy").unwrap();
        assert_eq!(
            b.join(),
            "<property name=\"nearEvictionPolicy\">\n    \
             <bean class=\"org.apache.ignite.cache.eviction.sorted.SortedEvictionPolicy\"/>\n</property>\n"
        );
    }

    #[test]
    fn test_unknown_eviction_kind_is_rejected() {
        let mut b = MarkupBuilder::new();
        let policy: EvictionPolicyConfig = serde_json::from_value(json!({"kind": "LFU"})).unwrap();
        let err = emit_eviction_policy(&mut b, Some(&policy), "evictionPolicy").unwrap_err();
        assert_eq!(err.to_string(), "unknown eviction policy kind: LFU");
    }

    #[test]
    fn test_pojo_store_factory_registers_data_source() {
        let mut b = MarkupBuilder::new();
        let mut registry = DataSourceRegistry::new();
        let factory: StoreFactoryConfig = serde_json::from_value(json!({
            "kind": "CacheJdbcPojoStoreFactory",
            "CacheJdbcPojoStoreFactory": {"dataSourceBean": "dsOracle", "dialect": "Oracle"}
        }))
        .unwrap();
        emit_store_factory(&mut b, Some(&factory), &mut registry).unwrap();
        emit_store_factory(&mut b, Some(&factory), &mut registry).unwrap();
        let sources: Vec<_> = registry.iter().collect();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].bean_id, "dsOracle");
        assert_eq!(sources[0].class_name, "oracle.jdbc.pool.OracleDataSource");
    }

    #[test]
    fn test_blob_store_factory_does_not_register_data_source() {
        let mut b = MarkupBuilder::new();
        let mut registry = DataSourceRegistry::new();
        let factory: StoreFactoryConfig = serde_json::from_value(json!({
            "kind": "CacheJdbcBlobStoreFactory",
            "CacheJdbcBlobStoreFactory": {"dataSourceBean": "ds", "initSchema": true}
        }))
        .unwrap();
        emit_store_factory(&mut b, Some(&factory), &mut registry).unwrap();
        assert!(registry.is_empty());
        assert!(b.join().contains("<property name=\"initSchema\" value=\"true\"/>"));
    }

    #[test]
    fn test_store_factory_without_section_is_rejected() {
        let mut b = MarkupBuilder::new();
        let mut registry = DataSourceRegistry::new();
        let factory: StoreFactoryConfig =
            serde_json::from_value(json!({"kind": "CacheHibernateBlobStoreFactory"})).unwrap();
        let err = emit_store_factory(&mut b, Some(&factory), &mut registry).unwrap_err();
        assert!(matches!(err, GeneratorError::MissingPayload { .. }));
    }

    #[test]
    fn test_unknown_dialect_is_rejected() {
        let mut b = MarkupBuilder::new();
        let mut registry = DataSourceRegistry::new();
        let factory: StoreFactoryConfig = serde_json::from_value(json!({
            "kind": "CacheJdbcPojoStoreFactory",
            "CacheJdbcPojoStoreFactory": {"dataSourceBean": "ds", "dialect": "Sybase"}
        }))
        .unwrap();
        let err = emit_store_factory(&mut b, Some(&factory), &mut registry).unwrap_err();
        assert_eq!(err.to_string(), "unknown dialect kind: Sybase");
    }

    #[test]
    fn test_jdk_marshaller_is_stubbed() {
        let mut b = MarkupBuilder::new();
        let marshaller: MarshallerConfig = serde_json::from_value(json!({"kind": "JdkMarshaller"})).unwrap();
        assert!(emit_marshaller(&mut b, Some(&marshaller)).unwrap());
        assert!(b.join().contains("<bean class=\"org.apache.ignite.marshaller.jdk.JdkMarshaller\"/>"));
    }

    #[test]
    fn test_unknown_swap_kind_is_rejected() {
        let mut b = MarkupBuilder::new();
        let swap: SwapSpaceSpiConfig = serde_json::from_value(json!({"kind": "NoopSwapSpaceSpi"})).unwrap();
        assert!(emit_swap_space_spi(&mut b, Some(&swap)).is_err());
    }

    #[test]
    fn test_variant_classes_cover_all_slots() {
        let classes = variant_classes();
        assert_eq!(classes.len(), 7 + 4 + 3 + 2 + 1);
        assert!(classes.iter().any(|(slot, kind, _)| *slot == "marshaller" && *kind == "OptimizedMarshaller"));
    }
}
