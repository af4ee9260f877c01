// Declarative descriptions of the sub-beans rendered from field tables.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `<property name=".." value=".."/>`
    Scalar,
    /// Sequence of values wrapped in `<list>`.
    List,
    /// Short class name rendered as a nested `<bean class=".."/>`.
    ClassNameRef,
    /// `key=value` strings rendered as `<props>`.
    PropertyBag,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub setter: Option<&'static str>,
}

impl FieldDescriptor {
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Scalar,
            setter: None,
        }
    }

    pub const fn list(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::List,
            setter: None,
        }
    }

    pub const fn class_name_ref(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::ClassNameRef,
            setter: None,
        }
    }

    pub const fn property_bag(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::PropertyBag,
            setter: None,
        }
    }

    /// Renders the field under a different property name.
    pub const fn with_setter(mut self, setter: &'static str) -> Self {
        self.setter = Some(setter);
        self
    }

    pub fn property_name(&self) -> &'static str {
        self.setter.unwrap_or(self.name)
    }
}

#[derive(Debug)]
pub struct BeanDescriptor {
    pub class_name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

pub const IGNITE_CONFIGURATION: &str = "org.apache.ignite.configuration.IgniteConfiguration";
pub const CACHE_CONFIGURATION: &str = "org.apache.ignite.configuration.CacheConfiguration";
pub const NEAR_CACHE_CONFIGURATION: &str = "org.apache.ignite.configuration.NearCacheConfiguration";
pub const CACHE_TYPE_METADATA: &str = "org.apache.ignite.cache.CacheTypeMetadata";
pub const CACHE_TYPE_FIELD_METADATA: &str = "org.apache.ignite.cache.CacheTypeFieldMetadata";
pub const IGNITE_BI_TUPLE: &str = "org.apache.ignite.lang.IgniteBiTuple";
pub const TCP_DISCOVERY_SPI: &str = "org.apache.ignite.spi.discovery.tcp.TcpDiscoverySpi";
pub const EVENT_TYPE: &str = "org.apache.ignite.events.EventType";
pub const PROPERTY_PLACEHOLDER_CONFIGURER: &str =
    "org.springframework.beans.factory.config.PropertyPlaceholderConfigurer";

pub const ATOMIC_CONFIGURATION: BeanDescriptor = BeanDescriptor {
    class_name: "org.apache.ignite.configuration.AtomicConfiguration",
    fields: &[
        FieldDescriptor::scalar("backups"),
        FieldDescriptor::scalar("cacheMode"),
        FieldDescriptor::scalar("atomicSequenceReserveSize"),
    ],
};

pub const TRANSACTION_CONFIGURATION: BeanDescriptor = BeanDescriptor {
    class_name: "org.apache.ignite.configuration.TransactionConfiguration",
    fields: &[
        FieldDescriptor::scalar("defaultTxConcurrency"),
        FieldDescriptor::scalar("transactionIsolation").with_setter("defaultTxIsolation"),
        FieldDescriptor::scalar("defaultTxTimeout"),
        FieldDescriptor::scalar("pessimisticTxLogLinger"),
        FieldDescriptor::scalar("pessimisticTxLogSize"),
        FieldDescriptor::scalar("txSerializableEnabled"),
    ],
};

pub const FILE_SWAP_SPACE_SPI: BeanDescriptor = BeanDescriptor {
    class_name: "org.apache.ignite.spi.swapspace.file.FileSwapSpaceSpi",
    fields: &[
        FieldDescriptor::scalar("baseDirectory"),
        FieldDescriptor::scalar("readStripesNumber"),
        FieldDescriptor::scalar("maximumSparsity"),
        FieldDescriptor::scalar("maxWriteQueueSize"),
        FieldDescriptor::scalar("writeBufferSize"),
    ],
};

const EVICTION_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::scalar("batchSize"),
    FieldDescriptor::scalar("maxMemorySize"),
    FieldDescriptor::scalar("maxSize"),
];

pub const LRU_EVICTION_POLICY: BeanDescriptor = BeanDescriptor {
    class_name: "org.apache.ignite.cache.eviction.lru.LruEvictionPolicy",
    fields: EVICTION_FIELDS,
};

pub const RANDOM_EVICTION_POLICY: BeanDescriptor = BeanDescriptor {
    class_name: "org.apache.ignite.cache.eviction.random.RandomEvictionPolicy",
    fields: &[FieldDescriptor::scalar("maxSize")],
};

pub const FIFO_EVICTION_POLICY: BeanDescriptor = BeanDescriptor {
    class_name: "org.apache.ignite.cache.eviction.fifo.FifoEvictionPolicy",
    fields: EVICTION_FIELDS,
};

pub const SORTED_EVICTION_POLICY: BeanDescriptor = BeanDescriptor {
    class_name: "org.apache.ignite.cache.eviction.sorted.SortedEvictionPolicy",
    fields: EVICTION_FIELDS,
};

pub const OPTIMIZED_MARSHALLER: BeanDescriptor = BeanDescriptor {
    class_name: "org.apache.ignite.marshaller.optimized.OptimizedMarshaller",
    fields: &[
        FieldDescriptor::scalar("poolSize"),
        FieldDescriptor::scalar("requireSerializable"),
    ],
};

pub const JDK_MARSHALLER: BeanDescriptor = BeanDescriptor {
    class_name: "org.apache.ignite.marshaller.jdk.JdkMarshaller",
    fields: &[],
};

pub const JDBC_POJO_STORE_FACTORY: BeanDescriptor = BeanDescriptor {
    class_name: "org.apache.ignite.cache.store.jdbc.CacheJdbcPojoStoreFactory",
    fields: &[
        FieldDescriptor::scalar("dataSourceBean"),
        FieldDescriptor::class_name_ref("dialect"),
    ],
};

pub const JDBC_BLOB_STORE_FACTORY: BeanDescriptor = BeanDescriptor {
    class_name: "org.apache.ignite.cache.store.jdbc.CacheJdbcBlobStoreFactory",
    fields: &[
        FieldDescriptor::scalar("user"),
        FieldDescriptor::scalar("dataSourceBean"),
        FieldDescriptor::scalar("initSchema"),
        FieldDescriptor::scalar("createTableQuery"),
        FieldDescriptor::scalar("loadQuery"),
        FieldDescriptor::scalar("insertQuery"),
        FieldDescriptor::scalar("updateQuery"),
        FieldDescriptor::scalar("deleteQuery"),
    ],
};

pub const HIBERNATE_BLOB_STORE_FACTORY: BeanDescriptor = BeanDescriptor {
    class_name: "org.apache.ignite.cache.store.hibernate.CacheHibernateBlobStoreFactory",
    fields: &[FieldDescriptor::property_bag("hibernateProperties")],
};
