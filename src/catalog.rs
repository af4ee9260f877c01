// Reference tables shared by the generator and the reference tools:
// event groups, Java built-in classes and JDBC dialects.

/// Event groups of `org.apache.ignite.events.EventType` and their members, in declaration order.
pub const EVENT_GROUPS: &[(&str, &[&str])] = &[
    (
        "EVTS_CHECKPOINT",
        &["EVT_CHECKPOINT_SAVED", "EVT_CHECKPOINT_LOADED", "EVT_CHECKPOINT_REMOVED"],
    ),
    (
        "EVTS_DEPLOYMENT",
        &[
            "EVT_CLASS_DEPLOYED",
            "EVT_CLASS_UNDEPLOYED",
            "EVT_CLASS_DEPLOY_FAILED",
            "EVT_TASK_DEPLOYED",
            "EVT_TASK_UNDEPLOYED",
            "EVT_TASK_DEPLOY_FAILED",
        ],
    ),
    (
        "EVTS_ERROR",
        &[
            "EVT_JOB_TIMEDOUT",
            "EVT_JOB_FAILED",
            "EVT_JOB_FAILED_OVER",
            "EVT_JOB_REJECTED",
            "EVT_JOB_CANCELLED",
            "EVT_TASK_TIMEDOUT",
            "EVT_TASK_FAILED",
            "EVT_CLASS_DEPLOY_FAILED",
            "EVT_TASK_DEPLOY_FAILED",
            "EVT_TASK_DEPLOYED",
            "EVT_TASK_UNDEPLOYED",
            "EVT_CACHE_REBALANCE_STARTED",
            "EVT_CACHE_REBALANCE_STOPPED",
        ],
    ),
    (
        "EVTS_DISCOVERY",
        &[
            "EVT_NODE_JOINED",
            "EVT_NODE_LEFT",
            "EVT_NODE_FAILED",
            "EVT_NODE_SEGMENTED",
            "EVT_CLIENT_NODE_DISCONNECTED",
            "EVT_CLIENT_NODE_RECONNECTED",
        ],
    ),
    (
        "EVTS_JOB_EXECUTION",
        &[
            "EVT_JOB_MAPPED",
            "EVT_JOB_RESULTED",
            "EVT_JOB_FAILED_OVER",
            "EVT_JOB_STARTED",
            "EVT_JOB_FINISHED",
            "EVT_JOB_TIMEDOUT",
            "EVT_JOB_REJECTED",
            "EVT_JOB_FAILED",
            "EVT_JOB_QUEUED",
            "EVT_JOB_CANCELLED",
        ],
    ),
    (
        "EVTS_TASK_EXECUTION",
        &[
            "EVT_TASK_STARTED",
            "EVT_TASK_FINISHED",
            "EVT_TASK_FAILED",
            "EVT_TASK_TIMEDOUT",
            "EVT_TASK_SESSION_ATTR_SET",
            "EVT_TASK_REDUCED",
        ],
    ),
    (
        "EVTS_CACHE",
        &[
            "EVT_CACHE_ENTRY_CREATED",
            "EVT_CACHE_ENTRY_DESTROYED",
            "EVT_CACHE_OBJECT_PUT",
            "EVT_CACHE_OBJECT_READ",
            "EVT_CACHE_OBJECT_REMOVED",
            "EVT_CACHE_OBJECT_LOCKED",
            "EVT_CACHE_OBJECT_UNLOCKED",
            "EVT_CACHE_OBJECT_SWAPPED",
            "EVT_CACHE_OBJECT_UNSWAPPED",
            "EVT_CACHE_OBJECT_EXPIRED",
        ],
    ),
    (
        "EVTS_CACHE_REBALANCE",
        &[
            "EVT_CACHE_REBALANCE_STARTED",
            "EVT_CACHE_REBALANCE_STOPPED",
            "EVT_CACHE_REBALANCE_PART_LOADED",
            "EVT_CACHE_REBALANCE_PART_UNLOADED",
            "EVT_CACHE_REBALANCE_OBJECT_LOADED",
            "EVT_CACHE_REBALANCE_OBJECT_UNLOADED",
            "EVT_CACHE_REBALANCE_PART_DATA_LOST",
        ],
    ),
    (
        "EVTS_CACHE_LIFECYCLE",
        &["EVT_CACHE_STARTED", "EVT_CACHE_STOPPED", "EVT_CACHE_NODES_LEFT"],
    ),
    (
        "EVTS_CACHE_QUERY",
        &["EVT_CACHE_QUERY_EXECUTED", "EVT_CACHE_QUERY_OBJECT_READ"],
    ),
    (
        "EVTS_SWAPSPACE",
        &[
            "EVT_SWAP_SPACE_CLEARED",
            "EVT_SWAP_SPACE_DATA_REMOVED",
            "EVT_SWAP_SPACE_DATA_READ",
            "EVT_SWAP_SPACE_DATA_STORED",
            "EVT_SWAP_SPACE_DATA_EVICTED",
        ],
    ),
    (
        "EVTS_IGFS",
        &[
            "EVT_IGFS_FILE_CREATED",
            "EVT_IGFS_FILE_RENAMED",
            "EVT_IGFS_FILE_DELETED",
            "EVT_IGFS_FILE_OPENED_READ",
            "EVT_IGFS_FILE_OPENED_WRITE",
            "EVT_IGFS_FILE_CLOSED_WRITE",
            "EVT_IGFS_FILE_CLOSED_READ",
            "EVT_IGFS_FILE_PURGE",
            "EVT_IGFS_META_UPDATED",
            "EVT_IGFS_DIR_CREATED",
            "EVT_IGFS_DIR_RENAMED",
            "EVT_IGFS_DIR_DELETED",
        ],
    ),
];

/// Short names the editor accepts for key/value/field types.
pub const JAVA_BUILD_IN_CLASSES: &[(&str, &str)] = &[
    ("BigDecimal", "java.math.BigDecimal"),
    ("Boolean", "java.lang.Boolean"),
    ("Byte", "java.lang.Byte"),
    ("Date", "java.sql.Date"),
    ("Double", "java.lang.Double"),
    ("Float", "java.lang.Float"),
    ("Integer", "java.lang.Integer"),
    ("Long", "java.lang.Long"),
    ("Short", "java.lang.Short"),
    ("String", "java.lang.String"),
    ("Time", "java.sql.Time"),
    ("Timestamp", "java.sql.Timestamp"),
    ("UUID", "java.util.UUID"),
];

/// Dialect short name, dialect class, pooled data source class.
pub const JDBC_DIALECTS: &[(&str, &str, &str)] = &[
    (
        "Oracle",
        "org.apache.ignite.cache.store.jdbc.dialect.OracleDialect",
        "oracle.jdbc.pool.OracleDataSource",
    ),
    (
        "DB2",
        "org.apache.ignite.cache.store.jdbc.dialect.DB2Dialect",
        "com.ibm.db2.jcc.DB2ConnectionPoolDataSource",
    ),
    (
        "SQLServer",
        "org.apache.ignite.cache.store.jdbc.dialect.SQLServerDialect",
        "com.microsoft.sqlserver.jdbc.SQLServerDataSource",
    ),
    (
        "MySQL",
        "org.apache.ignite.cache.store.jdbc.dialect.MySQLDialect",
        "com.mysql.jdbc.jdbc2.optional.MysqlDataSource",
    ),
    (
        "PostgreSQL",
        "org.apache.ignite.cache.store.jdbc.dialect.BasicJdbcDialect",
        "org.postgresql.ds.PGPoolingDataSource",
    ),
    (
        "H2",
        "org.apache.ignite.cache.store.jdbc.dialect.H2Dialect",
        "org.h2.jdbcx.JdbcDataSource",
    ),
];

pub fn event_group(name: &str) -> Option<&'static [&'static str]> {
    EVENT_GROUPS
        .iter()
        .find(|(group, _)| *group == name)
        .map(|(_, members)| *members)
}

/// True for the short or fully qualified name of a Java built-in class.
pub fn is_java_build_in_class(class_name: &str) -> bool {
    JAVA_BUILD_IN_CLASSES
        .iter()
        .any(|(short, full)| *short == class_name || *full == class_name)
}

/// Resolves a short class name to its fully qualified form.
/// Unknown names are returned as is: they are expected to be qualified already.
pub fn resolve_class_name(class_name: &str) -> &str {
    JAVA_BUILD_IN_CLASSES
        .iter()
        .map(|(short, full)| (*short, *full))
        .chain(JDBC_DIALECTS.iter().map(|(short, dialect, _)| (*short, *dialect)))
        .find(|(short, _)| *short == class_name)
        .map(|(_, full)| full)
        .unwrap_or(class_name)
}

pub fn data_source_class(dialect: &str) -> Option<&'static str> {
    JDBC_DIALECTS
        .iter()
        .find(|(short, _, _)| *short == dialect)
        .map(|(_, _, data_source)| *data_source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_class_name() {
        assert_eq!(resolve_class_name("String"), "java.lang.String");
        assert_eq!(resolve_class_name("UUID"), "java.util.UUID");
        assert_eq!(
            resolve_class_name("Oracle"),
            "org.apache.ignite.cache.store.jdbc.dialect.OracleDialect"
        );
        assert_eq!(resolve_class_name("com.example.Person"), "com.example.Person");
    }

    #[test]
    fn test_build_in_class_accepts_short_and_full_names() {
        assert!(is_java_build_in_class("Integer"));
        assert!(is_java_build_in_class("java.lang.Integer"));
        assert!(!is_java_build_in_class("com.example.PersonKey"));
    }

    #[test]
    fn test_event_group_lookup() {
        let members = event_group("EVTS_CACHE_LIFECYCLE").unwrap();
        assert_eq!(members, &["EVT_CACHE_STARTED", "EVT_CACHE_STOPPED", "EVT_CACHE_NODES_LEFT"]);
        assert!(event_group("EVTS_BOGUS").is_none());
    }

    #[test]
    fn test_data_source_class() {
        assert_eq!(data_source_class("H2"), Some("org.h2.jdbcx.JdbcDataSource"));
        assert_eq!(data_source_class("Sybase"), None);
    }
}
