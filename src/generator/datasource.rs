// Data sources discovered while rendering JDBC store factories.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub bean_id: String,
    pub class_name: String,
}

/// Ordered set of data sources, unique by bean id, kept in first-discovery order.
#[derive(Debug, Default)]
pub struct DataSourceRegistry {
    sources: Vec<DataSource>,
}

impl DataSourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when a data source with the same bean id is already registered.
    pub fn register(&mut self, bean_id: &str, class_name: &str) -> bool {
        if self.sources.iter().any(|ds| ds.bean_id == bean_id) {
            return false;
        }
        tracing::debug!(bean_id, class_name, "registered data source");
        self.sources.push(DataSource {
            bean_id: bean_id.to_string(),
            class_name: class_name.to_string(),
        });
        true
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataSource> {
        self.sources.iter()
    }
}
