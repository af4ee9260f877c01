//! Spring XML generation for data-grid cluster descriptions.

mod beans;
mod builder;
mod cache;
mod cluster;
mod datasource;
mod error;
mod fields;
mod metadata;
mod validate;
mod variants;

pub use cluster::{
    generate_cache_configuration, generate_cluster_configuration, generate_secret_properties,
    GeneratorOptions,
};
pub use error::GeneratorError;
pub use validate::validate_cluster;
pub use variants::variant_classes;
