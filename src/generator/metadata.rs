// Cache type metadata: database column mappings and query field layout.

use std::collections::HashSet;

use super::beans;
use super::builder::MarkupBuilder;
use super::fields::{emit_class_name_ref, emit_list, emit_scalar, escape_attr};
use crate::catalog;
use crate::types::{DatabaseField, FieldGroup, MetadataKind, QueryField, TypeMetadata};

/// Writes the `typeMetadata` list for a cache.
///
/// Query metadata is scanned before store metadata; when both contain an entry with
/// the same name only the first one is rendered.
pub fn emit_type_metadata_list(b: &mut MarkupBuilder, query: &[TypeMetadata], store: &[TypeMetadata]) {
    if query.is_empty() && store.is_empty() {
        return;
    }

    b.empty_line_if_needed();
    b.start_block("<property name=\"typeMetadata\">");
    b.start_block("<list>");

    let mut seen: HashSet<&str> = HashSet::new();
    for meta in query.iter().chain(store) {
        if seen.insert(meta.name.as_str()) {
            emit_type_metadata(b, meta);
        } else {
            tracing::debug!(name = %meta.name, "skipping duplicate type metadata");
        }
    }

    b.end_block("</list>");
    b.end_block("</property>");
}

pub fn emit_type_metadata(b: &mut MarkupBuilder, meta: &TypeMetadata) {
    b.start_block(&format!("<bean class=\"{}\">", beans::CACHE_TYPE_METADATA));

    let key_type = emit_class_name_ref(b, "keyType", meta.key_type.as_ref());
    emit_scalar(b, "valueType", meta.value_type.as_ref());

    if meta.kind != Some(MetadataKind::Query) {
        emit_scalar(b, "databaseSchema", meta.database_schema.as_ref());
        emit_scalar(b, "databaseTable", meta.database_table.as_ref());

        // Built-in key types map to a single column and need no key field mapping.
        if !key_type.is_some_and(|k| catalog::is_java_build_in_class(k)) {
            emit_database_fields(b, "keyFields", &meta.key_fields);
        }
        emit_database_fields(b, "valueFields", &meta.value_fields);
    }

    if meta.kind != Some(MetadataKind::Store) {
        emit_query_fields(b, "queryFields", &meta.query_fields);
        emit_query_fields(b, "ascendingFields", &meta.ascending_fields);
        emit_query_fields(b, "descendingFields", &meta.descending_fields);
        emit_list(b, "textFields", &meta.text_fields, "list");
        emit_groups(b, &meta.groups);
    }

    b.end_block("</bean>");
}

fn emit_database_fields(b: &mut MarkupBuilder, property_name: &str, fields: &[DatabaseField]) {
    if fields.is_empty() {
        return;
    }

    b.start_block(&format!("<property name=\"{}\">", property_name));
    b.start_block("<list>");
    for field in fields {
        b.start_block(&format!("<bean class=\"{}\">", beans::CACHE_TYPE_FIELD_METADATA));
        emit_scalar(b, "databaseName", field.database_name.as_ref());
        b.start_block("<property name=\"databaseType\">");
        b.line(&format!(
            "<util:constant static-field=\"java.sql.Types.{}\"/>",
            escape_attr(&field.database_type)
        ));
        b.end_block("</property>");
        emit_scalar(b, "javaName", field.java_name.as_ref());
        emit_class_name_ref(b, "javaType", field.java_type.as_ref());
        b.end_block("</bean>");
    }
    b.end_block("</list>");
    b.end_block("</property>");
}

fn emit_query_fields(b: &mut MarkupBuilder, property_name: &str, fields: &[QueryField]) {
    if fields.is_empty() {
        return;
    }

    b.start_block(&format!("<property name=\"{}\">", property_name));
    b.start_block("<map>");
    for field in fields {
        b.line(&format!(
            "<entry key=\"{}\" value=\"{}\"/>",
            escape_attr(&field.name),
            escape_attr(catalog::resolve_class_name(&field.class_name))
        ));
    }
    b.end_block("</map>");
    b.end_block("</property>");
}

fn emit_groups(b: &mut MarkupBuilder, groups: &[FieldGroup]) {
    if !groups.iter().any(|g| !g.fields.is_empty()) {
        return;
    }

    b.start_block("<property name=\"groups\">");
    b.start_block("<map>");
    for group in groups.iter().filter(|g| !g.fields.is_empty()) {
        b.start_block(&format!("<entry key=\"{}\">", escape_attr(&group.name)));
        b.start_block("<map>");
        for field in &group.fields {
            b.start_block(&format!("<entry key=\"{}\">", escape_attr(&field.name)));
            b.start_block(&format!("<bean class=\"{}\">", beans::IGNITE_BI_TUPLE));
            b.line(&format!(
                "<constructor-arg value=\"{}\"/>",
                escape_attr(catalog::resolve_class_name(&field.class_name))
            ));
            b.line(&format!("<constructor-arg value=\"{}\"/>", field.direction));
            b.end_block("</bean>");
            b.end_block("</entry>");
        }
        b.end_block("</map>");
        b.end_block("</entry>");
    }
    b.end_block("</map>");
    b.end_block("</property>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta(value: serde_json::Value) -> TypeMetadata {
        serde_json::from_value(value).unwrap()
    }

    fn render(query: &[TypeMetadata], store: &[TypeMetadata]) -> String {
        let mut b = MarkupBuilder::new();
        emit_type_metadata_list(&mut b, query, store);
        assert_eq!(b.depth(), 0);
        b.join()
    }

    #[test]
    fn test_empty_metadata_writes_nothing() {
        assert_eq!(render(&[], &[]), "");
    }

    #[test]
    fn test_duplicate_names_keep_query_entry() {
        let query = [meta(json!({"name": "Foo", "kind": "query", "valueType": "org.example.FromQuery"}))];
        let store = [
            meta(json!({"name": "Foo", "kind": "store", "valueType": "org.example.FromStore"})),
            meta(json!({"name": "Bar", "kind": "store", "valueType": "org.example.Bar"})),
        ];
        let out = render(&query, &store);
        assert_eq!(out.matches("<bean class=\"org.apache.ignite.cache.CacheTypeMetadata\">").count(), 2);
        assert!(out.contains("org.example.FromQuery"));
        assert!(!out.contains("org.example.FromStore"));
        assert!(out.find("org.example.FromQuery").unwrap() < out.find("org.example.Bar").unwrap());
    }

    #[test]
    fn test_query_kind_skips_database_fields() {
        let out = render(
            &[meta(json!({
                "name": "Person",
                "kind": "query",
                "databaseTable": "PERSON",
                "valueFields": [{"databaseName": "NAME", "databaseType": "VARCHAR", "javaName": "name", "javaType": "String"}],
                "queryFields": [{"name": "name", "className": "String"}],
                "textFields": ["name"]
            }))],
            &[],
        );
        assert!(!out.contains("databaseTable"));
        assert!(!out.contains("valueFields"));
        assert!(out.contains("<entry key=\"name\" value=\"java.lang.String\"/>"));
        assert!(out.contains("<property name=\"textFields\">"));
    }

    #[test]
    fn test_store_kind_skips_query_fields() {
        let out = render(
            &[],
            &[meta(json!({
                "name": "Person",
                "kind": "store",
                "keyType": "org.example.PersonKey",
                "databaseTable": "PERSON",
                "keyFields": [{"databaseName": "ID", "databaseType": "INTEGER", "javaName": "id", "javaType": "int"}],
                "queryFields": [{"name": "name", "className": "String"}]
            }))],
        );
        assert!(out.contains("<property name=\"databaseTable\" value=\"PERSON\"/>"));
        assert!(out.contains("<util:constant static-field=\"java.sql.Types.INTEGER\"/>"));
        assert!(out.contains("<property name=\"javaType\" value=\"int\"/>"));
        assert!(!out.contains("queryFields"));
    }

    #[test]
    fn test_build_in_key_type_skips_key_fields() {
        let out = render(
            &[],
            &[meta(json!({
                "name": "Person",
                "kind": "both",
                "keyType": "Integer",
                "keyFields": [{"databaseName": "ID", "databaseType": "INTEGER"}],
                "valueFields": [{"databaseName": "NAME", "databaseType": "VARCHAR"}]
            }))],
        );
        assert!(out.contains("<property name=\"keyType\" value=\"java.lang.Integer\"/>"));
        assert!(!out.contains("keyFields"));
        assert!(out.contains("<property name=\"valueFields\">"));
    }

    #[test]
    fn test_groups_render_tuples() {
        let out = render(
            &[meta(json!({
                "name": "Person",
                "kind": "query",
                "groups": [
                    {"name": "empty", "fields": []},
                    {"name": "nameAge", "fields": [
                        {"name": "name", "className": "String", "direction": false},
                        {"name": "age", "className": "Integer", "direction": true}
                    ]}
                ]
            }))],
            &[],
        );
        assert!(!out.contains("<entry key=\"empty\">"));
        assert!(out.contains("<entry key=\"nameAge\">"));
        assert!(out.contains("<constructor-arg value=\"java.lang.Integer\"/>"));
        assert!(out.contains("<constructor-arg value=\"true\"/>"));
    }
}
