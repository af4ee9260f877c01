// Property emission: scalars, lists, class references and descriptor-driven sub-beans.

use serde::Serialize;
use serde_json::{Map as JsonMap, Value};

use super::beans::{BeanDescriptor, FieldDescriptor, FieldKind};
use super::builder::MarkupBuilder;
use super::error::GeneratorError;
use crate::catalog;
use crate::types::CacheMode;

/// Escapes a value placed inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

/// Escapes a value placed in a text node.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// A value that can be written into a `value` attribute.
pub trait PropertyValue {
    fn to_attr(&self) -> String;
}

impl PropertyValue for String {
    fn to_attr(&self) -> String {
        escape_attr(self)
    }
}

impl PropertyValue for i64 {
    fn to_attr(&self) -> String {
        self.to_string()
    }
}

impl PropertyValue for f64 {
    fn to_attr(&self) -> String {
        self.to_string()
    }
}

impl PropertyValue for bool {
    fn to_attr(&self) -> String {
        self.to_string()
    }
}

impl PropertyValue for CacheMode {
    fn to_attr(&self) -> String {
        self.as_str().to_string()
    }
}

impl PropertyValue for Value {
    fn to_attr(&self) -> String {
        match self {
            Value::String(s) => escape_attr(s),
            other => other.to_string(),
        }
    }
}

pub fn property_element(name: &str, value: &str) -> String {
    format!("<property name=\"{}\" value=\"{}\"/>", name, value)
}

/// Writes `<property name=.. value=../>` when the value is present and hands the value back.
pub fn emit_scalar<'a, T: PropertyValue + ?Sized>(
    b: &mut MarkupBuilder,
    name: &str,
    value: Option<&'a T>,
) -> Option<&'a T> {
    if let Some(v) = value {
        b.empty_line_if_needed();
        b.line(&property_element(name, &v.to_attr()));
    }
    value
}

/// Like [`emit_scalar`], but resolves short class names to qualified ones first.
pub fn emit_class_name_ref<'a>(
    b: &mut MarkupBuilder,
    name: &str,
    value: Option<&'a String>,
) -> Option<&'a String> {
    if let Some(v) = value {
        b.empty_line_if_needed();
        b.line(&property_element(name, &escape_attr(catalog::resolve_class_name(v))));
    }
    value
}

pub fn emit_list(b: &mut MarkupBuilder, name: &str, items: &[String], container: &str) {
    emit_list_with(b, name, items, container, |v| {
        format!("<value>{}</value>", escape_text(v))
    });
}

/// Writes a non-empty sequence as `<property><container>rows..</container></property>`.
pub fn emit_list_with<T>(
    b: &mut MarkupBuilder,
    name: &str,
    items: &[T],
    container: &str,
    row: impl Fn(&T) -> String,
) {
    if items.is_empty() {
        return;
    }
    b.empty_line_if_needed();
    b.start_block(&format!("<property name=\"{}\">", name));
    b.start_block(&format!("<{}>", container));
    for item in items {
        b.line(&row(item));
    }
    b.end_block(&format!("</{}>", container));
    b.end_block("</property>");
}

/// Renders `bean` as `<property name=property_name><bean class=..>` using the
/// descriptor's field table.
///
/// Nothing is written when the bean is absent or none of the described fields has a
/// value, unless `force` is set, in which case an empty bean stub is written instead.
pub fn emit_bean_with_fields<T: Serialize>(
    b: &mut MarkupBuilder,
    bean: Option<&T>,
    property_name: &str,
    descriptor: &BeanDescriptor,
    force: bool,
) -> Result<(), GeneratorError> {
    let fields = match bean {
        Some(bean) => bean_fields(bean)?,
        None => JsonMap::new(),
    };

    if descriptor.fields.iter().any(|f| has_value(&fields, f)) {
        b.empty_line_if_needed();
        b.start_block(&format!("<property name=\"{}\">", property_name));
        b.start_block(&format!("<bean class=\"{}\">", descriptor.class_name));
        for field in descriptor.fields {
            emit_field(b, &fields, field);
        }
        b.end_block("</bean>");
        b.end_block("</property>");
    } else if force {
        b.empty_line_if_needed();
        b.start_block(&format!("<property name=\"{}\">", property_name));
        b.line(&format!("<bean class=\"{}\"/>", descriptor.class_name));
        b.end_block("</property>");
    }
    Ok(())
}

fn bean_fields<T: Serialize>(bean: &T) -> Result<JsonMap<String, Value>, GeneratorError> {
    match serde_json::to_value(bean)? {
        Value::Object(map) => Ok(map),
        _ => Ok(JsonMap::new()),
    }
}

fn has_value(fields: &JsonMap<String, Value>, field: &FieldDescriptor) -> bool {
    match fields.get(field.name) {
        None | Some(Value::Null) => false,
        // Entries without `=` are dropped, so they do not count.
        Some(value) if field.kind == FieldKind::PropertyBag => {
            property_bag_entries(value).next().is_some()
        }
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

fn property_bag_entries(value: &Value) -> impl Iterator<Item = (String, String)> {
    value_strings(value).into_iter().filter_map(|entry| {
        entry
            .split_once('=')
            .map(|(key, val)| (key.to_string(), val.to_string()))
    })
}

fn value_strings(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn emit_field(b: &mut MarkupBuilder, fields: &JsonMap<String, Value>, field: &FieldDescriptor) {
    if !has_value(fields, field) {
        return;
    }
    let Some(value) = fields.get(field.name) else {
        return;
    };
    let name = field.property_name();

    match field.kind {
        FieldKind::Scalar => {
            emit_scalar(b, name, Some(value));
        }
        FieldKind::List => emit_list(b, name, &value_strings(value), "list"),
        FieldKind::ClassNameRef => {
            if let Some(short) = value.as_str().filter(|s| !s.is_empty()) {
                b.start_block(&format!("<property name=\"{}\">", name));
                b.line(&format!(
                    "<bean class=\"{}\"/>",
                    escape_attr(catalog::resolve_class_name(short))
                ));
                b.end_block("</property>");
            }
        }
        FieldKind::PropertyBag => {
            let props: Vec<(String, String)> = property_bag_entries(value).collect();
            emit_list_with(b, name, &props, "props", |(key, val)| {
                format!("<prop key=\"{}\">{}</prop>", escape_attr(key), escape_text(val))
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::beans::{
        HIBERNATE_BLOB_STORE_FACTORY, JDBC_POJO_STORE_FACTORY, TRANSACTION_CONFIGURATION,
    };
    use serde_json::json;

    #[test]
    fn test_escaping() {
        assert_eq!(escape_attr(r#"a&b"c<d>"#), "a&amp;b&quot;c<d>");
        assert_eq!(escape_text(r#"a&b"c<d>"#), "a&amp;b\"c&lt;d&gt;");
    }

    #[test]
    fn test_emit_scalar_skips_absent_and_returns_value() {
        let mut b = MarkupBuilder::new();
        let present = "Tom & \"Jerry\"".to_string();
        assert!(emit_scalar::<String>(&mut b, "missing", None).is_none());
        assert_eq!(emit_scalar(&mut b, "name", Some(&present)), Some(&present));
        emit_scalar(&mut b, "backups", Some(&2i64));
        assert_eq!(
            b.join(),
            "<property name=\"name\" value=\"Tom &amp; &quot;Jerry&quot;\"/>\n\
             <property name=\"backups\" value=\"2\"/>\n"
        );
    }

    #[test]
    fn test_emit_class_name_ref_resolves_build_in_names() {
        let mut b = MarkupBuilder::new();
        emit_class_name_ref(&mut b, "keyType", Some(&"Long".to_string()));
        emit_class_name_ref(&mut b, "valueType", Some(&"org.example.Person".to_string()));
        assert_eq!(
            b.join(),
            "<property name=\"keyType\" value=\"java.lang.Long\"/>\n\
             <property name=\"valueType\" value=\"org.example.Person\"/>\n"
        );
    }

    #[test]
    fn test_emit_list_escapes_text_and_skips_empty() {
        let mut b = MarkupBuilder::new();
        emit_list(&mut b, "empty", &[], "list");
        emit_list(&mut b, "addresses", &["a<1>".to_string(), "b".to_string()], "list");
        assert_eq!(
            b.join(),
            "<property name=\"addresses\">\n    <list>\n        <value>a&lt;1&gt;</value>\n        \
             <value>b</value>\n    </list>\n</property>\n"
        );
    }

    #[test]
    fn test_bean_without_values_is_skipped_or_stubbed() {
        let empty = json!({});
        let mut b = MarkupBuilder::new();
        emit_bean_with_fields(&mut b, Some(&empty), "transactionConfiguration", &TRANSACTION_CONFIGURATION, false)
            .unwrap();
        assert_eq!(b.join(), "");

        emit_bean_with_fields::<Value>(&mut b, None, "transactionConfiguration", &TRANSACTION_CONFIGURATION, true)
            .unwrap();
        assert_eq!(
            b.join(),
            "<property name=\"transactionConfiguration\">\n    \
             <bean class=\"org.apache.ignite.configuration.TransactionConfiguration\"/>\n</property>\n"
        );
    }

    #[test]
    fn test_bean_fields_follow_descriptor_order_and_setters() {
        let tx = json!({"txSerializableEnabled": true, "transactionIsolation": "SERIALIZABLE"});
        let mut b = MarkupBuilder::new();
        emit_bean_with_fields(&mut b, Some(&tx), "transactionConfiguration", &TRANSACTION_CONFIGURATION, false)
            .unwrap();
        let out = b.join();
        let isolation = out.find("name=\"defaultTxIsolation\" value=\"SERIALIZABLE\"").unwrap();
        let serializable = out.find("name=\"txSerializableEnabled\" value=\"true\"").unwrap();
        assert!(isolation < serializable);
    }

    #[test]
    fn test_class_name_ref_field_renders_nested_bean() {
        let pojo = json!({"dataSourceBean": "ds", "dialect": "MySQL"});
        let mut b = MarkupBuilder::new();
        emit_bean_with_fields(&mut b, Some(&pojo), "cacheStoreFactory", &JDBC_POJO_STORE_FACTORY, true).unwrap();
        let out = b.join();
        assert!(out.contains("<property name=\"dataSourceBean\" value=\"ds\"/>"));
        assert!(out.contains(
            "<property name=\"dialect\">\n            \
             <bean class=\"org.apache.ignite.cache.store.jdbc.dialect.MySQLDialect\"/>\n        </property>"
        ));
    }

    #[test]
    fn test_property_bag_splits_on_first_equals() {
        let hibernate = json!({"hibernateProperties": [
            "connection.url=jdbc:h2:mem:db?a=b",
            "no-separator",
            "show_sql=<true>"
        ]});
        let mut b = MarkupBuilder::new();
        emit_bean_with_fields(&mut b, Some(&hibernate), "cacheStoreFactory", &HIBERNATE_BLOB_STORE_FACTORY, true)
            .unwrap();
        let out = b.join();
        assert!(out.contains("<prop key=\"connection.url\">jdbc:h2:mem:db?a=b</prop>"));
        assert!(out.contains("<prop key=\"show_sql\">&lt;true&gt;</prop>"));
        assert!(!out.contains("no-separator"));
    }

    #[test]
    fn test_property_bag_without_pairs_is_stubbed() {
        let hibernate = json!({"hibernateProperties": ["no-separator", "another"]});
        let mut b = MarkupBuilder::new();
        emit_bean_with_fields(&mut b, Some(&hibernate), "cacheStoreFactory", &HIBERNATE_BLOB_STORE_FACTORY, true)
            .unwrap();
        assert_eq!(
            b.join(),
            "<property name=\"cacheStoreFactory\">\n    \
             <bean class=\"org.apache.ignite.cache.store.hibernate.CacheHibernateBlobStoreFactory\"/>\n</property>\n"
        );
    }
}
