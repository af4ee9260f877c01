// Whole-document generation for a cluster.

use super::beans::{self, ATOMIC_CONFIGURATION, TRANSACTION_CONFIGURATION};
use super::builder::MarkupBuilder;
use super::cache::{emit_cache_configuration, emit_near_cache_bean};
use super::datasource::DataSourceRegistry;
use super::error::GeneratorError;
use super::fields::{emit_bean_with_fields, emit_list, emit_scalar, escape_attr};
use super::variants::{emit_discovery, emit_marshaller, emit_swap_space_spi};
use crate::catalog;
use crate::types::{
    CacheConfig, ClusterConfig, NearCacheConfig, DEFAULT_HEADER_COMMENT,
    DEFAULT_PROPERTIES_LOCATION, SPRING_BEANS_NS, SPRING_UTIL_NS, XSI_NS,
};

/// Document-level settings that do not come from the cluster description.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Location of the properties file holding data source credentials.
    pub properties_location: String,
    /// Text of the comment written under the XML declaration.
    pub header_comment: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            properties_location: DEFAULT_PROPERTIES_LOCATION.to_string(),
            header_comment: DEFAULT_HEADER_COMMENT.to_string(),
        }
    }
}

/// Generates the Spring XML document for `cluster`.
///
/// With `client_near`, the document configures a client node: a `nearCacheBean`
/// is declared ahead of the configuration and `clientMode` is switched on.
pub fn generate_cluster_configuration(
    cluster: &ClusterConfig,
    client_near: Option<&NearCacheConfig>,
    options: &GeneratorOptions,
) -> Result<String, GeneratorError> {
    let (body, data_sources) = render_body(cluster, client_near)?;

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\n");
    xml.push_str(&format!("<!-- {} -->\n", comment_text(&options.header_comment)));
    xml.push_str(&format!("<beans xmlns=\"{}\"\n", SPRING_BEANS_NS));
    xml.push_str(&format!("       xmlns:xsi=\"{}\"\n", XSI_NS));
    xml.push_str(&format!("       xmlns:util=\"{}\"\n", SPRING_UTIL_NS));
    xml.push_str(&format!("       xsi:schemaLocation=\"{}\n", SPRING_BEANS_NS));
    xml.push_str(&format!("                           {}/spring-beans.xsd\n", SPRING_BEANS_NS));
    xml.push_str(&format!("                           {}\n", SPRING_UTIL_NS));
    xml.push_str(&format!("                           {}/spring-util.xsd\">\n", SPRING_UTIL_NS));

    if !data_sources.is_empty() {
        xml.push_str("    <!-- Load external properties file. -->\n");
        xml.push_str(&format!(
            "    <bean id=\"placeholderConfig\" class=\"{}\">\n",
            beans::PROPERTY_PLACEHOLDER_CONFIGURER
        ));
        xml.push_str(&format!(
            "        <property name=\"location\" value=\"{}\"/>\n",
            escape_attr(&options.properties_location)
        ));
        xml.push_str("    </bean>\n\n");

        xml.push_str("    <!-- Data source beans will be initialized from external properties file. -->\n");
        for ds in data_sources.iter() {
            let id = escape_attr(&ds.bean_id);
            xml.push_str(&format!("    <bean id=\"{}\" class=\"{}\">\n", id, ds.class_name));
            xml.push_str(&format!("        <property name=\"URL\" value=\"${{{}.jdbc.url}}\"/>\n", id));
            xml.push_str(&format!("        <property name=\"user\" value=\"${{{}.jdbc.username}}\"/>\n", id));
            xml.push_str(&format!("        <property name=\"password\" value=\"${{{}.jdbc.password}}\"/>\n", id));
            xml.push_str("    </bean>\n\n");
        }
    }

    xml.push_str(&body.join());
    xml.push_str("</beans>\n");
    Ok(xml)
}

/// Generates a standalone `CacheConfiguration` bean.
pub fn generate_cache_configuration(cache: &CacheConfig) -> Result<String, GeneratorError> {
    let mut b = MarkupBuilder::new();
    let mut data_sources = DataSourceRegistry::new();
    emit_cache_configuration(&mut b, cache, &mut data_sources)?;
    Ok(b.join())
}

/// Generates the properties file template read by the generated document, one
/// `url`/`username`/`password` triple per data source.
pub fn generate_secret_properties(cluster: &ClusterConfig) -> Result<String, GeneratorError> {
    let (_, data_sources) = render_body(cluster, None)?;

    if data_sources.is_empty() {
        return Ok("# No data sources are configured.\n".to_string());
    }

    let mut out = String::new();
    for ds in data_sources.iter() {
        out.push_str(&format!("# {} ({})\n", ds.bean_id, ds.class_name));
        out.push_str(&format!("{}.jdbc.url=\n", ds.bean_id));
        out.push_str(&format!("{}.jdbc.username=\n", ds.bean_id));
        out.push_str(&format!("{}.jdbc.password=\n\n", ds.bean_id));
    }
    Ok(out)
}

fn render_body(
    cluster: &ClusterConfig,
    client_near: Option<&NearCacheConfig>,
) -> Result<(MarkupBuilder, DataSourceRegistry), GeneratorError> {
    let mut b = MarkupBuilder::with_depth(1);
    let mut data_sources = DataSourceRegistry::new();

    if let Some(near) = client_near {
        emit_near_cache_bean(&mut b, Some("nearCacheBean"), Some(near))?;
        b.empty_line();
    }

    b.start_block(&format!("<bean class=\"{}\">", beans::IGNITE_CONFIGURATION));

    if client_near.is_some() {
        emit_scalar(&mut b, "clientMode", Some(&true));
        b.request_empty_line();
    }

    if let Some(discovery) = &cluster.discovery {
        emit_discovery(&mut b, discovery)?;
        b.request_empty_line();
    }

    emit_bean_with_fields(
        &mut b,
        cluster.atomic_configuration.as_ref(),
        "atomicConfiguration",
        &ATOMIC_CONFIGURATION,
        false,
    )?;
    b.request_empty_line();

    emit_scalar(&mut b, "networkTimeout", cluster.network_timeout.as_ref());
    emit_scalar(&mut b, "networkSendRetryDelay", cluster.network_send_retry_delay.as_ref());
    emit_scalar(&mut b, "networkSendRetryCount", cluster.network_send_retry_count.as_ref());
    emit_scalar(&mut b, "segmentCheckFrequency", cluster.segment_check_frequency.as_ref());
    emit_scalar(&mut b, "waitForSegmentOnStart", cluster.wait_for_segment_on_start.as_ref());
    emit_scalar(&mut b, "discoveryStartupDelay", cluster.discovery_startup_delay.as_ref());
    b.request_empty_line();

    emit_scalar(&mut b, "deploymentMode", cluster.deployment_mode.as_ref());
    b.request_empty_line();

    emit_event_types(&mut b, &cluster.include_event_types)?;

    if emit_marshaller(&mut b, cluster.marshaller.as_ref())? {
        b.request_empty_line();
    }
    emit_scalar(&mut b, "marshalLocalJobs", cluster.marshal_local_jobs.as_ref());
    emit_scalar(&mut b, "marshallerCacheKeepAliveTime", cluster.marshaller_cache_keep_alive_time.as_ref());
    emit_scalar(&mut b, "marshallerCacheThreadPoolSize", cluster.marshaller_cache_thread_pool_size.as_ref());
    b.request_empty_line();

    emit_scalar(&mut b, "metricsExpireTime", cluster.metrics_expire_time.as_ref());
    emit_scalar(&mut b, "metricsHistorySize", cluster.metrics_history_size.as_ref());
    emit_scalar(&mut b, "metricsLogFrequency", cluster.metrics_log_frequency.as_ref());
    emit_scalar(&mut b, "metricsUpdateFrequency", cluster.metrics_update_frequency.as_ref());
    b.request_empty_line();

    emit_scalar(&mut b, "peerClassLoadingEnabled", cluster.peer_class_loading_enabled.as_ref());
    emit_list(
        &mut b,
        "peerClassLoadingLocalClassPathExclude",
        &cluster.peer_class_loading_local_class_path_exclude,
        "list",
    );
    emit_scalar(
        &mut b,
        "peerClassLoadingMissedResourcesCacheSize",
        cluster.peer_class_loading_missed_resources_cache_size.as_ref(),
    );
    emit_scalar(
        &mut b,
        "peerClassLoadingThreadPoolSize",
        cluster.peer_class_loading_thread_pool_size.as_ref(),
    );
    b.request_empty_line();

    if emit_swap_space_spi(&mut b, cluster.swap_space_spi.as_ref())? {
        b.request_empty_line();
    }

    emit_scalar(&mut b, "clockSyncSamples", cluster.clock_sync_samples.as_ref());
    emit_scalar(&mut b, "clockSyncFrequency", cluster.clock_sync_frequency.as_ref());
    emit_scalar(&mut b, "timeServerPortBase", cluster.time_server_port_base.as_ref());
    emit_scalar(&mut b, "timeServerPortRange", cluster.time_server_port_range.as_ref());
    b.request_empty_line();

    emit_scalar(&mut b, "publicThreadPoolSize", cluster.public_thread_pool_size.as_ref());
    emit_scalar(&mut b, "systemThreadPoolSize", cluster.system_thread_pool_size.as_ref());
    emit_scalar(&mut b, "managementThreadPoolSize", cluster.management_thread_pool_size.as_ref());
    emit_scalar(&mut b, "igfsThreadPoolSize", cluster.igfs_thread_pool_size.as_ref());
    b.request_empty_line();

    emit_bean_with_fields(
        &mut b,
        cluster.transaction_configuration.as_ref(),
        "transactionConfiguration",
        &TRANSACTION_CONFIGURATION,
        true,
    )?;
    b.request_empty_line();

    if !cluster.caches.is_empty() {
        b.empty_line_if_needed();
        b.start_block("<property name=\"cacheConfiguration\">");
        b.start_block("<list>");
        for (i, cache) in cluster.caches.iter().enumerate() {
            if i > 0 {
                b.empty_line();
            }
            emit_cache_configuration(&mut b, cache, &mut data_sources)?;
        }
        b.end_block("</list>");
        b.end_block("</property>");
    }

    b.end_block("</bean>");
    debug_assert_eq!(b.depth(), 1, "unbalanced blocks in cluster configuration");

    tracing::debug!(
        caches = cluster.caches.len(),
        data_sources = data_sources.iter().count(),
        "rendered cluster configuration"
    );
    Ok((b, data_sources))
}

/// Writes `includeEventTypes`. One group is referenced by its constant; several
/// groups are expanded into their member events.
fn emit_event_types(b: &mut MarkupBuilder, groups: &[String]) -> Result<(), GeneratorError> {
    if groups.is_empty() {
        return Ok(());
    }

    let expanded = groups
        .iter()
        .map(|group| {
            catalog::event_group(group)
                .map(|members| (group.as_str(), members))
                .ok_or_else(|| GeneratorError::UnknownEventGroup(group.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    b.empty_line_if_needed();
    b.start_block("<property name=\"includeEventTypes\">");

    if let [(group, _)] = expanded.as_slice() {
        b.line(&event_constant(group));
    } else {
        b.start_block("<array>");
        for (i, (group, members)) in expanded.iter().enumerate() {
            if i > 0 {
                b.empty_line();
            }
            b.line(&format!("<!-- EventType.{} -->", group));
            for member in members.iter() {
                b.line(&event_constant(member));
            }
        }
        b.end_block("</array>");
    }

    b.end_block("</property>");
    b.request_empty_line();
    Ok(())
}

/// Text safe inside `<!-- -->`: hyphen runs are split so `--` never appears.
fn comment_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '-' && out.ends_with('-') {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

fn event_constant(name: &str) -> String {
    format!("<util:constant static-field=\"{}.{}\"/>", beans::EVENT_TYPE, name)
}
