pub mod cluster_xml;
pub mod reference;
