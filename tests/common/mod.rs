#![allow(dead_code)]

use vm_wizard_links::domain::entities::Template;
use vm_wizard_links::domain::entities::template::SAP_HANA_WORKLOAD;

pub fn common_template(name: &str) -> Template {
    Template::new(name, "openshift").common()
}

pub fn user_template(name: &str, namespace: &str) -> Template {
    Template::new(name, namespace)
}

pub fn sap_hana_template(name: &str, namespace: &str) -> Template {
    Template::new(name, namespace)
        .common()
        .with_workload(SAP_HANA_WORKLOAD)
}

/// Query part of a link, without the `?`.
pub fn query_of(link: &str) -> &str {
    link.split_once('?').map(|(_, q)| q).unwrap_or_default()
}

/// Decoded key/value pairs of a link's query.
pub fn query_pairs(link: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query_of(link).as_bytes())
        .into_owned()
        .collect()
}
