//! Configuration Loader
//!
//! Reads an optional JSON override from `<meta name="todo-config" content="...">`.

use leptos::prelude::document;
use todo_core::{AppConfig, DomainResult};

const CONFIG_META: &str = r#"meta[name="todo-config"]"#;

/// Defaults when the tag is absent; an error when its content is malformed
pub fn load() -> DomainResult<AppConfig> {
    match meta_content() {
        Some(raw) => AppConfig::from_json(&raw),
        None => Ok(AppConfig::default()),
    }
}

fn meta_content() -> Option<String> {
    document()
        .query_selector(CONFIG_META)
        .ok()
        .flatten()?
        .get_attribute("content")
}
