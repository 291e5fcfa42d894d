use super::ConfigError;
use std::path::Path;
use std::sync::Arc;
use toml_edit::{Array, DocumentMut, Item, Table, Value};

/// Adds fields introduced after a config file was written.
///
/// `[storage.file_key]` is never created here: its absence is meaningful.
pub async fn migrate_config_if_needed<P: AsRef<Path>>(
    path: P,
    events: Option<&Arc<kodo_events::EventBus>>,
) -> Result<(), ConfigError> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let mut doc = content.parse::<DocumentMut>()?;
    let added_fields = migrate_document(&mut doc)?;

    // Only write if we added fields
    if !added_fields.is_empty() {
        tokio::fs::write(path.as_ref(), doc.to_string()).await?;

        if let Some(event_bus) = events {
            event_bus.emit(kodo_events::AppEvent::ConfigMigrated {
                added_fields: added_fields.clone(),
            });
        }
    }

    Ok(())
}

fn migrate_document(doc: &mut DocumentMut) -> Result<Vec<String>, ConfigError> {
    let mut added_fields = Vec::new();

    migrate_server_section(doc, &mut added_fields)?;
    migrate_storage_section(doc, &mut added_fields)?;

    Ok(added_fields)
}

fn ensure_table<'a>(
    doc: &'a mut DocumentMut,
    name: &str,
    added_fields: &mut Vec<String>,
) -> Result<&'a mut Table, ConfigError> {
    if !doc.contains_key(name) {
        let mut table = Table::new();
        table.set_implicit(true);
        doc[name] = Item::Table(table);
        added_fields.push(name.to_string());
    }

    doc[name]
        .as_table_mut()
        .ok_or_else(|| ConfigError::InvalidConfig(format!("Invalid [{}] section in config", name)))
}

fn migrate_server_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<(), ConfigError> {
    let server = ensure_table(doc, "server", added_fields)?;
    ensure_field(server, "host", Value::from("0.0.0.0"), added_fields);
    ensure_field(server, "port", Value::from(2368), added_fields);
    ensure_field(server, "upload_dir", Value::from("uploads"), added_fields);
    ensure_field(server, "tcp_nodelay", Value::from(true), added_fields);
    ensure_field(server, "timeout_secs", Value::from(60), added_fields);
    ensure_field(server, "max_body_size_mb", Value::from(50), added_fields);

    if !server.contains_key("allowed_origins") {
        let mut arr = Array::new();
        arr.push("*");
        server["allowed_origins"] = Item::Value(Value::Array(arr));
        added_fields.push("server.allowed_origins".to_string());
    }

    Ok(())
}

fn migrate_storage_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<(), ConfigError> {
    let storage = ensure_table(doc, "storage", added_fields)?;
    for key in ["access_key", "secret_key", "bucket", "origin", "upload_url"] {
        ensure_field(storage, key, Value::from(""), added_fields);
    }
    ensure_field(storage, "zone", Value::from("z2"), added_fields);
    ensure_field(storage, "token_ttl_secs", Value::from(3600), added_fields);

    Ok(())
}

fn ensure_field(
    table: &mut Table,
    key: &str,
    default_value: Value,
    added_fields: &mut Vec<String>,
) {
    if !table.contains_key(key) {
        table[key] = Item::Value(default_value);
        added_fields.push(key.to_string());
    }
}
