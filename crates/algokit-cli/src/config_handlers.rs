//! Handler functions for the `config` subcommands.
//!
//! Implements `path`, `get`, `set` and `init` over [`CliConfig`], plus the
//! TOML dotted-key helpers they share. Handlers return the text to print.

use crate::cli::ConfigAction;
use crate::config::{CliConfig, PROJECT_NAME};
use crate::error::{Error, Result};
use std::path::PathBuf;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: &ConfigAction) -> Result<String> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, key),
        ConfigAction::Set { key, value } => cmd_config_set(config_path, key, value),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), *force),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<String> {
    let path = CliConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    if path.exists() {
        Ok(path.display().to_string())
    } else {
        Ok(format!(
            "{}\n(file does not exist; run `{PROJECT_NAME} config init` to create it)",
            path.display()
        ))
    }
}

/// Get a configuration value by dotted key.
///
/// Keys missing from the file report their default value.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = CliConfig::load(config_path)?;
    let value = toml::Value::try_from(&config)?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Set a configuration value by dotted key in the config file.
///
/// The file must exist, and the updated document must still be a valid
/// configuration; otherwise the file is left untouched.
pub fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<String> {
    let path = CliConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{PROJECT_NAME} config init` first.",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    set_nested_value(&mut doc, key, parse_value(value))?;
    doc.clone()
        .try_into::<CliConfig>()
        .map_err(|e| Error::config(format!("Invalid value for '{key}': {e}")))?;

    let toml_str = toml::to_string_pretty(&doc)?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    tracing::debug!(key, value, path = %path.display(), "config updated");
    Ok(format!("Set {key} = {value} in {}", path.display()))
}

/// Create a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<String> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => CliConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = CliConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    Ok(format!("Config file created at {}", path.display()))
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let mut parts: Vec<&str> = key.split('.').collect();
    let last = match parts.pop() {
        Some(last) if !last.is_empty() => last,
        _ => return Err(Error::config("Empty key path")),
    };

    let mut current = root;
    for part in parts {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part)
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;
    table.insert(last.to_string(), value);
    Ok(())
}

/// Parse a string value into a TOML value, auto-detecting the type.
///
/// Priority: bool, integer, float, then string.
pub fn parse_value(s: &str) -> toml::Value {
    match s {
        "true" => return toml::Value::Boolean(true),
        "false" => return toml::Value::Boolean(false),
        _ => {}
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn write_default_config(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, CliConfig::default().to_toml_string().unwrap()).unwrap();
        path
    }

    // ------------------------------------------------------------------------
    // cmd_config_path tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_path_explicit_missing() {
        let out = cmd_config_path(Some("/explicit/config.toml")).unwrap();
        assert!(out.starts_with("/explicit/config.toml"));
        assert!(out.contains("config init"));
    }

    #[test]
    fn test_cmd_config_path_existing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);
        let out = cmd_config_path(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(out, path.display().to_string());
    }

    // ------------------------------------------------------------------------
    // cmd_config_get tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_get_simple_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);
        let out = cmd_config_get(Some(path.to_str().unwrap()), "log_level").unwrap();
        assert_eq!(out, "warn");
    }

    #[test]
    fn test_cmd_config_get_nested_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);
        let out = cmd_config_get(Some(path.to_str().unwrap()), "graph.mst_algorithm").unwrap();
        assert_eq!(out, "prim");
    }

    #[test]
    fn test_cmd_config_get_default_without_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let out = cmd_config_get(Some(path.to_str().unwrap()), "output.format").unwrap();
        assert_eq!(out, "text");
    }

    #[test]
    fn test_cmd_config_get_missing_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);
        let err = cmd_config_get(Some(path.to_str().unwrap()), "nonexistent.key").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_set tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_set_nested_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);
        let p = path.to_str().unwrap();

        cmd_config_set(Some(p), "output.format", "json").unwrap();
        assert_eq!(cmd_config_get(Some(p), "output.format").unwrap(), "json");
        assert_eq!(cmd_config_get(Some(p), "log_level").unwrap(), "warn");
    }

    #[test]
    fn test_cmd_config_set_rejects_invalid_value() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);
        let before = std::fs::read_to_string(&path).unwrap();

        let err = cmd_config_set(Some(path.to_str().unwrap()), "graph.mst_algorithm", "boruvka")
            .unwrap_err();
        assert!(err.to_string().contains("Invalid value"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_cmd_config_set_missing_file() {
        let err = cmd_config_set(Some("/nonexistent/config.toml"), "log_level", "info").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_init tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_init_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("algokit").join("config.toml");

        cmd_config_init(Some(path.to_str().unwrap()), false).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("log_level"));
        assert!(content.contains("[graph]"));
    }

    #[test]
    fn test_cmd_config_init_no_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "existing").unwrap();

        let err = cmd_config_init(Some(path.to_str().unwrap()), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_cmd_config_init_force_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "old content").unwrap();

        cmd_config_init(Some(path.to_str().unwrap()), true).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("log_level"));
    }

    // ------------------------------------------------------------------------
    // Dotted-key helper tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_nested_value() {
        let val: toml::Value = toml::from_str("top = 1\n[graph]\nmst_algorithm = \"prim\"").unwrap();
        assert_eq!(get_nested_value(&val, "top"), Some(&toml::Value::Integer(1)));
        assert_eq!(
            get_nested_value(&val, "graph.mst_algorithm"),
            Some(&toml::Value::String("prim".into()))
        );
        assert!(get_nested_value(&val, "graph.missing").is_none());
        assert!(get_nested_value(&val, "top.deeper").is_none());
    }

    #[test]
    fn test_set_nested_value_creates_section() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut val, "output.format", toml::Value::String("json".into())).unwrap();
        assert_eq!(
            get_nested_value(&val, "output.format"),
            Some(&toml::Value::String("json".into()))
        );
    }

    #[test]
    fn test_set_nested_value_through_scalar_fails() {
        let mut val: toml::Value = toml::from_str("log_level = \"warn\"").unwrap();
        assert!(set_nested_value(&mut val, "log_level.inner", toml::Value::Integer(1)).is_err());
        assert!(set_nested_value(&mut val, "", toml::Value::Integer(1)).is_err());
    }

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("false"), toml::Value::Boolean(false));
        assert_eq!(parse_value("42"), toml::Value::Integer(42));
        assert_eq!(parse_value("-7"), toml::Value::Integer(-7));
        assert_eq!(parse_value("2.5"), toml::Value::Float(2.5));
        assert_eq!(parse_value("kruskal"), toml::Value::String("kruskal".into()));
    }

    #[test]
    fn test_format_toml_value() {
        assert_eq!(format_toml_value(&toml::Value::String("hello".into())), "hello");
        assert_eq!(format_toml_value(&toml::Value::Integer(42)), "42");
        assert_eq!(format_toml_value(&toml::Value::Boolean(true)), "true");
    }
}
