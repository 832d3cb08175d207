//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use vitrine_router::Router;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { name, force } => init_config(name, force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    // Store section
    ctx.output.line("");
    ctx.output.line("[store]");
    ctx.output.kv("name", &ctx.config.store.name);
    ctx.output.kv("base_path", &ctx.config.store.base_path);
    if let Some(ref catalog) = ctx.config.store.catalog {
        ctx.output.kv("catalog", catalog);
    }

    // Checkout section
    ctx.output.line("");
    ctx.output.line("[checkout]");
    ctx.output
        .kv("messaging_domain", &ctx.config.checkout.messaging_domain);
    ctx.output.kv("phone_number", &ctx.config.checkout.phone_number);
    ctx.output
        .kv("currency_prefix", &ctx.config.checkout.currency_prefix);

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = match ctx.config_path {
        Some(ref path) => path.to_string_lossy().to_string(),
        None => find_config_file(&ctx.cwd)?,
    };

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(name: Option<String>, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let name = name.unwrap_or_else(|| ctx.config.store.name.clone());
    fs::write(&config_path, generate_default_config(&name))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(ctx);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn check_config(ctx: &Context) -> (Vec<String>, Vec<String>) {
    let config = &ctx.config;
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if config.store.name.trim().is_empty() {
        errors.push("store.name is required".to_string());
    }

    if let Err(e) = config.checkout_config().validate() {
        errors.push(e.to_string());
    }

    if config.checkout.currency_prefix != "R$" {
        warnings.push(format!(
            "checkout.currency_prefix '{}' differs from what order recipients expect (R$)",
            config.checkout.currency_prefix
        ));
    }

    if !config.store.base_path.starts_with('/') {
        warnings.push(format!(
            "store.base_path '{}' will be treated as '{}'",
            config.store.base_path,
            Router::new(&config.store.base_path).base()
        ));
    }

    if let Some(ref catalog) = config.store.catalog {
        if let Err(e) = ctx.catalog() {
            errors.push(format!("store.catalog '{}': {:#}", catalog, e));
        }
    }

    (errors, warnings)
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["store", "name"] => Ok(config.store.name.clone()),
        ["store", "base_path"] => Ok(config.store.base_path.clone()),
        ["store", "catalog"] => Ok(config
            .store
            .catalog
            .clone()
            .unwrap_or_else(|| "null".to_string())),
        ["checkout", "messaging_domain"] => Ok(config.checkout.messaging_domain.clone()),
        ["checkout", "phone_number"] => Ok(config.checkout.phone_number.clone()),
        ["checkout", "currency_prefix"] => Ok(config.checkout.currency_prefix.clone()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["store", "name"] => config.store.name = value.to_string(),
        ["store", "base_path"] => config.store.base_path = value.to_string(),
        ["store", "catalog"] => config.store.catalog = Some(value.to_string()),
        ["checkout", "messaging_domain"] => config.checkout.messaging_domain = value.to_string(),
        ["checkout", "phone_number"] => config.checkout.phone_number = value.to_string(),
        ["checkout", "currency_prefix"] => config.checkout.currency_prefix = value.to_string(),
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

fn find_config_file(cwd: &std::path::Path) -> Result<String> {
    for name in &CONFIG_FILE_NAMES {
        let path: PathBuf = cwd.join(name);
        if path.exists() {
            return Ok(path.to_string_lossy().to_string());
        }
    }
    bail!("No config file found. Run `vitrine config init` to create one.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_round_trip() {
        let mut config = CliConfig::default();
        set_config_value(&mut config, "checkout.phone_number", "5521977776666").unwrap();
        assert_eq!(
            get_config_value(&config, "checkout.phone_number").unwrap(),
            "5521977776666"
        );
    }

    #[test]
    fn test_unknown_key() {
        let mut config = CliConfig::default();
        assert!(get_config_value(&config, "store.owner").is_err());
        assert!(set_config_value(&mut config, "checkout", "x").is_err());
    }

    #[test]
    fn test_catalog_defaults_to_null() {
        let config = CliConfig::default();
        assert_eq!(get_config_value(&config, "store.catalog").unwrap(), "null");
    }
}
