//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[catalog]");
    ctx.output.kv("source", &ctx.config.catalog.source);
    ctx.output.kv("timeout_ms", &ctx.config.catalog.timeout_ms.to_string());

    ctx.output.info("[listing]");
    ctx.output.kv("page_size", &ctx.config.listing.page_size.to_string());
    ctx.output.kv("debounce_ms", &ctx.config.listing.debounce_ms.to_string());
    ctx.output.kv("featured_count", &ctx.config.listing.featured_count.to_string());
    ctx.output.kv("related_count", &ctx.config.listing.related_count.to_string());

    ctx.output.info("[generator]");
    ctx.output.kv("output", &ctx.config.generator.output.display().to_string());
    if let Some(seed) = ctx.config.generator.seed {
        ctx.output.kv("seed", &seed.to_string());
    }

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(config_path) = ctx.config_path.as_ref() else {
        bail!("No config file found. Run `parts config init` to create one.");
    };
    let config_path = config_path.to_string_lossy();

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.validate();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.listing.debounce_ms == 0 {
        warnings.push("listing.debounce_ms is 0; every keystroke triggers a search".to_string());
    }
    if ctx.config.listing.related_count == 0 {
        warnings.push("listing.related_count is 0; detail pages show no related products".to_string());
    }

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

fn get_config_value(config: &CliConfig, key: &str) -> Result<serde_json::Value> {
    let parts: Vec<&str> = key.split('.').collect();

    let value = match parts.as_slice() {
        ["catalog", "source"] => config.catalog.source.clone().into(),
        ["catalog", "timeout_ms"] => config.catalog.timeout_ms.into(),
        ["listing", "page_size"] => config.listing.page_size.into(),
        ["listing", "debounce_ms"] => config.listing.debounce_ms.into(),
        ["listing", "featured_count"] => config.listing.featured_count.into(),
        ["listing", "related_count"] => config.listing.related_count.into(),
        ["generator", "output"] => config.generator.output.display().to_string().into(),
        ["generator", "seed"] => config.generator.seed.into(),
        _ => bail!("Unknown config key: {}", key),
    };

    Ok(value)
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["catalog", "source"] => config.catalog.source = value.to_string(),
        ["catalog", "timeout_ms"] => config.catalog.timeout_ms = value.parse()?,
        ["listing", "page_size"] => config.listing.page_size = value.parse()?,
        ["listing", "debounce_ms"] => config.listing.debounce_ms = value.parse()?,
        ["listing", "featured_count"] => config.listing.featured_count = value.parse()?,
        ["listing", "related_count"] => config.listing.related_count = value.parse()?,
        ["generator", "output"] => config.generator.output = value.into(),
        ["generator", "seed"] => config.generator.seed = Some(value.parse()?),
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}
