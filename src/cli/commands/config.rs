//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{LicError, LicResult};
use crate::ui::{self, UiContext};
use std::path::PathBuf;

/// Keys accepted by `config set`
const VALID_KEYS: [&str; 8] = [
    "general.verbose",
    "general.log_format",
    "tools.ldraw",
    "tools.l3p",
    "tools.povray",
    "cache.root",
    "render.l3p_access_log",
    "render.povray_access_log",
];

/// Execute the config command
pub async fn execute(args: ConfigArgs, config: &Config, manager: &ConfigManager) -> LicResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => {
            let mut updated = config.clone();
            apply_value(&mut updated, &key, &value)?;
            manager.save(&updated).await?;
            ui::step_ok(&UiContext::detect(), &format!("Set {} = {}", key, value));
        }
    }

    Ok(())
}

fn show_config(config: &Config) -> LicResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

async fn init_config(manager: &ConfigManager, force: bool) -> LicResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;
    ui::step_ok_detail(&ctx, "Configuration initialized", &path.display().to_string());

    Ok(())
}

/// Set a dot-separated key on `config`.
///
/// Tool paths set here are stored as given; `lic tools set` is the
/// validated route.
fn apply_value(config: &mut Config, key: &str, value: &str) -> LicResult<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "verbose"] => config.general.verbose = parse_bool(value)?,
        ["general", "log_format"] => config.general.log_format = parse_log_format(value)?,

        ["tools", "ldraw"] => config.tools.ldraw = PathBuf::from(value),
        ["tools", "l3p"] => config.tools.l3p = PathBuf::from(value),
        ["tools", "povray"] => config.tools.povray = PathBuf::from(value),

        ["cache", "root"] if value.is_empty() => config.cache.root = None,
        ["cache", "root"] => config.cache.root = Some(PathBuf::from(value)),

        ["render", "l3p_access_log"] => config.render.l3p_access_log = parse_bool(value)?,
        ["render", "povray_access_log"] => config.render.povray_access_log = parse_bool(value)?,

        _ => {
            return Err(LicError::User(format!(
                "Unknown config key: {}. Valid keys: {}",
                key,
                VALID_KEYS.join(", ")
            )))
        }
    }

    Ok(())
}

fn parse_bool(value: &str) -> LicResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(LicError::User(format!(
            "Invalid boolean value: {}. Use true/false",
            value
        ))),
    }
}

fn parse_log_format(value: &str) -> LicResult<String> {
    match value {
        "text" | "json" => Ok(value.to_string()),
        _ => Err(LicError::User(format!(
            "Invalid log format: {}. Use text or json",
            value
        ))),
    }
}
