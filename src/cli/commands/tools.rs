//! Tools command - show, check and change tool paths

use crate::cli::args::{OutputFormat, ToolsAction, ToolsArgs};
use crate::config::{Config, ConfigManager, ToolPaths};
use crate::error::{LicError, LicResult};
use crate::settings::{path_statuses, Field, SettingsDraft, Validation};
use crate::ui::{self, UiContext};
use std::path::{Path, PathBuf};

/// Execute the tools command
pub async fn execute(args: ToolsArgs, config: &Config, manager: &ConfigManager) -> LicResult<()> {
    match args.action {
        None => show(&config.tools, OutputFormat::Table),
        Some(ToolsAction::Show { format }) => show(&config.tools, format),
        Some(ToolsAction::Check) => check(&config.tools),
        Some(ToolsAction::Set { ldraw, l3p, povray }) => {
            set(config, manager, ldraw, l3p, povray).await
        }
    }
}

fn display_path(path: &Path, validation: &Validation) -> String {
    match validation {
        Validation::Unset => "(not set)".to_string(),
        _ => path.display().to_string(),
    }
}

fn show(tools: &ToolPaths, format: OutputFormat) -> LicResult<()> {
    let statuses = path_statuses(tools);

    match format {
        OutputFormat::Json => {
            #[derive(serde::Serialize)]
            struct ToolJson<'a> {
                name: String,
                path: &'a Path,
                #[serde(flatten)]
                validation: &'a Validation,
            }

            let json: Vec<ToolJson<'_>> = statuses
                .iter()
                .map(|(field, path, validation)| ToolJson {
                    name: field.to_string(),
                    path: *path,
                    validation,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Plain => {
            for (field, path, _) in &statuses {
                println!("{}={}", field, path.display());
            }
        }
        OutputFormat::Table => {
            let ctx = UiContext::detect();
            ui::section(&ctx, "Tool paths");
            for (field, path, validation) in &statuses {
                let name = field.to_string();
                ui::path_status(&ctx, &name, &display_path(path, validation), validation);
            }
        }
    }

    Ok(())
}

/// Report every path, then fail if any configured one is invalid
fn check(tools: &ToolPaths) -> LicResult<()> {
    let ctx = UiContext::detect();
    let mut failed = 0;

    for (field, path, validation) in path_statuses(tools) {
        let name = field.to_string();
        match &validation {
            Validation::Valid => ui::step_ok_detail(&ctx, &name, &path.display().to_string()),
            Validation::Unset => ui::step_warn_hint(&ctx, &name, "not set"),
            Validation::Invalid { reason } => {
                failed += 1;
                ui::step_error_detail(&ctx, &name, reason);
            }
        }
    }

    if failed > 0 {
        return Err(LicError::ToolCheckFailed(failed));
    }
    Ok(())
}

fn require_valid(field: Field, path: PathBuf, result: Validation) -> LicResult<()> {
    match result {
        Validation::Invalid { reason } => Err(LicError::InvalidToolPath {
            tool: field.to_string(),
            path,
            reason,
        }),
        _ => Ok(()),
    }
}

async fn set(
    config: &Config,
    manager: &ConfigManager,
    ldraw: Option<PathBuf>,
    l3p: Option<PathBuf>,
    povray: Option<PathBuf>,
) -> LicResult<()> {
    let ctx = UiContext::detect();

    if ldraw.is_none() && l3p.is_none() && povray.is_none() {
        ui::step_warn_hint(&ctx, "Nothing to change", "Pass --ldraw, --l3p or --povray");
        return Ok(());
    }

    let mut draft = SettingsDraft::new(&config.tools);
    if let Some(path) = ldraw {
        draft.edit_ldraw(path);
    }
    if let Some(path) = l3p {
        let result = draft.set_l3p(&path);
        require_valid(Field::L3p, path, result)?;
    }
    if let Some(path) = povray {
        let result = draft.set_povray(&path);
        require_valid(Field::PovRay, path, result)?;
    }

    let mut updated = config.clone();
    if let Err(rejected) = draft.confirm(&mut updated) {
        let path = match rejected.field {
            Field::Ldraw => rejected.draft.paths().ldraw.clone(),
            Field::L3p => rejected.draft.paths().l3p.clone(),
            Field::PovRay => rejected.draft.paths().povray.clone(),
        };
        return Err(LicError::InvalidToolPath {
            tool: rejected.field.to_string(),
            path,
            reason: rejected.reason,
        });
    }

    manager.save(&updated).await?;
    ui::step_ok_detail(&ctx, "Tool paths saved", &manager.path().display().to_string());
    Ok(())
}
