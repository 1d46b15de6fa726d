//! Cache command - resolve and list cache directories

use crate::cache::{AppDataRoot, CacheResolver, ModelCacheEntry};
use crate::cli::args::{CacheAction, CacheArgs, CacheTarget, OutputFormat};
use crate::config::Config;
use crate::error::LicResult;
use crate::session::ModelSession;
use console::style;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Execute the cache command
pub async fn execute(args: CacheArgs, config: &Config, data_dir: Option<&Path>) -> LicResult<()> {
    let root = AppDataRoot::resolve(data_dir.or(config.cache.root.as_deref()))?;
    debug!("Data root: {}", root.path().display());

    match args.action {
        CacheAction::Path { target, model } => show_path(root, target, model),
        CacheAction::Init { model } => init_caches(root, model),
        CacheAction::List { format } => list_caches(&CacheResolver::new(root), format),
    }
}

fn session_for(model: Option<PathBuf>) -> LicResult<ModelSession> {
    match model {
        Some(file) => ModelSession::with_file(file),
        None => Ok(ModelSession::new()),
    }
}

fn show_path(root: AppDataRoot, target: CacheTarget, model: Option<PathBuf>) -> LicResult<()> {
    let session = session_for(model)?;
    root.ensure_exists()?;
    let resolver = CacheResolver::new(root);

    let path = match target {
        CacheTarget::Root => resolver.root_cache()?,
        CacheTarget::Model => resolver.model_cache(&session)?,
        CacheTarget::Purpose(purpose) => resolver.named_cache(purpose, &session)?,
    };

    println!("{}", path.display());
    Ok(())
}

fn init_caches(root: AppDataRoot, model: PathBuf) -> LicResult<()> {
    let session = ModelSession::with_file(model)?;
    root.ensure_exists()?;
    let resolver = CacheResolver::new(root);

    for (purpose, path) in resolver.ensure_all(&session)? {
        println!(
            "  {} {:<13} {}",
            style("✓").green(),
            purpose.tag(),
            path.display()
        );
    }

    Ok(())
}

fn list_caches(resolver: &CacheResolver, format: OutputFormat) -> LicResult<()> {
    let caches = resolver.list_model_caches()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&caches)?),
        OutputFormat::Plain => {
            for cache in &caches {
                println!("{}", cache.name);
            }
        }
        OutputFormat::Table if caches.is_empty() => println!("No model caches found."),
        OutputFormat::Table => print_cache_table(&caches),
    }

    Ok(())
}

fn print_cache_table(caches: &[ModelCacheEntry]) {
    println!("{:<40} {:<20}", "MODEL", "MODIFIED");
    println!("{}", "-".repeat(60));

    for cache in caches {
        let modified = cache
            .modified
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<40} {:<20}", cache.name, modified);
    }

    println!();
    println!("Total: {} model cache(s)", caches.len());
}
