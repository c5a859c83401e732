use anyhow::{Context, Result};
use clap::Parser;
use cookie_consent::config::{CategoryConfig, Config};
use cookie_consent::consent::CommitDispatcher;
use cookie_consent::logging::init_tracing;
use cookie_consent::storage::{ConsentRecord, ConsentStore, FileConsentStore, MemoryConsentStore};
use cookie_consent::ui::app::App;
use cookie_consent::ui::events::AppEvent;
use cookie_consent::ui::runtime;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "cookie-consent", version, about = "Ask for cookie consent in the terminal")]
struct Args {
    /// Config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Identifier the decision is recorded under.
    #[arg(long)]
    app_id: Option<String>,

    /// Offered category as `id` or `id=Label`. Repeat to offer several;
    /// replaces the configured list.
    #[arg(long = "category", value_name = "ID[=LABEL]", value_parser = parse_category)]
    categories: Vec<CategoryConfig>,

    /// Collapsed view text.
    #[arg(long)]
    small_text: Option<String>,

    /// Expanded view text.
    #[arg(long)]
    large_text: Option<String>,

    /// Header image reference.
    #[arg(long)]
    image: Option<String>,

    /// Consent store file.
    #[arg(long)]
    store: Option<PathBuf>,

    /// Keep decisions in memory instead of writing them.
    #[arg(long)]
    dry_run: bool,

    /// Show the dialog even if a decision is already recorded.
    #[arg(long)]
    force: bool,
}

fn parse_category(raw: &str) -> Result<CategoryConfig, String> {
    let (id, label) = match raw.split_once('=') {
        Some((id, label)) => (id.trim(), label.trim()),
        None => (raw.trim(), raw.trim()),
    };
    if id.is_empty() {
        return Err("category id must not be empty".to_string());
    }
    Ok(CategoryConfig {
        id: id.to_string(),
        label: label.to_string(),
        description: None,
    })
}

fn load_config(args: &Args) -> Result<Config> {
    let path = args.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;

    if let Some(app_id) = &args.app_id {
        config.dialog.app_id = app_id.clone();
    }
    if !args.categories.is_empty() {
        config.categories = args.categories.clone();
    }
    if let Some(text) = &args.small_text {
        config.dialog.small_text = Some(text.clone());
    }
    if let Some(text) = &args.large_text {
        config.dialog.large_text = Some(text.clone());
    }
    if let Some(image) = &args.image {
        config.dialog.image = Some(image.clone());
    }
    if let Some(store) = &args.store {
        config.storage.path = Some(store.clone());
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(&args)?;
    let app_id = config.dialog.app_id.clone();

    let file_store = FileConsentStore::new(
        config
            .storage
            .path
            .clone()
            .unwrap_or_else(FileConsentStore::default_path),
    );

    if let Some(record) = existing_decision(&args, &file_store, &app_id)? {
        tracing::info!(app_id = %app_id, record_id = %record.id, "Consent already recorded");
        println!(
            "Consent already recorded for '{}': {}",
            app_id,
            join_ids(record.categories.iter().map(|id| id.as_str()))
        );
        return Ok(());
    }

    let store: Arc<dyn ConsentStore> = if args.dry_run {
        Arc::new(MemoryConsentStore::new())
    } else {
        Arc::new(file_store)
    };

    let app = runtime::run(config.host.tick_rate(), |events| {
        let on_done = Box::new(move || {
            let _ = events.send(AppEvent::ConsentRecorded);
        });
        App::new(&config, CommitDispatcher::new(store, app_id.clone(), on_done), true)
    })?;

    match app.recorded() {
        Some(ids) => println!(
            "Consent recorded for '{}': {}",
            app_id,
            join_ids(ids.iter().map(|id| id.as_str()))
        ),
        None => println!("No consent decision recorded for '{}'", app_id),
    }
    Ok(())
}

/// A decision already on file means the dialog is not mounted, unless the
/// run is forced or writes nowhere.
fn existing_decision(
    args: &Args,
    store: &FileConsentStore,
    app_id: &str,
) -> Result<Option<ConsentRecord>> {
    if args.dry_run || args.force {
        return Ok(None);
    }
    store
        .latest(app_id)
        .with_context(|| format!("reading {}", store.path().display()))
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    let joined = ids.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}
