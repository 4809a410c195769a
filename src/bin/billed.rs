//! Renders the bills page of a seeded in-memory store
//!
//! Usage: `billed [config.yaml] [route]`

use billed::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => BilledConfig::from_yaml_file(&path)?,
        None => BilledConfig::default(),
    };
    let route = args.next().unwrap_or_else(|| RoutePath::Bills.to_string());

    let storage = Arc::new(InMemoryLocalStorage::new());
    User::employee("a@a").store(storage.as_ref())?;

    let document = Arc::new(Document::with_ui(config.ui.clone()));
    let store: Arc<dyn Store> = Arc::new(MockStore::with_fixtures());
    let router = Router::with_form_config(document.clone(), Some(store), storage, config.form.clone());

    router.on_navigate_path(&route).await?;
    println!("{}", document.body());

    Ok(())
}
