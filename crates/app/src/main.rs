use server::Collection;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "items_app={level},server={level}",
            level = settings.app.level
        ))
        .init();

    let items = match settings.server.seed.as_deref() {
        Some(path) => {
            let items = settings::load_seed(path)?;
            tracing::info!("seeded {} items from {path}", items.len());
            Collection::with_items(items)
        }
        None => Collection::new(),
    };

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    server::run_with_listener(items, listener).await?;

    Ok(())
}
