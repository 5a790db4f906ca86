use catalog_service::{
    config::{catalog, database},
    errors::Result,
    mapping::Mapper,
    seed::seed_catalog,
    services::CatalogService,
    session::SessionProvider,
};
use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the catalog configuration
    let app_config = catalog::load_default_config()
        .inspect_err(|e| error!("Failed to load catalog configuration: {}", e))?;

    // 4. Connect and make sure the tables exist
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db).await?;

    let sessions = SessionProvider::new(db);

    // 5. Seed an empty catalog
    seed_catalog(&sessions.acquire(), &app_config)
        .await
        .inspect_err(|e| error!("Failed to seed catalog: {}", e))?;

    // 6. Report what the catalog holds
    let catalog = CatalogService::new(sessions.acquire(), Mapper::new(app_config.pictures));
    match (
        catalog.get_products_by_page(0, 1).await,
        catalog.get_brands().await,
        catalog.get_types().await,
    ) {
        (Some(products), Some(brands), Some(types)) => info!(
            products = products.count,
            brands = brands.len(),
            types = types.len(),
            "Catalog ready"
        ),
        _ => warn!("Catalog is reachable but could not be summarized"),
    }

    Ok(())
}
