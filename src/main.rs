use catalog_core::application::{
    ports::{time::Clock, util::SlugGenerator},
    queries::catalog::ListPostsQuery,
    services::ApplicationServices,
};
use catalog_core::config::CatalogConfig;
use catalog_core::domain::catalog::{CategoryRepository, PostRepository, TagRepository};
use catalog_core::infrastructure::{
    database,
    repositories::{SqliteCategoryRepository, SqlitePostRepository, SqliteTagRepository},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = CatalogConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);
    tracing::info!(database_url = config.database_url(), "catalog schema up to date");

    let posts: Arc<dyn PostRepository> = Arc::new(SqlitePostRepository::new(Arc::clone(&pool)));
    let categories: Arc<dyn CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(Arc::clone(&pool)));
    let tags: Arc<dyn TagRepository> = Arc::new(SqliteTagRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(
        posts,
        categories,
        tags,
        clock,
        slugger,
        config.slug_suffix_limit(),
    );

    let queries = &services.catalog_queries;
    let post_count = queries
        .list_posts(ListPostsQuery {
            include_drafts: true,
            ..ListPostsQuery::default()
        })
        .await?
        .len();
    let category_count = queries.list_categories(true).await?.len();
    let tag_count = queries.list_tags(true).await?.len();

    tracing::info!(
        posts = post_count,
        categories = category_count,
        tags = tag_count,
        "catalog ready"
    );

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
