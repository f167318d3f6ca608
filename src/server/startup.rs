use dioxus_logger::tracing;

use crate::server::{config::Config, error::AppError, service::user::UserService};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the file storage directory, including missing parents.
pub fn ensure_file_storage(config: &Config) -> Result<(), AppError> {
    std::fs::create_dir_all(&config.file_storage_path)?;
    tracing::info!(
        "Using file storage at {}",
        config.file_storage_path.display()
    );
    Ok(())
}

/// Seeds the configured admin account when it does not exist yet.
pub async fn seed_admin(db: &sea_orm::DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if config.admin_username.is_empty() {
        tracing::info!("ADMIN_USERNAME not set, skipping admin seeding");
        return Ok(());
    }

    let created = UserService::new(db)
        .ensure_admin(&config.admin_username)
        .await?;

    if created {
        tracing::info!("Seeded admin user {}", config.admin_username);
    }

    Ok(())
}

/// Mounts `router` under the configured base path.
///
/// Axum refuses to nest at the root, so an empty base path returns the router as is.
pub fn mount<S>(router: axum::Router<S>, config: &Config) -> axum::Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if config.base_path.is_empty() {
        router
    } else {
        axum::Router::new().nest(&config.base_path, router)
    }
}
