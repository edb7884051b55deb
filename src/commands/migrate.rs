//! Migrate command - Schema management for the users, organizations and
//! workspaces tables.

use tracing::{info, warn};

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    run(&db, args.action)
        .await
        .map_err(|e| AppError::internal(format!("Migration {:?} failed: {}", args.action, e)))
}

async fn run(db: &Database, action: MigrateAction) -> Result<(), sea_orm::DbErr> {
    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Last migration rolled back");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            let pending = status.iter().filter(|m| !m.applied).count();
            for migration in &status {
                let state = if migration.applied { "applied" } else { "pending" };
                println!("{}: {}", migration.name, state);
            }
            info!(total = status.len(), pending, "Migration status listed");
        }
        MigrateAction::Fresh => {
            warn!("Dropping all tables and re-running every migration");
            db.fresh_migrations().await?;
            info!("Fresh migrations applied");
        }
    }

    Ok(())
}
