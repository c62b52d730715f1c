//! Migrate command - Applies, reverts and inspects schema migrations.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // The serve command migrates on startup; here the connection is opened
    // bare so each action stays an explicit choice
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Could not reach database: {}", e)))?;

    let outcome = match args.action {
        MigrateAction::Up => {
            tracing::info!("Applying pending migrations");
            db.run_migrations().await
        }
        MigrateAction::Down => {
            tracing::info!("Reverting the most recent migration");
            db.rollback_migration().await
        }
        MigrateAction::Status => {
            let status = db
                .migration_status()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            for (name, applied) in status {
                println!("{} {}", if applied { "[x]" } else { "[ ]" }, name);
            }
            return Ok(());
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-running every migration");
            db.fresh_migrations().await
        }
    };

    outcome.map_err(|e| AppError::internal(e.to_string()))?;
    tracing::info!("Migration command finished");
    Ok(())
}
