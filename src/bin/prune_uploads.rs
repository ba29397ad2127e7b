//! Deletes uploaded files that no stored content references.
//!
//! Pass `--dry-run` to only list what would be removed. Files modified
//! within the last hour are skipped because a request may still be about
//! to reference them.

use std::time::Duration;

use corporate_site::db::establish_connection_pool;
use corporate_site::models::config::ServerConfig;
use corporate_site::repository::{DieselRepository, UploadReferenceReader};
use corporate_site::uploads::{UploadStorage, orphaned_uploads};

const GRACE_PERIOD: Duration = Duration::from_secs(60 * 60);

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let dry_run = std::env::args().skip(1).any(|arg| arg == "--dry-run");

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);
    let storage = UploadStorage::new(&server_config.upload_dir);

    let referenced = match repo.list_upload_references() {
        Ok(paths) => paths,
        Err(e) => {
            log::error!("Failed to collect upload references: {e}");
            std::process::exit(1);
        }
    };
    let stored = match storage.list_older_than(GRACE_PERIOD) {
        Ok(paths) => paths,
        Err(e) => {
            log::error!("Failed to read {}: {e}", storage.root().display());
            std::process::exit(1);
        }
    };

    let orphans = orphaned_uploads(&stored, &referenced);
    for path in &orphans {
        if dry_run {
            log::info!("Would remove {path}");
        } else {
            storage.remove(path);
        }
    }
    log::info!(
        "{} of {} settled files unreferenced",
        orphans.len(),
        stored.len()
    );
}
