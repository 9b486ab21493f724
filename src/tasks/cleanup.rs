//! Expired Entry Sweep
//!
//! Background task that periodically drops expired blobs from the product cache.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedMemoryCache;

/// Spawns a task that calls [`MemoryCache::cleanup_expired`] every
/// `cleanup_interval_secs` seconds, until aborted.
///
/// [`MemoryCache::cleanup_expired`]: crate::cache::MemoryCache::cleanup_expired
pub fn spawn_cleanup_task(cache: SharedMemoryCache, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.cleanup_expired();

            if removed > 0 {
                info!("Cache cleanup: removed {} expired entries", removed);
            } else {
                debug!("Cache cleanup: no expired entries found");
            }
        }
    })
}
