use std::time::Duration;

use crate::persistence::leaderboard;
use crate::state::AppState;

const REBUILD_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Periodically rebuild the standard leaderboard snapshots. One task owns
/// every key, which keeps snapshot generation single-writer.
pub fn spawn_snapshot_job(state: AppState) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(REBUILD_INTERVAL);
        loop {
            ticker.tick().await;
            let as_of = state.config.local_today();
            if let Err(err) =
                leaderboard::rebuild_standard_snapshots(&state.conn, as_of, state.config.utc_offset)
                    .await
            {
                tracing::error!("Leaderboard snapshot rebuild failed: {}", err);
            }
        }
    });
}
