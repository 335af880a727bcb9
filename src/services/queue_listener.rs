// services/queue_listener.rs - Postgres NOTIFY event listener

use sqlx::postgres::PgListener;
use tracing::{info, warn};

use crate::database::manager::{DatabaseError, DatabaseManager};

/// NOTIFY channel carrying application events.
pub const EVENT_CHANNEL: &str = "protrack_events";

/// Subscribe to the event channel and log every payload. Returns only when
/// the connection is lost.
pub async fn run() -> Result<(), DatabaseError> {
    let pool = DatabaseManager::pool().await?;

    let mut listener = PgListener::connect_with(&pool).await?;
    listener.listen(EVENT_CHANNEL).await?;
    info!("Queue listener subscribed to '{}'", EVENT_CHANNEL);

    loop {
        let notification = listener.recv().await?;
        info!("Received message: {}", notification.payload());
    }
}

/// Run the listener as a background task. A failure ends the task with a
/// warning; the HTTP server keeps serving.
pub fn spawn() {
    tokio::spawn(async {
        if let Err(e) = run().await {
            warn!("Queue listener stopped: {}", e);
        }
    });
}
