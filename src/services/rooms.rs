use crate::error::Result;
use crate::models::room::Room;
use sqlx::SqlitePool;

/// Read-only view over the `rooms` table.
#[derive(Clone)]
pub struct RoomRegistry {
    pool: SqlitePool,
}

impl RoomRegistry {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All rooms in insertion order. A row that fails to decode fails the whole call.
    pub async fn list_rooms(&self) -> Result<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>(
            "SELECT id, number, capacity, status FROM rooms ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }
}
