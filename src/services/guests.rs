use crate::config::OccupancyPolicy;
use crate::error::{HotelError, Result};
use crate::models::guest::Guest;
use crate::models::room::RoomStatus;
use sqlx::SqlitePool;

/// Check-in and check-out. Each operation runs in one transaction, so a
/// failure at any step leaves both tables untouched.
#[derive(Clone)]
pub struct GuestLifecycle {
    pool: SqlitePool,
    policy: OccupancyPolicy,
}

impl GuestLifecycle {
    pub fn new(pool: SqlitePool, policy: OccupancyPolicy) -> Self {
        Self { pool, policy }
    }

    pub async fn check_in(&self, name: &str, room_number: i64) -> Result<Guest> {
        let mut tx = self.pool.begin().await?;

        let guest = sqlx::query_as::<_, Guest>(
            "INSERT INTO guests (name, room_number) VALUES (?, ?) RETURNING id, name, room_number",
        )
        .bind(name)
        .bind(room_number)
        .fetch_one(&mut *tx)
        .await?;

        match self.policy {
            OccupancyPolicy::Permissive => {
                sqlx::query("UPDATE rooms SET status = ? WHERE number = ?")
                    .bind(RoomStatus::Occupied)
                    .bind(room_number)
                    .execute(&mut *tx)
                    .await?;
            }
            OccupancyPolicy::Strict => {
                // Only an available room may transition; concurrent check-ins race on this row.
                let updated = sqlx::query(
                    "UPDATE rooms SET status = ? WHERE number = ? AND status = ?",
                )
                .bind(RoomStatus::Occupied)
                .bind(room_number)
                .bind(RoomStatus::Available)
                .execute(&mut *tx)
                .await?
                .rows_affected();

                if updated == 0 {
                    let known: i64 =
                        sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE number = ?")
                            .bind(room_number)
                            .fetch_one(&mut *tx)
                            .await?;

                    log::warn!(
                        "rejected check-in of {:?} to room {}: {}",
                        name,
                        room_number,
                        if known == 0 { "no such room" } else { "not available" }
                    );

                    return Err(if known == 0 {
                        HotelError::NotFound(format!("Room {} not found", room_number))
                    } else {
                        HotelError::Conflict(format!("Room {} is not available", room_number))
                    });
                }
            }
        }

        tx.commit().await?;

        log::info!("guest {} checked in to room {}", guest.id, guest.room_number);
        Ok(guest)
    }

    pub async fn check_out(&self, guest_id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        // Write first so the transaction takes the write lock on its first statement.
        let room_number: i64 =
            match sqlx::query_scalar("DELETE FROM guests WHERE id = ? RETURNING room_number")
                .bind(guest_id)
                .fetch_optional(&mut *tx)
                .await?
            {
                Some(number) => number,
                None => {
                    return Err(HotelError::NotFound(format!(
                        "Guest {} not found",
                        guest_id
                    )))
                }
            };

        sqlx::query("UPDATE rooms SET status = ? WHERE number = ?")
            .bind(RoomStatus::Available)
            .bind(room_number)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        log::info!("guest {} checked out of room {}", guest_id, room_number);
        Ok(())
    }
}
