#![allow(dead_code)]

use hotel_ops::{db, RoomStatus};
use sqlx::SqlitePool;

pub async fn setup_pool() -> SqlitePool {
    db::connect_in_memory().await.unwrap()
}

pub async fn provision_room(pool: &SqlitePool, number: i64, capacity: i64, status: &str) {
    sqlx::query("INSERT INTO rooms (number, capacity, status) VALUES (?, ?, ?)")
        .bind(number)
        .bind(capacity)
        .bind(status)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn room_status(pool: &SqlitePool, number: i64) -> RoomStatus {
    sqlx::query_scalar("SELECT status FROM rooms WHERE number = ?")
        .bind(number)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn guest_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM guests")
        .fetch_one(pool)
        .await
        .unwrap()
}
