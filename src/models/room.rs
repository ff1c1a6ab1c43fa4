use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: i64,
    pub number: i64,
    pub capacity: i64,
    pub status: RoomStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RoomStatus::Occupied).unwrap(),
            "\"occupied\""
        );
        let status: RoomStatus = serde_json::from_str("\"available\"").unwrap();
        assert_eq!(status, RoomStatus::Available);
    }

    #[test]
    fn room_json_shape() {
        let room = Room {
            id: 1,
            number: 101,
            capacity: 2,
            status: RoomStatus::Available,
        };
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "number": 101, "capacity": 2, "status": "available"})
        );
    }
}
