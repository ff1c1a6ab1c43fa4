use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub room_number: i64,
}

/// Body of `POST /checkin`. Names are accepted as-is, empty included;
/// missing fields take their zero value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckIn {
    pub name: String,
    pub room_number: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_zero_values() {
        let request: CheckIn = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();
        assert_eq!(request.name, "Alice");
        assert_eq!(request.room_number, 0);

        let request: CheckIn = serde_json::from_str("{}").unwrap();
        assert_eq!(request.name, "");
    }

    #[test]
    fn wrong_field_type_still_fails() {
        assert!(serde_json::from_str::<CheckIn>(r#"{"room_number": "one"}"#).is_err());
    }
}
