use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[sqlx(type_name = "role", rename_all = "lowercase")]
pub enum Role {
    Student,
    Tutor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trips_through_string() {
        assert_eq!(Role::Tutor.to_string(), "tutor");
        assert_eq!(Role::from_str("student").unwrap(), Role::Student);
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Role::from_str("admin").is_err());
    }
}
