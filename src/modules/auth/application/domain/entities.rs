use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity key shared by every module that records ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
    pub is_student: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// A freshly registered student account.
    pub fn new_student(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            is_admin: false,
            is_student: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn new_admin(username: String, email: String, password_hash: String) -> Self {
        Self {
            is_admin: true,
            is_student: false,
            ..Self::new_student(username, email, password_hash)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_round_trips_through_uuid() {
        let raw = Uuid::new_v4();
        let id = UserId::from(raw);
        assert_eq!(id.value(), raw);
        assert_eq!(Uuid::from(id), raw);
        assert_eq!(id.to_string(), raw.to_string());
    }

    #[test]
    fn admin_is_not_a_student() {
        let admin = User::new_admin("root".into(), "root@kampus.ac.id".into(), "h".into());
        assert!(admin.is_admin);
        assert!(!admin.is_student);

        let student = User::new_student("budi".into(), "budi@kampus.ac.id".into(), "h".into());
        assert!(!student.is_admin);
        assert!(student.is_student);
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User::new_student("budi".into(), "budi@kampus.ac.id".into(), "secret".into());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
