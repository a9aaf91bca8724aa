use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The administrator account returned by the login endpoint.
///
/// Accepts `_id`, `id` or both (Mongoose sends both when virtuals are on);
/// `_id` wins when they disagree. Always serializes as `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UserRecord")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Wire shape of [`User`] before the two id keys are merged.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    name: String,
    email: String,
    #[serde(default)]
    profile_image: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserRecord> for User {
    type Error = String;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let id = record
            .mongo_id
            .or(record.id)
            .ok_or_else(|| "missing field `id`".to_string())?;
        Ok(Self {
            id,
            name: record.name,
            email: record.email,
            profile_image: record.profile_image,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

impl User {
    /// Name and email for display, e.g. `Ada Lovelace <ada@example.com>`
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            self.email.clone()
        } else {
            format!("{} <{}>", self.name, self.email)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_with_mongo_id() {
        let json = r#"{"_id":"u1","name":"Ada","email":"ada@example.com","password":"hash","createdAt":"2024-05-01T10:00:00Z"}"#;
        let user: User = serde_json::from_str(json).expect("valid user json");
        assert_eq!(user.id, "u1");
        assert_eq!(user.profile_image, None);
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_parse_user_with_both_id_keys() {
        let json = r#"{"_id":"u1","id":"u1","name":"Ada","email":"a@b.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");

        let json = r#"{"id":"virtual","_id":"u2","name":"Ada","email":"a@b.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u2");
    }

    #[test]
    fn test_parse_user_without_any_id_fails() {
        let err = serde_json::from_str::<User>(r#"{"name":"Ada","email":"a@b.com"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field `id`"));
    }

    #[test]
    fn test_stored_user_round_trips() {
        let json = r#"{"_id":"u1","id":"u1","name":"Ada","email":"a@b.com","profileImage":"p.png"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        let stored = serde_json::to_string(&user).unwrap();
        assert_eq!(serde_json::from_str::<User>(&stored).unwrap(), user);
    }

    #[test]
    fn test_serialized_user_omits_password_and_empty_fields() {
        let user = User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            profile_image: None,
            created_at: None,
            updated_at: None,
        };
        let json = serde_json::to_string(&user).expect("serialize");
        assert_eq!(json, r#"{"id":"u1","name":"Ada","email":"ada@example.com"}"#);
    }

    #[test]
    fn test_display_name() {
        let mut user: User =
            serde_json::from_str(r#"{"id":"1","name":"Ada","email":"a@b.com"}"#).unwrap();
        assert_eq!(user.display_name(), "Ada <a@b.com>");
        user.name.clear();
        assert_eq!(user.display_name(), "a@b.com");
    }
}
