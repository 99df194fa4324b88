//! SampleData entity and its request shape.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

pub const NAME_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Stored row of the `sample_data` table.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SampleData {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Candidate record sent by clients on create and update.
///
/// `id` and `created_at` are accepted but never written. On update, a present
/// `updated_at` (including `null`) is the value the client last read and guards the
/// write; an absent one makes the update an unconditional overwrite.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SampleDataInput {
    #[serde(default, alias = "Id")]
    pub id: Option<i32>,
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    #[serde(default, alias = "CreatedAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "UpdatedAt", deserialize_with = "present")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub updated_at: Option<Option<DateTime<Utc>>>,
}

/// Maps a present field to `Some`, so `null` and a missing key stay distinguishable.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl SampleDataInput {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        if self.name.chars().count() > NAME_MAX_CHARS {
            return Err(AppError::Validation(format!(
                "name must be at most {} characters",
                NAME_MAX_CHARS
            )));
        }
        if let Some(d) = &self.description {
            if d.chars().count() > DESCRIPTION_MAX_CHARS {
                return Err(AppError::Validation(format!(
                    "description must be at most {} characters",
                    DESCRIPTION_MAX_CHARS
                )));
            }
        }
        Ok(())
    }
}

/// Insert payload; the id is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewSampleData {
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Overwrite of an existing row. `Some(token)` only applies while the stored
/// `updated_at` equals `token`; `None` overwrites unconditionally.
#[derive(Debug, Clone)]
pub struct SampleDataChange {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub expected_updated_at: Option<Option<DateTime<Utc>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> SampleDataInput {
        SampleDataInput {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn name_is_required() {
        assert!(matches!(input("").validate(), Err(AppError::Validation(_))));
        assert!(matches!(input("   ").validate(), Err(AppError::Validation(_))));
        assert!(input("foo").validate().is_ok());
    }

    #[test]
    fn length_limits_count_chars() {
        assert!(input(&"é".repeat(NAME_MAX_CHARS)).validate().is_ok());
        assert!(input(&"a".repeat(NAME_MAX_CHARS + 1)).validate().is_err());

        let mut i = input("ok");
        i.description = Some("d".repeat(DESCRIPTION_MAX_CHARS));
        assert!(i.validate().is_ok());
        i.description = Some("d".repeat(DESCRIPTION_MAX_CHARS + 1));
        assert!(i.validate().is_err());
    }

    #[test]
    fn accepts_pascal_and_camel_case() {
        let a: SampleDataInput = serde_json::from_str(r#"{"Id":3,"Name":"x","UpdatedAt":null}"#).unwrap();
        assert_eq!(a.id, Some(3));
        assert_eq!(a.name, "x");
        assert_eq!(a.updated_at, Some(None));
        let b: SampleDataInput =
            serde_json::from_str(r#"{"id":4,"name":"y","description":"d","updatedAt":"2024-01-02T03:04:05Z"}"#)
                .unwrap();
        assert_eq!(b.id, Some(4));
        assert_eq!(b.description.as_deref(), Some("d"));
        assert!(matches!(b.updated_at, Some(Some(_))));
    }

    #[test]
    fn missing_token_differs_from_null_token() {
        let absent: SampleDataInput = serde_json::from_str(r#"{"id":1,"name":"x"}"#).unwrap();
        assert_eq!(absent.updated_at, None);
        let null: SampleDataInput = serde_json::from_str(r#"{"id":1,"name":"x","updatedAt":null}"#).unwrap();
        assert_eq!(null.updated_at, Some(None));
    }

    #[test]
    fn serializes_camel_case_with_null_updated_at() {
        let row = SampleData {
            id: 1,
            name: "foo".into(),
            description: None,
            created_at: Utc::now(),
            updated_at: None,
        };
        let v = serde_json::to_value(&row).unwrap();
        assert_eq!(v["id"], 1);
        assert!(v.get("createdAt").is_some());
        assert!(v["updatedAt"].is_null());
    }
}
