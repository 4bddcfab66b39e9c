use serde::{Deserialize, Serialize};

use crate::domain::wire::{non_empty_string, optional_string_or_number};

/// A student record as returned by `/fetch-student` or assembled from the
/// sign-up form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "StudentRow")]
pub struct Student {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Raw `/fetch-student` row. Every spelling the backend has used gets its own
/// column so rows carrying several of them still decode.
#[derive(Debug, Default, Deserialize)]
struct StudentRow {
    username: String,
    #[serde(default, deserialize_with = "non_empty_string")]
    first_name: Option<String>,
    #[serde(default, rename = "firstName", deserialize_with = "non_empty_string")]
    first_name_camel: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    last_name: Option<String>,
    #[serde(default, rename = "lastName", deserialize_with = "non_empty_string")]
    last_name_camel: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    major: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    user_id: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    student_id: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    id: Option<String>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Self {
            username: row.username,
            first_name: row.first_name.or(row.first_name_camel),
            last_name: row.last_name.or(row.last_name_camel),
            major: row.major,
            id: row.user_id.or(row.student_id).or(row.id),
        }
    }
}

impl Student {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }

    /// Name used in greetings: the first name when known, otherwise the username
    pub fn display_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or(&self.username)
    }

    /// "First Last", with "-" standing in for a missing first name
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("-");
        match &self.last_name {
            Some(last) => format!("{first} {last}"),
            None => first.to_string(),
        }
    }
}

/// Body of `POST /create-student`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub major: String,
}

impl From<NewStudent> for Student {
    fn from(value: NewStudent) -> Self {
        Self {
            username: value.username,
            first_name: Some(value.first_name),
            last_name: Some(value.last_name),
            major: Some(value.major),
            id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialize_backend_row() -> serde_json::Result<()> {
        let json = r#"{
            "id": 7,
            "username": "butch",
            "first_name": "Butch",
            "last_name": "Cougar",
            "major": "Computer Science"
        }"#;
        let student: Student = serde_json::from_str(json)?;
        assert_eq!(
            student,
            Student {
                username: "butch".to_string(),
                first_name: Some("Butch".to_string()),
                last_name: Some("Cougar".to_string()),
                major: Some("Computer Science".to_string()),
                id: Some("7".to_string()),
            }
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_camel_case_and_user_id() -> serde_json::Result<()> {
        let json = r#"{"username": "u", "firstName": "Ada", "lastName": "L", "user_id": "abc"}"#;
        let student: Student = serde_json::from_str(json)?;
        assert_eq!(student.first_name.as_deref(), Some("Ada"));
        assert_eq!(student.last_name.as_deref(), Some("L"));
        assert_eq!(student.id.as_deref(), Some("abc"));
        assert_eq!(student.major, None);
        Ok(())
    }

    #[test]
    fn test_user_id_wins_over_row_id() -> serde_json::Result<()> {
        let student: Student = serde_json::from_value(serde_json::json!({
            "id": 3,
            "user_id": 7,
            "username": "butch",
            "first_name": "Butch",
            "firstName": "Ignored"
        }))?;
        assert_eq!(student.id.as_deref(), Some("7"));
        assert_eq!(student.first_name.as_deref(), Some("Butch"));
        Ok(())
    }

    #[test]
    fn test_serialized_student_reads_back() -> serde_json::Result<()> {
        let original = Student {
            username: "kev".to_string(),
            first_name: Some("Kevin".to_string()),
            last_name: None,
            major: Some("Mathematics".to_string()),
            id: Some("1".to_string()),
        };
        let parsed: Student = serde_json::from_value(serde_json::to_value(&original)?)?;
        assert_eq!(parsed, original);
        Ok(())
    }

    #[test]
    fn test_display_name_prefers_first_name() {
        let mut student = Student::new("butch");
        assert_eq!(student.display_name(), "butch");

        student.first_name = Some("Butch".to_string());
        assert_eq!(student.display_name(), "Butch");
    }

    #[test]
    fn test_full_name() {
        let mut student = Student::new("butch");
        assert_eq!(student.full_name(), "-");

        student.last_name = Some("Cougar".to_string());
        assert_eq!(student.full_name(), "- Cougar");

        student.first_name = Some("Butch".to_string());
        assert_eq!(student.full_name(), "Butch Cougar");

        student.last_name = None;
        assert_eq!(student.full_name(), "Butch");
    }

    #[test]
    fn test_student_from_new_student() {
        let new_student = NewStudent {
            username: "kev".to_string(),
            first_name: "Kevin".to_string(),
            last_name: "Smith".to_string(),
            major: "Mathematics".to_string(),
        };
        let student = Student::from(new_student);
        assert_eq!(student.display_name(), "Kevin");
        assert_eq!(student.major.as_deref(), Some("Mathematics"));
        assert_eq!(student.id, None);
    }

    #[test]
    fn test_new_student_wire_format() -> serde_json::Result<()> {
        let body = serde_json::to_value(NewStudent {
            username: "kev".to_string(),
            first_name: "Kevin".to_string(),
            last_name: "Smith".to_string(),
            major: "Mathematics".to_string(),
        })?;
        assert_eq!(
            body,
            serde_json::json!({
                "username": "kev",
                "first_name": "Kevin",
                "last_name": "Smith",
                "major": "Mathematics",
            })
        );
        Ok(())
    }
}
