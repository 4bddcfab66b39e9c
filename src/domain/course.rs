use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::domain::wire::{non_empty_string, optional_string_or_number};

/// Where a student stands with a course
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum CourseStatus {
    Enrolled,
    Passed,
    Failed,
    Withdrawed,
}

impl<'de> Deserialize<'de> for CourseStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        CourseStatus::from_str(raw.trim())
            .map_err(|_| de::Error::custom(format!("unknown course status: {raw}")))
    }
}

/// A course from the student's history, as returned by `/fetch-course-history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseRow")]
pub struct Course {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub prerequisites: Option<String>,
    pub status: CourseStatus,
}

/// Raw history row. Joined queries return both the row `id` and
/// `course_id`, so each spelling gets its own column here.
#[derive(Debug, Default, Deserialize)]
struct CourseRow {
    #[serde(default, deserialize_with = "optional_string_or_number")]
    id: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    course_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    course_name: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    course_description: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    prerequisites: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    course_prerequisites: Option<String>,
    #[serde(default)]
    status: Option<CourseStatus>,
    #[serde(default)]
    course_status: Option<CourseStatus>,
}

impl TryFrom<CourseRow> for Course {
    type Error = String;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let status = row
            .course_status
            .or(row.status)
            .ok_or_else(|| "missing field `course_status`".to_string())?;
        Ok(Self {
            id: row.course_id.or(row.id),
            name: row.course_name.or(row.name).unwrap_or_default(),
            description: row.course_description.or(row.description),
            prerequisites: row.course_prerequisites.or(row.prerequisites),
            status,
        })
    }
}

impl Course {
    /// Splits the delimited prerequisite string into course names.
    ///
    /// Both `,` and `;` separate entries. The literal `none` means no
    /// prerequisites.
    pub fn prerequisites(&self) -> Vec<&str> {
        self.prerequisites
            .as_deref()
            .map(|raw| {
                raw.split([',', ';'])
                    .map(str::trim)
                    .filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case("none"))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Status filter applied to the roadmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CourseFilter {
    #[default]
    All,
    Status(CourseStatus),
}

impl CourseFilter {
    /// All -> Enrolled -> Passed -> Failed -> Withdrawed -> All
    pub fn next(self) -> Self {
        match self {
            CourseFilter::All => CourseStatus::iter()
                .next()
                .map_or(CourseFilter::All, CourseFilter::Status),
            CourseFilter::Status(current) => CourseStatus::iter()
                .skip_while(|status| *status != current)
                .nth(1)
                .map_or(CourseFilter::All, CourseFilter::Status),
        }
    }

    pub fn label(&self) -> String {
        match self {
            CourseFilter::All => "All".to_string(),
            CourseFilter::Status(status) => status.to_string(),
        }
    }

    pub fn matches(&self, course: &Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Status(status) => course.status == *status,
        }
    }

    /// Keeps the courses that match, in their original order
    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Counts of courses per status, in declaration order
pub fn status_counts(courses: &[Course]) -> Vec<(CourseStatus, usize)> {
    CourseStatus::iter()
        .map(|status| {
            let count = courses.iter().filter(|c| c.status == status).count();
            (status, count)
        })
        .collect()
}

/// Display text for an opaque catalog entry: its name, then its description
/// when present. Entries without a recognizable name show their JSON.
pub fn catalog_entry_label(entry: &Value) -> String {
    let field = |keys: &[&str]| {
        keys.iter()
            .filter_map(|key| entry.get(*key))
            .find_map(|value| match value {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    };

    match (
        field(&["name", "course_name", "title"]),
        field(&["description", "course_description"]),
    ) {
        (Some(name), Some(description)) => format!("{name}: {description}"),
        (Some(name), None) => name,
        (None, Some(description)) => description,
        (None, None) => entry.to_string(),
    }
}
