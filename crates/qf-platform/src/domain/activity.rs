//! Activity Entity

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_ACTIVITY_STATUS: &str = "pendente";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub process_id: String,
    pub title: String,
    pub description: String,
    pub assigned_to: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    pub due_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    pub fn apply(&self, patch: ActivityPatch, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            process_id: patch.process_id.unwrap_or_else(|| self.process_id.clone()),
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            assigned_to: match patch.assigned_to {
                Some(assigned_to) => assigned_to,
                None => self.assigned_to.clone(),
            },
            due_date: match patch.due_date {
                Some(due_date) => due_date,
                None => self.due_date,
            },
            status: patch.status.unwrap_or_else(|| self.status.clone()),
            created_at: self.created_at,
            updated_at: now,
        }
    }

    pub fn matches(&self, filter: &ActivityFilter) -> bool {
        let process_ok = filter
            .process_id()
            .map_or(true, |process_id| self.process_id == process_id);
        let status_ok = filter
            .status()
            .map_or(true, |status| self.status == status);
        process_ok && status_ok
    }
}

/// Create activity payload; the process comes from the route
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assigned_to: Option<String>,
    #[schema(value_type = Option<String>)]
    pub due_date: Option<NaiveDate>,
}

impl NewActivity {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn assigned_to(mut self, user_id: impl Into<String>) -> Self {
        self.assigned_to = Some(user_id.into());
        self
    }

    pub fn due(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPatch {
    pub process_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub assigned_to: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::domain::deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub due_date: Option<Option<NaiveDate>>,
    pub status: Option<String>,
}

/// Activity list filter; both fields must match when present
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ActivityFilter {
    /// Only activities of this process
    pub process_id: Option<String>,
    /// Only activities with this status
    pub status: Option<String>,
}

impl ActivityFilter {
    pub fn for_process(process_id: impl Into<String>) -> Self {
        Self {
            process_id: Some(process_id.into()),
            status: None,
        }
    }

    /// Process criterion; a blank value (`?processId=`) means no filter.
    pub fn process_id(&self) -> Option<&str> {
        self.process_id.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Status criterion; a blank value means no filter.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity() -> Activity {
        let now = Utc::now();
        Activity {
            id: "activity-1".to_string(),
            process_id: "process-1".to_string(),
            title: "Collect signatures".to_string(),
            description: String::new(),
            assigned_to: Some("user-1".to_string()),
            due_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            status: DEFAULT_ACTIVITY_STATUS.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_filter_matching() {
        let a = activity();
        assert!(a.matches(&ActivityFilter::default()));
        assert!(a.matches(&ActivityFilter::for_process("process-1")));
        assert!(!a.matches(&ActivityFilter::for_process("process-2")));

        let filter = ActivityFilter {
            process_id: Some("process-1".to_string()),
            status: Some("concluida".to_string()),
        };
        assert!(!a.matches(&filter));
    }

    #[test]
    fn test_blank_filter_values_are_ignored() {
        let a = activity();
        let filter = ActivityFilter {
            process_id: Some(String::new()),
            status: Some("pendente".to_string()),
        };
        assert_eq!(filter.process_id(), None);
        assert!(a.matches(&filter));

        let filter = ActivityFilter {
            process_id: Some("process-2".to_string()),
            status: Some(" ".to_string()),
        };
        assert!(!a.matches(&filter));
    }

    #[test]
    fn test_patch_clears_assignee_and_due_date() {
        let patch: ActivityPatch =
            serde_json::from_str(r#"{"assignedTo": null, "dueDate": null}"#).unwrap();
        let patched = activity().apply(patch, Utc::now());
        assert_eq!(patched.assigned_to, None);
        assert_eq!(patched.due_date, None);
        assert_eq!(patched.title, "Collect signatures");
    }

    #[test]
    fn test_due_date_format() {
        let payload: NewActivity =
            serde_json::from_str(r#"{"title": "x", "dueDate": "2024-06-30"}"#).unwrap();
        assert_eq!(payload.due_date, NaiveDate::from_ymd_opt(2024, 6, 30));

        let json = serde_json::to_value(activity()).unwrap();
        assert_eq!(json["dueDate"], "2024-05-01");
    }
}
