use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Department a job posting belongs to.
    JobDepartment, "job department" {
        Engineering => "ENGINEERING",
        Product => "PRODUCT",
        Design => "DESIGN",
        Marketing => "MARKETING",
        Sales => "SALES",
        CustomerSuccess => "CUSTOMER_SUCCESS",
        Operations => "OPERATIONS",
        Finance => "FINANCE",
        Hr => "HR",
        Legal => "LEGAL",
    }
}

/// Job posting entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub startup_id: i64,
    pub title: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub posted_date: Option<NaiveDateTime>,
    #[serde(default = "default_active", deserialize_with = "super::de::null_as_true")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl JobPosting {
    pub fn department_kind(&self) -> Option<JobDepartment> {
        self.department.as_deref()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_active_flag_defaults() {
        let missing: JobPosting = serde_json::from_value(json!({
            "id": 1,
            "startup_id": 7,
            "title": "Backend Engineer"
        }))
        .unwrap();
        let null: JobPosting = serde_json::from_value(json!({
            "id": 2,
            "startup_id": 7,
            "title": "Designer",
            "department": "design",
            "is_active": null
        }))
        .unwrap();
        let closed: JobPosting = serde_json::from_value(json!({
            "id": 3,
            "startup_id": 7,
            "title": "Recruiter",
            "posted_date": "2024-02-01T09:00:00",
            "is_active": false
        }))
        .unwrap();

        assert!(missing.is_active);
        assert!(null.is_active);
        assert_eq!(null.department_kind(), Some(JobDepartment::Design));
        assert!(!closed.is_active);
        assert!(closed.posted_date.is_some());
    }
}
