//! Platform: instances (tenants), background jobs and instance options.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{Metadata, id_input, required, required_id};
use crate::{ListParams, Validate, ValidationError};

// Instances

/// A tenant of the platform, selected per call with the `Atomic-Instance` header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Instance {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub domains: Vec<String>,
    pub origins: Vec<String>,
    pub metadata: Option<Metadata>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `instance_create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct InstanceCreateInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub origins: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for InstanceCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)
    }
}

/// Input of `instance_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct InstanceUpdateInput {
    #[serde(skip_serializing)]
    pub instance_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for InstanceUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("instance_id", &self.instance_id)
    }
}

id_input! {
    /// Input of `instance_get`.
    InstanceGetInput { instance_id }
    /// Input of `instance_delete`.
    InstanceDeleteInput { instance_id }
}

/// Input of `instance_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct InstanceListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Validate for InstanceListInput {}

// Jobs

/// A background job, e.g. a user import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Job {
    pub id: Uuid,
    pub instance_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: String,
    pub state: Option<String>,
    pub data: Option<Value>,
    pub progress: Option<f64>,
    pub error: Option<String>,
    pub scheduled_at: Option<Timestamp>,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `job_create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct JobCreateInput {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<Timestamp>,
}

impl Validate for JobCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("type", &self.kind)
    }
}

/// Input of `job_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct JobUpdateInput {
    #[serde(skip_serializing)]
    pub job_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<Timestamp>,
}

impl Validate for JobUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("job_id", &self.job_id)
    }
}

id_input! {
    /// Input of `job_get`.
    JobGetInput { job_id }
    /// Input of `job_restart`.
    JobRestartInput { job_id }
    /// Input of `job_cancel`.
    JobCancelInput { job_id }
}

/// Input of `job_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct JobListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Validate for JobListInput {}

// Options

/// A named setting of an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct InstanceOption {
    pub instance_id: Option<Uuid>,
    pub name: String,
    pub value: Value,
    pub protected: bool,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `option_get` and `option_remove`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionNameInput {
    /// Option name, substituted into the path.
    #[serde(skip_serializing)]
    pub name: String,
}

impl Validate for OptionNameInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)
    }
}

/// Input of `option_update`: creates the option when it does not exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct OptionUpdateInput {
    #[serde(skip_serializing)]
    pub name: String,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
}

impl Validate for OptionUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)
    }
}

/// Input of `option_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct OptionListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
}

impl Validate for OptionListInput {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::MethodParams;

    #[test]
    fn should_serialize_job_kind_as_type() {
        let input = JobCreateInput {
            kind: "user_import".to_string(),
            data: Some(json!({ "dry_run": true })),
            scheduled_at: None,
        };

        let json = input.to_json().expect("serializable");

        assert_eq!(json, json!({ "type": "user_import", "data": { "dry_run": true } }));
    }

    #[test]
    fn should_require_option_name() {
        let error = Validate::validate(&OptionNameInput::default()).expect_err("no name");

        assert_eq!(error.to_string(), "invalid 'name': is required");
    }

    #[test]
    fn should_send_option_value_only() {
        let input = OptionUpdateInput {
            name: "site.title".to_string(),
            value: json!("My site"),
            protected: None,
        };

        let json = input.to_json().expect("serializable");

        assert_eq!(json, json!({ "value": "My site" }));
    }
}
