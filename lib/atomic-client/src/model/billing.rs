//! Billing: plans, prices and subscriptions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Metadata, id_input, required, required_id};
use crate::{ListParams, Validate, ValidationError};

// Plans

/// A subscription plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Plan {
    pub id: Uuid,
    pub instance_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub active: bool,
    pub hidden: bool,
    pub default: bool,
    pub prices: Vec<Price>,
    pub metadata: Option<Metadata>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `plan_create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct PlanCreateInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for PlanCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)
    }
}

/// Input of `plan_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct PlanUpdateInput {
    #[serde(skip_serializing)]
    pub plan_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for PlanUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("plan_id", &self.plan_id)
    }
}

id_input! {
    /// Input of `plan_get`.
    PlanGetInput { plan_id }
    /// Input of `plan_delete`.
    PlanDeleteInput { plan_id }
}

/// Input of `plan_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct PlanListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Validate for PlanListInput {}

/// Input of `plan_subscribe`: subscribes a user to a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct PlanSubscribeInput {
    #[serde(skip_serializing)]
    pub plan_id: Uuid,
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<u32>,
}

impl Validate for PlanSubscribeInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("plan_id", &self.plan_id)?;
        required_id("user_id", &self.user_id)
    }
}

// Prices

/// A price of a plan, in the smallest currency unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Price {
    pub id: Uuid,
    pub instance_id: Option<Uuid>,
    pub plan_id: Option<Uuid>,
    pub name: Option<String>,
    pub currency: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub recurring_interval: Option<String>,
    pub recurring_interval_count: Option<u32>,
    pub active: bool,
    pub metadata: Option<Metadata>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `price_create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct PriceCreateInput {
    pub plan_id: Uuid,
    pub currency: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_interval_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for PriceCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("plan_id", &self.plan_id)?;
        required("currency", &self.currency)?;
        if self.amount < 0 {
            return Err(ValidationError::new("amount", "must not be negative"));
        }
        Ok(())
    }
}

/// Input of `price_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct PriceUpdateInput {
    #[serde(skip_serializing)]
    pub price_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for PriceUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("price_id", &self.price_id)
    }
}

id_input! {
    /// Input of `price_get`.
    PriceGetInput { price_id }
    /// Input of `price_delete`.
    PriceDeleteInput { price_id }
}

/// Input of `price_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct PriceListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl Validate for PriceListInput {}

// Subscriptions

/// A user subscription to a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Subscription {
    pub id: Uuid,
    pub instance_id: Option<Uuid>,
    pub user_id: Uuid,
    pub plan_id: Uuid,
    pub price_id: Option<Uuid>,
    pub status: Option<String>,
    pub quantity: Option<u32>,
    pub trial_end_at: Option<Timestamp>,
    pub current_period_end_at: Option<Timestamp>,
    pub ended_at: Option<Timestamp>,
    pub metadata: Option<Metadata>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `subscription_create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct SubscriptionCreateInput {
    pub user_id: Uuid,
    pub plan_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for SubscriptionCreateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("user_id", &self.user_id)?;
        required_id("plan_id", &self.plan_id)
    }
}

/// Input of `subscription_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct SubscriptionUpdateInput {
    #[serde(skip_serializing)]
    pub subscription_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Validate for SubscriptionUpdateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required_id("subscription_id", &self.subscription_id)
    }
}

id_input! {
    /// Input of `subscription_get`.
    SubscriptionGetInput { subscription_id }
    /// Input of `subscription_delete`.
    SubscriptionDeleteInput { subscription_id }
}

/// Input of `subscription_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct SubscriptionListInput {
    #[serde(flatten)]
    pub page: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Validate for SubscriptionListInput {}
