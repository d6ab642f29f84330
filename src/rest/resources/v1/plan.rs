//! Billing plan resource.
//!
//! A plan prices a product: an ordered list of billing cycles (trial cycles
//! first, then regular ones), payment preferences and taxes. Plans move
//! between `CREATED`, `ACTIVE` and `INACTIVE`; only active plans accept new
//! subscriptions.
//!
//! # Example
//!
//! ```rust,ignore
//! use paypal_subscriptions::rest::RestResource;
//! use paypal_subscriptions::rest::resources::v1::{Plan, PlanListParams, PricingSchemeList};
//! use paypal_subscriptions::rest::resources::v1::common::Money;
//!
//! let mut plan = Plan::create(&client, &attrs).await?;
//! plan.activate(&client).await?;
//!
//! let schemes = PricingSchemeList::new().with_fixed_price(2, Money::new("USD", "50"));
//! plan.update_pricing(&client, &schemes).await?;
//!
//! let params = PlanListParams {
//!     product_id: Some("PROD-XXCD1234QWER65782".to_string()),
//!     ..Default::default()
//! };
//! let plans = Plan::all(&client, Some(params)).await;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{codec, ResourceError, ResourceOperation, ResourcePath, RestResource};
use crate::{HttpMethod, RestClient};

use super::common::{LinkDescription, Money};
use super::pricing::{PricingScheme, PricingSchemeList};

/// The lifecycle status of a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanStatus {
    /// Created but not yet usable.
    Created,
    /// Deactivated; existing subscriptions continue.
    Inactive,
    /// Accepting subscriptions.
    Active,
    /// A status this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// The unit of a billing frequency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntervalUnit {
    /// Daily.
    Day,
    /// Weekly.
    Week,
    /// Monthly.
    Month,
    /// Yearly.
    Year,
    /// A unit this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// How often a billing cycle bills.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Frequency {
    /// The unit.
    pub interval_unit: IntervalUnit,

    /// Units between bills.
    pub interval_count: u32,
}

impl Frequency {
    /// Bills every month.
    pub const MONTHLY: Self = Self {
        interval_unit: IntervalUnit::Month,
        interval_count: 1,
    };
}

/// Whether a billing cycle is a trial or the regular price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenureType {
    /// A trial cycle, billed before the regular ones.
    Trial,
    /// The regular cycle.
    Regular,
    /// A tenure this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// One phase of a plan's pricing.
///
/// `sequence` orders the cycles and must be unique within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillingCycle {
    /// Billing frequency.
    pub frequency: Frequency,

    /// Trial or regular.
    pub tenure_type: TenureType,

    /// Position of the cycle, starting at 1.
    pub sequence: u32,

    /// Times the cycle runs; `0` means until cancelled.
    pub total_cycles: u32,

    /// Price per cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_scheme: Option<PricingScheme>,
}

/// What happens when the setup fee fails.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SetupFeeFailureAction {
    /// Activate the subscription and add the fee to the outstanding balance.
    Continue,
    /// Leave the subscription in `APPROVAL_PENDING`.
    Cancel,
    /// An action this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// Payment settings of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentPreferences {
    /// Bill the outstanding balance in the next cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_bill_outstanding: Option<bool>,

    /// One-time fee charged at subscription start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_fee: Option<Money>,

    /// What to do when the setup fee fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_fee_failure_action: Option<SetupFeeFailureAction>,

    /// Failed payments before the subscription is suspended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_failure_threshold: Option<u32>,
}

/// Tax settings of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Taxes {
    /// The tax percentage (e.g., `"12"`).
    pub percentage: String,

    /// Whether the tax is already included in the billing amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
}

/// A billing plan.
///
/// `status` is an optional creation field: set it to create an `ACTIVE`
/// plan directly, or leave it `None` and let PayPal pick its default.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Plan {
    /// The plan ID.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The ID of the priced product.
    pub product_id: String,

    /// The plan name.
    pub name: String,

    /// The plan description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlanStatus>,

    /// Billing cycles in sequence order.
    #[serde(default)]
    pub billing_cycles: Vec<BillingCycle>,

    /// Payment settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_preferences: Option<PaymentPreferences>,

    /// Tax settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes: Option<Taxes>,

    /// Whether subscribers may buy more than one unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_supported: Option<bool>,

    /// When the plan was created.
    #[serde(skip_serializing)]
    pub create_time: Option<DateTime<Utc>>,

    /// When the plan was last updated.
    #[serde(skip_serializing)]
    pub update_time: Option<DateTime<Utc>>,

    /// HATEOAS links.
    #[serde(default, skip_serializing)]
    pub links: Vec<LinkDescription>,
}

impl RestResource for Plan {
    type AllParams = PlanListParams;

    const NAME: &'static str = "Plan";
    const COLLECTION_KEY: &'static str = "plans";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "billing/plans/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "billing/plans"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "billing/plans"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "billing/plans/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Action("activate"),
            &["id"],
            "billing/plans/{id}/activate",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Action("deactivate"),
            &["id"],
            "billing/plans/{id}/deactivate",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Action("update-pricing-schemes"),
            &["id"],
            "billing/plans/{id}/update-pricing-schemes",
        ),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Plan {
    /// Returns the billing cycle with the given sequence.
    #[must_use]
    pub fn billing_cycle(&self, sequence: u32) -> Option<&BillingCycle> {
        self.billing_cycles.iter().find(|c| c.sequence == sequence)
    }

    /// Activates the plan.
    ///
    /// On success the local `status` becomes `ACTIVE`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Remote`] if PayPal rejects the transition.
    /// Returns [`ResourceError::PathResolutionFailed`] if the plan has no `id`.
    pub async fn activate(&mut self, client: &RestClient) -> Result<(), ResourceError> {
        self.transition(client, "activate", PlanStatus::Active).await
    }

    /// Deactivates the plan.
    ///
    /// On success the local `status` becomes `INACTIVE`.
    ///
    /// # Errors
    ///
    /// Same as [`Plan::activate`].
    pub async fn deactivate(&mut self, client: &RestClient) -> Result<(), ResourceError> {
        self.transition(client, "deactivate", PlanStatus::Inactive).await
    }

    /// Replaces the prices of the given billing cycles.
    ///
    /// Local billing cycles are not modified; call `find` to observe the new
    /// prices.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Remote`] if PayPal rejects the overrides,
    /// e.g., when a `billing_cycle_sequence` appears twice.
    pub async fn update_pricing(
        &self,
        client: &RestClient,
        schemes: &PricingSchemeList,
    ) -> Result<(), ResourceError> {
        let id = self.require_id("update-pricing-schemes")?;
        let body = codec::encode(Self::NAME, schemes)?;
        Self::invoke_action(client, id, "update-pricing-schemes", Some(body)).await?;
        Ok(())
    }

    async fn transition(
        &mut self,
        client: &RestClient,
        action: &'static str,
        target: PlanStatus,
    ) -> Result<(), ResourceError> {
        let id = self.require_id(action)?;
        Self::invoke_action(client, id, action, None).await?;
        self.status = Some(target);
        Ok(())
    }

    fn require_id(&self, operation: &'static str) -> Result<&str, ResourceError> {
        self.id().filter(|id| !id.is_empty()).ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation,
        })
    }
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PlanListParams {
    /// Only plans of this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// Only these plans (sent comma-separated).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_ids: Option<Vec<String>>,

    /// Items per page (1-20).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// The first page to fetch (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Ask PayPal to include `total_items` and `total_pages`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_required: Option<bool>,
}
