//! Subscription resource.
//!
//! A subscription binds a subscriber to an active plan. Its status is owned
//! by PayPal; the client only requests transitions:
//!
//! ```text
//! create ──> APPROVAL_PENDING ──(subscriber approves)──> ACTIVE
//! ACTIVE ──suspend──> SUSPENDED ──activate──> ACTIVE
//! ACTIVE | SUSPENDED ──cancel──> CANCELLED (terminal)
//! ```
//!
//! Transitions the server refuses (e.g., cancelling a cancelled
//! subscription) come back as [`ResourceError::Remote`]; nothing is checked
//! locally.
//!
//! # Example
//!
//! ```rust,ignore
//! use paypal_subscriptions::rest::{Patch, RestResource};
//! use paypal_subscriptions::rest::resources::v1::Subscription;
//!
//! let mut subscription = Subscription::create(&client, &attrs).await?;
//! if let Some(url) = subscription.approve_link() {
//!     println!("send the subscriber to {url}");
//! }
//!
//! subscription.suspend(&client, "Customer-requested pause").await?;
//! subscription.activate(&client, Some("Reactivating on customer request")).await?;
//! subscription.cancel(&client, "Not satisfied with the service").await?;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::rest::{
    codec, ensure_success, ResourceError, ResourceOperation, ResourcePath, RestResource,
};
use crate::{HttpMethod, RestClient};

use super::common::{find_link, LinkDescription, Money, ShippingDetail, Subscriber};
use super::transaction::{Transaction, TransactionList};

/// The lifecycle status of a subscription.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    /// Created; waiting for the subscriber's approval.
    ApprovalPending,
    /// Approved but not yet active.
    Approved,
    /// Billing.
    Active,
    /// Paused.
    Suspended,
    /// Cancelled; terminal.
    Cancelled,
    /// Ran out of billing cycles; terminal.
    Expired,
    /// A status this crate does not know yet.
    #[serde(other)]
    Unknown,
}

impl SubscriptionStatus {
    /// Returns `true` for states no transition leaves.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Expired)
    }
}

/// Which shipping address PayPal uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingPreference {
    /// The address on file with PayPal.
    GetFromFile,
    /// No shipping address.
    NoShipping,
    /// The address sent in `subscriber.shipping_address`.
    SetProvidedAddress,
    /// A preference this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// The button shown on the approval page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserAction {
    /// "Continue"; the merchant activates afterwards.
    Continue,
    /// "Subscribe Now"; the subscription activates on approval.
    SubscribeNow,
    /// An action this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// Which funding sources the merchant accepts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayeePreferred {
    /// Any funding source.
    Unrestricted,
    /// Only sources that pay immediately.
    ImmediatePaymentRequired,
    /// A preference this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// Payment method preferences on the approval page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentMethod {
    /// The payer's preferred method (e.g., `PAYPAL`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_selected: Option<String>,

    /// The merchant's funding preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_preferred: Option<PayeePreferred>,
}

/// Branding and redirect settings of the approval flow.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApplicationContext {
    /// The brand shown to the subscriber.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,

    /// BCP 47 locale of the approval page (e.g., `en-US`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Shipping address source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_preference: Option<ShippingPreference>,

    /// The approval button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_action: Option<UserAction>,

    /// Payment method preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,

    /// Where the subscriber lands after approving.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    /// Where the subscriber lands after cancelling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
}

/// The most recent payment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LastPayment {
    /// The amount paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    /// When it was paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

/// Billing state reported by PayPal.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BillingInfo {
    /// The unpaid balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outstanding_balance: Option<Money>,

    /// The most recent payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_payment: Option<LastPayment>,

    /// When the next bill is due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_billing_time: Option<DateTime<Utc>>,

    /// Consecutive failed payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_payments_count: Option<u32>,
}

/// A subscription.
///
/// ## Writable Fields
/// - `plan_id`, `start_time`, `quantity`, `shipping_amount`, `subscriber`,
///   `auto_renewal`, `application_context`, `custom_id`
///
/// ## Read-Only Fields
/// - `id`, `status`, `status_change_note`, `status_update_time`,
///   `billing_info`, `create_time`, `update_time`, `links`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Subscription {
    /// The subscription ID.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The subscribed plan.
    pub plan_id: String,

    /// The lifecycle status.
    #[serde(skip_serializing)]
    pub status: Option<SubscriptionStatus>,

    /// The reason given for the last status change.
    #[serde(skip_serializing)]
    pub status_change_note: Option<String>,

    /// When the status last changed.
    #[serde(skip_serializing)]
    pub status_update_time: Option<DateTime<Utc>>,

    /// When billing starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    /// Units subscribed to, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    /// Shipping charged per cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_amount: Option<Money>,

    /// The subscriber.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<Subscriber>,

    /// Billing state.
    #[serde(skip_serializing)]
    pub billing_info: Option<BillingInfo>,

    /// Renew automatically after the last cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renewal: Option<bool>,

    /// Approval flow settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_context: Option<ApplicationContext>,

    /// Merchant-supplied reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,

    /// When the subscription was created.
    #[serde(skip_serializing)]
    pub create_time: Option<DateTime<Utc>>,

    /// When the subscription was last updated.
    #[serde(skip_serializing)]
    pub update_time: Option<DateTime<Utc>>,

    /// HATEOAS links.
    #[serde(default, skip_serializing)]
    pub links: Vec<LinkDescription>,
}

impl RestResource for Subscription {
    type AllParams = ();

    const NAME: &'static str = "Subscription";
    const COLLECTION_KEY: &'static str = "subscriptions";

    // PayPal exposes no collection listing for subscriptions.
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "billing/subscriptions/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "billing/subscriptions",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "billing/subscriptions/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Action("activate"),
            &["id"],
            "billing/subscriptions/{id}/activate",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Action("suspend"),
            &["id"],
            "billing/subscriptions/{id}/suspend",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Action("cancel"),
            &["id"],
            "billing/subscriptions/{id}/cancel",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Action("revise"),
            &["id"],
            "billing/subscriptions/{id}/revise",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Action("capture"),
            &["id"],
            "billing/subscriptions/{id}/capture",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Action("transactions"),
            &["id"],
            "billing/subscriptions/{id}/transactions",
        ),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Subscription {
    /// Returns the URL the subscriber follows to approve the subscription.
    #[must_use]
    pub fn approve_link(&self) -> Option<&str> {
        find_link(&self.links, "approve")
    }

    /// Activates a suspended subscription.
    ///
    /// On success the local `status` becomes `ACTIVE`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Remote`] if PayPal refuses the transition.
    /// Returns [`ResourceError::PathResolutionFailed`] if the subscription
    /// has no `id`.
    pub async fn activate(
        &mut self,
        client: &RestClient,
        reason: Option<&str>,
    ) -> Result<(), ResourceError> {
        let body = reason.map(|reason| json!({ "reason": reason }));
        self.transition(client, "activate", body, SubscriptionStatus::Active)
            .await
    }

    /// Suspends an active subscription.
    ///
    /// On success the local `status` becomes `SUSPENDED`.
    ///
    /// # Errors
    ///
    /// Same as [`Subscription::activate`].
    pub async fn suspend(&mut self, client: &RestClient, reason: &str) -> Result<(), ResourceError> {
        let body = json!({ "reason": reason });
        self.transition(client, "suspend", Some(body), SubscriptionStatus::Suspended)
            .await
    }

    /// Cancels the subscription.
    ///
    /// On success the local `status` becomes `CANCELLED`. Cancelling a
    /// cancelled subscription fails with a remote error whose issue is
    /// `SUBSCRIPTION_STATUS_INVALID`.
    ///
    /// # Errors
    ///
    /// Same as [`Subscription::activate`].
    pub async fn cancel(&mut self, client: &RestClient, reason: &str) -> Result<(), ResourceError> {
        let body = json!({ "reason": reason });
        self.transition(client, "cancel", Some(body), SubscriptionStatus::Cancelled)
            .await
    }

    /// Changes the plan, quantity or shipping of the subscription.
    ///
    /// Returns PayPal's view of the revision. A plan change needs the
    /// subscriber's approval through the returned `approve` link.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Remote`] if PayPal rejects the revision.
    /// Returns [`ResourceError::Decode`] if the response is malformed.
    pub async fn revise(
        &self,
        client: &RestClient,
        revision: &SubscriptionRevision,
    ) -> Result<RevisedSubscription, ResourceError> {
        let id = self.require_id("revise")?;
        let body = codec::encode(Self::NAME, revision)?;
        let response = Self::invoke_action(client, id, "revise", Some(body)).await?;
        Ok(codec::decode(Self::NAME, response.body)?)
    }

    /// Captures an authorized payment, usually the outstanding balance.
    ///
    /// Returns the resulting transaction when PayPal includes it in the
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Remote`] if PayPal rejects the capture.
    pub async fn capture(
        &self,
        client: &RestClient,
        request: &CaptureRequest,
    ) -> Result<Option<Transaction>, ResourceError> {
        let id = self.require_id("capture")?;
        let body = codec::encode(Self::NAME, request)?;
        let response = Self::invoke_action(client, id, "capture", Some(body)).await?;

        if response.body.get("id").is_some() {
            Ok(Some(codec::decode(Self::NAME, response.body)?))
        } else {
            Ok(None)
        }
    }

    /// Lists the subscription's transactions between `start` and `end`.
    ///
    /// Unlike the other actions this is a GET, with the range sent as
    /// `start_time` and `end_time` query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Remote`] if PayPal rejects the range.
    /// Returns [`ResourceError::Decode`] if the response is malformed.
    pub async fn transactions(
        &self,
        client: &RestClient,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<TransactionList, ResourceError> {
        let id = self.require_id("transactions")?;
        let (_, path) = Self::resolve_path(ResourceOperation::Action("transactions"), Some(id))?;

        let query: HashMap<String, String> = [("start_time", start), ("end_time", end)]
            .into_iter()
            .map(|(key, time)| (key.to_string(), time.to_rfc3339_opts(SecondsFormat::Secs, true)))
            .collect();

        let response = ensure_success(client.get(&path, Some(query)).await?)?;
        Ok(codec::decode(Self::NAME, response.body)?)
    }

    async fn transition(
        &mut self,
        client: &RestClient,
        action: &'static str,
        body: Option<serde_json::Value>,
        target: SubscriptionStatus,
    ) -> Result<(), ResourceError> {
        let id = self.require_id(action)?;
        Self::invoke_action(client, id, action, body).await?;
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

/// Changes requested by [`Subscription::revise`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SubscriptionRevision {
    /// Move to this plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,

    /// New quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    /// New shipping amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_amount: Option<Money>,

    /// New shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingDetail>,

    /// Approval flow settings for a plan change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_context: Option<ApplicationContext>,

    /// When the revision takes effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_time: Option<DateTime<Utc>>,
}

/// PayPal's answer to a revision.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RevisedSubscription {
    /// The plan after the revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,

    /// The quantity after the revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    /// The shipping amount after the revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_amount: Option<Money>,

    /// The shipping address after the revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingDetail>,

    /// Whether the plan's pricing is overridden for this subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_overridden: Option<bool>,

    /// HATEOAS links, including `approve` for plan changes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkDescription>,
}

impl RevisedSubscription {
    /// Returns the URL the subscriber follows to approve the revision.
    #[must_use]
    pub fn approve_link(&self) -> Option<&str> {
        find_link(&self.links, "approve")
    }
}

/// What a capture collects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaptureType {
    /// The subscription's outstanding balance.
    OutstandingBalance,
    /// A type this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// A request to capture a payment on a subscription.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::rest::resources::v1::CaptureRequest;
/// use paypal_subscriptions::rest::resources::v1::common::Money;
///
/// let request = CaptureRequest::outstanding_balance(
///     "Charging as the balance reached the limit",
///     Money::new("USD", "100"),
/// );
///
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["capture_type"], "OUTSTANDING_BALANCE");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaptureRequest {
    /// A note shown on the transaction.
    pub note: String,

    /// What to capture.
    pub capture_type: CaptureType,

    /// The amount to capture.
    pub amount: Money,
}

impl CaptureRequest {
    /// Captures `amount` of the outstanding balance.
    #[must_use]
    pub fn outstanding_balance(note: impl Into<String>, amount: Money) -> Self {
        Self {
            note: note.into(),
            capture_type: CaptureType::OutstandingBalance,
            amount,
        }
    }
}
