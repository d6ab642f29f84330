//! Resources of the PayPal v1 catalog and billing APIs.
//!
//! | Resource        | Operations                                                         |
//! |-----------------|--------------------------------------------------------------------|
//! | [`Product`]     | create, find, all, update                                          |
//! | [`Plan`]        | create, find, all, update, activate, deactivate, update_pricing    |
//! | [`Subscription`]| create, find, update, activate, suspend, cancel, revise, capture, transactions |

pub mod common;
mod plan;
mod pricing;
mod product;
mod subscription;
mod transaction;

pub use plan::{
    BillingCycle, Frequency, IntervalUnit, PaymentPreferences, Plan, PlanListParams, PlanStatus,
    SetupFeeFailureAction, Taxes, TenureType,
};
pub use pricing::{PricingScheme, PricingSchemeList, PricingSchemeOverride};
pub use product::{Product, ProductListParams, ProductType};
pub use subscription::{
    ApplicationContext, BillingInfo, CaptureRequest, CaptureType, LastPayment, PayeePreferred,
    PaymentMethod, RevisedSubscription, ShippingPreference, Subscription, SubscriptionRevision,
    SubscriptionStatus, UserAction,
};
pub use transaction::{AmountWithBreakdown, Transaction, TransactionList, TransactionStatus};
