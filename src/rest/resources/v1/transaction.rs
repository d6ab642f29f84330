//! Subscription transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{LinkDescription, Money, Name};

/// The status of a captured payment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// The funds were captured.
    Completed,
    /// The payment was declined.
    Declined,
    /// Part of the payment was refunded.
    PartiallyRefunded,
    /// The payment is pending.
    Pending,
    /// The payment was fully refunded.
    Refunded,
    /// A status this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// Gross, fee and net amounts of a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AmountWithBreakdown {
    /// The amount charged to the subscriber.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_amount: Option<Money>,

    /// The PayPal fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_amount: Option<Money>,

    /// The amount credited to the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Money>,
}

/// A payment made against a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Transaction {
    /// The transaction ID.
    pub id: String,

    /// The payment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,

    /// The payer's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,

    /// The payer's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<Name>,

    /// The amounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_with_breakdown: Option<AmountWithBreakdown>,

    /// When the transaction happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

/// The transactions of a subscription within a time range.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::rest::resources::v1::TransactionList;
///
/// let list: TransactionList = serde_json::from_value(serde_json::json!({
///     "transactions": [
///         {"id": "TRFGHNJKOIIOJKL", "status": "COMPLETED", "time": "2018-03-16T07:40:20.940Z"}
///     ]
/// }))
/// .unwrap();
///
/// assert_eq!(list.len(), 1);
/// assert_eq!(list.iter().next().unwrap().id, "TRFGHNJKOIIOJKL");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TransactionList {
    /// Transactions in server order.
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Total transactions in the range, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,

    /// Total pages, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,

    /// HATEOAS links.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkDescription>,
}

impl TransactionList {
    /// Returns the number of transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns `true` if there are no transactions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Iterates over the transactions.
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }
}

impl IntoIterator for TransactionList {
    type Item = Transaction;
    type IntoIter = std::vec::IntoIter<Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.into_iter()
    }
}
