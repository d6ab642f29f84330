//! JSON-Patch operations for partial updates.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON-Patch operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    /// Add a value.
    Add,
    /// Remove a value.
    Remove,
    /// Replace a value.
    Replace,
    /// Move a value from `from` to `path`.
    Move,
    /// Copy a value from `from` to `path`.
    Copy,
    /// Assert a value.
    Test,
}

/// A single JSON-Patch operation.
///
/// `update` sends a slice of these as the PATCH body.
///
/// # Example
///
/// ```rust
/// use paypal_subscriptions::rest::{Patch, PatchOp};
/// use serde_json::json;
///
/// let patch = Patch::replace(
///     "/payment_preferences/payment_failure_threshold",
///     json!(7),
/// );
/// assert_eq!(patch.op, PatchOp::Replace);
/// assert_eq!(
///     serde_json::to_value(&patch).unwrap(),
///     json!({"op": "replace", "path": "/payment_preferences/payment_failure_threshold", "value": 7})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    /// The operation.
    pub op: PatchOp,
    /// JSON pointer to the target field.
    pub path: String,
    /// The value for `add`, `replace` and `test`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// JSON pointer to the source field for `move` and `copy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl Patch {
    /// Creates a `replace` operation.
    #[must_use]
    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(PatchOp::Replace, path, value)
    }

    /// Creates an `add` operation.
    #[must_use]
    pub fn add(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(PatchOp::Add, path, value)
    }

    /// Creates a `remove` operation.
    #[must_use]
    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: path.into(),
            value: None,
            from: None,
        }
    }

    fn with_value(op: PatchOp, path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op,
            path: path.into(),
            value: Some(value.into()),
            from: None,
        }
    }
}
