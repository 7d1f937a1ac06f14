//! Customer returns and their refunds.
//!
//! Status transitions are deliberately unconstrained: the admin can set any
//! return or refund status over any other via a direct update call, and
//! nothing ties refund completion to return approval.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnStatus {
    Pending,
    Approved,
    Processing,
    Rejected,
}

impl ReturnStatus {
    pub fn all() -> [ReturnStatus; 4] {
        [
            ReturnStatus::Pending,
            ReturnStatus::Approved,
            ReturnStatus::Processing,
            ReturnStatus::Rejected,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReturnStatus::Pending => "Pending",
            ReturnStatus::Approved => "Approved",
            ReturnStatus::Processing => "Processing",
            ReturnStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|v| v.label() == s)
    }

    /// Badge accent used by the returns table.
    pub fn accent(&self) -> &'static str {
        match self {
            ReturnStatus::Approved => "success",
            ReturnStatus::Rejected => "error",
            ReturnStatus::Processing => "info",
            ReturnStatus::Pending => "neutral",
        }
    }
}

impl std::fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefundStatus {
    Pending,
    Completed,
    Failed,
}

impl RefundStatus {
    pub fn all() -> [RefundStatus; 3] {
        [
            RefundStatus::Pending,
            RefundStatus::Completed,
            RefundStatus::Failed,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RefundStatus::Pending => "Pending",
            RefundStatus::Completed => "Completed",
            RefundStatus::Failed => "Failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|v| v.label() == s)
    }
}

impl std::fmt::Display for RefundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Order the return belongs to, as embedded by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRef {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub reason: String,
}

/// Monetary reimbursement linked 1:1 (optionally) to a return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Refund {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub amount: f64,
    pub status: RefundStatus,
    #[serde(rename = "transactionId", default)]
    pub transaction_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub order: Option<OrderRef>,
    pub status: ReturnStatus,
    #[serde(default)]
    pub items: Vec<ReturnItem>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub refund: Option<Refund>,
}

impl ReturnRequest {
    /// Last eight characters of the order id, the table's short form.
    pub fn short_order_id(&self) -> String {
        match &self.order {
            Some(o) => {
                let id = &o.id;
                let start = id.len().saturating_sub(8);
                id[start..].to_string()
            }
            None => "N/A".to_string(),
        }
    }
}

/// Body of `PUT /api/refunds/returns/:id/status`.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnStatusDto {
    pub status: ReturnStatus,
}

/// Body of `PUT /api/refunds/refunds/:id`.
#[derive(Debug, Clone, Serialize)]
pub struct RefundUpdateDto {
    pub status: RefundStatus,
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_round_trip() {
        for status in ReturnStatus::all() {
            assert_eq!(ReturnStatus::parse(status.label()), Some(status));
        }
        for status in RefundStatus::all() {
            assert_eq!(RefundStatus::parse(status.label()), Some(status));
        }
        assert_eq!(ReturnStatus::parse("Shipped"), None);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&ReturnStatus::Approved).unwrap(),
            "\"Approved\""
        );
        let status: RefundStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(status, RefundStatus::Completed);
    }

    #[test]
    fn test_return_with_refund() {
        let ret: ReturnRequest = serde_json::from_str(
            r#"{
                "_id": "ret1",
                "order": {"_id": "1234567890abcdef"},
                "status": "Approved",
                "items": [{"name": "Nutmeg", "quantity": 2, "reason": "Damaged"}],
                "images": [],
                "refund": {"_id": "ref1", "amount": 1500, "status": "Pending", "transactionId": ""}
            }"#,
        )
        .unwrap();
        assert_eq!(ret.short_order_id(), "90abcdef");
        assert_eq!(ret.refund.as_ref().unwrap().status, RefundStatus::Pending);
    }

    #[test]
    fn test_any_status_over_any_status() {
        // no transition guard: a rejected return may still carry a completed
        // refund, and every status update serializes regardless of the
        // current state
        for status in ReturnStatus::all() {
            let dto = ReturnStatusDto { status };
            assert!(serde_json::to_string(&dto).is_ok());
        }
        for status in RefundStatus::all() {
            let dto = RefundUpdateDto {
                status,
                transaction_id: "TXN-1".to_string(),
            };
            assert!(serde_json::to_string(&dto).is_ok());
        }
    }
}
