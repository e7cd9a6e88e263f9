use std::fmt;

use serde::{Deserialize, Serialize};

/// Loan requester as captured at intake.
///
/// Attributes are accepted as-is: an out-of-range credit score is classified
/// like any other value. `status` stays empty until an evaluation records its
/// decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub name: String,
    pub age: u32,
    pub income: u64,
    pub credit_score: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
}

impl Applicant {
    pub fn new(name: impl Into<String>, age: u32, income: u64, credit_score: i32) -> Self {
        Self {
            name: name.into(),
            age,
            income,
            credit_score,
            status: None,
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub(crate) fn record_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }
}

/// Outcome produced by the local decision classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    Approved,
    ConditionallyApproved,
    Rejected,
    UnderReview,
}

impl LoanStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            LoanStatus::Approved => "APPROVED",
            LoanStatus::ConditionallyApproved => "CONDITIONALLY_APPROVED",
            LoanStatus::Rejected => "REJECTED",
            LoanStatus::UnderReview => "UNDER_REVIEW",
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
