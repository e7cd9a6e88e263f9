use super::super::domain::LoanStatus;

pub(crate) const APPROVAL_CREDIT_FLOOR: i32 = 700;
pub(crate) const APPROVAL_INCOME_FLOOR: u64 = 50_000;
pub(crate) const CONDITIONAL_CREDIT_FLOOR: i32 = 600;
pub(crate) const CONDITIONAL_INCOME_FLOOR: u64 = 30_000;
pub(crate) const REJECTION_CREDIT_CEILING: i32 = 500;
pub(crate) const REJECTION_INCOME_CEILING: u64 = 20_000;

/// Classify an application from income and credit score.
///
/// Rules are checked in a fixed order and the first match wins:
/// approval, conditional approval, rejection, then review. The ranges
/// overlap, so an applicant with a high score and very low income is
/// rejected rather than reviewed.
pub fn classify(income: u64, credit_score: i32) -> LoanStatus {
    if credit_score >= APPROVAL_CREDIT_FLOOR && income >= APPROVAL_INCOME_FLOOR {
        return LoanStatus::Approved;
    }

    if credit_score >= CONDITIONAL_CREDIT_FLOOR && income >= CONDITIONAL_INCOME_FLOOR {
        return LoanStatus::ConditionallyApproved;
    }

    if credit_score < REJECTION_CREDIT_CEILING || income < REJECTION_INCOME_CEILING {
        return LoanStatus::Rejected;
    }

    LoanStatus::UnderReview
}
