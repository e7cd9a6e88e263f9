mod classifier;
mod estimator;

pub use classifier::classify;
pub use estimator::estimate_rules_fired;

pub(crate) use classifier::{
    APPROVAL_CREDIT_FLOOR, APPROVAL_INCOME_FLOOR, CONDITIONAL_CREDIT_FLOOR,
    CONDITIONAL_INCOME_FLOOR, REJECTION_CREDIT_CEILING, REJECTION_INCOME_CEILING,
};
