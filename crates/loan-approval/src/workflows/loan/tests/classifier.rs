use crate::workflows::loan::decision::{classify, estimate_rules_fired};
use crate::workflows::loan::domain::{Applicant, LoanStatus};
use crate::workflows::loan::scenarios::sample_applicants;

#[test]
fn strong_income_and_credit_is_approved() {
    for income in [50_000, 50_001, 80_000, 1_000_000] {
        for credit in [700, 701, 800, 850] {
            assert_eq!(
                classify(income, credit),
                LoanStatus::Approved,
                "income {income} credit {credit}"
            );
        }
    }
}

#[test]
fn mid_band_is_conditionally_approved() {
    for income in [30_000, 40_000, 49_999] {
        for credit in [600, 650, 699] {
            assert_eq!(
                classify(income, credit),
                LoanStatus::ConditionallyApproved,
                "income {income} credit {credit}"
            );
        }
    }
}

#[test]
fn approval_is_checked_before_conditional_approval() {
    // Satisfies both the approval and conditional rules.
    assert_eq!(classify(60_000, 720), LoanStatus::Approved);
}

#[test]
fn conditional_approval_is_checked_before_rejection() {
    // The bands are disjoint, so check both sides of the boundary.
    assert_eq!(classify(30_000, 600), LoanStatus::ConditionallyApproved);
    assert_eq!(classify(30_000, 499), LoanStatus::Rejected);
}

#[test]
fn high_credit_with_very_low_income_is_rejected() {
    assert_eq!(classify(15_000, 750), LoanStatus::Rejected);
}

#[test]
fn poor_credit_is_rejected_regardless_of_income() {
    assert_eq!(classify(45_000, 499), LoanStatus::Rejected);
    assert_eq!(classify(1_000_000, 300), LoanStatus::Rejected);
}

#[test]
fn middle_ground_falls_through_to_review() {
    assert_eq!(classify(25_000, 580), LoanStatus::UnderReview);
    assert_eq!(classify(20_000, 500), LoanStatus::UnderReview);
    assert_eq!(classify(45_000, 599), LoanStatus::UnderReview);
}

#[test]
fn forty_thousand_at_six_fifty_is_conditional() {
    assert_eq!(classify(40_000, 650), LoanStatus::ConditionallyApproved);
}

#[test]
fn out_of_range_scores_are_classified_as_is() {
    assert_eq!(classify(90_000, 2_000), LoanStatus::Approved);
    assert_eq!(classify(90_000, -50), LoanStatus::Rejected);
}

#[test]
fn classify_is_idempotent() {
    for applicant in sample_applicants() {
        let first = classify(applicant.income, applicant.credit_score);
        let second = classify(applicant.income, applicant.credit_score);
        assert_eq!(first, second);
    }
}

#[test]
fn estimator_counts_each_extreme_once() {
    assert_eq!(
        estimate_rules_fired(&Applicant::new("Young", 23, 15_000, 600)),
        3
    );
    assert_eq!(
        estimate_rules_fired(&Applicant::new("Plain", 30, 40_000, 650)),
        1
    );
    assert_eq!(
        estimate_rules_fired(&Applicant::new("Everything", 19, 5_000, 400)),
        4
    );
}

#[test]
fn estimator_bounds_are_strict() {
    // 50000 and 700 are not extremes; 20000 and 500 are not either.
    assert_eq!(
        estimate_rules_fired(&Applicant::new("Edge", 25, 50_000, 700)),
        1
    );
    assert_eq!(
        estimate_rules_fired(&Applicant::new("Edge", 25, 20_000, 500)),
        1
    );
}

#[test]
fn estimator_stays_within_one_to_four() {
    for age in [18, 24, 25, 70] {
        for income in [0, 19_999, 35_000, 50_001] {
            for credit in [-10, 499, 650, 701, 900] {
                let fired = estimate_rules_fired(&Applicant::new("Any", age, income, credit));
                assert!((1..=4).contains(&fired), "{age}/{income}/{credit} -> {fired}");
            }
        }
    }
}
