use super::super::domain::Applicant;

const HIGH_INCOME: u64 = 50_000;
const LOW_INCOME: u64 = 20_000;
const HIGH_CREDIT: i32 = 700;
const LOW_CREDIT: i32 = 500;
const YOUNG_APPLICANT_AGE: u32 = 25;

/// Approximate how many rule conditions a simulated run evaluated.
///
/// One base rule always counts, plus one each for an extreme income, an
/// extreme credit score, and an applicant under 25. The bounds are strict
/// (exactly 50000 is not extreme) and the result is always within 1..=4.
pub fn estimate_rules_fired(applicant: &Applicant) -> u32 {
    let mut fired = 1;

    if applicant.income > HIGH_INCOME || applicant.income < LOW_INCOME {
        fired += 1;
    }
    if applicant.credit_score > HIGH_CREDIT || applicant.credit_score < LOW_CREDIT {
        fired += 1;
    }
    if applicant.age < YOUNG_APPLICANT_AGE {
        fired += 1;
    }

    fired
}
