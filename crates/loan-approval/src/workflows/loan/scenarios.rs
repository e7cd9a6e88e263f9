use super::domain::Applicant;

/// Sample applicants used by the demo and the test suite.
pub fn sample_applicants() -> Vec<Applicant> {
    vec![
        // Low income
        Applicant::new("Alice", 25, 15_000, 600),
        // High income
        Applicant::new("Bob", 35, 60_000, 750),
        // Medium income
        Applicant::new("Charlie", 28, 35_000, 675),
        // Young applicant
        Applicant::new("Diana", 23, 30_000, 650),
        // Edge case
        Applicant::new("Eve", 30, 25_000, 580),
        // Strong on every axis
        Applicant::new("Frank", 40, 80_000, 800),
    ]
}
