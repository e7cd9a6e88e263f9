use std::collections::BTreeMap;

/// Lookup table turning a decision status into a human-readable reason.
///
/// The engine and the local classifier do not share a vocabulary, so the
/// table stays open: callers may add or replace entries, and anything not
/// listed falls through to a generic "unknown status" explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionExplainer {
    entries: BTreeMap<String, String>,
}

impl DecisionExplainer {
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn standard() -> Self {
        Self::empty()
            .with_entry("APPROVED", "Approved: high income and good credit")
            .with_entry("REJECTED", "Rejected: low income or poor credit")
            .with_entry(
                "APPROVED_HIGH_RISK",
                "High risk approval: medium income and credit",
            )
            .with_entry(
                "YOUNG_APPLICANT_REVIEW",
                "Young applicant review: applicant under 25",
            )
            .with_entry("REVIEW", "Manual review: requires assessment")
    }

    pub fn with_entry(mut self, status: impl Into<String>, rationale: impl Into<String>) -> Self {
        self.entries.insert(status.into(), rationale.into());
        self
    }

    pub fn explain(&self, status: Option<&str>) -> String {
        match status {
            None => "No decision made".to_string(),
            Some(status) => match self.entries.get(status) {
                Some(rationale) => rationale.clone(),
                None => format!("Unknown status: {status}"),
            },
        }
    }
}

impl Default for DecisionExplainer {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_covers_engine_vocabulary() {
        let explainer = DecisionExplainer::standard();
        for status in [
            "APPROVED",
            "REJECTED",
            "APPROVED_HIGH_RISK",
            "YOUNG_APPLICANT_REVIEW",
            "REVIEW",
        ] {
            assert!(
                !explainer.explain(Some(status)).starts_with("Unknown"),
                "{status} should have a rationale"
            );
        }
    }

    #[test]
    fn unknown_and_missing_statuses_use_default_branch() {
        let explainer = DecisionExplainer::standard();
        assert_eq!(
            explainer.explain(Some("UNDER_REVIEW")),
            "Unknown status: UNDER_REVIEW"
        );
        assert_eq!(explainer.explain(None), "No decision made");
    }

    #[test]
    fn entries_can_be_extended() {
        let explainer = DecisionExplainer::standard()
            .with_entry("UNDER_REVIEW", "Under review: borderline profile");
        assert_eq!(
            explainer.explain(Some("UNDER_REVIEW")),
            "Under review: borderline profile"
        );
    }
}
