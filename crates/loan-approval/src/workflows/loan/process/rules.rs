use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use tracing::{debug, info};

use super::super::decision::{
    APPROVAL_CREDIT_FLOOR, APPROVAL_INCOME_FLOOR, CONDITIONAL_CREDIT_FLOOR,
    CONDITIONAL_INCOME_FLOOR, REJECTION_CREDIT_CEILING, REJECTION_INCOME_CEILING,
};
use super::super::domain::Applicant;
use super::engine::{EngineError, EngineEvaluation, EngineSession, ProcessEngine};
use super::state::ProcessState;

pub type RuleCondition = fn(&Applicant) -> bool;

const YOUNG_APPLICANT_AGE: u32 = 25;

/// Named condition over an applicant, optionally writing a decision.
#[derive(Clone)]
pub struct Rule {
    pub name: String,
    pub group: String,
    pub salience: i32,
    pub condition: RuleCondition,
    pub status: Option<String>,
    /// Only considered when no earlier rule has written a status.
    pub only_when_undecided: bool,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        salience: i32,
        condition: RuleCondition,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            salience,
            condition,
            status: None,
            only_when_undecided: false,
        }
    }

    pub fn deciding(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn when_undecided(mut self) -> Self {
        self.only_when_undecided = true;
        self
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("group", &self.group)
            .field("salience", &self.salience)
            .field("status", &self.status)
            .field("only_when_undecided", &self.only_when_undecided)
            .finish_non_exhaustive()
    }
}

/// Rules fired against one applicant, in firing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Firing {
    pub fired: Vec<String>,
    pub status: Option<String>,
}

/// Ordered set of rules evaluated by [`RulesEngine`].
#[derive(Debug, Clone)]
pub struct RuleBook {
    rules: Vec<Rule>,
}

impl RuleBook {
    /// Validate and order rules by descending salience. Ties keep their
    /// declaration order.
    pub fn new(mut rules: Vec<Rule>) -> Result<Self, RuleBookError> {
        if rules.is_empty() {
            return Err(RuleBookError::Empty);
        }

        let mut seen = HashSet::new();
        for rule in &rules {
            if rule.name.trim().is_empty() {
                return Err(RuleBookError::UnnamedRule);
            }
            if !seen.insert(rule.name.as_str()) {
                return Err(RuleBookError::DuplicateRule(rule.name.clone()));
            }
        }

        rules.sort_by_key(|rule| Reverse(rule.salience));
        Ok(Self { rules })
    }

    pub fn standard() -> Result<Self, RuleBookError> {
        Self::new(vec![
            Rule::new("Reject low income", "basic-approval", 100, |applicant| {
                applicant.income < REJECTION_INCOME_CEILING
            })
            .deciding("REJECTED"),
            Rule::new("Reject poor credit", "basic-approval", 100, |applicant| {
                applicant.credit_score < REJECTION_CREDIT_CEILING
            })
            .deciding("REJECTED"),
            Rule::new(
                "Approve high income and good credit",
                "basic-approval",
                90,
                |applicant| {
                    applicant.income >= APPROVAL_INCOME_FLOOR
                        && applicant.credit_score >= APPROVAL_CREDIT_FLOOR
                },
            )
            .deciding("APPROVED"),
            Rule::new("Young applicant review", "risk-assessment", 80, |applicant| {
                applicant.age < YOUNG_APPLICANT_AGE
            })
            .deciding("YOUNG_APPLICANT_REVIEW"),
            Rule::new("High risk approval", "risk-assessment", 70, |applicant| {
                applicant.income >= CONDITIONAL_INCOME_FLOOR
                    && applicant.credit_score >= CONDITIONAL_CREDIT_FLOOR
            })
            .deciding("APPROVED_HIGH_RISK"),
            Rule::new("Manual review", "manual-review", 0, |_| true)
                .deciding("REVIEW")
                .when_undecided(),
        ])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Fire every matching rule; the first rule carrying a status decides.
    pub fn fire(&self, applicant: &Applicant) -> Firing {
        let mut firing = Firing::default();

        for rule in &self.rules {
            if rule.only_when_undecided && firing.status.is_some() {
                continue;
            }
            if !(rule.condition)(applicant) {
                continue;
            }

            debug!(rule = %rule.name, group = %rule.group, "rule fired");
            firing.fired.push(rule.name.clone());
            if firing.status.is_none() {
                firing.status = rule.status.clone();
            }
        }

        firing
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleBookError {
    #[error("rule book contains no rules")]
    Empty,
    #[error("rule names must not be blank")]
    UnnamedRule,
    #[error("rule '{0}' is defined more than once")]
    DuplicateRule(String),
}

static PROCESS_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_process_id() -> String {
    let id = PROCESS_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("loan-approval-{id}")
}

/// In-process engine firing a [`RuleBook`] inside a short-lived process.
pub struct RulesEngine {
    name: String,
    book: RuleBook,
    open_sessions: AtomicUsize,
    disposed: AtomicBool,
}

impl RulesEngine {
    pub fn new(book: RuleBook) -> Self {
        Self {
            name: "loan-approval-rules".to_string(),
            book,
            open_sessions: AtomicUsize::new(0),
            disposed: AtomicBool::new(false),
        }
    }

    pub fn open_sessions(&self) -> usize {
        self.open_sessions.load(Ordering::Acquire)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}

impl ProcessEngine for RulesEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn open_session(&self) -> Result<Box<dyn EngineSession + '_>, EngineError> {
        if self.is_disposed() {
            return Err(EngineError::Disposed(self.name.clone()));
        }

        self.open_sessions.fetch_add(1, Ordering::AcqRel);
        debug!(engine = %self.name, "engine session opened");
        Ok(Box::new(RuleSession { engine: self }))
    }

    fn dispose(&self) {
        if !self.disposed.swap(true, Ordering::AcqRel) {
            info!(engine = %self.name, "rules engine disposed");
        }
    }
}

struct RuleSession<'a> {
    engine: &'a RulesEngine,
}

impl EngineSession for RuleSession<'_> {
    fn evaluate(&mut self, applicant: &Applicant) -> Result<EngineEvaluation, EngineError> {
        let firing = self.engine.book.fire(applicant);
        if firing.fired.is_empty() {
            return Err(EngineError::NothingFired {
                applicant: applicant.name.clone(),
            });
        }

        let process_id = next_process_id();
        info!(
            %process_id,
            rules_fired = firing.fired.len(),
            status = firing.status.as_deref().unwrap_or("none"),
            "loan approval process completed"
        );

        Ok(EngineEvaluation {
            process_id,
            state_code: ProcessState::Completed.code(),
            rules_fired: firing.fired.len() as u32,
            fired_rules: firing.fired,
            status: firing.status,
        })
    }
}

impl Drop for RuleSession<'_> {
    fn drop(&mut self) {
        self.engine.open_sessions.fetch_sub(1, Ordering::AcqRel);
        debug!(engine = %self.engine.name, "engine session released");
    }
}
