use super::catalog::{GrantScheme, GRANT_SCHEMES};
use super::checks::checks_for;
use super::inputs::GrantCheckerInputs;
use serde::Serialize;
use tracing::debug;

/// How sure the checker is that a scheme applies. Ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Confidence {
    Definite,
    Likely,
    Possible,
    NotEligible,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Definite => "definite",
            Self::Likely => "likely",
            Self::Possible => "possible",
            Self::NotEligible => "not-eligible",
        }
    }
}

/// What a single check does to the running confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Hold,
    DegradeTo(Confidence),
    DegradeIfCertain(Confidence),
    Disqualify,
}

/// Result of one rule within a scheme's check list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub reason: Option<String>,
    pub effect: Effect,
    pub grant: Option<u32>,
}

impl CheckOutcome {
    pub fn note(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            effect: Effect::Hold,
            grant: None,
        }
    }

    pub fn degrade(reason: impl Into<String>, level: Confidence) -> Self {
        Self {
            reason: Some(reason.into()),
            effect: Effect::DegradeTo(level),
            grant: None,
        }
    }

    pub fn degrade_if_certain(reason: impl Into<String>, level: Confidence) -> Self {
        Self {
            reason: Some(reason.into()),
            effect: Effect::DegradeIfCertain(level),
            grant: None,
        }
    }

    pub fn disqualify(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            effect: Effect::Disqualify,
            grant: None,
        }
    }

    pub fn skip() -> Self {
        Self {
            reason: None,
            effect: Effect::Hold,
            grant: None,
        }
    }

    pub fn with_grant(mut self, grant: u32) -> Self {
        self.grant = Some(grant);
        self
    }
}

pub type Check = fn(&GrantCheckerInputs) -> CheckOutcome;

/// Verdict for one scheme against one set of answers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantEligibilityResult {
    pub scheme: &'static GrantScheme,
    pub confidence: Confidence,
    pub reasons: Vec<String>,
    pub max_potential_grant: u32,
}

impl GrantEligibilityResult {
    pub fn is_eligible(&self) -> bool {
        self.confidence != Confidence::NotEligible
    }
}

/// Confidence, notes and grant override gathered from a run of checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub confidence: Confidence,
    pub notes: Vec<(Effect, String)>,
    pub grant: Option<u32>,
    pub disqualified: bool,
}

impl Verdict {
    /// Notes from checks that held confidence steady.
    pub fn met(&self) -> Vec<String> {
        self.notes_where(|effect| effect == Effect::Hold)
    }

    /// Notes from checks that lowered confidence or disqualified.
    pub fn caveats(&self) -> Vec<String> {
        self.notes_where(|effect| effect != Effect::Hold)
    }

    fn notes_where(&self, keep: impl Fn(Effect) -> bool) -> Vec<String> {
        self.notes
            .iter()
            .filter(|(effect, _)| keep(*effect))
            .map(|(_, note)| note.clone())
            .collect()
    }
}

/// Fold check outcomes into a verdict.
///
/// Confidence only ever moves towards `NotEligible`. Outcomes are pulled
/// lazily, so checks after a disqualifying one never run.
pub fn fold_outcomes(outcomes: impl IntoIterator<Item = CheckOutcome>) -> Verdict {
    let mut verdict = Verdict {
        confidence: Confidence::Definite,
        notes: Vec::new(),
        grant: None,
        disqualified: false,
    };

    for outcome in outcomes {
        if let Some(reason) = outcome.reason {
            verdict.notes.push((outcome.effect, reason));
        }
        if outcome.grant.is_some() {
            verdict.grant = outcome.grant;
        }

        match outcome.effect {
            Effect::Hold => {}
            Effect::DegradeTo(level) => verdict.confidence = verdict.confidence.max(level),
            Effect::DegradeIfCertain(level) => {
                if verdict.confidence == Confidence::Definite {
                    verdict.confidence = verdict.confidence.max(level);
                }
            }
            Effect::Disqualify => {
                verdict.confidence = Confidence::NotEligible;
                verdict.disqualified = true;
                break;
            }
        }
    }

    verdict
}

/// Fold a scheme's ordered checks into a single verdict.
///
/// A disqualifying check stops evaluation and zeroes the grant.
pub fn evaluate_scheme(
    scheme: &'static GrantScheme,
    checks: &[Check],
    inputs: &GrantCheckerInputs,
) -> GrantEligibilityResult {
    let verdict = fold_outcomes(checks.iter().map(|check| check(inputs)));
    let max_potential_grant = if verdict.disqualified {
        0
    } else {
        verdict.grant.unwrap_or(scheme.max_grant)
    };

    GrantEligibilityResult {
        scheme,
        confidence: verdict.confidence,
        reasons: verdict.notes.into_iter().map(|(_, reason)| reason).collect(),
        max_potential_grant,
    }
}

/// Evaluate every catalog scheme, best confidence first.
pub fn check_grant_eligibility(inputs: &GrantCheckerInputs) -> Vec<GrantEligibilityResult> {
    let mut results: Vec<GrantEligibilityResult> = GRANT_SCHEMES
        .iter()
        .map(|scheme| evaluate_scheme(scheme, checks_for(scheme.id), inputs))
        .collect();

    // sort_by_key is stable, so catalog order breaks ties.
    results.sort_by_key(|result| result.confidence);

    for result in &results {
        debug!(
            scheme = result.scheme.id.slug(),
            confidence = result.confidence.label(),
            grant = result.max_potential_grant,
            "grant scheme evaluated"
        );
    }

    results
}
