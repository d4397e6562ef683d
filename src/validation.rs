//! Input validation for judged events.
//!
//! Checks event configurations before initialization and score sheets
//! before a submission is applied. Detects:
//! - Zero team, judge, room, or group counts
//! - Unusable score ranges
//! - Teams of the batch left unscored
//! - Scores for teams outside the batch
//! - Scores outside the accepted range
//! - Blank judge names
//!
//! Every issue is reported, not just the first, so the caller can correct
//! the whole input in one pass.

use std::collections::HashSet;

use crate::config::EventConfig;
use crate::models::{JudgeId, ScoreRange, ScoreSheet, TeamId};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A count that must be at least one is zero.
    InvalidCount,
    /// Score range bounds are not finite or inverted.
    InvalidScoreRange,
    /// The team numbering overflows.
    InvalidTeamRange,
    /// A team of the current batch has no score.
    MissingScore,
    /// A score was given for a team outside the current batch.
    UnexpectedTeam,
    /// A score lies outside the accepted range or is not a number.
    ScoreOutOfRange,
    /// A judge name is blank.
    InvalidJudgeId,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Formats a list of issues on one line.
pub(crate) fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates an event configuration.
///
/// Checks:
/// 1. Team, judge, room, and group counts are at least one
/// 2. The score range is finite and `min <= max`
/// 3. Team numbers fit in `u32`
pub fn validate_config(config: &EventConfig) -> ValidationResult {
    let mut errors = Vec::new();

    for (field, value) in [
        ("num_teams", config.num_teams),
        ("num_judges", config.num_judges),
        ("num_rooms", config.num_rooms),
        ("group_size", config.group_size),
    ] {
        if value == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCount,
                format!("{field} must be at least 1"),
            ));
        }
    }

    if !config.score_range.is_valid() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidScoreRange,
            format!(
                "Invalid score range {}..={}",
                config.score_range.min, config.score_range.max
            ),
        ));
    }

    let last = u32::try_from(config.num_teams)
        .ok()
        .and_then(|n| config.first_team.checked_add(n));
    if last.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTeamRange,
            format!(
                "{} teams starting at {} overflow the team numbering",
                config.num_teams, config.first_team
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a score sheet against a judge's current batch.
///
/// Checks:
/// 1. Every team of the batch has a score
/// 2. No score is given for a team outside the batch
/// 3. Every score is finite and within `range`
pub fn validate_submission(
    batch: &[TeamId],
    scores: &ScoreSheet,
    range: &ScoreRange,
) -> ValidationResult {
    let mut errors = Vec::new();
    let expected: HashSet<TeamId> = batch.iter().copied().collect();

    let mut reported = HashSet::new();
    for team in batch {
        if !scores.contains_key(team) && reported.insert(*team) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingScore,
                format!("Missing score for {team}"),
            ));
        }
    }

    for (team, &score) in scores {
        if !expected.contains(team) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnexpectedTeam,
                format!("{team} is not in the current batch"),
            ));
            continue;
        }
        if !range.contains(score) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ScoreOutOfRange,
                format!(
                    "Score {score} for {team} must be between {} and {}",
                    range.min, range.max
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the id of a judge joining by name.
pub fn validate_judge_id(judge: &JudgeId) -> ValidationResult {
    if judge.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidJudgeId,
            "Judge name must not be blank",
        )]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<TeamId> {
        vec![TeamId(1), TeamId(2), TeamId(3)]
    }

    fn sheet(pairs: &[(u32, f64)]) -> ScoreSheet {
        pairs.iter().map(|&(t, s)| (TeamId(t), s)).collect()
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&EventConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_counts() {
        let config = EventConfig::new(0, 0, 1, 0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidCount)
                .count(),
            3
        );
        assert!(errors.iter().any(|e| e.message.contains("group_size")));
    }

    #[test]
    fn test_inverted_score_range() {
        let config = EventConfig::default().with_score_range(10.0, 0.0);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidScoreRange));
    }

    #[test]
    fn test_team_numbering_overflow() {
        let config = EventConfig::new(10, 1, 1, 5).with_first_team(u32::MAX - 2);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTeamRange));
    }

    #[test]
    fn test_valid_submission() {
        let range = ScoreRange::new(0.0, 3.0);
        let scores = sheet(&[(1, 0.0), (2, 1.5), (3, 3.0)]);
        assert!(validate_submission(&batch(), &scores, &range).is_ok());
    }

    #[test]
    fn test_missing_score() {
        let range = ScoreRange::default();
        let scores = sheet(&[(1, 5.0), (2, 5.0)]);
        let errors = validate_submission(&batch(), &scores, &range).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingScore);
    }

    #[test]
    fn test_unexpected_team() {
        let range = ScoreRange::default();
        let scores = sheet(&[(1, 5.0), (2, 5.0), (3, 5.0), (9, 5.0)]);
        let errors = validate_submission(&batch(), &scores, &range).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnexpectedTeam));
    }

    #[test]
    fn test_bounds() {
        let range = ScoreRange::new(0.0, 3.0);
        let below = sheet(&[(1, -1.0), (2, 0.0), (3, 3.0)]);
        let above = sheet(&[(1, 0.0), (2, 4.0), (3, 3.0)]);
        for scores in [below, above] {
            let errors = validate_submission(&batch(), &scores, &range).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].kind, ValidationErrorKind::ScoreOutOfRange);
        }
    }

    #[test]
    fn test_nan_rejected() {
        let range = ScoreRange::default();
        let scores = sheet(&[(1, f64::NAN), (2, 1.0), (3, 1.0)]);
        assert!(validate_submission(&batch(), &scores, &range).is_err());
    }

    #[test]
    fn test_repeated_team_needs_one_score() {
        let range = ScoreRange::default();
        let batch = vec![TeamId(1), TeamId(1), TeamId(2)];
        assert!(validate_submission(&batch, &sheet(&[(1, 1.0), (2, 2.0)]), &range).is_ok());
        let errors = validate_submission(&batch, &sheet(&[(2, 2.0)]), &range).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_multiple_errors() {
        let range = ScoreRange::new(0.0, 3.0);
        let scores = sheet(&[(1, 7.0), (8, 1.0)]);
        let errors = validate_submission(&batch(), &scores, &range).unwrap_err();
        // 2 and 3 missing, 8 unexpected, 1 out of range
        assert_eq!(errors.len(), 4);
        assert!(join(&errors).contains("Team 8"));
    }

    #[test]
    fn test_blank_judge_name() {
        assert!(validate_judge_id(&JudgeId::new("Carol")).is_ok());
        let errors = validate_judge_id(&JudgeId::new("  ")).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidJudgeId);
    }
}
