use serde::{Deserialize, Serialize};

use super::super::domain::ApplicationRecord;
use super::rules::RequiredField;

/// Progress bar state for the form header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReport {
    pub percent: u8,
    pub satisfied: Vec<RequiredField>,
    pub missing: Vec<RequiredField>,
}

impl CompletionReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

pub fn completion_report(record: &ApplicationRecord) -> CompletionReport {
    let (satisfied, missing): (Vec<_>, Vec<_>) = RequiredField::ALL
        .iter()
        .copied()
        .partition(|field| field.is_satisfied(record));

    let percent = percentage(satisfied.len(), RequiredField::ALL.len());

    CompletionReport {
        percent,
        satisfied,
        missing,
    }
}

/// `round(satisfied / total * 100)` over the ten required fields.
pub fn compute_completion(record: &ApplicationRecord) -> u8 {
    completion_report(record).percent
}

fn percentage(satisfied: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = satisfied as f64 / total as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(0, 10), 0);
        assert_eq!(percentage(6, 10), 60);
        assert_eq!(percentage(10, 10), 100);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn blank_record_reports_every_field_missing() {
        let report = completion_report(&ApplicationRecord::new());
        assert_eq!(report.percent, 0);
        assert!(report.satisfied.is_empty());
        assert_eq!(report.missing, RequiredField::ALL.to_vec());
        assert!(!report.is_complete());
    }
}
