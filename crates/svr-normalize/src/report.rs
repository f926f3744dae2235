//! Reporting collaborators for rejected documents.

use std::sync::{Mutex, PoisonError};

use svr_model::{Issue, IssueLocation};

/// Placeholder logged instead of a value when value logging is off.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Receives the error descriptors of a rejected document.
///
/// Passed into the [`Converter`](crate::Converter) so each caller decides
/// where descriptors go.
pub trait IssueReporter: Send + Sync {
    fn report(&self, issues: &[Issue], location: Option<&IssueLocation>);
}

impl<R: IssueReporter + ?Sized> IssueReporter for &R {
    fn report(&self, issues: &[Issue], location: Option<&IssueLocation>) {
        (**self).report(issues, location);
    }
}

/// Emits one `tracing` error event per descriptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter {
    log_values: bool,
}

impl TracingReporter {
    /// Include raw values in log events. Off by default.
    #[must_use]
    pub fn with_values(mut self, enable: bool) -> Self {
        self.log_values = enable;
        self
    }
}

impl IssueReporter for TracingReporter {
    fn report(&self, issues: &[Issue], location: Option<&IssueLocation>) {
        let observation = location.map(|l| l.observation);
        let predictor = location.map(|l| l.predictor);
        let feature = location.map_or("", |l| l.feature.as_str());
        for issue in issues {
            let (message, value) = if self.log_values {
                (issue.message(), issue.value())
            } else {
                (issue.check_description(), REDACTED_VALUE)
            };
            tracing::error!(
                rule = issue.rule_id(),
                category = %issue.category(),
                observation,
                predictor,
                feature,
                value,
                "{message}"
            );
        }
    }
}

/// One call to [`CapturingReporter::report`].
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedReport {
    pub issues: Vec<Issue>,
    pub location: Option<IssueLocation>,
}

/// Stores every report in memory.
#[derive(Debug, Default)]
pub struct CapturingReporter {
    reports: Mutex<Vec<CapturedReport>>,
}

impl CapturingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports received so far.
    pub fn reports(&self) -> Vec<CapturedReport> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn report_count(&self) -> usize {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl IssueReporter for CapturingReporter {
    fn report(&self, issues: &[Issue], location: Option<&IssueLocation>) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CapturedReport {
                issues: issues.to_vec(),
                location: location.cloned(),
            });
    }
}
