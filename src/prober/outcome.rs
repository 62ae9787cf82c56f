//! Probe result types.

/// Classification of a single probe attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The target answered within its deadline.
    Success,
    /// The target answered negatively (refused connection, non-2xx status).
    Failure,
    /// The probe could not determine the target's health (transport error).
    Unknown,
}

/// What a probe capability returns for one attempt.
///
/// `status` is always set, even when `error` is present; a capability never
/// leaves the status undefined.
#[derive(Debug, Clone)]
pub struct ProbeReply {
    pub status: ProbeStatus,
    pub detail: String,
    pub error: Option<String>,
}

impl ProbeReply {
    pub fn success(detail: impl Into<String>) -> Self {
        Self { status: ProbeStatus::Success, detail: detail.into(), error: None }
    }

    pub fn failure(detail: impl Into<String>) -> Self {
        Self { status: ProbeStatus::Failure, detail: detail.into(), error: None }
    }

    pub fn unknown(error: impl Into<String>) -> Self {
        Self { status: ProbeStatus::Unknown, detail: String::new(), error: Some(error.into()) }
    }
}

/// One probe reply tied back to the service that produced it. Built fresh
/// every round, never persisted.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub service_name: String,
    pub status: ProbeStatus,
    pub detail: String,
    pub error: Option<String>,
}

impl ProbeOutcome {
    /// A probe is failing if its status is anything but Success, or if the
    /// capability reported an error. Both may hold at once.
    pub fn is_failing(&self) -> bool {
        self.status != ProbeStatus::Success || self.error.is_some()
    }

    /// Diagnostic text for this outcome, or `None` if the probe passed.
    ///
    /// Non-success status contributes `"<name> <detail>\n"`; an error
    /// appends its text. An error with a successful status yields the bare
    /// error text.
    pub fn diagnostic(&self) -> Option<String> {
        if !self.is_failing() {
            return None;
        }
        let mut message = String::new();
        if self.status != ProbeStatus::Success {
            message.push_str(&self.service_name);
            message.push(' ');
            message.push_str(&self.detail);
            message.push('\n');
        }
        if let Some(error) = &self.error {
            message.push_str(error);
        }
        Some(message)
    }
}

/// Verdict of one complete probe round. Constructed per health-check
/// request and discarded once the response is written.
#[derive(Debug, Clone)]
pub struct AggregationResult {
    /// True iff every probe succeeded with no error.
    pub healthy: bool,
    /// One diagnostic per failing probe, in descriptor order.
    pub failures: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: ProbeStatus, detail: &str, error: Option<&str>) -> ProbeOutcome {
        ProbeOutcome {
            service_name: "casandra".to_string(),
            status,
            detail: detail.to_string(),
            error: error.map(String::from),
        }
    }

    #[test]
    fn test_success_has_no_diagnostic() {
        assert_eq!(outcome(ProbeStatus::Success, "connected", None).diagnostic(), None);
    }

    #[test]
    fn test_status_failure_formats_name_and_detail() {
        let diag = outcome(ProbeStatus::Failure, "message", None).diagnostic().unwrap();
        assert_eq!(diag, "casandra message\n");
    }

    #[test]
    fn test_failure_with_error_appends_error_text() {
        let diag = outcome(ProbeStatus::Unknown, "message", Some("connection reset"))
            .diagnostic()
            .unwrap();
        assert_eq!(diag, "casandra message\nconnection reset");
    }

    #[test]
    fn test_error_with_successful_status_is_bare_error_text() {
        let diag = outcome(ProbeStatus::Success, "", Some("boom")).diagnostic().unwrap();
        assert_eq!(diag, "boom");
    }
}
