use std::fmt;

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// File is usable but unusual
    Warning(String),
    /// File cannot be loaded as a map
    Failed(String),
}

impl CheckStatus {
    fn tag(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning(_) => "WARN",
            CheckStatus::Failed(_) => "FAIL",
        }
    }

    fn message(&self) -> Option<&str> {
        match self {
            CheckStatus::Ok => None,
            CheckStatus::Warning(msg) | CheckStatus::Failed(msg) => Some(msg),
        }
    }
}

/// A named check and its outcome
#[derive(Debug, Clone)]
pub struct ValidationCheck {
    /// Check name, one of the `CHECK_*` constants
    pub name: &'static str,
    /// Outcome
    pub status: CheckStatus,
}

impl ValidationCheck {
    pub(crate) fn ok(name: &'static str) -> Self {
        Self {
            name,
            status: CheckStatus::Ok,
        }
    }

    pub(crate) fn warning(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Warning(message.into()),
        }
    }

    pub(crate) fn failed(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Failed(message.into()),
        }
    }
}

/// Overall result of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every check passed
    Passed,
    /// No failures, at least one warning
    PassedWithWarnings,
    /// At least one check failed
    Failed,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => write!(f, "Validation PASSED"),
            Verdict::PassedWithWarnings => write!(f, "Validation PASSED with warnings"),
            Verdict::Failed => write!(f, "Validation FAILED"),
        }
    }
}

/// Every check run against one map file
#[derive(Debug)]
pub struct ValidationReport {
    /// File name or path as given to the validator
    pub name: String,
    /// Checks in the order they ran
    pub checks: Vec<ValidationCheck>,
}

impl ValidationReport {
    /// Empty report for `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checks: Vec::new(),
        }
    }

    /// Append a check
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// Status of the named check, if it was run
    pub fn status_of(&self, name: &str) -> Option<&CheckStatus> {
        self.checks.iter().find(|c| c.name == name).map(|c| &c.status)
    }

    /// Whether any check failed
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Whether any check warned
    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    /// Number of passed checks
    pub fn success_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Ok))
    }

    /// Number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Warning(_)))
    }

    /// Number of failures
    pub fn failure_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Failed(_)))
    }

    /// Overall result
    pub fn verdict(&self) -> Verdict {
        if self.has_failures() {
            Verdict::Failed
        } else if self.has_warnings() {
            Verdict::PassedWithWarnings
        } else {
            Verdict::Passed
        }
    }

    fn count(&self, pred: impl Fn(&CheckStatus) -> bool) -> usize {
        self.checks.iter().filter(|c| pred(&c.status)).count()
    }

    fn summary(&self) -> String {
        format!(
            "{} passed, {} warnings, {} failed",
            self.success_count(),
            self.warning_count(),
            self.failure_count()
        )
    }

    /// Render the report for a terminal, with colors when the
    /// `colorized_output` feature is enabled
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::style;

            let mut out = format!("{}\n", style(&self.name).bold().cyan());
            for check in &self.checks {
                let tag = format!("[{:<4}]", check.status.tag());
                let tag = match check.status {
                    CheckStatus::Ok => style(tag).green(),
                    CheckStatus::Warning(_) => style(tag).yellow(),
                    CheckStatus::Failed(_) => style(tag).red().bold(),
                };
                out.push_str(&format!("  {} {}", tag, check.name));
                if let Some(msg) = check.status.message() {
                    out.push_str(&format!(": {}", msg));
                }
                out.push('\n');
            }
            out.push_str(&format!("  {}\n", style(self.summary()).dim()));

            let verdict = self.verdict();
            let verdict = match verdict {
                Verdict::Passed => style(verdict.to_string()).green().bold(),
                Verdict::PassedWithWarnings => style(verdict.to_string()).yellow().bold(),
                Verdict::Failed => style(verdict.to_string()).red().bold(),
            };
            out.push_str(&format!("{}\n", verdict));
            out
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for check in &self.checks {
            write!(f, "  [{:<4}] {}", check.status.tag(), check.name)?;
            match check.status.message() {
                Some(msg) => writeln!(f, ": {}", msg)?,
                None => writeln!(f)?,
            }
        }
        writeln!(f, "  {}", self.summary())?;
        writeln!(f, "{}", self.verdict())
    }
}
