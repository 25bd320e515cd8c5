/// Notification severity and its toast palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Lenient parse used for the JS-facing `type` argument; unknown names are `Info`,
    /// so the toast class is always one of the four `notification-<kind>` classes.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    #[inline]
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#28a745",
            Self::Error => "#dc3545",
            Self::Warning => "#ffc107",
            Self::Info => "#17a2b8",
        }
    }

    /// `notification notification-<kind>`
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}
