/// Password strength as a fill ratio in `0.0..=1.0`, driven by length only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PasswordStrength(f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StrengthLevel {
    Weak,
    Fair,
    Strong,
}

impl PasswordStrength {
    /// Ten characters or more is full strength.
    pub(crate) const FULL_LENGTH: usize = 10;

    pub(crate) fn of(password: &str) -> Self {
        let len = password.chars().count() as f64;
        Self((len / Self::FULL_LENGTH as f64).min(1.0))
    }

    pub(crate) fn ratio(self) -> f64 {
        self.0
    }

    pub(crate) fn percent(self) -> u16 {
        (self.0 * 100.0).round() as u16
    }

    pub(crate) fn level(self) -> StrengthLevel {
        if self.0 < 0.4 {
            StrengthLevel::Weak
        } else if self.0 < 0.7 {
            StrengthLevel::Fair
        } else {
            StrengthLevel::Strong
        }
    }
}

impl StrengthLevel {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Strong => "strong",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
