//! Action - What the gatekeeper can do with a visitor at the gate

use super::visitor::VisitorCategory;

/// One of the three resolutions available for a visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Let the visitor in
    Accept,
    /// Turn the visitor away
    Reject,
    /// Face the visitor head-on
    Challenge,
}

impl Action {
    /// Every action, in display order
    pub const ALL: [Action; 3] = [Action::Accept, Action::Reject, Action::Challenge];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Accept => "accept",
            Action::Reject => "reject",
            Action::Challenge => "challenge",
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Action {
    type Err = ParseActionError;

    /// Accepts the full name or its first letter, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accept" | "a" => Ok(Action::Accept),
            "reject" | "r" => Ok(Action::Reject),
            "challenge" | "c" => Ok(Action::Challenge),
            other => Err(ParseActionError {
                input: other.to_string(),
            }),
        }
    }
}

/// Returned when a string does not name an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseActionError {
    pub input: String,
}

impl core::fmt::Display for ParseActionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Unknown action '{}' (expected accept, reject or challenge)",
            self.input
        )
    }
}

impl std::error::Error for ParseActionError {}

/// Who may be challenged
///
/// Every visitor carries a challenge effect, but the gate only offers
/// the challenge option for complex visitors by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChallengePolicy {
    /// Challenge is legal only for `Complex` visitors
    #[default]
    ComplexOnly,
    /// Challenge is legal for every visitor
    Universal,
}

impl ChallengePolicy {
    /// Whether `action` may be taken against a visitor of `category`
    pub fn permits(&self, category: VisitorCategory, action: Action) -> bool {
        match (self, action) {
            (_, Action::Accept | Action::Reject) => true,
            (ChallengePolicy::Universal, Action::Challenge) => true,
            (ChallengePolicy::ComplexOnly, Action::Challenge) => {
                category == VisitorCategory::Complex
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!("accept".parse::<Action>().unwrap(), Action::Accept);
        assert_eq!("R".parse::<Action>().unwrap(), Action::Reject);
        assert_eq!(" challenge ".parse::<Action>().unwrap(), Action::Challenge);
    }

    #[test]
    fn test_parse_unknown_action() {
        let err = "flee".parse::<Action>().unwrap_err();
        assert_eq!(err.input, "flee");
        assert!(err.to_string().contains("flee"));
    }

    #[test]
    fn test_complex_only_policy() {
        let policy = ChallengePolicy::ComplexOnly;
        assert!(policy.permits(VisitorCategory::Complex, Action::Challenge));
        assert!(!policy.permits(VisitorCategory::Negative, Action::Challenge));
        assert!(!policy.permits(VisitorCategory::Positive, Action::Challenge));
        assert!(policy.permits(VisitorCategory::Positive, Action::Accept));
        assert!(policy.permits(VisitorCategory::Negative, Action::Reject));
    }

    #[test]
    fn test_universal_policy() {
        let policy = ChallengePolicy::Universal;
        for action in Action::ALL {
            assert!(policy.permits(VisitorCategory::Negative, action));
        }
    }
}
