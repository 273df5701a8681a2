use std::fmt;

/// Lifecycle of a crawl engine
///
/// An engine runs exactly one crawl, so the only legal path is
/// `Idle -> Running -> Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlPhase {
    /// Created, nothing fetched yet
    Idle,

    /// Levels are being processed
    Running,

    /// Budget met or frontier exhausted
    Done,
}

impl CrawlPhase {
    /// Returns true if moving from `self` to `next` is allowed
    pub fn can_transition_to(&self, next: CrawlPhase) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Running) | (Self::Running, Self::Done)
        )
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Done => "done",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_transitions() {
        assert!(CrawlPhase::Idle.can_transition_to(CrawlPhase::Running));
        assert!(CrawlPhase::Running.can_transition_to(CrawlPhase::Done));
    }

    #[test]
    fn test_illegal_transitions() {
        assert!(!CrawlPhase::Idle.can_transition_to(CrawlPhase::Done));
        assert!(!CrawlPhase::Done.can_transition_to(CrawlPhase::Running));
        assert!(!CrawlPhase::Done.can_transition_to(CrawlPhase::Idle));
        assert!(!CrawlPhase::Running.can_transition_to(CrawlPhase::Running));
    }
}
