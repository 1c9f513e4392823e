//! Analysis task selector

use std::fmt;

/// The fixed set of analyses a caller can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Three bullet point summary
    Summary,
    /// Positive / neutral / negative classification
    Sentiment,
    /// Actionable next steps
    ActionItems,
}

impl Task {
    pub const ALL: [Task; 3] = [Task::Summary, Task::Sentiment, Task::ActionItems];

    /// Wire name of the task
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Summary => "summary",
            Task::Sentiment => "sentiment",
            Task::ActionItems => "action_items",
        }
    }

    /// Case-insensitive lookup; `None` for anything outside the fixed set.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|task| task.as_str() == name)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
