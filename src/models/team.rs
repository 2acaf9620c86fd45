//! Team category model.
//!
//! The team a task is assigned to is used only as a lookup key for the
//! resource allocation heuristic: each category carries a fixed share of
//! work-hours that should go to humans rather than bots.

use serde::{Deserialize, Serialize};

/// Team category a task is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    /// Software development (can be heavily automated).
    Development,
    /// Design work (needs more human input).
    Design,
    /// Testing and QA (most automatable).
    Testing,
    /// Marketing (needs human creativity).
    Marketing,
    /// Any other category; falls back to an even split.
    Custom(String),
}

impl Team {
    /// Percentage of total work-hours assigned to humans when a task has
    /// both humans and bots.
    ///
    /// | team | human share |
    /// |---|---|
    /// | Development | 40 |
    /// | Design | 70 |
    /// | Testing | 30 |
    /// | Marketing | 80 |
    /// | other | 50 |
    pub fn human_share(&self) -> u32 {
        match self {
            Team::Development => 40,
            Team::Design => 70,
            Team::Testing => 30,
            Team::Marketing => 80,
            Team::Custom(_) => 50,
        }
    }

    /// Display label for prompts and reports.
    pub fn label(&self) -> &str {
        match self {
            Team::Development => "Development",
            Team::Design => "Design",
            Team::Testing => "Testing",
            Team::Marketing => "Marketing",
            Team::Custom(name) => name,
        }
    }
}

impl Default for Team {
    fn default() -> Self {
        Team::Custom("Other".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_share_table() {
        assert_eq!(Team::Development.human_share(), 40);
        assert_eq!(Team::Design.human_share(), 70);
        assert_eq!(Team::Testing.human_share(), 30);
        assert_eq!(Team::Marketing.human_share(), 80);
        assert_eq!(Team::Custom("Legal".into()).human_share(), 50);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Team::Design.label(), "Design");
        assert_eq!(Team::Custom("Legal".into()).label(), "Legal");
        assert_eq!(Team::default().label(), "Other");
    }
}
