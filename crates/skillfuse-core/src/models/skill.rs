use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One assessed skill dimension, from a fixed enumerated set.
///
/// Serialized as its snake_case name through `String` so it also works as a
/// map key in every document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Skill {
    Communication,
    Collaboration,
    CriticalThinking,
    Creativity,
    ProblemSolving,
}

impl Skill {
    /// All skills, in scoring order.
    pub const ALL: [Skill; 5] = [
        Self::Communication,
        Self::Collaboration,
        Self::CriticalThinking,
        Self::Creativity,
        Self::ProblemSolving,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Communication => "communication",
            Self::Collaboration => "collaboration",
            Self::CriticalThinking => "critical_thinking",
            Self::Creativity => "creativity",
            Self::ProblemSolving => "problem_solving",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Skill {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|skill| skill.as_str() == s)
            .ok_or_else(|| format!("unknown skill: {s}"))
    }
}

impl TryFrom<String> for Skill {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Skill> for String {
    fn from(skill: Skill) -> Self {
        skill.as_str().to_string()
    }
}
