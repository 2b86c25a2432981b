use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LabError;

/// One of the two outgoing edges of a question node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    /// The "yes" answer.
    Yes,
    /// The "no" answer.
    No,
}

impl Branch {
    /// Both branches in display order.
    pub const ALL: [Branch; 2] = [Branch::Yes, Branch::No];

    /// Upper-case label as shown in the path log.
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
        }
    }

    /// Thumb glyph shown next to the label.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Yes => "👍",
            Self::No => "👎",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
        }
    }
}

impl FromStr for Branch {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            other => Err(LabError::InvalidBranch(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_short_and_long_forms() {
        assert_eq!("yes".parse::<Branch>().unwrap(), Branch::Yes);
        assert_eq!(" N ".parse::<Branch>().unwrap(), Branch::No);
        assert_eq!("YES".parse::<Branch>().unwrap(), Branch::Yes);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "maybe".parse::<Branch>().unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn labels() {
        assert_eq!(Branch::Yes.label(), "YES");
        assert_eq!(Branch::No.label(), "NO");
        assert_eq!(Branch::No.to_string(), "no");
    }
}
