use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Sprint,
    Hilly,
    Mountain,
    CurrentForm,
    Injury,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Sprint,
        Attribute::Hilly,
        Attribute::Mountain,
        Attribute::CurrentForm,
        Attribute::Injury,
    ];

    /// Penalty attributes always subtract from a score, whatever the sign of
    /// their stored weight.
    pub fn is_penalty(self) -> bool {
        matches!(self, Attribute::Injury)
    }

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Sprint => "Sprint",
            Attribute::Hilly => "Hilly",
            Attribute::Mountain => "Mountain",
            Attribute::CurrentForm => "CurrentForm",
            Attribute::Injury => "Injury",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
