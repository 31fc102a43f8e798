//! Skill category enum and proficiency bounds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lowest accepted proficiency level.
pub const PROFICIENCY_MIN: i64 = 1;

/// Highest accepted proficiency level.
pub const PROFICIENCY_MAX: i64 = 5;

/// Valid category values, in display order.
pub const VALID_CATEGORIES: &[&str] = &["flutter", "programming", "tools", "soft"];

// ---------------------------------------------------------------------------
// SkillCategory
// ---------------------------------------------------------------------------

/// Closed set of skill groupings shown on the skills page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Flutter,
    Programming,
    Tools,
    Soft,
}

impl SkillCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Flutter => "flutter",
            SkillCategory::Programming => "programming",
            SkillCategory::Tools => "tools",
            SkillCategory::Soft => "soft",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flutter" => Ok(SkillCategory::Flutter),
            "programming" => Ok(SkillCategory::Programming),
            "tools" => Ok(SkillCategory::Tools),
            "soft" => Ok(SkillCategory::Soft),
            other => Err(format!(
                "Invalid skill category '{other}'. Must be one of: {VALID_CATEGORIES:?}"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Whether `proficiency` lies in `[PROFICIENCY_MIN, PROFICIENCY_MAX]`.
pub fn is_valid_proficiency(proficiency: i64) -> bool {
    (PROFICIENCY_MIN..=PROFICIENCY_MAX).contains(&proficiency)
}

/// Whether `category` is one of [`VALID_CATEGORIES`]. Case-sensitive.
pub fn is_valid_category(category: &str) -> bool {
    VALID_CATEGORIES.contains(&category)
}
