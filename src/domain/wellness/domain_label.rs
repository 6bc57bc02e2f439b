//! DomainLabel - the persona a message is routed to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::WellnessCategory;
use crate::domain::foundation::ValidationError;

/// Routing target for a single user message.
///
/// One of the eight wellness dimensions, or the general `main` persona.
/// Serialized as its lowercase token (`"financial"`, `"main"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DomainLabel {
    Wellness(WellnessCategory),
    Main,
}

impl DomainLabel {
    /// Every label the router may produce, `main` last.
    pub fn all() -> Vec<DomainLabel> {
        WellnessCategory::all()
            .iter()
            .copied()
            .map(DomainLabel::Wellness)
            .chain(std::iter::once(DomainLabel::Main))
            .collect()
    }

    /// Returns the lowercase token for this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainLabel::Wellness(category) => category.slug(),
            DomainLabel::Main => "main",
        }
    }

    /// Returns the wellness category, if this is not `main`.
    pub fn category(&self) -> Option<WellnessCategory> {
        match self {
            DomainLabel::Wellness(category) => Some(*category),
            DomainLabel::Main => None,
        }
    }

    /// Whether clarification round-trips apply in this domain.
    ///
    /// Only the eight wellness personas collect structured goal fields.
    pub fn is_clarify_capable(&self) -> bool {
        matches!(self, DomainLabel::Wellness(_))
    }

    /// Parses an exact lowercase token. Anything else is `None`.
    pub fn from_token(token: &str) -> Option<DomainLabel> {
        if token == "main" {
            return Some(DomainLabel::Main);
        }
        WellnessCategory::all()
            .iter()
            .copied()
            .find(|c| c.slug() == token)
            .map(DomainLabel::Wellness)
    }
}

impl Default for DomainLabel {
    fn default() -> Self {
        DomainLabel::Main
    }
}

impl From<WellnessCategory> for DomainLabel {
    fn from(category: WellnessCategory) -> Self {
        DomainLabel::Wellness(category)
    }
}

impl fmt::Display for DomainLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DomainLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        DomainLabel::from_token(&lowered).ok_or_else(|| {
            ValidationError::invalid_format("domain", format!("unknown domain '{}'", s))
        })
    }
}

impl TryFrom<String> for DomainLabel {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DomainLabel> for String {
    fn from(label: DomainLabel) -> Self {
        label.as_str().to_string()
    }
}
