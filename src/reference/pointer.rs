//! `$ref` pointers and the component groups they can name.

use crate::Error;

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// `#/components/<group>/<id>` with a single-segment id.
static COMPONENT_POINTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#/components/([A-Za-z]+)/([^/]+)$").expect("component pointer pattern")
});

/// The nine named groups of the component table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentGroup {
    Schemas,
    Responses,
    Parameters,
    Examples,
    RequestBodies,
    Headers,
    SecuritySchemes,
    Links,
    Callbacks,
}

impl ComponentGroup {
    pub const ALL: [ComponentGroup; 9] = [
        Self::Schemas,
        Self::Responses,
        Self::Parameters,
        Self::Examples,
        Self::RequestBodies,
        Self::Headers,
        Self::SecuritySchemes,
        Self::Links,
        Self::Callbacks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Schemas => "schemas",
            Self::Responses => "responses",
            Self::Parameters => "parameters",
            Self::Examples => "examples",
            Self::RequestBodies => "requestBodies",
            Self::Headers => "headers",
            Self::SecuritySchemes => "securitySchemes",
            Self::Links => "links",
            Self::Callbacks => "callbacks",
        }
    }
}

impl fmt::Display for ComponentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentGroup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| Error::UnknownComponentGroup(s.to_string()))
    }
}

/// Where a `$ref` points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// An entry of this document's component table.
    Component { group: ComponentGroup, id: String },
    /// Anything else, kept verbatim and never resolved.
    External(String),
}

impl Reference {
    pub fn component(group: ComponentGroup, id: impl Into<String>) -> Self {
        Self::Component {
            group,
            id: id.into(),
        }
    }

    /// Classify a pointer string. Never fails: text that does not match the
    /// component template (or names an unknown group) stays external.
    pub fn parse(pointer: &str) -> Self {
        if let Some(caps) = COMPONENT_POINTER.captures(pointer) {
            if let (Some(group), Some(id)) = (caps.get(1), caps.get(2)) {
                if let Ok(group) = group.as_str().parse::<ComponentGroup>() {
                    return Self::component(group, id.as_str());
                }
            }
        }
        Self::External(pointer.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::External(pointer) if pointer.is_empty())
    }

    pub fn component_target(&self) -> Option<(ComponentGroup, &str)> {
        match self {
            Self::Component { group, id } => Some((*group, id.as_str())),
            Self::External(_) => None,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component { group, id } => write!(f, "#/components/{}/{}", group, id),
            Self::External(pointer) => f.write_str(pointer),
        }
    }
}

impl From<&str> for Reference {
    fn from(pointer: &str) -> Self {
        Self::parse(pointer)
    }
}
