//! Component types and the context-type sets processors and patterns declare.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The kind of component currently selected in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    #[default]
    Container,
    Text,
    Heading,
    Image,
    Button,
    Link,
    Input,
    Chart,
    Carousel,
    Video,
}

impl ComponentType {
    pub const ALL: [ComponentType; 10] = [
        Self::Container,
        Self::Text,
        Self::Heading,
        Self::Image,
        Self::Button,
        Self::Link,
        Self::Input,
        Self::Chart,
        Self::Carousel,
        Self::Video,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Text => "text",
            Self::Heading => "heading",
            Self::Image => "image",
            Self::Button => "button",
            Self::Link => "link",
            Self::Input => "input",
            Self::Chart => "chart",
            Self::Carousel => "carousel",
            Self::Video => "video",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL.iter().copied().find(|c| c.name() == lower)
    }

    /// Components whose "color" and "size" mean the text itself rather than
    /// the box around it.
    pub fn is_text_like(self) -> bool {
        matches!(self, Self::Text | Self::Heading | Self::Link | Self::Button)
    }
}

/// The component types a processor or pattern applies to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContextTypes {
    /// The "ALL" sentinel.
    #[default]
    All,
    Only(SmallVec<[ComponentType; 4]>),
}

impl ContextTypes {
    /// Build from pack names. `"all"` anywhere in the list yields [`ContextTypes::All`].
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, String> {
        if names.is_empty() || names.iter().any(|n| n.as_ref().eq_ignore_ascii_case("all")) {
            return Ok(Self::All);
        }
        let mut types = SmallVec::new();
        for name in names {
            let ct = ComponentType::parse_str(name.as_ref())
                .ok_or_else(|| format!("unknown component type '{}'", name.as_ref()))?;
            if !types.contains(&ct) {
                types.push(ct);
            }
        }
        Ok(Self::Only(types))
    }

    pub fn only(types: &[ComponentType]) -> Self {
        Self::Only(types.iter().copied().collect())
    }

    pub fn includes(&self, component: ComponentType) -> bool {
        match self {
            Self::All => true,
            Self::Only(types) => types.contains(&component),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The first explicitly listed type, if any.
    pub fn first(&self) -> Option<ComponentType> {
        match self {
            Self::All => None,
            Self::Only(types) => types.first().copied(),
        }
    }
}
