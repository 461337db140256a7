//! Keyword fast path: one-word layout and spacing commands skip scoring.

use std::borrow::Cow;

use restyle_core::types::{Domain, Length, LengthUnit};

/// Where a fast-path keyword goes and the command it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastRoute<'a> {
    pub domain: Domain,
    pub command: Cow<'a, str>,
}

const KEYWORDS: &[(&str, Domain, &str)] = &[
    ("horizontal", Domain::Layout, "flex-direction: row"),
    ("row", Domain::Layout, "flex-direction: row"),
    ("vertical", Domain::Layout, "flex-direction: column"),
    ("column", Domain::Layout, "flex-direction: column"),
    ("wrap", Domain::Layout, "flex-wrap: wrap"),
    ("nowrap", Domain::Layout, "flex-wrap: nowrap"),
    ("no wrap", Domain::Layout, "flex-wrap: nowrap"),
    ("center", Domain::Layout, "center everything"),
    ("left", Domain::Layout, "justify-content: flex-start"),
    ("right", Domain::Layout, "justify-content: flex-end"),
    ("top", Domain::Layout, "align-items: flex-start"),
    ("bottom", Domain::Layout, "align-items: flex-end"),
    ("stretch", Domain::Layout, "align-items: stretch"),
    ("space between", Domain::Layout, "justify-content: space-between"),
    ("space around", Domain::Layout, "justify-content: space-around"),
    ("space evenly", Domain::Layout, "justify-content: space-evenly"),
    ("small", Domain::Spacing, "set padding to small"),
    ("medium", Domain::Spacing, "set padding to medium"),
    ("large", Domain::Spacing, "set padding to large"),
    ("compact", Domain::Spacing, "set padding to small"),
    ("spacious", Domain::Spacing, "set padding to large"),
];

/// Route a normalized command, if it is a fast-path keyword or a bare
/// `add`/`remove` pixel amount.
pub fn lookup(text: &str) -> Option<FastRoute<'_>> {
    let lower = text.trim().to_ascii_lowercase();
    if let Some((_, domain, command)) = KEYWORDS.iter().find(|(keyword, _, _)| *keyword == lower) {
        return Some(FastRoute {
            domain: *domain,
            command: Cow::Borrowed(*command),
        });
    }
    is_pixel_amount(&lower).then(|| FastRoute {
        domain: Domain::Spacing,
        command: Cow::Borrowed(text),
    })
}

fn is_pixel_amount(lower: &str) -> bool {
    let Some(amount) = lower
        .strip_prefix("add ")
        .or_else(|| lower.strip_prefix("remove "))
    else {
        return false;
    };
    Length::parse(&amount.replace(' ', "")).is_some_and(|len| len.unit == LengthUnit::Px)
}
