//! What a resolution produces: an applied patch or a clarification prompt.

use serde::{Deserialize, Serialize};

use super::patch::Patch;

/// The placeholder a follow-up template substitutes.
pub const FOLLOW_UP_PLACEHOLDER: &str = "{value}";

/// A patch plus a human-readable description of what changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedCommand {
    pub patch: Patch,
    pub message: String,
}

/// Command template the editor fills with the user's answer to a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUp {
    pub template: String,
}

impl FollowUp {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// The full command for `answer`, ready to feed back into resolution.
    pub fn render(&self, answer: &str) -> String {
        self.template.replace(FOLLOW_UP_PLACEHOLDER, answer.trim())
    }
}

/// A clarification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub message: String,
    pub options: Vec<String>,
    pub follow_up: FollowUp,
}

/// Outcome of a processor handling a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandResult {
    Applied(AppliedCommand),
    Prompt(Prompt),
}

impl CommandResult {
    pub fn applied(patch: Patch, message: impl Into<String>) -> Self {
        Self::Applied(AppliedCommand {
            patch,
            message: message.into(),
        })
    }

    pub fn prompt(
        message: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        follow_up: FollowUp,
    ) -> Self {
        Self::Prompt(Prompt {
            message: message.into(),
            options: options.into_iter().map(Into::into).collect(),
            follow_up,
        })
    }

    pub fn patch(&self) -> Option<&Patch> {
        match self {
            Self::Applied(applied) => Some(&applied.patch),
            Self::Prompt(_) => None,
        }
    }

    pub fn as_prompt(&self) -> Option<&Prompt> {
        match self {
            Self::Prompt(prompt) => Some(prompt),
            Self::Applied(_) => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Applied(applied) => &applied.message,
            Self::Prompt(prompt) => &prompt.message,
        }
    }
}

/// Which stage of the resolver produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPath {
    Followup,
    FastPath,
    DirectPattern,
    Scored,
}

/// A resolved command: who handled it, how it was reached and what came out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub processor_id: String,
    pub path: ResolutionPath,
    pub result: CommandResult,
}

impl Resolution {
    pub fn patch(&self) -> Option<&Patch> {
        self.result.patch()
    }
}
