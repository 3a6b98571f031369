//! Message banner state.

use serde::{Deserialize, Serialize};

/// Severity of a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl MessageKind {
    /// Glyph drawn next to the content.
    pub fn icon(self) -> &'static str {
        match self {
            MessageKind::Success => "✓",
            MessageKind::Error => "✕",
            MessageKind::Info => "i",
            MessageKind::Warning => "!",
        }
    }
}

/// A message that is visible until the user closes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageState {
    kind: MessageKind,
    content: String,
    closable: bool,
    visible: bool,
}

impl MessageState {
    pub fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            closable: false,
            visible: true,
        }
    }

    /// Show a close button.
    pub fn closable(mut self) -> Self {
        self.closable = true;
        self
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_closable(&self) -> bool {
        self.closable
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide the message.
    ///
    /// Returns true only on the call that hid it, so the host's close
    /// callback fires once.
    pub fn close(&mut self) -> bool {
        if !self.closable || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }
}
