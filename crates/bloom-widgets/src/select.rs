//! Select dropdown state.
//!
//! Covers the dropdown's open flag, the search filter, keyboard highlight and
//! single or multiple selection. Highlight indices always refer to the
//! filtered option list, which is what the dropdown shows.

use std::fmt;

use bloom_core::SelectConfig;
use serde::{Deserialize, Serialize};

/// One choice in a select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Create an enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark the option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Current value of a select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SelectValue {
    Single(Option<String>),
    /// Values in the order they were picked.
    Multiple(Vec<String>),
}

impl SelectValue {
    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            SelectValue::Single(value) => value.is_none(),
            SelectValue::Multiple(values) => values.is_empty(),
        }
    }

    /// Check if `value` is selected.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            SelectValue::Single(selected) => selected.as_deref() == Some(value),
            SelectValue::Multiple(values) => values.iter().any(|v| v == value),
        }
    }

    fn empty_like(&self) -> Self {
        match self {
            SelectValue::Single(_) => SelectValue::Single(None),
            SelectValue::Multiple(_) => SelectValue::Multiple(Vec::new()),
        }
    }
}

/// Keys the dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectKey {
    Up,
    Down,
    Enter,
    Escape,
}

/// A selected-value chip shown in the selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectTag {
    pub label: String,
    /// True for the trailing `+N...` chip.
    pub overflow: bool,
}

/// Host callback fired after the value changes.
#[cfg_attr(test, mockall::automock)]
pub trait SelectListener {
    fn on_change(&self, value: &SelectValue);
}

/// State of one select widget.
pub struct SelectState {
    options: Vec<SelectOption>,
    searchable: bool,
    disabled: bool,
    allow_clear: bool,
    max_tag_count: Option<usize>,
    placeholder: String,
    empty_text: String,

    open: bool,
    value: SelectValue,
    search: String,
    highlighted: Option<usize>,

    listener: Option<Box<dyn SelectListener>>,
}

impl SelectState {
    /// Create a closed single-value select.
    pub fn new(options: Vec<SelectOption>) -> Self {
        let texts = SelectConfig::default();
        Self {
            options,
            searchable: false,
            disabled: false,
            allow_clear: false,
            max_tag_count: None,
            placeholder: texts.placeholder,
            empty_text: texts.empty_text,
            open: false,
            value: SelectValue::Single(None),
            search: String::new(),
            highlighted: None,
            listener: None,
        }
    }

    /// Allow picking several values. Keeps any existing selection.
    pub fn multiple(mut self) -> Self {
        if let SelectValue::Single(value) = self.value {
            self.value = SelectValue::Multiple(value.into_iter().collect());
        }
        self
    }

    /// Enable the search input.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Ignore all clicks on the selector.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Show a clear button while something is selected.
    pub fn allow_clear(mut self) -> Self {
        self.allow_clear = true;
        self
    }

    /// Collapse chips beyond `count` into one overflow chip.
    pub fn with_max_tag_count(mut self, count: usize) -> Self {
        self.max_tag_count = Some(count);
        self
    }

    /// Use the placeholder and empty-list texts from config.
    pub fn with_texts(mut self, config: &SelectConfig) -> Self {
        self.placeholder = config.placeholder.clone();
        self.empty_text = config.empty_text.clone();
        self
    }

    /// Set the initial value. Single mode keeps only the first entry.
    ///
    /// Empty strings mean "no selection" and are skipped.
    pub fn with_default<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = values
            .into_iter()
            .map(Into::into)
            .filter(|value: &String| !value.is_empty());
        self.value = match self.value {
            SelectValue::Single(_) => SelectValue::Single(values.next()),
            SelectValue::Multiple(_) => SelectValue::Multiple(values.collect()),
        };
        self
    }

    /// Attach a change callback.
    pub fn with_listener(mut self, listener: Box<dyn SelectListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn value(&self) -> &SelectValue {
        &self.value
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self.value, SelectValue::Multiple(_))
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Index into [`Self::filtered_options`] of the highlighted option.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.value.contains(value)
    }

    /// Options whose label contains the search text, ignoring case.
    pub fn filtered_options(&self) -> Vec<&SelectOption> {
        let needle = self.search.to_lowercase();
        self.options
            .iter()
            .filter(|option| option.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// Check if the placeholder should be shown instead of a value.
    pub fn placeholder_visible(&self) -> bool {
        matches!(self.value, SelectValue::Single(None))
    }

    /// Placeholder text, while no single value is selected.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder_visible().then_some(self.placeholder.as_str())
    }

    /// Text shown in place of the option list when the search matches nothing.
    pub fn empty_text(&self) -> Option<&str> {
        self.filtered_options()
            .is_empty()
            .then_some(self.empty_text.as_str())
    }

    /// Check if the clear button should be shown.
    pub fn clear_visible(&self) -> bool {
        self.allow_clear && !self.value.is_empty()
    }

    /// Chips for the selected options, in option order.
    pub fn tags(&self) -> Vec<SelectTag> {
        let selected: Vec<&SelectOption> = self
            .options
            .iter()
            .filter(|option| self.value.contains(&option.value))
            .collect();

        let shown = match self.max_tag_count {
            Some(max) if self.is_multiple() && selected.len() > max => max,
            _ => selected.len(),
        };

        let mut tags: Vec<SelectTag> = selected[..shown]
            .iter()
            .map(|option| SelectTag {
                label: option.label.clone(),
                overflow: false,
            })
            .collect();

        if shown < selected.len() {
            tags.push(SelectTag {
                label: format!("+{}...", selected.len() - shown),
                overflow: true,
            });
        }
        tags
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Click on the selector. Does nothing while disabled.
    pub fn toggle_open(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.open = !self.open;
        true
    }

    /// Click anywhere outside the widget.
    pub fn click_outside(&mut self) {
        self.open = false;
        self.reset_search();
    }

    /// Update the search text. Ignored unless searchable.
    pub fn set_search(&mut self, text: impl Into<String>) {
        if !self.searchable {
            return;
        }
        self.search = text.into();
        self.highlighted = None;
    }

    /// Pick an option by value.
    ///
    /// Disabled or unknown options are ignored and return `None`. Single
    /// mode replaces the value and closes; multiple mode toggles the value.
    pub fn choose(&mut self, value: &str) -> Option<&SelectValue> {
        let option = self.options.iter().find(|o| o.value == value)?;
        if option.disabled {
            return None;
        }

        match &mut self.value {
            SelectValue::Multiple(values) => {
                if let Some(pos) = values.iter().position(|v| v == value) {
                    values.remove(pos);
                } else {
                    values.push(value.to_string());
                }
            }
            SelectValue::Single(selected) => {
                *selected = Some(value.to_string());
                self.open = false;
            }
        }
        self.reset_search();

        tracing::debug!("select value changed: {:?}", self.value);
        self.notify();
        Some(&self.value)
    }

    /// Press the clear button.
    ///
    /// Returns `None` without notifying unless the button is shown and the
    /// select is enabled.
    pub fn clear(&mut self) -> Option<&SelectValue> {
        if self.disabled || !self.clear_visible() {
            return None;
        }
        self.value = self.value.empty_like();
        tracing::debug!("select value cleared");
        self.notify();
        Some(&self.value)
    }

    /// Handle a key press. Ignored while closed. Returns whether it was handled.
    pub fn key_down(&mut self, key: SelectKey) -> bool {
        if !self.open {
            return false;
        }

        match key {
            SelectKey::Down => {
                let len = self.filtered_options().len();
                self.highlighted = match self.highlighted {
                    None if len > 0 => Some(0),
                    Some(i) if i + 1 < len => Some(i + 1),
                    other => other,
                };
            }
            SelectKey::Up => {
                if let Some(i) = self.highlighted {
                    if i > 0 {
                        self.highlighted = Some(i - 1);
                    }
                }
            }
            SelectKey::Enter => {
                let value = self
                    .highlighted
                    .and_then(|i| self.filtered_options().get(i).map(|o| o.value.clone()));
                if let Some(value) = value {
                    self.choose(&value);
                }
            }
            SelectKey::Escape => self.open = false,
        }
        true
    }

    // Highlight indexes the filtered list, so it goes with the search text.
    fn reset_search(&mut self) {
        self.search.clear();
        self.highlighted = None;
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            listener.on_change(&self.value);
        }
    }
}

impl fmt::Debug for SelectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectState")
            .field("options", &self.options.len())
            .field("open", &self.open)
            .field("value", &self.value)
            .field("search", &self.search)
            .field("highlighted", &self.highlighted)
            .finish()
    }
}
