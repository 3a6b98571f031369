//! Story replay.
//!
//! Each step is applied to a fresh engine. Host callbacks are wired to a
//! shared log so notifications land in the transcript right after the step
//! that caused them.

use std::cell::RefCell;
use std::rc::Rc;

use bloom_core::{MenuItemId, WidgetConfig};
use bloom_widgets::{
    MenuLayout, MenuListener, MenuNode, MenuRow, MenuRowKind, MenuState, MessageState, OpenSet,
    ProgressKind, ProgressState, SelectListener, SelectState, SelectTag, SelectValue,
};
use serde::Serialize;

use crate::story::{
    MenuStep, MenuStory, MessageStep, MessageStory, ProgressStory, SelectStep, SelectStory, Story,
};

/// Result of replaying a story.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub story: String,
    pub transcript: Vec<String>,
    pub state: Snapshot,
}

impl Outcome {
    /// Transcript as one string, one line per entry.
    pub fn transcript_text(&self) -> String {
        self.transcript.join("\n")
    }
}

/// Final widget state after the last step.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "widget", rename_all = "lowercase")]
pub enum Snapshot {
    Menu {
        open: OpenSet,
        selected: Option<MenuItemId>,
        rows: Vec<MenuRow>,
    },
    Select {
        open: bool,
        value: SelectValue,
        search: String,
        tags: Vec<SelectTag>,
    },
    Message {
        visible: bool,
    },
    Progress {
        stroke_color: String,
        info: Option<String>,
        stroke_width: u32,
        line_length: u32,
        border_radius: u32,
    },
}

/// Replay a story against its widget engine.
pub fn replay(story: &Story, config: &WidgetConfig) -> Outcome {
    tracing::info!("Replaying story '{}'", story.name());

    let mut transcript = Vec::new();
    let state = match story {
        Story::Menu(menu) => replay_menu(menu, config, &mut transcript),
        Story::Select(select) => replay_select(select, config, &mut transcript),
        Story::Message(message) => replay_message(message, &mut transcript),
        Story::Progress(progress) => replay_progress(progress, config, &mut transcript),
    };

    Outcome {
        story: story.name().to_string(),
        transcript,
        state,
    }
}

// =============================================================================
// Notification Log
// =============================================================================

/// Collects host notifications from listeners.
#[derive(Clone, Default)]
struct NotificationLog(Rc<RefCell<Vec<String>>>);

impl NotificationLog {
    fn push(&self, line: String) {
        self.0.borrow_mut().push(line);
    }

    /// Move collected lines into the transcript, indented under their step.
    fn drain_into(&self, transcript: &mut Vec<String>) {
        transcript.extend(self.0.borrow_mut().drain(..).map(|line| format!("  {}", line)));
    }
}

impl MenuListener for NotificationLog {
    fn on_select(&self, id: &MenuItemId) {
        self.push(format!("select {}", id));
    }

    fn on_open_change(&self, open: &OpenSet) {
        self.push(format!("open_change {}", format_open(open)));
    }
}

impl SelectListener for NotificationLog {
    fn on_change(&self, value: &SelectValue) {
        self.push(format!("change {}", format_value(value)));
    }
}

// =============================================================================
// Menu
// =============================================================================

fn replay_menu(story: &MenuStory, config: &WidgetConfig, transcript: &mut Vec<String>) -> Snapshot {
    let mode = story.mode.unwrap_or(config.menu.mode);
    let theme = story.theme.unwrap_or(config.menu.theme);
    let log = NotificationLog::default();

    let mut state = MenuState::new(mode, theme)
        .with_open(story.default_open.iter().cloned())
        .with_listener(Box::new(log.clone()));
    if let Some(id) = &story.default_selected {
        state = state.with_default_selected(id.clone());
    }

    transcript.push(format!("story: {} ({} menu)", story.name, mode.as_str()));

    for step in &story.steps {
        match step {
            MenuStep::Toggle(id) => {
                transcript.push(format!("> toggle {}", id));
                state.toggle_submenu(id.clone());
            }
            MenuStep::Select(id) => {
                transcript.push(format!("> select {}", id));
                state.select_item(id.clone());
            }
            MenuStep::Activate(id) => {
                transcript.push(format!("> activate {}", id));
                match MenuNode::find(&story.tree, id) {
                    Some(node) => {
                        if !state.activate(node) {
                            transcript.push("  ignored".to_string());
                        }
                    }
                    None => {
                        tracing::warn!("Story '{}': no node with id {}", story.name, id);
                        transcript.push("  not found".to_string());
                    }
                }
            }
        }
        log.drain_into(transcript);
    }

    let rows = state.rows(&story.tree, &MenuLayout::from(&config.menu));
    if !rows.is_empty() {
        transcript.push("rows:".to_string());
        transcript.extend(rows.iter().map(format_row));
    }

    Snapshot::Menu {
        open: state.open_set().clone(),
        selected: state.selected().cloned(),
        rows,
    }
}

fn format_open(open: &OpenSet) -> String {
    let ids: Vec<&str> = open.iter().map(MenuItemId::as_str).collect();
    format!("[{}]", ids.join(", "))
}

fn format_row(row: &MenuRow) -> String {
    let marker = match row.kind {
        MenuRowKind::Item => "-",
        MenuRowKind::SubMenuTitle if row.open => "v",
        MenuRowKind::SubMenuTitle => ">",
        MenuRowKind::GroupTitle => "#",
    };
    let mut line = format!("  {}{} {}", "  ".repeat(row.depth), marker, row.label);
    if row.selected {
        line.push_str(" *");
    }
    if row.disabled {
        line.push_str(" (disabled)");
    }
    line
}

// =============================================================================
// Select
// =============================================================================

fn replay_select(
    story: &SelectStory,
    config: &WidgetConfig,
    transcript: &mut Vec<String>,
) -> Snapshot {
    let log = NotificationLog::default();

    let mut select = SelectState::new(story.options.clone()).with_texts(&config.select);
    if story.multiple {
        select = select.multiple();
    }
    if story.searchable {
        select = select.searchable();
    }
    if story.disabled {
        select = select.disabled();
    }
    if story.allow_clear {
        select = select.allow_clear();
    }
    if let Some(count) = story.max_tag_count {
        select = select.with_max_tag_count(count);
    }
    let mut select = select
        .with_default(story.default.iter().cloned())
        .with_listener(Box::new(log.clone()));

    transcript.push(format!("story: {} (select)", story.name));

    for step in &story.steps {
        match step {
            SelectStep::Click => {
                transcript.push("> click".to_string());
                select.toggle_open();
            }
            SelectStep::ClickOutside => {
                transcript.push("> click outside".to_string());
                select.click_outside();
            }
            SelectStep::Search(text) => {
                transcript.push(format!("> search {:?}", text));
                select.set_search(text.clone());
            }
            SelectStep::Key(key) => {
                transcript.push(format!("> key {:?}", key).to_lowercase());
                select.key_down(*key);
            }
            SelectStep::Choose(value) => {
                transcript.push(format!("> choose {}", value));
                select.choose(value);
            }
            SelectStep::Clear => {
                transcript.push("> clear".to_string());
                if select.clear().is_none() {
                    transcript.push("  ignored".to_string());
                }
            }
        }
        log.drain_into(transcript);
        transcript.push(format!("  {}", format_select(&select)));
    }

    let tags = select.tags();
    let labels: Vec<&str> = tags.iter().map(|t| t.label.as_str()).collect();
    transcript.push(format!("tags: [{}]", labels.join(", ")));
    if let Some(placeholder) = select.placeholder() {
        transcript.push(format!("placeholder: {}", placeholder));
    }

    Snapshot::Select {
        open: select.is_open(),
        value: select.value().clone(),
        search: select.search().to_string(),
        tags,
    }
}

fn format_value(value: &SelectValue) -> String {
    match value {
        SelectValue::Single(None) => "(none)".to_string(),
        SelectValue::Single(Some(value)) => value.clone(),
        SelectValue::Multiple(values) => format!("[{}]", values.join(", ")),
    }
}

fn format_select(select: &SelectState) -> String {
    let highlight = select
        .highlighted()
        .map_or_else(|| "-".to_string(), |i| i.to_string());
    let mut line = format!(
        "{} highlight={} matches={} value={}",
        if select.is_open() { "open" } else { "closed" },
        highlight,
        select.filtered_options().len(),
        format_value(select.value())
    );
    if let Some(empty) = select.empty_text() {
        line.push_str(&format!(" ({})", empty));
    }
    line
}

// =============================================================================
// Message
// =============================================================================

fn replay_message(story: &MessageStory, transcript: &mut Vec<String>) -> Snapshot {
    let mut message = MessageState::new(story.kind, story.content.clone());
    if story.closable {
        message = message.closable();
    }

    transcript.push(format!("story: {} (message)", story.name));
    transcript.push(format!("  [{}] {}", message.kind().icon(), message.content()));

    for step in &story.steps {
        match step {
            MessageStep::Close => {
                transcript.push("> close".to_string());
                let line = if message.close() { "  closed" } else { "  ignored" };
                transcript.push(line.to_string());
            }
        }
    }

    Snapshot::Message {
        visible: message.is_visible(),
    }
}

// =============================================================================
// Progress
// =============================================================================

fn replay_progress(
    story: &ProgressStory,
    config: &WidgetConfig,
    transcript: &mut Vec<String>,
) -> Snapshot {
    let mut progress = ProgressState::new(story.percent, &config.progress)
        .with_kind(story.kind)
        .with_size(story.size, &config.progress)
        .with_status(story.status);
    if let Some(percent) = story.success_percent {
        progress = progress.with_success_percent(percent);
    }
    if let Some(color) = &story.stroke_color {
        progress = progress.with_stroke_color(color.clone());
    }
    if !story.show_info {
        progress = progress.hide_info();
    }

    let metrics = progress.metrics();
    let info = progress.info_text();

    transcript.push(format!("story: {} (progress)", story.name));
    transcript.push(format!(
        "  {:?} {:?} {:?} stroke={} length={} radius={}",
        progress.kind(),
        progress.size(),
        progress.status(),
        metrics.stroke_width,
        metrics.line_length,
        metrics.border_radius
    )
    .to_lowercase());
    transcript.push(format!("  color={}", progress.stroke_color()));
    if progress.kind() == ProgressKind::Circle {
        let circle = progress.circle_geometry();
        transcript.push(format!(
            "  circle radius={:.1} dash={:.1}",
            circle.radius, circle.dash
        ));
    }
    if let Some(text) = &info {
        transcript.push(format!("  info={}", text));
    }

    Snapshot::Progress {
        stroke_color: progress.stroke_color().to_string(),
        info,
        stroke_width: metrics.stroke_width,
        line_length: metrics.line_length,
        border_radius: metrics.border_radius,
    }
}
