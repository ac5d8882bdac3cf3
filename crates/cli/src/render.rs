// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use socialcare::{
    CommandOutcome, ContextId, CoreError, Engine, Index, JoinedRecord, Notification, SHARED,
    vocabulary,
};
use socialcare_domain::{Entity, EntityKind};
use std::fmt::Write;

/// Renders a failed command with its stable code.
#[must_use]
pub fn render_error(error: &CoreError) -> String {
    format!("Error [{}]: {error}", error.kind())
}

/// Renders a successful command and whatever view it affects.
#[must_use]
pub fn render_outcome(engine: &Engine, outcome: &CommandOutcome) -> String {
    let mut out: String = outcome.message.clone();
    match outcome.notification {
        Some(Notification::ContextChanged { context }) => {
            out.push('\n');
            out.push_str(&render_vocabulary(context));
            out.push('\n');
            out.push_str(&render_view(engine));
        }
        Some(Notification::Selected { kind, index }) => {
            out.push('\n');
            out.push_str(&render_selected(engine, kind, index));
        }
        Some(Notification::ShowHelp | Notification::Exit) => {}
        None => {
            out.push('\n');
            out.push_str(&render_view(engine));
        }
    }
    out
}

/// Lists the command words available in `context`.
#[must_use]
pub fn render_vocabulary(context: ContextId) -> String {
    let words: Vec<&str> = vocabulary(context)
        .iter()
        .chain(SHARED)
        .map(|spec| spec.word)
        .collect();
    format!(
        "[{}] commands: {}",
        context.display_name(),
        words.join(", ")
    )
}

/// Renders the filtered view of the active context as a numbered list.
#[must_use]
pub fn render_view(engine: &Engine) -> String {
    let mut out: String = format!("-- {} --", engine.context_name());
    match engine.context() {
        ContextId::Volunteer => {
            for (position, volunteer) in engine.filtered_volunteers().iter().enumerate() {
                let hours: u32 = engine.dataset().total_hours(&volunteer.id());
                let _ = write!(
                    out,
                    "\n{}. {volunteer} Total hours: {hours}",
                    position + 1
                );
            }
        }
        ContextId::Event => {
            for (position, event) in engine.filtered_events().iter().enumerate() {
                let _ = write!(out, "\n{}. {event}", position + 1);
            }
        }
        ContextId::Record => {
            for (position, row) in engine.joined_records().iter().enumerate() {
                let _ = write!(out, "\n{}. {}", position + 1, render_record(row));
            }
        }
    }
    out
}

fn render_record(row: &JoinedRecord<'_>) -> String {
    let volunteer: String = row.volunteer.map_or_else(
        || row.record.volunteer_id().to_string(),
        |volunteer| format!("{} ({})", volunteer.name(), volunteer.volunteer_id()),
    );
    let event: String = row.event.map_or_else(
        || row.record.event_id().to_string(),
        |event| format!("{} [{}]", event.name(), event.event_id()),
    );
    let mut line: String = format!("{volunteer} @ {event}: {} hour(s)", row.record.hour());
    if !row.record.remark().value().is_empty() {
        let _ = write!(line, " Remark: {}", row.record.remark());
    }
    line
}

fn render_selected(engine: &Engine, kind: EntityKind, index: Index) -> String {
    let position: usize = index.zero_based();
    let selected: Option<String> = match kind {
        EntityKind::Volunteer => engine
            .filtered_volunteers()
            .get(position)
            .map(ToString::to_string),
        EntityKind::Event => engine
            .filtered_events()
            .get(position)
            .map(ToString::to_string),
        EntityKind::Record => engine.joined_records().get(position).map(render_record),
    };
    selected.unwrap_or_default()
}
