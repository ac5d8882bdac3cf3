// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::{Transition, apply_event, apply_record, apply_volunteer};
use crate::command::{Command, SharedCommand};
use crate::context::{Context, ContextChange, ContextId};
use crate::error::CoreError;
use crate::history::VersionedDataset;
use crate::outcome::{CommandOutcome, Notification};
use crate::parser::{SHARED, resolve, vocabulary};
use crate::state::{Dataset, JoinedRecord};
use crate::view::{Filter, Filters, filtered};
use socialcare_domain::{Event, Record, Volunteer};
use tracing::{debug, info, warn};

/// The session: history of datasets, active context, view filters and the
/// log of entered command lines.
///
/// Every command runs to completion under `&mut self`. A failed command
/// leaves the history, the filters and the context as they were.
#[derive(Debug, Default)]
pub struct Engine {
    history: VersionedDataset,
    context: Context,
    filters: Filters,
    log: Vec<String>,
}

impl Engine {
    /// Creates an engine whose history starts at `initial`.
    #[must_use]
    pub fn new(initial: Dataset) -> Self {
        Self {
            history: VersionedDataset::new(initial),
            context: Context::new(),
            filters: Filters::default(),
            log: Vec::new(),
        }
    }

    /// Resolves and executes `input` in the active context.
    ///
    /// # Errors
    ///
    /// Returns the `CoreError` describing why the command was rejected.
    pub fn execute(&mut self, input: &str) -> Result<CommandOutcome, CoreError> {
        let context: ContextId = self.context.id();
        self.run_logged(context, input)
    }

    /// Resolves and executes `input` against the vocabulary of the context
    /// named by `context_id`.
    ///
    /// The session context itself only moves on `switch` or `manage`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownContext` if `context_id` is not recognised,
    /// otherwise the error of the rejected command.
    pub fn execute_in(
        &mut self,
        context_id: &str,
        input: &str,
    ) -> Result<CommandOutcome, CoreError> {
        match ContextId::parse(context_id) {
            Ok(context) => self.run_logged(context, input),
            Err(error) => {
                self.record_input(input);
                warn!(context_id, error = %error, "Rejected command");
                Err(error)
            }
        }
    }

    fn run_logged(&mut self, context: ContextId, input: &str) -> Result<CommandOutcome, CoreError> {
        debug!(context = context.as_str(), input, "Command received");
        let result: Result<CommandOutcome, CoreError> = self.run(context, input);
        self.record_input(input);

        match &result {
            Ok(outcome) => debug!(message = %outcome.message, "Command succeeded"),
            Err(error) => warn!(
                context = context.as_str(),
                kind = error.kind().as_str(),
                error = %error,
                "Rejected command"
            ),
        }
        result
    }

    fn record_input(&mut self, input: &str) {
        let trimmed: &str = input.trim();
        if !trimmed.is_empty() {
            self.log.push(trimmed.to_string());
        }
    }

    fn run(&mut self, context: ContextId, input: &str) -> Result<CommandOutcome, CoreError> {
        let command: Command = resolve(context, input)?;
        let transition: Transition = match command {
            Command::Shared(shared) => return self.run_shared(context, shared),
            Command::Volunteer(command) => {
                apply_volunteer(self.history.live(), &self.filters, command)?
            }
            Command::Event(command) => apply_event(self.history.live(), &self.filters, command)?,
            Command::Record(command) => apply_record(self.history.live(), &self.filters, command)?,
        };
        Ok(self.finish(transition))
    }

    /// Installs a successful transition. Cannot fail.
    fn finish(&mut self, transition: Transition) -> CommandOutcome {
        if let Some(next) = transition.dataset {
            self.history.commit(next);
            info!(
                snapshot = self.history.current_index(),
                snapshots = self.history.len(),
                "Committed snapshot"
            );
        }
        self.filters = transition.filters;

        let mut notification: Option<Notification> = transition.notification;
        if transition.context == Some(ContextId::Record) {
            let change: ContextChange = self.context.switch_to_record_context();
            log_context_change(change);
            notification = Some(Notification::ContextChanged { context: change.to });
        }

        CommandOutcome {
            message: transition.message,
            notification,
        }
    }

    fn run_shared(
        &mut self,
        context: ContextId,
        command: SharedCommand,
    ) -> Result<CommandOutcome, CoreError> {
        match command {
            SharedCommand::History => Ok(CommandOutcome::new(self.history_message())),
            SharedCommand::Undo => {
                self.history.undo()?;
                self.filters = Filters::default();
                info!(
                    snapshot = self.history.current_index(),
                    snapshots = self.history.len(),
                    "Undo"
                );
                Ok(CommandOutcome::new(String::from("Undo success!")))
            }
            SharedCommand::Redo => {
                self.history.redo()?;
                self.filters = Filters::default();
                info!(
                    snapshot = self.history.current_index(),
                    snapshots = self.history.len(),
                    "Redo"
                );
                Ok(CommandOutcome::new(String::from("Redo success!")))
            }
            SharedCommand::Exit => Ok(CommandOutcome::with_notification(
                String::from("Exiting Social Care as requested ..."),
                Notification::Exit,
            )),
            SharedCommand::Help => Ok(CommandOutcome::with_notification(
                help_text(context),
                Notification::ShowHelp,
            )),
            SharedCommand::Switch(target) => {
                let change: ContextChange = self.context.set(target);
                log_context_change(change);
                Ok(CommandOutcome::with_notification(
                    format!("Switched to {} context", target.display_name()),
                    Notification::ContextChanged { context: target },
                ))
            }
        }
    }

    fn history_message(&self) -> String {
        if self.log.is_empty() {
            return String::from("You have not yet entered any commands.");
        }
        let mut lines: Vec<&str> = self.log.iter().map(String::as_str).collect();
        lines.reverse();
        format!(
            "Entered commands (from most recent to earliest):\n{}",
            lines.join("\n")
        )
    }

    /// Replaces all data with `data` as the only history entry. Not undoable.
    pub fn reset_data(&mut self, data: Dataset) {
        self.history.reset(data);
        self.filters = Filters::default();
        info!(
            volunteers = self.dataset().volunteers().len(),
            events = self.dataset().events().len(),
            records = self.dataset().records().len(),
            "Dataset reset"
        );
    }

    /// Returns the active context.
    #[must_use]
    pub const fn context(&self) -> ContextId {
        self.context.id()
    }

    /// Returns the display name of the active context.
    #[must_use]
    pub const fn context_name(&self) -> &'static str {
        self.context.name()
    }

    /// Returns the dataset at the current history position.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        self.history.live()
    }

    #[must_use]
    pub const fn history(&self) -> &VersionedDataset {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Returns the entered command lines, oldest first.
    #[must_use]
    pub fn command_log(&self) -> &[String] {
        &self.log
    }

    #[must_use]
    pub fn filtered_volunteers(&self) -> Vec<&Volunteer> {
        filtered(self.dataset().volunteers(), &self.filters.volunteers)
    }

    #[must_use]
    pub fn filtered_events(&self) -> Vec<&Event> {
        filtered(self.dataset().events(), &self.filters.events)
    }

    #[must_use]
    pub fn filtered_records(&self) -> Vec<&Record> {
        filtered(self.dataset().records(), &self.filters.records)
    }

    /// Returns the filtered records joined with their volunteer and event.
    #[must_use]
    pub fn joined_records(&self) -> Vec<JoinedRecord<'_>> {
        self.filtered_records()
            .into_iter()
            .map(|record| self.dataset().join(record))
            .collect()
    }

    pub fn update_volunteer_filter(&mut self, filter: Filter<Volunteer>) {
        self.filters.volunteers = filter;
    }

    pub fn update_event_filter(&mut self, filter: Filter<Event>) {
        self.filters.events = filter;
    }

    pub fn update_record_filter(&mut self, filter: Filter<Record>) {
        self.filters.records = filter;
    }
}

fn log_context_change(change: ContextChange) {
    if change.is_noop() {
        debug!(context = change.to.as_str(), "Context unchanged");
    } else {
        info!(
            from = change.from.as_str(),
            to = change.to.as_str(),
            "Context switched"
        );
    }
}

/// Returns the usage text of every command available in `context`.
#[must_use]
pub fn help_text(context: ContextId) -> String {
    let usages: Vec<&str> = SHARED
        .iter()
        .chain(vocabulary(context))
        .map(|spec| spec.usage)
        .collect();
    format!(
        "Commands available in {} context:\n\n{}",
        context.display_name(),
        usages.join("\n\n")
    )
}
