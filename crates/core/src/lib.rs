// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod context;
mod engine;
mod error;
mod history;
mod outcome;
mod parser;
mod state;
mod tokenizer;
mod view;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{Transition, apply_event, apply_record, apply_volunteer};
pub use command::{
    Command, EventCommand, Index, RecordCommand, SharedCommand, VolunteerCommand,
};
pub use context::{Context, ContextChange, ContextId};
pub use engine::{Engine, help_text};
pub use error::{CoreError, ErrorKind};
pub use history::VersionedDataset;
pub use outcome::{CommandOutcome, Notification};
pub use parser::{CommandSpec, HELP_USAGE, SHARED, lookup, resolve, vocabulary};
pub use state::{Collection, Dataset, JoinedRecord};
pub use tokenizer::{ArgumentMultimap, Prefix, tokenize};
pub use view::{
    Filter, Filters, event_name_filter, filtered, record_keyword_filter, records_of_event,
    records_of_volunteer, volunteer_name_filter,
};
