// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of raw input into a [`Command`].
//!
//! Shared commands are looked up first and resolve the same way in every
//! context. Everything else is looked up in the table of the active context.

use crate::command::{
    Command, EventCommand, Index, RecordCommand, SharedCommand, VolunteerCommand,
};
use crate::context::ContextId;
use crate::error::CoreError;
use crate::tokenizer::{
    ArgumentMultimap, PREFIX_ADDRESS, PREFIX_BIRTHDAY, PREFIX_DESCRIPTION, PREFIX_EMAIL,
    PREFIX_END_DATE, PREFIX_END_TIME, PREFIX_GENDER, PREFIX_ID, PREFIX_LOCATION, PREFIX_NAME,
    PREFIX_PHONE, PREFIX_START_DATE, PREFIX_START_TIME, PREFIX_TAG, Prefix, tokenize,
};
use socialcare_domain::{
    Address, Birthday, Description, DomainError, Email, EventDate, EventPatch, EventTime, Gender,
    Location, Name, NewEvent, Phone, Tag, Volunteer, VolunteerId, VolunteerPatch, parse_tags,
};
use std::collections::BTreeSet;

/// One entry of a vocabulary table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// The command word.
    pub word: &'static str,
    /// Usage text shown when the arguments are malformed.
    pub usage: &'static str,
    /// Parses the arguments that follow the word.
    pub parse: fn(&str) -> Result<Command, CoreError>,
}

pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";
pub const HISTORY_USAGE: &str = "history: Lists the commands entered, most recent first.\nExample: history";
pub const UNDO_USAGE: &str = "undo: Restores the state before the previous change.\nExample: undo";
pub const REDO_USAGE: &str = "redo: Reapplies the most recently undone change.\nExample: redo";
pub const EXIT_USAGE: &str = "exit: Exits the program.\nExample: exit";
pub const SWITCH_USAGE: &str = "switch: Switches to another context.\n\
Parameters: -v (volunteers) | -e (events) | -r (records)\n\
Example: switch -e";

pub const VOLUNTEER_ADD_USAGE: &str = "add: Adds a volunteer.\n\
Parameters: i/ID n/NAME g/GENDER b/BIRTHDAY p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
Example: add i/S1234567A n/John Doe g/male b/01-01-1990 p/98765432 e/johnd@example.com a/311, Clementi Ave 2 t/friends";
pub const VOLUNTEER_EDIT_USAGE: &str = "edit: Edits the volunteer at the index shown in the volunteer list.\n\
Parameters: INDEX [n/NAME] [g/GENDER] [b/BIRTHDAY] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";
pub const VOLUNTEER_DELETE_USAGE: &str = "delete: Deletes the volunteer at the index shown in the volunteer list.\n\
Parameters: INDEX\n\
Example: delete 1";
pub const VOLUNTEER_SELECT_USAGE: &str = "select: Selects the volunteer at the index shown in the volunteer list.\n\
Parameters: INDEX\n\
Example: select 1";
pub const VOLUNTEER_FIND_USAGE: &str = "find: Finds volunteers whose names contain any of the keywords (case-insensitive).\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob";
pub const VOLUNTEER_LIST_USAGE: &str = "list: Lists all volunteers.\nExample: list";
pub const VOLUNTEER_CLEAR_USAGE: &str = "clear: Removes all volunteers and their records.\nExample: clear";
pub const VOLUNTEER_MANAGE_USAGE: &str = "manage: Shows the records of the volunteer at the index shown in the volunteer list.\n\
Parameters: INDEX\n\
Example: manage 1";

pub const EVENT_ADD_USAGE: &str = "add: Adds an event.\n\
Parameters: n/NAME l/LOCATION sd/START_DATE ed/END_DATE st/START_TIME et/END_TIME d/DESCRIPTION [t/TAG]...\n\
Example: add n/Youth Day l/Jurong Park sd/02-10-2018 ed/02-10-2018 st/09:00 et/17:00 d/Annual outing t/youth";
pub const EVENT_EDIT_USAGE: &str = "edit: Edits the event at the index shown in the event list.\n\
Parameters: INDEX [n/NAME] [l/LOCATION] [sd/START_DATE] [ed/END_DATE] [st/START_TIME] [et/END_TIME] [d/DESCRIPTION] [t/TAG]...\n\
Example: edit 1 l/Bishan Park st/10:00";
pub const EVENT_DELETE_USAGE: &str = "delete: Deletes the event at the index shown in the event list.\n\
Parameters: INDEX\n\
Example: delete 1";
pub const EVENT_SELECT_USAGE: &str = "select: Selects the event at the index shown in the event list.\n\
Parameters: INDEX\n\
Example: select 1";
pub const EVENT_FIND_USAGE: &str = "find: Finds events whose names contain any of the keywords (case-insensitive).\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find charity";
pub const EVENT_LIST_USAGE: &str = "list: Lists all events.\nExample: list";
pub const EVENT_CLEAR_USAGE: &str = "clear: Removes all events and their records.\nExample: clear";
pub const EVENT_MANAGE_USAGE: &str = "manage: Shows the records of the event at the index shown in the event list.\n\
Parameters: INDEX\n\
Example: manage 1";

pub const RECORD_FIND_USAGE: &str = "find: Finds records whose volunteer id or remark contains any of the keywords (case-insensitive).\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find S1234567A";
pub const RECORD_LIST_USAGE: &str = "list: Lists all records.\nExample: list";

/// Commands recognised in every context.
pub static SHARED: &[CommandSpec] = &[
    CommandSpec {
        word: "history",
        usage: HISTORY_USAGE,
        parse: |_| Ok(Command::Shared(SharedCommand::History)),
    },
    CommandSpec {
        word: "undo",
        usage: UNDO_USAGE,
        parse: |_| Ok(Command::Shared(SharedCommand::Undo)),
    },
    CommandSpec {
        word: "redo",
        usage: REDO_USAGE,
        parse: |_| Ok(Command::Shared(SharedCommand::Redo)),
    },
    CommandSpec {
        word: "exit",
        usage: EXIT_USAGE,
        parse: |_| Ok(Command::Shared(SharedCommand::Exit)),
    },
    CommandSpec {
        word: "help",
        usage: HELP_USAGE,
        parse: |_| Ok(Command::Shared(SharedCommand::Help)),
    },
    CommandSpec {
        word: "switch",
        usage: SWITCH_USAGE,
        parse: parse_switch,
    },
];

static VOLUNTEER: &[CommandSpec] = &[
    CommandSpec {
        word: "add",
        usage: VOLUNTEER_ADD_USAGE,
        parse: parse_volunteer_add,
    },
    CommandSpec {
        word: "edit",
        usage: VOLUNTEER_EDIT_USAGE,
        parse: parse_volunteer_edit,
    },
    CommandSpec {
        word: "select",
        usage: VOLUNTEER_SELECT_USAGE,
        parse: |args| {
            let index: Index = parse_index(args, VOLUNTEER_SELECT_USAGE)?;
            Ok(Command::Volunteer(VolunteerCommand::Select { index }))
        },
    },
    CommandSpec {
        word: "delete",
        usage: VOLUNTEER_DELETE_USAGE,
        parse: |args| {
            let index: Index = parse_index(args, VOLUNTEER_DELETE_USAGE)?;
            Ok(Command::Volunteer(VolunteerCommand::Delete { index }))
        },
    },
    CommandSpec {
        word: "clear",
        usage: VOLUNTEER_CLEAR_USAGE,
        parse: |_| Ok(Command::Volunteer(VolunteerCommand::Clear)),
    },
    CommandSpec {
        word: "find",
        usage: VOLUNTEER_FIND_USAGE,
        parse: |args| {
            let keywords: Vec<String> = parse_keywords(args, VOLUNTEER_FIND_USAGE)?;
            Ok(Command::Volunteer(VolunteerCommand::Find { keywords }))
        },
    },
    CommandSpec {
        word: "list",
        usage: VOLUNTEER_LIST_USAGE,
        parse: |_| Ok(Command::Volunteer(VolunteerCommand::List)),
    },
    CommandSpec {
        word: "manage",
        usage: VOLUNTEER_MANAGE_USAGE,
        parse: |args| {
            let index: Index = parse_index(args, VOLUNTEER_MANAGE_USAGE)?;
            Ok(Command::Volunteer(VolunteerCommand::Manage { index }))
        },
    },
];

static EVENT: &[CommandSpec] = &[
    CommandSpec {
        word: "add",
        usage: EVENT_ADD_USAGE,
        parse: parse_event_add,
    },
    CommandSpec {
        word: "edit",
        usage: EVENT_EDIT_USAGE,
        parse: parse_event_edit,
    },
    CommandSpec {
        word: "select",
        usage: EVENT_SELECT_USAGE,
        parse: |args| {
            let index: Index = parse_index(args, EVENT_SELECT_USAGE)?;
            Ok(Command::Event(EventCommand::Select { index }))
        },
    },
    CommandSpec {
        word: "delete",
        usage: EVENT_DELETE_USAGE,
        parse: |args| {
            let index: Index = parse_index(args, EVENT_DELETE_USAGE)?;
            Ok(Command::Event(EventCommand::Delete { index }))
        },
    },
    CommandSpec {
        word: "clear",
        usage: EVENT_CLEAR_USAGE,
        parse: |_| Ok(Command::Event(EventCommand::Clear)),
    },
    CommandSpec {
        word: "find",
        usage: EVENT_FIND_USAGE,
        parse: |args| {
            let keywords: Vec<String> = parse_keywords(args, EVENT_FIND_USAGE)?;
            Ok(Command::Event(EventCommand::Find { keywords }))
        },
    },
    CommandSpec {
        word: "list",
        usage: EVENT_LIST_USAGE,
        parse: |_| Ok(Command::Event(EventCommand::List)),
    },
    CommandSpec {
        word: "manage",
        usage: EVENT_MANAGE_USAGE,
        parse: |args| {
            let index: Index = parse_index(args, EVENT_MANAGE_USAGE)?;
            Ok(Command::Event(EventCommand::Manage { index }))
        },
    },
];

static RECORD: &[CommandSpec] = &[
    CommandSpec {
        word: "find",
        usage: RECORD_FIND_USAGE,
        parse: |args| {
            let keywords: Vec<String> = parse_keywords(args, RECORD_FIND_USAGE)?;
            Ok(Command::Record(RecordCommand::Find { keywords }))
        },
    },
    CommandSpec {
        word: "list",
        usage: RECORD_LIST_USAGE,
        parse: |_| Ok(Command::Record(RecordCommand::List)),
    },
];

/// Returns the context-specific vocabulary table.
#[must_use]
pub const fn vocabulary(context: ContextId) -> &'static [CommandSpec] {
    match context {
        ContextId::Volunteer => VOLUNTEER,
        ContextId::Event => EVENT,
        ContextId::Record => RECORD,
    }
}

/// Finds the table entry for `word` in the shared or the context table.
#[must_use]
pub fn lookup(context: ContextId, word: &str) -> Option<&'static CommandSpec> {
    SHARED
        .iter()
        .chain(vocabulary(context))
        .find(|spec| spec.word == word)
}

/// Resolves a raw input line in the given context.
///
/// # Errors
///
/// - `InvalidCommandFormat` for empty input or malformed arguments
/// - `UnknownCommand` if the word is in neither the shared nor the context table
/// - `NothingToEdit` for an edit with no field markers
/// - `UnknownContext` for a switch to an unrecognised context
pub fn resolve(context: ContextId, input: &str) -> Result<Command, CoreError> {
    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Err(CoreError::invalid_format(HELP_USAGE));
    }

    let (word, args): (&str, &str) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    let spec: &CommandSpec =
        lookup(context, word).ok_or_else(|| CoreError::UnknownCommand(word.to_string()))?;
    (spec.parse)(args)
}

fn field_error(usage: &'static str) -> impl Fn(DomainError) -> CoreError {
    move |cause| CoreError::InvalidCommandFormat {
        usage,
        cause: Some(cause),
    }
}

fn parse_index(raw: &str, usage: &'static str) -> Result<Index, CoreError> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::invalid_format(usage));
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| CoreError::invalid_format(usage))
}

fn parse_keywords(raw: &str, usage: &'static str) -> Result<Vec<String>, CoreError> {
    let keywords: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(CoreError::invalid_format(usage));
    }
    Ok(keywords)
}

fn parse_switch(raw: &str) -> Result<Command, CoreError> {
    let target: &str = raw
        .trim()
        .strip_prefix('-')
        .ok_or_else(|| CoreError::invalid_format(SWITCH_USAGE))?;
    let context: ContextId = ContextId::parse(target)?;
    Ok(Command::Shared(SharedCommand::Switch(context)))
}

/// Returns the value of each prefix, failing if any is absent.
fn require<'a, const N: usize>(
    multimap: &'a ArgumentMultimap,
    prefixes: [Prefix; N],
    usage: &'static str,
) -> Result<[&'a str; N], CoreError> {
    let mut values: [&str; N] = [""; N];
    for (slot, prefix) in prefixes.into_iter().enumerate() {
        values[slot] = multimap
            .value(prefix)
            .ok_or_else(|| CoreError::invalid_format(usage))?;
    }
    Ok(values)
}

/// Parses the `t/` values of an edit. A lone empty `t/` clears the tags.
fn parse_edit_tags(multimap: &ArgumentMultimap) -> Result<Option<BTreeSet<Tag>>, DomainError> {
    if !multimap.contains(PREFIX_TAG) {
        return Ok(None);
    }
    let raw: &[String] = multimap.all_values(PREFIX_TAG);
    if raw.len() == 1 && raw[0].is_empty() {
        return Ok(Some(BTreeSet::new()));
    }
    parse_tags(raw).map(Some)
}

fn parse_volunteer_add(args: &str) -> Result<Command, CoreError> {
    let usage: &'static str = VOLUNTEER_ADD_USAGE;
    let multimap: ArgumentMultimap = tokenize(
        args,
        &[
            PREFIX_ID,
            PREFIX_NAME,
            PREFIX_GENDER,
            PREFIX_BIRTHDAY,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_TAG,
        ],
    );
    if !multimap.preamble().is_empty() {
        return Err(CoreError::invalid_format(usage));
    }
    let [id, name, gender, birthday, phone, email, address]: [&str; 7] = require(
        &multimap,
        [
            PREFIX_ID,
            PREFIX_NAME,
            PREFIX_GENDER,
            PREFIX_BIRTHDAY,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
        ],
        usage,
    )?;

    let to_error = field_error(usage);
    let volunteer: Volunteer = Volunteer::new(
        VolunteerId::parse(id).map_err(&to_error)?,
        Name::parse(name).map_err(&to_error)?,
        Gender::parse(gender).map_err(&to_error)?,
        Birthday::parse(birthday).map_err(&to_error)?,
        Phone::parse(phone).map_err(&to_error)?,
        Email::parse(email).map_err(&to_error)?,
        Address::parse(address).map_err(&to_error)?,
        parse_tags(multimap.all_values(PREFIX_TAG)).map_err(&to_error)?,
    );
    Ok(Command::Volunteer(VolunteerCommand::Add { volunteer }))
}

fn parse_volunteer_edit(args: &str) -> Result<Command, CoreError> {
    let usage: &'static str = VOLUNTEER_EDIT_USAGE;
    let multimap: ArgumentMultimap = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_GENDER,
            PREFIX_BIRTHDAY,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_TAG,
        ],
    );
    let index: Index = parse_index(multimap.preamble(), usage)?;

    let to_error = field_error(usage);
    let patch: VolunteerPatch = VolunteerPatch {
        name: multimap
            .value(PREFIX_NAME)
            .map(Name::parse)
            .transpose()
            .map_err(&to_error)?,
        gender: multimap
            .value(PREFIX_GENDER)
            .map(Gender::parse)
            .transpose()
            .map_err(&to_error)?,
        birthday: multimap
            .value(PREFIX_BIRTHDAY)
            .map(Birthday::parse)
            .transpose()
            .map_err(&to_error)?,
        phone: multimap
            .value(PREFIX_PHONE)
            .map(Phone::parse)
            .transpose()
            .map_err(&to_error)?,
        email: multimap
            .value(PREFIX_EMAIL)
            .map(Email::parse)
            .transpose()
            .map_err(&to_error)?,
        address: multimap
            .value(PREFIX_ADDRESS)
            .map(Address::parse)
            .transpose()
            .map_err(&to_error)?,
        tags: parse_edit_tags(&multimap).map_err(&to_error)?,
    };

    if patch.is_empty() {
        return Err(CoreError::NothingToEdit { usage });
    }
    Ok(Command::Volunteer(VolunteerCommand::Edit { index, patch }))
}

fn parse_event_add(args: &str) -> Result<Command, CoreError> {
    let usage: &'static str = EVENT_ADD_USAGE;
    let multimap: ArgumentMultimap = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_LOCATION,
            PREFIX_START_DATE,
            PREFIX_END_DATE,
            PREFIX_START_TIME,
            PREFIX_END_TIME,
            PREFIX_DESCRIPTION,
            PREFIX_TAG,
        ],
    );
    if !multimap.preamble().is_empty() {
        return Err(CoreError::invalid_format(usage));
    }
    let [name, location, start_date, end_date, start_time, end_time, description]: [&str; 7] =
        require(
            &multimap,
            [
                PREFIX_NAME,
                PREFIX_LOCATION,
                PREFIX_START_DATE,
                PREFIX_END_DATE,
                PREFIX_START_TIME,
                PREFIX_END_TIME,
                PREFIX_DESCRIPTION,
            ],
            usage,
        )?;

    let to_error = field_error(usage);
    let event: NewEvent = NewEvent {
        name: Name::parse(name).map_err(&to_error)?,
        location: Location::parse(location).map_err(&to_error)?,
        start_date: EventDate::parse(start_date).map_err(&to_error)?,
        end_date: EventDate::parse(end_date).map_err(&to_error)?,
        start_time: EventTime::parse(start_time).map_err(&to_error)?,
        end_time: EventTime::parse(end_time).map_err(&to_error)?,
        description: Description::parse(description).map_err(&to_error)?,
        tags: parse_tags(multimap.all_values(PREFIX_TAG)).map_err(&to_error)?,
    };
    Ok(Command::Event(EventCommand::Add { event }))
}

fn parse_event_edit(args: &str) -> Result<Command, CoreError> {
    let usage: &'static str = EVENT_EDIT_USAGE;
    let multimap: ArgumentMultimap = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_LOCATION,
            PREFIX_START_DATE,
            PREFIX_END_DATE,
            PREFIX_START_TIME,
            PREFIX_END_TIME,
            PREFIX_DESCRIPTION,
            PREFIX_TAG,
        ],
    );
    let index: Index = parse_index(multimap.preamble(), usage)?;

    let to_error = field_error(usage);
    let patch: EventPatch = EventPatch {
        name: multimap
            .value(PREFIX_NAME)
            .map(Name::parse)
            .transpose()
            .map_err(&to_error)?,
        location: multimap
            .value(PREFIX_LOCATION)
            .map(Location::parse)
            .transpose()
            .map_err(&to_error)?,
        start_date: multimap
            .value(PREFIX_START_DATE)
            .map(EventDate::parse)
            .transpose()
            .map_err(&to_error)?,
        end_date: multimap
            .value(PREFIX_END_DATE)
            .map(EventDate::parse)
            .transpose()
            .map_err(&to_error)?,
        start_time: multimap
            .value(PREFIX_START_TIME)
            .map(EventTime::parse)
            .transpose()
            .map_err(&to_error)?,
        end_time: multimap
            .value(PREFIX_END_TIME)
            .map(EventTime::parse)
            .transpose()
            .map_err(&to_error)?,
        description: multimap
            .value(PREFIX_DESCRIPTION)
            .map(Description::parse)
            .transpose()
            .map_err(&to_error)?,
        tags: parse_edit_tags(&multimap).map_err(&to_error)?,
    };

    if patch.is_empty() {
        return Err(CoreError::NothingToEdit { usage });
    }
    Ok(Command::Event(EventCommand::Edit { index, patch }))
}
