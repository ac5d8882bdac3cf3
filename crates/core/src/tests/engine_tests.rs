// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    ALICE, create_test_dataset, create_test_engine, create_test_event, create_test_volunteer,
};
use crate::{
    CommandOutcome, ContextId, CoreError, Dataset, Engine, ErrorKind, Notification,
    volunteer_name_filter,
};
use socialcare_domain::{Event, Volunteer};

fn single_volunteer_engine() -> Engine {
    let dataset: Dataset = Dataset::from_parts(
        vec![create_test_volunteer(
            ALICE,
            "Alice Tan",
            "90000000",
            "alice@example.com",
        )],
        Vec::new(),
        Vec::new(),
    )
    .unwrap();
    Engine::new(dataset)
}

fn first_phone(engine: &Engine) -> String {
    engine.filtered_volunteers()[0].phone().value().to_string()
}

#[test]
fn test_edit_undo_edit_invalidates_redo() {
    let mut engine: Engine = single_volunteer_engine();
    assert_eq!(engine.context(), ContextId::Volunteer);

    engine.execute("edit 1 p/91234567").unwrap();
    assert_eq!(first_phone(&engine), "91234567");
    assert!(engine.can_undo());

    engine.execute("undo").unwrap();
    assert_eq!(first_phone(&engine), "90000000");
    assert!(engine.can_redo());

    engine.execute("edit 1 p/81234567").unwrap();
    assert_eq!(first_phone(&engine), "81234567");
    assert_eq!(
        engine.execute("redo").unwrap_err(),
        CoreError::NoNextState
    );
}

#[test]
fn test_add_in_record_context_is_unknown_command() {
    let mut engine: Engine = create_test_engine();
    engine.execute("switch -r").unwrap();

    let error: CoreError = engine.execute("add n/X").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::UnknownCommand);
}

#[test]
fn test_delete_outside_filtered_view_leaves_history() {
    let mut engine: Engine = create_test_engine();
    assert_eq!(engine.filtered_volunteers().len(), 2);

    let error: CoreError = engine.execute("delete 5").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::InvalidDisplayedIndex);
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.dataset(), &create_test_dataset());
}

#[test]
fn test_scope_words_fail_in_record_context() {
    let mut engine: Engine = create_test_engine();

    let outcome: CommandOutcome = engine.execute("switch -r").unwrap();
    assert_eq!(
        outcome.notification,
        Some(Notification::ContextChanged {
            context: ContextId::Record
        })
    );

    for input in ["clear", "edit 1 p/91234567", "delete 1", "manage 1", "select 1"] {
        let error: CoreError = engine.execute(input).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownCommand, "{input}");
    }
    assert_eq!(engine.dataset(), &create_test_dataset());
}

#[test]
fn test_duplicate_edit_keeps_history_length() {
    let mut engine: Engine = create_test_engine();

    let error: CoreError = engine
        .execute("edit 1 n/Bob Lee p/81234567")
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::DuplicateEntity);
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_read_commands_never_commit() {
    let mut engine: Engine = create_test_engine();

    engine.execute("find alice").unwrap();
    engine.execute("list").unwrap();
    engine.execute("select 1").unwrap();
    engine.execute("history").unwrap();
    engine.execute("help").unwrap();

    assert_eq!(engine.history().len(), 1);
    assert!(!engine.can_undo());
}

#[test]
fn test_no_op_edit_commits() {
    let mut engine: Engine = single_volunteer_engine();

    engine.execute("edit 1 p/90000000").unwrap();

    assert_eq!(engine.history().len(), 2);
    assert!(engine.can_undo());
}

#[test]
fn test_failed_switch_keeps_context() {
    let mut engine: Engine = create_test_engine();
    engine.execute("switch -e").unwrap();

    let error: CoreError = engine.execute("switch -q").unwrap_err();

    assert_eq!(error, CoreError::UnknownContext(String::from("q")));
    assert_eq!(engine.context(), ContextId::Event);
    assert_eq!(engine.context_name(), "Events");
}

#[test]
fn test_manage_switches_to_record_context() {
    let mut engine: Engine = create_test_engine();

    let outcome: CommandOutcome = engine.execute("manage 1").unwrap();

    assert_eq!(
        outcome.notification,
        Some(Notification::ContextChanged {
            context: ContextId::Record
        })
    );
    assert_eq!(engine.context(), ContextId::Record);
    assert_eq!(engine.filtered_records().len(), 2);
    assert_eq!(engine.history().len(), 1);

    engine.execute("list").unwrap();
    assert_eq!(engine.filtered_records().len(), 3);
}

#[test]
fn test_event_manage_drills_down() {
    let mut engine: Engine = create_test_engine();
    engine.execute("switch -e").unwrap();

    engine.execute("manage 2").unwrap();

    assert_eq!(engine.context(), ContextId::Record);
    assert_eq!(engine.joined_records().len(), 1);
    assert_eq!(
        engine.joined_records()[0].event.unwrap().name().value(),
        "Charity Run"
    );
}

#[test]
fn test_undo_resets_filters() {
    let mut engine: Engine = create_test_engine();
    engine.execute("delete 2").unwrap();
    engine.execute("find nobody").unwrap();
    assert!(engine.filtered_volunteers().is_empty());

    engine.execute("undo").unwrap();

    assert_eq!(engine.filtered_volunteers().len(), 2);
}

#[test]
fn test_undo_restores_cascaded_records() {
    let mut engine: Engine = create_test_engine();
    engine.execute("clear").unwrap();
    assert!(engine.dataset().records().is_empty());

    engine.execute("undo").unwrap();

    assert_eq!(engine.dataset(), &create_test_dataset());
}

#[test]
fn test_undo_at_start_reports_message() {
    let mut engine: Engine = create_test_engine();

    let error: CoreError = engine.execute("undo").unwrap_err();

    assert_eq!(error.to_string(), "No more commands to undo!");
}

#[test]
fn test_command_log_lists_most_recent_first() {
    let mut engine: Engine = create_test_engine();
    assert_eq!(
        engine.execute("history").unwrap().message,
        "You have not yet entered any commands."
    );

    engine.execute("list").unwrap();
    let _ = engine.execute("bogus");
    let outcome: CommandOutcome = engine.execute("history").unwrap();

    assert_eq!(
        outcome.message,
        "Entered commands (from most recent to earliest):\nbogus\nlist\nhistory"
    );
    assert_eq!(engine.command_log().len(), 4);
}

#[test]
fn test_empty_input_is_not_logged() {
    let mut engine: Engine = create_test_engine();

    let error: CoreError = engine.execute("  ").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::InvalidCommandFormat);
    assert!(engine.command_log().is_empty());
}

#[test]
fn test_help_and_exit_notify() {
    let mut engine: Engine = create_test_engine();

    let help: CommandOutcome = engine.execute("help").unwrap();
    let exit: CommandOutcome = engine.execute("exit").unwrap();

    assert_eq!(help.notification, Some(Notification::ShowHelp));
    assert!(help.message.contains("manage:"));
    assert_eq!(exit.notification, Some(Notification::Exit));
}

#[test]
fn test_execute_in_uses_given_vocabulary() {
    let mut engine: Engine = create_test_engine();

    let outcome: CommandOutcome = engine.execute_in("e", "find charity").unwrap();

    assert_eq!(outcome.message, "1 events listed!");
    assert_eq!(engine.context(), ContextId::Volunteer);
    assert_eq!(engine.filtered_events().len(), 1);
    assert_eq!(
        engine.execute_in("z", "list").unwrap_err().kind(),
        ErrorKind::UnknownContext
    );
}

#[test]
fn test_help_describes_the_given_context() {
    let mut engine: Engine = create_test_engine();

    let outcome: CommandOutcome = engine.execute_in("r", "help").unwrap();

    assert!(
        outcome
            .message
            .starts_with("Commands available in Records context:")
    );
    assert!(outcome.message.contains("list: Lists all records."));
    assert!(!outcome.message.contains("add:"));
    assert!(!outcome.message.contains("manage:"));
    assert_eq!(engine.context(), ContextId::Volunteer);
}

#[test]
fn test_add_event_after_largest_id_is_rejected() {
    let mut engine: Engine = Engine::new(
        Dataset::from_parts(Vec::new(), vec![create_test_event(u32::MAX, "Last")], Vec::new())
            .unwrap(),
    );
    engine.execute("switch -e").unwrap();

    let error: CoreError = engine
        .execute(
            "add n/Other l/Town Hall sd/01-06-2026 ed/01-06-2026 st/09:00 et/12:00 d/Meeting",
        )
        .unwrap_err();

    assert_eq!(error, CoreError::EventIdsExhausted);
    assert_eq!(error.kind(), ErrorKind::InvalidData);
    assert_eq!(engine.dataset().events().len(), 1);
    assert!(!engine.can_undo());
}

#[test]
fn test_reset_data_clears_history() {
    let mut engine: Engine = create_test_engine();
    engine.execute("delete 1").unwrap();
    assert!(engine.can_undo());

    engine.reset_data(Dataset::new());

    assert!(!engine.can_undo());
    assert_eq!(engine.history().len(), 1);
    assert!(engine.dataset().volunteers().is_empty());
}

#[test]
fn test_presentation_filter_is_respected_by_index() {
    let mut engine: Engine = create_test_engine();
    engine.update_volunteer_filter(volunteer_name_filter(&[String::from("bob")]));

    engine.execute("delete 1").unwrap();

    let remaining: Vec<&Volunteer> = engine.dataset().volunteers().iter().collect();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].volunteer_id().value(), ALICE);
}

#[test]
fn test_edit_event_time_and_clear_tags() {
    let mut engine: Engine = Engine::new(
        Dataset::from_parts(Vec::new(), vec![create_test_event(4, "Walkathon")], Vec::new())
            .unwrap(),
    );
    engine.execute("switch -e").unwrap();

    engine.execute("edit 1 st/10:30 t/").unwrap();

    let events: Vec<&Event> = engine.filtered_events();
    assert_eq!(events[0].start_time().to_string(), "10:30");
    assert!(events[0].tags().is_empty());
    assert_eq!(engine.history().len(), 2);
}
