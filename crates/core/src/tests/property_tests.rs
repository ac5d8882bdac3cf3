// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_engine;
use crate::{CoreError, Dataset, Engine};
use proptest::prelude::*;

/// Builds a volunteer-scope mutating command from generated parts.
fn mutating_input(kind: usize, digits: u32) -> String {
    match kind {
        0 => format!("edit 1 p/{digits}"),
        1 => format!(
            "add i/T{digits:07}Z n/Person {digits} g/male b/01-01-1990 p/{digits} \
             e/p{digits}@example.com a/Somewhere"
        ),
        2 => String::from("delete 1"),
        _ => String::from("clear"),
    }
}

/// Runs the inputs and returns the dataset after every successful commit,
/// starting with the initial one.
fn run_all(engine: &mut Engine, inputs: &[String]) -> Vec<Dataset> {
    let mut states: Vec<Dataset> = vec![engine.dataset().clone()];
    for input in inputs {
        if engine.execute(input).is_ok() {
            states.push(engine.dataset().clone());
        }
    }
    states
}

fn arb_inputs() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec((0..4_usize, 100..99_999_u32), 0..12).prop_map(|ops| {
        ops.into_iter()
            .map(|(kind, digits)| mutating_input(kind, digits))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn undo_then_redo_restores_latest_state(inputs in arb_inputs(), seed in 0..64_usize) {
        let mut engine: Engine = create_test_engine();
        let states: Vec<Dataset> = run_all(&mut engine, &inputs);
        let commits: usize = states.len() - 1;
        let steps: usize = seed % (commits + 1);

        for _ in 0..steps {
            engine.execute("undo").unwrap();
        }
        prop_assert_eq!(engine.dataset(), &states[commits - steps]);

        for _ in 0..steps {
            engine.execute("redo").unwrap();
        }
        prop_assert_eq!(engine.dataset(), &states[commits]);
        prop_assert_eq!(engine.execute("redo").unwrap_err(), CoreError::NoNextState);
    }

    #[test]
    fn history_grows_only_on_commit(inputs in arb_inputs()) {
        let mut engine: Engine = create_test_engine();
        let states: Vec<Dataset> = run_all(&mut engine, &inputs);
        prop_assert_eq!(engine.history().len(), states.len());

        let length: usize = engine.history().len();
        while engine.can_undo() {
            engine.execute("undo").unwrap();
            prop_assert_eq!(engine.history().len(), length);
        }
        prop_assert_eq!(engine.execute("undo").unwrap_err(), CoreError::NoPriorState);
        while engine.can_redo() {
            engine.execute("redo").unwrap();
            prop_assert_eq!(engine.history().len(), length);
        }
    }

    #[test]
    fn commit_after_undo_invalidates_redo(inputs in arb_inputs(), digits in 100..99_999_u32) {
        let mut engine: Engine = create_test_engine();
        let states: Vec<Dataset> = run_all(&mut engine, &inputs);
        prop_assume!(states.len() > 1);

        engine.execute("undo").unwrap();
        engine.execute("list").unwrap();
        let input: String = mutating_input(1, digits);
        if engine.execute(&input).is_ok() {
            prop_assert_eq!(engine.history().len(), states.len());
            prop_assert_eq!(engine.execute("redo").unwrap_err(), CoreError::NoNextState);
        } else {
            prop_assert!(engine.can_redo());
        }
    }
}
