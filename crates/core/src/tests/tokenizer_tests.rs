// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tokenizer::{PREFIX_DESCRIPTION, PREFIX_NAME, PREFIX_PHONE, PREFIX_START_DATE, PREFIX_TAG};
use crate::{ArgumentMultimap, tokenize};

#[test]
fn test_preamble_and_values_are_split() {
    let multimap: ArgumentMultimap = tokenize("1 n/Alice Tan p/9123", &[PREFIX_NAME, PREFIX_PHONE]);

    assert_eq!(multimap.preamble(), "1");
    assert_eq!(multimap.value(PREFIX_NAME), Some("Alice Tan"));
    assert_eq!(multimap.value(PREFIX_PHONE), Some("9123"));
}

#[test]
fn test_last_scalar_value_wins() {
    let multimap: ArgumentMultimap = tokenize("n/First n/Second", &[PREFIX_NAME]);

    assert_eq!(multimap.value(PREFIX_NAME), Some("Second"));
    assert_eq!(multimap.all_values(PREFIX_NAME).len(), 2);
}

#[test]
fn test_repeated_tags_are_all_kept() {
    let multimap: ArgumentMultimap = tokenize("t/a t/b t/c", &[PREFIX_TAG]);

    assert_eq!(multimap.all_values(PREFIX_TAG), ["a", "b", "c"]);
}

#[test]
fn test_marker_inside_word_is_not_a_marker() {
    let multimap: ArgumentMultimap = tokenize("n/Jan/2020 p/12", &[PREFIX_NAME, PREFIX_PHONE]);

    assert_eq!(multimap.value(PREFIX_NAME), Some("Jan/2020"));
}

#[test]
fn test_longer_marker_is_not_confused_with_suffix() {
    let multimap: ArgumentMultimap =
        tokenize("sd/01-01-2026 d/Fun", &[PREFIX_START_DATE, PREFIX_DESCRIPTION]);

    assert_eq!(multimap.value(PREFIX_START_DATE), Some("01-01-2026"));
    assert_eq!(multimap.value(PREFIX_DESCRIPTION), Some("Fun"));
}

#[test]
fn test_missing_marker_has_no_value() {
    let multimap: ArgumentMultimap = tokenize("just text", &[PREFIX_NAME]);

    assert_eq!(multimap.preamble(), "just text");
    assert!(!multimap.contains(PREFIX_NAME));
    assert!(multimap.all_values(PREFIX_NAME).is_empty());
    assert!(!multimap.has_any_marker());
}
