// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

/// A field marker such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(pub &'static str);

impl Prefix {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_ID: Prefix = Prefix("i/");
pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_GENDER: Prefix = Prefix("g/");
pub const PREFIX_BIRTHDAY: Prefix = Prefix("b/");
pub const PREFIX_PHONE: Prefix = Prefix("p/");
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix("a/");
pub const PREFIX_TAG: Prefix = Prefix("t/");
pub const PREFIX_LOCATION: Prefix = Prefix("l/");
pub const PREFIX_START_DATE: Prefix = Prefix("sd/");
pub const PREFIX_END_DATE: Prefix = Prefix("ed/");
pub const PREFIX_START_TIME: Prefix = Prefix("st/");
pub const PREFIX_END_TIME: Prefix = Prefix("et/");
pub const PREFIX_DESCRIPTION: Prefix = Prefix("d/");

/// Arguments split by field marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Returns the text before the first marker, trimmed.
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns the last value given for `prefix`.
    #[must_use]
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Returns every value given for `prefix`, in input order.
    #[must_use]
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Returns true if any marker was present.
    #[must_use]
    pub fn has_any_marker(&self) -> bool {
        !self.values.is_empty()
    }
}

/// Splits `args` on the given markers.
///
/// A marker only counts when it starts the input or follows whitespace.
/// Unlisted markers are kept as part of the surrounding value.
#[must_use]
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let padded: String = format!(" {args}");

    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for prefix in prefixes {
        let needle: String = format!(" {prefix}");
        positions.extend(
            padded
                .match_indices(needle.as_str())
                .map(|(position, _)| (position, *prefix)),
        );
    }
    positions.sort_by_key(|(position, _)| *position);

    let preamble_end: usize = positions.first().map_or(padded.len(), |(p, _)| *p);
    let mut multimap: ArgumentMultimap = ArgumentMultimap {
        preamble: padded[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (slot, (position, prefix)) in positions.iter().enumerate() {
        // Skip the leading space and the marker itself.
        let value_start: usize = position + 1 + prefix.as_str().len();
        let value_end: usize = positions.get(slot + 1).map_or(padded.len(), |(p, _)| *p);
        let value: &str = padded[value_start..value_end].trim();
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(value.to_string());
    }

    multimap
}
