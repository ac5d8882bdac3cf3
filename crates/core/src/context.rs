// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;

/// The entity scope that decides which command vocabulary is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContextId {
    #[default]
    Volunteer,
    Event,
    Record,
}

impl ContextId {
    /// All contexts, in switch-marker order.
    pub const ALL: [Self; 3] = [Self::Volunteer, Self::Event, Self::Record];

    /// Returns the short identifier used by `switch -<id>`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Volunteer => "v",
            Self::Event => "e",
            Self::Record => "r",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Volunteer => "Volunteers",
            Self::Event => "Events",
            Self::Record => "Records",
        }
    }

    /// Parses a short identifier.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownContext` if `raw` is not `v`, `e` or `r`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let id: &str = raw.trim();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == id)
            .ok_or_else(|| CoreError::UnknownContext(id.to_string()))
    }
}

impl std::str::FromStr for ContextId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ContextId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A transition of the context state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextChange {
    pub from: ContextId,
    pub to: ContextId,
}

impl ContextChange {
    /// Returns true if the transition stayed in the same context.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// The context state machine. Starts in the volunteer scope.
///
/// No transition depends on collection contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    current: ContextId,
}

impl Context {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn id(&self) -> ContextId {
        self.current
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.current.display_name()
    }

    /// Switches to the context named by a short identifier.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownContext` and leaves the context unchanged if
    /// the identifier is not recognised.
    pub fn switch_to(&mut self, raw: &str) -> Result<ContextChange, CoreError> {
        let target: ContextId = ContextId::parse(raw)?;
        Ok(self.set(target))
    }

    /// Moves to `target` unconditionally.
    pub fn set(&mut self, target: ContextId) -> ContextChange {
        let from: ContextId = self.current;
        self.current = target;
        ContextChange { from, to: target }
    }

    /// Drill-down transition into the record scope. Always succeeds.
    pub fn switch_to_record_context(&mut self) -> ContextChange {
        self.set(ContextId::Record)
    }
}
