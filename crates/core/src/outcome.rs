// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Index;
use crate::context::ContextId;
use socialcare_domain::EntityKind;

/// A signal for the presentation layer, returned alongside a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// The active context changed; swap the visible vocabulary.
    ContextChanged { context: ContextId },
    /// An entry of a view was selected.
    Selected { kind: EntityKind, index: Index },
    /// Show the help text of the active context.
    ShowHelp,
    /// The user asked to leave the session.
    Exit,
}

/// The result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// The user-facing feedback.
    pub message: String,
    /// An optional signal for the presentation layer.
    pub notification: Option<Notification>,
}

impl CommandOutcome {
    #[must_use]
    pub const fn new(message: String) -> Self {
        Self {
            message,
            notification: None,
        }
    }

    #[must_use]
    pub const fn with_notification(message: String, notification: Notification) -> Self {
        Self {
            message,
            notification: Some(notification),
        }
    }
}
