//! Navigation decisions
//!
//! The shell owns the navigation stack; this module only decides where to
//! go. `Navigation` is the directive use cases hand back, with a flag for
//! the flows that must not be reachable via back navigation afterwards.

use serde::{Deserialize, Serialize};

use crate::profile::ProfileRecord;

/// Screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    Home,
    Profile,
    Onboarding,
}

/// A navigation directive for the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub destination: Destination,
    /// Clear the back stack so the previous screen cannot be returned to.
    pub clear_history: bool,
}

impl Navigation {
    pub fn to(destination: Destination) -> Self {
        Self {
            destination,
            clear_history: false,
        }
    }

    pub fn replacing_history(destination: Destination) -> Self {
        Self {
            destination,
            clear_history: true,
        }
    }
}

/// Decide the start screen from the stored profile: `Home` once all three
/// profile keys exist, `Onboarding` otherwise. Evaluated once at
/// application start before anything is rendered.
pub fn start_destination(record: &ProfileRecord) -> Destination {
    if record.is_complete() {
        Destination::Home
    } else {
        Destination::Onboarding
    }
}
