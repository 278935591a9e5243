//! Toggle State Machine
//!
//! Used by the pin and autostart switches: the requested value is shown
//! right away, then settled by what the host reports.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Idle(bool),
    Pending { previous: bool, requested: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Host reports the requested value
    Confirmed,
    /// Host applied the change but reports a different value
    Reconciled(bool),
    /// Host call failed, previous value restored
    RolledBack,
}

impl Default for ToggleState {
    fn default() -> Self {
        ToggleState::Idle(false)
    }
}

impl ToggleState {
    /// Value to show in the UI
    pub fn displayed(&self) -> bool {
        match *self {
            ToggleState::Idle(value) => value,
            ToggleState::Pending { requested, .. } => requested,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ToggleState::Pending { .. })
    }

    /// Start flipping the value. Ignored (returns `None`) while pending.
    pub fn request(&mut self) -> Option<bool> {
        match *self {
            ToggleState::Idle(current) => {
                let requested = !current;
                *self = ToggleState::Pending { previous: current, requested };
                Some(requested)
            }
            ToggleState::Pending { .. } => None,
        }
    }

    /// Settle with the value the host reports after applying the change
    pub fn confirm(&mut self, actual: bool) -> Option<ToggleOutcome> {
        let ToggleState::Pending { requested, .. } = *self else {
            return None;
        };
        *self = ToggleState::Idle(actual);
        Some(if actual == requested {
            ToggleOutcome::Confirmed
        } else {
            ToggleOutcome::Reconciled(actual)
        })
    }

    /// Settle after the host call failed
    pub fn fail(&mut self) -> Option<ToggleOutcome> {
        let ToggleState::Pending { previous, .. } = *self else {
            return None;
        };
        *self = ToggleState::Idle(previous);
        Some(ToggleOutcome::RolledBack)
    }
}
