//! Latest region transition reported by the widget, kept as a single replaceable value.

use crate::region::RegionFeature;

/// Why the view state was last updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeReason {
    /// No region event has arrived yet.
    #[default]
    None,
    /// The widget announced an upcoming region transition.
    WillChange,
    /// The widget finished a region transition.
    DidChange,
}

impl ChangeReason {
    /// Human-readable form used by the presenter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeReason::None => "",
            ChangeReason::WillChange => "will change",
            ChangeReason::DidChange => "did change",
        }
    }
}

/// The latest region event together with the reason it was stored.
///
/// A region is only ever stored with a `WillChange` or `DidChange` reason; before the
/// first event both fields are empty. Construct via [`ViewState::default`] or
/// [`ViewState::changed`] to keep it that way.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    reason: ChangeReason,
    region: Option<RegionFeature>,
}

impl ViewState {
    /// Creates a state from a region transition event.
    pub fn changed(reason: ChangeReason, region: RegionFeature) -> Self {
        debug_assert!(reason != ChangeReason::None);
        Self {
            reason,
            region: Some(region),
        }
    }

    /// Reason of the last update.
    pub fn reason(&self) -> ChangeReason {
        self.reason
    }

    /// The last reported region, if any event has arrived.
    pub fn region(&self) -> Option<&RegionFeature> {
        self.region.as_ref()
    }
}

/// Holds exactly one [`ViewState`] value.
///
/// Each event fully replaces the previous state; there is no history and no merging of
/// consecutive events.
#[derive(Debug, Default)]
pub struct ViewStateStore {
    state: ViewState,
}

impl ViewStateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Replaces the stored state.
    pub fn set(&mut self, state: ViewState) {
        self.state = state;
    }
}
