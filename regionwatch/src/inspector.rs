//! The region inspector ties the pieces together: it consumes region events, keeps the
//! current camera config, and derives the diagnostic lines shown to the user.

use async_trait::async_trait;
use maybe_sync::{MaybeSend, MaybeSync};

use crate::camera::{
    default_options, CameraConfig, CameraOption, OptionSelector, TriggerSource,
};
use crate::control::{RegionEvent, RegionEventHandler};
use crate::error::RegionWatchError;
use crate::presenter;
use crate::region::{LatLonBounds, RegionFeature};
use crate::view_state::{ChangeReason, ViewState, ViewStateStore};

/// Interface of the external map widget.
///
/// The widget owns rendering, gestures and camera animation; this crate only queries it
/// and hands it camera configs.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MapWidget: MaybeSend + MaybeSync {
    /// Returns the currently visible bounds of the viewport.
    async fn visible_bounds(&self) -> Result<LatLonBounds, RegionWatchError>;
}

/// Tracks the latest region transition and the camera config to send to the widget.
///
/// All updates go through `&mut self`, serialized by the host UI runtime; the inspector
/// keeps no history and replaces state wholesale on every event.
pub struct RegionInspector {
    store: ViewStateStore,
    selector: OptionSelector,
    options: Vec<CameraOption>,
    camera_config: CameraConfig,
}

impl RegionInspector {
    /// Creates an inspector with the default option table and a wall-clock trigger
    /// source.
    pub fn new() -> Self {
        Self {
            store: ViewStateStore::new(),
            selector: OptionSelector::default(),
            options: default_options(),
            camera_config: CameraConfig::initial(),
        }
    }

    /// Replaces the trigger source. Useful for tests and deterministic replays.
    pub fn with_trigger_source(mut self, trigger_source: impl TriggerSource + 'static) -> Self {
        self.selector = OptionSelector::new(trigger_source);
        self
    }

    /// Replaces the option table.
    pub fn with_options(mut self, options: Vec<CameraOption>) -> Self {
        self.options = options;
        self
    }

    /// The options the user can select from.
    pub fn options(&self) -> &[CameraOption] {
        &self.options
    }

    /// The latest stored view state.
    pub fn view_state(&self) -> &ViewState {
        self.store.state()
    }

    /// The camera config the widget should currently apply.
    pub fn camera_config(&self) -> &CameraConfig {
        &self.camera_config
    }

    /// Stores an upcoming region transition.
    pub fn on_region_will_change(&mut self, feature: RegionFeature) {
        self.store
            .set(ViewState::changed(ChangeReason::WillChange, feature));
    }

    /// Stores a finished region transition.
    pub fn on_region_did_change(&mut self, feature: RegionFeature) {
        self.store
            .set(ViewState::changed(ChangeReason::DidChange, feature));
    }

    /// Selects the option at `index` from the option table and replaces the current
    /// camera config with the produced one.
    pub fn select_option(&mut self, index: usize) -> Result<&CameraConfig, RegionWatchError> {
        let data = self
            .options
            .get(index)
            .map(|option| option.data)
            .ok_or(RegionWatchError::InvalidCameraOption { index })?;
        self.camera_config = self.selector.select_option(index, &data)?;
        Ok(&self.camera_config)
    }

    /// Derives the diagnostic lines for the current state.
    pub fn render(&self) -> Vec<String> {
        presenter::render(self.store.state())
    }

    /// Queries the widget for its visible bounds once the map finished loading.
    ///
    /// The result is only logged; a failed query is propagated to the caller.
    pub async fn on_map_loaded(
        &self,
        widget: &(impl MapWidget + ?Sized),
    ) -> Result<LatLonBounds, RegionWatchError> {
        let bounds = widget.visible_bounds().await?;
        log::info!(
            "visible bounds: ne [{}, {}], sw [{}, {}]",
            bounds.ne.lon(),
            bounds.ne.lat(),
            bounds.sw.lon(),
            bounds.sw.lat()
        );
        Ok(bounds)
    }
}

impl Default for RegionInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionEventHandler for RegionInspector {
    fn handle(&mut self, event: &RegionEvent) {
        match event {
            RegionEvent::WillChange(feature) => self.on_region_will_change(feature.clone()),
            RegionEvent::DidChange(feature) => self.on_region_did_change(feature.clone()),
        }
    }
}
