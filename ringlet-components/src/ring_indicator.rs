//! Circular progress ring driven by observable properties.
//!
//! ## Usage
//!
//! Attach to an existing host surface, then drive it through its setters.
//! Every effective change immediately re-renders the affected parts of the
//! ring; setting a property to its current value does nothing.
//!
//! The indicator ring carries [`ANIMATION_CLASS`] while animated. The spin
//! itself is left to whatever stylesheet styles that class.

mod config;
mod dispatch;
mod geometry;

use ringlet_ui::{
    CallbackWith, Namespace, Surface, SurfaceError,
    accessibility::{ARIA_VALUE_NOW, ROLE},
};
use thiserror::Error;
use tracing::{debug, trace, warn};

pub use config::{RingIndicatorConfig, RingIndicatorDefaults};
pub use dispatch::{DependencyTable, Property, UpdateRoutine};
pub use geometry::RingGeometry;

/// Class always present on the indicator ring.
pub const PRIMARY_CIRCLE_CLASS: &str = "ring-indicator__primary-circle";
/// Class toggled on the indicator ring while animated.
pub const ANIMATION_CLASS: &str = "ring-indicator-animation";
/// Arc shown while animated, in percent.
pub const INDETERMINATE_PERCENTAGE: f64 = 75.0;
/// Lowest accepted value.
pub const MIN_VALUE: f64 = 0.0;
/// Highest accepted value.
pub const MAX_VALUE: f64 = 100.0;

/// Errors raised while constructing a ring indicator.
#[derive(Debug, Error)]
pub enum RingIndicatorError {
    /// A required argument was missing.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Size and thickness leave no ring to draw.
    #[error("degenerate ring geometry: size {size} with thickness {thickness}")]
    DegenerateGeometry {
        /// Requested outer diameter.
        size: f64,
        /// Requested stroke width.
        thickness: f64,
    },
    /// The JSON options object could not be parsed.
    #[error("invalid ring indicator options: {0}")]
    Config(#[from] serde_json::Error),
    /// The rings could not be attached to the host.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Clamps into the accepted range; `None` for NaN.
fn normalize_value(value: f64) -> Option<f64> {
    if value.is_nan() {
        return None;
    }
    let value = value.clamp(MIN_VALUE, MAX_VALUE);
    // Collapse -0 so the host never shows "-0".
    Some(if value == 0.0 { 0.0 } else { value })
}

/// A circular progress indicator rendered into a host surface.
#[derive(Debug)]
pub struct RingIndicator {
    config: RingIndicatorConfig,
    geometry: RingGeometry,
    host: Surface,
    svg: Surface,
    track: Surface,
    indicator: Surface,
    value: f64,
    is_animated: bool,
    is_hidden: bool,
    deps: DependencyTable,
    routine_observer: Option<CallbackWith<UpdateRoutine>>,
}

impl RingIndicator {
    /// Builds the rings inside `host`.
    ///
    /// Fails with [`RingIndicatorError::InvalidArgument`] when `host` is
    /// missing and with [`RingIndicatorError::DegenerateGeometry`] when the
    /// configuration leaves no ring; in both cases nothing is created.
    pub fn new(
        host: Option<&Surface>,
        config: Option<RingIndicatorConfig>,
    ) -> Result<Self, RingIndicatorError> {
        let host = host.ok_or(RingIndicatorError::InvalidArgument(
            "missing ring indicator host surface",
        ))?;
        let config = config.unwrap_or_default();
        let geometry = RingGeometry::new(config.size, config.thickness)?;
        debug!(?geometry, "building ring indicator");

        let document = host.document();

        let track = document.create_element_ns(Namespace::Svg, "circle");
        track.set_attribute("stroke", &config.secondary_color);
        track.set_attribute("stroke-width", geometry.thickness);
        track.set_attribute("fill", "transparent");
        track.set_attribute("r", geometry.normalized_radius);
        track.set_attribute("cx", geometry.radius);
        track.set_attribute("cy", geometry.radius);

        let indicator = track.clone_node();
        indicator.set_attribute("stroke", &config.primary_color);
        indicator.set_attribute("stroke-dasharray", geometry.circumference);
        indicator.class_list().add(PRIMARY_CIRCLE_CLASS);

        let svg = document.create_element_ns(Namespace::Svg, "svg");
        svg.set_attribute("width", geometry.size);
        svg.set_attribute("height", geometry.size);
        host.set_attribute(ROLE, "progressbar");

        // The flags are seeded without dispatch; only the value pathway draws.
        let ring = Self {
            config,
            geometry,
            host: host.clone(),
            svg,
            track,
            indicator,
            value: MIN_VALUE,
            is_animated: false,
            is_hidden: false,
            deps: DependencyTable::RING_INDICATOR,
            routine_observer: None,
        };
        ring.dispatch(Property::Value);

        ring.svg.append_all([&ring.track, &ring.indicator])?;
        ring.host.append(&ring.svg)?;
        Ok(ring)
    }

    /// Current progress percentage in `[0, 100]`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Sets the progress percentage, clamped to `[0, 100]`.
    ///
    /// NaN is rejected and leaves the ring untouched.
    pub fn set_value(&mut self, value: impl Into<f64>) {
        let requested = value.into();
        let Some(value) = normalize_value(requested) else {
            warn!(requested, "ignoring non-numeric ring indicator value");
            return;
        };
        if self.value == value {
            return;
        }
        self.value = value;
        self.dispatch(Property::Value);
    }

    /// Whether the indeterminate animation is shown.
    pub fn is_animated(&self) -> bool {
        self.is_animated
    }

    /// Turns the indeterminate animation on or off.
    pub fn set_animated(&mut self, animated: bool) {
        if self.is_animated == animated {
            return;
        }
        self.is_animated = animated;
        self.dispatch(Property::IsAnimated);
    }

    /// Whether the widget is hidden.
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    /// Hides or shows the widget without touching its state.
    pub fn set_hidden(&mut self, hidden: bool) {
        if self.is_hidden == hidden {
            return;
        }
        self.is_hidden = hidden;
        self.dispatch(Property::IsHidden);
    }

    /// Registers a hook invoked before every routine execution.
    pub fn set_routine_observer(&mut self, observer: impl Into<CallbackWith<UpdateRoutine>>) {
        self.routine_observer = Some(observer.into());
    }

    /// Removes the routine hook.
    pub fn clear_routine_observer(&mut self) {
        self.routine_observer = None;
    }

    /// Configuration the ring was built with.
    pub fn config(&self) -> &RingIndicatorConfig {
        &self.config
    }

    /// Derived ring dimensions.
    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    /// The dependency table driving updates.
    pub fn dependencies(&self) -> &DependencyTable {
        &self.deps
    }

    /// Host surface the ring renders into.
    pub fn host(&self) -> &Surface {
        &self.host
    }

    /// The `svg` container holding both rings.
    pub fn container(&self) -> &Surface {
        &self.svg
    }

    /// Background ring.
    pub fn track(&self) -> &Surface {
        &self.track
    }

    /// Foreground ring whose dash offset shows progress.
    pub fn indicator(&self) -> &Surface {
        &self.indicator
    }

    /// Dash offset currently applied to the indicator ring.
    pub fn dash_offset(&self) -> Option<f64> {
        self.indicator
            .style()
            .get("stroke-dashoffset")
            .and_then(|offset| offset.parse().ok())
    }

    fn dispatch(&self, property: Property) {
        for &routine in self.deps.routines(property) {
            trace!(?property, ?routine, "running update routine");
            if let Some(observer) = &self.routine_observer {
                observer.call(routine);
            }
            match routine {
                UpdateRoutine::UpdateProgressVisual => self.update_progress_visual(),
                UpdateRoutine::ToggleAnimationClass => self.toggle_animation_class(),
                UpdateRoutine::ToggleVisibility => self.toggle_visibility(),
            }
        }
    }

    fn update_progress_visual(&self) {
        let percentage = if self.is_animated {
            self.host.remove_attribute(ARIA_VALUE_NOW);
            INDETERMINATE_PERCENTAGE
        } else {
            self.host.set_attribute(ARIA_VALUE_NOW, self.value);
            self.value
        };
        let offset = self.geometry.dash_offset(percentage);
        self.indicator.style().set("stroke-dashoffset", offset);
    }

    fn toggle_animation_class(&self) {
        self.indicator.class_list().toggle(ANIMATION_CLASS);
    }

    fn toggle_visibility(&self) {
        let visibility = if self.is_hidden { "hidden" } else { "visible" };
        self.host.style().set("visibility", visibility);
    }
}
