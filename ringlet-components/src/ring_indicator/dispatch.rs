//! Property-to-routine dependency table.

/// Observable properties of a ring indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Progress percentage.
    Value,
    /// Indeterminate animation flag.
    IsAnimated,
    /// Visibility flag.
    IsHidden,
}

impl Property {
    /// Every property, in declaration order.
    pub const ALL: [Property; 3] = [Property::Value, Property::IsAnimated, Property::IsHidden];
}

/// Visual update routines a property change can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateRoutine {
    /// Recomputes the indicator dash offset and the host's current value.
    UpdateProgressVisual,
    /// Flips the animation class on the indicator ring.
    ToggleAnimationClass,
    /// Mirrors the hidden flag onto the host's visibility.
    ToggleVisibility,
}

/// Ordered routines to run for each property.
///
/// Routines for one property run in the listed order, synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyTable {
    value: &'static [UpdateRoutine],
    is_animated: &'static [UpdateRoutine],
    is_hidden: &'static [UpdateRoutine],
}

impl DependencyTable {
    /// The ring indicator's table.
    pub const RING_INDICATOR: DependencyTable = DependencyTable {
        value: &[UpdateRoutine::UpdateProgressVisual],
        is_animated: &[
            UpdateRoutine::UpdateProgressVisual,
            UpdateRoutine::ToggleAnimationClass,
        ],
        is_hidden: &[UpdateRoutine::ToggleVisibility],
    };

    /// Routines registered for `property`.
    pub fn routines(&self, property: Property) -> &'static [UpdateRoutine] {
        match property {
            Property::Value => self.value,
            Property::IsAnimated => self.is_animated,
            Property::IsHidden => self.is_hidden,
        }
    }
}

impl Default for DependencyTable {
    fn default() -> Self {
        Self::RING_INDICATOR
    }
}
