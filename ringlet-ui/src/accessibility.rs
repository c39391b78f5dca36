//! # Accessibility Support
//!
//! Components describe themselves to assistive technologies with ARIA
//! attributes on their host surface. This module reads those attributes back
//! and projects them into [`accesskit`] nodes, so a platform adapter can expose
//! them without knowing anything about the component.
//!
//! ## Usage
//!
//! ```
//! use accesskit::Role;
//! use ringlet_ui::{AccessibilityNode, Document};
//!
//! let host = Document::new().create_element("div");
//! host.set_attribute("role", "progressbar");
//! host.set_attribute("aria-valuenow", 30);
//!
//! let node = AccessibilityNode::from_surface(&host);
//! assert_eq!(node.role, Some(Role::ProgressIndicator));
//! assert_eq!(node.numeric_value, Some(30.0));
//! ```

use accesskit::{Node, Role};

use crate::Surface;

/// ARIA role attribute.
pub const ROLE: &str = "role";
/// ARIA label attribute.
pub const ARIA_LABEL: &str = "aria-label";
/// ARIA current numeric value attribute.
pub const ARIA_VALUE_NOW: &str = "aria-valuenow";
/// ARIA minimum numeric value attribute.
pub const ARIA_VALUE_MIN: &str = "aria-valuemin";
/// ARIA maximum numeric value attribute.
pub const ARIA_VALUE_MAX: &str = "aria-valuemax";

/// Maps an ARIA role name onto an AccessKit role.
pub fn role_from_aria(role: &str) -> Option<Role> {
    match role.trim() {
        "progressbar" => Some(Role::ProgressIndicator),
        "slider" => Some(Role::Slider),
        "button" => Some(Role::Button),
        "img" => Some(Role::Image),
        "group" => Some(Role::Group),
        _ => None,
    }
}

/// Default numeric range implied by a role when no explicit range is given.
fn implicit_range(role: Role) -> Option<(f64, f64)> {
    match role {
        Role::ProgressIndicator | Role::Slider => Some((0.0, 100.0)),
        _ => None,
    }
}

fn numeric_attribute(surface: &Surface, name: &str) -> Option<f64> {
    surface
        .attribute(name)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Semantic information read from a surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessibilityNode {
    /// The role of this node.
    pub role: Option<Role>,
    /// A human-readable label for this node.
    pub label: Option<String>,
    /// Current numeric value (progress bars, sliders).
    ///
    /// `None` for an indeterminate progress indicator.
    pub numeric_value: Option<f64>,
    /// Minimum numeric value.
    pub min_numeric_value: Option<f64>,
    /// Maximum numeric value.
    pub max_numeric_value: Option<f64>,
    /// Whether the node is hidden from view.
    pub hidden: bool,
}

impl AccessibilityNode {
    /// Reads ARIA attributes and computed visibility from `surface`.
    pub fn from_surface(surface: &Surface) -> Self {
        let role = surface.attribute(ROLE).as_deref().and_then(role_from_aria);
        let implicit = role.and_then(implicit_range);

        Self {
            role,
            label: surface.attribute(ARIA_LABEL),
            numeric_value: numeric_attribute(surface, ARIA_VALUE_NOW),
            min_numeric_value: numeric_attribute(surface, ARIA_VALUE_MIN)
                .or(implicit.map(|(min, _)| min)),
            max_numeric_value: numeric_attribute(surface, ARIA_VALUE_MAX)
                .or(implicit.map(|(_, max)| max)),
            hidden: !surface.is_visible(),
        }
    }

    /// Builds the AccessKit node.
    pub fn to_accesskit(&self) -> Node {
        let mut node = Node::new(self.role.unwrap_or(Role::GenericContainer));
        if let Some(label) = &self.label {
            node.set_label(label.clone());
        }
        if let Some(value) = self.numeric_value {
            node.set_numeric_value(value);
        }
        if let Some(min) = self.min_numeric_value {
            node.set_min_numeric_value(min);
        }
        if let Some(max) = self.max_numeric_value {
            node.set_max_numeric_value(max);
        }
        if self.hidden {
            node.set_hidden();
        }
        node
    }
}
