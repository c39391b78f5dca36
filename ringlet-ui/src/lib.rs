//! ringlet-ui is the retained visual layer that ringlet components render into.
//!
//! # Surfaces
//!
//! A [`Document`] owns every element. A [`Surface`] is a cheap, clonable handle
//! to one element of a document, and is what components receive as their host.
//!
//! ```
//! use ringlet_ui::{Document, Namespace};
//!
//! let document = Document::new();
//! let host = document.create_element("div");
//! let ring = document.create_element_ns(Namespace::Svg, "circle");
//! ring.set_attribute("r", 40.0);
//! host.append(&ring).unwrap();
//!
//! assert_eq!(host.to_markup(), r#"<div><circle r="40"></circle></div>"#);
//! ```
//!
//! Elements carry attributes, an inline style declaration and a class list.
//! Mutations are applied immediately; there is no diffing or scheduling.
//!
//! # Accessibility
//!
//! ARIA attributes written on a surface can be projected into an
//! [`accesskit`] node through [`AccessibilityNode::from_surface`].
#![deny(missing_docs, clippy::unwrap_used)]

pub mod accessibility;
pub mod callback;
pub mod color;
pub mod logging;
pub mod surface;

pub use accesskit;

pub use crate::{
    accessibility::AccessibilityNode,
    callback::CallbackWith,
    color::{Color, CssColor},
    surface::{ClassList, Document, Namespace, StyleDeclaration, Surface, SurfaceError},
};
