//! Reactive progress components for ringlet.
//!
//! # Ring indicator
//!
//! [`RingIndicator`](ring_indicator::RingIndicator) draws a circular progress
//! ring into a host [`Surface`](ringlet_ui::Surface) and keeps it in sync with
//! three observable properties: `value`, `is_animated` and `is_hidden`.
//!
//! ```
//! use ringlet_components::ring_indicator::{RingIndicator, RingIndicatorConfig};
//! use ringlet_ui::Document;
//!
//! let host = Document::new().create_element("div");
//! let config = RingIndicatorConfig::default().size(80.0);
//! let mut ring = RingIndicator::new(Some(&host), Some(config)).expect("valid configuration");
//!
//! ring.set_value(42);
//! assert_eq!(host.attribute("aria-valuenow").as_deref(), Some("42"));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod ring_indicator;
