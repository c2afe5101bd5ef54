//! Consumers of the site navigation value.
//!
//! This crate provides:
//! - [`manifest::to_json`]: JSON manifest for the external site generator
//! - [`Navigation`]: sidebar lookups (active group, previous/next page, links
//!   with the base path applied)
//! - [`html`]: navigation HTML fragments
//! - [`check_routes`]: opt-in check of navigation routes against content
//!
//! # Quick Start
//!
//! ```
//! use sitenav_config::SiteConfig;
//! use sitenav_site::{Navigation, html};
//!
//! let site = SiteConfig::builtin();
//! let nav = Navigation::new(&site);
//!
//! let neighbors = nav.neighbors("/dsa/binary-search");
//! assert_eq!(neighbors.next.map(|item| item.label.as_str()), Some("Disjoint Set Union"));
//!
//! let sidebar = html::render_sidebar(&site, Some("/dsa/binary-search"));
//! assert!(sidebar.contains("Data Structures and Algorithms"));
//! ```

mod content;
pub mod html;
pub mod manifest;
mod navigation;

pub use content::{ContentError, MissingRoute, RouteReport, check_routes};
pub use navigation::{Navigation, Neighbors};
