//! Analysis pipelines over data extracted from a page.
//!
//! Extraction itself (fetching, rendering, pulling JSON-LD out of HTML) is a
//! collaborator concern; everything under here operates on already-parsed
//! input snapshots.

pub mod schema;
