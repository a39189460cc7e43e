//! Domain types and pure logic for the designmonk backend.
//!
//! Contains the entity enumerations (lead status, project attributes), the
//! shared error taxonomy, and the image compression step of the upload
//! pipeline. Nothing in this crate touches the network or the database.

pub mod error;
pub mod ingest;
pub mod lead;
pub mod project;
pub mod types;
