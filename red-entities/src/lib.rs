//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # red-entities
//!
//! Reusable, agnostic domain entities for Project Red.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod form;
pub mod geo;
pub mod position;
pub mod wkt;
