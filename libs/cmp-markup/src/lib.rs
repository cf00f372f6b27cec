//! Entity-aware markup input layer.
//!
//! Component markup leans on named HTML character references (`&nbsp;`,
//! `&copy;`, `&mdash;`, …) that plain XML parsers do not know about — XML
//! itself only predefines five entities. This crate supplies the missing
//! table in two forms:
//!
//! - [`EntityReader`] wraps any buffered source and transparently serves a
//!   synthetic DTD declaring the entities ahead of the real content, so a
//!   DTD-aware streaming parser resolves them natively. The downstream
//!   parser sees one continuous stream and never needs to know the prefix
//!   exists.
//! - [`resolve`] maps an entity name to its replacement text, for parsers
//!   that accept a custom entity resolver instead of a DTD.

pub mod entities;
pub mod reader;

pub use entities::{resolve, ENTITY_DTD};
pub use reader::EntityReader;
