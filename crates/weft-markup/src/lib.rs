//! # weft-markup: element tree for the weft template compiler
//!
//! This crate provides the parsed-markup data model consumed by
//! [weft](https://github.com/weft-lang/weft): an append-only, arena-backed
//! tree of namespace-qualified elements with attribute maps and parent/child
//! links. Parsing markup text into this tree is the job of the embedding
//! compiler; this crate only stores and exposes the result.
//!
//! ## Quick Start
//!
//! ```rust
//! use weft_markup::Document;
//!
//! let mut doc = Document::new();
//! let form = doc.append(None, "w:form");
//! doc.set_attribute(form, "action", "/submit");
//! let input = doc.append(Some(form), "w:input");
//!
//! assert_eq!(doc[form].local_name(), "form");
//! assert_eq!(doc[form].attribute("action"), Some("/submit"));
//! assert_eq!(doc[input].parent(), Some(form));
//! ```
//!
//! ## JSON Export (optional feature)
//!
//! With the `json` feature enabled, `Document`, `Element` and `ElementId`
//! implement serde `Serialize`/`Deserialize`.
mod element;

pub use element::{Document, Element, ElementId, NAMESPACE_SEPARATOR};
