//! # weft-tags: tag handler dispatch for the weft template compiler
//!
//! This crate is the extensibility core of
//! [weft](https://github.com/weft-lang/weft): it routes namespace-qualified
//! markup elements to tag handler functions and gives every handler a uniform
//! way to read element attributes and assemble generated-code fragments.
//!
//! A tag vocabulary is a type implementing [`TagHandler`] plus a
//! [`TagRegistry`] mapping local tag names to handler functions. The
//! embedding compiler implements [`Compile`] and calls
//! [`TagRegistry::dispatch`] once per element; handlers recurse back into the
//! compiler through [`TagHandler::process`], so traversal order stays with
//! the compiler.
//!
//! ## Example
//!
//! ```rs
//! use weft_markup::Document;
//! use weft_tags::{Compile, TagHandler, TagRegistry, TagResult};
//!
//! struct Widgets;
//!
//! impl TagHandler for Widgets {
//!     type Compiler = Emitter;
//! }
//!
//! fn input(tags: &Widgets, _: &mut Emitter, doc: &Document, el: ElementId) -> TagResult {
//!     let name = tags.required_attr(&doc[el], "name")?;
//!     let value = tags.attr(&doc[el], "value", None);
//!     Ok(format!("input({})", tags.arg_list(&[Some(&name), Some(&value)], true)))
//! }
//!
//! let mut registry = TagRegistry::new();
//! registry.register("input", input);
//! ```
mod args;
mod attrs;
mod error;
mod handler;
mod quote;
mod registry;

pub use args::{arg_list, arg_list_with};
pub use attrs::{
    AttrSpec, attr, attr_bool, attr_string, attr_unquoted, attrs, required_attr,
    required_attr_unquoted,
};
pub use error::TagError;
pub use handler::{Compile, TagHandler};
pub use quote::{
    AttrValue, EXPRESSION_SENTINEL, NULL_LITERAL, QuoteOptions, REFERENCE_SENTINEL, quote,
    quote_with,
};
pub use registry::{INTERNAL_PREFIX, RESERVED_METHODS, TagFn, TagRegistry};

/// An opaque fragment of generated code returned by a tag handler. The
/// dispatcher and the compiler pass it through without interpreting it.
pub type Fragment = String;

pub type TagResult = Result<Fragment, TagError>;
