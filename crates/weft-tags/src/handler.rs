use weft_markup::{Document, Element, ElementId};

use crate::error::TagError;
use crate::quote;
use crate::{args, attrs, attrs::AttrSpec};

use smol_str::SmolStr;

/// The seam to the embedding compiler.
///
/// The compiler owns traversal order and the output buffer; handlers reach
/// back into it through [`TagHandler::process`] to compile child elements.
/// `process` may re-enter [`TagRegistry::dispatch`](crate::TagRegistry::dispatch)
/// for a child, so implementations must be safe to call recursively.
pub trait Compile {
    fn process(&mut self, doc: &Document, node: ElementId) -> Result<(), TagError>;
}

/// The tag handler contract implemented by every tag vocabulary.
///
/// Concrete vocabularies implement this trait (usually on a zero-sized
/// type), pick their compiler through the associated type, and register
/// handler functions in a [`TagRegistry`](crate::TagRegistry). The provided
/// methods are the helper API handler functions use to read attributes and
/// assemble fragments; their names are reserved and can never be reached
/// from markup.
///
/// The compiler is threaded through every call as an explicit `&mut`
/// context rather than held by the handler, so independent compilations
/// share no state and recursive dispatch stays borrow-safe.
pub trait TagHandler {
    type Compiler: Compile;

    /// Forwards each child of `element` to the compiler's node-processing
    /// entry point, in document order. Elements without children are a
    /// no-op.
    fn process(
        &self,
        compiler: &mut Self::Compiler,
        doc: &Document,
        element: ElementId,
    ) -> Result<(), TagError> {
        for &child in doc[element].children() {
            compiler.process(doc, child)?;
        }
        Ok(())
    }

    fn quote(&self, value: Option<&str>) -> String {
        quote::quote(value)
    }

    fn required_attr(&self, element: &Element, name: &str) -> Result<String, TagError> {
        attrs::required_attr(element, name)
    }

    fn required_attr_unquoted(&self, element: &Element, name: &str) -> Result<String, TagError> {
        attrs::required_attr_unquoted(element, name)
    }

    fn attr(&self, element: &Element, name: &str, default: Option<&str>) -> String {
        attrs::attr(element, name, default)
    }

    fn attr_unquoted(
        &self,
        element: &Element,
        name: &str,
        default: Option<&str>,
    ) -> Option<String> {
        attrs::attr_unquoted(element, name, default)
    }

    fn attr_bool(&self, element: &Element, name: &str, default: bool) -> Result<bool, TagError> {
        attrs::attr_bool(element, name, default)
    }

    fn arg_list(&self, values: &[Option<&str>], prune_tail: bool) -> String {
        args::arg_list(values, prune_tail)
    }

    fn attrs(&self, element: &Element, spec: &[AttrSpec]) -> Vec<(SmolStr, String)> {
        attrs::attrs(element, spec)
    }

    fn attr_string(&self, element: &Element, spec: &[AttrSpec]) -> String {
        attrs::attr_string(element, spec)
    }
}
