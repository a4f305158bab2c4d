use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use weft_markup::{Document, ElementId};

use crate::error::TagError;
use crate::handler::TagHandler;
use crate::{Fragment, TagResult};

/// Names starting with this prefix are internal to handler implementations
/// and can never be resolved from markup.
pub const INTERNAL_PREFIX: &str = "__";

/// Method names declared by the tag handler contract itself
/// ([`TagHandler`] and [`TagRegistry::dispatch`]). Resolving to one of
/// these from markup is rejected so that a tag can never invoke the
/// attribute helpers as if they were tags.
pub const RESERVED_METHODS: &[&str] = &[
    "dispatch",
    "process",
    "quote",
    "required_attr",
    "required_attr_unquoted",
    "attr",
    "attr_unquoted",
    "attr_bool",
    "arg_list",
    "attrs",
    "attr_string",
];

/// A handler function for one local tag name.
pub type TagFn<H> =
    fn(&H, &mut <H as TagHandler>::Compiler, &Document, ElementId) -> TagResult;

/// The dispatch table of one tag vocabulary: local tag names mapped to
/// handler functions, built once per handler type.
///
/// Resolution tries the exact local name first, then the `_`-prefixed
/// variant (the conventional spelling for tags shadowing a language
/// keyword), and fails with [`TagError::UnresolvedHandler`] otherwise.
/// After resolution, reserved names are rejected with
/// [`TagError::ReservedMethodInvocation`].
pub struct TagRegistry<H: TagHandler> {
    entries: FxHashMap<SmolStr, TagFn<H>>,
    handler_type: &'static str,
}

impl<H: TagHandler> TagRegistry<H> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            handler_type: std::any::type_name::<H>(),
        }
    }

    /// Registers a handler function under a local tag name. Registering a
    /// name twice replaces the earlier entry.
    pub fn register(&mut self, name: impl Into<SmolStr>, func: TagFn<H>) -> &mut Self {
        self.entries.insert(name.into(), func);
        self
    }

    /// Iterates over the registered local tag names in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a local name to a registered entry: the exact name wins,
    /// else the `_`-prefixed variant. Returns the resolved name together
    /// with the handler function.
    pub fn resolve(&self, local_name: &str) -> Option<(SmolStr, TagFn<H>)> {
        self.entries
            .get_key_value(local_name)
            .or_else(|| {
                let fallback = format!("_{local_name}");
                self.entries.get_key_value(fallback.as_str())
            })
            .map(|(name, func)| (name.clone(), *func))
    }

    /// Routes one element to its handler function and passes the returned
    /// fragment through unchanged.
    ///
    /// Never mutates the element or the handler; side effects are whatever
    /// the invoked handler performs against `compiler`. Safe to re-enter
    /// recursively (handler → [`TagHandler::process`] → compiler →
    /// `dispatch` on a child).
    pub fn dispatch(
        &self,
        handler: &H,
        compiler: &mut H::Compiler,
        doc: &Document,
        element: ElementId,
    ) -> Result<Fragment, TagError> {
        let local_name = doc[element].local_name();
        let (resolved, func) =
            self.resolve(local_name)
                .ok_or_else(|| TagError::UnresolvedHandler {
                    qualified_name: doc[element].qualified_name().into(),
                })?;

        if resolved.starts_with(INTERNAL_PREFIX) || RESERVED_METHODS.contains(&resolved.as_str())
        {
            return Err(TagError::ReservedMethodInvocation {
                handler: self.handler_type,
                name: resolved,
            });
        }

        func(handler, compiler, doc, element)
    }
}

impl<H: TagHandler> Default for TagRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
