use std::ops::Index;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Separator between the namespace and the local name in a qualified tag
/// name, e.g. `w:input`.
pub const NAMESPACE_SEPARATOR: char = ':';

/// A stable identifier for an element stored in a [`Document`].
///
/// Ids are only meaningful for the document that issued them; indexing a
/// different document with a foreign id is a logic error and may panic.
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A parsed markup element: a namespace-qualified tag name, a map of
/// uniquely-keyed attributes, ordered children and an optional parent link.
///
/// Elements are built through [`Document`] and are read-only afterwards;
/// dispatch and attribute extraction never mutate them.
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: SmolStr,
    attributes: FxHashMap<SmolStr, String>,
    children: Vec<ElementId>,
    parent: Option<ElementId>,
}

impl Element {
    fn new(name: SmolStr, parent: Option<ElementId>) -> Self {
        Self {
            name,
            attributes: FxHashMap::default(),
            children: Vec::new(),
            parent,
        }
    }

    /// The full qualified tag name, e.g. `w:input`.
    pub fn qualified_name(&self) -> &str {
        &self.name
    }

    /// The namespace part of the qualified name, or `None` when the name
    /// carries no separator.
    pub fn namespace(&self) -> Option<&str> {
        self.name
            .split_once(NAMESPACE_SEPARATOR)
            .map(|(namespace, _)| namespace)
    }

    /// The local name: everything after the first namespace separator.
    /// Names without a separator are their own local name.
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(NAMESPACE_SEPARATOR)
            .map(|(_, local_name)| local_name)
            .unwrap_or(&self.name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Iterates over all attributes in unspecified order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }
}

/// An append-only arena holding one parsed markup tree (or forest).
///
/// The embedding compiler's parser builds the tree up front; once dispatch
/// starts, the document is only handed out by shared reference, so elements
/// are immutable for the whole compilation pass.
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new element under `parent` (or as a root when `None`) and
    /// returns its id. Children keep document order.
    pub fn append(&mut self, parent: Option<ElementId>, name: impl Into<SmolStr>) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(Element::new(name.into(), parent));
        if let Some(parent) = parent {
            self.elements[parent.index()].children.push(id);
        }
        id
    }

    /// Sets an attribute on an element. Attribute names are unique per
    /// element; setting an existing name replaces its value.
    pub fn set_attribute(
        &mut self,
        id: ElementId,
        name: impl Into<SmolStr>,
        value: impl Into<String>,
    ) {
        self.elements[id.index()]
            .attributes
            .insert(name.into(), value.into());
    }

    /// Returns the element for `id`, or `None` if the id is out of bounds.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Index<ElementId> for Document {
    type Output = Element;

    fn index(&self, index: ElementId) -> &Self::Output {
        &self.elements[index.index()]
    }
}
