//! Retained element tree backing every ringlet component.
//!
//! ## Usage
//!
//! Create a [`Document`], hand out [`Surface`] handles to components, and
//! read back attributes, styles or markup once they have rendered.

use std::{fmt, sync::Arc};

use indextree::{Arena, NodeError, NodeId};
use parking_lot::RwLock;
use smallvec::SmallVec;
use thiserror::Error;

/// XML namespace URI for HTML elements.
pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
/// XML namespace URI for SVG elements.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Errors raised by tree mutations.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The child belongs to a different document than the parent.
    #[error("cannot append <{child}> into a surface owned by another document")]
    ForeignDocument {
        /// Tag of the rejected child.
        child: String,
    },
    /// The mutation would make a node its own ancestor.
    #[error("invalid tree mutation: {0}")]
    Tree(#[source] NodeError),
}

/// Namespace an element was created in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Plain HTML element.
    #[default]
    Html,
    /// SVG element.
    Svg,
}

impl Namespace {
    /// Returns the namespace URI.
    pub fn uri(self) -> &'static str {
        match self {
            Namespace::Html => HTML_NAMESPACE,
            Namespace::Svg => SVG_NAMESPACE,
        }
    }
}

type Pairs = SmallVec<[(String, String); 4]>;

#[derive(Debug, Clone, Default)]
struct Element {
    namespace: Namespace,
    tag: String,
    attributes: Pairs,
    style: Pairs,
    classes: SmallVec<[String; 2]>,
}

fn pair_get<'a>(pairs: &'a Pairs, name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn pair_set(pairs: &mut Pairs, name: &str, value: String) {
    match pairs.iter().position(|(key, _)| key == name) {
        Some(index) => pairs[index].1 = value,
        None => pairs.push((name.to_owned(), value)),
    }
}

fn pair_remove(pairs: &mut Pairs, name: &str) -> bool {
    let before = pairs.len();
    pairs.retain(|(key, _)| key != name);
    pairs.len() != before
}

/// Owner of an element arena.
///
/// Cloning a document clones the handle, not the elements.
#[derive(Clone, Default)]
pub struct Document {
    arena: Arc<RwLock<Arena<Element>>>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached HTML element.
    pub fn create_element(&self, tag: impl Into<String>) -> Surface {
        self.create_element_ns(Namespace::Html, tag)
    }

    /// Creates a detached element in the given namespace.
    pub fn create_element_ns(&self, namespace: Namespace, tag: impl Into<String>) -> Surface {
        self.insert(Element {
            namespace,
            tag: tag.into(),
            ..Default::default()
        })
    }

    /// Number of elements ever created in this document.
    ///
    /// Elements are never freed while the document lives, so this also counts
    /// detached nodes a caller may have leaked.
    pub fn node_count(&self) -> usize {
        self.arena.read().count()
    }

    fn insert(&self, element: Element) -> Surface {
        let id = self.arena.write().new_node(element);
        Surface {
            document: self.clone(),
            id,
        }
    }

    fn same_as(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.arena, &other.arena)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.node_count())
            .finish()
    }
}

/// Handle to one element of a [`Document`].
///
/// Two surfaces compare equal when they point at the same element.
#[derive(Clone)]
pub struct Surface {
    document: Document,
    id: NodeId,
}

impl Surface {
    /// The document owning this element.
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn read<R>(&self, f: impl FnOnce(&Element) -> R) -> R {
        let arena = self.document.arena.read();
        f(arena[self.id].get())
    }

    fn write<R>(&self, f: impl FnOnce(&mut Element) -> R) -> R {
        let mut arena = self.document.arena.write();
        f(arena[self.id].get_mut())
    }

    fn handle(&self, id: NodeId) -> Surface {
        Surface {
            document: self.document.clone(),
            id,
        }
    }

    /// Tag name the element was created with.
    pub fn tag(&self) -> String {
        self.read(|element| element.tag.clone())
    }

    /// Namespace the element was created in.
    pub fn namespace(&self) -> Namespace {
        self.read(|element| element.namespace)
    }

    /// Creates a detached shallow copy: same namespace, tag, attributes, style
    /// and classes, but no children.
    pub fn clone_node(&self) -> Surface {
        let element = self.read(Element::clone);
        self.document.insert(element)
    }

    /// Appends `child` as the last child of this element.
    ///
    /// A child that already has a parent is moved.
    pub fn append(&self, child: &Surface) -> Result<(), SurfaceError> {
        if !self.document.same_as(&child.document) {
            return Err(SurfaceError::ForeignDocument { child: child.tag() });
        }
        // checked_append rejects self and ancestor appends before detaching.
        let mut arena = self.document.arena.write();
        self.id
            .checked_append(child.id, &mut arena)
            .map_err(SurfaceError::Tree)
    }

    /// Appends every child in order.
    pub fn append_all<'a>(
        &self,
        children: impl IntoIterator<Item = &'a Surface>,
    ) -> Result<(), SurfaceError> {
        for child in children {
            self.append(child)?;
        }
        Ok(())
    }

    /// Children in document order.
    pub fn children(&self) -> Vec<Surface> {
        let arena = self.document.arena.read();
        self.id
            .children(&arena)
            .map(|id| self.handle(id))
            .collect()
    }

    /// Parent element, if attached.
    pub fn parent(&self) -> Option<Surface> {
        let arena = self.document.arena.read();
        arena[self.id].parent().map(|id| self.handle(id))
    }

    /// Sets or replaces an attribute.
    pub fn set_attribute(&self, name: &str, value: impl ToString) {
        let value = value.to_string();
        self.write(|element| pair_set(&mut element.attributes, name, value));
    }

    /// Reads an attribute.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.read(|element| pair_get(&element.attributes, name).map(str::to_owned))
    }

    /// Returns whether an attribute is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.read(|element| pair_get(&element.attributes, name).is_some())
    }

    /// Removes an attribute. Returns whether it was present.
    pub fn remove_attribute(&self, name: &str) -> bool {
        self.write(|element| pair_remove(&mut element.attributes, name))
    }

    /// Inline style declaration of this element.
    pub fn style(&self) -> StyleDeclaration<'_> {
        StyleDeclaration { surface: self }
    }

    /// Class list of this element.
    pub fn class_list(&self) -> ClassList<'_> {
        ClassList { surface: self }
    }

    /// Whether the element is rendered visibly.
    ///
    /// `visibility` inherits, so the nearest element in the ancestor chain
    /// that declares it decides.
    pub fn is_visible(&self) -> bool {
        let arena = self.document.arena.read();
        for id in self.id.ancestors(&arena) {
            if let Some(visibility) = pair_get(&arena[id].get().style, "visibility") {
                return !matches!(visibility, "hidden" | "collapse");
            }
        }
        true
    }

    /// Serializes this element and its subtree as HTML/SVG markup.
    ///
    /// Attributes are written in insertion order, followed by `class` and
    /// `style` when non-empty.
    pub fn to_markup(&self) -> String {
        let arena = self.document.arena.read();
        let mut out = String::new();
        write_markup(&arena, self.id, &mut out);
        out
    }
}

impl PartialEq for Surface {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.document.same_as(&other.document)
    }
}

impl Eq for Surface {}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|element| {
            f.debug_struct("Surface")
                .field("tag", &element.tag)
                .field("namespace", &element.namespace)
                .field("attributes", &element.attributes)
                .field("style", &element.style)
                .field("classes", &element.classes)
                .finish()
        })
    }
}

/// Inline style access for a [`Surface`].
pub struct StyleDeclaration<'a> {
    surface: &'a Surface,
}

impl StyleDeclaration<'_> {
    /// Sets or replaces a style property.
    pub fn set(&self, property: &str, value: impl ToString) {
        let value = value.to_string();
        self.surface
            .write(|element| pair_set(&mut element.style, property, value));
    }

    /// Reads a style property.
    pub fn get(&self, property: &str) -> Option<String> {
        self.surface
            .read(|element| pair_get(&element.style, property).map(str::to_owned))
    }

    /// Removes a style property. Returns whether it was present.
    pub fn remove(&self, property: &str) -> bool {
        self.surface
            .write(|element| pair_remove(&mut element.style, property))
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.surface.read(|element| element.style.len())
    }

    /// Whether no property is declared.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Class list access for a [`Surface`].
pub struct ClassList<'a> {
    surface: &'a Surface,
}

impl ClassList<'_> {
    /// Adds a class if absent.
    pub fn add(&self, class: &str) {
        self.surface.write(|element| {
            if !element.classes.iter().any(|c| c == class) {
                element.classes.push(class.to_owned());
            }
        });
    }

    /// Removes a class. Returns whether it was present.
    pub fn remove(&self, class: &str) -> bool {
        self.surface.write(|element| {
            let before = element.classes.len();
            element.classes.retain(|c| c != class);
            element.classes.len() != before
        })
    }

    /// Adds the class if absent, removes it otherwise.
    ///
    /// Returns whether the class is present afterwards.
    pub fn toggle(&self, class: &str) -> bool {
        self.surface.write(|element| {
            if let Some(index) = element.classes.iter().position(|c| c == class) {
                element.classes.remove(index);
                false
            } else {
                element.classes.push(class.to_owned());
                true
            }
        })
    }

    /// Whether the class is present.
    pub fn contains(&self, class: &str) -> bool {
        self.surface
            .read(|element| element.classes.iter().any(|c| c == class))
    }

    /// Classes in insertion order.
    pub fn to_vec(&self) -> Vec<String> {
        self.surface.read(|element| element.classes.to_vec())
    }
}

fn escape_into(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value);
    out.push('"');
}

fn write_markup(arena: &Arena<Element>, id: NodeId, out: &mut String) {
    let element = arena[id].get();
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attributes {
        write_attribute(out, name, value);
    }
    if !element.classes.is_empty() {
        write_attribute(out, "class", &element.classes.join(" "));
    }
    if !element.style.is_empty() {
        let style = element
            .style
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ");
        write_attribute(out, "style", &style);
    }
    out.push('>');
    for child in id.children(arena) {
        write_markup(arena, child, out);
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}
