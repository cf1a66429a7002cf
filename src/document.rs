//! Read-only element tree for a day's transcript.
//!
//! The tree holds elements only. Text lives in the retained source, and each
//! element remembers the byte range of its inner markup so callers get the
//! original text back with character entities untouched.

use crate::error::{HansardError, Result};
use ego_tree::{NodeId, NodeRef, Tree};
use quick_xml::errors::IllFormedError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fmt;
use std::ops::Range;
use std::path::Path;

const DOCUMENT_ROOT: &str = "#document";

#[derive(Debug, Clone)]
struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    inner: Range<usize>,
}

impl Element {
    fn root(len: usize) -> Self {
        Self {
            name: DOCUMENT_ROOT.to_string(),
            attrs: Vec::new(),
            inner: 0..len,
        }
    }

    fn from_start(start: &BytesStart<'_>, position: usize) -> Result<Self> {
        let mut attrs = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attrs.push((key, value));
        }
        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attrs,
            inner: position..position,
        })
    }
}

pub struct Document {
    source: String,
    tree: Tree<Element>,
}

impl Document {
    pub fn parse(xml: impl Into<String>) -> Result<Self> {
        let source = xml.into();
        let tree = build_tree(&source)?;
        Ok(Self { source, tree })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let xml = std::fs::read_to_string(path).map_err(|source| HansardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(xml)
    }

    /// The synthetic node above the root element.
    pub fn root(&self) -> Node<'_> {
        Node {
            document: self,
            inner: self.tree.root(),
        }
    }

    pub fn at(&self, name: &str) -> Option<Node<'_>> {
        self.root().at(name)
    }
}

fn build_tree(source: &str) -> Result<Tree<Element>> {
    let mut tree = Tree::new(Element::root(source.len()));
    let mut open: Vec<NodeId> = vec![tree.root().id()];

    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(false);

    loop {
        let before = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Start(ref e) => {
                let element = Element::from_start(e, reader.buffer_position() as usize)?;
                let id = append_child(&mut tree, &open, element);
                open.push(id);
            }
            Event::Empty(ref e) => {
                let element = Element::from_start(e, reader.buffer_position() as usize)?;
                append_child(&mut tree, &open, element);
            }
            Event::End(_) => {
                // The reader checks end names, so the top of the stack is the element closing.
                if let Some(id) = open.pop() {
                    if let Some(mut node) = tree.get_mut(id) {
                        node.value().inner.end = before;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if open.len() > 1 {
        let unclosed = open
            .last()
            .and_then(|id| tree.get(*id))
            .map(|node| node.value().name.clone())
            .unwrap_or_default();
        return Err(quick_xml::Error::IllFormed(IllFormedError::MissingEndTag(unclosed)).into());
    }

    Ok(tree)
}

fn append_child(tree: &mut Tree<Element>, open: &[NodeId], element: Element) -> NodeId {
    let parent = open.last().copied().unwrap_or_else(|| tree.root().id());
    match tree.get_mut(parent) {
        Some(mut node) => node.append(element).id(),
        None => tree.root_mut().append(element).id(),
    }
}

/// A borrowed element of a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    document: &'a Document,
    inner: NodeRef<'a, Element>,
}

impl<'a> Node<'a> {
    fn wrap(&self, inner: NodeRef<'a, Element>) -> Node<'a> {
        Node {
            document: self.document,
            inner,
        }
    }

    pub fn name(&self) -> &'a str {
        &self.inner.value().name
    }

    /// Element children in document order.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let document = self.document;
        self.inner
            .children()
            .map(move |inner| Node { document, inner })
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.inner
            .parent()
            .filter(|parent| parent.parent().is_some())
            .map(|parent| self.wrap(parent))
    }

    /// First descendant named `name`, in document order. Never the node itself.
    pub fn at(&self, name: &str) -> Option<Node<'a>> {
        self.inner
            .descendants()
            .skip(1)
            .find(|n| n.value().name == name)
            .map(|n| self.wrap(n))
    }

    /// Every descendant named `name`, in document order.
    pub fn search(&self, name: &str) -> Vec<Node<'a>> {
        self.inner
            .descendants()
            .skip(1)
            .filter(|n| n.value().name == name)
            .map(|n| self.wrap(n))
            .collect()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.inner
            .value()
            .attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn inner_html(&self) -> &'a str {
        let range = self.inner.value().inner.clone();
        &self.document.source[range]
    }

    pub fn same_node(&self, other: &Node<'_>) -> bool {
        std::ptr::eq(self.document, other.document) && self.inner.id() == other.inner.id()
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").field("name", &self.name()).finish()
    }
}
