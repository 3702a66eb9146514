use crate::scheme::{ColorScheme, NamedStyle};
use crate::style::StyleValue;

pub const AMBIENT_CATEGORY: &str = "Ambient colors";
pub const CHUNK_CATEGORY: &str = "Syntax highlighting";

/// Handle to a row of a [`TreeStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The property column of a style row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescription {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
struct Node {
    label: String,
    property: Option<PropertyDescription>,
    value: Option<StyleValue>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Backing data of the style tree: category rows holding one row per style.
///
/// Rows are never removed, so a [`NodeId`] stays valid for the lifetime of the store.
#[derive(Debug, Clone, Default)]
pub struct TreeStore {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl TreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_scheme(scheme: &ColorScheme) -> Self {
        let mut store = Self::new();

        let ambient = store.add_category(AMBIENT_CATEGORY);
        for style in &scheme.ambient {
            store.add_style(ambient, property_of(style), style.style.into());
        }

        let chunks = store.add_category(CHUNK_CATEGORY);
        for style in &scheme.chunks {
            store.add_style(chunks, property_of(style), style.style.into());
        }

        store
    }

    /// Reads the current row values back into a scheme document
    pub fn to_scheme(&self, name: &str, description: &str) -> ColorScheme {
        let mut scheme = ColorScheme {
            name: name.to_owned(),
            description: description.to_owned(),
            ambient: Vec::new(),
            chunks: Vec::new(),
        };

        for id in self.depth_first() {
            let (Some(property), Some(value)) = (self.property(id), self.value(id)) else {
                continue;
            };
            match value {
                StyleValue::Ambient(color) => scheme.ambient.push(NamedStyle::new(
                    &property.name,
                    &property.description,
                    *color,
                )),
                StyleValue::Chunk(style) => scheme.chunks.push(NamedStyle::new(
                    &property.name,
                    &property.description,
                    *style,
                )),
            }
        }

        scheme
    }

    pub fn add_category(&mut self, label: &str) -> NodeId {
        let id = self.push(Node {
            label: label.to_owned(),
            property: None,
            value: None,
            parent: None,
            children: Vec::new(),
        });
        self.roots.push(id);
        id
    }

    pub fn add_style(
        &mut self,
        parent: NodeId,
        property: PropertyDescription,
        value: StyleValue,
    ) -> NodeId {
        let id = self.push(Node {
            label: property.name.clone(),
            property: Some(property),
            value: Some(value),
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(parent) = self.nodes.get_mut(parent.0) {
            parent.children.push(id);
        }
        id
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.nodes.get(id.0) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).map(|n| n.label.as_str())
    }

    pub fn property(&self, id: NodeId) -> Option<&PropertyDescription> {
        self.nodes.get(id.0).and_then(|n| n.property.as_ref())
    }

    pub fn value(&self, id: NodeId) -> Option<&StyleValue> {
        self.nodes.get(id.0).and_then(|n| n.value.as_ref())
    }

    /// Writes the value column of a row. Returns false if the row does not exist.
    pub fn set_value(&mut self, id: NodeId, value: StyleValue) -> bool {
        match self.nodes.get_mut(id.0) {
            Some(node) => {
                node.value = Some(value);
                true
            }
            None => false,
        }
    }

    /// All rows in display order
    pub fn depth_first(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }
}

fn property_of<T>(style: &NamedStyle<T>) -> PropertyDescription {
    PropertyDescription {
        name: style.name.clone(),
        description: style.description.clone(),
    }
}

/// The widget side of the style tree, as seen by the undo history
pub trait TreeView {
    /// The style store backing the view, if one of that kind is attached
    fn data_source(&self) -> Option<&TreeStore>;

    fn data_source_mut(&mut self) -> Option<&mut TreeStore>;

    fn select_row(&mut self, node: NodeId);

    fn scroll_to_row(&mut self, node: NodeId);
}

/// View state of the style tree panel
#[derive(Debug, Clone, Default)]
pub struct StyleTreeView {
    store: Option<TreeStore>,
    selected: Option<NodeId>,
    scroll_target: Option<NodeId>,
}

impl StyleTreeView {
    pub fn new(store: TreeStore) -> Self {
        Self {
            store: Some(store),
            selected: None,
            scroll_target: None,
        }
    }

    /// A view with nothing attached yet
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn set_store(&mut self, store: TreeStore) {
        self.store = Some(store);
        self.selected = None;
        self.scroll_target = None;
    }

    pub fn store(&self) -> Option<&TreeStore> {
        self.store.as_ref()
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn scroll_target(&self) -> Option<NodeId> {
        self.scroll_target
    }

    /// The row to bring into view this frame; cleared once taken
    pub fn take_scroll_target(&mut self) -> Option<NodeId> {
        self.scroll_target.take()
    }
}

impl TreeView for StyleTreeView {
    fn data_source(&self) -> Option<&TreeStore> {
        self.store.as_ref()
    }

    fn data_source_mut(&mut self) -> Option<&mut TreeStore> {
        self.store.as_mut()
    }

    fn select_row(&mut self, node: NodeId) {
        self.selected = Some(node);
    }

    fn scroll_to_row(&mut self, node: NodeId) {
        self.scroll_target = Some(node);
    }
}
