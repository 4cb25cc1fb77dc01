// External Crate Imports
use color_eyre::{Result, eyre::eyre};

// Local Crate Imports
use crate::target::{MediaPreview, Target};

// Public API ==========================================================================================================

/// An in-memory preview container that records what would be rendered into a real DOM element
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PreviewTree {
    tag_name: String,
    children: Vec<Child>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Child {
    ListItem(Vec<Leaf>),
    Leaf(Leaf),
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Leaf {
    Html(String),
    Media(MediaPreview),
}

/// Where a preview is inserted: the container itself, or the `li` at this index
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Slot {
    Root,
    ListItem(usize),
}

impl PreviewTree {
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        let tag_name = tag_name.into().to_lowercase();
        let children = Vec::new();
        Self { tag_name, children }
    }

    #[must_use]
    pub fn children(&self) -> &[Child] {
        &self.children
    }
}

impl Target for PreviewTree {
    type Node = Slot;

    fn tag_name(&self) -> String {
        self.tag_name.clone()
    }

    fn root(&self) -> Self::Node {
        Slot::Root
    }

    fn clear(&mut self) -> Result<()> {
        self.children.clear();
        Ok(())
    }

    fn append_list_item(&mut self) -> Result<Self::Node> {
        self.children.push(Child::ListItem(Vec::new()));
        Ok(Slot::ListItem(self.children.len() - 1))
    }

    fn insert_html(&mut self, node: &Self::Node, html: &str) -> Result<()> {
        self.push_leaf(*node, Leaf::Html(html.to_owned()))
    }

    fn append_media(&mut self, node: &Self::Node, media: &MediaPreview) -> Result<()> {
        self.push_leaf(*node, Leaf::Media(media.clone()))
    }
}

// Private Helper Code =================================================================================================

impl PreviewTree {
    fn push_leaf(&mut self, slot: Slot, leaf: Leaf) -> Result<()> {
        match slot {
            Slot::Root => self.children.push(Child::Leaf(leaf)),
            Slot::ListItem(index) => {
                let Some(Child::ListItem(leaves)) = self.children.get_mut(index) else {
                    return Err(eyre!("there is no `li` at index {index}"));
                };
                leaves.push(leaf);
            }
        }

        Ok(())
    }
}

// Unit Tests ==========================================================================================================
