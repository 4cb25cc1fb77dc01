// Standard Library Imports
use std::collections::HashMap;

// External Crate Imports
use color_eyre::Result;
use dioxus::prelude::*;
use input_file_preview::{
    target::{MediaPreview, Target},
    tree::{PreviewTree, Slot},
};

// Public API ==========================================================================================================

/// Every preview container on the page, keyed by the id that a `PreviewInput` names in its `target_for`
#[derive(Clone, Default)]
pub struct Targets(HashMap<&'static str, Signal<PreviewTree>>);

impl Targets {
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Signal<PreviewTree>> {
        self.0.get(id).copied()
    }
}

impl<const N: usize> From<[(&'static str, Signal<PreviewTree>); N]> for Targets {
    fn from(value: [(&'static str, Signal<PreviewTree>); N]) -> Self {
        Self(HashMap::from(value))
    }
}

/// A `PreviewTree` held in a `Signal`, so that every change to it re-renders its `PreviewTarget`
#[derive(Copy, Clone)]
pub struct SignalTarget(Signal<PreviewTree>);

impl From<Signal<PreviewTree>> for SignalTarget {
    fn from(value: Signal<PreviewTree>) -> Self {
        Self(value)
    }
}

impl Target for SignalTarget {
    type Node = Slot;

    fn tag_name(&self) -> String {
        self.0.read().tag_name()
    }

    fn root(&self) -> Self::Node {
        self.0.read().root()
    }

    fn clear(&mut self) -> Result<()> {
        self.0.write().clear()
    }

    fn append_list_item(&mut self) -> Result<Self::Node> {
        self.0.write().append_list_item()
    }

    fn insert_html(&mut self, node: &Self::Node, html: &str) -> Result<()> {
        self.0.write().insert_html(node, html)
    }

    fn append_media(&mut self, node: &Self::Node, media: &MediaPreview) -> Result<()> {
        self.0.write().append_media(node, media)
    }
}
