// NOTE: The `#[component]` macro is deriving `PartialEq`, but not `Eq` (since that's not needed), and clippy is
// complaining about that. This needs to be a module-level `#![expect(...)]` since I can't actually place an
// `#[expect(...)]` inside of the `#[component]` macro
#![expect(clippy::derive_partial_eq_without_eq)]

use dioxus::prelude::*;
use input_file_preview::{
    media::MediaKind,
    target::Target,
    tree::{Child, Leaf},
};

use crate::state::Targets;

const PREVIEW_STYLE: &str = "max-height: 16rem";

#[component]
pub fn PreviewTarget(id: &'static str) -> Element {
    let targets = use_context::<Targets>();
    let Some(tree) = targets.get(id) else {
        return rsx! {
            p { "No preview container is registered as `#{id}`" }
        };
    };

    let tree = tree.read();
    let children: Vec<_> = tree.children().iter().map(render_child).collect();

    match tree.tag_name().as_str() {
        "ul" => rsx! {
            ul { id, {children.into_iter()} }
        },
        "ol" => rsx! {
            ol { id, {children.into_iter()} }
        },
        _ => rsx! {
            div { id, {children.into_iter()} }
        },
    }
}

fn render_child(child: &Child) -> Element {
    match child {
        Child::ListItem(leaves) => rsx! {
            li {
                for leaf in leaves {
                    {render_leaf(leaf)}
                }
            }
        },
        Child::Leaf(leaf) => render_leaf(leaf),
    }
}

fn render_leaf(leaf: &Leaf) -> Element {
    match leaf {
        Leaf::Html(html) => rsx! {
            span { dangerous_inner_html: "{html}" }
        },
        Leaf::Media(media) => {
            let src = media.src();
            let name = media.name();
            let controls = media.controls();

            match media.kind() {
                MediaKind::Image => rsx! {
                    img { style: PREVIEW_STYLE, src, alt: name }
                },
                MediaKind::Audio => rsx! {
                    audio { src, controls, "{name}" }
                },
                MediaKind::Video => rsx! {
                    video { style: PREVIEW_STYLE, src, controls, "{name}" }
                },
            }
        }
    }
}
