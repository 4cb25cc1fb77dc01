mod components;
mod state;

use color_eyre::Result;
#[cfg(feature = "desktop")]
use dioxus::desktop::{self, WindowBuilder};
use dioxus::prelude::*;
use input_file_preview::tree::PreviewTree;

use components::{Header, PreviewInput, PreviewTarget};
use state::Targets;

const GALLERY_ERROR: &str =
    r#"<span><strong>${name}</strong> (${size} bytes) can't be previewed</span>"#;
const POSTER_ERROR: &str =
    r#"<span>Posters must be an image, audio or video under 2 MiB (${name} is ${size} bytes)</span>"#;

#[component]
fn App() -> Element {
    let gallery = use_signal(|| PreviewTree::new("ul"));
    let poster = use_signal(|| PreviewTree::new("div"));
    use_context_provider(|| Targets::from([("gallery", gallery), ("poster", poster)]));

    rsx! {
        Header {},

        main {
            div {
                PreviewInput {
                    label: "Gallery",
                    target_for: "gallery",
                    error_message: GALLERY_ERROR,
                    multiple: true,
                    accept: "image/*,audio/*,video/*",
                }
                PreviewTarget { id: "gallery" }

                PreviewInput {
                    label: "Poster",
                    target_for: "poster",
                    max_size: "2097152",
                    error_message: POSTER_ERROR,
                }
                PreviewTarget { id: "poster" }
            }
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let launcher = dioxus::LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let launcher = launcher.with_cfg(
        desktop::Config::default()
            .with_menu(None)
            .with_window(WindowBuilder::new().with_title("Input File Preview")),
    );

    launcher.launch(App);

    Ok(())
}
