//! Browser bindings, exported to JavaScript with `wasm-bindgen`
//!
//! A custom element class only needs to forward its lifecycle callbacks:
//!
//! ```js
//! import init, { InputFilePreview } from "./input_file_preview.js";
//!
//! await init();
//!
//! customElements.define("input-file-preview", class extends HTMLInputElement {
//!     #preview = new InputFilePreview(this);
//!     connectedCallback() { this.#preview.connectedCallback(); }
//!     disconnectedCallback() { this.#preview.disconnectedCallback(); }
//! }, { extends: "input" });
//! ```

// Standard Library Imports
use std::{cell::RefCell, rc::Rc};

// External Crate Imports
use color_eyre::{Report, Result, eyre::eyre};
use js_sys::Promise;
use tracing::warn;
use wasm_bindgen::{JsCast, prelude::*};
use wasm_bindgen_futures::{JsFuture, future_to_promise};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, File, FileReader, HtmlImageElement,
    HtmlInputElement, HtmlMediaElement,
};

// Local Crate Imports
use crate::{
    FilePreviewInput,
    media::{MediaKind, SelectedFile},
    target::{MediaPreview, Target},
};

// Public API ==========================================================================================================

#[wasm_bindgen]
pub struct InputFilePreview {
    element: HtmlInputElement,
    input: SharedInput,
    listener: Option<ChangeListener>,
}

#[wasm_bindgen]
impl InputFilePreview {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(element: HtmlInputElement) -> Self {
        console_error_panic_hook::set_once();
        element.set_type("file");

        Self {
            element,
            input: Rc::new(RefCell::new(FilePreviewInput::new())),
            listener: None,
        }
    }

    #[wasm_bindgen(js_name = connectedCallback)]
    pub fn connected_callback(&mut self) -> Result<(), JsValue> {
        self.remove_listener()?;

        let document = self
            .element
            .owner_document()
            .ok_or_else(|| JsError::new("the input doesn't belong to a document"))?;
        let element = &self.element;
        self.input
            .borrow_mut()
            .attach(
                |name| element.get_attribute(&format!("data-{name}")),
                |id| {
                    document.get_element_by_id(id).map(|target| WebTarget {
                        document: document.clone(),
                        element: target,
                    })
                },
            )
            .map_err(JsError::from)?;

        let listener = ChangeListener::new({
            let input = Rc::clone(&self.input);
            let element = self.element.clone();
            move |_: Event| on_change(&input, &element)
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        self.element
            .add_event_listener_with_callback_and_add_event_listener_options(
                "change",
                listener.as_ref().unchecked_ref(),
                &options,
            )?;
        self.listener = Some(listener);

        Ok(())
    }

    #[wasm_bindgen(js_name = disconnectedCallback)]
    pub fn disconnected_callback(&mut self) -> Result<(), JsValue> {
        self.remove_listener()?;
        self.input.borrow_mut().detach();

        Ok(())
    }
}

/// A preview container that lives in the browser's DOM
pub struct WebTarget {
    document: Document,
    element: Element,
}

impl Target for WebTarget {
    type Node = Element;

    fn tag_name(&self) -> String {
        self.element.tag_name().to_lowercase()
    }

    fn root(&self) -> Self::Node {
        self.element.clone()
    }

    fn clear(&mut self) -> Result<()> {
        while let Some(child) = self.element.first_child() {
            self.element.remove_child(&child).map_err(js_error)?;
        }

        Ok(())
    }

    fn append_list_item(&mut self) -> Result<Self::Node> {
        let item = self.document.create_element("li").map_err(js_error)?;
        self.element.append_child(&item).map_err(js_error)?;

        Ok(item)
    }

    fn insert_html(&mut self, node: &Self::Node, html: &str) -> Result<()> {
        node.insert_adjacent_html("beforeend", html)
            .map_err(js_error)
    }

    fn append_media(&mut self, node: &Self::Node, media: &MediaPreview) -> Result<()> {
        let element = self
            .document
            .create_element(media.kind().tag_name())
            .map_err(js_error)?;

        // NOTE: These casts can't fail, since the element was created from the tag name of its `MediaKind`
        match media.kind() {
            MediaKind::Image => {
                let image: &HtmlImageElement = element.unchecked_ref();
                image.set_src(media.src());
                image.set_alt(media.name());
            }
            MediaKind::Audio | MediaKind::Video => {
                let player: &HtmlMediaElement = element.unchecked_ref();
                player.set_src(media.src());
                player.set_controls(media.controls());
                player.set_text_content(Some(media.name()));
            }
        }

        node.append_child(&element).map_err(js_error)?;

        Ok(())
    }
}

// Private Helper Code =================================================================================================

type SharedInput = Rc<RefCell<FilePreviewInput<WebTarget>>>;
type ChangeListener = Closure<dyn FnMut(Event) -> Result<(), JsValue>>;

impl InputFilePreview {
    fn remove_listener(&mut self) -> Result<(), JsValue> {
        if let Some(listener) = self.listener.take() {
            self.element
                .remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref())?;
        }

        Ok(())
    }
}

fn on_change(input: &SharedInput, element: &HtmlInputElement) -> Result<(), JsValue> {
    let files: Vec<File> = element
        .files()
        .map(|list| (0..list.length()).filter_map(|index| list.get(index)).collect())
        .unwrap_or_default();
    let selected: Vec<_> = files.iter().map(selected_file).collect();

    let pending = input
        .borrow_mut()
        .change(&selected)
        .map_err(report_to_js)?;

    for read in pending {
        let file = files[read.index()].clone();
        let input = Rc::clone(input);

        // NOTE: A rejected promise that nobody awaits surfaces as an `unhandledrejection` on the page, which is where
        // a failed read should end up
        let _ = future_to_promise(async move {
            let data_url = read_data_url(&file).await.unwrap_or_else(|error| {
                warn!(?error, name = read.file().name(), "`FileReader` failed");
                None
            });

            input
                .borrow_mut()
                .finish(read, data_url)
                .map(|_| JsValue::UNDEFINED)
                .map_err(report_to_js)
        });
    }

    Ok(())
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn selected_file(file: &File) -> SelectedFile {
    SelectedFile::new(file.name(), file.size() as u64, file.type_())
}

async fn read_data_url(file: &File) -> Result<Option<String>, JsValue> {
    let reader = FileReader::new()?;
    let loaded = Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });

    reader.read_as_data_url(file)?;
    JsFuture::from(loaded).await?;

    Ok(reader.result()?.as_string())
}

fn js_error(value: JsValue) -> Report {
    eyre!("{value:?}")
}

fn report_to_js(report: Report) -> JsValue {
    JsError::new(&format!("{report}")).into()
}

// Unit Tests ==========================================================================================================

#[cfg(test)]
mod tests {
    use js_sys::Array;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::{DataTransfer, FilePropertyBag};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TEMPLATE: &str = "<p>${name} (${size} bytes)</p>";

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn target(tag_name: &str, id: &str) -> Element {
        let target = document().create_element(tag_name).unwrap();
        target.set_id(id);
        document().body().unwrap().append_child(&target).unwrap();
        target
    }

    fn input_for(id: &str) -> InputFilePreview {
        let element: HtmlInputElement = document().create_element("input").unwrap().unchecked_into();
        element.set_attribute("data-target-for", id).unwrap();
        element.set_attribute("data-error-message", TEMPLATE).unwrap();
        document().body().unwrap().append_child(&element).unwrap();

        InputFilePreview::new(element)
    }

    fn file(name: &str, mime: &str, contents: &str) -> File {
        let options = FilePropertyBag::new();
        options.set_type(mime);
        File::new_with_str_sequence_and_options(&Array::of1(&JsValue::from_str(contents)), name, &options)
            .unwrap()
    }

    fn select(preview: &InputFilePreview, files: &[File]) {
        let transfer = DataTransfer::new().unwrap();
        for file in files {
            transfer.items().add_with_file(file).unwrap();
        }

        preview.element.set_files(transfer.files().as_ref());
        preview
            .element
            .dispatch_event(&Event::new("change").unwrap())
            .unwrap();
    }

    async fn tick() {
        let elapsed = Promise::new(&mut |resolve, _| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 10)
                .unwrap();
        });
        JsFuture::from(elapsed).await.unwrap();
    }

    #[wasm_bindgen_test]
    fn construct() {
        let preview = input_for("construct");
        assert_eq!(preview.element.type_(), "file");
    }

    #[wasm_bindgen_test]
    fn connect_failures() {
        let mut preview = input_for("nowhere");
        assert!(preview.connected_callback().is_err());

        // Nothing is listening after a failed connection
        let sentinel = target("div", "nowhere-yet");
        sentinel.set_inner_html("<span>untouched</span>");
        preview
            .element
            .set_attribute("data-target-for", "nowhere-yet")
            .unwrap();
        preview.element.remove_attribute("data-error-message").unwrap();
        assert!(preview.connected_callback().is_err());

        select(&preview, &[file("notes.txt", "text/plain", "hi")]);
        assert_eq!(sentinel.inner_html(), "<span>untouched</span>");
    }

    #[wasm_bindgen_test]
    fn reconnect() {
        let container = target("div", "reconnect");
        container.set_inner_html("<span>untouched</span>");

        let mut preview = input_for("reconnect");
        preview.connected_callback().unwrap();
        preview.disconnected_callback().unwrap();

        // A disconnected input leaves its container alone
        select(&preview, &[file("notes.txt", "text/plain", "hi")]);
        assert_eq!(container.inner_html(), "<span>untouched</span>");

        preview.connected_callback().unwrap();
        select(&preview, &[file("notes.txt", "text/plain", "hi")]);
        assert_eq!(container.child_element_count(), 1);
        assert_eq!(container.inner_html(), "<p>notes.txt (2 bytes)</p>");

        select(&preview, &[]);
        assert_eq!(container.child_element_count(), 0);
    }

    #[wasm_bindgen_test]
    fn list_targets() {
        let list = target("UL", "list-targets");
        let web_target = WebTarget {
            document: document(),
            element: list.clone(),
        };
        assert_eq!(web_target.tag_name(), "ul");
        assert!(web_target.is_list());

        let mut preview = input_for("list-targets");
        preview.connected_callback().unwrap();
        select(
            &preview,
            &[
                file("<a>.txt", "text/plain", "a"),
                file("b.pdf", "application/pdf", "bb"),
            ],
        );

        assert_eq!(
            list.inner_html(),
            "<li><p>&lt;a&gt;.txt (1 bytes)</p></li><li><p>b.pdf (2 bytes)</p></li>"
        );
    }

    #[wasm_bindgen_test]
    fn append_media() {
        let container = target("div", "append-media");
        let mut web_target = WebTarget {
            document: document(),
            element: container.clone(),
        };
        let root = web_target.root();

        let image = MediaPreview::new(MediaKind::Image, "data:image/png;base64,", "cat.png");
        web_target.append_media(&root, &image).unwrap();
        let song = MediaPreview::new(MediaKind::Audio, "data:audio/mpeg;base64,", "song.mp3");
        web_target.append_media(&root, &song).unwrap();

        let img: HtmlImageElement = container.query_selector("img").unwrap().unwrap().unchecked_into();
        assert_eq!(img.alt(), "cat.png");
        assert_eq!(img.get_attribute("src").as_deref(), Some("data:image/png;base64,"));

        let audio: HtmlMediaElement = container.query_selector("audio").unwrap().unwrap().unchecked_into();
        assert!(audio.controls());
        assert_eq!(audio.text_content().as_deref(), Some("song.mp3"));

        web_target.clear().unwrap();
        assert_eq!(container.child_element_count(), 0);
    }

    #[wasm_bindgen_test]
    async fn read_as_data_url() {
        let data_url = read_data_url(&file("hi.txt", "text/plain", "Hi")).await.unwrap();
        assert_eq!(data_url.as_deref(), Some("data:text/plain;base64,SGk="));
    }

    #[wasm_bindgen_test]
    async fn image_preview() {
        let container = target("div", "image-preview");
        let mut preview = input_for("image-preview");
        preview.connected_callback().unwrap();

        select(&preview, &[file("photo.png", "image/png", "not really a png")]);
        assert_eq!(container.child_element_count(), 0);

        for _ in 0..50 {
            if container.child_element_count() > 0 {
                break;
            }
            tick().await;
        }

        assert_eq!(container.child_element_count(), 1);
        let img: HtmlImageElement = container.first_element_child().unwrap().unchecked_into();
        assert_eq!(img.alt(), "photo.png");
        assert!(img.src().starts_with("data:image/png;base64,"));
    }
}
