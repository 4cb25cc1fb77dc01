use std::collections::HashMap;

use dioxus::prelude::*;
use input_file_preview::{
    FilePreviewInput,
    config::{ERROR_MESSAGE, MAX_SIZE, TARGET_FOR},
    media::{SelectedFile, data_url},
};
use tracing::error;

use crate::state::{SignalTarget, Targets};

#[component]
pub fn PreviewInput(
    label: &'static str,
    #[props(into)] target_for: String,
    #[props(into)] max_size: Option<String>,
    #[props(into)] error_message: String,
    #[props(default = false)] multiple: bool,
    #[props(extends = GlobalAttributes, extends = input)] input_attributes: Vec<Attribute>,
) -> Element {
    let targets = use_context::<Targets>();
    let (mut preview, attach_error) = use_hook(|| {
        let attributes = HashMap::from([
            (TARGET_FOR, Some(target_for)),
            (MAX_SIZE, max_size),
            (ERROR_MESSAGE, Some(error_message)),
        ]);

        let mut preview = FilePreviewInput::new();
        let attach_error = preview
            .attach(
                |name| attributes.get(name).cloned().flatten(),
                |id| targets.get(id).map(SignalTarget::from),
            )
            .err()
            .map(|error| error.to_string());

        (Signal::new(preview), attach_error)
    });
    use_drop(move || preview.write().detach());

    if let Some(attach_error) = attach_error {
        return rsx! {
            p { "{label}: {attach_error}" }
        };
    }

    rsx! {
        label {
            span { {label} }
            input {
                r#type: "file",
                multiple,
                onchange: move |event: FormEvent| async move {
                    // NOTE: This has to be claimed before the first `.await`, so that a selection made whilst this one
                    // is still looking up file sizes replaces it rather than the other way around
                    let selection = preview.write().select();

                    // NOTE: Native file dialogs only hand back paths, so names and MIME types are worked out from those
                    let engine = event.files();
                    let mut paths = Vec::new();
                    let mut files = Vec::new();
                    if let Some(engine) = &engine {
                        for path in engine.files() {
                            let Some(size) = engine.file_size(&path).await else {
                                error!(%path, "couldn't read the size of a selected file, so it won't be previewed");
                                continue;
                            };
                            files.push(SelectedFile::from_path(&path, size));
                            paths.push(path);
                        }
                    }

                    let result = preview.write().render(selection, &files);
                    let pending = match result {
                        Ok(Some(pending)) => pending,
                        Ok(None) => return,
                        Err(report) => {
                            error!("{report:?}");
                            return;
                        }
                    };

                    let Some(engine) = engine else {
                        return;
                    };
                    for read in pending {
                        let engine = engine.clone();
                        let path = paths[read.index()].clone();
                        spawn(async move {
                            let url = engine
                                .read_file(&path)
                                .await
                                .map(|bytes| data_url(read.file().mime(), &bytes));

                            let result = preview.write().finish(read, url);
                            if let Err(report) = result {
                                error!("{report:?}");
                            }
                        });
                    }
                },
                ..input_attributes,
            }
        }
    }
}
