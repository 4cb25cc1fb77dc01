use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        div {
            h1 { "Input File Preview" }
        }
    }
}
