use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            // shown while a child component waits on a resource
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color:rgba(0,0,0,0.7); font-size: 20px; border: 1px solid rgba(0,0,0,0.3); padding: 10px; border-radius: 5px; margin: 15px;",
            "Loading results..."
        }
    }
}
