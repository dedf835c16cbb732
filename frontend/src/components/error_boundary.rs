//! Error boundary components for rendering failures.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("error boundary {}: {:?}", boundary_name, err);
                rsx! {
                    h1 {
                        style: "color:red; font-size: 40px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Error",
                    }
                    p {
                        style: "color:darkred; font-size: 20px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    div {
                        style: "font-size: 20px; margin: 15px;",
                        Link { to: Route::default_discover_page(), "Start a new search" }
                    }
                    pre {
                        style: "color:black; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{err:#?}"
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color:blue; font-size: 20px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 15px;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

/// Inline error box; used for failed search requests as well as render errors.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h1 {
                style: "color:red; font-size: 28px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px;",
                "Search Error",
            }

            pre {
                style: "color:darkred; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
