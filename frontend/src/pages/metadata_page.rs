use dioxus::prelude::*;

use crate::routes::Route;

/// Repository endpoint serving a resource by its numeric id.
const ARCHE_RESOURCE_BASE_URL: &str = "https://arche.acdh.oeaw.ac.at/api";

/// Resource page. Type-specific viewers live in the repository itself; this page links there.
#[component]
pub fn MetadataPage(id: String) -> Element {
    let resource_url = format!("{}/{}", ARCHE_RESOURCE_BASE_URL, id);
    rsx! {
        Title { "ARCHE Browser - Resource {id}" }
        div {
            id: "x-metadata-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 16px;
                padding: 36px 40px;
                box-sizing: border-box;
            ",
            h1 { style: "font-size: 28px; font-weight: 500;", "Resource {id}" }
            a { href: "{resource_url}", target: "_blank", "{resource_url}" }
            a {
                href: "{resource_url}/metadata",
                target: "_blank",
                "Metadata"
            }
            Link { to: Route::default_discover_page(), "Back to discovery" }
        }
    }
}
