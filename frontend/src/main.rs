//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::server::axum;

        Ok(dioxus::server::router(App)
            // we can apply a layer to the entire router using axum's `.layer` method
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let method = request.method().clone();
                    let uri = request.uri().clone();
                    let res = next.run(request).await;
                    dioxus::logger::tracing::info!("{} {} -> {}", method, uri, res.status());
                    res
                },
            )))
    });
}
