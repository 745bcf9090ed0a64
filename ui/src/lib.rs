pub mod render;
pub mod router;
pub mod routes;

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod pages;

#[cfg(feature = "web")]
pub use crate::app::App;

#[cfg(feature = "web")]
mod start {
    use leptos::mount::mount_to_body;
    use leptos::view;
    use wasm_bindgen::prelude::*;

    use crate::App;
    use crate::router::{BrowserHistory, Navigator};
    use crate::routes::route_table;

    /// Where the site is mounted; every route path is relative to it.
    const BASE_PATH: &str = "/";

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

        let table = route_table().map_err(|e| {
            log::error!("route table rejected: {e}");
            JsValue::from_str(&e.to_string())
        })?;
        let history = BrowserHistory::with_base(BASE_PATH);
        log::info!("mounted under `{}/`", history.base());
        let navigator = Navigator::new(table, history);
        log::info!("starting at {}", navigator.current().path());

        mount_to_body(move || view! { <App navigator/> });
        Ok(())
    }
}
