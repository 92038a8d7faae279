use dominator::routing;
use ecosellers_core::route::Route;
use futures_signals::signal::{Signal, SignalExt};
use wasm_bindgen::prelude::*;
use web_sys::Url;

pub fn signal() -> impl Signal<Item = Route> {
    routing::url()
        .signal_ref(|url| Url::new(url).unwrap_throw())
        .map(|url| Route::from_path(&url.pathname()))
        .dedupe()
}

pub fn go_to(route: Route) {
    info!("go to {}", route.url());
    routing::go_to_url(&route.url());
}
