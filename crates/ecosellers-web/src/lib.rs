#[macro_use]
extern crate log;

mod analytics;
mod app;
mod certifications;
mod common;
mod context;
mod dashboard;
mod landing;
mod login;
mod products;
mod promo;
mod settings;
mod signup;
mod utils;

use wasm_bindgen::prelude::*;

use app::App;
use context::AppContext;

#[wasm_bindgen(start)]
pub async fn main_js() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let config = utils::load_config();
    info!("starting {} with session key {:?}", config.app_name, config.storage_key);

    let context = AppContext::new(config);
    dominator::append_dom(&dominator::body(), App::render(App::new(context)));

    Ok(())
}
