use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::anyhow;
use chrono::NaiveDate;
use ecosellers_core::config::Config;
use ecosellers_core::error::StorageError;
use ecosellers_core::session::Storage;
use futures::{
    future::{abortable, AbortHandle},
    Future,
};
use futures_signals::signal::{Mutable, Signal};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Window;

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static LOCAL_STORAGE: web_sys::Storage = WINDOW.with(|w| w.local_storage().unwrap_throw().unwrap_throw());
}

pub struct AsyncState {
    id: usize,
    handle: AbortHandle,
}

impl AsyncState {
    fn new(handle: AbortHandle) -> Self {
        static ID: AtomicUsize = AtomicUsize::new(0);
        let id = ID.fetch_add(1, Ordering::SeqCst);

        Self { id, handle }
    }
}

/// Runs one future at a time; loading a new one aborts the previous.
pub struct AsyncLoader {
    loading: Mutable<Option<AsyncState>>,
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading: Mutable::new(None),
        }
    }

    pub fn replace(&self, value: Option<AsyncState>) {
        let mut loading = self.loading.lock_mut();
        if let Some(state) = loading.as_mut() {
            state.handle.abort();
        }
        *loading = value;
    }

    pub fn load<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let (fut, handle) = abortable(fut);

        let state = AsyncState::new(handle);
        let id = state.id;

        self.replace(Some(state));

        let loading = self.loading.clone();

        spawn_local(async move {
            match fut.await {
                Ok(()) => {
                    let mut loading = loading.lock_mut();

                    if let Some(current_id) = loading.as_ref().map(|x| x.id) {
                        if current_id == id {
                            *loading = None;
                        }
                    }
                }
                Err(e) => {
                    debug!("task aborted: {}", e);
                }
            }
        });
    }

    pub fn is_loading(&self) -> impl Signal<Item = bool> + use<> {
        self.loading.signal_ref(|x| x.is_some())
    }
}

/// `window.localStorage` behind the session store's storage trait.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        local_storage()
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

pub fn load_config() -> Config {
    match js_sys::eval("window.__ECOSELLERS_CONFIG__") {
        Ok(val) if !val.is_undefined() && !val.is_null() => {
            match js_sys::JSON::stringify(&val).ok().and_then(|s| s.as_string()) {
                Some(raw) => Config::from_json(&raw),
                None => {
                    warn!("config is not serializable, using defaults");
                    Config::default()
                }
            }
        }
        _ => Config::default(),
    }
}

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

pub fn today() -> NaiveDate {
    let date = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        date.get_full_year() as i32,
        date.get_month() + 1,
        date.get_date(),
    )
    .unwrap_or_default()
}

pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64 ^ now_ms())
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), anyhow::Error> {
    let clipboard = js_sys::Reflect::get(&window().navigator(), &"clipboard".into())
        .map_err(|e| anyhow!("error get clipboard: {:?}", e))?;
    let write_text = js_sys::Reflect::get(&clipboard, &"writeText".into())
        .map_err(|e| anyhow!("error get writeText: {:?}", e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| anyhow!("clipboard writeText is not a function"))?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| anyhow!("error write clipboard: {:?}", e))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| anyhow!("clipboard writeText did not return a promise"))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("error write clipboard: {:?}", e))?;

    Ok(())
}

pub fn create_object_url(file: &web_sys::File) -> Result<String, anyhow::Error> {
    web_sys::Url::create_object_url_with_blob(file)
        .map_err(|e| anyhow!("error create object url: {:?}", e))
}

pub fn revoke_object_url(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        warn!("error revoke object url: {:?}", e);
    }
}

pub fn window() -> Window {
    WINDOW.with(|s| s.clone())
}

pub fn local_storage() -> web_sys::Storage {
    LOCAL_STORAGE.with(|s| s.clone())
}
