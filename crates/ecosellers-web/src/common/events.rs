use dominator::traits::StaticEvent;
use wasm_bindgen::JsCast;

pub use dominator::events::*;

pub struct Submit {
    event: web_sys::Event,
}

impl StaticEvent for Submit {
    const EVENT_TYPE: &'static str = "submit";

    #[inline]
    fn unchecked_from_event(event: web_sys::Event) -> Self {
        Self { event }
    }
}

impl Submit {
    #[inline]
    pub fn prevent_default(&self) { self.event.prevent_default(); }
}

pub struct FileChange {
    event: web_sys::Event,
}

impl StaticEvent for FileChange {
    const EVENT_TYPE: &'static str = "change";

    #[inline]
    fn unchecked_from_event(event: web_sys::Event) -> Self {
        Self { event }
    }
}

impl FileChange {
    /// First file picked in the originating `<input type="file">`.
    pub fn file(&self) -> Option<web_sys::File> {
        self.event
            .target()?
            .dyn_into::<web_sys::HtmlInputElement>()
            .ok()?
            .files()?
            .get(0)
    }
}
