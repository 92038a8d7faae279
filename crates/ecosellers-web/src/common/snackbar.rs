use std::rc::Rc;

use dominator::{clone, html, svg, Dom};
use ecosellers_core::notice::Notice;
use futures_signals::signal::{Mutable, SignalExt};
use gloo_timers::future::TimeoutFuture;

use crate::common::events;
use crate::utils::AsyncLoader;

const DISMISS_AFTER_MS: u32 = 5000;

thread_local! {
    static SNACKBAR: std::cell::RefCell<Rc<Snackbar>> = std::cell::RefCell::new(Snackbar::new());
}

pub fn show(notice: Notice) {
    SNACKBAR.with(|s| Snackbar::show(s.borrow().clone(), notice));
}

pub fn render() -> Dom {
    SNACKBAR.with(|s| Snackbar::render(s.borrow().clone()))
}

pub struct Snackbar {
    notice: Mutable<Option<Notice>>,
    loader: AsyncLoader,
}

impl Snackbar {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            notice: Mutable::new(None),
            loader: AsyncLoader::new(),
        })
    }

    pub fn show(snackbar: Rc<Self>, notice: Notice) {
        if notice.is_destructive() {
            warn!("{}: {}", notice.title, notice.description);
        }
        snackbar.notice.set(Some(notice));
        snackbar.loader.load(clone!(snackbar => async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            snackbar.notice.set(None);
        }));
    }

    pub fn render(snackbar: Rc<Self>) -> Dom {
        html!("div", {
            .class("snackbar")
            .visible_signal(snackbar.notice.signal_ref(|notice| notice.is_some()))
            .class_signal("destructive", snackbar.notice.signal_ref(|notice| {
                notice.as_ref().map(Notice::is_destructive).unwrap_or(false)
            }))
            .children(&mut [
                html!("div", {
                    .child_signal(snackbar.notice.signal_cloned().map(|notice| notice.map(|notice| html!("div", {
                        .children(&mut [
                            html!("strong", {
                                .text(&notice.title)
                            }),
                            html!("p", {
                                .text(&notice.description)
                            }),
                        ])
                    }))))
                    .children(&mut [
                        html!("button", {
                            .attr("aria-label", "Dismiss")
                            .event(clone!(snackbar => move |_: events::Click| snackbar.notice.set(None)))
                            .children(&mut [
                                svg!("svg", {
                                    .attr("xmlns", "http://www.w3.org/2000/svg")
                                    .attr("viewBox", "0 0 24 24")
                                    .attr("stroke", "currentColor")
                                    .attr("fill", "none")
                                    .class("icon")
                                    .children(&mut [
                                        svg!("path", {
                                            .attr("stroke-linecap", "round")
                                            .attr("stroke-linejoin", "round")
                                            .attr("stroke-width", "2")
                                            .attr("d", "M6 18L18 6M6 6l12 12")
                                        }),
                                    ])
                                })
                            ])
                        })
                    ])
                })
            ])
        })
    }
}
