use dominator::{clone, events, html, Dom};
use futures_signals::signal::Mutable;
use std::rc::Rc;

use super::icons;

pub struct Modal {
    show: Mutable<bool>,
}

impl Modal {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            show: Mutable::new(false),
        })
    }

    pub fn open(&self) {
        self.show.set_neq(true);
    }

    pub fn close(&self) {
        self.show.set_neq(false);
    }

    pub fn render(modal: Rc<Self>, title: &str, description: &str, children: Dom) -> Dom {
        html!("div", {
            .visible_signal(modal.show.signal())
            .children(&mut [
                html!("div", {
                    .class("modal-background")
                    .event(clone!(modal => move |_: events::Click| {
                        modal.close();
                    }))
                }),
                html!("div", {
                    .class("modal")
                    .attr("role", "dialog")
                    .children(&mut [
                        html!("div", {
                            .class("modal-header")
                            .children(&mut [
                                html!("h2", {
                                    .text(title)
                                }),
                                html!("p", {
                                    .class("muted")
                                    .text(description)
                                }),
                                html!("button", {
                                    .class("modal-close")
                                    .attr("aria-label", "Close")
                                    .event(clone!(modal => move |_: events::Click| {
                                        modal.close();
                                    }))
                                    .children(&mut [icons::plus(16)])
                                }),
                            ])
                        }),
                        children,
                    ])
                })
            ])
        })
    }
}
