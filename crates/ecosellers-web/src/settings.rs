use std::rc::Rc;

use dominator::{clone, html, Dom};
use futures_signals::signal::SignalExt;

use crate::common::{self, events, icons};
use crate::context::AppContext;

pub struct Settings {
    context: Rc<AppContext>,
}

impl Settings {
    pub fn new(context: Rc<AppContext>) -> Rc<Self> {
        Rc::new(Self { context })
    }

    fn render_row(label: &str, value: &str) -> Dom {
        html!("div", {
            .class("profile-field")
            .children(&mut [
                html!("p", {
                    .class("profile-label")
                    .text(label)
                }),
                html!("p", {
                    .text(value)
                }),
            ])
        })
    }

    pub fn render(settings: Rc<Self>) -> Dom {
        html!("div", {
            .class("settings")
            .child_signal(settings.context.session_signal().map(|session| session.map(|session| {
                common::card("Account", Some("The identity stored for this browser tab."), vec![
                    Self::render_row("Company Name", session.company_name().unwrap_or("Not specified")),
                    Self::render_row("Email", &session.email),
                ])
            })))
            .children(&mut [
                html!("button", {
                    .class(["btn", "btn-outline"])
                    .event(clone!(settings => move |_: events::Click| {
                        settings.context.logout();
                    }))
                    .children(&mut [
                        icons::log_out(16),
                        html!("span", {
                            .text("Logout")
                        }),
                    ])
                }),
            ])
        })
    }
}
