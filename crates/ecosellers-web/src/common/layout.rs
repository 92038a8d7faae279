use std::rc::Rc;

use dominator::{clone, html, link, Dom};
use ecosellers_core::route::Route;
use futures_signals::signal::{Mutable, SignalExt};

use super::{events, icons, route, Logo};
use crate::context::AppContext;

const SIDEBAR: [(Route, &str); 5] = [
    (Route::Dashboard, "Dashboard"),
    (Route::Products, "Products"),
    (Route::Certifications, "Certifications"),
    (Route::Analytics, "Analytics"),
    (Route::Settings, "Settings"),
];

fn sidebar_icon(route: Route) -> Dom {
    match route {
        Route::Products => icons::shopping_bag(18),
        Route::Certifications => icons::award(18),
        Route::Analytics => icons::bar_chart(18),
        Route::Settings => icons::settings(18),
        _ => icons::layout_dashboard(18),
    }
}

/// Sidebar, header and user menu around every authenticated screen.
pub struct DashboardLayout {
    context: Rc<AppContext>,
    menu_open: Mutable<bool>,
}

impl DashboardLayout {
    pub fn new(context: Rc<AppContext>) -> Rc<Self> {
        Rc::new(Self {
            context,
            menu_open: Mutable::new(false),
        })
    }

    fn render_sidebar(layout: Rc<Self>) -> Dom {
        html!("aside", {
            .class("sidebar")
            .children(&mut [
                html!("div", {
                    .class("sidebar-logo")
                    .children(&mut [Logo::Medium.render(&layout.context.config.app_name, true)])
                }),
                html!("nav", {
                    .class("sidebar-links")
                    .children(SIDEBAR.iter().map(|(target, label)| {
                        let target = *target;
                        link!(target.url(), {
                            .class("sidebar-link")
                            .class_signal("active", route::signal().map(move |current| current == target))
                            .children(&mut [
                                sidebar_icon(target),
                                html!("span", {
                                    .text(label)
                                }),
                            ])
                        })
                    }))
                }),
                html!("div", {
                    .class("sidebar-footer")
                    .children(&mut [
                        html!("button", {
                            .class("sidebar-link")
                            .event(clone!(layout => move |_: events::Click| {
                                layout.context.logout();
                            }))
                            .children(&mut [
                                icons::log_out(18),
                                html!("span", {
                                    .text("Logout")
                                }),
                            ])
                        })
                    ])
                }),
            ])
        })
    }

    fn render_user_menu(layout: Rc<Self>) -> Dom {
        html!("div", {
            .class("user-menu")
            .children(&mut [
                html!("button", {
                    .class("user-menu-trigger")
                    .event(clone!(layout => move |_: events::Click| {
                        layout.menu_open.replace_with(|open| !*open);
                    }))
                    .children(&mut [
                        html!("div", {
                            .class("avatar")
                            .children(&mut [icons::user(16)])
                        }),
                        html!("span", {
                            .class("user-name")
                            .text_signal(layout.context.session_signal().map(|session| {
                                session.map(|s| s.display_name().to_string()).unwrap_or_default()
                            }))
                        }),
                    ])
                }),
                html!("div", {
                    .class("dropdown")
                    .visible_signal(layout.menu_open.signal())
                    .children(&mut [
                        html!("p", {
                            .class("dropdown-label")
                            .text("My Account")
                        }),
                        html!("hr"),
                        link!(Route::Settings.url(), {
                            .class("dropdown-item")
                            .event(clone!(layout => move |_: events::Click| {
                                layout.menu_open.set_neq(false);
                            }))
                            .text("Settings")
                        }),
                        html!("button", {
                            .class("dropdown-item")
                            .event(clone!(layout => move |_: events::Click| {
                                layout.menu_open.set_neq(false);
                                layout.context.logout();
                            }))
                            .text("Logout")
                        }),
                    ])
                }),
            ])
        })
    }

    pub fn render(layout: Rc<Self>, title: &str, content: Dom) -> Dom {
        html!("div", {
            .class("dashboard-layout")
            .children(&mut [
                Self::render_sidebar(layout.clone()),
                html!("div", {
                    .class("dashboard-main")
                    .children(&mut [
                        html!("header", {
                            .class("dashboard-header")
                            .children(&mut [
                                html!("h1", {
                                    .text(title)
                                }),
                                html!("div", {
                                    .class("header-actions")
                                    .children(&mut [
                                        html!("button", {
                                            .class("icon-button")
                                            .attr("aria-label", "Notifications")
                                            .children(&mut [icons::bell(20)])
                                        }),
                                        Self::render_user_menu(layout.clone()),
                                    ])
                                }),
                            ])
                        }),
                        html!("main", {
                            .class("dashboard-content")
                            .children(&mut [content])
                        }),
                    ])
                }),
            ])
        })
    }
}
