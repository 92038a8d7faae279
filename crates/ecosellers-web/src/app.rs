use std::rc::Rc;

use dominator::{clone, html, link, Dom};
use ecosellers_core::route::{Resolution, Route};
use futures_signals::signal::SignalExt;

use crate::analytics::Analytics;
use crate::certifications::Certifications;
use crate::common::{route, snackbar, DashboardLayout};
use crate::context::AppContext;
use crate::dashboard::Dashboard;
use crate::landing::Landing;
use crate::login::Login;
use crate::products::Products;
use crate::settings::Settings;
use crate::signup::Signup;

pub struct App {
    context: Rc<AppContext>,
}

impl App {
    pub fn new(context: Rc<AppContext>) -> Rc<Self> {
        Rc::new(App { context })
    }

    fn render_dashboard_page(app: &Rc<Self>, route: Route) -> Dom {
        let context = app.context.clone();
        let content = match route {
            Route::Products => Products::render(Products::new()),
            Route::Certifications => Certifications::render(Certifications::new()),
            Route::Analytics => Analytics::render(Analytics::new()),
            Route::Settings => Settings::render(Settings::new(context.clone())),
            _ => Dashboard::render(Dashboard::new(context.clone())),
        };
        DashboardLayout::render(DashboardLayout::new(context), route.title(), content)
    }

    fn render_not_found() -> Dom {
        html!("div", {
            .class("not-found")
            .children(&mut [
                html!("h1", {
                    .text("404")
                }),
                html!("p", {
                    .text("Oops! Page not found")
                }),
                link!(Route::Landing.url(), {
                    .class("btn-link")
                    .text("Return to Home")
                }),
            ])
        })
    }

    pub fn render(app: Rc<Self>) -> Dom {
        html!("div", {
            .class("app")
            .child_signal(route::signal().map(clone!(app => move |x| {
                match app.context.resolve(x) {
                    Resolution::Redirect { to, notice } => {
                        info!("{:?} requires a session, redirecting to {:?}", x, to);
                        route::go_to(to);
                        if let Some(notice) = notice {
                            snackbar::show(notice);
                        }
                        None
                    }
                    Resolution::Render(route) => Some(match route {
                        Route::Landing => Landing::render(Landing::new(app.context.clone())),
                        Route::Login => Login::render(Login::new(app.context.clone())),
                        Route::Signup => Signup::render(Signup::new(app.context.clone())),
                        Route::NotFound => Self::render_not_found(),
                        _ => Self::render_dashboard_page(&app, route),
                    }),
                }
            })))
            .children(&mut [
                snackbar::render(),
            ])
        })
    }
}
