use std::rc::Rc;

use dominator::{html, link, Dom};
use ecosellers_core::certification::CertificationBook;
use ecosellers_core::mock;
use ecosellers_core::route::Route;
use ecosellers_core::session::Session;
use futures_signals::signal::SignalExt;

use crate::common::{self, icons};
use crate::context::AppContext;
use crate::promo::PromoGenerator;

pub struct Dashboard {
    context: Rc<AppContext>,
    promo: Rc<PromoGenerator>,
}

impl Dashboard {
    pub fn new(context: Rc<AppContext>) -> Rc<Self> {
        let promo = PromoGenerator::new(&context.config);
        Rc::new(Self { context, promo })
    }

    fn render_welcome(dashboard: &Rc<Self>) -> Dom {
        html!("div", {
            .class("welcome")
            .children(&mut [
                html!("h2", {
                    .text_signal(dashboard.context.session_signal().map(|session| {
                        format!("Welcome, {}!", session.as_ref().map(Session::display_name).unwrap_or_default())
                    }))
                }),
                html!("p", {
                    .class("muted")
                    .text("Here's an overview of your eco-friendly business performance.")
                }),
            ])
        })
    }

    fn render_stats() -> Dom {
        let marks = [icons::shopping_bag(24), icons::trending_up(24), icons::award(24)];
        html!("div", {
            .class(["grid", "grid-3"])
            .children(mock::stats().iter().zip(marks).map(|(stat, icon)| common::stats_card(stat, icon)))
        })
    }

    fn render_profile_field(label: &str, value: &str) -> Dom {
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

    fn render_profile(dashboard: &Rc<Self>) -> Dom {
        html!("div", {
            .child_signal(dashboard.context.session_signal().map(|session| session.map(|session| {
                common::card("Company Profile", None, vec![
                    html!("div", {
                        .class("avatar-large")
                        .text(&session.initial())
                    }),
                    Self::render_profile_field("Company Name", session.company_name().unwrap_or("Not specified")),
                    Self::render_profile_field("Email", &session.email),
                    link!(Route::Settings.url(), {
                        .class(["btn", "btn-outline", "btn-block"])
                        .text("Edit Profile")
                    }),
                ])
            })))
        })
    }

    fn render_certifications() -> Dom {
        let book = CertificationBook::demo();
        html!("div", {
            .class("recent-certifications")
            .children(&mut [
                html!("div", {
                    .class("section-header")
                    .children(&mut [
                        html!("h3", {
                            .text("Certifications")
                        }),
                        link!(Route::Certifications.url(), {
                            .class(["btn", "btn-primary", "btn-sm"])
                            .children(&mut [
                                icons::plus(16),
                                html!("span", {
                                    .text("Add New")
                                }),
                            ])
                        }),
                    ])
                }),
            ])
            .children(book.recent(2).iter().map(common::certification_card))
        })
    }

    pub fn render(dashboard: Rc<Self>) -> Dom {
        html!("div", {
            .class("dashboard")
            .children(&mut [
                Self::render_welcome(&dashboard),
                Self::render_stats(),
                html!("div", {
                    .class(["grid", "grid-main"])
                    .children(&mut [
                        html!("div", {
                            .class("column-wide")
                            .children(&mut [
                                common::product_performance_card(&mock::products()),
                                common::product_factors_card(&mock::product_factors()),
                                PromoGenerator::render(dashboard.promo.clone()),
                            ])
                        }),
                        html!("div", {
                            .class("column")
                            .children(&mut [
                                Self::render_profile(&dashboard),
                                Self::render_certifications(),
                            ])
                        }),
                    ])
                }),
            ])
        })
    }
}
