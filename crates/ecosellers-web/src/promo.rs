use std::rc::Rc;

use dominator::{clone, html, with_node, Dom};
use ecosellers_core::config::Config;
use ecosellers_core::notice::Notice;
use ecosellers_core::promo::{DiscountType, PromoBook, PromoCode};
use futures_signals::signal::{Mutable, SignalExt};
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::common::{events, icons, snackbar};
use crate::utils::{self, AsyncLoader};

pub struct PromoGenerator {
    book: Mutable<PromoBook>,
    loader: AsyncLoader,
}

impl PromoGenerator {
    pub fn new(config: &Config) -> Rc<Self> {
        Rc::new(Self {
            book: Mutable::new(PromoBook::new(config.promo_prefix.clone(), config.promo_suffix_len)),
            loader: AsyncLoader::new(),
        })
    }

    fn generate(promo: &Rc<Self>) {
        let mut rng = utils::rng();
        let mut book = promo.book.lock_mut();
        debug!("generated promo code {}", book.generate(&mut rng));
    }

    fn publish(promo: &Rc<Self>) {
        let result = promo.book.lock_mut().publish();
        match result {
            Ok(notice) => snackbar::show(notice),
            Err(e) => snackbar::show(e.into()),
        }
    }

    fn copy(promo: &Rc<Self>, code: String) {
        promo.loader.load(async move {
            match utils::copy_to_clipboard(&code).await {
                Ok(_) => snackbar::show(Notice::info(
                    "Copied to clipboard",
                    format!("{code} has been copied to your clipboard."),
                )),
                Err(e) => {
                    error!("{}", e);
                    snackbar::show(Notice::error("Copy failed", e.to_string()));
                }
            }
        });
    }

    fn render_code_input(promo: Rc<Self>) -> Dom {
        html!("div", {
            .class("field")
            .children(&mut [
                html!("label", {
                    .attr("for", "promo-code")
                    .text("Promo Code")
                }),
                html!("div", {
                    .class("input-group")
                    .children(&mut [
                        html!("input" => HtmlInputElement, {
                            .attr("id", "promo-code")
                            .attr("placeholder", "ECOSPRING20")
                            .prop_signal("value", promo.book.signal_ref(|book| book.code.clone()))
                            .with_node!(input => {
                                .event(clone!(promo => move |_: events::Input| {
                                    promo.book.lock_mut().code = input.value();
                                }))
                            })
                        }),
                        html!("button", {
                            .class(["btn", "btn-outline"])
                            .attr("type", "button")
                            .text("Generate")
                            .event(clone!(promo => move |_: events::Click| {
                                Self::generate(&promo);
                            }))
                        }),
                    ])
                }),
            ])
        })
    }

    fn render_discount(promo: Rc<Self>) -> Dom {
        html!("div", {
            .class("field-row")
            .children(&mut [
                html!("div", {
                    .class("field")
                    .children(&mut [
                        html!("label", {
                            .attr("for", "discount-type")
                            .text("Discount Type")
                        }),
                        html!("select" => HtmlSelectElement, {
                            .attr("id", "discount-type")
                            .children(DiscountType::ALL.iter().map(|t| html!("option", {
                                .attr("value", t.value())
                                .text(t.label())
                            })))
                            .prop_signal("value", promo.book.signal_ref(|book| book.discount_type.value()))
                            .with_node!(select => {
                                .event(clone!(promo => move |_: events::Change| {
                                    if let Some(t) = DiscountType::from_value(&select.value()) {
                                        promo.book.lock_mut().discount_type = t;
                                    }
                                }))
                            })
                        }),
                    ])
                }),
                html!("div", {
                    .class("field")
                    .children(&mut [
                        html!("label", {
                            .attr("for", "discount-value")
                            .text("Discount Value")
                        }),
                        html!("input" => HtmlInputElement, {
                            .attr("id", "discount-value")
                            .attr("type", "number")
                            .prop_signal("value", promo.book.signal_ref(|book| book.discount_value.clone()))
                            .prop_signal("disabled", promo.book.signal_ref(|book| !book.discount_type.needs_value()))
                            .with_node!(input => {
                                .event(clone!(promo => move |_: events::Input| {
                                    promo.book.lock_mut().discount_value = input.value();
                                }))
                            })
                        }),
                    ])
                }),
            ])
        })
    }

    fn render_published(promo: Rc<Self>, codes: Vec<PromoCode>) -> Dom {
        html!("div", {
            .class("published-codes")
            .children(&mut [
                html!("h4", {
                    .text("Recently Published Codes")
                }),
            ])
            .children(codes.into_iter().map(|item| html!("div", {
                .class("published-code")
                .children(&mut [
                    html!("div", {
                        .children(&mut [
                            html!("strong", {
                                .text(&item.code)
                            }),
                            html!("span", {
                                .class("muted")
                                .text(&item.to_string())
                            }),
                        ])
                    }),
                    html!("div", {
                        .class("published-code-actions")
                        .children(&mut [
                            html!("button", {
                                .class(["btn", "btn-ghost"])
                                .attr("aria-label", "Copy")
                                .event(clone!(promo, item => move |_: events::Click| {
                                    Self::copy(&promo, item.code.clone());
                                }))
                                .children(&mut [icons::copy(16)])
                            }),
                            html!("button", {
                                .class(["btn", "btn-ghost"])
                                .attr("aria-label", "Share")
                                .children(&mut [icons::share(16)])
                            }),
                        ])
                    }),
                ])
            })))
        })
    }

    pub fn render(promo: Rc<Self>) -> Dom {
        html!("div", {
            .class(["card", "promo-generator"])
            .children(&mut [
                html!("div", {
                    .class("card-header-row")
                    .children(&mut [
                        html!("div", {
                            .children(&mut [
                                html!("h3", {
                                    .class("card-title")
                                    .text("Promo Code Generator")
                                }),
                                html!("p", {
                                    .class("card-description")
                                    .text("Create and publish promotion codes for your eco products")
                                }),
                            ])
                        }),
                        html!("div", {
                            .class("icon-circle")
                            .children(&mut [icons::ticket(20)])
                        }),
                    ])
                }),
                html!("div", {
                    .class("card-content")
                    .children(&mut [
                        Self::render_code_input(promo.clone()),
                        Self::render_discount(promo.clone()),
                    ])
                }),
                html!("div", {
                    .class("card-footer")
                    .children(&mut [
                        html!("button", {
                            .class(["btn", "btn-primary", "btn-block"])
                            .text("Publish Promo Code")
                            .prop_signal("disabled", promo.book.signal_ref(|book| book.code.is_empty()))
                            .event(clone!(promo => move |_: events::Click| {
                                Self::publish(&promo);
                            }))
                        }),
                    ])
                }),
            ])
            .child_signal(promo.book.signal_ref(|book| book.published().to_vec()).dedupe_cloned().map(clone!(promo => move |codes| {
                if codes.is_empty() {
                    None
                } else {
                    Some(Self::render_published(promo.clone(), codes))
                }
            })))
        })
    }
}
