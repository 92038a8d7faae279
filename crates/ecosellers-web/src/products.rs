use std::rc::Rc;

use dominator::{html, Dom};
use ecosellers_core::mock::{self, ProductPerformance};

use crate::common::{self, icons};

pub struct Products {
    products: Vec<ProductPerformance>,
}

impl Products {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            products: mock::products(),
        })
    }

    fn render_product(product: &ProductPerformance) -> Dom {
        let ratio = product.ratio();
        html!("div", {
            .class(["card", "product-card"])
            .children(&mut [
                html!("div", {
                    .class("card-header-row")
                    .children(&mut [
                        html!("div", {
                            .class("icon-circle")
                            .children(&mut [icons::shopping_bag(20)])
                        }),
                        html!("h3", {
                            .class("card-title")
                            .text(product.name)
                        }),
                    ])
                }),
                html!("div", {
                    .class("date-row")
                    .children(&mut [
                        html!("span", {
                            .class("muted")
                            .text("Visits")
                        }),
                        html!("span", {
                            .text(&product.visits.to_string())
                        }),
                    ])
                }),
                html!("div", {
                    .class("date-row")
                    .children(&mut [
                        html!("span", {
                            .class("muted")
                            .text("Purchased")
                        }),
                        html!("span", {
                            .text(&product.purchased.to_string())
                        }),
                    ])
                }),
                html!("div", {
                    .class("ratio-cell")
                    .children(&mut [
                        html!("strong", {
                            .text(&format!("{ratio}%"))
                        }),
                        html!("div", {
                            .class("ratio-track")
                            .children(&mut [
                                html!("div", {
                                    .class("ratio-fill")
                                    .style("width", &format!("{}%", ratio.min(100)))
                                }),
                            ])
                        }),
                    ])
                }),
            ])
        })
    }

    pub fn render(products: Rc<Self>) -> Dom {
        html!("div", {
            .class("products")
            .children(&mut [
                html!("div", {
                    .class("section-header")
                    .children(&mut [
                        html!("div", {
                            .children(&mut [
                                html!("h2", {
                                    .text("Your Products")
                                }),
                                html!("p", {
                                    .class("muted")
                                    .text("Visit to purchase conversion across your catalogue.")
                                }),
                            ])
                        }),
                    ])
                }),
                html!("div", {
                    .class(["grid", "grid-3"])
                    .children(products.products.iter().map(Self::render_product))
                }),
                common::product_performance_card(&products.products),
            ])
        })
    }
}
