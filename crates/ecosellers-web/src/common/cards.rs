use dominator::{html, Dom};
use ecosellers_core::certification::{format_date, Certification};
use ecosellers_core::mock::{ProductFactor, ProductPerformance, StatCard};

use super::{chart, icons};

pub fn card(title: &str, description: Option<&str>, mut body: Vec<Dom>) -> Dom {
    html!("div", {
        .class("card")
        .children(&mut [
            html!("div", {
                .class("card-header")
                .children(&mut [
                    html!("h3", {
                        .class("card-title")
                        .text(title)
                    }),
                ])
                .apply_if(description.is_some(), |dom| dom.child(html!("p", {
                    .class("card-description")
                    .text(description.unwrap_or_default())
                })))
            }),
            html!("div", {
                .class("card-content")
                .children(&mut body)
            }),
        ])
    })
}

pub fn stats_card(stat: &StatCard, icon: Dom) -> Dom {
    html!("div", {
        .class(["card", "stats-card"])
        .children(&mut [
            html!("div", {
                .children(&mut [
                    html!("p", {
                        .class("muted")
                        .text(stat.title)
                    }),
                    html!("h3", {
                        .class("stats-value")
                        .text(stat.value)
                    }),
                    html!("p", {
                        .class(if stat.trend.positive { "trend-up" } else { "trend-down" })
                        .children(&mut [
                            if stat.trend.positive { icons::trending_up(14) } else { icons::trending_down(14) },
                            html!("span", {
                                .text(&format!("{} from last month", stat.trend.value))
                            }),
                        ])
                    }),
                ])
            }),
            html!("div", {
                .class("stats-icon")
                .children(&mut [icon])
            }),
        ])
    })
}

fn badges(factors: &[ProductFactor], positive: bool) -> Dom {
    html!("div", {
        .class("badges")
        .children(factors.iter().filter(|f| f.positive == positive).map(|factor| html!("span", {
            .class(["badge", if positive { "badge-positive" } else { "badge-negative" }])
            .text(factor.label)
        })))
    })
}

pub fn product_factors_card(factors: &[ProductFactor]) -> Dom {
    card("Product Factors", None, vec![
        html!("h4", {
            .class("positive")
            .text("Positive Factors")
        }),
        badges(factors, true),
        html!("h4", {
            .class("negative")
            .text("Areas for Improvement")
        }),
        badges(factors, false),
    ])
}

pub fn product_performance_card(products: &[ProductPerformance]) -> Dom {
    card(
        "Product Performance",
        Some("Visited to purchase conversion ratio"),
        vec![chart::bar_chart(
            products.iter().map(|p| p.name.to_string()).collect(),
            &[
                chart::Series {
                    name: "Visits",
                    color: "#65d069",
                    values: products.iter().map(|p| f64::from(p.visits)).collect(),
                },
                chart::Series {
                    name: "Purchased",
                    color: "#3fb843",
                    values: products.iter().map(|p| f64::from(p.purchased)).collect(),
                },
            ],
        )],
    )
}

pub fn certification_card(cert: &Certification) -> Dom {
    html!("div", {
        .class(["card", "certification-card"])
        .children(&mut [
            html!("div", {
                .class("card-header-row")
                .children(&mut [
                    html!("div", {
                        .class("icon-circle")
                        .children(&mut [icons::award(24)])
                    }),
                    html!("div", {
                        .children(&mut [
                            html!("h3", {
                                .class("card-title")
                                .text(&cert.name)
                            }),
                            html!("p", {
                                .class("card-description")
                                .text(&cert.issuer)
                            }),
                        ])
                    }),
                ])
            }),
            html!("p", {
                .class("muted")
                .text(&format!("Issued: {}", format_date(cert.issue_date)))
            }),
        ])
    })
}
