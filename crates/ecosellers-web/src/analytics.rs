use std::rc::Rc;

use dominator::{clone, html, with_node, Dom};
use ecosellers_core::mock::{self, ProductPerformance, TimeRange};
use futures_signals::{
    map_ref,
    signal::{Mutable, Signal, SignalExt},
};
use serde::{Deserialize, Serialize};
use web_sys::HtmlSelectElement;

use crate::common::{self, chart, events};
use crate::utils::local_storage;

const FILTERS_KEY: &str = "settings:analytics";
const ALL_PRODUCTS: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Performance,
    Traffic,
    Demographics,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Performance, Tab::Traffic, Tab::Demographics];

    fn label(&self) -> &'static str {
        match self {
            Tab::Performance => "Performance",
            Tab::Traffic => "Traffic Sources",
            Tab::Demographics => "Demographics",
        }
    }
}

/// Filter selection, remembered across visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyticsFilters {
    time_range: String,
    product: Option<String>,
}

impl Default for AnalyticsFilters {
    fn default() -> Self {
        Self {
            time_range: TimeRange::default().value().to_string(),
            product: None,
        }
    }
}

pub struct Analytics {
    time_range: Mutable<TimeRange>,
    product: Mutable<Option<String>>,
    tab: Mutable<Tab>,
    products: Vec<ProductPerformance>,
}

impl Analytics {
    pub fn new() -> Rc<Self> {
        let filters = match local_storage().get_item(FILTERS_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<AnalyticsFilters>(&raw).unwrap_or_else(|e| {
                warn!("ignoring saved analytics filters: {}", e);
                AnalyticsFilters::default()
            }),
            _ => AnalyticsFilters::default(),
        };
        let products = mock::products();
        let product = filters
            .product
            .filter(|key| products.iter().any(|p| p.key == key.as_str()));

        Rc::new(Self {
            time_range: Mutable::new(TimeRange::from_value(&filters.time_range).unwrap_or_default()),
            product: Mutable::new(product),
            tab: Mutable::new(Tab::Performance),
            products,
        })
    }

    fn save(&self) {
        let filters = AnalyticsFilters {
            time_range: self.time_range.get().value().to_string(),
            product: self.product.get_cloned(),
        };
        match serde_json::to_string(&filters) {
            Ok(raw) => {
                if let Err(e) = local_storage().set_item(FILTERS_KEY, &raw) {
                    warn!("error saving analytics filters: {:?}", e);
                }
            }
            Err(e) => warn!("error encoding analytics filters: {}", e),
        }
    }

    fn selected_products(&self) -> impl Signal<Item = Vec<ProductPerformance>> + use<> {
        let products = self.products.clone();
        map_ref! {
            let product = self.product.signal_cloned(),
            let _range = self.time_range.signal() =>
            mock::filter_products(&products, product.as_deref())
        }
    }

    fn render_filters(analytics: Rc<Self>) -> Dom {
        html!("div", {
            .class(["card", "filters"])
            .children(&mut [
                html!("div", {
                    .class("field")
                    .children(&mut [
                        html!("label", {
                            .attr("for", "time-range")
                            .text("Time Range")
                        }),
                        html!("select" => HtmlSelectElement, {
                            .attr("id", "time-range")
                            .children(TimeRange::ALL.iter().map(|r| html!("option", {
                                .attr("value", r.value())
                                .text(r.label())
                            })))
                            .prop_signal("value", analytics.time_range.signal().map(|r| r.value()))
                            .with_node!(select => {
                                .event(clone!(analytics => move |_: events::Change| {
                                    if let Some(range) = TimeRange::from_value(&select.value()) {
                                        analytics.time_range.set_neq(range);
                                        analytics.save();
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
                            .attr("for", "product")
                            .text("Product")
                        }),
                        html!("select" => HtmlSelectElement, {
                            .attr("id", "product")
                            .children(&mut [
                                html!("option", {
                                    .attr("value", ALL_PRODUCTS)
                                    .text("All Products")
                                }),
                            ])
                            .children(analytics.products.iter().map(|p| html!("option", {
                                .attr("value", p.key)
                                .text(p.name)
                            })))
                            .prop_signal("value", analytics.product.signal_cloned().map(|p| {
                                p.unwrap_or_else(|| ALL_PRODUCTS.to_string())
                            }))
                            .with_node!(select => {
                                .event(clone!(analytics => move |_: events::Change| {
                                    let value = select.value();
                                    analytics.product.set_neq((value != ALL_PRODUCTS).then_some(value));
                                    analytics.save();
                                }))
                            })
                        }),
                    ])
                }),
            ])
        })
    }

    fn render_tabs(analytics: Rc<Self>) -> Dom {
        html!("div", {
            .class("tabs")
            .attr("role", "tablist")
            .children(Tab::ALL.iter().map(|tab| {
                let tab = *tab;
                html!("button", {
                    .class("tab")
                    .attr("role", "tab")
                    .class_signal("active", analytics.tab.signal().map(move |current| current == tab))
                    .text(tab.label())
                    .event(clone!(analytics => move |_: events::Click| {
                        analytics.tab.set_neq(tab);
                    }))
                })
            }))
        })
    }

    fn render_table(products: &[ProductPerformance]) -> Dom {
        html!("table", {
            .class("table")
            .children(&mut [
                html!("thead", {
                    .children(&mut [
                        html!("tr", {
                            .children(["Product", "Visits", "Purchases", "Conversion Rate"].iter().map(|h| html!("th", {
                                .text(h)
                            })))
                        }),
                    ])
                }),
                html!("tbody", {
                    .children(products.iter().map(|product| {
                        let ratio = product.ratio();
                        html!("tr", {
                            .children(&mut [
                                html!("td", {
                                    .text(product.name)
                                }),
                                html!("td", {
                                    .text(&product.visits.to_string())
                                }),
                                html!("td", {
                                    .text(&product.purchased.to_string())
                                }),
                                html!("td", {
                                    .class("ratio-cell")
                                    .children(&mut [
                                        html!("span", {
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
                    }))
                }),
            ])
        })
    }

    fn render_performance(analytics: Rc<Self>) -> Dom {
        let conversions = mock::conversions();
        html!("div", {
            .children(&mut [
                html!("div", {
                    .class(["grid", "grid-main"])
                    .children(&mut [
                        common::card("Visit to Purchase Conversion", None, vec![chart::bar_chart(
                            conversions.iter().map(|c| c.month.to_string()).collect(),
                            &[
                                chart::Series {
                                    name: "Visits",
                                    color: "#65d069",
                                    values: conversions.iter().map(|c| f64::from(c.visits)).collect(),
                                },
                                chart::Series {
                                    name: "Purchases",
                                    color: "#215f26",
                                    values: conversions.iter().map(|c| f64::from(c.purchases)).collect(),
                                },
                            ],
                        )]),
                        common::product_factors_card(&mock::product_factors()),
                    ])
                }),
            ])
            .child_signal(analytics.selected_products().map(|products| Some(html!("div", {
                .children(&mut [
                    common::product_performance_card(&products),
                    common::card("Product Performance", None, vec![Self::render_table(&products)]),
                ])
            }))))
        })
    }

    fn render_traffic() -> Dom {
        let traffic = mock::traffic();
        let series = [
            ("Organic Search", "#65d069", traffic.iter().map(|t| t.organic).collect::<Vec<_>>()),
            ("Social Media", "#3fb843", traffic.iter().map(|t| t.social).collect()),
            ("Direct", "#25782a", traffic.iter().map(|t| t.direct).collect()),
            ("Email", "#215f26", traffic.iter().map(|t| t.email).collect()),
        ]
        .into_iter()
        .map(|(name, color, values)| chart::Series {
            name,
            color,
            values: values.into_iter().map(f64::from).collect(),
        })
        .collect::<Vec<_>>();

        html!("div", {
            .class(["grid", "grid-main"])
            .children(&mut [
                common::card("Traffic Sources", None, vec![chart::line_chart(
                    traffic.iter().map(|t| t.month.to_string()).collect(),
                    &series,
                )]),
                common::card("Traffic Distribution", None, vec![chart::pie_chart(&mock::traffic_sources())]),
            ])
        })
    }

    fn render_demographics() -> Dom {
        html!("div", {
            .class(["grid", "grid-2"])
            .children(&mut [
                common::card("Age Demographics", None, vec![chart::pie_chart(&mock::demographics())]),
                common::card("Eco Interests", None, vec![chart::horizontal_bars(&mock::eco_interests(), "#3fb843")]),
            ])
        })
    }

    pub fn render(analytics: Rc<Self>) -> Dom {
        html!("div", {
            .class("analytics")
            .children(&mut [
                html!("div", {
                    .class("section-header")
                    .children(&mut [
                        html!("div", {
                            .children(&mut [
                                html!("h2", {
                                    .text("Product Performance Analysis")
                                }),
                                html!("p", {
                                    .class("muted")
                                    .text("Analyze your eco-friendly products' performance metrics.")
                                }),
                            ])
                        }),
                    ])
                }),
                Self::render_filters(analytics.clone()),
                Self::render_tabs(analytics.clone()),
            ])
            .child_signal(analytics.tab.signal().map(clone!(analytics => move |tab| Some(match tab {
                Tab::Performance => Self::render_performance(analytics.clone()),
                Tab::Traffic => Self::render_traffic(),
                Tab::Demographics => Self::render_demographics(),
            }))))
        })
    }
}
