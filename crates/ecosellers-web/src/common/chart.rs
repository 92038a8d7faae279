use std::f64::consts::PI;

use dominator::{html, svg, Dom};
use ecosellers_core::mock::Share;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 300.0;
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 32.0;
const GRID_LINES: u32 = 4;

pub const PALETTE: [&str; 5] = ["#65d069", "#3fb843", "#2d9832", "#25782a", "#215f26"];

pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Rounds the largest value up to 1, 2 or 5 times a power of ten.
fn nice_max(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(max)
}

fn plot_width() -> f64 {
    WIDTH - PAD_LEFT - PAD_RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - PAD_TOP - PAD_BOTTOM
}

fn y_for(value: f64, max: f64) -> f64 {
    PAD_TOP + plot_height() * (1.0 - value / max)
}

fn text(x: f64, y: f64, anchor: &str, label: &str) -> Dom {
    svg!("text", {
        .class("chart-label")
        .attr("x", &format!("{x:.1}"))
        .attr("y", &format!("{y:.1}"))
        .attr("text-anchor", anchor)
        .text(label)
    })
}

fn grid(max: f64) -> Vec<Dom> {
    (0..=GRID_LINES)
        .flat_map(|i| {
            let value = max * f64::from(i) / f64::from(GRID_LINES);
            let y = y_for(value, max);
            [
                svg!("line", {
                    .class("chart-grid")
                    .attr("x1", &PAD_LEFT.to_string())
                    .attr("x2", &(WIDTH - PAD_RIGHT).to_string())
                    .attr("y1", &format!("{y:.1}"))
                    .attr("y2", &format!("{y:.1}"))
                    .attr("stroke-dasharray", "3 3")
                }),
                text(PAD_LEFT - 6.0, y + 4.0, "end", &format!("{value:.0}")),
            ]
        })
        .collect()
}

fn x_labels(labels: &[String]) -> Vec<Dom> {
    let band = plot_width() / labels.len().max(1) as f64;
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| text(PAD_LEFT + band * (i as f64 + 0.5), HEIGHT - 10.0, "middle", label))
        .collect()
}

fn frame(mut children: Vec<Dom>) -> Dom {
    svg!("svg", {
        .class("chart")
        .attr("viewBox", &format!("0 0 {WIDTH} {HEIGHT}"))
        .attr("preserveAspectRatio", "xMidYMid meet")
        .children(&mut children)
    })
}

pub fn legend(entries: &[(&'static str, &'static str)]) -> Dom {
    html!("div", {
        .class("chart-legend")
        .children(entries.iter().map(|(name, color)| html!("span", {
            .class("chart-legend-item")
            .children(&mut [
                html!("span", {
                    .class("chart-swatch")
                    .style("background-color", *color)
                }),
                html!("span", {
                    .text(name)
                }),
            ])
        })))
    })
}

/// Grouped vertical bars, one group per label.
pub fn bar_chart(labels: Vec<String>, series: &[Series]) -> Dom {
    let max = nice_max(
        series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max),
    );
    let band = plot_width() / labels.len().max(1) as f64;
    let bar_width = band * 0.7 / series.len().max(1) as f64;

    let mut children = grid(max);
    for (si, s) in series.iter().enumerate() {
        for (i, value) in s.values.iter().enumerate() {
            let x = PAD_LEFT + band * i as f64 + band * 0.15 + bar_width * si as f64;
            let y = y_for(*value, max);
            children.push(svg!("rect", {
                .attr("x", &format!("{x:.1}"))
                .attr("y", &format!("{y:.1}"))
                .attr("width", &format!("{bar_width:.1}"))
                .attr("height", &format!("{:.1}", PAD_TOP + plot_height() - y))
                .attr("fill", s.color)
                .children(&mut [
                    svg!("title", {
                        .text(&format!("{}: {}", s.name, value))
                    })
                ])
            }));
        }
    }
    children.extend(x_labels(&labels));

    html!("div", {
        .class("chart-container")
        .children(&mut [
            frame(children),
            legend(&series.iter().map(|s| (s.name, s.color)).collect::<Vec<_>>()),
        ])
    })
}

pub fn line_chart(labels: Vec<String>, series: &[Series]) -> Dom {
    let max = nice_max(
        series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max),
    );
    let band = plot_width() / labels.len().max(1) as f64;

    let mut children = grid(max);
    for s in series {
        let points = s
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                format!(
                    "{:.1},{:.1}",
                    PAD_LEFT + band * (i as f64 + 0.5),
                    y_for(*value, max)
                )
            })
            .collect::<Vec<_>>()
            .join(" ");
        children.push(svg!("polyline", {
            .attr("points", &points)
            .attr("fill", "none")
            .attr("stroke", s.color)
            .attr("stroke-width", "2")
        }));
    }
    children.extend(x_labels(&labels));

    html!("div", {
        .class("chart-container")
        .children(&mut [
            frame(children),
            legend(&series.iter().map(|s| (s.name, s.color)).collect::<Vec<_>>()),
        ])
    })
}

/// Horizontal bars on a 0-100 scale.
pub fn horizontal_bars(shares: &[Share], color: &'static str) -> Dom {
    html!("div", {
        .class("hbar-chart")
        .children(shares.iter().map(|share| html!("div", {
            .class("hbar-row")
            .children(&mut [
                html!("span", {
                    .class("hbar-label")
                    .text(share.name)
                }),
                html!("div", {
                    .class("hbar-track")
                    .children(&mut [
                        html!("div", {
                            .class("hbar-fill")
                            .style("width", &format!("{}%", share.value.min(100)))
                            .style("background-color", color)
                        })
                    ])
                }),
                html!("span", {
                    .class("hbar-value")
                    .text(&share.value.to_string())
                }),
            ])
        })))
    })
}

fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (x1, y1) = (cx + r * start.cos(), cy + r * start.sin());
    let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
    let large_arc = if end - start > PI { 1 } else { 0 };
    format!("M{cx:.2},{cy:.2} L{x1:.2},{y1:.2} A{r:.2},{r:.2} 0 {large_arc} 1 {x2:.2},{y2:.2} Z")
}

pub fn pie_chart(shares: &[Share]) -> Dom {
    let total: u32 = shares.iter().map(|s| s.value).sum();
    let (cx, cy, r) = (100.0, 100.0, 80.0);

    let mut start = -PI / 2.0;
    let mut slices = Vec::with_capacity(shares.len());
    for (i, share) in shares.iter().enumerate() {
        let fraction = if total == 0 {
            0.0
        } else {
            f64::from(share.value) / f64::from(total)
        };
        let end = start + fraction * 2.0 * PI;
        slices.push(svg!("path", {
            .attr("d", &arc_path(cx, cy, r, start, end))
            .attr("fill", PALETTE[i % PALETTE.len()])
            .children(&mut [
                svg!("title", {
                    .text(&format!("{}: {:.0}%", share.name, fraction * 100.0))
                })
            ])
        }));
        start = end;
    }

    let entries = shares
        .iter()
        .enumerate()
        .map(|(i, s)| (s.name, PALETTE[i % PALETTE.len()]))
        .collect::<Vec<_>>();

    html!("div", {
        .class("chart-container")
        .children(&mut [
            svg!("svg", {
                .class(["chart", "chart-pie"])
                .attr("viewBox", "0 0 200 200")
                .children(&mut slices)
            }),
            legend(&entries),
        ])
    })
}
