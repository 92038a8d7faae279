use dominator::{html, Dom};
use futures_signals::signal::{Signal, SignalExt};

pub struct Spinner;

impl Spinner {
    /// Submit button that swaps its label and disables itself while
    /// `loading` is true.
    pub fn render_button<S>(label: &'static str, busy_label: &'static str, loading: S) -> Dom
    where
        S: Signal<Item = bool> + 'static,
    {
        let loading = loading.broadcast();
        html!("button", {
            .class(["btn", "btn-primary", "btn-block"])
            .attr("type", "submit")
            .prop_signal("disabled", loading.signal())
            .child_signal(loading.signal().map(move |is_loading| Some(if is_loading {
                html!("span", {
                    .class("btn-busy")
                    .children(&mut [
                        html!("span", {
                            .class(["loader", "loader-inline"])
                        }),
                        html!("span", {
                            .text(busy_label)
                        }),
                    ])
                })
            } else {
                html!("span", {
                    .text(label)
                })
            })))
        })
    }
}
