use std::rc::Rc;

use dominator::{clone, html, with_node, Dom};
use ecosellers_core::form::{FieldErrors, FormState, FormValues, Schema};
use futures_signals::signal::Mutable;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use super::events;

/// A mounted form: field values and inline errors bound to inputs.
pub struct Form {
    state: Mutable<FormState>,
}

impl Form {
    pub fn new(schema: Schema) -> Rc<Self> {
        Rc::new(Self {
            state: Mutable::new(FormState::new(schema)),
        })
    }

    pub fn set(&self, field: &str, value: String) {
        self.state.lock_mut().set(field, value);
    }

    pub fn submit(&self) -> Result<FormValues, FieldErrors> {
        self.state.lock_mut().submit()
    }

    pub fn reset(&self) {
        self.state.lock_mut().reset();
    }

    fn render_error(form: &Rc<Self>, name: &'static str) -> Dom {
        html!("p", {
            .class("field-error")
            .text_signal(form.state.signal_ref(move |state| state.error(name).unwrap_or_default().to_string()))
        })
    }

    fn render_label(name: &'static str, label: &str) -> Dom {
        html!("label", {
            .attr("for", name)
            .text(label)
        })
    }

    pub fn render_input(
        form: Rc<Self>,
        name: &'static str,
        label: &str,
        input_type: &str,
        placeholder: &str,
    ) -> Dom {
        html!("div", {
            .class("field")
            .class_signal("invalid", form.state.signal_ref(move |state| state.error(name).is_some()))
            .children(&mut [
                Self::render_label(name, label),
                html!("input" => HtmlInputElement, {
                    .attr("id", name)
                    .attr("name", name)
                    .attr("type", input_type)
                    .attr("placeholder", placeholder)
                    .prop_signal("value", form.state.signal_ref(move |state| state.value(name).to_string()))
                    .with_node!(input => {
                        .event(clone!(form => move |_: events::Input| {
                            form.set(name, input.value());
                        }))
                    })
                }),
                Self::render_error(&form, name),
            ])
        })
    }

    pub fn render_textarea(
        form: Rc<Self>,
        name: &'static str,
        label: &str,
        placeholder: &str,
        rows: u32,
    ) -> Dom {
        html!("div", {
            .class("field")
            .class_signal("invalid", form.state.signal_ref(move |state| state.error(name).is_some()))
            .children(&mut [
                Self::render_label(name, label),
                html!("textarea" => HtmlTextAreaElement, {
                    .attr("id", name)
                    .attr("name", name)
                    .attr("rows", &rows.to_string())
                    .attr("placeholder", placeholder)
                    .prop_signal("value", form.state.signal_ref(move |state| state.value(name).to_string()))
                    .with_node!(input => {
                        .event(clone!(form => move |_: events::Input| {
                            form.set(name, input.value());
                        }))
                    })
                }),
                Self::render_error(&form, name),
            ])
        })
    }
}
