use std::rc::Rc;

use dominator::{clone, html, Dom, EventOptions};
use ecosellers_core::certification::{format_date, Attachment, Certification, CertificationBook};
use ecosellers_core::notice::Notice;
use futures_signals::signal::{Mutable, SignalExt};

use crate::common::{events, icons, snackbar, Form, Modal};
use crate::utils;

pub struct Certifications {
    book: Mutable<CertificationBook>,
    form: Rc<Form>,
    modal: Rc<Modal>,
    attachment: Mutable<Option<Attachment>>,
    // bumped on reset so the file input is rebuilt empty
    generation: Mutable<u32>,
}

impl Certifications {
    pub fn new() -> Rc<Self> {
        let book = CertificationBook::demo();
        let form = Form::new(book.schema().clone());
        Rc::new(Self {
            book: Mutable::new(book),
            form,
            modal: Modal::new(),
            attachment: Mutable::new(None),
            generation: Mutable::new(0),
        })
    }

    fn attach(page: &Rc<Self>, file: web_sys::File) {
        match utils::create_object_url(&file) {
            Ok(object_url) => {
                let previous = page.attachment.replace(Some(Attachment {
                    file_name: file.name(),
                    object_url,
                }));
                if let Some(previous) = previous {
                    utils::revoke_object_url(&previous.object_url);
                }
            }
            Err(e) => {
                error!("{}", e);
                snackbar::show(Notice::error("Upload failed", e.to_string()));
            }
        }
    }

    fn submit(page: &Rc<Self>) {
        let Ok(values) = page.form.submit() else {
            return;
        };

        let result = {
            let mut book = page.book.lock_mut();
            book.add(&values, page.attachment.replace(None), utils::now_ms())
                .map(|(_, notice)| notice)
        };
        match result {
            Ok(notice) => {
                snackbar::show(notice);
                page.modal.close();
                page.form.reset();
                page.generation.replace_with(|g| *g + 1);
            }
            Err(errors) => {
                warn!("certification rejected: {:?}", errors);
            }
        }
    }

    fn render_file_input(page: Rc<Self>) -> Dom {
        html!("div", {
            .class("field")
            .children(&mut [
                html!("label", {
                    .attr("for", "attachment")
                    .text("Certificate File (Optional)")
                }),
            ])
            .child_signal(page.generation.signal().map(clone!(page => move |_| Some(html!("input", {
                .attr("id", "attachment")
                .attr("type", "file")
                .attr("accept", "image/*,application/pdf")
                .event(clone!(page => move |e: events::FileChange| {
                    if let Some(file) = e.file() {
                        Self::attach(&page, file);
                    }
                }))
            })))))
            .child_signal(page.attachment.signal_ref(|a| a.as_ref().map(|a| a.file_name.clone())).map(|name| {
                name.map(|name| html!("p", {
                    .class("muted")
                    .children(&mut [
                        icons::paperclip(14),
                        html!("span", {
                            .text(&name)
                        }),
                    ])
                }))
            }))
        })
    }

    fn render_form(page: Rc<Self>) -> Dom {
        let form = &page.form;
        html!("form", {
            .class("modal-form")
            .attr("novalidate", "")
            .event_with_options(&EventOptions::preventable(), clone!(page => move |e: events::Submit| {
                e.prevent_default();
                Self::submit(&page);
            }))
            .children(&mut [
                Form::render_input(form.clone(), "name", "Certification Name", "text", "e.g. Organic Certification"),
                Form::render_input(form.clone(), "issuer", "Issuing Organization", "text", "e.g. Green Business Alliance"),
                html!("div", {
                    .class("field-row")
                    .children(&mut [
                        Form::render_input(form.clone(), "issueDate", "Issue Date", "date", ""),
                        Form::render_input(form.clone(), "expiryDate", "Expiry Date (Optional)", "date", ""),
                    ])
                }),
                Form::render_textarea(
                    form.clone(),
                    "description",
                    "Description (Optional)",
                    "Describe what this certification means for your business",
                    3,
                ),
                Self::render_file_input(page.clone()),
                html!("div", {
                    .class("modal-footer")
                    .children(&mut [
                        html!("button", {
                            .class(["btn", "btn-primary"])
                            .attr("type", "submit")
                            .text("Add Certification")
                        }),
                    ])
                }),
            ])
        })
    }

    fn render_date_row(label: &str, value: String) -> Dom {
        html!("div", {
            .class("date-row")
            .children(&mut [
                html!("span", {
                    .class("muted")
                    .text(label)
                }),
                html!("span", {
                    .text(&value)
                }),
            ])
        })
    }

    fn render_card(cert: &Certification) -> Dom {
        let expired = cert.is_expired(utils::today());
        html!("div", {
            .class(["card", "certification-card"])
            .children(&mut [
                html!("div", {
                    .class("card-header-row")
                    .children(&mut [
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
                        html!("div", {
                            .class("icon-circle")
                            .children(&mut [icons::award(24)])
                        }),
                    ])
                }),
                html!("div", {
                    .class("card-content")
                    .children(&mut [
                        Self::render_date_row("Issue Date:", format_date(cert.issue_date)),
                    ])
                    .apply_if(cert.expiry_date.is_some(), |dom| {
                        dom.child(Self::render_date_row(
                            "Expiry Date:",
                            cert.expiry_date.map(format_date).unwrap_or_default(),
                        ))
                    })
                    .apply_if(expired, |dom| dom.child(html!("span", {
                        .class(["badge", "badge-negative"])
                        .text("Expired")
                    })))
                    .apply_if(cert.description.is_some(), |dom| dom.child(html!("p", {
                        .class("line-clamp")
                        .text(cert.description.as_deref().unwrap_or_default())
                    })))
                    .children(cert.attachment.iter().map(|a| {
                        html!("a", {
                            .class(["btn", "btn-outline", "btn-sm"])
                            .attr("href", &a.object_url)
                            .attr("target", "_blank")
                            .attr("rel", "noopener")
                            .children(&mut [
                                icons::paperclip(14),
                                html!("span", {
                                    .text(&a.file_name)
                                }),
                            ])
                        })
                    }))
                }),
            ])
        })
    }

    pub fn render(page: Rc<Self>) -> Dom {
        html!("div", {
            .class("certifications")
            .children(&mut [
                html!("div", {
                    .class("section-header")
                    .children(&mut [
                        html!("div", {
                            .children(&mut [
                                html!("h2", {
                                    .text("Your Certifications")
                                }),
                                html!("p", {
                                    .class("muted")
                                    .text("Manage and showcase your eco-friendly credentials.")
                                }),
                            ])
                        }),
                        html!("button", {
                            .class(["btn", "btn-primary"])
                            .event(clone!(page => move |_: events::Click| {
                                page.modal.open();
                            }))
                            .children(&mut [
                                icons::plus(16),
                                html!("span", {
                                    .text("Add Certification")
                                }),
                            ])
                        }),
                    ])
                }),
                Modal::render(
                    page.modal.clone(),
                    "Add New Certification",
                    "Add details about a new eco-friendly certification your company has earned.",
                    Self::render_form(page.clone()),
                ),
            ])
            .child_signal(page.book.signal_ref(|book| Some(html!("div", {
                .class(["grid", "grid-3"])
                .children(book.items().iter().map(Self::render_card))
            }))))
        })
    }
}
