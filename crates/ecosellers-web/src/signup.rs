use std::rc::Rc;

use dominator::{clone, html, link, Dom, EventOptions};
use ecosellers_core::auth::{sign_up, signup_schema, SignupDetails};
use ecosellers_core::notice::Notice;
use ecosellers_core::route::Route;

use crate::common::{events, route, snackbar, AuthLayout, Form, Spinner};
use crate::context::AppContext;
use crate::utils::AsyncLoader;

pub struct Signup {
    context: Rc<AppContext>,
    form: Rc<Form>,
    loader: AsyncLoader,
}

impl Signup {
    pub fn new(context: Rc<AppContext>) -> Rc<Self> {
        Rc::new(Self {
            context,
            form: Form::new(signup_schema()),
            loader: AsyncLoader::new(),
        })
    }

    pub fn register(signup: Rc<Self>) {
        let Ok(values) = signup.form.submit() else {
            return;
        };
        let details = SignupDetails::from_values(&values);

        signup.loader.load(clone!(signup => async move {
            let context = &signup.context;
            match sign_up(&context.auth, &context.guard, &context.store, details).await {
                Ok((session, next)) => {
                    context.signed_in(session);
                    route::go_to(next);
                    snackbar::show(Notice::signup_succeeded(&context.config.app_name));
                }
                Err(e) => {
                    snackbar::show(Notice::signup_failed(e));
                }
            }
        }));
    }

    fn render_form(signup: Rc<Self>) -> Dom {
        let form = &signup.form;
        html!("form", {
            .class("auth-form")
            .attr("novalidate", "")
            .event_with_options(&EventOptions::preventable(), clone!(signup => move |e: events::Submit| {
                e.prevent_default();
                Self::register(signup.clone());
            }))
            .children(&mut [
                html!("div", {
                    .class("field-row")
                    .children(&mut [
                        Form::render_input(form.clone(), "firstName", "First Name", "text", "John"),
                        Form::render_input(form.clone(), "lastName", "Last Name", "text", "Doe"),
                    ])
                }),
                Form::render_input(form.clone(), "companyName", "Company Name", "text", "Eco Friendly Co."),
                Form::render_input(form.clone(), "email", "Email", "email", "you@example.com"),
                Form::render_input(form.clone(), "password", "Password", "password", "••••••••"),
                Form::render_textarea(
                    form.clone(),
                    "companyDescription",
                    "Company Description",
                    "Tell us about your eco-friendly business...",
                    3,
                ),
                Form::render_textarea(form.clone(), "address", "Address", "Your company address...", 2),
                Spinner::render_button("Create Account", "Creating account...", signup.loader.is_loading()),
            ])
        })
    }

    pub fn render(signup: Rc<Self>) -> Dom {
        let app_name = signup.context.config.app_name.clone();
        AuthLayout::render(
            &format!("Join {app_name}"),
            "Create an account to start selling your eco-friendly products",
            &app_name,
            html!("div", {
                .children(&mut [
                    Self::render_form(signup),
                    html!("p", {
                        .class("auth-switch")
                        .text("Already have an account? ")
                        .children(&mut [
                            link!(Route::Login.url(), {
                                .text("Login")
                            }),
                        ])
                    }),
                ])
            }),
        )
    }
}
