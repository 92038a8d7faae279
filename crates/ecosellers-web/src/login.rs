use std::rc::Rc;

use dominator::{clone, html, link, Dom, EventOptions};
use ecosellers_core::auth::{login_rejection, login_schema, sign_in, Credentials};
use ecosellers_core::notice::Notice;
use ecosellers_core::route::Route;

use crate::common::{events, route, snackbar, AuthLayout, Form, Spinner};
use crate::context::AppContext;
use crate::utils::AsyncLoader;

pub struct Login {
    context: Rc<AppContext>,
    form: Rc<Form>,
    loader: AsyncLoader,
}

impl Login {
    pub fn new(context: Rc<AppContext>) -> Rc<Self> {
        Rc::new(Self {
            context,
            form: Form::new(login_schema()),
            loader: AsyncLoader::new(),
        })
    }

    pub fn login(login: Rc<Self>) {
        let values = match login.form.submit() {
            Ok(values) => values,
            Err(errors) => {
                debug!("login form has {} invalid fields", errors.len());
                if let Some(e) = login_rejection(&errors) {
                    snackbar::show(Notice::login_failed(e));
                }
                return;
            }
        };
        let credentials = Credentials::from_values(&values);

        login.loader.load(clone!(login => async move {
            let context = &login.context;
            match sign_in(&context.auth, &context.guard, &context.store, credentials).await {
                Ok((session, next)) => {
                    context.signed_in(session);
                    route::go_to(next);
                    snackbar::show(Notice::login_succeeded(&context.config.app_name));
                }
                Err(e) => {
                    snackbar::show(Notice::login_failed(e));
                }
            }
        }));
    }

    fn render_form(login: Rc<Self>) -> Dom {
        html!("form", {
            .class("auth-form")
            .attr("novalidate", "")
            .event_with_options(&EventOptions::preventable(), clone!(login => move |e: events::Submit| {
                e.prevent_default();
                Self::login(login.clone());
            }))
            .children(&mut [
                Form::render_input(login.form.clone(), "email", "Email", "email", "you@example.com"),
                Form::render_input(login.form.clone(), "password", "Password", "password", "••••••••"),
                Spinner::render_button("Login", "Logging in...", login.loader.is_loading()),
            ])
        })
    }

    pub fn render(login: Rc<Self>) -> Dom {
        let app_name = login.context.config.app_name.clone();
        AuthLayout::render(
            "Welcome back",
            "Login to access your eco-seller dashboard",
            &app_name,
            html!("div", {
                .children(&mut [
                    Self::render_form(login),
                    html!("p", {
                        .class("auth-switch")
                        .text("Don't have an account? ")
                        .children(&mut [
                            link!(Route::Signup.url(), {
                                .text("Sign up")
                            }),
                        ])
                    }),
                ])
            }),
        )
    }
}
