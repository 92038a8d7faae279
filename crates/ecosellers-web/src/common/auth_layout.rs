use dominator::{html, Dom};

use super::{icons, Logo};

pub struct AuthLayout;

impl AuthLayout {
    fn render_benefit(icon: Dom, title: &str, description: &str) -> Dom {
        html!("div", {
            .class("benefit")
            .children(&mut [
                html!("div", {
                    .class("benefit-icon")
                    .children(&mut [icon])
                }),
                html!("div", {
                    .children(&mut [
                        html!("h3", {
                            .text(title)
                        }),
                        html!("p", {
                            .text(description)
                        }),
                    ])
                }),
            ])
        })
    }

    fn render_banner() -> Dom {
        html!("div", {
            .class("auth-banner")
            .children(&mut [
                html!("div", {
                    .class("auth-banner-content")
                    .children(&mut [
                        html!("h2", {
                            .text("Grow your eco-friendly business with us")
                        }),
                        html!("p", {
                            .text("Join our community of sustainable sellers and make an impact on the world while growing your business.")
                        }),
                        Self::render_benefit(
                            icons::bar_chart(24),
                            "Product Performance Analysis",
                            "Track and optimize your product metrics",
                        ),
                        Self::render_benefit(
                            icons::award(24),
                            "Certification Management",
                            "Showcase your eco credentials",
                        ),
                        Self::render_benefit(
                            icons::leaf(24),
                            "Eco-friendly Community",
                            "Connect with like-minded businesses",
                        ),
                    ])
                })
            ])
        })
    }

    pub fn render(title: &str, description: &str, app_name: &str, content: Dom) -> Dom {
        html!("div", {
            .class("auth-layout")
            .children(&mut [
                html!("div", {
                    .class("auth-form-side")
                    .children(&mut [
                        html!("div", {
                            .class("auth-form-container")
                            .children(&mut [
                                html!("div", {
                                    .class("auth-heading")
                                    .children(&mut [
                                        Logo::Large.render(app_name, true),
                                        html!("h1", {
                                            .text(title)
                                        }),
                                        html!("p", {
                                            .class("muted")
                                            .text(description)
                                        }),
                                    ])
                                }),
                                content,
                            ])
                        })
                    ])
                }),
                Self::render_banner(),
            ])
        })
    }
}
