use std::rc::Rc;

use chrono::Datelike;
use dominator::{html, link, Dom};
use ecosellers_core::route::Route;

use crate::common::{icons, Logo};
use crate::context::AppContext;
use crate::utils;

const SECTIONS: [(&str, &str); 3] = [
    ("#features", "Features"),
    ("#about", "About"),
    ("#testimonials", "Testimonials"),
];

const PREVIEW: [(&str, u32, &str); 3] = [
    ("Visited/Bought Ratio", 67, "67%"),
    ("Sustainability Score", 92, "92/100"),
    ("Customer Retention", 78, "78%"),
];

struct Testimonial {
    initials: &'static str,
    name: &'static str,
    company: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        initials: "AB",
        name: "Amelia Brown",
        company: "GreenLeaf Products",
        quote: "\"{app} has transformed how we understand our product performance. The analytics have helped us increase conversion rates by 23% in just three months!\"",
    },
    Testimonial {
        initials: "JL",
        name: "James Liu",
        company: "Sustainable Living Co.",
        quote: "\"Being able to showcase our certifications in one place has built credibility with our customers. Our eco-credentials are now a key part of our brand story.\"",
    },
    Testimonial {
        initials: "SR",
        name: "Sofia Rodriguez",
        company: "Earth Friendly Goods",
        quote: "\"The product factors analysis helped us identify that our packaging was a concern for customers. After making changes, our reviews improved dramatically!\"",
    },
];

pub struct Landing {
    context: Rc<AppContext>,
}

impl Landing {
    pub fn new(context: Rc<AppContext>) -> Rc<Self> {
        Rc::new(Self { context })
    }

    fn app_name(&self) -> &str {
        &self.context.config.app_name
    }

    fn render_auth_links(primary: &str, secondary: &str) -> Vec<Dom> {
        vec![
            link!(Route::Signup.url(), {
                .class(["btn", "btn-primary", "btn-lg"])
                .text(primary)
            }),
            link!(Route::Login.url(), {
                .class(["btn", "btn-outline", "btn-lg"])
                .text(secondary)
            }),
        ]
    }

    fn render_header(landing: &Rc<Self>) -> Dom {
        html!("header", {
            .class("landing-header")
            .children(&mut [
                Logo::Medium.render(landing.app_name(), true),
                html!("nav", {
                    .children(SECTIONS.iter().map(|(href, label)| html!("a", {
                        .attr("href", href)
                        .text(label)
                    })))
                }),
                html!("div", {
                    .class("header-actions")
                    .children(&mut [
                        link!(Route::Login.url(), {
                            .class(["btn", "btn-outline"])
                            .text("Login")
                        }),
                        link!(Route::Signup.url(), {
                            .class(["btn", "btn-primary"])
                            .text("Sign Up")
                        }),
                    ])
                }),
            ])
        })
    }

    fn render_preview() -> Dom {
        html!("div", {
            .class(["card", "preview-card"])
            .children(&mut [
                html!("div", {
                    .class("card-header-row")
                    .children(&mut [
                        html!("div", {
                            .class("icon-circle")
                            .children(&mut [icons::bar_chart(24)])
                        }),
                        html!("div", {
                            .children(&mut [
                                html!("h3", {
                                    .text("Your Product Analytics")
                                }),
                                html!("p", {
                                    .class("muted")
                                    .text("Eco Bamboo Utensils")
                                }),
                            ])
                        }),
                    ])
                }),
            ])
            .children(PREVIEW.iter().map(|(label, percent, value)| html!("div", {
                .class("preview-metric")
                .children(&mut [
                    html!("div", {
                        .class("date-row")
                        .children(&mut [
                            html!("span", {
                                .text(label)
                            }),
                            html!("strong", {
                                .text(value)
                            }),
                        ])
                    }),
                    html!("div", {
                        .class("ratio-track")
                        .children(&mut [
                            html!("div", {
                                .class("ratio-fill")
                                .style("width", &format!("{percent}%"))
                            }),
                        ])
                    }),
                ])
            })))
        })
    }

    fn render_hero(landing: &Rc<Self>) -> Dom {
        html!("section", {
            .class("hero")
            .children(&mut [
                html!("div", {
                    .children(&mut [
                        html!("h1", {
                            .text("Grow your eco-friendly business with insights that matter")
                        }),
                        html!("p", {
                            .text(&format!(
                                "{} helps sustainable product sellers analyze performance, showcase certifications, and make data-driven decisions.",
                                landing.app_name()
                            ))
                        }),
                        html!("div", {
                            .class("button-row")
                            .children(Self::render_auth_links("Join for Free", "Login"))
                        }),
                    ])
                }),
                Self::render_preview(),
            ])
        })
    }

    fn render_cta(landing: &Rc<Self>) -> Dom {
        html!("section", {
            .class("cta")
            .children(&mut [
                html!("h2", {
                    .text("Ready to grow your eco-friendly business?")
                }),
                html!("p", {
                    .text(&format!(
                        "Join thousands of sustainable sellers who are making a bigger impact with {}",
                        landing.app_name()
                    ))
                }),
                html!("div", {
                    .class("button-row")
                    .children(Self::render_auth_links("Get Started Today", "Login"))
                }),
            ])
        })
    }

    fn render_feature(icon: Dom, title: &str, description: &str) -> Dom {
        html!("div", {
            .class(["card", "feature"])
            .children(&mut [
                html!("div", {
                    .class("icon-circle")
                    .children(&mut [icon])
                }),
                html!("h3", {
                    .text(title)
                }),
                html!("p", {
                    .class("muted")
                    .text(description)
                }),
            ])
        })
    }

    fn render_features() -> Dom {
        html!("section", {
            .class("features")
            .attr("id", "features")
            .children(&mut [
                html!("h2", {
                    .text("Features Built for Eco-friendly Sellers")
                }),
                html!("p", {
                    .class("muted")
                    .text("Everything you need to grow your sustainable business and make a bigger impact")
                }),
                html!("div", {
                    .class(["grid", "grid-3"])
                    .children(&mut [
                        Self::render_feature(
                            icons::bar_chart(24),
                            "Performance Analytics",
                            "Track your products' performance with detailed analytics on visitor-to-buyer conversion rates.",
                        ),
                        Self::render_feature(
                            icons::award(24),
                            "Certification Management",
                            "Showcase your eco-certifications and sustainability credentials to build trust with customers.",
                        ),
                        Self::render_feature(
                            icons::shopping_bag(24),
                            "Product Insights",
                            "Understand the positive and negative factors affecting your product performance.",
                        ),
                        Self::render_feature(
                            icons::leaf(24),
                            "Eco Community",
                            "Connect with like-minded businesses and share sustainable practices.",
                        ),
                        Self::render_feature(
                            icons::line_chart(24),
                            "Growth Trends",
                            "Monitor your business growth and identify opportunities for expansion.",
                        ),
                        Self::render_feature(
                            icons::users(24),
                            "Customer Insights",
                            "Understand your customer base and their preferences for eco-friendly products.",
                        ),
                    ])
                }),
            ])
        })
    }

    fn render_about(landing: &Rc<Self>) -> Dom {
        let app_name = landing.app_name();
        html!("section", {
            .class("about")
            .attr("id", "about")
            .children(&mut [
                html!("div", {
                    .children(&mut [
                        html!("h2", {
                            .text(&format!("About {app_name}"))
                        }),
                        html!("p", {
                            .text("We believe that sustainable businesses deserve powerful tools to grow their impact. Our platform is designed specifically for eco-friendly product sellers who want to make informed decisions based on real data.")
                        }),
                        html!("p", {
                            .text(&format!("With {app_name}, you can showcase your certifications, analyze your product performance, and identify opportunities for improvement, all in one place."))
                        }),
                        link!(Route::Signup.url(), {
                            .class(["btn", "btn-primary"])
                            .text("Join Our Community")
                        }),
                    ])
                }),
                html!("div", {
                    .class(["card", "about-quote"])
                    .children(&mut [
                        Logo::Medium.render(app_name, true),
                        html!("blockquote", {
                            .text("\"Our mission is to help sustainable businesses thrive by providing them with the insights and tools they need to make a bigger impact on the world.\"")
                        }),
                        html!("p", {
                            .class("muted")
                            .text(&format!("- The {app_name} Team"))
                        }),
                    ])
                }),
            ])
        })
    }

    fn render_testimonials(landing: &Rc<Self>) -> Dom {
        let app_name = landing.app_name().to_string();
        html!("section", {
            .class("testimonials")
            .attr("id", "testimonials")
            .children(&mut [
                html!("h2", {
                    .text("What Our Sellers Say")
                }),
                html!("p", {
                    .class("muted")
                    .text("Hear from eco-friendly businesses that have grown with our platform")
                }),
                html!("div", {
                    .class(["grid", "grid-3"])
                    .children(TESTIMONIALS.iter().map(|t| html!("div", {
                        .class(["card", "testimonial"])
                        .children(&mut [
                            html!("div", {
                                .class("card-header-row")
                                .children(&mut [
                                    html!("div", {
                                        .class("avatar")
                                        .text(t.initials)
                                    }),
                                    html!("div", {
                                        .children(&mut [
                                            html!("p", {
                                                .class("testimonial-name")
                                                .text(t.name)
                                            }),
                                            html!("p", {
                                                .class("muted")
                                                .text(t.company)
                                            }),
                                        ])
                                    }),
                                ])
                            }),
                            html!("p", {
                                .class("testimonial-quote")
                                .text(&t.quote.replace("{app}", &app_name))
                            }),
                        ])
                    })))
                }),
            ])
        })
    }

    fn render_footer_column(title: &str, items: Vec<Dom>) -> Dom {
        html!("div", {
            .children(&mut [
                html!("h3", {
                    .text(title)
                }),
                html!("ul", {
                    .children(items.into_iter().map(|item| html!("li", {
                        .children(&mut [item])
                    })))
                }),
            ])
        })
    }

    fn render_footer(landing: &Rc<Self>) -> Dom {
        let app_name = landing.app_name();
        let anchor = |href: &str, label: &str| html!("a", {
            .attr("href", href)
            .text(label)
        });
        let contact = |icon: Dom, label: &str| html!("span", {
            .class("contact")
            .children(&mut [
                icon,
                html!("span", {
                    .text(label)
                }),
            ])
        });

        html!("footer", {
            .class("landing-footer")
            .children(&mut [
                html!("div", {
                    .class(["grid", "grid-4"])
                    .children(&mut [
                        html!("div", {
                            .children(&mut [
                                Logo::Medium.render(app_name, true),
                                html!("p", {
                                    .text("Helping sustainable businesses make a bigger impact through data-driven insights.")
                                }),
                            ])
                        }),
                        Self::render_footer_column("Quick Links", vec![
                            anchor("#features", "Features"),
                            anchor("#about", "About"),
                            anchor("#testimonials", "Testimonials"),
                            link!(Route::Login.url(), {
                                .text("Login")
                            }),
                            link!(Route::Signup.url(), {
                                .text("Sign Up")
                            }),
                        ]),
                        Self::render_footer_column("Legal", vec![
                            anchor("#", "Terms of Service"),
                            anchor("#", "Privacy Policy"),
                            anchor("#", "Cookie Policy"),
                        ]),
                        Self::render_footer_column("Contact", vec![
                            contact(icons::mail(16), "contact@ecosellershub.com"),
                            contact(icons::phone(16), "+1 (555) 123-4567"),
                        ]),
                    ])
                }),
                html!("p", {
                    .class("copyright")
                    .text(&format!("© {} {app_name}. All rights reserved.", utils::today().year()))
                }),
            ])
        })
    }

    pub fn render(landing: Rc<Self>) -> Dom {
        html!("div", {
            .class("landing")
            .children(&mut [
                Self::render_header(&landing),
                Self::render_hero(&landing),
                Self::render_cta(&landing),
                Self::render_features(),
                Self::render_about(&landing),
                Self::render_testimonials(&landing),
                Self::render_footer(&landing),
            ])
        })
    }
}
