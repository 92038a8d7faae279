use dominator::{html, Dom};

use super::icons;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logo {
    Small,
    Medium,
    Large,
}

impl Logo {
    fn icon_size(&self) -> u32 {
        match self {
            Logo::Small => 24,
            Logo::Medium => 32,
            Logo::Large => 48,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Logo::Small => "logo-sm",
            Logo::Medium => "logo-md",
            Logo::Large => "logo-lg",
        }
    }

    pub fn render(self, app_name: &str, show_text: bool) -> Dom {
        html!("div", {
            .class(["logo", self.class()])
            .children(&mut [
                html!("div", {
                    .class("logo-mark")
                    .children(&mut [icons::leaf(self.icon_size())])
                }),
            ])
            .apply_if(show_text, |dom| dom.child(html!("span", {
                .class("logo-text")
                .text(app_name)
            })))
        })
    }
}
