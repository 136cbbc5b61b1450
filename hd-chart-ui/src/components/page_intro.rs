//! Page description block and the link back to the visualizations index.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageIntroProps {
    /// Trusted HTML shipped with the app
    pub description_html: String,
    pub back_link_href: String,
    pub back_link_text: String,
}

#[component]
pub fn PageIntro(props: PageIntroProps) -> Element {
    rsx! {
        div {
            style: "margin: 10px 25px;",
            dangerous_inner_html: "{props.description_html}",
        }
        div {
            style: "margin: 10px 10px 10px 25px; height: 25px;",
            a { href: "{props.back_link_href}", "{props.back_link_text}" }
        }
    }
}
