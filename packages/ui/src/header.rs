use dioxus::prelude::*;

use crate::icons::{FaMoon, FaSun};
use crate::theme::ThemeState;
use crate::Icon;

const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "#home"),
    ("Projects", "#projects"),
    ("Skills", "#skills"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

/// Fixed top bar with in-page anchors and the theme toggle.
#[component]
pub fn Header(theme: ThemeState) -> Element {
    let mut theme = theme;
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "site-header",
            nav { class: "container nav",
                a { class: "brand", href: "#home", "Portfolio" }
                div { class: if menu_open() { "nav-links nav-links-open" } else { "nav-links" },
                    for (label, href) in NAV_LINKS {
                        a {
                            key: "{href}",
                            href: "{href}",
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }
                button {
                    class: "btn btn-ghost theme-toggle",
                    aria_label: "Toggle theme",
                    onclick: move |_| theme.toggle(),
                    if theme.is_dark() {
                        Icon { icon: FaSun, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaMoon, width: 16, height: 16 }
                    }
                }
                button {
                    class: "btn btn-ghost menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    "☰"
                }
            }
        }
    }
}
