use dioxus::prelude::*;

use crate::views::SectionTitle;

/// Name and self-assessed proficiency in percent.
const SKILLS: &[(&str, u8)] = &[
    ("React", 90),
    ("JavaScript", 95),
    ("Next.js", 70),
    ("Express.js", 80),
    ("Python", 85),
    ("TypeScript", 80),
    ("Node.js", 90),
    ("HTML/CSS", 95),
    ("Tailwind CSS", 85),
];

const TOOLS: &[(&str, &str)] = &[
    ("Git", "💻"),
    ("GitHub", "🐙"),
    ("N8N", "🔁"),
    ("AWS", "☁️"),
    ("Google Colab", "📊"),
    ("Figma", "🎨"),
    ("Canva", "🖌️"),
    ("Checkmk", "📊"),
    ("Docker", "🐳"),
    ("MongoDB", "🗃️"),
];

#[component]
fn SkillBar(name: String, percentage: u8) -> Element {
    rsx! {
        div { class: "skill",
            div { class: "skill-head",
                h3 { "{name}" }
                span { "{percentage}%" }
            }
            div { class: "skill-track",
                div { class: "skill-fill", style: "width: {percentage}%" }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "section section-alt",
            div { class: "container",
                SectionTitle {
                    title: "Skills & Expertise",
                    subtitle: "My technical skills and the professional tools I've picked up over the years.",
                }
                div { class: "two-columns",
                    div {
                        h3 { class: "column-title", "Technical Skills" }
                        for (name, percentage) in SKILLS.iter() {
                            SkillBar { key: "{name}", name: name.to_string(), percentage: *percentage }
                        }
                    }
                    div {
                        h3 { class: "column-title", "Tools & Technologies" }
                        div { class: "tool-grid",
                            for (name, icon) in TOOLS.iter() {
                                div { key: "{name}", class: "tool",
                                    span { class: "tool-icon", "{icon}" }
                                    span { "{name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
