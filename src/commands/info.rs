//! Static "About" and "Technologies" pages.

use clap::Args;
use serde::Serialize;

use super::OutputFormat;

#[derive(Debug, Serialize)]
pub struct Section {
    pub title: &'static str,
    #[serde(skip_serializing_if = "is_blank")]
    pub text: &'static str,
    pub items: &'static [&'static str],
}

fn is_blank(text: &&str) -> bool {
    text.is_empty()
}

pub const ABOUT: &[Section] = &[
    Section {
        title: "What is Foodgram?",
        text: "Foodgram is an online platform for sharing recipes and managing \
               cooking collections. Users create, save and share their recipes \
               and find inspiration in recipes from other users.",
        items: &[],
    },
    Section {
        title: "Features",
        text: "",
        items: &[
            "Create and publish recipes",
            "Subscribe to recipe authors",
            "Save favorite recipes",
            "Build a shopping list",
            "Manage your profile",
        ],
    },
    Section {
        title: "Recipes",
        text: "",
        items: &[
            "Dish photos",
            "Cooking time",
            "Ingredient list",
            "Step-by-step instructions",
            "Tags",
        ],
    },
    Section {
        title: "Subscriptions",
        text: "",
        items: &[
            "Follow interesting authors",
            "Feed of recipes from followed authors",
        ],
    },
    Section {
        title: "Shopping list",
        text: "",
        items: &[
            "Ingredients aggregated from every recipe in the cart",
            "Downloadable shopping list",
        ],
    },
];

pub const TECHNOLOGIES: &[Section] = &[
    Section {
        title: "Backend",
        text: "Python, serving the REST API.",
        items: &[
            "Django REST framework",
            "PostgreSQL",
            "Django ORM",
            "Token authentication",
        ],
    },
    Section {
        title: "Client",
        text: "Rust, talking to the REST API.",
        items: &["tokio", "reqwest", "serde", "clap", "tracing"],
    },
    Section {
        title: "DevOps",
        text: "Containerized deployment.",
        items: &["Docker Compose", "Nginx", "GitHub Actions", "CI/CD"],
    },
];

#[derive(Args)]
pub struct InfoCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl InfoCommand {
    pub fn run(
        &self,
        title: &str,
        sections: &[Section],
    ) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(sections)?),
            OutputFormat::Text => print!("{}", render(title, sections)),
        }
        Ok(())
    }
}

/// Renders sections as plain text under an underlined title.
pub fn render(title: &str, sections: &[Section]) -> String {
    let mut out = format!("{}\n{}\n", title, "=".repeat(title.chars().count()));
    for section in sections {
        out.push('\n');
        out.push_str(section.title);
        out.push('\n');
        if !section.text.is_empty() {
            out.push_str("  ");
            out.push_str(section.text);
            out.push('\n');
        }
        for item in section.items {
            out.push_str("  - ");
            out.push_str(item);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_about() {
        let text = render("About Foodgram", ABOUT);
        assert!(text.starts_with("About Foodgram\n==============\n"));
        assert!(text.contains("\nFeatures\n  - Create and publish recipes\n"));
        assert!(text.contains("  Foodgram is an online platform"));
    }

    #[test]
    fn test_about_json_skips_empty_text() {
        let json = serde_json::to_value(ABOUT).unwrap();
        assert!(json[1].get("text").is_none());
        assert_eq!(json[1]["items"][2], "Save favorite recipes");
    }
}
