//! About page. Fixed content, no state.

use askama::Template;

pub struct TechRow {
    pub section: &'static str,
    pub technology: &'static str,
    pub description: &'static str,
}

const TECH_STACK: &[TechRow] = &[
    TechRow {
        section: "Search",
        technology: "Remote matching API",
        description: "Vector similarity search over indexed job postings.",
    },
    TechRow {
        section: "Web",
        technology: "axum, tokio, askama",
        description: "Server-rendered pages and a small JSON API.",
    },
    TechRow {
        section: "Client",
        technology: "reqwest, serde",
        description: "Talks JSON to the matching API.",
    },
    TechRow {
        section: "Highlighting",
        technology: "Skill catalog",
        description: "Marks which of your skills each posting mentions.",
    },
];

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub stack: &'static [TechRow],
}

impl Default for AboutPage {
    fn default() -> Self {
        Self { stack: TECH_STACK }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_lists_tech_stack() {
        let html = AboutPage::default().render().unwrap();
        assert!(html.contains("<h1>Tech Stack</h1>"));
        assert!(html.contains("<title>About SwipeJob</title>"));
        assert_eq!(html.matches("<tr><td>").count(), TECH_STACK.len());
    }

    #[test]
    fn test_about_is_stable() {
        let page = AboutPage::default();
        assert_eq!(page.render().unwrap(), page.render().unwrap());
    }
}
