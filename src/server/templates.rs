//! Page rendering.

use serde::Serialize;
use tera::{Context, Tera};

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Values shown on the index page. Unset fields are left out of the context.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageView {
    pub fn output(text: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            output: Some(output.into()),
            error: None,
        }
    }

    pub fn error(text: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            output: None,
            error: Some(error.into()),
        }
    }
}

/// Compiled page templates, built once at startup.
#[derive(Debug)]
pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template("index.html", INDEX_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render_index(&self, view: &PageView) -> Result<String, tera::Error> {
        let context = Context::from_serialize(view)?;
        self.tera.render("index.html", &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_page() {
        let html = Pages::new().unwrap().render_index(&PageView::default()).unwrap();
        assert!(html.contains("<form"));
        assert!(!html.contains("class=\"output\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_render_output_and_echo() {
        let html = Pages::new()
            .unwrap()
            .render_index(&PageView::output("hey", "yo"))
            .unwrap();
        assert!(html.contains("<div class=\"output\">yo</div>"));
        assert!(html.contains(">hey</textarea>"));
    }

    #[test]
    fn test_render_escapes_html() {
        let html = Pages::new()
            .unwrap()
            .render_index(&PageView::error("", "<script>"))
            .unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
