use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*[-*]\s+(.+)$").unwrap());
static NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*(\d+)\.\s+(.+)$").unwrap());

/// Convert the model's markdown summary to the styled HTML the document
/// viewer renders. Headings and main topics in red, sub-points in purple,
/// list markers indented.
pub fn markdown_to_html(text: &str) -> String {
    let text = BOLD.replace_all(
        text,
        r#"<strong style="color: #d32f2f; font-size: 1.1em;">${1}</strong>"#,
    );
    let text = ITALIC.replace_all(
        &text,
        r#"<em style="color: #7b1fa2; font-weight: 600;">${1}</em>"#,
    );

    let text = H3.replace_all(
        &text,
        r#"<h3 style="color: #d32f2f; margin-top: 20px; margin-bottom: 10px;">${1}</h3>"#,
    );
    let text = H2.replace_all(
        &text,
        r#"<h2 style="color: #c62828; margin-top: 25px; margin-bottom: 12px;">${1}</h2>"#,
    );
    let text = H1.replace_all(
        &text,
        r#"<h1 style="color: #b71c1c; margin-top: 30px; margin-bottom: 15px;">${1}</h1>"#,
    );

    let text = BULLET.replace_all(
        &text,
        r#"<div style="margin-left: 20px; margin-bottom: 8px;">• ${1}</div>"#,
    );
    let text = NUMBERED.replace_all(
        &text,
        r#"<div style="margin-left: 20px; margin-bottom: 8px;"><strong style="color: #1976d2;">${1}.</strong> ${2}</div>"#,
    );

    text.replace("\n\n", "<br><br>").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_becomes_red_strong() {
        let html = markdown_to_html("**Main Topic**: details");
        assert!(html.contains(r#"<strong style="color: #d32f2f; font-size: 1.1em;">Main Topic</strong>"#));
    }

    #[test]
    fn test_italic_becomes_purple_em() {
        let html = markdown_to_html("*Sub-point*: more");
        assert!(html.contains(r#"<em style="color: #7b1fa2; font-weight: 600;">Sub-point</em>"#));
    }

    #[test]
    fn test_heading_levels() {
        let html = markdown_to_html("# Title\n## Section\n### Detail");
        assert!(html.contains("<h1 style="));
        assert!(html.contains("<h2 style="));
        assert!(html.contains("<h3 style="));
        assert!(html.contains(">Title</h1>"));
        assert!(html.contains(">Section</h2>"));
        assert!(html.contains(">Detail</h3>"));
    }

    #[test]
    fn test_bullets_and_numbered_lists() {
        let html = markdown_to_html("- first\n2. second");
        assert!(html.contains("• first"));
        assert!(html.contains(r#"<strong style="color: #1976d2;">2.</strong> second"#));
    }

    #[test]
    fn test_newlines_become_breaks() {
        let html = markdown_to_html("one\n\ntwo\nthree");
        assert!(html.contains("one<br><br>two<br>three"));
    }

    #[test]
    fn test_full_document_round() {
        let markdown = "# Main Document Summary\n\n## Key Points\n\n**Important Topic**: crucial\n*Sub-point*: details\n- Bullet one\n1. First numbered";
        let html = markdown_to_html(markdown);
        assert!(!html.contains("**"));
        assert!(!html.contains("# "));
        assert!(html.contains("<br>"));
    }
}
