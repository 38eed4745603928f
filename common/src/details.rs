// section keywords that get emphasized in project details, with the css
// color variable each one uses
const EMPHASIS: [(&str, &str); 6] = [
    ("痛點", "--color-primary"),
    ("解決方案", "--color-secondary"),
    ("成效", "--color-secondary"),
    ("技術架構", "--color-secondary"),
    ("功能模組", "--color-secondary"),
    ("流程", "--color-secondary"),
];

const BULLETS: [&str; 2] = ["•", "✓"];

// cosmetic markup for the free-text details block
//
// this is plain substring replacement, anything it does not recognize is
// passed through unchanged
pub fn format_details(details: &str) -> String {
    if details.is_empty() {
        return String::new();
    }

    let mut html = details.to_owned();
    for (word, color) in EMPHASIS {
        html = html.replace(
            word,
            &format!(r#"<strong style="color: var({color});">{word}</strong>"#),
        );
    }
    for glyph in BULLETS {
        html = html.replace(glyph, &format!("  {glyph}"));
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_details() {
        assert_eq!(format_details(""), "");
    }

    #[test]
    fn keywords_are_emphasized() {
        let html = format_details("痛點：手動整理\n解決方案：自動化");
        assert_eq!(
            html,
            "<strong style=\"color: var(--color-primary);\">痛點</strong>：手動整理\n\
             <strong style=\"color: var(--color-secondary);\">解決方案</strong>：自動化"
        );
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let html = format_details("流程 A / 流程 B");
        assert_eq!(html.matches("<strong").count(), 2);
    }

    #[test]
    fn bullets_are_indented() {
        assert_eq!(format_details("• one\n✓ two"), "  • one\n  ✓ two");
    }

    #[test]
    fn plain_text_passes_through() {
        let text = "Nothing special here <b>ok</b>";
        assert_eq!(format_details(text), text);
    }
}
