use chrono::{Datelike, Local};

pub fn current_year() -> i32 {
    Local::now().year()
}

// swap the first occurrence of the placeholder year for the given one
pub fn substitute_year(text: &str, token: &str, year: i32) -> String {
    if token.is_empty() {
        return text.to_owned();
    }
    text.replacen(token, &year.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_first_token_only() {
        assert_eq!(
            substitute_year("© 2026 Portfolio. 2026", "2026", 2031),
            "© 2031 Portfolio. 2026"
        );
    }

    #[test]
    fn missing_token_is_untouched() {
        assert_eq!(substitute_year("© Portfolio", "2026", 2031), "© Portfolio");
        assert_eq!(substitute_year("© 2026", "", 2031), "© 2026");
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
