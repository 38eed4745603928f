use constcat::concat;

mod components;
mod home;
mod variables;

use components::BASE_COMPONENTS;
use home::HOME_STYLES;
use variables::CSS_VARIABLES;

// everything the page needs, in cascade order
pub const SITE_STYLES: &str = concat!(
    CSS_VARIABLES,
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-padding-top: var(--header-height);
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans TC', sans-serif;
  color: var(--color-text);
  background-color: var(--color-bg);
  line-height: 1.6;
}

a {
  color: var(--color-secondary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    BASE_COMPONENTS,
    HOME_STYLES
);
