use constcat::concat;

mod components;
mod variables;

pub use components::BASE_COMPONENTS;
pub use variables::CSS_VARIABLES;

pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Application-specific styles */
.app-header {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.greeting {
  color: var(--text-secondary);
}
"#
);

// photo grid and the full-size overlay
pub const PHOTO_GRID: &str = r#"
.photo-grid {
  margin-top: var(--space-4);
}

.photo-tile {
  display: inline-block;
  padding-right: var(--thumbnail-gap);
  cursor: pointer;
}

.photo-tile img {
  display: block;
}

.lightbox {
  position: fixed;
  width: 100%;
  height: 100%;
  top: 0;
  left: 0;
  right: 0;
  bottom: 0;
  margin: auto;
  background-color: var(--overlay);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 50;
}

.lightbox img {
  max-width: 95%;
  max-height: 95%;
  box-shadow: var(--shadow-lg);
}
"#;
