//! Color tokens from the page's CSS custom properties

use game_core::Theme;
use web_sys::{console, Document, Window};

/// Resolve the theme from `:root` custom properties, falling back to the
/// built-in colors when the stylesheet does not define them.
pub fn load_theme(window: &Window, document: &Document) -> Theme {
    let style = document
        .document_element()
        .and_then(|root| window.get_computed_style(&root).ok().flatten());

    match style {
        Some(style) => Theme::resolve(|token| style.get_property_value(token).ok()),
        None => {
            console::warn_1(&"theme: no computed style, using defaults".into());
            Theme::default()
        }
    }
}
