//! Theme support for the landing page.

use dioxus::prelude::*;

/// The site colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Get the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other scheme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Global theme signal.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(Theme::default);

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Header button switching between light and dark.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = *CURRENT_THEME.read();
    let label = match theme {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            onclick: move |_| {
                let next = CURRENT_THEME.read().toggled();
                *CURRENT_THEME.write() = next;
            },
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.css_value(), "dark");
    }
}
