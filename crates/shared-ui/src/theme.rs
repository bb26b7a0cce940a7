use dioxus::prelude::*;

/// localStorage key the selected mode is persisted under.
pub const THEME_STORAGE_KEY: &str = "eclinic-theme";

/// Light or dark portal theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Value stored in localStorage and written to `data-theme`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Parse a stored value, falling back to dark.
    pub fn from_key(s: &str) -> Self {
        match s.trim() {
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Toast text shown after switching to this mode.
    pub fn toggle_message(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark Mode Activated",
            ThemeMode::Light => "Light Mode Activated",
        }
    }
}

/// Shared theme state provided as context by [`ThemeSeed`].
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(*self.is_dark.read())
    }

    /// Flip the mode, apply it to the document and return the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.mode().toggled();
        self.is_dark.set(next == ThemeMode::Dark);
        set_theme(next);
        next
    }
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
}

/// Seed the theme on application startup.
///
/// Provides [`ThemeState`], then reads the persisted mode from localStorage
/// and applies it to the document root. Render once in the top-level App.
#[component]
pub fn ThemeSeed() -> Element {
    let mut is_dark = use_signal(|| true);
    use_context_provider(|| ThemeState { is_dark });

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(&format!(
                r#"
                var theme = localStorage.getItem('{THEME_STORAGE_KEY}') || 'dark';
                document.documentElement.setAttribute('data-theme', theme);
                dioxus.send(theme);
                "#,
            ));
            if let Ok(stored) = eval.recv::<String>().await {
                is_dark.set(ThemeMode::from_key(&stored) == ThemeMode::Dark);
            }
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./theme.css") }
    }
}

/// Persist the mode and apply it to the document.
pub fn set_theme(mode: ThemeMode) {
    let theme = mode.as_str();
    document::eval(&format!(
        r#"
        localStorage.setItem('{THEME_STORAGE_KEY}', '{theme}');
        document.documentElement.setAttribute('data-theme', '{theme}');
        "#,
    ));
}
