//! Centralized icon API for the shared primitive set.
//!
//! Icons render as inline SVG strokes so they inherit `currentColor` and
//! need no asset pipeline. Animation (for example the busy spinner) is
//! owned by the site CSS layers keyed off `data-ui-icon`.

use leptos::*;

use crate::class_list;

/// Identifiers for the built-in glyph set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    /// Spinner arc shown while a control is busy.
    Busy,
    /// Right-pointing arrow for forward navigation.
    ArrowRight,
    /// Compass glyph for the control gallery.
    Compass,
    /// Information glyph.
    Info,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Busy => "busy",
            Self::ArrowRight => "arrow-right",
            Self::Compass => "compass",
            Self::Info => "info",
        }
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Busy => &["M21 12a9 9 0 1 1-6.219-8.56"],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::Compass => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Z",
                "m16.24 7.76-2.12 6.36-6.36 2.12 2.12-6.36 6.36-2.12Z",
            ],
            Self::Info => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Z", "M12 16v-4", "M12 8h.01"],
        }
    }
}

/// Icon sizing tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    /// Inline/control-slot icon.
    Sm,
    /// Default icon.
    Md,
    /// Display icon.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Shared inline SVG icon primitive.
pub fn Icon(
    /// Which glyph to render.
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <svg
            class=class_list(["ui-icon"].into_iter().chain(layout_class))
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.paths()
                .iter()
                .map(|segment| view! { <path d=*segment></path> })
                .collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ICONS: [IconName; 4] = [
        IconName::Busy,
        IconName::ArrowRight,
        IconName::Compass,
        IconName::Info,
    ];

    #[test]
    fn every_glyph_carries_path_data() {
        for icon in ALL_ICONS {
            assert!(!icon.paths().is_empty(), "{} has no path data", icon.token());
        }
    }

    #[test]
    fn glyph_tokens_are_unique() {
        for (index, icon) in ALL_ICONS.iter().enumerate() {
            for other in &ALL_ICONS[index + 1..] {
                assert_ne!(icon.token(), other.token());
            }
        }
    }

    #[test]
    fn default_size_is_md() {
        assert_eq!(IconSize::default().token(), "md");
    }
}
