//! Light/dark theme state.
//!
//! [`ThemeController`] owns the dark-mode flag and mirrors it onto a
//! [`DocumentRoot`] as the `dark` class every time it changes. Nothing is
//! persisted; each mount starts from the default.

use crate::domain::ports::DocumentRoot;
use std::collections::BTreeSet;

pub const DARK_MARKER: &str = "dark";

/// Class list of the `<html>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootClassList {
    classes: BTreeSet<String>,
}

impl RootClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Space-separated, ready for a `class` attribute.
    pub fn to_attribute(&self) -> String {
        self.classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl DocumentRoot for RootClassList {
    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

#[derive(Debug)]
pub struct ThemeController<R: DocumentRoot> {
    dark: bool,
    root: R,
}

impl<R: DocumentRoot> ThemeController<R> {
    /// Mount with dark mode enabled.
    pub fn mount(root: R) -> Self {
        Self::mount_with(root, true)
    }

    pub fn mount_with(root: R, dark: bool) -> Self {
        let mut controller = Self { dark, root };
        controller.sync_root();
        controller
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn set_dark(&mut self, dark: bool) {
        if self.dark != dark {
            tracing::debug!("Theme switched to {}", if dark { "dark" } else { "light" });
        }
        self.dark = dark;
        self.sync_root();
    }

    pub fn toggle(&mut self) {
        self.set_dark(!self.dark);
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn into_root(self) -> R {
        self.root
    }

    fn sync_root(&mut self) {
        if self.dark {
            self.root.add_class(DARK_MARKER);
        } else {
            self.root.remove_class(DARK_MARKER);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mount_marks_root_dark() {
        let theme = ThemeController::mount(RootClassList::new());
        assert!(theme.is_dark());
        assert!(theme.root().has_class(DARK_MARKER));
        assert_eq!(theme.root().to_attribute(), "dark");
    }

    #[test]
    fn test_toggle_sequence() {
        let mut theme = ThemeController::mount(RootClassList::new());

        theme.toggle();
        assert!(!theme.is_dark());
        assert!(!theme.root().has_class(DARK_MARKER));

        theme.toggle();
        assert!(theme.is_dark());
        assert!(theme.root().has_class(DARK_MARKER));
    }

    #[test]
    fn test_double_toggle_restores_marker_from_either_start() {
        for start in [true, false] {
            let mut theme = ThemeController::mount_with(RootClassList::new(), start);
            let before = theme.root().has_class(DARK_MARKER);
            theme.toggle();
            theme.toggle();
            assert_eq!(theme.root().has_class(DARK_MARKER), before);
        }
    }

    #[test]
    fn test_marker_leaves_other_classes_alone() {
        let mut root = RootClassList::new();
        root.add_class("scroll-smooth");

        let mut theme = ThemeController::mount(root);
        assert_eq!(theme.root().to_attribute(), "dark scroll-smooth");

        theme.set_dark(false);
        assert_eq!(theme.root().to_attribute(), "scroll-smooth");
    }

    #[test]
    fn test_set_same_value_is_stable() {
        let mut theme = ThemeController::mount(RootClassList::new());
        theme.set_dark(true);
        theme.set_dark(true);
        assert_eq!(theme.root().to_attribute(), "dark");
    }
}
