//! Icon service for managing different icon themes
//!
//! Icons for modules, files, links and the chrome around them, with emoji,
//! Unicode and ASCII variants.

use crate::entities::{Resource, ResourceKind};
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Course content icons
#[derive(Debug, Clone)]
pub struct ContentIcons {
    pub module: &'static str,
    pub unassigned: &'static str,
    pub file: &'static str,
    pub link: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub outline_title: &'static str,
    pub search: &'static str,
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub active: &'static str,
    pub drag: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub content: ContentIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            content: ContentIcons {
                module: "📚",
                unassigned: "📥",
                file: "📄",
                link: "🔗",
            },
            ui: UiIcons {
                outline_title: "🧭",
                search: "🔍",
                expanded: "🔽",
                collapsed: "▶️",
                active: "👉",
                drag: "✋",
                error: "❌",
                success: "✅",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            content: ContentIcons {
                module: "◆",
                unassigned: "◇",
                file: "▤",
                link: "↗",
            },
            ui: UiIcons {
                outline_title: "≡",
                search: "⌕",
                expanded: "▾",
                collapsed: "▸",
                active: "●",
                drag: "⇅",
                error: "✗",
                success: "✓",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            content: ContentIcons {
                module: "#",
                unassigned: "-",
                file: "f",
                link: "@",
            },
            ui: UiIcons {
                outline_title: "=",
                search: "/",
                expanded: "v",
                collapsed: ">",
                active: "*",
                drag: "~",
                error: "X",
                success: "+",
            },
        }
    }

    #[must_use]
    pub fn module(&self) -> &'static str {
        self.icons().content.module
    }

    #[must_use]
    pub fn unassigned(&self) -> &'static str {
        self.icons().content.unassigned
    }

    #[must_use]
    pub fn file(&self) -> &'static str {
        self.icons().content.file
    }

    #[must_use]
    pub fn link(&self) -> &'static str {
        self.icons().content.link
    }

    /// Icon for a resource by kind
    #[must_use]
    pub fn resource(&self, resource: &Resource) -> &'static str {
        match resource.kind {
            ResourceKind::File => self.file(),
            ResourceKind::Link => self.link(),
        }
    }

    #[must_use]
    pub fn outline_title(&self) -> &'static str {
        self.icons().ui.outline_title
    }

    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().ui.search
    }

    /// Expand/collapse marker
    #[must_use]
    pub fn disclosure(&self, expanded: bool) -> &'static str {
        if expanded {
            self.icons().ui.expanded
        } else {
            self.icons().ui.collapsed
        }
    }

    #[must_use]
    pub fn active(&self) -> &'static str {
        self.icons().ui.active
    }

    #[must_use]
    pub fn drag(&self) -> &'static str {
        self.icons().ui.drag
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }
}
