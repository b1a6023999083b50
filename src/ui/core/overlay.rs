//! The single open overlay: add menu, action menu or a dialog.
//!
//! The app component owns one `OverlayManager`. Keys go to the open overlay
//! before anything else; `Esc` or a click outside its last drawn area closes it.

use super::actions::{Action, DialogType, Target};
use super::component::contains;
use crate::constants::ADD_MENU_ITEMS;
use crate::store::CourseStore;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    AddMenu {
        selected: usize,
    },
    ActionMenu {
        target: Target,
        selected: usize,
    },
    Dialog(DialogType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddMenuEntry {
    CreateModule,
    Upload,
    CreateLink,
}

impl AddMenuEntry {
    pub const ALL: [Self; 3] = [Self::CreateModule, Self::Upload, Self::CreateLink];

    pub fn label(self) -> &'static str {
        match self {
            Self::CreateModule => ADD_MENU_ITEMS[0],
            Self::Upload => ADD_MENU_ITEMS[1],
            Self::CreateLink => ADD_MENU_ITEMS[2],
        }
    }

    pub fn action(self) -> Action {
        Action::ShowDialog(match self {
            Self::CreateModule => DialogType::ModuleCreation,
            Self::Upload => DialogType::Upload,
            Self::CreateLink => DialogType::LinkCreation,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionMenuEntry {
    Rename,
    EditLink,
    MoveTo,
    Download,
    Delete,
}

impl ActionMenuEntry {
    /// Entries offered for `target`; empty if it no longer exists.
    pub fn for_target(target: Target, store: &CourseStore) -> Vec<Self> {
        match target {
            Target::Module(id) if store.module(&id).is_some() => vec![Self::Rename, Self::Delete],
            Target::Resource(id) => match store.resource(&id) {
                Some(resource) if resource.is_link() => {
                    vec![Self::Rename, Self::EditLink, Self::MoveTo, Self::Download, Self::Delete]
                }
                Some(_) => vec![Self::Rename, Self::MoveTo, Self::Download, Self::Delete],
                None => Vec::new(),
            },
            Target::Module(_) => Vec::new(),
        }
    }

    pub fn label(self, target: Target, store: &CourseStore) -> &'static str {
        match self {
            Self::Rename => "Rename",
            Self::EditLink => "Edit link",
            Self::MoveTo => "Move to...",
            Self::Download => match target {
                Target::Resource(id) if store.resource(&id).is_some_and(|r| r.is_link()) => "Open",
                _ => "Download",
            },
            Self::Delete => "Delete",
        }
    }

    pub fn action(self, target: Target) -> Action {
        match self {
            Self::Rename => Action::ShowDialog(DialogType::Rename(target)),
            Self::EditLink => Action::ShowDialog(DialogType::LinkEdit { id: target.id() }),
            Self::MoveTo => Action::ShowDialog(DialogType::MoveTo { id: target.id() }),
            Self::Download => Action::DownloadResource(target.id()),
            Self::Delete => Action::ShowDialog(DialogType::DeleteConfirmation(target)),
        }
    }
}

#[derive(Debug, Default)]
pub struct OverlayManager {
    current: Overlay,
    area: Option<Rect>,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Overlay {
        &self.current
    }

    pub fn is_open(&self) -> bool {
        self.current != Overlay::None
    }

    pub fn dialog(&self) -> Option<&DialogType> {
        match &self.current {
            Overlay::Dialog(dialog) => Some(dialog),
            _ => None,
        }
    }

    /// Replace whatever is open.
    pub fn open(&mut self, overlay: Overlay) {
        log::debug!("Overlay: {:?} -> {:?}", self.current, overlay);
        self.current = overlay;
        self.area = None;
    }

    /// Close the open overlay; `false` if nothing was open.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        log::debug!("Overlay: closing {:?}", self.current);
        self.current = Overlay::None;
        self.area = None;
        true
    }

    /// Remember where the overlay was drawn, for outside-click detection.
    pub fn set_area(&mut self, area: Rect) {
        self.area = Some(area);
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Close on a press outside the drawn area. Returns whether it closed.
    pub fn click_outside(&mut self, column: u16, row: u16) -> bool {
        match self.area {
            Some(area) if contains(area, column, row) => false,
            _ => self.close(),
        }
    }

    fn entry_count(&self, store: &CourseStore) -> usize {
        match &self.current {
            Overlay::AddMenu { .. } => AddMenuEntry::ALL.len(),
            Overlay::ActionMenu { target, .. } => ActionMenuEntry::for_target(*target, store).len(),
            _ => 0,
        }
    }

    fn select(&mut self, index: usize) {
        match &mut self.current {
            Overlay::AddMenu { selected } | Overlay::ActionMenu { selected, .. } => *selected = index,
            _ => {}
        }
    }

    /// Action for the currently highlighted menu entry.
    pub fn choose(&mut self, store: &CourseStore) -> Action {
        let action = match &self.current {
            Overlay::AddMenu { selected } => AddMenuEntry::ALL.get(*selected).map(|entry| entry.action()),
            Overlay::ActionMenu { target, selected } => ActionMenuEntry::for_target(*target, store)
                .get(*selected)
                .map(|entry| entry.action(*target)),
            _ => None,
        };
        match action {
            Some(action) => {
                // Dialog-opening entries replace the menu; the rest just close it
                if !matches!(action, Action::ShowDialog(_)) {
                    self.close();
                }
                action
            }
            None => Action::None,
        }
    }

    /// Keys for an open menu. Dialog keys are handled by the dialog component.
    pub fn handle_menu_key(&mut self, key: KeyEvent, store: &CourseStore) -> Action {
        let count = self.entry_count(store);
        let selected = match &self.current {
            Overlay::AddMenu { selected } | Overlay::ActionMenu { selected, .. } => *selected,
            _ => return Action::None,
        };
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::CloseOverlay,
            KeyCode::Down | KeyCode::Char('j') if count > 0 => {
                self.select((selected + 1) % count);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') if count > 0 => {
                self.select((selected + count - 1) % count);
                Action::None
            }
            KeyCode::Enter => self.choose(store),
            _ => Action::None,
        }
    }

    /// Click on menu row `row` (screen coordinates). Inside the border only.
    pub fn click_menu(&mut self, row: u16, store: &CourseStore) -> Action {
        let Some(area) = self.area else {
            return Action::None;
        };
        if row <= area.y || row >= area.y + area.height.saturating_sub(1) {
            return Action::None;
        }
        let index = (row - area.y - 1) as usize;
        if index >= self.entry_count(store) {
            return Action::None;
        }
        self.select(index);
        self.choose(store)
    }
}
