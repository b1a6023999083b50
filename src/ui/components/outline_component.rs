//! Outline sidebar for the course.
//!
//! Lists every module in position order with its item count. The module the
//! course view has scrolled to is marked active; choosing an entry scrolls the
//! course view to that module's header.

use crate::constants::{EMPTY_OUTLINE, HEADER_OUTLINE};
use crate::entities::ItemId;
use crate::icons::IconService;
use crate::store::CourseStore;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::component::contains;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// One outline row: a module snapshot taken from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub id: ItemId,
    pub name: String,
    pub item_count: usize,
}

pub struct OutlineComponent {
    pub icons: IconService,
    entries: Vec<OutlineEntry>,
    active: Option<ItemId>,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
    area: Option<Rect>,
}

impl Default for OutlineComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineComponent {
    pub fn new() -> Self {
        Self {
            icons: IconService::default(),
            entries: Vec::new(),
            active: None,
            list_state: ListState::default(),
            scrollbar_helper: ScrollbarHelper::new(),
            area: None,
        }
    }

    /// Rebuild entries from the store, keeping the selection on the same module.
    pub fn set_data(&mut self, store: &CourseStore) {
        let selected_id = self.selected_id();
        self.entries = store
            .modules()
            .into_iter()
            .map(|m| OutlineEntry {
                id: m.id,
                name: m.name.clone(),
                item_count: store.module_item_count(&m.id),
            })
            .collect();

        let index = selected_id
            .and_then(|id| self.index_of(&id))
            .or_else(|| (!self.entries.is_empty()).then_some(0));
        self.list_state.select(index);
    }

    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn set_active(&mut self, active: Option<ItemId>) {
        self.active = active;
    }

    pub fn active(&self) -> Option<ItemId> {
        self.active
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.list_state.selected().and_then(|i| self.entries.get(i)).map(|e| e.id)
    }

    fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == *id)
    }

    /// Move the selection one entry (wrapping) and scroll to the new module.
    fn step(&mut self, forward: bool) -> Action {
        let len = self.entries.len();
        if len == 0 {
            return Action::None;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.list_state.select(Some(next));
        Action::ScrollToModule(self.entries[next].id)
    }

    /// Click to jump, wheel to step. Coordinates outside the outline are ignored.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let Some(area) = self.area else {
            return Action::None;
        };
        if !contains(area, mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row > area.y && mouse.row < area.y + area.height - 1 {
                    let clicked_index = self.list_state.offset() + (mouse.row - area.y - 1) as usize;
                    match self.entries.get(clicked_index) {
                        Some(entry) => {
                            let id = entry.id;
                            self.list_state.select(Some(clicked_index));
                            Action::ScrollToModule(id)
                        }
                        None => Action::None,
                    }
                } else {
                    Action::None
                }
            }
            MouseEventKind::ScrollUp => self.step(false),
            MouseEventKind::ScrollDown => self.step(true),
            _ => Action::None,
        }
    }
}

impl Component for OutlineComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('J') => self.step(true),
            KeyCode::Char('K') => self.step(false),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::ScrollToModule(id) = &action {
            if let Some(index) = self.index_of(id) {
                self.list_state.select(Some(index));
            }
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = Some(rect);
        let title = format!(" {} {} ", self.icons.outline_title(), HEADER_OUTLINE);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(Color::DarkGray));

        if self.entries.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(EMPTY_OUTLINE, Style::default().fg(Color::DarkGray))))
                .block(block);
            f.render_widget(empty, rect);
            return;
        }

        let name_width = rect.width.saturating_sub(10) as usize;
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let is_active = self.active == Some(entry.id);
                let marker = if is_active { self.icons.active() } else { " " };
                let name: String = entry.name.chars().take(name_width).collect();
                let name_style = if is_active {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", marker), Style::default().fg(Color::Cyan)),
                    Span::styled(name, name_style),
                    Span::styled(format!(" ({})", entry.item_count), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let total_items = items.len();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_items);
        let available_height = rect.height.saturating_sub(2) as usize;
        let position = self.list_state.selected().unwrap_or(0);
        self.scrollbar_helper
            .update_state(total_items, position, Some(available_height));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .style(Style::default().fg(Color::White));

        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn shift_j_wraps_and_scrolls_to_module() {
        let mut store = CourseStore::new();
        let a = store.add_module("A");
        let b = store.add_module("B");
        let mut outline = OutlineComponent::new();
        outline.set_data(&store);

        let down = KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT);
        assert_eq!(outline.handle_key_events(down), Action::ScrollToModule(b));
        assert_eq!(outline.handle_key_events(down), Action::ScrollToModule(a));
    }

    #[test]
    fn selection_follows_module_after_reorder() {
        let mut store = CourseStore::new();
        store.add_module("A");
        let b = store.add_module("B");
        let mut outline = OutlineComponent::new();
        outline.set_data(&store);
        outline.update(Action::ScrollToModule(b));

        store.reorder_modules(1, 0);
        outline.set_data(&store);
        assert_eq!(outline.selected_id(), Some(b));
        assert_eq!(outline.entries()[0].id, b);
    }
}
