//! Main course pane: search bar, unassigned items, then every module with its
//! resources.
//!
//! The view is flattened into [`Row`]s rebuilt from the store after every
//! event. Rows are addressed by index; module header rows double as the
//! scroll-spy anchors, and each row knows which drop zone it represents for
//! a drag in progress.

use crate::constants::{EMPTY_STATE_HINT, EMPTY_STATE_TITLE, HEADER_UNASSIGNED};
use crate::entities::{ItemId, ResourceKind};
use crate::forms::TextInput;
use crate::icons::IconService;
use crate::store::{CourseStore, SearchFilter};
use crate::ui::components::dialog_component::edit_text;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::component::contains;
use crate::ui::core::{Action, Component, DialogType, DragPayload, DropTarget, Target};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};
use std::collections::HashSet;

/// One line of the flattened course view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    UnassignedHeader,
    /// `index` is the resource's position inside `container`.
    Resource {
        id: ItemId,
        container: Option<ItemId>,
        index: usize,
    },
    Module {
        id: ItemId,
        index: usize,
        expanded: bool,
    },
    /// Placeholder under an expanded module with nothing (visible) in it.
    EmptyModule(ItemId),
    Spacer,
}

impl Row {
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::Module { id, .. } => Some(Target::Module(*id)),
            Self::Resource { id, .. } => Some(Target::Resource(*id)),
            _ => None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.target().is_some()
    }

    /// The drop zone this row stands for while `payload` is dragged over it,
    /// with the in-partition index when the row is a reorder slot.
    pub fn drop_zone(&self, payload: &DragPayload) -> Option<(DropTarget, Option<usize>)> {
        match (payload, self) {
            (DragPayload::Module { .. }, Self::Module { index, .. }) => Some((DropTarget::ModuleList, Some(*index))),
            (DragPayload::Module { .. }, _) => None,
            (DragPayload::Resource { .. }, Self::Resource { container, index, .. }) => {
                Some((DropTarget::Container(*container), Some(*index)))
            }
            (DragPayload::Resource { .. }, Self::Module { id, .. } | Self::EmptyModule(id)) => {
                Some((DropTarget::Container(Some(*id)), None))
            }
            (DragPayload::Resource { .. }, Self::UnassignedHeader) => Some((DropTarget::Container(None), None)),
            (DragPayload::Resource { .. }, Self::Spacer) => None,
        }
    }
}

/// Build the rows for `store` under `filter`.
///
/// While a search is active, modules whose name does not match are hidden even
/// when some of their resources match; resources are filtered on their own.
pub fn build_rows<F>(store: &CourseStore, filter: &SearchFilter, is_expanded: F) -> Vec<Row>
where
    F: Fn(&ItemId) -> bool,
{
    let mut rows = Vec::new();

    let unassigned = filter.filter_resources(&store.resources_in(None));
    if !unassigned.is_empty() {
        rows.push(Row::UnassignedHeader);
        rows.extend(unassigned.iter().map(|r| Row::Resource {
            id: r.id,
            container: None,
            index: r.position,
        }));
    }

    for module in filter.filter_modules(&store.modules()) {
        if !rows.is_empty() {
            rows.push(Row::Spacer);
        }
        let expanded = is_expanded(&module.id);
        rows.push(Row::Module {
            id: module.id,
            index: module.position,
            expanded,
        });
        if !expanded {
            continue;
        }
        let resources = filter.filter_resources(&store.resources_in(Some(module.id)));
        if resources.is_empty() {
            rows.push(Row::EmptyModule(module.id));
        }
        rows.extend(resources.iter().map(|r| Row::Resource {
            id: r.id,
            container: Some(module.id),
            index: r.position,
        }));
    }
    rows
}

pub struct CourseViewComponent {
    pub icons: IconService,
    pub title: String,
    rows: Vec<Row>,
    texts: Vec<RowText>,
    has_content: bool,
    selected: Option<Target>,
    offset: usize,
    viewport: usize,
    expanded_by_default: bool,
    toggled: HashSet<ItemId>,
    search: TextInput,
    search_focused: bool,
    dragging: Option<ItemId>,
    drop_target: Option<DropTarget>,
    rows_area: Option<Rect>,
    search_area: Option<Rect>,
    scrollbar_helper: ScrollbarHelper,
}

impl Default for CourseViewComponent {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_COURSE_TITLE, true)
    }
}

impl CourseViewComponent {
    pub fn new(title: &str, expanded_by_default: bool) -> Self {
        Self {
            icons: IconService::default(),
            title: title.to_string(),
            rows: Vec::new(),
            texts: Vec::new(),
            has_content: false,
            selected: None,
            offset: 0,
            viewport: 0,
            expanded_by_default,
            toggled: HashSet::new(),
            search: TextInput::new(),
            search_focused: false,
            dragging: None,
            drop_target: None,
            rows_area: None,
            search_area: None,
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    // ---- Data ----

    /// Rebuild rows from the store. The selection stays on the same item when
    /// it is still visible, otherwise it falls back to the nearest selectable row.
    pub fn refresh(&mut self, store: &CourseStore) {
        let previous_index = self.selected_index();
        let filter = self.filter();
        let expanded_by_default = self.expanded_by_default;
        let toggled = &self.toggled;
        self.rows = build_rows(store, &filter, |id| expanded_by_default != toggled.contains(id));
        self.texts = self.rows.iter().map(|row| RowText::for_row(row, store)).collect();
        self.has_content = store.has_content();

        if self.selected_index().is_none() {
            self.selected = previous_index
                .and_then(|index| self.nearest_selectable(index))
                .or_else(|| self.nearest_selectable(0))
                .and_then(|index| self.rows[index].target());
        }
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn filter(&self) -> SearchFilter {
        SearchFilter::new(self.search.value().trim())
    }

    pub fn search_term(&self) -> &str {
        self.search.value()
    }

    pub fn is_searching(&self) -> bool {
        self.search_focused
    }

    pub fn is_expanded(&self, id: &ItemId) -> bool {
        self.expanded_by_default != self.toggled.contains(id)
    }

    pub fn toggle_module(&mut self, id: ItemId) {
        if !self.toggled.remove(&id) {
            self.toggled.insert(id);
        }
    }

    /// Module header rows in document order, for scroll-spy.
    pub fn anchors(&self) -> Vec<(ItemId, usize)> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(row, r)| match r {
                Row::Module { id, .. } => Some((*id, row)),
                _ => None,
            })
            .collect()
    }

    // ---- Selection ----

    pub fn selected(&self) -> Option<Target> {
        self.selected
    }

    pub fn selected_index(&self) -> Option<usize> {
        let target = self.selected?;
        self.rows.iter().position(|r| r.target() == Some(target))
    }

    pub fn select_index(&mut self, index: usize) {
        if let Some(target) = self.rows.get(index).and_then(|r| r.target()) {
            self.selected = Some(target);
            self.ensure_visible(index);
        }
    }

    fn nearest_selectable(&self, index: usize) -> Option<usize> {
        let index = index.min(self.rows.len().checked_sub(1)?);
        (index..self.rows.len())
            .find(|&i| self.rows[i].is_selectable())
            .or_else(|| (0..index).rev().find(|&i| self.rows[i].is_selectable()))
    }

    fn select_next(&mut self) {
        let start = self.selected_index().map_or(0, |i| i + 1);
        if let Some(index) = (start..self.rows.len()).find(|&i| self.rows[i].is_selectable()) {
            self.select_index(index);
        }
    }

    fn select_previous(&mut self) {
        let end = self.selected_index().unwrap_or(0);
        if let Some(index) = (0..end).rev().find(|&i| self.rows[i].is_selectable()) {
            self.select_index(index);
        }
    }

    fn select_first(&mut self) {
        if let Some(index) = self.nearest_selectable(0) {
            self.select_index(index);
        }
        self.offset = 0;
    }

    fn select_last(&mut self) {
        if let Some(index) = (0..self.rows.len()).rev().find(|&i| self.rows[i].is_selectable()) {
            self.select_index(index);
        }
    }

    // ---- Scrolling ----

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    fn max_offset(&self) -> usize {
        self.rows.len().saturating_sub(self.viewport.max(1))
    }

    fn ensure_visible(&mut self, index: usize) {
        if index < self.offset {
            self.offset = index;
        } else if self.viewport > 0 && index >= self.offset + self.viewport {
            self.offset = index + 1 - self.viewport;
        }
    }

    /// Scroll the viewport, pulling the selection back into view if it fell out.
    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta).min(self.max_offset());
        let visible = self.offset..self.offset + self.viewport.max(1);
        if self.selected_index().is_some_and(|i| visible.contains(&i)) {
            return;
        }
        if let Some(index) = visible.clone().find(|&i| self.rows.get(i).is_some_and(|r| r.is_selectable())) {
            self.selected = self.rows[index].target();
        }
    }

    /// Scroll-into-view for an outline jump: the module header goes to the top.
    pub fn scroll_to_module(&mut self, id: &ItemId) -> bool {
        let Some(row) = self.rows.iter().position(|r| matches!(r, Row::Module { id: m, .. } if m == id)) else {
            return false;
        };
        self.selected = self.rows[row].target();
        self.offset = row.min(self.max_offset());
        true
    }

    fn half_page(&self) -> isize {
        (self.viewport / 2).max(1) as isize
    }

    fn page(&self) -> isize {
        self.viewport.max(1) as isize
    }

    // ---- Drag feedback ----

    pub fn set_drag(&mut self, dragging: Option<ItemId>, target: Option<DropTarget>) {
        self.dragging = dragging;
        self.drop_target = target;
    }

    // ---- Pointer ----

    /// Row index under a terminal cell.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.rows_area?;
        if !contains(area, column, row) {
            return None;
        }
        let index = self.offset + (row - area.y) as usize;
        (index < self.rows.len()).then_some(index)
    }

    pub fn is_over_search(&self, column: u16, row: u16) -> bool {
        self.search_area.is_some_and(|area| contains(area, column, row))
    }

    pub fn focus_search(&mut self) {
        self.search_focused = true;
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.search.clear();
                self.search_focused = false;
            }
            KeyCode::Enter | KeyCode::Down | KeyCode::Tab => self.search_focused = false,
            _ => {
                if edit_text(&mut self.search, key) {
                    self.offset = 0;
                }
            }
        }
        Action::None
    }

    // ---- Rendering ----

    fn render_row(&self, row: &Row, text: &RowText, width: usize) -> Line<'static> {
        let selected = row.target().is_some() && row.target() == self.selected;
        let base = if selected {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let line = match row {
            Row::UnassignedHeader => Line::from(vec![Span::styled(
                format!("{} {}", self.icons.unassigned(), HEADER_UNASSIGNED),
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )]),
            Row::Module { id, expanded, .. } => {
                let aimed = self.drop_target == Some(DropTarget::Container(Some(*id)));
                let color = if self.dragging == Some(*id) {
                    Color::Yellow
                } else if aimed {
                    Color::Magenta
                } else {
                    Color::Cyan
                };
                Line::from(vec![
                    Span::styled(
                        format!("{} {} ", self.icons.disclosure(*expanded), self.icons.module()),
                        Style::default().fg(color),
                    ),
                    Span::styled(text.name.clone(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", text.detail), Style::default().fg(Color::DarkGray)),
                ])
            }
            Row::Resource { id, .. } => {
                let name_style = if self.dragging == Some(*id) {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let marker = if self.dragging == Some(*id) { self.icons.drag() } else { " " };
                let icon = match text.kind {
                    Some(ResourceKind::Link) => self.icons.link(),
                    _ => self.icons.file(),
                };
                Line::from(vec![
                    Span::styled(format!("  {} {} ", marker, icon), Style::default().fg(Color::Green)),
                    Span::styled(text.name.clone(), name_style),
                    Span::styled(format!("  {}", text.detail), Style::default().fg(Color::DarkGray)),
                ])
            }
            Row::EmptyModule(id) => {
                let text = if self.filter().is_active() {
                    "    No matching items"
                } else {
                    "    No items yet"
                };
                let color = if self.drop_target == Some(DropTarget::Container(Some(*id))) {
                    Color::Magenta
                } else {
                    Color::DarkGray
                };
                Line::from(Span::styled(text, Style::default().fg(color).add_modifier(Modifier::ITALIC)))
            }
            Row::Spacer => Line::from(""),
        };

        let line = line.style(base);
        truncate_line(line, width)
    }

    fn render_search(&self, f: &mut Frame, area: Rect) {
        let border_color = if self.search_focused { Color::White } else { Color::DarkGray };
        let content = if self.search_focused {
            let value = self.search.value();
            let split = value
                .char_indices()
                .nth(self.search.cursor())
                .map(|(offset, _)| offset)
                .unwrap_or(value.len());
            let (before, after) = value.split_at(split);
            Line::from(vec![
                Span::raw(before.to_string()),
                Span::styled("█", Style::default().fg(Color::White)),
                Span::raw(after.to_string()),
            ])
        } else if self.search.value().is_empty() {
            Line::from(Span::styled(
                "Search modules and resources (/)",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(self.search.value().to_string())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} Search ", self.icons.search()))
            .border_style(Style::default().fg(border_color));
        f.render_widget(Paragraph::new(content).block(block), area);
    }

    fn render_view(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(rect);
        self.search_area = Some(chunks[0]);
        self.render_search(f, chunks[0]);

        let body = chunks[1];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray));

        if !self.has_content {
            self.rows_area = None;
            let inner = block.inner(body);
            f.render_widget(block, body);
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    EMPTY_STATE_TITLE,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(EMPTY_STATE_HINT, Style::default().fg(Color::DarkGray))),
            ])
            .alignment(Alignment::Center);
            f.render_widget(empty, inner);
            return;
        }

        let (content_area, scrollbar_area) = ScrollbarHelper::calculate_areas(body, self.rows.len());
        let inner = block.inner(content_area);
        f.render_widget(block, body);

        self.viewport = inner.height as usize;
        self.rows_area = Some(inner);
        self.offset = self.offset.min(self.max_offset());
        self.scrollbar_helper
            .update_state(self.rows.len(), self.offset, Some(self.viewport));

        let width = inner.width as usize;
        let lines: Vec<Line> = self
            .rows
            .iter()
            .zip(&self.texts)
            .skip(self.offset)
            .take(self.viewport)
            .map(|(row, text)| self.render_row(row, text, width))
            .collect();

        if lines.is_empty() && self.filter().is_active() {
            let none = Paragraph::new(Span::styled(
                format!("Nothing matches '{}'", self.search.value().trim()),
                Style::default().fg(Color::DarkGray),
            ));
            f.render_widget(none, inner);
        } else {
            f.render_widget(Paragraph::new(lines), inner);
        }
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}

/// Text for one row, captured from the store when rows are rebuilt.
#[derive(Debug, Clone, Default)]
struct RowText {
    kind: Option<ResourceKind>,
    name: String,
    detail: String,
}

impl RowText {
    fn for_row(row: &Row, store: &CourseStore) -> Self {
        match row {
            Row::Module { id, .. } => {
                let count = store.module_item_count(id);
                Self {
                    kind: None,
                    name: store.module(id).map(|m| m.name.clone()).unwrap_or_default(),
                    detail: format!("{} item{}", count, if count == 1 { "" } else { "s" }),
                }
            }
            Row::Resource { id, .. } => store
                .resource(id)
                .map(|resource| Self {
                    kind: Some(resource.kind),
                    name: resource.name.clone(),
                    detail: if resource.is_link() {
                        resource.url.clone()
                    } else {
                        resource.kind_label()
                    },
                })
                .unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

/// Cut a line down to `width` display cells, keeping span styles.
fn truncate_line(line: Line<'static>, width: usize) -> Line<'static> {
    if line.width() <= width {
        return line;
    }
    let style = line.style;
    let mut remaining = width;
    let mut spans = Vec::new();
    for span in line.spans {
        if remaining == 0 {
            break;
        }
        let text: String = span.content.chars().take(remaining).collect();
        remaining = remaining.saturating_sub(text.chars().count());
        spans.push(Span::styled(text, span.style));
    }
    Line::from(spans).style(style)
}

impl Component for CourseViewComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.search_focused {
            return self.handle_search_key(key);
        }

        let target = self.selected;
        match key.code {
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_by(self.half_page());
                Action::None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_by(-self.half_page());
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_by(self.page());
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_by(-self.page());
                Action::None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.select_first();
                Action::None
            }
            KeyCode::End => {
                self.select_last();
                Action::None
            }
            KeyCode::Char('/') => {
                self.focus_search();
                Action::None
            }
            KeyCode::Char(' ') => match target {
                Some(Target::Module(id)) => Action::ToggleModule(id),
                _ => Action::None,
            },
            KeyCode::Enter => target.map_or(Action::None, Action::OpenActionMenu),
            KeyCode::Char('r') => target.map_or(Action::None, |t| Action::ShowDialog(DialogType::Rename(t))),
            KeyCode::Char('e') => match target {
                Some(Target::Resource(id)) => Action::ShowDialog(DialogType::LinkEdit { id }),
                _ => Action::None,
            },
            KeyCode::Char('s') => match target {
                Some(Target::Resource(id)) => Action::DownloadResource(id),
                _ => Action::None,
            },
            KeyCode::Char('d') => target.map_or(Action::None, |t| Action::ShowDialog(DialogType::DeleteConfirmation(t))),
            KeyCode::Char('m') => target.map_or(Action::None, Action::StartDrag),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match &action {
            Action::ToggleModule(id) => self.toggle_module(*id),
            Action::ScrollToModule(id) => {
                self.scroll_to_module(id);
            }
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.render_view(f, rect);
    }
}
