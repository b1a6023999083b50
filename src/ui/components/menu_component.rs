//! Popup menus: the add menu and the per-item action menu.
//!
//! Menus are drawn from the overlay state; selection and choosing live in the
//! overlay owner. Each render returns the drawn area so outside clicks and
//! row clicks can be resolved against it.

use crate::icons::IconService;
use crate::store::CourseStore;
use crate::ui::core::{ActionMenuEntry, AddMenuEntry, Target};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

const MENU_WIDTH_PERCENT: u16 = 30;

fn render_menu(f: &mut Frame, area: Rect, title: String, labels: Vec<String>, selected: usize) -> Rect {
    // One line per entry plus the border
    let height = (labels.len() as u16 + 2).min(area.height);
    let menu_area = LayoutManager::centered_rect_lines(MENU_WIDTH_PERCENT, height, area);
    f.render_widget(Clear, menu_area);

    let items: Vec<ListItem> = labels
        .into_iter()
        .map(|label| ListItem::new(Line::from(Span::raw(format!(" {}", label)))))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title)
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(Color::White));

    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_stateful_widget(list, menu_area, &mut state);
    menu_area
}

pub fn render_add_menu(f: &mut Frame, area: Rect, icons: &IconService, selected: usize) -> Rect {
    let labels = AddMenuEntry::ALL
        .iter()
        .map(|entry| {
            let icon = match entry {
                AddMenuEntry::CreateModule => icons.module(),
                AddMenuEntry::Upload => icons.file(),
                AddMenuEntry::CreateLink => icons.link(),
            };
            format!("{} {}", icon, entry.label())
        })
        .collect();
    render_menu(f, area, " Add ".to_string(), labels, selected)
}

pub fn render_action_menu(f: &mut Frame, area: Rect, store: &CourseStore, target: Target, selected: usize) -> Rect {
    let name = match target {
        Target::Module(id) => store.module(&id).map(|m| m.name.as_str()),
        Target::Resource(id) => store.resource(&id).map(|r| r.name.as_str()),
    };
    let labels = ActionMenuEntry::for_target(target, store)
        .into_iter()
        .map(|entry| entry.label(target, store).to_string())
        .collect();
    render_menu(f, area, format!(" {} ", name.unwrap_or("Actions")), labels, selected)
}
