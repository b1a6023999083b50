use coursebuilder::config::Config;
use coursebuilder::download::{Downloader, Launcher};
use coursebuilder::ui::core::{Component, EventType};
use coursebuilder::ui::AppComponent;
use coursebuilder::{ItemId, LinkDraft};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct RecordingLauncher {
    pub opened: Mutex<Vec<String>>,
}

impl Launcher for RecordingLauncher {
    fn open(&self, url: &str) -> Result<(), String> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

pub fn app_with_downloads(dir: &Path) -> AppComponent {
    let downloader = Downloader::new(dir.to_path_buf(), Arc::new(RecordingLauncher::default()));
    AppComponent::with_downloader(&Config::default(), downloader)
}

pub fn app() -> AppComponent {
    app_with_downloads(&std::env::temp_dir())
}

pub fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

pub fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

pub fn mouse(app: &mut AppComponent, kind: MouseEventKind, column: u16, row: u16) {
    app.handle_event(EventType::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

pub fn left_down(app: &mut AppComponent, column: u16, row: u16) {
    mouse(app, MouseEventKind::Down(MouseButton::Left), column, row);
}

/// Draw one frame so components know their on-screen areas.
pub fn render(app: &mut AppComponent, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
}

pub fn add_link(app: &mut AppComponent, name: &str) -> ItemId {
    app.dispatch(coursebuilder::ui::core::Action::CreateLink(LinkDraft {
        name: name.to_string(),
        url: format!("https://example.com/{}", name),
    }));
    app.store()
        .resources_in(None)
        .last()
        .map(|r| r.id)
        .expect("link should be added")
}

pub fn add_module(app: &mut AppComponent, name: &str) -> ItemId {
    app.dispatch(coursebuilder::ui::core::Action::CreateModule { name: name.to_string() });
    app.store().modules().last().map(|m| m.id).expect("module should be added")
}

pub fn module_names(app: &AppComponent) -> Vec<String> {
    app.store().modules().iter().map(|m| m.name.clone()).collect()
}

/// Screen row showing course view row `index`, found by probing column `column`.
pub fn screen_row_of(app: &AppComponent, index: usize, column: u16, height: u16) -> u16 {
    (0..height)
        .find(|y| app.course_view().row_at(column, *y) == Some(index))
        .expect("row should be on screen")
}
