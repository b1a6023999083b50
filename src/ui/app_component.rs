use crate::config::Config;
use crate::constants::{
    ERROR_DOWNLOAD_FAILED, ERROR_NOT_A_LINK, ERROR_NO_PATHS, ERROR_UNKNOWN_MODULE, SUCCESS_FILES_ADDED,
    SUCCESS_LINK_CREATED, SUCCESS_LINK_UPDATED, SUCCESS_MODULE_CREATED, SUCCESS_MODULE_DELETED,
    SUCCESS_MODULE_RENAMED, SUCCESS_RESOURCE_DELETED, SUCCESS_RESOURCE_MOVED, SUCCESS_RESOURCE_RENAMED,
};
use crate::download::Downloader;
use crate::icons::IconService;
use crate::store::{CourseStore, StoreError};
use crate::ui::components::status_bar::{StatusBar, StatusMessage, StatusState};
use crate::ui::components::{menu_component, CourseViewComponent, DialogComponent, OutlineComponent};
use crate::ui::core::{
    actions::{Action, DialogType, Target},
    drag::{DragPayload, DragSession},
    event_handler::EventType,
    overlay::{ActionMenuEntry, Overlay, OverlayManager},
    scroll_spy::ScrollSpy,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Rows scrolled per mouse wheel notch
const WHEEL_STEP: isize = 3;

pub struct AppComponent {
    // Component composition
    outline: OutlineComponent,
    course_view: CourseViewComponent,
    dialog: DialogComponent,

    // Application state
    store: CourseStore,
    overlay: OverlayManager,
    drag: Option<DragSession>,
    /// Whether the drag in progress was started by the mouse
    pointer_drag: bool,
    /// Item under the last left press, picked up once the pointer moves
    pressed: Option<Target>,
    status: StatusState,
    icons: IconService,
    scroll_spy: ScrollSpy,
    sidebar_width: u16,
    mouse_enabled: bool,

    // Services
    downloader: Downloader,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config) -> Self {
        Self::with_downloader(config, Downloader::system(config.files.resolved_download_dir()))
    }

    pub fn with_downloader(config: &Config, downloader: Downloader) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut outline = OutlineComponent::new();
        outline.icons = icons.clone();
        let mut course_view = CourseViewComponent::new(&config.ui.course_title, config.ui.start_expanded);
        course_view.icons = icons.clone();
        let mut dialog = DialogComponent::new();
        dialog.icons = icons.clone();
        dialog.accepted_extensions = config.files.accepted_extensions.clone();

        let mut app = Self {
            outline,
            course_view,
            dialog,
            store: CourseStore::new(),
            overlay: OverlayManager::new(),
            drag: None,
            pointer_drag: false,
            pressed: None,
            status: StatusState::default(),
            icons,
            scroll_spy: ScrollSpy::new(config.ui.scroll_lookahead),
            sidebar_width: config.ui.sidebar_width,
            mouse_enabled: config.ui.mouse_enabled,
            downloader,
            task_manager,
            background_action_rx,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &CourseStore {
        &self.store
    }

    pub fn overlay(&self) -> &Overlay {
        self.overlay.current()
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn course_view(&self) -> &CourseViewComponent {
        &self.course_view
    }

    pub fn outline(&self) -> &OutlineComponent {
        &self.outline
    }

    pub fn status(&self) -> &StatusState {
        &self.status
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Add files named on the command line as if they were uploaded.
    pub fn preload_files(&mut self, paths: Vec<PathBuf>) {
        if !paths.is_empty() {
            self.dispatch(Action::UploadFiles(paths));
        }
    }

    /// Push store state into the components after any change.
    fn sync_component_data(&mut self) {
        self.course_view.refresh(&self.store);
        self.outline.set_data(&self.store);
        self.update_active_module();

        let (dragging, target) = match &self.drag {
            Some(session) => {
                let target = match session.payload {
                    DragPayload::Resource { .. } => Some(session.target),
                    DragPayload::Module { .. } => None,
                };
                (Some(session.payload.id()), target)
            }
            None => (None, None),
        };
        self.course_view.set_drag(dragging, target);

        self.status.drag = self.drag.as_ref().map(|session| session.describe(&self.store));
        self.status.searching = self.course_view.is_searching();
        self.status.pending_downloads = self.task_manager.task_count();
    }

    fn update_active_module(&mut self) {
        let active = self
            .scroll_spy
            .active(&self.course_view.anchors(), self.course_view.offset());
        self.outline.set_active(active);
    }

    fn set_message(&mut self, message: StatusMessage) {
        self.status.message = Some(message);
    }

    fn show_error(&mut self, message: String) {
        log::warn!("UI: {}", message);
        let dialog = DialogType::Error(message);
        self.dialog.prepare(&dialog, &self.store);
        self.overlay.open(Overlay::Dialog(dialog));
    }

    fn store_error_message(error: &StoreError) -> String {
        match error {
            StoreError::UnknownModule(_) => ERROR_UNKNOWN_MODULE.to_string(),
            StoreError::NotALink(_) => ERROR_NOT_A_LINK.to_string(),
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('a') => Action::OpenAddMenu,
            KeyCode::Char('A') => Action::ShowDialog(DialogType::ModuleCreation),
            KeyCode::Char('u') => Action::ShowDialog(DialogType::Upload),
            KeyCode::Char('l') => Action::ShowDialog(DialogType::LinkCreation),
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Keyboard grab mode: the picked item follows j/k until dropped.
    fn handle_drag_key(&mut self, key: KeyEvent) -> Action {
        let Some(session) = self.drag.as_mut() else {
            return Action::None;
        };
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                session.step(&mut self.store, 1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                session.step(&mut self.store, -1);
            }
            KeyCode::Char(']') | KeyCode::Tab => session.cycle_target(&self.store, true),
            KeyCode::Char('[') | KeyCode::BackTab => session.cycle_target(&self.store, false),
            KeyCode::Enter | KeyCode::Char('m') => {
                if let Some(session) = self.drag.take() {
                    self.finish_drag(session);
                }
            }
            KeyCode::Esc => {
                // Reorders already applied while hovering stay applied
                log::debug!("Drag: cancelled");
                self.drag = None;
            }
            _ => {}
        }
        Action::None
    }

    fn finish_drag(&mut self, session: DragSession) {
        self.pointer_drag = false;
        match session.drop(&mut self.store) {
            Ok(true) => self.set_message(StatusMessage::Success(SUCCESS_RESOURCE_MOVED.to_string())),
            Ok(false) => log::debug!("Drag: dropped in place"),
            Err(e) => self.show_error(Self::store_error_message(&e)),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        self.status.message = None;

        // The open overlay owns the keyboard
        match self.overlay.current().clone() {
            Overlay::Dialog(dialog) => return self.dialog.handle_key(&dialog, key, &self.store),
            Overlay::AddMenu { .. } | Overlay::ActionMenu { .. } => {
                return self.overlay.handle_menu_key(key, &self.store);
            }
            Overlay::None => {}
        }

        if self.drag.is_some() {
            return self.handle_drag_key(key);
        }

        if self.course_view.is_searching() {
            return self.course_view.handle_key_events(key);
        }

        // Outline first (J/K), then the course view, then global keys
        let outline_action = self.outline.handle_key_events(key);
        if outline_action != Action::None {
            return outline_action;
        }
        let course_action = self.course_view.handle_key_events(key);
        if course_action != Action::None {
            return course_action;
        }
        self.handle_global_key(key)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled {
            return Action::None;
        }

        if self.overlay.is_open() {
            return match mouse.kind {
                MouseEventKind::Down(_) => {
                    if self.overlay.click_outside(mouse.column, mouse.row) {
                        Action::None
                    } else if matches!(self.overlay.current(), Overlay::Dialog(_)) {
                        Action::None
                    } else {
                        self.overlay.click_menu(mouse.row, &self.store)
                    }
                }
                _ => Action::None,
            };
        }

        // A keyboard grab ignores the pointer until it is dropped
        if self.drag.is_some() && !self.pointer_drag {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.course_view.is_over_search(mouse.column, mouse.row) {
                    self.course_view.focus_search();
                    return Action::None;
                }
                match self.course_view.row_at(mouse.column, mouse.row) {
                    Some(index) => {
                        self.course_view.select_index(index);
                        self.pressed = self.course_view.rows()[index].target();
                        Action::None
                    }
                    None => self.outline.handle_mouse(mouse),
                }
            }
            MouseEventKind::Down(MouseButton::Right) => match self.course_view.row_at(mouse.column, mouse.row) {
                Some(index) => {
                    self.course_view.select_index(index);
                    self.course_view.rows()[index]
                        .target()
                        .map_or(Action::None, Action::OpenActionMenu)
                }
                None => Action::None,
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.drag.is_none() {
                    self.drag = match self.pressed {
                        Some(Target::Module(id)) => DragSession::pick_module(&self.store, &id),
                        Some(Target::Resource(id)) => DragSession::pick_resource(&self.store, &id),
                        None => None,
                    };
                    self.pointer_drag = self.drag.is_some();
                }
                if let (Some(session), Some(index)) =
                    (self.drag.as_mut(), self.course_view.row_at(mouse.column, mouse.row))
                {
                    let row = self.course_view.rows()[index];
                    if let Some((zone, slot)) = row.drop_zone(&session.payload) {
                        session.hover_row(&mut self.store, zone, slot);
                    }
                }
                Action::None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.pressed = None;
                if self.pointer_drag {
                    if let Some(session) = self.drag.take() {
                        self.finish_drag(session);
                    }
                }
                Action::None
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let action = self.outline.handle_mouse(mouse);
                if action != Action::None {
                    return action;
                }
                let delta = if mouse.kind == MouseEventKind::ScrollUp {
                    -WHEEL_STEP
                } else {
                    WHEEL_STEP
                };
                self.course_view.scroll_by(delta);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::None => Action::None,
            Action::Quit => {
                log::info!("App: quit requested");
                self.should_quit = true;
                Action::Quit
            }

            // Navigation is applied by the components
            Action::ScrollToModule(_) | Action::ToggleModule(_) => Action::None,

            // Overlays
            Action::OpenAddMenu => {
                self.overlay.open(Overlay::AddMenu { selected: 0 });
                Action::None
            }
            Action::OpenActionMenu(target) => {
                if !ActionMenuEntry::for_target(target, &self.store).is_empty() {
                    self.overlay.open(Overlay::ActionMenu { target, selected: 0 });
                }
                Action::None
            }
            Action::ShowDialog(dialog) => {
                if let DialogType::LinkEdit { id } = &dialog {
                    if !self.store.resource(id).is_some_and(|r| r.is_link()) {
                        self.set_message(StatusMessage::Error(ERROR_NOT_A_LINK.to_string()));
                        return Action::None;
                    }
                }
                self.dialog.prepare(&dialog, &self.store);
                self.overlay.open(Overlay::Dialog(dialog));
                Action::None
            }
            Action::CloseOverlay => {
                self.overlay.close();
                Action::None
            }

            // Module operations
            Action::CreateModule { name } => {
                let id = self.store.add_module(&name);
                self.overlay.close();
                self.course_view.refresh(&self.store);
                self.course_view.scroll_to_module(&id);
                self.set_message(StatusMessage::Success(SUCCESS_MODULE_CREATED.to_string()));
                Action::None
            }
            Action::RenameModule { id, name } => {
                self.overlay.close();
                if self.store.rename_module(&id, &name) {
                    self.set_message(StatusMessage::Success(SUCCESS_MODULE_RENAMED.to_string()));
                }
                Action::None
            }
            Action::DeleteModule(id) => {
                self.overlay.close();
                if self.store.delete_module(&id).is_some() {
                    self.set_message(StatusMessage::Success(SUCCESS_MODULE_DELETED.to_string()));
                }
                Action::None
            }

            // Resource operations
            Action::UploadFiles(paths) => {
                let (files, missing): (Vec<PathBuf>, Vec<PathBuf>) = paths.into_iter().partition(|p| p.is_file());
                for path in &missing {
                    log::warn!("Upload: skipping '{}', not a readable file", path.display());
                }
                if files.is_empty() {
                    self.show_error(ERROR_NO_PATHS.to_string());
                    return Action::None;
                }
                let added = self.store.add_files(files);
                self.overlay.close();
                self.set_message(StatusMessage::Success(format!("{} ({})", SUCCESS_FILES_ADDED, added.len())));
                Action::None
            }
            Action::CreateLink(draft) => {
                self.store.add_link(draft);
                self.overlay.close();
                self.set_message(StatusMessage::Success(SUCCESS_LINK_CREATED.to_string()));
                Action::None
            }
            Action::EditLink { id, draft } => {
                self.overlay.close();
                match self.store.edit_link(&id, draft) {
                    Ok(true) => self.set_message(StatusMessage::Success(SUCCESS_LINK_UPDATED.to_string())),
                    Ok(false) => {}
                    Err(e) => self.show_error(Self::store_error_message(&e)),
                }
                Action::None
            }
            Action::RenameResource { id, name } => {
                self.overlay.close();
                if self.store.rename_resource(&id, &name) {
                    self.set_message(StatusMessage::Success(SUCCESS_RESOURCE_RENAMED.to_string()));
                }
                Action::None
            }
            Action::DeleteResource(id) => {
                self.overlay.close();
                if self.store.delete_resource(&id).is_some() {
                    self.set_message(StatusMessage::Success(SUCCESS_RESOURCE_DELETED.to_string()));
                }
                Action::None
            }
            Action::MoveResource { id, target } => {
                self.overlay.close();
                match self.store.move_resource(&id, target) {
                    Ok(true) => self.set_message(StatusMessage::Success(SUCCESS_RESOURCE_MOVED.to_string())),
                    Ok(false) => {}
                    Err(e) => self.show_error(Self::store_error_message(&e)),
                }
                Action::None
            }
            Action::DownloadResource(id) => {
                self.overlay.close();
                let Some(resource) = self.store.resource(&id) else {
                    return Action::None;
                };
                match Downloader::prepare(resource, self.store.handles()) {
                    Ok(request) => {
                        let task_id = self.task_manager.spawn_download(self.downloader.clone(), request);
                        log::debug!("App: download task #{} started", task_id);
                    }
                    Err(e) => self.show_error(format!("{}: {}", ERROR_DOWNLOAD_FAILED, e)),
                }
                Action::None
            }
            Action::DownloadCompleted(message) => {
                log::info!("{}", message);
                self.set_message(StatusMessage::Success(message));
                Action::None
            }
            Action::DownloadFailed(message) => {
                if self.overlay.is_open() {
                    self.set_message(StatusMessage::Error(message));
                } else {
                    self.show_error(message);
                }
                Action::None
            }

            // Keyboard grab mode
            Action::StartDrag(target) => {
                self.drag = match target {
                    Target::Module(id) => DragSession::pick_module(&self.store, &id),
                    Target::Resource(id) => DragSession::pick_resource(&self.store, &id),
                };
                self.pointer_drag = false;
                if let Some(session) = &self.drag {
                    log::debug!("Drag: picked up {:?}", session.payload);
                }
                Action::None
            }

            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.outline.icons = self.icons.clone();
                self.course_view.icons = self.icons.clone();
                self.dialog.icons = self.icons.clone();
                log::info!("UI: icon theme is now {:?}", self.icons.theme());
                Action::None
            }
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received action {:?}", action);
            actions.push(action);
        }

        // Clean up finished tasks
        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            log::debug!("Background: cleaned up {} finished tasks", completed_tasks.len());
        }

        actions
    }

    /// Run one action through the components and the app, then refresh views.
    pub fn dispatch(&mut self, action: Action) -> Action {
        let action = self.update(action);
        let result = self.handle_app_action(action);
        self.sync_component_data();
        result
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.handle_key(key),
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };
        self.dispatch(action);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.outline.update(action);
        self.course_view.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);
        let top_chunks = LayoutManager::top_pane_layout(chunks[0], self.sidebar_width);

        // The course view settles its scroll offset while drawing, so the
        // active module is recomputed before the outline is drawn
        self.course_view.render(f, top_chunks[1]);
        self.update_active_module();
        self.outline.render(f, top_chunks[0]);
        StatusBar::render(f, chunks[1], &self.status);

        let overlay_area = match self.overlay.current().clone() {
            Overlay::None => None,
            Overlay::AddMenu { selected } => Some(menu_component::render_add_menu(f, rect, &self.icons, selected)),
            Overlay::ActionMenu { target, selected } => {
                Some(menu_component::render_action_menu(f, rect, &self.store, target, selected))
            }
            Overlay::Dialog(dialog) => Some(self.dialog.render(f, rect, &dialog, &self.store)),
        };
        if let Some(area) = overlay_area {
            self.overlay.set_area(area);
        }
    }
}
