//! Form workspace and renderer for the dialog overlay.
//!
//! The overlay owner decides which dialog is open; this component keeps the
//! in-progress form values for it, turns keys into actions and draws it.
//! Forms are reset every time a dialog opens, so cancelling never leaks a
//! half-typed value into the next one.

use crate::entities::ItemId;
use crate::forms::{LinkForm, ModuleForm, RenameForm, TextInput, UploadForm};
use crate::icons::IconService;
use crate::store::CourseStore;
use crate::ui::components::dialogs::{file_dialogs, link_dialogs, module_dialogs, scroll_behavior, system_dialogs};
use crate::ui::core::actions::{Action, DialogType, Target};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, style::Color, widgets::ScrollbarState, Frame};
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct DialogComponent {
    pub module_form: ModuleForm,
    pub link_form: LinkForm,
    pub rename_form: RenameForm,
    pub upload_form: UploadForm,
    /// Index into `move_destinations()` for the "Move to..." dialog
    pub move_selection: usize,
    pub icons: IconService,
    pub accepted_extensions: Vec<String>,
    // Scrolling support for long content dialogs
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
}

/// Apply an editing key to a text input. Returns whether the key was consumed.
pub fn edit_text(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => input.clear(),
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => {
            input.backspace();
        }
        KeyCode::Delete => {
            input.delete();
        }
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => return false,
    }
    true
}

/// Unassigned first, then every module in position order.
pub fn move_destinations(store: &CourseStore) -> Vec<(Option<ItemId>, String)> {
    std::iter::once((None, crate::constants::HEADER_UNASSIGNED.to_string()))
        .chain(store.modules().iter().map(|m| (Some(m.id), m.name.clone())))
        .collect()
}

impl DialogComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset and pre-fill forms for a dialog that is about to open.
    pub fn prepare(&mut self, dialog: &DialogType, store: &CourseStore) {
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
        match dialog {
            DialogType::ModuleCreation => self.module_form = ModuleForm::default(),
            DialogType::Upload => self.upload_form = UploadForm::default(),
            DialogType::LinkCreation => self.link_form = LinkForm::default(),
            DialogType::LinkEdit { id } => {
                self.link_form = store
                    .resource(id)
                    .map(|r| LinkForm::editing(&r.name, &r.url))
                    .unwrap_or_default();
            }
            DialogType::Rename(target) => {
                let current = match target {
                    Target::Module(id) => store.module(id).map(|m| m.name.as_str()),
                    Target::Resource(id) => store.resource(id).map(|r| r.name.as_str()),
                };
                self.rename_form = RenameForm::new(current.unwrap_or_default());
            }
            DialogType::MoveTo { id } => {
                let current = store.resource(id).and_then(|r| r.module_id);
                self.move_selection = move_destinations(store)
                    .iter()
                    .position(|(container, _)| *container == current)
                    .unwrap_or(0);
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, dialog: &DialogType, key: KeyEvent, store: &CourseStore) -> Action {
        match dialog {
            DialogType::Help | DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Action::CloseOverlay,
                KeyCode::Char('?') if *dialog == DialogType::Help => Action::CloseOverlay,
                KeyCode::Char('G') if *dialog == DialogType::Logs => Action::CloseOverlay,
                _ => {
                    scroll_behavior::handle_scroll_key(key, &mut self.scroll_offset, &mut self.scrollbar_state);
                    Action::None
                }
            },
            DialogType::Error(_) => {
                if scroll_behavior::handle_scroll_key(key, &mut self.scroll_offset, &mut self.scrollbar_state) {
                    Action::None
                } else {
                    // Any other key dismisses
                    Action::CloseOverlay
                }
            }
            DialogType::DeleteConfirmation(target) => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => match target {
                    Target::Module(id) => Action::DeleteModule(*id),
                    Target::Resource(id) => Action::DeleteResource(*id),
                },
                KeyCode::Esc | KeyCode::Char('n') => Action::CloseOverlay,
                _ => Action::None,
            },
            DialogType::MoveTo { id } => {
                let destinations = move_destinations(store);
                match key.code {
                    KeyCode::Esc => Action::CloseOverlay,
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.move_selection = (self.move_selection + 1) % destinations.len();
                        Action::None
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.move_selection = (self.move_selection + destinations.len() - 1) % destinations.len();
                        Action::None
                    }
                    KeyCode::Enter => match destinations.get(self.move_selection) {
                        Some((target, _)) => Action::MoveResource { id: *id, target: *target },
                        None => Action::None,
                    },
                    _ => Action::None,
                }
            }
            DialogType::ModuleCreation => self.handle_form_key(dialog, key, |dialog| {
                dialog.module_form.submit().map(|name| Action::CreateModule { name })
            }),
            DialogType::Upload => self.handle_form_key(dialog, key, |dialog| {
                dialog
                    .upload_form
                    .submit()
                    .map(|paths| Action::UploadFiles(paths.into_iter().map(PathBuf::from).collect()))
            }),
            DialogType::LinkCreation => {
                self.handle_form_key(dialog, key, |dialog| dialog.link_form.submit().map(Action::CreateLink))
            }
            DialogType::LinkEdit { id } => {
                let id = *id;
                self.handle_form_key(dialog, key, move |dialog| {
                    dialog.link_form.submit().map(|draft| Action::EditLink { id, draft })
                })
            }
            DialogType::Rename(target) => {
                let target = *target;
                self.handle_form_key(dialog, key, move |dialog| {
                    dialog.rename_form.submit().map(|name| match target {
                        Target::Module(id) => Action::RenameModule { id, name },
                        Target::Resource(id) => Action::RenameResource { id, name },
                    })
                })
            }
        }
    }

    /// Shared key handling for text forms. A refused submit (blank field) does nothing.
    fn handle_form_key<F>(&mut self, dialog: &DialogType, key: KeyEvent, submit: F) -> Action
    where
        F: FnOnce(&Self) -> Option<Action>,
    {
        match key.code {
            KeyCode::Esc => Action::CloseOverlay,
            KeyCode::Enter => submit(self).unwrap_or(Action::None),
            KeyCode::Tab | KeyCode::BackTab => {
                if matches!(dialog, DialogType::LinkCreation | DialogType::LinkEdit { .. }) {
                    self.link_form.toggle_focus();
                }
                Action::None
            }
            _ => {
                if let Some(input) = self.focused_input(dialog) {
                    edit_text(input, key);
                }
                Action::None
            }
        }
    }

    fn focused_input(&mut self, dialog: &DialogType) -> Option<&mut TextInput> {
        match dialog {
            DialogType::ModuleCreation => Some(&mut self.module_form.name),
            DialogType::Upload => Some(&mut self.upload_form.paths),
            DialogType::LinkCreation | DialogType::LinkEdit { .. } => Some(self.link_form.focused_mut()),
            DialogType::Rename(_) => Some(&mut self.rename_form.name),
            _ => None,
        }
    }

    /// Draw `dialog` and return the area it occupies.
    pub fn render(&mut self, f: &mut Frame, rect: Rect, dialog: &DialogType, store: &CourseStore) -> Rect {
        match dialog {
            DialogType::ModuleCreation => module_dialogs::render_module_creation_dialog(f, rect, &self.icons, &self.module_form),
            DialogType::Rename(target) => {
                let subject = match target {
                    Target::Module(_) => "Module",
                    Target::Resource(_) => "Item",
                };
                module_dialogs::render_rename_dialog(f, rect, subject, &self.rename_form)
            }
            DialogType::LinkCreation => link_dialogs::render_link_dialog(f, rect, &self.icons, &self.link_form, false),
            DialogType::LinkEdit { .. } => link_dialogs::render_link_dialog(f, rect, &self.icons, &self.link_form, true),
            DialogType::Upload => {
                file_dialogs::render_upload_dialog(f, rect, &self.icons, &self.upload_form, &self.accepted_extensions)
            }
            DialogType::MoveTo { id } => {
                let resource = store.resource(id);
                let name = resource.map(|r| r.name.as_str()).unwrap_or("?");
                let current = resource.and_then(|r| r.module_id);
                let destinations = move_destinations(store);
                file_dialogs::render_move_dialog(f, rect, &self.icons, name, &destinations, self.move_selection, current)
            }
            DialogType::DeleteConfirmation(target) => {
                let (item_type, name) = match target {
                    Target::Module(id) => ("module", store.module(id).map(|m| m.name.as_str())),
                    Target::Resource(id) => ("item", store.resource(id).map(|r| r.name.as_str())),
                };
                system_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, item_type, name.unwrap_or("?"))
            }
            DialogType::Error(message) => {
                let title = format!("{} Error", self.icons.error());
                system_dialogs::render_message_dialog(
                    f,
                    rect,
                    &title,
                    Color::Red,
                    message,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                )
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state),
            DialogType::Logs => system_dialogs::render_logs_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state),
        }
    }
}
