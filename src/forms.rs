//! Form state for the module, link and rename dialogs.
//!
//! Forms are plain values: the dialog owns one while it is open and throws it
//! away on cancel. A submission only produces a value when every field is
//! non-blank after trimming; otherwise it is silently refused.

use crate::store::LinkDraft;

/// Single-line text buffer with a character-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-filled input with the cursor at the end.
    pub fn with_value(value: &str) -> Self {
        Self {
            buffer: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.buffer.insert(offset, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let offset = self.byte_offset(self.cursor - 1);
        self.buffer.remove(offset);
        self.cursor -= 1;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.buffer.chars().count() {
            return false;
        }
        let offset = self.byte_offset(self.cursor);
        self.buffer.remove(offset);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buffer.chars().count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

/// "Create module" form.
#[derive(Debug, Clone, Default)]
pub struct ModuleForm {
    pub name: TextInput,
}

impl ModuleForm {
    pub fn submit(&self) -> Option<String> {
        (!self.name.is_blank()).then(|| self.name.value().trim().to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkField {
    #[default]
    Name,
    Url,
}

/// "Create link" and "Edit link" form.
#[derive(Debug, Clone, Default)]
pub struct LinkForm {
    pub name: TextInput,
    pub url: TextInput,
    pub focus: LinkField,
}

impl LinkForm {
    pub fn editing(name: &str, url: &str) -> Self {
        Self {
            name: TextInput::with_value(name),
            url: TextInput::with_value(url),
            focus: LinkField::Name,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LinkField::Name => LinkField::Url,
            LinkField::Url => LinkField::Name,
        };
    }

    pub fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            LinkField::Name => &mut self.name,
            LinkField::Url => &mut self.url,
        }
    }

    /// Both fields are required; nothing else about the URL is checked.
    pub fn submit(&self) -> Option<LinkDraft> {
        if self.name.is_blank() || self.url.is_blank() {
            return None;
        }
        Some(LinkDraft {
            name: self.name.value().trim().to_string(),
            url: self.url.value().trim().to_string(),
        })
    }
}

/// In-place rename of a module or resource.
#[derive(Debug, Clone, Default)]
pub struct RenameForm {
    pub name: TextInput,
}

impl RenameForm {
    pub fn new(current: &str) -> Self {
        Self {
            name: TextInput::with_value(current),
        }
    }

    pub fn submit(&self) -> Option<String> {
        (!self.name.is_blank()).then(|| self.name.value().trim().to_string())
    }
}

/// "Upload" form: one or more paths separated by `;`.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub paths: TextInput,
}

impl UploadForm {
    pub fn submit(&self) -> Option<Vec<String>> {
        let paths: Vec<String> = self
            .paths
            .value()
            .split(';')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        (!paths.is_empty()).then_some(paths)
    }
}
