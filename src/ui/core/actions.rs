use crate::entities::ItemId;
use crate::store::LinkDraft;
use std::path::PathBuf;

/// The item an action menu or dialog is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Module(ItemId),
    Resource(ItemId),
}

impl Target {
    pub fn id(&self) -> ItemId {
        match self {
            Self::Module(id) | Self::Resource(id) => *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    ScrollToModule(ItemId),
    ToggleModule(ItemId),

    // Overlays
    OpenAddMenu,
    OpenActionMenu(Target),
    ShowDialog(DialogType),
    CloseOverlay,

    // Module operations
    CreateModule {
        name: String,
    },
    RenameModule {
        id: ItemId,
        name: String,
    },
    DeleteModule(ItemId),

    // Resource operations
    UploadFiles(Vec<PathBuf>),
    CreateLink(LinkDraft),
    EditLink {
        id: ItemId,
        draft: LinkDraft,
    },
    RenameResource {
        id: ItemId,
        name: String,
    },
    DeleteResource(ItemId),
    MoveResource {
        id: ItemId,
        target: Option<ItemId>,
    },
    DownloadResource(ItemId),
    DownloadCompleted(String),
    DownloadFailed(String),

    // Drag-and-drop (keyboard grab mode)
    StartDrag(Target),

    // UI operations
    CycleIconTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    ModuleCreation,
    Upload,
    LinkCreation,
    LinkEdit { id: ItemId },
    Rename(Target),
    MoveTo { id: ItemId },
    DeleteConfirmation(Target),
    Error(String),
    Help,
    Logs,
}
