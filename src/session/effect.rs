use crate::browser::{TreeKind, WindowHandle};
use crate::menu::{Dialog, ImageQuality, ProxyAuth};

/// Which save dialog variant is being prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Source,
    Complete,
    Draw,
    Text,
    LinkUri,
    LinkUrl,
    LinkText,
    ObjectOriginal,
    ObjectNative,
    HotlistExport,
    HistoryExport,
}

/// Contents to load into a dialog before it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogPrep {
    PageInfo {
        title: String,
        url: String,
        mime_type: String,
    },
    ObjectInfo {
        url: String,
        target: String,
        mime_type: String,
    },
    Save {
        kind: SaveKind,
        url: Option<String>,
    },
    Print(WindowHandle),
    Zoom(WindowHandle),
    Search(WindowHandle),
    OpenUrl,
    Folder { editing: bool },
    Entry { editing: bool },
}

/// Work for the event loop that falls outside the menus: engine calls,
/// dialogs, and persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PrepareDialog(DialogPrep),
    OpenDialog {
        dialog: Dialog,
        owner: Option<WindowHandle>,
        at_pointer: bool,
    },
    OpenHelpPage(&'static str),
    LaunchInteractiveHelp,
    OpenUrl(String),
    Navigate {
        window: WindowHandle,
        url: String,
    },
    NewWindow {
        url: String,
        clone_of: WindowHandle,
    },
    ViewSource(WindowHandle),
    HistoryBack(WindowHandle),
    HistoryForward(WindowHandle),
    Reload {
        window: WindowHandle,
        all: bool,
    },
    Stop(WindowHandle),
    ReloadObject {
        window: WindowHandle,
        url: String,
    },
    ShowLocalHistory {
        window: WindowHandle,
        at_pointer: bool,
    },
    ShowTree(TreeKind),
    AddToHotlist {
        title: Option<String>,
        url: String,
    },
    AddRecentUrl(String),
    RedrawWindow(WindowHandle),
    SaveWindowDefaults(WindowHandle),
    TreeExpansion {
        window: WindowHandle,
        expand: bool,
        folders: bool,
        links: bool,
    },
    TreeLaunchSelected(WindowHandle),
    TreeDeleteSelected(WindowHandle),
    TreeResetUsage(WindowHandle),
    TreeSelectAll(WindowHandle),
    TreeClearSelection(WindowHandle),
    TreeMenuClosed(WindowHandle),
    RefreshToolbar(WindowHandle),
    ToggleToolbarEditor(WindowHandle),
    FocusAddressBar(WindowHandle),
    FormSelect {
        window: WindowHandle,
        control: u64,
        option: usize,
    },
    ProxyAuthSelected(ProxyAuth),
    ImageQualitySelected(ImageQuality),
    LanguageSelected(String),
    SaveOptions,
    OpenChoices,
    Quit,
}
