use std::collections::HashMap;

/// Opaque toolkit window handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct WindowHandle(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub url: String,
    pub title: Option<String>,
    pub mime_type: Option<String>,
    /// Whether the document has finished loading.
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryNav {
    pub back: bool,
    pub forward: bool,
}

/// Per-window rendering preferences toggled from the View menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub background_images: bool,
    pub buffer_animations: bool,
    pub buffer_everything: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            background_images: true,
            buffer_animations: false,
            buffer_everything: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarKind {
    Browser,
    Hotlist,
    History,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    pub kind: ToolbarKind,
    /// Window holding the toolbar icons.
    pub handle: WindowHandle,
    /// Whether the toolbar is being edited.
    pub editor: bool,
    pub display_buttons: bool,
    pub display_url: bool,
    pub display_throbber: bool,
    pub display_status: bool,
}

impl Toolbar {
    pub fn new(kind: ToolbarKind, handle: WindowHandle) -> Self {
        Self {
            kind,
            handle,
            editor: false,
            display_buttons: true,
            display_url: true,
            display_throbber: true,
            display_status: true,
        }
    }

    /// Icons of a browser toolbar follow page state unless it is being edited.
    pub(crate) fn tracks_browser_icons(&self) -> bool {
        self.kind == ToolbarKind::Browser && !self.editor
    }

    pub(crate) fn tracks_tree_icons(&self) -> bool {
        self.kind != ToolbarKind::Browser && !self.editor
    }
}

/// Snapshot of a browser window as seen by the menus.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowserWindow {
    pub document: Option<Document>,
    pub loading: bool,
    pub history: Option<HistoryNav>,
    pub options: DisplayOptions,
    pub toolbar: Option<Toolbar>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
    Hotlist,
    GlobalHistory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedNode {
    pub folder: bool,
}

/// Snapshot of a hotlist or global history window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeWindow {
    pub kind: TreeKind,
    pub has_children: bool,
    pub has_selection: bool,
    pub selected: Option<SelectedNode>,
    pub toolbar: Option<Toolbar>,
}

impl TreeWindow {
    pub fn new(kind: TreeKind) -> Self {
        Self {
            kind,
            has_children: false,
            has_selection: false,
            selected: None,
            toolbar: None,
        }
    }

    pub(crate) fn selection_active(&self) -> bool {
        self.has_children && self.has_selection
    }
}

/// An embedded object found under the pointer when the browser menu opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
    pub url: String,
    pub mime_type: Option<String>,
    /// Link target wrapping the object, if any.
    pub href: Option<String>,
}

/// Document and session state the menus query. Implemented by the browser
/// engine glue; the menus never own this state.
pub trait Browser {
    fn browser_window(&self, window: WindowHandle) -> Option<&BrowserWindow>;
    fn browser_window_mut(&mut self, window: WindowHandle) -> Option<&mut BrowserWindow>;
    fn tree_window(&self, window: WindowHandle) -> Option<&TreeWindow>;
    fn tree_window_mut(&mut self, window: WindowHandle) -> Option<&mut TreeWindow>;
    fn hotlist_available(&self) -> bool;
    fn global_history_available(&self) -> bool;
    fn interactive_help_available(&self) -> bool;
    fn recent_urls(&self) -> Vec<String>;
    /// Object at window work-area coordinates, if the page has one there.
    fn object_at(&self, window: WindowHandle, x: i32, y: i32) -> Option<ObjectInfo>;
}

/// In-memory [`Browser`], for hosts without an engine attached.
#[derive(Debug, Clone, Default)]
pub struct BrowserModel {
    pub windows: HashMap<WindowHandle, BrowserWindow>,
    pub trees: HashMap<WindowHandle, TreeWindow>,
    pub objects: HashMap<WindowHandle, ObjectInfo>,
    pub hotlist: bool,
    pub global_history: bool,
    pub interactive_help: bool,
    pub recent: Vec<String>,
}

impl BrowserModel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Browser for BrowserModel {
    fn browser_window(&self, window: WindowHandle) -> Option<&BrowserWindow> {
        self.windows.get(&window)
    }

    fn browser_window_mut(&mut self, window: WindowHandle) -> Option<&mut BrowserWindow> {
        self.windows.get_mut(&window)
    }

    fn tree_window(&self, window: WindowHandle) -> Option<&TreeWindow> {
        self.trees.get(&window)
    }

    fn tree_window_mut(&mut self, window: WindowHandle) -> Option<&mut TreeWindow> {
        self.trees.get_mut(&window)
    }

    fn hotlist_available(&self) -> bool {
        self.hotlist
    }

    fn global_history_available(&self) -> bool {
        self.global_history
    }

    fn interactive_help_available(&self) -> bool {
        self.interactive_help
    }

    fn recent_urls(&self) -> Vec<String> {
        self.recent.clone()
    }

    fn object_at(&self, window: WindowHandle, _x: i32, _y: i32) -> Option<ObjectInfo> {
        self.objects.get(&window).cloned()
    }
}
