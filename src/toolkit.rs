use anyhow::Result;

use crate::browser::WindowHandle;
use crate::menu::{Child, MenuDefinition};

mod headless;
#[cfg(windows)]
mod win32;

pub use headless::{HeadlessToolkit, ToolkitCall};
#[cfg(windows)]
pub use win32::WinToolkit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Button {
    #[default]
    Select,
    Menu,
    /// Selecting with this button keeps the menu open.
    Adjust,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pointer {
    pub x: i32,
    pub y: i32,
    pub button: Button,
}

/// Visible area of a window in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Extent {
    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }
}

/// Toolbar icons whose shaded state mirrors a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarIcon {
    Back,
    Forward,
    Reload,
    Stop,
    Bookmark,
    Save,
    Print,
    Scale,
    Search,
    Suggest,
    Delete,
    Launch,
}

/// The windowing toolkit, seen through the few operations the menus need.
pub trait Toolkit {
    /// Opens (or reopens in place) a menu at screen position `(x, y)`.
    fn open_menu(&mut self, menu: &MenuDefinition, x: i32, y: i32) -> Result<()>;
    fn open_sub_menu(&mut self, menu: &MenuDefinition, child: Child, x: i32, y: i32) -> Result<()>;
    fn close_menu(&mut self) -> Result<()>;
    /// Entry indices leading to the deepest open sub-menu, outermost first.
    fn menu_state(&self) -> Result<Vec<usize>>;
    fn pointer(&self) -> Result<Pointer>;
    fn set_icon_shaded(&mut self, toolbar: WindowHandle, icon: ToolbarIcon, shaded: bool) -> Result<()>;
    fn window_extent(&self, window: WindowHandle) -> Result<Extent>;
    fn screen_size(&self) -> Result<(i32, i32)>;
    /// Shows a non-fatal warning to the user.
    fn warn_user(&mut self, message: &str, detail: &str);

    /// True when `open_menu` builds every sub-menu at once, so no warning
    /// arrives before a sub-menu is shown.
    fn builds_sub_menus(&self) -> bool {
        false
    }
}
