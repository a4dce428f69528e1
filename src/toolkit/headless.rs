use std::collections::HashMap;

use anyhow::{anyhow, Result};

use crate::browser::WindowHandle;
use crate::menu::{Child, MenuDefinition};

use super::{Extent, Pointer, Toolkit, ToolbarIcon};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolkitCall {
    OpenMenu { title: String, x: i32, y: i32 },
    OpenSubMenu { child: Child, x: i32, y: i32 },
    CloseMenu,
    IconShaded { toolbar: WindowHandle, icon: ToolbarIcon, shaded: bool },
    Warn { message: String, detail: String },
}

/// A toolkit with no display. Records every call and answers queries from
/// scripted state; used for inspection and tests.
#[derive(Debug, Clone, Default)]
pub struct HeadlessToolkit {
    pub calls: Vec<ToolkitCall>,
    pub open_path: Vec<usize>,
    pub pointer: Pointer,
    pub extents: HashMap<WindowHandle, Extent>,
    pub screen: (i32, i32),
    /// Makes `open_menu` and `open_sub_menu` fail.
    pub fail_open: bool,
    pub fail_pointer: bool,
    /// Behave like a toolkit that builds every sub-menu when the menu opens.
    pub eager: bool,
    pub icons: HashMap<(WindowHandle, ToolbarIcon), bool>,
}

impl HeadlessToolkit {
    pub fn new() -> Self {
        Self {
            screen: (1920, 1080),
            ..Default::default()
        }
    }

    pub fn opened(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ToolkitCall::OpenMenu { .. }))
            .count()
    }

    pub fn warnings(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ToolkitCall::Warn { .. }))
            .count()
    }

    pub fn icon(&self, toolbar: WindowHandle, icon: ToolbarIcon) -> Option<bool> {
        self.icons.get(&(toolbar, icon)).copied()
    }
}

impl Toolkit for HeadlessToolkit {
    fn open_menu(&mut self, menu: &MenuDefinition, x: i32, y: i32) -> Result<()> {
        if self.fail_open {
            return Err(anyhow!("menu creation refused"));
        }
        self.calls.push(ToolkitCall::OpenMenu {
            title: menu.root().title.clone(),
            x,
            y,
        });
        Ok(())
    }

    fn open_sub_menu(&mut self, _menu: &MenuDefinition, child: Child, x: i32, y: i32) -> Result<()> {
        if self.fail_open {
            return Err(anyhow!("sub-menu creation refused"));
        }
        self.calls.push(ToolkitCall::OpenSubMenu { child, x, y });
        Ok(())
    }

    fn close_menu(&mut self) -> Result<()> {
        self.calls.push(ToolkitCall::CloseMenu);
        self.open_path.clear();
        Ok(())
    }

    fn menu_state(&self) -> Result<Vec<usize>> {
        Ok(self.open_path.clone())
    }

    fn pointer(&self) -> Result<Pointer> {
        if self.fail_pointer {
            return Err(anyhow!("pointer unavailable"));
        }
        Ok(self.pointer)
    }

    fn set_icon_shaded(&mut self, toolbar: WindowHandle, icon: ToolbarIcon, shaded: bool) -> Result<()> {
        self.icons.insert((toolbar, icon), shaded);
        self.calls.push(ToolkitCall::IconShaded {
            toolbar,
            icon,
            shaded,
        });
        Ok(())
    }

    fn window_extent(&self, window: WindowHandle) -> Result<Extent> {
        self.extents
            .get(&window)
            .copied()
            .ok_or_else(|| anyhow!("unknown window {}", window.0))
    }

    fn screen_size(&self) -> Result<(i32, i32)> {
        Ok(self.screen)
    }

    fn warn_user(&mut self, message: &str, detail: &str) {
        self.calls.push(ToolkitCall::Warn {
            message: message.to_string(),
            detail: detail.to_string(),
        });
    }

    fn builds_sub_menus(&self) -> bool {
        self.eager
    }
}
