use std::collections::BTreeMap;

use anyhow::{anyhow, Context, Result};
use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{HWND, POINT, RECT},
        UI::{
            Input::KeyboardAndMouse::{GetKeyState, VK_SHIFT},
            WindowsAndMessaging::{
                AppendMenuW, CreatePopupMenu, DestroyMenu, GetCursorPos, GetSystemMetrics,
                GetWindowRect, MessageBoxW, SetForegroundWindow, TrackPopupMenu, HMENU,
                MB_ICONWARNING, MB_OK, MENU_ITEM_FLAGS, MF_CHECKED, MF_GRAYED, MF_POPUP,
                MF_SEPARATOR, MF_STRING, SM_CXSCREEN, SM_CYSCREEN, TPM_BOTTOMALIGN, TPM_LEFTALIGN,
                TPM_RETURNCMD, TPM_RIGHTBUTTON,
            },
        },
    },
};

use crate::browser::WindowHandle;
use crate::menu::{Child, MenuDefinition, NodeId};

use super::{Button, Extent, Pointer, Toolkit, ToolbarIcon};

const CMD_BASE: u16 = 1000;

/// Renders compiled menus as Win32 popup menus owned by `hwnd`.
///
/// Win32 popups block while tracking, so `open_menu` only builds the menu;
/// the host calls [`WinToolkit::track`] to show it and read back the choice.
pub struct WinToolkit {
    hwnd: HWND,
    popup: Option<HMENU>,
    /// Command id -> selection path.
    commands: BTreeMap<u16, Vec<usize>>,
    position: (i32, i32),
}

impl WinToolkit {
    pub fn new(hwnd: HWND) -> Self {
        Self {
            hwnd,
            popup: None,
            commands: BTreeMap::new(),
            position: (0, 0),
        }
    }

    /// Shows the built menu and blocks until it is dismissed. Returns the
    /// selection path of the chosen entry.
    pub fn track(&mut self) -> Option<Vec<usize>> {
        let menu = self.popup?;
        let (x, y) = self.position;
        let cmd = unsafe {
            let _ = SetForegroundWindow(self.hwnd);
            TrackPopupMenu(
                menu,
                TPM_LEFTALIGN | TPM_BOTTOMALIGN | TPM_RIGHTBUTTON | TPM_RETURNCMD,
                x,
                y,
                None,
                self.hwnd,
                None,
            )
        };
        if cmd.0 == 0 {
            return None;
        }
        self.commands.get(&(cmd.0 as u16)).cloned()
    }

    fn build(&mut self, menu: &MenuDefinition, node: NodeId, path: &mut Vec<usize>) -> Result<HMENU> {
        let panel = menu
            .node(node)
            .ok_or_else(|| anyhow!("menu node {} missing", node.index()))?;
        let handle = unsafe { CreatePopupMenu() }.context("CreatePopupMenu")?;

        for (index, entry) in panel.entries.iter().enumerate() {
            path.push(index);
            let mut flags = MF_STRING;
            if entry.shaded {
                flags |= MF_GRAYED;
            }
            if entry.ticked {
                flags |= MF_CHECKED;
            }
            let label = wide(&entry.text);

            let id = match entry.child {
                Some(Child::Menu(child)) => {
                    flags |= MF_POPUP;
                    let sub = self.build(menu, child, path)?;
                    sub.0 as usize
                }
                _ => {
                    let cmd = CMD_BASE + self.commands.len() as u16;
                    self.commands.insert(cmd, path.clone());
                    cmd as usize
                }
            };
            append(handle, flags, id, &label).context("AppendMenuW(entry)")?;
            if entry.separator_after {
                unsafe { AppendMenuW(handle, MF_SEPARATOR, 0, PCWSTR::null()) }
                    .context("AppendMenuW(separator)")?;
            }
            path.pop();
        }
        Ok(handle)
    }

    fn destroy(&mut self) {
        if let Some(menu) = self.popup.take() {
            unsafe {
                let _ = DestroyMenu(menu);
            }
        }
        self.commands.clear();
    }
}

impl Drop for WinToolkit {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl Toolkit for WinToolkit {
    fn open_menu(&mut self, menu: &MenuDefinition, x: i32, y: i32) -> Result<()> {
        self.destroy();
        let popup = self.build(menu, NodeId::ROOT, &mut Vec::new())?;
        self.popup = Some(popup);
        self.position = (x, y);
        Ok(())
    }

    fn open_sub_menu(&mut self, _menu: &MenuDefinition, _child: Child, _x: i32, _y: i32) -> Result<()> {
        // Sub-menus are built up front and opened by the system.
        Ok(())
    }

    fn close_menu(&mut self) -> Result<()> {
        self.destroy();
        Ok(())
    }

    fn menu_state(&self) -> Result<Vec<usize>> {
        Ok(Vec::new())
    }

    fn pointer(&self) -> Result<Pointer> {
        let mut pt = POINT::default();
        unsafe { GetCursorPos(&mut pt) }.context("GetCursorPos")?;
        // Shift held while choosing keeps the menu open.
        let shift = unsafe { GetKeyState(VK_SHIFT.0 as i32) } < 0;
        Ok(Pointer {
            x: pt.x,
            y: pt.y,
            button: if shift { Button::Adjust } else { Button::Select },
        })
    }

    fn set_icon_shaded(&mut self, toolbar: WindowHandle, icon: ToolbarIcon, shaded: bool) -> Result<()> {
        tracing::trace!(toolbar = toolbar.0, ?icon, shaded, "no toolbar to update");
        Ok(())
    }

    fn window_extent(&self, window: WindowHandle) -> Result<Extent> {
        let mut rect = RECT::default();
        let hwnd = HWND(window.0 as usize as *mut core::ffi::c_void);
        unsafe { GetWindowRect(hwnd, &mut rect) }
            .with_context(|| format!("GetWindowRect({})", window.0))?;
        Ok(Extent {
            x0: rect.left,
            y0: rect.top,
            x1: rect.right,
            y1: rect.bottom,
        })
    }

    fn screen_size(&self) -> Result<(i32, i32)> {
        let size = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
        if size.0 == 0 || size.1 == 0 {
            return Err(anyhow!("GetSystemMetrics returned no screen size"));
        }
        Ok(size)
    }

    fn warn_user(&mut self, message: &str, detail: &str) {
        let text = wide(&format!("{message}\n\n{detail}"));
        let caption = wide("menutray");
        unsafe {
            let _ = MessageBoxW(
                Some(self.hwnd),
                PCWSTR::from_raw(text.as_ptr()),
                PCWSTR::from_raw(caption.as_ptr()),
                MB_OK | MB_ICONWARNING,
            );
        }
    }

    fn builds_sub_menus(&self) -> bool {
        true
    }
}

fn append(menu: HMENU, flags: MENU_ITEM_FLAGS, id: usize, label: &[u16]) -> Result<()> {
    unsafe { AppendMenuW(menu, flags, id, PCWSTR::from_raw(label.as_ptr())) }?;
    Ok(())
}

fn wide(s: &str) -> Vec<u16> {
    let mut v: Vec<u16> = s.encode_utf16().collect();
    v.push(0);
    v
}
