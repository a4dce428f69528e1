#![cfg_attr(windows, windows_subsystem = "windows")]

use anyhow::Result;

#[cfg(not(windows))]
fn main() -> Result<()> {
    anyhow::bail!("menutray is only supported on Windows");
}

#[cfg(windows)]
fn main() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    windows_tray::run()
}

#[cfg(windows)]
mod windows_tray {
    use std::mem::size_of;

    use anyhow::{anyhow, Context, Result};
    use menutree::{
        browser::{BrowserModel, WindowHandle},
        config,
        menu::{MenuId, Menus},
        session::{Effect, MenuSession},
        toolkit::WinToolkit,
    };
    use windows::{
        core::{w, Error as WinError, PCWSTR},
        Win32::{
            Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, POINT, WPARAM},
            System::LibraryLoader::GetModuleHandleW,
            UI::{
                Shell::{
                    ShellExecuteW, Shell_NotifyIconW, NIF_ICON, NIF_MESSAGE, NIF_TIP, NIM_ADD,
                    NIM_DELETE, NIM_MODIFY, NOTIFYICONDATAW, NOTIFY_ICON_MESSAGE,
                },
                WindowsAndMessaging::{
                    DefWindowProcW, DispatchMessageW, GetCursorPos, GetMessageW, LoadIconW,
                    PostQuitMessage, RegisterClassW, TranslateMessage, CREATESTRUCTW, IDI_APPLICATION,
                    MSG, SW_SHOWNORMAL, WM_LBUTTONUP, WM_NCCREATE, WM_RBUTTONUP, WM_USER, WNDCLASSW,
                    WS_OVERLAPPED,
                },
            },
        },
    };

    const WM_TRAYICON: u32 = WM_USER + 1;
    /// The icon bar menu is not tied to a browser window.
    const ICONBAR: WindowHandle = WindowHandle(0);

    pub fn run() -> Result<()> {
        unsafe {
            let hinstance = HINSTANCE(GetModuleHandleW(None).context("GetModuleHandleW")?.0);

            let class_name = w!("menutray.hidden-window");
            let wc = WNDCLASSW {
                lpfnWndProc: Some(wndproc),
                hInstance: hinstance.into(),
                lpszClassName: class_name,
                ..Default::default()
            };
            let atom = RegisterClassW(&wc);
            if atom == 0 {
                return Err(anyhow!("RegisterClassW failed"));
            }

            let mut state = Box::new(State::new());

            let hwnd = windows::Win32::UI::WindowsAndMessaging::CreateWindowExW(
                Default::default(),
                class_name,
                w!("menutray"),
                WS_OVERLAPPED,
                0,
                0,
                0,
                0,
                None,
                None,
                Some(hinstance),
                Some(state.as_mut() as *mut _ as *const _),
            )
            .context("CreateWindowExW")?;

            state.hwnd = Some(hwnd);
            state.load_session().context("load menus")?;
            state.install_tray_icon().context("install tray icon")?;
            // State is now owned by the window (freed on quit).
            let _ = Box::into_raw(state);

            let mut msg = MSG::default();
            while GetMessageW(&mut msg, None, 0, 0).into() {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
        Ok(())
    }

    struct State {
        hwnd: Option<HWND>,
        tray: NOTIFYICONDATAW,
        session: Option<MenuSession<WinToolkit>>,
        browser: BrowserModel,
        last_error: Option<String>,
    }

    impl State {
        fn new() -> Self {
            Self {
                hwnd: None,
                tray: NOTIFYICONDATAW::default(),
                session: None,
                browser: BrowserModel::new(),
                last_error: None,
            }
        }

        fn hwnd(&self) -> Result<HWND> {
            self.hwnd.ok_or_else(|| anyhow!("internal error: hwnd not set yet"))
        }

        fn load_session(&mut self) -> Result<()> {
            let hwnd = self.hwnd()?;
            let cfg = config::load_optional()?;
            let messages = config::load_messages(cfg.as_ref())?;
            let mut menus = Menus::new(&messages).context("compiling menus")?;
            if let Some(resources) = cfg.as_ref().and_then(|c| c.resources.as_deref()) {
                menus
                    .load_languages(resources, &messages)
                    .with_context(|| format!("loading languages from {}", resources.display()))?;
            }
            let options = cfg.map(|c| c.options).unwrap_or_default();
            self.session = Some(MenuSession::new(WinToolkit::new(hwnd), menus, messages, options));
            Ok(())
        }

        fn install_tray_icon(&mut self) -> Result<()> {
            let hwnd = self.hwnd()?;
            let icon = unsafe { LoadIconW(None, IDI_APPLICATION) }.unwrap_or_default();

            let mut nid = NOTIFYICONDATAW::default();
            nid.cbSize = size_of::<NOTIFYICONDATAW>() as u32;
            nid.hWnd = hwnd;
            nid.uID = 1;
            nid.uFlags = NIF_MESSAGE | NIF_TIP | NIF_ICON;
            nid.uCallbackMessage = WM_TRAYICON;
            nid.hIcon = icon;
            write_tip(&mut nid, "menutray");

            shell_notify_icon(NIM_ADD, &nid).context("Shell_NotifyIconW(NIM_ADD)")?;
            self.tray = nid;
            Ok(())
        }

        fn update_tooltip(&mut self) {
            let tip = match self.last_error.as_deref() {
                None => "menutray",
                Some(e) => e,
            };
            write_tip(&mut self.tray, tip);
            unsafe {
                let _ = Shell_NotifyIconW(NIM_MODIFY, &self.tray);
            }
        }

        /// Opens the icon bar menu and keeps tracking it while selections
        /// are made with Shift held.
        fn show_menu_and_handle(&mut self) -> Result<()> {
            let Some(session) = self.session.as_mut() else {
                return Ok(());
            };

            let mut pt = POINT::default();
            unsafe { GetCursorPos(&mut pt) }.context("GetCursorPos")?;
            if !session.create(&self.browser, MenuId::Iconbar, pt.x, pt.y, ICONBAR) {
                return Ok(());
            }

            while session.is_open() {
                match session.toolkit_mut().track() {
                    Some(path) => session.selection(&mut self.browser, &path),
                    None => session.closed(&self.browser),
                }
            }

            let effects = session.take_effects();
            for effect in effects {
                self.apply(effect)?;
            }
            self.last_error = None;
            self.update_tooltip();
            Ok(())
        }

        fn apply(&mut self, effect: Effect) -> Result<()> {
            let Some(session) = self.session.as_ref() else {
                return Ok(());
            };
            match effect {
                Effect::Quit => {
                    self.remove_tray_icon();
                    unsafe { PostQuitMessage(0) };
                }
                Effect::OpenUrl(url) => shell_open(&url).with_context(|| format!("open {url}"))?,
                Effect::OpenHelpPage(page) => {
                    let url = format!("{}/{page}", session.options().docs_url);
                    shell_open(&url).with_context(|| format!("open {url}"))?;
                }
                Effect::OpenChoices => {
                    let path = config::ensure_config_file_exists().context("ensure config exists")?;
                    let path = path
                        .to_str()
                        .ok_or_else(|| anyhow!("Non-UTF-8 path: {}", path.display()))?;
                    shell_open(path).with_context(|| format!("open {path}"))?;
                }
                Effect::SaveOptions => {
                    config::save_options(session.options()).context("save options")?;
                }
                other => tracing::debug!(?other, "no browser attached, effect dropped"),
            }
            Ok(())
        }

        fn remove_tray_icon(&mut self) {
            unsafe {
                let _ = Shell_NotifyIconW(NIM_DELETE, &self.tray);
            }
        }
    }

    impl Drop for State {
        fn drop(&mut self) {
            self.remove_tray_icon();
        }
    }

    unsafe extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
        match msg {
            WM_NCCREATE => {
                let cs = &*(lparam.0 as *const CREATESTRUCTW);
                let state_ptr = cs.lpCreateParams as *mut State;
                windows::Win32::UI::WindowsAndMessaging::SetWindowLongPtrW(
                    hwnd,
                    windows::Win32::UI::WindowsAndMessaging::GWLP_USERDATA,
                    state_ptr as isize,
                );
                return DefWindowProcW(hwnd, msg, wparam, lparam);
            }
            WM_TRAYICON => {
                let state = get_state(hwnd);
                if state.is_null() {
                    return DefWindowProcW(hwnd, msg, wparam, lparam);
                }
                let state = &mut *state;

                let evt = lparam.0 as u32;
                if evt == WM_RBUTTONUP || evt == WM_LBUTTONUP {
                    if let Err(e) = state.show_menu_and_handle() {
                        tracing::warn!(error = %e, "menu action failed");
                        state.last_error = Some(e.to_string());
                        state.update_tooltip();
                    }
                    return LRESULT(0);
                }
            }
            windows::Win32::UI::WindowsAndMessaging::WM_NCDESTROY => {
                let state = get_state(hwnd);
                if !state.is_null() {
                    windows::Win32::UI::WindowsAndMessaging::SetWindowLongPtrW(
                        hwnd,
                        windows::Win32::UI::WindowsAndMessaging::GWLP_USERDATA,
                        0,
                    );
                    drop(Box::from_raw(state));
                }
            }
            _ => {}
        }

        DefWindowProcW(hwnd, msg, wparam, lparam)
    }

    fn get_state(hwnd: HWND) -> *mut State {
        unsafe {
            let ptr = windows::Win32::UI::WindowsAndMessaging::GetWindowLongPtrW(
                hwnd,
                windows::Win32::UI::WindowsAndMessaging::GWLP_USERDATA,
            );
            ptr as *mut State
        }
    }

    fn shell_open(target: &str) -> Result<()> {
        let wtarget = wide(target);
        unsafe {
            let h = ShellExecuteW(
                None,
                w!("open"),
                PCWSTR::from_raw(wtarget.as_ptr()),
                PCWSTR::null(),
                PCWSTR::null(),
                SW_SHOWNORMAL,
            );
            // Values <= 32 indicate an error.
            if (h.0 as isize) <= 32 {
                return Err(anyhow!("ShellExecuteW failed ({})", h.0 as isize));
            }
        }
        Ok(())
    }

    fn wide(s: &str) -> Vec<u16> {
        let mut v: Vec<u16> = s.encode_utf16().collect();
        v.push(0);
        v
    }

    fn write_tip(nid: &mut NOTIFYICONDATAW, tip: &str) {
        let mut buf = [0u16; 128];
        for (i, c) in tip.encode_utf16().take(127).enumerate() {
            buf[i] = c;
        }
        nid.szTip = buf;
    }

    fn shell_notify_icon(action: NOTIFY_ICON_MESSAGE, nid: &NOTIFYICONDATAW) -> Result<()> {
        let ok = unsafe { Shell_NotifyIconW(action, nid) };
        if !ok.as_bool() {
            return Err(anyhow!(WinError::from_thread()));
        }
        Ok(())
    }
}
