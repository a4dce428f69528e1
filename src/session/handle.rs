use crate::action::Action;
use crate::browser::{Browser, Toolbar, TreeKind, WindowHandle};
use crate::menu::Dialog;
use crate::toolkit::Toolkit;

use super::prepare::{is_object_save, is_page_save, Refresh};
use super::{Effect, MenuSession};

fn toolbar_mut(browser: &mut dyn Browser, window: WindowHandle) -> Option<&mut Toolbar> {
    if browser.browser_window(window).is_some() {
        return browser.browser_window_mut(window)?.toolbar.as_mut();
    }
    browser.tree_window_mut(window)?.toolbar.as_mut()
}

impl<T: Toolkit> MenuSession<T> {
    /// Performs `action` for `window`. Dialogs open at the pointer when
    /// `open_at_pointer` is set, otherwise centred on their owner.
    ///
    /// Returns false when the action does not apply to `window`.
    pub fn handle_action(
        &mut self,
        browser: &mut dyn Browser,
        window: WindowHandle,
        action: Action,
        open_at_pointer: bool,
    ) -> bool {
        let handled = self.dispatch(browser, window, action, open_at_pointer);
        if !handled {
            tracing::debug!(%action, window = window.0, "action not handled");
        }
        handled
    }

    fn dispatch(
        &mut self,
        browser: &mut dyn Browser,
        window: WindowHandle,
        action: Action,
        at_pointer: bool,
    ) -> bool {
        let bw = browser.browser_window(window).cloned();
        let is_tree = browser.tree_window(window).is_some();
        let document = bw.as_ref().and_then(|b| b.document.clone());

        match action {
            Action::HelpOpenContents => self.emit(Effect::OpenHelpPage("docs")),
            Action::HelpOpenGuide => self.emit(Effect::OpenHelpPage("guide")),
            Action::HelpOpenInformation => self.emit(Effect::OpenHelpPage("info")),
            Action::HelpOpenAbout => {
                let url = format!("{}/about", self.options.docs_url);
                self.emit(Effect::OpenUrl(url))
            }
            Action::HelpLaunchInteractive => self.emit(Effect::LaunchInteractiveHelp),

            Action::HistoryShowLocal => {
                if !bw.as_ref().is_some_and(|b| b.history.is_some()) {
                    return false;
                }
                self.emit(Effect::ShowLocalHistory { window, at_pointer })
            }
            Action::HistoryShowGlobal => self.emit(Effect::ShowTree(TreeKind::GlobalHistory)),

            Action::HotlistAddUrl => {
                let Some(doc) = document.filter(|_| browser.hotlist_available()) else {
                    return false;
                };
                self.emit(Effect::AddToHotlist {
                    title: doc.title,
                    url: doc.url,
                })
            }
            Action::HotlistShow => self.emit(Effect::ShowTree(TreeKind::Hotlist)),

            Action::BrowserPageInfo
            | Action::BrowserPrint
            | Action::BrowserScaleView
            | Action::BrowserFindText => {
                if document.is_none() {
                    return false;
                }
                let dialog = match action {
                    Action::BrowserPageInfo => Dialog::PageInfo,
                    Action::BrowserPrint => Dialog::Print,
                    Action::BrowserScaleView => Dialog::Zoom,
                    _ => Dialog::Search,
                };
                self.open_dialog(&*browser, window, action, dialog, Some(window), at_pointer)
            }
            Action::BrowserNewWindow => {
                let Some(doc) = document else {
                    return false;
                };
                self.emit(Effect::NewWindow {
                    url: doc.url,
                    clone_of: window,
                })
            }
            Action::BrowserViewSource => {
                if document.is_none() {
                    return false;
                }
                self.emit(Effect::ViewSource(window))
            }

            Action::BrowserObjectInfo => {
                if self.object.is_none() {
                    return false;
                }
                self.open_dialog(&*browser, window, action, Dialog::ObjectInfo, Some(window), at_pointer)
            }
            Action::BrowserObjectReload => {
                let Some(object) = self.object.clone() else {
                    return false;
                };
                self.emit(Effect::ReloadObject {
                    window,
                    url: object.url,
                })
            }

            _ if is_object_save(action) => {
                if self.object.is_none() {
                    return false;
                }
                self.open_dialog(&*browser, window, action, Dialog::SaveAs, Some(window), at_pointer)
            }
            _ if is_page_save(action) => {
                if document.is_none() {
                    return false;
                }
                self.open_dialog(&*browser, window, action, Dialog::SaveAs, Some(window), at_pointer)
            }
            Action::HotlistExport | Action::HistoryExport => {
                if !is_tree {
                    return false;
                }
                self.open_dialog(&*browser, window, action, Dialog::SaveAs, Some(window), at_pointer)
            }

            Action::BrowserNavigateHome => {
                if bw.is_none() {
                    return false;
                }
                let url = match self.options.homepage_url.as_deref().filter(|u| !u.is_empty()) {
                    Some(home) => home.to_string(),
                    None => format!("{}/intro_{}", self.options.docs_url, self.options.language),
                };
                self.emit(Effect::Navigate { window, url })
            }
            Action::BrowserNavigateBack => {
                if !bw.as_ref().is_some_and(|b| b.history.is_some()) {
                    return false;
                }
                self.emit(Effect::HistoryBack(window))
            }
            Action::BrowserNavigateForward => {
                if !bw.as_ref().is_some_and(|b| b.history.is_some()) {
                    return false;
                }
                self.emit(Effect::HistoryForward(window))
            }
            Action::BrowserNavigateReload | Action::BrowserNavigateReloadAll => {
                if bw.is_none() {
                    return false;
                }
                self.emit(Effect::Reload {
                    window,
                    all: action == Action::BrowserNavigateReloadAll,
                })
            }
            Action::BrowserNavigateStop => {
                if bw.is_none() {
                    return false;
                }
                self.emit(Effect::Stop(window))
            }
            Action::BrowserNavigateUrl => {
                self.open_dialog(&*browser, window, action, Dialog::OpenUrl, None, at_pointer)
            }

            Action::BrowserImagesBackground => {
                let Some(target) = browser.browser_window_mut(window) else {
                    return false;
                };
                target.options.background_images = !target.options.background_images;
                self.emit(Effect::RedrawWindow(window))
            }
            Action::BrowserBufferAnims => {
                let Some(target) = browser.browser_window_mut(window) else {
                    return false;
                };
                target.options.buffer_animations = !target.options.buffer_animations;
                true
            }
            Action::BrowserBufferAll => {
                let Some(target) = browser.browser_window_mut(window) else {
                    return false;
                };
                target.options.buffer_everything = !target.options.buffer_everything;
                true
            }
            Action::BrowserSaveView => {
                if bw.is_none() {
                    return false;
                }
                self.emit(Effect::SaveWindowDefaults(window));
                self.emit(Effect::SaveOptions)
            }
            Action::BrowserWindowDefault => {
                if bw.is_none() {
                    return false;
                }
                self.capture_window_default(window);
                self.emit(Effect::SaveOptions)
            }
            Action::BrowserWindowStagger => {
                self.options.window_stagger = !self.options.window_stagger;
                self.emit(Effect::SaveOptions)
            }
            Action::BrowserWindowCopy => {
                self.options.window_size_clone = !self.options.window_size_clone;
                self.emit(Effect::SaveOptions)
            }
            Action::BrowserWindowReset => {
                self.options.window_screen_width = 0;
                self.options.window_screen_height = 0;
                self.emit(Effect::SaveOptions)
            }

            Action::TreeNewFolder | Action::TreeNewLink => {
                if !is_tree {
                    return false;
                }
                let dialog = if action == Action::TreeNewFolder {
                    Dialog::Folder
                } else {
                    Dialog::Entry
                };
                self.open_dialog(&*browser, window, action, dialog, Some(window), at_pointer)
            }
            Action::TreeExpandAll
            | Action::TreeExpandFolders
            | Action::TreeExpandLinks
            | Action::TreeCollapseAll
            | Action::TreeCollapseFolders
            | Action::TreeCollapseLinks => {
                if !is_tree {
                    return false;
                }
                let expand = matches!(
                    action,
                    Action::TreeExpandAll | Action::TreeExpandFolders | Action::TreeExpandLinks
                );
                self.emit(Effect::TreeExpansion {
                    window,
                    expand,
                    folders: !matches!(action, Action::TreeExpandLinks | Action::TreeCollapseLinks),
                    links: !matches!(action, Action::TreeExpandFolders | Action::TreeCollapseFolders),
                })
            }
            // The edit dialog opens as the entry's sub-window.
            Action::TreeSelectionEdit => is_tree,
            Action::TreeSelectionLaunch
            | Action::TreeSelectionDelete
            | Action::TreeSelectionReset
            | Action::TreeSelectAll
            | Action::TreeClearSelection => {
                if !is_tree {
                    return false;
                }
                self.emit(match action {
                    Action::TreeSelectionLaunch => Effect::TreeLaunchSelected(window),
                    Action::TreeSelectionDelete => Effect::TreeDeleteSelected(window),
                    Action::TreeSelectionReset => Effect::TreeResetUsage(window),
                    Action::TreeSelectAll => Effect::TreeSelectAll(window),
                    _ => Effect::TreeClearSelection(window),
                })
            }

            Action::ToolbarButtons
            | Action::ToolbarAddressBar
            | Action::ToolbarThrobber
            | Action::ToolbarStatusBar
            | Action::ToolbarEdit => self.toggle_toolbar(browser, window, action),

            Action::ApplicationQuit => self.emit(Effect::Quit),
            Action::ChoicesShow => self.emit(Effect::OpenChoices),

            _ => false,
        }
    }

    fn emit(&mut self, effect: Effect) -> bool {
        self.effects.push(effect);
        true
    }

    fn open_dialog(
        &mut self,
        browser: &dyn Browser,
        window: WindowHandle,
        action: Action,
        dialog: Dialog,
        owner: Option<WindowHandle>,
        at_pointer: bool,
    ) -> bool {
        self.prepare(browser, window, action, Refresh::ALL);
        self.emit(Effect::OpenDialog {
            dialog,
            owner,
            at_pointer,
        })
    }

    /// Records the geometry of `window` as the default for new windows.
    fn capture_window_default(&mut self, window: WindowHandle) {
        let screen = match self.toolkit.screen_size() {
            Ok(screen) => screen,
            Err(err) => {
                self.report("WimpError", err);
                return;
            }
        };
        let extent = match self.toolkit.window_extent(window) {
            Ok(extent) => extent,
            Err(err) => {
                self.report("WimpError", err);
                return;
            }
        };
        self.options.window_screen_width = screen.0;
        self.options.window_screen_height = screen.1;
        self.options.window_x = extent.x0;
        self.options.window_y = extent.y0;
        self.options.window_width = extent.width();
        self.options.window_height = extent.height();
    }

    fn toggle_toolbar(&mut self, browser: &mut dyn Browser, window: WindowHandle, action: Action) -> bool {
        let Some(toolbar) = toolbar_mut(browser, window) else {
            return false;
        };
        let handle = toolbar.handle;
        match action {
            Action::ToolbarEdit => {
                toolbar.editor = !toolbar.editor;
                return self.emit(Effect::ToggleToolbarEditor(handle));
            }
            Action::ToolbarButtons => toolbar.display_buttons = !toolbar.display_buttons,
            Action::ToolbarAddressBar => toolbar.display_url = !toolbar.display_url,
            Action::ToolbarThrobber => toolbar.display_throbber = !toolbar.display_throbber,
            _ => toolbar.display_status = !toolbar.display_status,
        }
        let focus = action == Action::ToolbarAddressBar && toolbar.display_url;
        self.emit(Effect::RefreshToolbar(handle));
        if focus {
            self.emit(Effect::FocusAddressBar(handle));
        }
        true
    }
}
