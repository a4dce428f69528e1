use crate::action::Action;
use crate::browser::{Browser, BrowserWindow, Document, Toolbar, TreeWindow, WindowHandle};
use crate::menu::Dialog;
use crate::toolkit::{Toolkit, ToolbarIcon};

use super::{DialogPrep, Effect, MenuSession, SaveKind};

/// Which outside state a prepare pass may touch besides the menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refresh {
    /// Load dialog contents.
    pub dialogs: bool,
    /// Push shaded state to toolbar icons.
    pub toolbar: bool,
}

impl Refresh {
    pub const NONE: Refresh = Refresh {
        dialogs: false,
        toolbar: false,
    };
    pub const ALL: Refresh = Refresh {
        dialogs: true,
        toolbar: true,
    };

    fn sub_windows(update: bool) -> Self {
        if update {
            Self::ALL
        } else {
            Self::NONE
        }
    }
}

/// The window a menu was opened for, resolved once per prepare.
struct Target<'a> {
    browser: Option<&'a BrowserWindow>,
    tree: Option<&'a TreeWindow>,
    toolbar: Option<&'a Toolbar>,
}

impl<'a> Target<'a> {
    fn resolve(browser: &'a dyn Browser, window: WindowHandle) -> Self {
        if let Some(bw) = browser.browser_window(window) {
            return Self {
                browser: Some(bw),
                tree: None,
                toolbar: bw.toolbar.as_ref(),
            };
        }
        let tree = browser.tree_window(window);
        Self {
            browser: None,
            tree,
            toolbar: tree.and_then(|t| t.toolbar.as_ref()),
        }
    }

    fn document(&self) -> Option<&'a Document> {
        self.browser.and_then(|b| b.document.as_ref())
    }

    fn browser_bar(&self) -> Option<WindowHandle> {
        self.toolbar
            .filter(|t| t.tracks_browser_icons())
            .map(|t| t.handle)
    }

    fn tree_bar(&self) -> Option<WindowHandle> {
        self.toolbar.filter(|t| t.tracks_tree_icons()).map(|t| t.handle)
    }
}

fn save_kind(action: Action) -> Option<SaveKind> {
    Some(match action {
        Action::BrowserObjectSave => SaveKind::ObjectOriginal,
        Action::BrowserObjectExportSprite => SaveKind::ObjectNative,
        Action::BrowserObjectSaveUrlUri => SaveKind::LinkUri,
        Action::BrowserObjectSaveUrlUrl => SaveKind::LinkUrl,
        Action::BrowserObjectSaveUrlText => SaveKind::LinkText,
        Action::BrowserSave => SaveKind::Source,
        Action::BrowserSaveComplete => SaveKind::Complete,
        Action::BrowserExportDraw => SaveKind::Draw,
        Action::BrowserExportText => SaveKind::Text,
        Action::BrowserSaveUrlUri => SaveKind::LinkUri,
        Action::BrowserSaveUrlUrl => SaveKind::LinkUrl,
        Action::BrowserSaveUrlText => SaveKind::LinkText,
        Action::HotlistExport => SaveKind::HotlistExport,
        Action::HistoryExport => SaveKind::HistoryExport,
        _ => return None,
    })
}

pub(super) fn is_object_save(action: Action) -> bool {
    matches!(
        action,
        Action::BrowserObjectSave
            | Action::BrowserObjectExportSprite
            | Action::BrowserObjectSaveUrlUri
            | Action::BrowserObjectSaveUrlUrl
            | Action::BrowserObjectSaveUrlText
    )
}

pub(super) fn is_page_save(action: Action) -> bool {
    matches!(
        action,
        Action::BrowserSave
            | Action::BrowserSaveComplete
            | Action::BrowserExportDraw
            | Action::BrowserExportText
            | Action::BrowserSaveUrlUri
            | Action::BrowserSaveUrlUrl
            | Action::BrowserSaveUrlText
    )
}

impl<T: Toolkit> MenuSession<T> {
    /// Brings every entry bound to `action` in the current menu up to date
    /// with the state of `window`. With `update_sub_windows` set, dialogs and
    /// toolbar icons tied to the action are refreshed too.
    ///
    /// An open menu whose visible entries changed is reopened in place.
    pub fn prepare_action(
        &mut self,
        browser: &dyn Browser,
        window: WindowHandle,
        action: Action,
        update_sub_windows: bool,
    ) {
        self.prepare(browser, window, action, Refresh::sub_windows(update_sub_windows));
    }

    /// Refreshes the toolbar icons of a browser window after navigation.
    pub fn prepare_navigate(&mut self, browser: &dyn Browser, window: WindowHandle) {
        let refresh = Refresh {
            dialogs: false,
            toolbar: true,
        };
        for action in [
            Action::BrowserNavigateStop,
            Action::BrowserNavigateReloadAll,
            Action::BrowserNavigateBack,
            Action::BrowserNavigateForward,
            Action::HotlistShow,
            Action::BrowserSave,
            Action::BrowserPrint,
            Action::BrowserScaleView,
            Action::BrowserFindText,
        ] {
            self.prepare(browser, window, action, refresh);
        }

        let suggest = Target::resolve(browser, window).browser_bar();
        let empty = browser.recent_urls().is_empty();
        self.set_icon(suggest, refresh, ToolbarIcon::Suggest, empty);
    }

    pub(super) fn prepare(
        &mut self,
        browser: &dyn Browser,
        window: WindowHandle,
        action: Action,
        refresh: Refresh,
    ) {
        let before = self.checksum();
        if !self.apply(browser, window, action, refresh) {
            return;
        }
        if !self.is_open() || self.checksum() == before {
            return;
        }

        let Some(current) = self.current else {
            return;
        };
        let Some(definition) = self.menus.get(current.id) else {
            return;
        };
        tracing::debug!(%action, menu = %current.id, "menu changed while open, reopening");
        if let Err(err) = self.toolkit.open_menu(definition, current.x, current.y) {
            self.report("MenuError", err);
            self.closed(browser);
        }
    }

    /// Returns false when `action` has no state to prepare.
    fn apply(&mut self, browser: &dyn Browser, window: WindowHandle, action: Action, refresh: Refresh) -> bool {
        let target = Target::resolve(browser, window);
        let document = target.document();
        let object = self.object.clone();

        match action {
            Action::HelpLaunchInteractive => {
                let running = browser.interactive_help_available();
                self.shade(action, running);
                self.tick(action, running);
            }

            Action::HistoryShowLocal => {
                let available = target.browser.is_some_and(|b| {
                    b.history
                        .is_some_and(|h| b.document.is_some() || h.back || h.forward)
                });
                self.shade(action, !available);
            }
            Action::HistoryShowGlobal => {
                self.shade(action, !browser.global_history_available());
            }

            Action::HotlistAddUrl => {
                self.shade(action, document.is_none() || !browser.hotlist_available());
            }
            Action::HotlistShow => {
                let missing = !browser.hotlist_available();
                self.shade(action, missing);
                self.set_icon(target.browser_bar(), refresh, ToolbarIcon::Bookmark, missing);
            }

            Action::BrowserPageInfo => {
                if let (true, Some(doc)) = (refresh.dialogs, document) {
                    self.prepare_dialog(DialogPrep::PageInfo {
                        title: doc.title.clone().unwrap_or_else(|| "-".to_string()),
                        url: doc.url.clone(),
                        mime_type: doc.mime_type.clone().unwrap_or_else(|| "-".to_string()),
                    });
                }
                self.shade(action, document.is_none());
            }
            Action::BrowserPrint => {
                if refresh.dialogs && document.is_some() {
                    self.prepare_dialog(DialogPrep::Print(window));
                }
                self.shade(action, document.is_none());
                self.set_icon(target.browser_bar(), refresh, ToolbarIcon::Print, document.is_none());
            }
            Action::BrowserPage | Action::BrowserNewWindow | Action::BrowserViewSource => {
                self.shade(action, document.is_none());
            }

            Action::BrowserObject | Action::BrowserObjectReload => {
                self.shade(action, object.is_none());
            }
            Action::BrowserObjectInfo => {
                if let (true, Some(object)) = (refresh.dialogs, object.as_ref()) {
                    self.prepare_dialog(DialogPrep::ObjectInfo {
                        url: object.url.clone(),
                        target: object.href.clone().unwrap_or_else(|| "-".to_string()),
                        mime_type: object.mime_type.clone().unwrap_or_else(|| "-".to_string()),
                    });
                }
                self.shade(action, object.is_none());
            }

            _ if is_object_save(action) => {
                if let (true, Some(object), Some(kind)) = (refresh.dialogs, object.as_ref(), save_kind(action)) {
                    self.prepare_dialog(DialogPrep::Save {
                        kind,
                        url: Some(object.url.clone()),
                    });
                }
                self.shade(action, object.is_none());
            }
            _ if is_page_save(action) => {
                if let (true, Some(doc), Some(kind)) = (refresh.dialogs, document, save_kind(action)) {
                    self.prepare_dialog(DialogPrep::Save {
                        kind,
                        url: Some(doc.url.clone()),
                    });
                }
                self.shade(action, document.is_none());
                if action == Action::BrowserSave {
                    self.set_icon(target.browser_bar(), refresh, ToolbarIcon::Save, document.is_none());
                }
            }
            Action::HotlistExport | Action::HistoryExport => {
                if let (true, Some(_), Some(kind)) = (refresh.dialogs, target.tree, save_kind(action)) {
                    self.prepare_dialog(DialogPrep::Save { kind, url: None });
                }
            }

            Action::BrowserNavigateBack => {
                let blocked = !target.browser.and_then(|b| b.history).is_some_and(|h| h.back);
                self.shade(action, blocked);
                self.set_icon(target.browser_bar(), refresh, ToolbarIcon::Back, blocked);
            }
            Action::BrowserNavigateForward => {
                let blocked = !target.browser.and_then(|b| b.history).is_some_and(|h| h.forward);
                self.shade(action, blocked);
                self.set_icon(target.browser_bar(), refresh, ToolbarIcon::Forward, blocked);
            }
            Action::BrowserNavigateReload | Action::BrowserNavigateReloadAll => {
                let blocked = !target
                    .browser
                    .is_some_and(|b| b.document.is_some() && !b.loading);
                self.shade(action, blocked);
                self.set_icon(target.browser_bar(), refresh, ToolbarIcon::Reload, blocked);
            }
            Action::BrowserNavigateStop => {
                let active = target
                    .browser
                    .is_some_and(|b| b.loading || b.document.as_ref().is_some_and(|d| !d.done));
                self.shade(action, !active);
                self.set_icon(target.browser_bar(), refresh, ToolbarIcon::Stop, !active);
            }
            Action::BrowserNavigateUrl => {
                if refresh.dialogs {
                    self.prepare_dialog(DialogPrep::OpenUrl);
                }
            }

            Action::BrowserScaleView => {
                if refresh.dialogs && document.is_some() {
                    self.prepare_dialog(DialogPrep::Zoom(window));
                }
                self.shade(action, document.is_none());
                self.set_icon(target.browser_bar(), refresh, ToolbarIcon::Scale, document.is_none());
            }
            Action::BrowserFindText => {
                if refresh.dialogs && document.is_some() {
                    self.prepare_dialog(DialogPrep::Search(window));
                }
                self.set_icon(target.browser_bar(), refresh, ToolbarIcon::Search, document.is_none());
            }
            Action::BrowserImagesForeground => {
                self.shade(action, true);
                self.tick(action, true);
            }
            Action::BrowserImagesBackground => {
                if let Some(bw) = target.browser {
                    self.tick(action, bw.options.background_images);
                }
            }
            Action::BrowserBufferAnims => {
                if let Some(bw) = target.browser {
                    let everything = bw.options.buffer_everything;
                    self.shade(action, everything);
                    self.tick(action, bw.options.buffer_animations || everything);
                }
            }
            Action::BrowserBufferAll => {
                if let Some(bw) = target.browser {
                    self.tick(action, bw.options.buffer_everything);
                }
            }
            Action::BrowserWindowStagger => {
                let unsaved = self.options.window_screen_width == 0;
                let stagger = self.options.window_stagger;
                self.shade(action, unsaved);
                self.tick(action, unsaved || stagger);
            }
            Action::BrowserWindowCopy => {
                let clone = self.options.window_size_clone;
                self.tick(action, clone);
            }
            Action::BrowserWindowReset => {
                let unsaved = self.options.window_screen_width == 0;
                self.shade(action, unsaved);
            }

            Action::TreeNewFolder => {
                if refresh.dialogs {
                    self.prepare_dialog(DialogPrep::Folder { editing: false });
                }
            }
            Action::TreeNewLink => {
                if refresh.dialogs {
                    self.prepare_dialog(DialogPrep::Entry { editing: false });
                }
            }
            Action::TreeExpandAll
            | Action::TreeExpandFolders
            | Action::TreeExpandLinks
            | Action::TreeCollapseAll
            | Action::TreeCollapseFolders
            | Action::TreeCollapseLinks
            | Action::TreeSelectAll => {
                if let Some(tree) = target.tree {
                    self.shade(action, !tree.has_children);
                }
            }
            Action::TreeSelection => {
                if let Some(tree) = target.tree {
                    let idle = !tree.selection_active();
                    self.shade(action, idle);
                    let bar = target.tree_bar();
                    self.set_icon(bar, refresh, ToolbarIcon::Delete, idle);
                    self.set_icon(bar, refresh, ToolbarIcon::Launch, idle);
                }
            }
            Action::TreeSelectionEdit => {
                if let Some(selected) = target.tree.and_then(|t| t.selected) {
                    let (dialog, prep) = if selected.folder {
                        (Dialog::Folder, DialogPrep::Folder { editing: true })
                    } else {
                        (Dialog::Entry, DialogPrep::Entry { editing: true })
                    };
                    if let Some(definition) = self.current_definition_mut() {
                        definition.set_dialog(action, dialog);
                    }
                    if refresh.dialogs {
                        self.prepare_dialog(prep);
                    }
                }
            }
            Action::TreeSelectionLaunch
            | Action::TreeSelectionDelete
            | Action::TreeSelectionReset
            | Action::TreeClearSelection => {
                if let Some(tree) = target.tree {
                    self.shade(action, !tree.selection_active());
                }
            }

            Action::ToolbarButtons => {
                let bar = target.toolbar;
                self.shade(action, !bar.is_some_and(|t| !t.editor));
                self.tick(action, bar.is_some_and(|t| t.display_buttons || t.editor));
            }
            Action::ToolbarAddressBar => {
                self.shade(action, target.toolbar.is_none());
                self.tick(action, target.toolbar.is_some_and(|t| t.display_url));
            }
            Action::ToolbarThrobber => {
                self.shade(action, target.toolbar.is_none());
                self.tick(action, target.toolbar.is_some_and(|t| t.display_throbber));
            }
            Action::ToolbarStatusBar => {
                self.shade(action, target.toolbar.is_none());
                self.tick(action, target.toolbar.is_some_and(|t| t.display_status));
            }
            Action::ToolbarEdit => {
                self.shade(action, target.toolbar.is_none());
                self.tick(action, target.toolbar.is_some_and(|t| t.editor));
            }

            _ => {
                tracing::trace!(%action, "nothing to prepare");
                return false;
            }
        }
        true
    }

    fn shade(&mut self, action: Action, shaded: bool) {
        if let Some(definition) = self.current_definition_mut() {
            definition.set_shaded(action, shaded);
        }
    }

    fn tick(&mut self, action: Action, ticked: bool) {
        if let Some(definition) = self.current_definition_mut() {
            definition.set_ticked(action, ticked);
        }
    }

    fn prepare_dialog(&mut self, prep: DialogPrep) {
        self.effects.push(Effect::PrepareDialog(prep));
    }

    fn set_icon(&mut self, toolbar: Option<WindowHandle>, refresh: Refresh, icon: ToolbarIcon, shaded: bool) {
        if !refresh.toolbar {
            return;
        }
        let Some(toolbar) = toolbar else {
            return;
        };
        if let Err(err) = self.toolkit.set_icon_shaded(toolbar, icon, shaded) {
            self.report("WimpError", err);
        }
    }
}
