//! The menu interaction context owned by the UI event loop.
//!
//! A [`MenuSession`] tracks which menu is open for which window and routes
//! selections to [`MenuSession::handle_action`]. Before any panel becomes
//! visible its entries are refreshed through [`MenuSession::prepare_action`].
//! Everything the menus cannot do themselves is queued as an [`Effect`] and
//! collected with [`MenuSession::take_effects`].

mod effect;
mod handle;
mod prepare;

use std::fmt::Display;

use crate::browser::{Browser, ObjectInfo, WindowHandle};
use crate::config::Options;
use crate::menu::{
    form_select, url_suggest, Child, FormSelectControl, ImageQuality, MenuDefinition, MenuId,
    Menus, NodeId, ProxyAuth,
};
use crate::messages::{Lookup, Messages};
use crate::toolkit::{Button, Toolkit};

pub use effect::{DialogPrep, Effect, SaveKind};
use prepare::Refresh;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMenu {
    pub id: MenuId,
    pub window: WindowHandle,
    pub open: bool,
    pub x: i32,
    pub y: i32,
}

pub struct MenuSession<T: Toolkit> {
    toolkit: T,
    menus: Menus,
    messages: Messages,
    options: Options,
    current: Option<OpenMenu>,
    /// Object under the pointer when the browser menu was opened.
    object: Option<ObjectInfo>,
    form_control: Option<FormSelectControl>,
    effects: Vec<Effect>,
}

impl<T: Toolkit> MenuSession<T> {
    pub fn new(toolkit: T, menus: Menus, messages: Messages, options: Options) -> Self {
        Self {
            toolkit,
            menus,
            messages,
            options,
            current: None,
            object: None,
            form_control: None,
            effects: Vec::new(),
        }
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn toolkit_mut(&mut self) -> &mut T {
        &mut self.toolkit
    }

    pub fn menus(&self) -> &Menus {
        &self.menus
    }

    pub fn menu(&self, id: MenuId) -> Option<&MenuDefinition> {
        self.menus.get(id)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn current(&self) -> Option<OpenMenu> {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some_and(|c| c.open)
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Swaps the message table and re-translates every menu in place.
    pub fn set_messages(&mut self, messages: Messages) {
        self.menus.retranslate(&messages);
        self.messages = messages;
    }

    /// Opens menu `id` for `window` at screen position `(x, y)`. Returns
    /// whether the menu opened.
    pub fn create(&mut self, browser: &dyn Browser, id: MenuId, x: i32, y: i32, window: WindowHandle) -> bool {
        if self.current.is_none() && id == MenuId::Browser {
            self.object = browser.object_at(window, x, y);
        }
        self.current = Some(OpenMenu {
            id,
            window,
            open: false,
            x,
            y,
        });

        if id == MenuId::UrlSuggest {
            match url_suggest(&browser.recent_urls(), &self.messages) {
                Some(definition) => self.menus.insert(MenuId::UrlSuggest, definition),
                None => {
                    tracing::debug!("no recent URLs to suggest");
                    self.current = None;
                    return false;
                }
            }
        } else {
            let Some(definition) = self.menus.get(id) else {
                tracing::warn!(menu = %id, "menu is not defined");
                self.current = None;
                return false;
            };
            // Sub-menus built together with the root are never announced
            // by a warning, so they are prepared up front.
            let actions = if self.toolkit.builds_sub_menus() {
                definition
                    .nodes()
                    .flat_map(|(node, _)| definition.actions_in(node))
                    .collect::<Vec<_>>()
            } else {
                definition.actions_in(NodeId::ROOT)
            };
            for action in actions {
                self.prepare(browser, window, action, Refresh::NONE);
            }
        }

        if let Some(current) = self.current.as_mut() {
            current.open = true;
        }
        let Some(definition) = self.menus.get(id) else {
            return false;
        };
        if let Err(err) = self.toolkit.open_menu(definition, x, y) {
            self.report("MenuError", err);
            self.closed(browser);
            return false;
        }
        tracing::debug!(menu = %id, window = window.0, "menu opened");
        true
    }

    /// Cleans up after the menu closed, or closes it forcibly.
    pub fn closed(&mut self, browser: &dyn Browser) {
        let Some(current) = self.current.take() else {
            return;
        };
        if let Err(err) = self.toolkit.close_menu() {
            self.report("MenuError", err);
        }
        if browser.tree_window(current.window).is_some() {
            self.effects.push(Effect::TreeMenuClosed(current.window));
        }
    }

    /// Handles a choice from the open menu. `path` holds the chosen entry
    /// index at each level, outermost first.
    pub fn selection(&mut self, browser: &mut dyn Browser, path: &[usize]) {
        let Some(current) = self.current else {
            tracing::debug!("selection without an open menu");
            return;
        };
        let Some(definition) = self.menus.get(current.id) else {
            return;
        };
        let Some(&first) = path.first() else {
            return;
        };
        let entry = definition.resolve(path);
        let action = entry.map_or(crate::action::Action::NoAction, |e| definition.action_at(e));
        let text = entry
            .and_then(|e| definition.entry(e))
            .map(|e| e.text.clone());
        let child = entry.and_then(|e| definition.entry(e)).and_then(|e| e.child);

        if !action.is_none() {
            self.handle_action(browser, current.window, action, false);
        } else if let Some(Child::Dialog(dialog)) = child {
            // Entries that only lead to a dialog open it when chosen.
            let owner = browser
                .browser_window(current.window)
                .map(|_| current.window);
            self.effects.push(Effect::OpenDialog {
                dialog,
                owner,
                at_pointer: false,
            });
        }

        match current.id {
            MenuId::UrlSuggest => {
                if let Some(url) = text {
                    self.effects.push(Effect::Navigate {
                        window: current.window,
                        url: url.clone(),
                    });
                    self.effects.push(Effect::AddRecentUrl(url));
                }
            }
            MenuId::ProxyAuth => {
                if let Some(choice) = ProxyAuth::from_index(first) {
                    self.effects.push(Effect::ProxyAuthSelected(choice));
                }
            }
            MenuId::ImageQuality => {
                if let Some(quality) = ImageQuality::from_index(first) {
                    self.effects.push(Effect::ImageQualitySelected(quality));
                }
            }
            MenuId::Languages => {
                if let Some(code) = self.menus.language_code(first) {
                    self.effects.push(Effect::LanguageSelected(code.to_string()));
                }
            }
            MenuId::FormSelect => {
                if let Some(control) = &self.form_control {
                    self.effects.push(Effect::FormSelect {
                        window: current.window,
                        control: control.id,
                        option: first,
                    });
                }
            }
            _ => {}
        }

        let pointer = match self.toolkit.pointer() {
            Ok(pointer) => pointer,
            Err(err) => {
                self.report("WimpError", err);
                self.closed(&*browser);
                return;
            }
        };
        if pointer.button != Button::Adjust {
            self.closed(&*browser);
            return;
        }

        // Adjust keeps the menu open: refresh every panel along the path.
        let mut actions = Vec::new();
        if let Some(definition) = self.menus.get(current.id) {
            let mut node = NodeId::ROOT;
            actions.extend(definition.actions_in(node));
            for &index in path {
                let child = definition
                    .node(node)
                    .and_then(|panel| panel.entries.get(index))
                    .and_then(|e| e.child);
                let Some(Child::Menu(next)) = child else {
                    break;
                };
                node = next;
                actions.extend(definition.actions_in(node));
            }
        }
        for action in actions {
            self.prepare(&*browser, current.window, action, Refresh::NONE);
        }
        if self.current.is_none() {
            return;
        }

        if current.id == MenuId::FormSelect {
            if let Some(control) = self.form_control.clone() {
                self.create_form_select_menu(&*browser, current.window, control);
            }
        } else {
            self.create(&*browser, current.id, current.x, current.y, current.window);
        }
    }

    /// The pointer moved onto an entry that opens a sub-menu or dialog.
    /// Prepares what is about to appear, then opens it at `(x, y)`.
    pub fn menu_warning(&mut self, browser: &dyn Browser, path: &[usize], x: i32, y: i32) {
        let Some(current) = self.current else {
            return;
        };
        let Some(definition) = self.menus.get(current.id) else {
            return;
        };
        let Some(entry) = definition.resolve(path) else {
            return;
        };
        let Some(child) = definition.entry(entry).and_then(|e| e.child) else {
            return;
        };

        match child {
            Child::Menu(node) => {
                for action in definition.actions_in(node) {
                    self.prepare(browser, current.window, action, Refresh::NONE);
                }
            }
            Child::Dialog(_) => {
                let action = definition.action_at(entry);
                if !action.is_none() {
                    self.prepare(browser, current.window, action, Refresh::ALL);
                }
            }
        }

        // A failed reopen while preparing abandons the menu.
        if !self.is_open() {
            return;
        }
        // Preparing may re-point a dialog link.
        let Some(definition) = self.menus.get(current.id) else {
            return;
        };
        let Some(child) = definition.entry(entry).and_then(|e| e.child) else {
            return;
        };
        if let Err(err) = self.toolkit.open_sub_menu(definition, child, x, y) {
            self.report("MenuError", err);
            self.closed(browser);
        }
    }

    /// The page content changed: forget the object and form control the
    /// current menu refers to.
    pub fn objects_moved(&mut self, browser: &dyn Browser) {
        self.form_control = None;
        self.object = None;

        let window = self.current.map(|c| c.window).unwrap_or_default();
        self.prepare_action(browser, window, crate::action::Action::BrowserObject, false);
        if self.current.is_some_and(|c| c.id == MenuId::FormSelect) {
            self.closed(browser);
        }
    }

    /// Opens the option menu for a form select control at the pointer.
    pub fn create_form_select_menu(
        &mut self,
        browser: &dyn Browser,
        window: WindowHandle,
        control: FormSelectControl,
    ) -> bool {
        self.form_control = None;
        let Some(definition) = form_select(&control, &self.messages) else {
            return false;
        };
        self.menus.insert(MenuId::FormSelect, definition);

        let pointer = match self.toolkit.pointer() {
            Ok(pointer) => pointer,
            Err(err) => {
                self.report("WimpError", err);
                self.closed(browser);
                return false;
            }
        };
        self.form_control = Some(control);
        self.create(browser, MenuId::FormSelect, pointer.x, pointer.y, window)
    }

    /// Ticks the image quality entry matching `quality` and clears the rest.
    pub fn prepare_image_quality(&mut self, quality: ImageQuality) {
        let Some(definition) = self.menus.get_mut(MenuId::ImageQuality) else {
            return;
        };
        let count = definition.root().entries.len();
        for index in 0..count {
            let entry = crate::menu::EntryRef {
                node: NodeId::ROOT,
                index,
            };
            if let Some(entry) = definition.entry_mut(entry) {
                entry.ticked = index == quality.index();
            }
        }
    }

    fn current_definition_mut(&mut self) -> Option<&mut MenuDefinition> {
        let id = self.current?.id;
        self.menus.get_mut(id)
    }

    /// Checksum of the visible entries of the open menu, zero when closed.
    fn checksum(&mut self) -> u64 {
        let Some(current) = self.current.filter(|c| c.open) else {
            return 0;
        };
        let path = match self.toolkit.menu_state() {
            Ok(path) => path,
            Err(err) => {
                self.report("MenuError", err);
                return 0;
            }
        };
        self.menus
            .get(current.id)
            .map_or(0, |definition| definition.checksum(&path))
    }

    fn report(&mut self, key: &str, err: impl Display) {
        tracing::warn!(error = %err, "{key}");
        let message = self.messages.lookup(key).to_string();
        self.toolkit.warn_user(&message, &err.to_string());
    }
}
