mod catalog;
mod dynamic;
mod spec;
mod tree;

use std::fmt;

pub use catalog::{static_specs, ImageQuality, Menus, ProxyAuth};
pub use dynamic::{form_select, languages, url_suggest, FormOption, FormSelectControl, LanguageMenu};
pub use spec::{MenuSpec, SpecItem};
pub use tree::{
    ActionBinding, Child, DefineError, EntryRef, MenuDefinition, MenuEntry, MenuNode, NodeId,
};

/// Dialog windows that a menu entry can open in place of a sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialog {
    Info,
    OpenUrl,
    PageInfo,
    SaveAs,
    Print,
    ObjectInfo,
    Zoom,
    Search,
    Folder,
    Entry,
}

impl Dialog {
    pub fn name(self) -> &'static str {
        match self {
            Dialog::Info => "Info",
            Dialog::OpenUrl => "OpenUrl",
            Dialog::PageInfo => "PageInfo",
            Dialog::SaveAs => "SaveAs",
            Dialog::Print => "Print",
            Dialog::ObjectInfo => "ObjectInfo",
            Dialog::Zoom => "Zoom",
            Dialog::Search => "Search",
            Dialog::Folder => "Folder",
            Dialog::Entry => "Entry",
        }
    }
}

impl fmt::Display for Dialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every menu the front end can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MenuId {
    Iconbar,
    Browser,
    Hotlist,
    GlobalHistory,
    ImageQuality,
    BrowserToolbar,
    TreeToolbar,
    ProxyAuth,
    Languages,
    UrlSuggest,
    FormSelect,
}

impl MenuId {
    pub const ALL: [MenuId; 11] = [
        MenuId::Iconbar,
        MenuId::Browser,
        MenuId::Hotlist,
        MenuId::GlobalHistory,
        MenuId::ImageQuality,
        MenuId::BrowserToolbar,
        MenuId::TreeToolbar,
        MenuId::ProxyAuth,
        MenuId::Languages,
        MenuId::UrlSuggest,
        MenuId::FormSelect,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MenuId::Iconbar => "iconbar",
            MenuId::Browser => "browser",
            MenuId::Hotlist => "hotlist",
            MenuId::GlobalHistory => "history",
            MenuId::ImageQuality => "image-quality",
            MenuId::BrowserToolbar => "browser-toolbar",
            MenuId::TreeToolbar => "tree-toolbar",
            MenuId::ProxyAuth => "proxy-auth",
            MenuId::Languages => "languages",
            MenuId::UrlSuggest => "url-suggest",
            MenuId::FormSelect => "form-select",
        }
    }

    pub fn decode(name: &str) -> Option<MenuId> {
        MenuId::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
