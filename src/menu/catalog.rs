use std::{collections::HashMap, path::Path};

use anyhow::Result;

use crate::action::Action;
use crate::messages::Lookup;

use super::{dynamic, DefineError, Dialog, MenuDefinition, MenuId, MenuSpec};

fn iconbar() -> MenuSpec {
    MenuSpec::new("AppName")
        .dialog("Info", Action::NoAction, Dialog::Info)
        .item("AppHelp", Action::HelpOpenContents)
        .item("Open", Action::NoAction)
        .dialog("Open.OpenURL", Action::BrowserNavigateUrl, Dialog::OpenUrl)
        .item("Open.HotlistShow", Action::HotlistShow)
        .item("Open.HistGlobal", Action::HistoryShowGlobal)
        .item("Choices", Action::ChoicesShow)
        .item("Quit", Action::ApplicationQuit)
}

fn browser() -> MenuSpec {
    MenuSpec::new("AppName")
        .item("Page", Action::BrowserPage)
        .dialog("Page.PageInfo", Action::BrowserPageInfo, Dialog::PageInfo)
        .dialog("Page.Save", Action::BrowserSave, Dialog::SaveAs)
        .dialog("Page.SaveComp", Action::BrowserSaveComplete, Dialog::SaveAs)
        .item("Page.Export", Action::NoAction)
        .dialog("Page.Export.Draw", Action::BrowserExportDraw, Dialog::SaveAs)
        .dialog("Page.Export.Text", Action::BrowserExportText, Dialog::SaveAs)
        .item("Page.SaveURL", Action::NoAction)
        .dialog("Page.SaveURL.URI", Action::BrowserSaveUrlUri, Dialog::SaveAs)
        .dialog("Page.SaveURL.URL", Action::BrowserSaveUrlUrl, Dialog::SaveAs)
        .dialog("Page.SaveURL.LinkText", Action::BrowserSaveUrlText, Dialog::SaveAs)
        .dialog("Page.Print_", Action::BrowserPrint, Dialog::Print)
        .item("Page.NewWindow", Action::BrowserNewWindow)
        .item("Page.ViewSrc", Action::BrowserViewSource)
        .item("Object", Action::BrowserObject)
        .dialog("Object.ObjInfo", Action::BrowserObjectInfo, Dialog::ObjectInfo)
        .dialog("Object.ObjSave", Action::BrowserObjectSave, Dialog::SaveAs)
        .item("Object.Export", Action::NoAction)
        .dialog("Object.Export.Sprite", Action::BrowserObjectExportSprite, Dialog::SaveAs)
        .item("Object.SaveURL_", Action::NoAction)
        .dialog("Object.SaveURL.URI", Action::BrowserObjectSaveUrlUri, Dialog::SaveAs)
        .dialog("Object.SaveURL.URL", Action::BrowserObjectSaveUrlUrl, Dialog::SaveAs)
        .dialog("Object.SaveURL.LinkText", Action::BrowserObjectSaveUrlText, Dialog::SaveAs)
        .item("Object.ObjReload", Action::BrowserObjectReload)
        .item("Navigate", Action::NoAction)
        .item("Navigate.Home", Action::BrowserNavigateHome)
        .item("Navigate.Back", Action::BrowserNavigateBack)
        .item("Navigate.Forward_", Action::BrowserNavigateForward)
        .item("Navigate.Reload", Action::BrowserNavigateReloadAll)
        .item("Navigate.Stop", Action::BrowserNavigateStop)
        .item("View", Action::NoAction)
        .dialog("View.ScaleView", Action::BrowserScaleView, Dialog::Zoom)
        .item("View.Images", Action::NoAction)
        .item("View.Images.ForeImg", Action::BrowserImagesForeground)
        .item("View.Images.BackImg", Action::BrowserImagesBackground)
        .item("View.Toolbars", Action::NoAction)
        .item("View.Toolbars.ToolButtons", Action::ToolbarButtons)
        .item("View.Toolbars.ToolAddress", Action::ToolbarAddressBar)
        .item("View.Toolbars.ToolThrob", Action::ToolbarThrobber)
        .item("View.Toolbars.ToolStatus_", Action::ToolbarStatusBar)
        .item("View.Toolbars.EditToolbar", Action::ToolbarEdit)
        .item("View.Render_", Action::NoAction)
        .item("View.Render.RenderAnims", Action::BrowserBufferAnims)
        .item("View.Render.RenderAll", Action::BrowserBufferAll)
        .item("View.OptDefault", Action::BrowserSaveView)
        .item("Utilities", Action::NoAction)
        .item("Utilities.Hotlist", Action::HotlistShow)
        .item("Utilities.Hotlist.HotlistAdd", Action::HotlistAddUrl)
        .item("Utilities.Hotlist.HotlistShow", Action::HotlistShow)
        .item("Utilities.History", Action::HistoryShowGlobal)
        .item("Utilities.History.HistLocal", Action::HistoryShowLocal)
        .item("Utilities.History.HistGlobal", Action::HistoryShowGlobal)
        .dialog("Utilities.FindText", Action::BrowserFindText, Dialog::Search)
        .item("Utilities.Window", Action::NoAction)
        .item("Utilities.Window.WindowSave", Action::BrowserWindowDefault)
        .item("Utilities.Window.WindowStagr", Action::BrowserWindowStagger)
        .item("Utilities.Window.WindowSize_", Action::BrowserWindowCopy)
        .item("Utilities.Window.WindowReset", Action::BrowserWindowReset)
        .item("Help", Action::HelpOpenContents)
        .item("Help.HelpContent", Action::HelpOpenContents)
        .item("Help.HelpGuide", Action::HelpOpenGuide)
        .item("Help.HelpInfo_", Action::HelpOpenInformation)
        .item("Help.HelpAbout_", Action::HelpOpenAbout)
        .item("Help.HelpInter", Action::HelpLaunchInteractive)
}

/// Shared layout of the hotlist and global history tree menus.
fn tree_menu(title: &str, with_new: bool, with_edit: bool) -> MenuSpec {
    let mut spec = MenuSpec::new(title).item(title, Action::NoAction);
    if with_new {
        spec = spec
            .item(format!("{title}.New"), Action::NoAction)
            .dialog(format!("{title}.New.Folder"), Action::TreeNewFolder, Dialog::Folder)
            .dialog(format!("{title}.New.Link"), Action::TreeNewLink, Dialog::Entry);
    }
    let export = if with_new {
        Action::HotlistExport
    } else {
        Action::HistoryExport
    };
    spec = spec
        .dialog(format!("{title}.Export_"), export, Dialog::SaveAs)
        .item(format!("{title}.Expand"), Action::TreeExpandAll)
        .item(format!("{title}.Expand.All"), Action::TreeExpandAll)
        .item(format!("{title}.Expand.Folders"), Action::TreeExpandFolders)
        .item(format!("{title}.Expand.Links"), Action::TreeExpandLinks)
        .item(format!("{title}.Collapse"), Action::TreeCollapseAll)
        .item(format!("{title}.Collapse.All"), Action::TreeCollapseAll)
        .item(format!("{title}.Collapse.Folders"), Action::TreeCollapseFolders)
        .item(format!("{title}.Collapse.Links"), Action::TreeCollapseLinks)
        .item(format!("{title}.Toolbars"), Action::NoAction)
        .item(format!("{title}.Toolbars.ToolButtons_"), Action::ToolbarButtons)
        .item(format!("{title}.Toolbars.EditToolbar"), Action::ToolbarEdit)
        .item("Selection", Action::TreeSelection);
    if with_edit {
        // Re-pointed to the folder dialog when a folder is selected.
        spec = spec.dialog("Selection.Edit", Action::TreeSelectionEdit, Dialog::Entry);
    }
    spec = spec
        .item("Selection.Launch", Action::TreeSelectionLaunch)
        .item("Selection.Delete", Action::TreeSelectionDelete);
    if with_edit {
        spec = spec.item("Selection.ResetUsage", Action::TreeSelectionReset);
    }
    spec.item("SelectAll", Action::TreeSelectAll)
        .item("Clear", Action::TreeClearSelection)
}

fn image_quality() -> MenuSpec {
    MenuSpec::new("Display")
        .item("ImgStyle0", Action::NoAction)
        .item("ImgStyle1", Action::NoAction)
        .item("ImgStyle2", Action::NoAction)
        .item("ImgStyle3", Action::NoAction)
}

fn browser_toolbar() -> MenuSpec {
    MenuSpec::new("Toolbar")
        .item("Toolbars", Action::NoAction)
        .item("Toolbars.ToolButtons", Action::ToolbarButtons)
        .item("Toolbars.ToolAddress", Action::ToolbarAddressBar)
        .item("Toolbars.ToolThrob", Action::ToolbarThrobber)
        .item("Toolbars.ToolStatus", Action::ToolbarStatusBar)
        .item("EditToolbar", Action::ToolbarEdit)
}

fn tree_toolbar() -> MenuSpec {
    MenuSpec::new("Toolbar")
        .item("Toolbars", Action::NoAction)
        .item("Toolbars.ToolButtons", Action::ToolbarButtons)
        .item("EditToolbar", Action::ToolbarEdit)
}

fn proxy_auth() -> MenuSpec {
    MenuSpec::new("ProxyAuth")
        .item("ProxyNone", Action::NoAction)
        .item("ProxyBasic", Action::NoAction)
        .item("ProxyNTLM", Action::NoAction)
}

/// The statically authored menus, in the order they are defined at startup.
pub fn static_specs() -> Vec<(MenuId, MenuSpec)> {
    vec![
        (MenuId::Iconbar, iconbar()),
        (MenuId::Browser, browser()),
        (MenuId::Hotlist, tree_menu("Hotlist", true, true)),
        (MenuId::GlobalHistory, tree_menu("History", false, false)),
        (MenuId::ImageQuality, image_quality()),
        (MenuId::BrowserToolbar, browser_toolbar()),
        (MenuId::TreeToolbar, tree_toolbar()),
        (MenuId::ProxyAuth, proxy_auth()),
    ]
}

/// Image plotting quality, one per entry of the image quality menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageQuality {
    OsSpriteOp,
    Plain,
    Dither,
    ErrorDiffuse,
}

impl ImageQuality {
    pub fn index(self) -> usize {
        match self {
            ImageQuality::OsSpriteOp => 0,
            ImageQuality::Plain => 1,
            ImageQuality::Dither => 2,
            ImageQuality::ErrorDiffuse => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(ImageQuality::OsSpriteOp),
            1 => Some(ImageQuality::Plain),
            2 => Some(ImageQuality::Dither),
            3 => Some(ImageQuality::ErrorDiffuse),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyAuth {
    None,
    Basic,
    Ntlm,
}

impl ProxyAuth {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(ProxyAuth::None),
            1 => Some(ProxyAuth::Basic),
            2 => Some(ProxyAuth::Ntlm),
            _ => None,
        }
    }
}

/// Every compiled menu of the front end, keyed by [`MenuId`].
#[derive(Debug, Clone, Default)]
pub struct Menus {
    definitions: HashMap<MenuId, MenuDefinition>,
    language_codes: Vec<String>,
}

impl Menus {
    /// Compiles the static catalog.
    pub fn new(messages: &dyn Lookup) -> Result<Self, DefineError> {
        let mut definitions = HashMap::new();
        for (id, spec) in static_specs() {
            definitions.insert(id, MenuDefinition::compile(&spec, messages)?);
        }
        Ok(Self {
            definitions,
            language_codes: Vec::new(),
        })
    }

    /// Adds the languages menu built from `resources`. A directory without any
    /// recognised language leaves the menu undefined.
    pub fn load_languages(&mut self, resources: &Path, messages: &dyn Lookup) -> Result<()> {
        match dynamic::languages(resources, messages)? {
            Some(menu) => {
                self.definitions.insert(MenuId::Languages, menu.definition);
                self.language_codes = menu.codes;
            }
            None => {
                tracing::warn!(path = %resources.display(), "no languages found");
                self.definitions.remove(&MenuId::Languages);
                self.language_codes.clear();
            }
        }
        Ok(())
    }

    pub fn get(&self, id: MenuId) -> Option<&MenuDefinition> {
        self.definitions.get(&id)
    }

    pub fn get_mut(&mut self, id: MenuId) -> Option<&mut MenuDefinition> {
        self.definitions.get_mut(&id)
    }

    pub fn insert(&mut self, id: MenuId, definition: MenuDefinition) {
        self.definitions.insert(id, definition);
    }

    pub fn ids(&self) -> Vec<MenuId> {
        let mut ids = self.definitions.keys().copied().collect::<Vec<_>>();
        ids.sort_unstable();
        ids
    }

    pub fn language_code(&self, index: usize) -> Option<&str> {
        self.language_codes.get(index).map(String::as_str)
    }

    pub fn retranslate(&mut self, messages: &dyn Lookup) {
        for definition in self.definitions.values_mut() {
            definition.retranslate(messages);
        }
    }
}
