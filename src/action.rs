use std::fmt;

/// A user-triggerable command, independent of the menu entry or toolbar icon
/// that triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Non-interactive label or sub-menu parent.
    NoAction,

    HelpOpenContents,
    HelpOpenGuide,
    HelpOpenInformation,
    HelpOpenAbout,
    HelpLaunchInteractive,

    HistoryShowLocal,
    HistoryShowGlobal,

    HotlistAddUrl,
    HotlistShow,

    BrowserPage,
    BrowserPageInfo,
    BrowserPrint,
    BrowserNewWindow,
    BrowserViewSource,

    BrowserObject,
    BrowserObjectInfo,
    BrowserObjectReload,

    BrowserObjectSave,
    BrowserObjectExportSprite,
    BrowserObjectSaveUrlUri,
    BrowserObjectSaveUrlUrl,
    BrowserObjectSaveUrlText,
    BrowserSave,
    BrowserSaveComplete,
    BrowserExportDraw,
    BrowserExportText,
    BrowserSaveUrlUri,
    BrowserSaveUrlUrl,
    BrowserSaveUrlText,
    HotlistExport,
    HistoryExport,

    BrowserNavigateHome,
    BrowserNavigateBack,
    BrowserNavigateForward,
    BrowserNavigateReload,
    BrowserNavigateReloadAll,
    BrowserNavigateStop,
    BrowserNavigateUrl,

    BrowserScaleView,
    BrowserFindText,
    BrowserImagesForeground,
    BrowserImagesBackground,
    BrowserBufferAnims,
    BrowserBufferAll,
    BrowserSaveView,
    BrowserWindowDefault,
    BrowserWindowStagger,
    BrowserWindowCopy,
    BrowserWindowReset,

    TreeNewFolder,
    TreeNewLink,
    TreeExpandAll,
    TreeExpandFolders,
    TreeExpandLinks,
    TreeCollapseAll,
    TreeCollapseFolders,
    TreeCollapseLinks,
    TreeSelection,
    TreeSelectionEdit,
    TreeSelectionLaunch,
    TreeSelectionDelete,
    TreeSelectionReset,
    TreeSelectAll,
    TreeClearSelection,

    ToolbarButtons,
    ToolbarAddressBar,
    ToolbarThrobber,
    ToolbarStatusBar,
    ToolbarEdit,

    ApplicationQuit,
    ChoicesShow,
}

impl Action {
    pub const ALL: [Action; 72] = [
        Action::NoAction,
        Action::HelpOpenContents,
        Action::HelpOpenGuide,
        Action::HelpOpenInformation,
        Action::HelpOpenAbout,
        Action::HelpLaunchInteractive,
        Action::HistoryShowLocal,
        Action::HistoryShowGlobal,
        Action::HotlistAddUrl,
        Action::HotlistShow,
        Action::BrowserPage,
        Action::BrowserPageInfo,
        Action::BrowserPrint,
        Action::BrowserNewWindow,
        Action::BrowserViewSource,
        Action::BrowserObject,
        Action::BrowserObjectInfo,
        Action::BrowserObjectReload,
        Action::BrowserObjectSave,
        Action::BrowserObjectExportSprite,
        Action::BrowserObjectSaveUrlUri,
        Action::BrowserObjectSaveUrlUrl,
        Action::BrowserObjectSaveUrlText,
        Action::BrowserSave,
        Action::BrowserSaveComplete,
        Action::BrowserExportDraw,
        Action::BrowserExportText,
        Action::BrowserSaveUrlUri,
        Action::BrowserSaveUrlUrl,
        Action::BrowserSaveUrlText,
        Action::HotlistExport,
        Action::HistoryExport,
        Action::BrowserNavigateHome,
        Action::BrowserNavigateBack,
        Action::BrowserNavigateForward,
        Action::BrowserNavigateReload,
        Action::BrowserNavigateReloadAll,
        Action::BrowserNavigateStop,
        Action::BrowserNavigateUrl,
        Action::BrowserScaleView,
        Action::BrowserFindText,
        Action::BrowserImagesForeground,
        Action::BrowserImagesBackground,
        Action::BrowserBufferAnims,
        Action::BrowserBufferAll,
        Action::BrowserSaveView,
        Action::BrowserWindowDefault,
        Action::BrowserWindowStagger,
        Action::BrowserWindowCopy,
        Action::BrowserWindowReset,
        Action::TreeNewFolder,
        Action::TreeNewLink,
        Action::TreeExpandAll,
        Action::TreeExpandFolders,
        Action::TreeExpandLinks,
        Action::TreeCollapseAll,
        Action::TreeCollapseFolders,
        Action::TreeCollapseLinks,
        Action::TreeSelection,
        Action::TreeSelectionEdit,
        Action::TreeSelectionLaunch,
        Action::TreeSelectionDelete,
        Action::TreeSelectionReset,
        Action::TreeSelectAll,
        Action::TreeClearSelection,
        Action::ToolbarButtons,
        Action::ToolbarAddressBar,
        Action::ToolbarThrobber,
        Action::ToolbarStatusBar,
        Action::ToolbarEdit,
        Action::ApplicationQuit,
        Action::ChoicesShow,
    ];

    pub fn is_none(self) -> bool {
        self == Action::NoAction
    }

    /// Stable identifier used by the CLI and in logs.
    pub fn name(self) -> &'static str {
        match self {
            Action::NoAction => "NoAction",
            Action::HelpOpenContents => "HelpOpenContents",
            Action::HelpOpenGuide => "HelpOpenGuide",
            Action::HelpOpenInformation => "HelpOpenInformation",
            Action::HelpOpenAbout => "HelpOpenAbout",
            Action::HelpLaunchInteractive => "HelpLaunchInteractive",
            Action::HistoryShowLocal => "HistoryShowLocal",
            Action::HistoryShowGlobal => "HistoryShowGlobal",
            Action::HotlistAddUrl => "HotlistAddUrl",
            Action::HotlistShow => "HotlistShow",
            Action::BrowserPage => "BrowserPage",
            Action::BrowserPageInfo => "BrowserPageInfo",
            Action::BrowserPrint => "BrowserPrint",
            Action::BrowserNewWindow => "BrowserNewWindow",
            Action::BrowserViewSource => "BrowserViewSource",
            Action::BrowserObject => "BrowserObject",
            Action::BrowserObjectInfo => "BrowserObjectInfo",
            Action::BrowserObjectReload => "BrowserObjectReload",
            Action::BrowserObjectSave => "BrowserObjectSave",
            Action::BrowserObjectExportSprite => "BrowserObjectExportSprite",
            Action::BrowserObjectSaveUrlUri => "BrowserObjectSaveUrlUri",
            Action::BrowserObjectSaveUrlUrl => "BrowserObjectSaveUrlUrl",
            Action::BrowserObjectSaveUrlText => "BrowserObjectSaveUrlText",
            Action::BrowserSave => "BrowserSave",
            Action::BrowserSaveComplete => "BrowserSaveComplete",
            Action::BrowserExportDraw => "BrowserExportDraw",
            Action::BrowserExportText => "BrowserExportText",
            Action::BrowserSaveUrlUri => "BrowserSaveUrlUri",
            Action::BrowserSaveUrlUrl => "BrowserSaveUrlUrl",
            Action::BrowserSaveUrlText => "BrowserSaveUrlText",
            Action::HotlistExport => "HotlistExport",
            Action::HistoryExport => "HistoryExport",
            Action::BrowserNavigateHome => "BrowserNavigateHome",
            Action::BrowserNavigateBack => "BrowserNavigateBack",
            Action::BrowserNavigateForward => "BrowserNavigateForward",
            Action::BrowserNavigateReload => "BrowserNavigateReload",
            Action::BrowserNavigateReloadAll => "BrowserNavigateReloadAll",
            Action::BrowserNavigateStop => "BrowserNavigateStop",
            Action::BrowserNavigateUrl => "BrowserNavigateUrl",
            Action::BrowserScaleView => "BrowserScaleView",
            Action::BrowserFindText => "BrowserFindText",
            Action::BrowserImagesForeground => "BrowserImagesForeground",
            Action::BrowserImagesBackground => "BrowserImagesBackground",
            Action::BrowserBufferAnims => "BrowserBufferAnims",
            Action::BrowserBufferAll => "BrowserBufferAll",
            Action::BrowserSaveView => "BrowserSaveView",
            Action::BrowserWindowDefault => "BrowserWindowDefault",
            Action::BrowserWindowStagger => "BrowserWindowStagger",
            Action::BrowserWindowCopy => "BrowserWindowCopy",
            Action::BrowserWindowReset => "BrowserWindowReset",
            Action::TreeNewFolder => "TreeNewFolder",
            Action::TreeNewLink => "TreeNewLink",
            Action::TreeExpandAll => "TreeExpandAll",
            Action::TreeExpandFolders => "TreeExpandFolders",
            Action::TreeExpandLinks => "TreeExpandLinks",
            Action::TreeCollapseAll => "TreeCollapseAll",
            Action::TreeCollapseFolders => "TreeCollapseFolders",
            Action::TreeCollapseLinks => "TreeCollapseLinks",
            Action::TreeSelection => "TreeSelection",
            Action::TreeSelectionEdit => "TreeSelectionEdit",
            Action::TreeSelectionLaunch => "TreeSelectionLaunch",
            Action::TreeSelectionDelete => "TreeSelectionDelete",
            Action::TreeSelectionReset => "TreeSelectionReset",
            Action::TreeSelectAll => "TreeSelectAll",
            Action::TreeClearSelection => "TreeClearSelection",
            Action::ToolbarButtons => "ToolbarButtons",
            Action::ToolbarAddressBar => "ToolbarAddressBar",
            Action::ToolbarThrobber => "ToolbarThrobber",
            Action::ToolbarStatusBar => "ToolbarStatusBar",
            Action::ToolbarEdit => "ToolbarEdit",
            Action::ApplicationQuit => "ApplicationQuit",
            Action::ChoicesShow => "ChoicesShow",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes an action from its [`Action::name`]. Case-insensitive.
pub fn decode(name: &str) -> Option<Action> {
    Action::ALL
        .iter()
        .copied()
        .find(|action| action.name().eq_ignore_ascii_case(name.trim()))
}
