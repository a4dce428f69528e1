use pretty_assertions::assert_eq;

use menutree::action::Action;
use menutree::browser::{
    BrowserModel, BrowserWindow, Document, HistoryNav, ObjectInfo, SelectedNode, Toolbar,
    ToolbarKind, TreeKind, TreeWindow, WindowHandle,
};
use menutree::config::Options;
use menutree::menu::{Child, Dialog, FormOption, FormSelectControl, ImageQuality, MenuEntry, MenuId, Menus};
use menutree::messages::Messages;
use menutree::session::{DialogPrep, Effect, MenuSession};
use menutree::toolkit::{Button, Extent, HeadlessToolkit, ToolbarIcon, ToolkitCall};

const PAGE: WindowHandle = WindowHandle(1);
const PAGE_BAR: WindowHandle = WindowHandle(2);
const TREE: WindowHandle = WindowHandle(10);

fn session() -> MenuSession<HeadlessToolkit> {
    let messages = Messages::new();
    let menus = Menus::new(&messages).unwrap();
    MenuSession::new(HeadlessToolkit::new(), menus, messages, Options::default())
}

fn loaded_page() -> BrowserWindow {
    BrowserWindow {
        document: Some(Document {
            url: "http://example.org/".to_string(),
            title: Some("Example".to_string()),
            mime_type: Some("text/html".to_string()),
            done: true,
        }),
        history: Some(HistoryNav {
            back: true,
            forward: false,
        }),
        toolbar: Some(Toolbar::new(ToolbarKind::Browser, PAGE_BAR)),
        ..BrowserWindow::default()
    }
}

fn browser_with(window: BrowserWindow) -> BrowserModel {
    let mut browser = BrowserModel::new();
    browser.windows.insert(PAGE, window);
    browser
}

fn hotlist_browser(selected: Option<SelectedNode>) -> BrowserModel {
    let mut tree = TreeWindow::new(TreeKind::Hotlist);
    tree.has_children = true;
    tree.has_selection = selected.is_some();
    tree.selected = selected;
    let mut browser = BrowserModel::new();
    browser.trees.insert(TREE, tree);
    browser.hotlist = true;
    browser
}

fn entry(session: &MenuSession<HeadlessToolkit>, id: MenuId, path: &[usize]) -> MenuEntry {
    let definition = session.menu(id).unwrap();
    definition.entry(definition.resolve(path).unwrap()).unwrap().clone()
}

#[test]
fn blank_window_shades_page_and_object() {
    let browser = browser_with(BrowserWindow::default());
    let mut session = session();

    assert!(session.create(&browser, MenuId::Browser, 100, 200, PAGE));

    assert!(session.is_open());
    assert!(entry(&session, MenuId::Browser, &[0]).shaded);
    assert!(entry(&session, MenuId::Browser, &[1]).shaded);
    assert!(!entry(&session, MenuId::Browser, &[2]).shaded);
    assert_eq!(
        session.toolkit().calls,
        vec![ToolkitCall::OpenMenu {
            title: "AppName".to_string(),
            x: 100,
            y: 200
        }]
    );
}

#[test]
fn object_under_pointer_enables_object_menu() {
    let mut browser = browser_with(loaded_page());
    browser.objects.insert(
        PAGE,
        ObjectInfo {
            url: "http://example.org/logo.png".to_string(),
            mime_type: Some("image/png".to_string()),
            href: None,
        },
    );
    let mut session = session();

    session.create(&browser, MenuId::Browser, 0, 0, PAGE);

    assert!(!entry(&session, MenuId::Browser, &[0]).shaded);
    assert!(!entry(&session, MenuId::Browser, &[1]).shaded);
}

#[test]
fn open_menu_is_reopened_only_when_visible_state_changes() {
    let browser = browser_with(loaded_page());
    let mut session = session();
    session.create(&browser, MenuId::Browser, 0, 0, PAGE);
    // View > Images is showing.
    session.toolkit_mut().open_path = vec![3, 1];

    session.prepare_action(&browser, PAGE, Action::BrowserImagesForeground, false);
    assert_eq!(session.toolkit().opened(), 2);
    let fore = entry(&session, MenuId::Browser, &[3, 1, 0]);
    assert!(fore.shaded && fore.ticked);

    session.prepare_action(&browser, PAGE, Action::BrowserImagesForeground, false);
    assert_eq!(session.toolkit().opened(), 2);
}

#[test]
fn changes_off_the_open_path_do_not_reopen() {
    let browser = browser_with(loaded_page());
    let mut session = session();
    session.create(&browser, MenuId::Browser, 0, 0, PAGE);
    // Only the root panel is showing.
    session.toolkit_mut().open_path.clear();

    session.prepare_action(&browser, PAGE, Action::BrowserImagesForeground, false);

    assert_eq!(session.toolkit().opened(), 1);
    assert!(entry(&session, MenuId::Browser, &[3, 1, 0]).ticked);
}

#[test]
fn select_click_runs_action_and_closes() {
    let mut browser = browser_with(loaded_page());
    let mut session = session();
    session.create(&browser, MenuId::Browser, 0, 0, PAGE);

    // Navigate > Stop
    session.selection(&mut browser, &[2, 4]);

    assert!(session.current().is_none());
    assert_eq!(session.toolkit().calls.last(), Some(&ToolkitCall::CloseMenu));
    assert_eq!(session.take_effects(), vec![Effect::Stop(PAGE)]);
}

#[test]
fn adjust_click_keeps_menu_open_with_fresh_state() {
    let mut browser = browser_with(loaded_page());
    let mut session = session();
    session.toolkit_mut().pointer.button = Button::Adjust;
    session.create(&browser, MenuId::Browser, 0, 0, PAGE);
    session.toolkit_mut().open_path = vec![3, 1];
    session.prepare_action(&browser, PAGE, Action::BrowserImagesBackground, false);
    assert!(entry(&session, MenuId::Browser, &[3, 1, 1]).ticked);

    // View > Images > Background images
    session.selection(&mut browser, &[3, 1, 1]);

    assert!(session.is_open());
    assert!(!browser.windows[&PAGE].options.background_images);
    assert!(!entry(&session, MenuId::Browser, &[3, 1, 1]).ticked);
    assert!(!session.toolkit().calls.contains(&ToolkitCall::CloseMenu));
    assert!(matches!(
        session.toolkit().calls.last(),
        Some(ToolkitCall::OpenMenu { .. })
    ));
    assert_eq!(session.take_effects(), vec![Effect::RedrawWindow(PAGE)]);
}

#[test]
fn toolkit_refusing_to_open_warns_and_closes() {
    let browser = browser_with(loaded_page());
    let mut session = session();
    session.toolkit_mut().fail_open = true;

    assert!(!session.create(&browser, MenuId::Browser, 0, 0, PAGE));

    assert!(session.current().is_none());
    assert_eq!(session.toolkit().warnings(), 1);
    assert_eq!(session.toolkit().calls.last(), Some(&ToolkitCall::CloseMenu));
}

#[test]
fn sub_menu_refusing_to_open_warns_and_closes() {
    let browser = browser_with(loaded_page());
    let mut session = session();
    session.create(&browser, MenuId::Browser, 0, 0, PAGE);
    session.toolkit_mut().fail_open = true;

    // View
    session.menu_warning(&browser, &[3], 10, 10);

    assert!(!session.is_open());
    assert!(session.current().is_none());
    assert_eq!(session.toolkit().warnings(), 1);
    assert_eq!(session.toolkit().calls.last(), Some(&ToolkitCall::CloseMenu));
}

#[test]
fn failed_reopen_after_a_change_warns_and_closes() {
    let browser = browser_with(loaded_page());
    let mut session = session();
    session.create(&browser, MenuId::Browser, 0, 0, PAGE);
    session.toolkit_mut().open_path = vec![3, 1];
    session.toolkit_mut().fail_open = true;

    session.prepare_action(&browser, PAGE, Action::BrowserImagesForeground, false);

    assert!(!session.is_open());
    assert!(session.current().is_none());
    assert_eq!(session.toolkit().warnings(), 1);
    assert_eq!(session.toolkit().calls.last(), Some(&ToolkitCall::CloseMenu));
}

#[test]
fn eager_toolkit_gets_every_sub_menu_prepared() {
    let browser = BrowserModel::new();
    let mut session = session();
    session.toolkit_mut().eager = true;

    assert!(session.create(&browser, MenuId::Iconbar, 0, 0, WindowHandle(0)));

    // Open > Hotlist, with no hotlist available.
    assert!(entry(&session, MenuId::Iconbar, &[2, 1]).shaded);
    assert_eq!(session.toolkit().opened(), 1);
}

#[test]
fn lazy_toolkit_prepares_sub_menus_on_warning() {
    let browser = BrowserModel::new();
    let mut session = session();
    session.create(&browser, MenuId::Iconbar, 0, 0, WindowHandle(0));
    assert!(!entry(&session, MenuId::Iconbar, &[2, 1]).shaded);

    session.menu_warning(&browser, &[2], 0, 0);

    assert!(entry(&session, MenuId::Iconbar, &[2, 1]).shaded);
}

#[test]
fn choosing_a_dialog_only_entry_opens_the_dialog() {
    let mut browser = BrowserModel::new();
    let mut session = session();
    session.create(&browser, MenuId::Iconbar, 0, 0, WindowHandle(0));

    // Info
    session.selection(&mut browser, &[0]);

    assert!(session.current().is_none());
    assert_eq!(
        session.take_effects(),
        vec![Effect::OpenDialog {
            dialog: Dialog::Info,
            owner: None,
            at_pointer: false,
        }]
    );
}

#[test]
fn toggling_background_images_flips_only_its_tick() {
    let mut browser = browser_with(loaded_page());
    let mut session = session();
    session.create(&browser, MenuId::Browser, 0, 0, PAGE);
    session.prepare_action(&browser, PAGE, Action::BrowserImagesBackground, false);
    let before = session.menu(MenuId::Browser).unwrap().clone();
    assert!(entry(&session, MenuId::Browser, &[3, 1, 1]).ticked);

    assert!(session.handle_action(&mut browser, PAGE, Action::BrowserImagesBackground, false));
    session.prepare_action(&browser, PAGE, Action::BrowserImagesBackground, false);

    let mut expected = before;
    let background = expected.resolve(&[3, 1, 1]).unwrap();
    expected.entry_mut(background).unwrap().ticked = false;
    assert_eq!(session.menu(MenuId::Browser).unwrap(), &expected);
}

#[test]
fn pointer_failure_after_selection_warns_and_closes() {
    let mut browser = browser_with(loaded_page());
    let mut session = session();
    session.create(&browser, MenuId::Browser, 0, 0, PAGE);
    session.toolkit_mut().fail_pointer = true;

    session.selection(&mut browser, &[2, 0]);

    assert!(session.current().is_none());
    assert_eq!(session.toolkit().warnings(), 1);
}

#[test]
fn closing_a_tree_menu_notifies_the_tree() {
    let browser = hotlist_browser(None);
    let mut session = session();
    session.create(&browser, MenuId::Hotlist, 0, 0, TREE);

    session.closed(&browser);

    assert!(session.current().is_none());
    assert_eq!(session.take_effects(), vec![Effect::TreeMenuClosed(TREE)]);
}

#[test]
fn tree_selection_entries_follow_selection() {
    let browser = hotlist_browser(None);
    let mut session = session();
    session.create(&browser, MenuId::Hotlist, 0, 0, TREE);
    assert!(entry(&session, MenuId::Hotlist, &[1]).shaded);
    assert!(!entry(&session, MenuId::Hotlist, &[2]).shaded);

    let browser = hotlist_browser(Some(SelectedNode { folder: false }));
    session.closed(&browser);
    session.create(&browser, MenuId::Hotlist, 0, 0, TREE);
    assert!(!entry(&session, MenuId::Hotlist, &[1]).shaded);
}

#[test]
fn edit_warning_opens_folder_dialog_for_selected_folder() {
    let browser = hotlist_browser(Some(SelectedNode { folder: true }));
    let mut session = session();
    session.create(&browser, MenuId::Hotlist, 0, 0, TREE);
    session.take_effects();

    // Selection > Edit
    session.menu_warning(&browser, &[1, 0], 40, 50);

    assert_eq!(
        entry(&session, MenuId::Hotlist, &[1, 0]).child,
        Some(Child::Dialog(Dialog::Folder))
    );
    assert_eq!(
        session.toolkit().calls.last(),
        Some(&ToolkitCall::OpenSubMenu {
            child: Child::Dialog(Dialog::Folder),
            x: 40,
            y: 50
        })
    );
    assert_eq!(
        session.take_effects(),
        vec![Effect::PrepareDialog(DialogPrep::Folder { editing: true })]
    );
}

#[test]
fn sub_menu_warning_prepares_child_panel() {
    let browser = browser_with(loaded_page());
    let mut session = session();
    session.create(&browser, MenuId::Browser, 0, 0, PAGE);

    // Navigate
    session.menu_warning(&browser, &[2], 10, 10);

    assert!(!entry(&session, MenuId::Browser, &[2, 1]).shaded);
    assert!(entry(&session, MenuId::Browser, &[2, 2]).shaded);
    assert!(matches!(
        session.toolkit().calls.last(),
        Some(ToolkitCall::OpenSubMenu {
            child: Child::Menu(_),
            ..
        })
    ));
}

#[test]
fn url_suggest_needs_recent_urls() {
    let mut browser = browser_with(loaded_page());
    let mut session = session();
    assert!(!session.create(&browser, MenuId::UrlSuggest, 0, 0, PAGE));
    assert!(session.current().is_none());

    browser.recent = vec!["http://a.example/".to_string(), "http://b.example/".to_string()];
    assert!(session.create(&browser, MenuId::UrlSuggest, 0, 0, PAGE));
    session.selection(&mut browser, &[1]);

    assert_eq!(
        session.take_effects(),
        vec![
            Effect::Navigate {
                window: PAGE,
                url: "http://b.example/".to_string()
            },
            Effect::AddRecentUrl("http://b.example/".to_string()),
        ]
    );
}

#[test]
fn form_select_reports_chosen_option() {
    let mut browser = browser_with(loaded_page());
    let mut session = session();
    session.toolkit_mut().pointer.x = 300;
    let control = FormSelectControl {
        id: 7,
        options: vec![
            FormOption {
                text: "First choice".to_string(),
                selected: true,
            },
            FormOption {
                text: "Second".to_string(),
                selected: false,
            },
        ],
    };

    assert!(session.create_form_select_menu(&browser, PAGE, control));
    assert!(entry(&session, MenuId::FormSelect, &[0]).ticked);
    assert_eq!(entry(&session, MenuId::FormSelect, &[0]).text, "First\u{a0}choice");
    assert_eq!(
        session.toolkit().calls,
        vec![ToolkitCall::OpenMenu {
            title: "SelectMenu".to_string(),
            x: 300,
            y: 0
        }]
    );

    session.selection(&mut browser, &[1]);
    assert_eq!(
        session.take_effects(),
        vec![Effect::FormSelect {
            window: PAGE,
            control: 7,
            option: 1
        }]
    );
}

#[test]
fn objects_moving_closes_form_select_menu() {
    let browser = browser_with(loaded_page());
    let mut session = session();
    let control = FormSelectControl {
        id: 1,
        options: vec![FormOption {
            text: "Only".to_string(),
            selected: false,
        }],
    };
    session.create_form_select_menu(&browser, PAGE, control);

    session.objects_moved(&browser);

    assert!(session.current().is_none());
}

#[test]
fn image_quality_ticks_one_entry() {
    let mut session = session();
    session.prepare_image_quality(ImageQuality::Dither);
    session.prepare_image_quality(ImageQuality::Plain);

    let ticked = session
        .menu(MenuId::ImageQuality)
        .unwrap()
        .root()
        .entries
        .iter()
        .map(|e| e.ticked)
        .collect::<Vec<_>>();
    assert_eq!(ticked, vec![false, true, false, false]);
}

#[test]
fn navigate_refresh_updates_toolbar_icons() {
    let browser = browser_with(loaded_page());
    let mut session = session();

    session.prepare_navigate(&browser, PAGE);

    let toolkit = session.toolkit();
    assert_eq!(toolkit.icon(PAGE_BAR, ToolbarIcon::Back), Some(false));
    assert_eq!(toolkit.icon(PAGE_BAR, ToolbarIcon::Forward), Some(true));
    assert_eq!(toolkit.icon(PAGE_BAR, ToolbarIcon::Stop), Some(true));
    assert_eq!(toolkit.icon(PAGE_BAR, ToolbarIcon::Reload), Some(false));
    assert_eq!(toolkit.icon(PAGE_BAR, ToolbarIcon::Bookmark), Some(true));
    assert_eq!(toolkit.icon(PAGE_BAR, ToolbarIcon::Suggest), Some(true));
    // No dialogs are loaded by a navigation refresh.
    assert_eq!(session.take_effects(), vec![]);
}

#[test]
fn toolbar_being_edited_keeps_its_icons() {
    let mut page = loaded_page();
    if let Some(toolbar) = page.toolbar.as_mut() {
        toolbar.editor = true;
    }
    let browser = browser_with(page);
    let mut session = session();

    session.prepare_navigate(&browser, PAGE);

    assert!(session.toolkit().icons.is_empty());
}

#[test]
fn home_falls_back_to_bundled_intro_page() {
    let mut browser = browser_with(loaded_page());
    let mut session = session();

    assert!(session.handle_action(&mut browser, PAGE, Action::BrowserNavigateHome, false));

    assert_eq!(
        session.take_effects(),
        vec![Effect::Navigate {
            window: PAGE,
            url: "file:///usr/share/doc/menutree/intro_en".to_string()
        }]
    );
}

#[test]
fn page_dialogs_are_prepared_before_opening() {
    let mut browser = browser_with(loaded_page());
    let mut session = session();

    assert!(session.handle_action(&mut browser, PAGE, Action::BrowserPageInfo, true));

    assert_eq!(
        session.take_effects(),
        vec![
            Effect::PrepareDialog(DialogPrep::PageInfo {
                title: "Example".to_string(),
                url: "http://example.org/".to_string(),
                mime_type: "text/html".to_string(),
            }),
            Effect::OpenDialog {
                dialog: Dialog::PageInfo,
                owner: Some(PAGE),
                at_pointer: true
            },
        ]
    );
}

#[test]
fn actions_without_a_target_are_not_handled() {
    let mut browser = browser_with(BrowserWindow::default());
    let mut session = session();

    assert!(!session.handle_action(&mut browser, PAGE, Action::HistoryShowLocal, false));
    assert!(!session.handle_action(&mut browser, PAGE, Action::BrowserSave, false));
    assert!(!session.handle_action(&mut browser, PAGE, Action::BrowserObjectReload, false));
    assert!(!session.handle_action(&mut browser, PAGE, Action::TreeSelectAll, false));
    assert!(!session.handle_action(&mut browser, PAGE, Action::NoAction, false));
    assert_eq!(session.take_effects(), vec![]);
}

#[test]
fn window_default_captures_geometry() {
    let mut browser = browser_with(loaded_page());
    let mut session = session();
    session.toolkit_mut().extents.insert(
        PAGE,
        Extent {
            x0: 10,
            y0: 20,
            x1: 810,
            y1: 620,
        },
    );

    assert!(session.handle_action(&mut browser, PAGE, Action::BrowserWindowDefault, false));

    let options = session.options();
    assert_eq!(
        (options.window_screen_width, options.window_screen_height),
        (1920, 1080)
    );
    assert_eq!(
        (options.window_x, options.window_y, options.window_width, options.window_height),
        (10, 20, 800, 600)
    );
    assert_eq!(session.take_effects(), vec![Effect::SaveOptions]);
}

#[test]
fn window_default_warns_on_unknown_window() {
    let mut browser = browser_with(loaded_page());
    let mut session = session();

    session.handle_action(&mut browser, PAGE, Action::BrowserWindowDefault, false);

    assert_eq!(session.toolkit().warnings(), 1);
    assert_eq!(session.options().window_screen_width, 0);
}

#[test]
fn stagger_entry_follows_saved_geometry() {
    let mut browser = browser_with(loaded_page());
    let mut session = session();
    session.create(&browser, MenuId::Browser, 0, 0, PAGE);
    // Utilities > Window
    session.menu_warning(&browser, &[4, 3], 0, 0);
    let stagger = entry(&session, MenuId::Browser, &[4, 3, 1]);
    assert!(stagger.shaded && stagger.ticked);

    session.toolkit_mut().extents.insert(PAGE, Extent::default());
    session.handle_action(&mut browser, PAGE, Action::BrowserWindowDefault, false);
    session.handle_action(&mut browser, PAGE, Action::BrowserWindowStagger, false);
    session.menu_warning(&browser, &[4, 3], 0, 0);

    let stagger = entry(&session, MenuId::Browser, &[4, 3, 1]);
    assert!(!stagger.shaded);
    assert!(!stagger.ticked);
}

#[test]
fn address_bar_toggle_refreshes_and_focuses() {
    let mut page = loaded_page();
    if let Some(toolbar) = page.toolbar.as_mut() {
        toolbar.display_url = false;
    }
    let mut browser = browser_with(page);
    let mut session = session();

    assert!(session.handle_action(&mut browser, PAGE, Action::ToolbarAddressBar, false));

    assert!(browser.windows[&PAGE].toolbar.as_ref().unwrap().display_url);
    assert_eq!(
        session.take_effects(),
        vec![Effect::RefreshToolbar(PAGE_BAR), Effect::FocusAddressBar(PAGE_BAR)]
    );
}

#[test]
fn tree_expansion_scopes() {
    let mut browser = hotlist_browser(None);
    let mut session = session();

    session.handle_action(&mut browser, TREE, Action::TreeCollapseLinks, false);
    session.handle_action(&mut browser, TREE, Action::TreeExpandAll, false);

    assert_eq!(
        session.take_effects(),
        vec![
            Effect::TreeExpansion {
                window: TREE,
                expand: false,
                folders: false,
                links: true
            },
            Effect::TreeExpansion {
                window: TREE,
                expand: true,
                folders: true,
                links: true
            },
        ]
    );
}

#[test]
fn language_choice_reports_code() {
    let dir = tempfile::tempdir().unwrap();
    for code in ["de", "en"] {
        std::fs::create_dir(dir.path().join(code)).unwrap();
    }
    let messages: Messages = [("lang_de", "Deutsch"), ("lang_en", "English")]
        .into_iter()
        .collect();
    let mut menus = Menus::new(&messages).unwrap();
    menus.load_languages(dir.path(), &messages).unwrap();
    let mut session = MenuSession::new(HeadlessToolkit::new(), menus, messages, Options::default());
    let mut browser = BrowserModel::new();

    assert!(session.create(&browser, MenuId::Languages, 0, 0, WindowHandle(0)));
    session.selection(&mut browser, &[1]);

    assert_eq!(
        session.take_effects(),
        vec![Effect::LanguageSelected("en".to_string())]
    );
}
