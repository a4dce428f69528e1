use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use menutree::browser::{
    BrowserModel, BrowserWindow, Document, HistoryNav, Toolbar, ToolbarKind, TreeKind, TreeWindow,
    WindowHandle,
};
use menutree::config::{self, Config};
use menutree::menu::{MenuId, Menus};
use menutree::messages::{Lookup, Messages};
use menutree::session::MenuSession;
use menutree::toolkit::HeadlessToolkit;

#[derive(Parser, Debug)]
#[command(name = "menutree", version, about = "Inspect the compiled browser menus")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lists every defined menu with its title and size.
    List,
    /// Prints the compiled tree of one menu (e.g. `browser`, `hotlist`).
    Show {
        menu: String,
        /// Prepare the root entries against a blank window before printing.
        #[arg(long)]
        prepared: bool,
    },
    /// Prints the entry-to-action bindings of one menu.
    Bindings { menu: String },
    /// Reports menu texts that have no translation in the message file.
    Check,
    /// Lists the languages found in the configured resources directory.
    Languages,
    /// Prints the config path that would be used (if any).
    ConfigPath,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            let (_, menus) = load()?;
            for id in menus.ids() {
                let Some(definition) = menus.get(id) else {
                    continue;
                };
                println!(
                    "{:<16} {:<20} {} panels, {} bindings",
                    id.name(),
                    definition.root().title,
                    definition.nodes().count(),
                    definition.bindings().len()
                );
            }
        }
        Command::Show { menu, prepared } => {
            let id = parse_menu(&menu)?;
            let (messages, menus) = load()?;
            if prepared {
                let cfg = config::load_optional()?;
                let options = cfg.map(|c| c.options).unwrap_or_default();
                let (browser, window) = blank_browser(id);
                let mut session = MenuSession::new(HeadlessToolkit::new(), menus, messages, options);
                if !session.create(&browser, id, 0, 0, window) {
                    bail!("menu '{id}' could not be opened");
                }
                let definition = session.menu(id).ok_or_else(|| anyhow!("menu '{id}' is not defined"))?;
                print!("{}", definition.render());
            } else {
                let definition = menus.get(id).ok_or_else(|| anyhow!("menu '{id}' is not defined"))?;
                print!("{}", definition.render());
            }
        }
        Command::Bindings { menu } => {
            let id = parse_menu(&menu)?;
            let (_, menus) = load()?;
            let definition = menus.get(id).ok_or_else(|| anyhow!("menu '{id}' is not defined"))?;
            for binding in definition.bindings() {
                let Some(entry) = definition.entry(binding.entry) else {
                    continue;
                };
                println!(
                    "{:>3}:{:<3} {:<24} {}",
                    binding.entry.node.index(),
                    binding.entry.index,
                    entry.key,
                    binding.action
                );
            }
        }
        Command::Check => {
            let (messages, menus) = load()?;
            let mut missing = 0usize;
            for id in menus.ids() {
                let Some(definition) = menus.get(id) else {
                    continue;
                };
                let root_key = definition.root().title_key();
                if messages.get(root_key).is_none() {
                    println!("{id}: title '{root_key}'");
                    missing += 1;
                }
                for (node, panel) in definition.nodes() {
                    for entry in panel.entries.iter().filter(|e| messages.get(&e.key).is_none()) {
                        println!("{id}: panel {} entry '{}'", node.index(), entry.key);
                        missing += 1;
                    }
                }
            }
            if missing > 0 {
                bail!("{missing} untranslated menu text(s)");
            }
            println!("all menu texts translated");
        }
        Command::Languages => {
            let cfg = config::load_optional()?;
            let resources = cfg
                .as_ref()
                .and_then(|c| c.resources.as_deref())
                .ok_or_else(|| anyhow!("no resources directory configured"))?;
            let messages = config::load_messages(cfg.as_ref())?;
            let mut menus = Menus::new(&messages).context("compiling menus")?;
            menus.load_languages(resources, &messages)?;
            let Some(definition) = menus.get(MenuId::Languages) else {
                println!("no languages installed");
                return Ok(());
            };
            for (index, entry) in definition.root().entries.iter().enumerate() {
                let code = menus.language_code(index).unwrap_or("??");
                println!("{code}  {}", entry.text);
            }
        }
        Command::ConfigPath => {
            if let Some(path) = config::resolve_config_path() {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

fn parse_menu(name: &str) -> Result<MenuId> {
    MenuId::decode(name).ok_or_else(|| {
        let known = MenuId::ALL.map(MenuId::name).join(", ");
        anyhow!("unknown menu '{name}' (expected one of: {known})")
    })
}

/// Loads the config and messages, then compiles the catalog. Definition
/// errors are fatal.
fn load() -> Result<(Messages, Menus)> {
    let cfg: Option<Config> = config::load_optional()?;
    let messages = config::load_messages(cfg.as_ref())?;
    let mut menus = Menus::new(&messages).context("compiling menus")?;
    if let Some(resources) = cfg.as_ref().and_then(|c| c.resources.as_deref()) {
        menus
            .load_languages(resources, &messages)
            .with_context(|| format!("loading languages from {}", resources.display()))?;
    }
    Ok((messages, menus))
}

/// A browser with one idle window of the kind menu `id` is opened for.
fn blank_browser(id: MenuId) -> (BrowserModel, WindowHandle) {
    let window = WindowHandle(1);
    let mut browser = BrowserModel::new();
    match id {
        MenuId::Hotlist | MenuId::GlobalHistory | MenuId::TreeToolbar => {
            let kind = if id == MenuId::GlobalHistory {
                TreeKind::GlobalHistory
            } else {
                TreeKind::Hotlist
            };
            let mut tree = TreeWindow::new(kind);
            let bar = if kind == TreeKind::Hotlist {
                ToolbarKind::Hotlist
            } else {
                ToolbarKind::History
            };
            tree.toolbar = Some(Toolbar::new(bar, WindowHandle(2)));
            browser.trees.insert(window, tree);
        }
        _ => {
            browser.windows.insert(
                window,
                BrowserWindow {
                    document: Some(Document {
                        url: "about:blank".to_string(),
                        title: None,
                        mime_type: Some("text/html".to_string()),
                        done: true,
                    }),
                    history: Some(HistoryNav::default()),
                    toolbar: Some(Toolbar::new(ToolbarKind::Browser, WindowHandle(2))),
                    ..BrowserWindow::default()
                },
            );
            browser.recent.push("about:blank".to_string());
        }
    }
    (browser, window)
}
