use std::{fmt::Write as _, ops::Range};

use thiserror::Error;

use crate::action::Action;
use crate::messages::Lookup;

use super::{Dialog, MenuSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// What an entry opens when the pointer moves over its arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Child {
    Menu(NodeId),
    Dialog(Dialog),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Translated display text.
    pub text: String,
    /// Raw message key the text was translated from.
    pub key: String,
    pub child: Option<Child>,
    pub separator_after: bool,
    pub terminal: bool,
    pub title_indirected: bool,
    pub warn_before_open: bool,
    pub shaded: bool,
    pub ticked: bool,
}

impl MenuEntry {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            key: key.into(),
            child: None,
            separator_after: false,
            terminal: false,
            title_indirected: false,
            warn_before_open: false,
            shaded: false,
            ticked: false,
        }
    }
}

/// One displayable panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub title: String,
    title_key: String,
    pub entries: Vec<MenuEntry>,
}

impl MenuNode {
    pub fn title_key(&self) -> &str {
        &self.title_key
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRef {
    pub node: NodeId,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionBinding {
    pub entry: EntryRef,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefineError {
    #[error("menu '{title}' has no items")]
    Empty { title: String },

    #[error("menu '{title}': empty path segment in '{path}'")]
    EmptySegment { title: String, path: String },

    #[error("menu '{title}': item '{path}' is not reachable from any parent entry")]
    Orphaned { title: String, path: String },
}

/// A compiled menu tree plus the table binding its entries to actions.
///
/// Nodes live in an arena; the root is always [`NodeId::ROOT`]. After
/// compilation only entry flags (and the target of a dialog link) change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDefinition {
    nodes: Vec<MenuNode>,
    bindings: Vec<ActionBinding>,
}

impl MenuDefinition {
    /// Builds the tree for `spec`, translating titles and entry texts through
    /// `messages`.
    pub fn compile(spec: &MenuSpec, messages: &dyn Lookup) -> Result<Self, DefineError> {
        if spec.is_empty() {
            return Err(DefineError::Empty {
                title: spec.title.clone(),
            });
        }

        let mut paths = Vec::with_capacity(spec.len());
        for item in &spec.items {
            let parsed = ParsedPath::parse(&item.path).ok_or_else(|| DefineError::EmptySegment {
                title: spec.title.clone(),
                path: item.path.clone(),
            })?;
            paths.push(parsed);
        }

        let mut compiler = Compiler {
            spec,
            paths,
            claimed: vec![false; spec.len()],
            messages,
            nodes: Vec::new(),
            bindings: Vec::new(),
        };
        compiler.add(0, 0..spec.len(), &[], &spec.title);

        if let Some(orphan) = compiler.claimed.iter().position(|claimed| !claimed) {
            return Err(DefineError::Orphaned {
                title: spec.title.clone(),
                path: spec.items[orphan].path.clone(),
            });
        }

        tracing::debug!(
            title = %spec.title,
            nodes = compiler.nodes.len(),
            bindings = compiler.bindings.len(),
            "compiled menu"
        );
        Ok(Self {
            nodes: compiler.nodes,
            bindings: compiler.bindings,
        })
    }

    /// Wraps a single flat panel. Returns `None` for an empty entry list.
    pub fn flat(title_key: &str, messages: &dyn Lookup, mut entries: Vec<MenuEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        mark_ends(&mut entries);
        Some(Self {
            nodes: vec![MenuNode {
                title: messages.lookup(title_key).to_string(),
                title_key: title_key.to_string(),
                entries,
            }],
            bindings: Vec::new(),
        })
    }

    pub fn root(&self) -> &MenuNode {
        &self.nodes[NodeId::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> Option<&MenuNode> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &MenuNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn bindings(&self) -> &[ActionBinding] {
        &self.bindings
    }

    pub fn entry(&self, entry: EntryRef) -> Option<&MenuEntry> {
        self.nodes.get(entry.node.0)?.entries.get(entry.index)
    }

    pub fn entry_mut(&mut self, entry: EntryRef) -> Option<&mut MenuEntry> {
        self.nodes.get_mut(entry.node.0)?.entries.get_mut(entry.index)
    }

    /// Follows a selection path (entry indices from the root panel down) to
    /// the entry it names.
    pub fn resolve(&self, path: &[usize]) -> Option<EntryRef> {
        let (&last, parents) = path.split_last()?;
        let mut node = NodeId::ROOT;
        for &index in parents {
            match self.node(node)?.entries.get(index)?.child {
                Some(Child::Menu(child)) => node = child,
                _ => return None,
            }
        }
        let entry = EntryRef { node, index: last };
        self.entry(entry).map(|_| entry)
    }

    pub fn action_at(&self, entry: EntryRef) -> Action {
        self.bindings
            .iter()
            .find(|b| b.entry == entry)
            .map_or(Action::NoAction, |b| b.action)
    }

    /// Bound actions of a panel, in entry order.
    pub fn actions_in(&self, node: NodeId) -> Vec<Action> {
        let Some(panel) = self.node(node) else {
            return Vec::new();
        };
        (0..panel.entries.len())
            .map(|index| self.action_at(EntryRef { node, index }))
            .filter(|action| !action.is_none())
            .collect()
    }

    pub fn entries_for(&self, action: Action) -> impl Iterator<Item = EntryRef> + '_ {
        self.bindings
            .iter()
            .filter(move |b| b.action == action)
            .map(|b| b.entry)
    }

    /// Sets the shaded flag on every entry bound to `action`. Returns whether
    /// any entry is bound.
    pub fn set_shaded(&mut self, action: Action, shaded: bool) -> bool {
        self.update(action, |entry| entry.shaded = shaded)
    }

    pub fn set_ticked(&mut self, action: Action, ticked: bool) -> bool {
        self.update(action, |entry| entry.ticked = ticked)
    }

    /// Re-points the dialog link of entries bound to `action`. Entries that
    /// open a sub-menu are left alone.
    pub fn set_dialog(&mut self, action: Action, dialog: Dialog) -> bool {
        self.update(action, |entry| {
            if let Some(Child::Dialog(_)) = entry.child {
                entry.child = Some(Child::Dialog(dialog));
            }
        })
    }

    fn update(&mut self, action: Action, mut f: impl FnMut(&mut MenuEntry)) -> bool {
        let targets = self.entries_for(action).collect::<Vec<_>>();
        for target in &targets {
            if let Some(entry) = self.entry_mut(*target) {
                f(entry);
            }
        }
        !targets.is_empty()
    }

    /// Position-weighted fingerprint of the shaded and ticked flags of the
    /// root panel and of every sub-menu along `open_path`.
    pub fn checksum(&self, open_path: &[usize]) -> u64 {
        let mut sum = 0u64;
        let mut node = NodeId::ROOT;
        let mut depth = 0usize;
        loop {
            let Some(panel) = self.node(node) else {
                break;
            };
            for (j, entry) in panel.entries.iter().enumerate() {
                let shift = ((depth + j * 2) % 62) as u32;
                if entry.shaded {
                    sum ^= 1 << shift;
                }
                if entry.ticked {
                    sum ^= 2 << shift;
                }
            }
            let Some(&selected) = open_path.get(depth) else {
                break;
            };
            match panel.entries.get(selected).and_then(|e| e.child) {
                Some(Child::Menu(child)) => node = child,
                _ => break,
            }
            depth += 1;
        }
        sum
    }

    /// Re-resolves every title and entry text without touching the tree shape
    /// or the flags.
    pub fn retranslate(&mut self, messages: &dyn Lookup) {
        for node in &mut self.nodes {
            node.title = messages.lookup(&node.title_key).to_string();
            for entry in &mut node.entries {
                entry.text = messages.lookup(&entry.key).to_string();
            }
        }
    }

    /// Indented text rendering of the tree, one entry per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.root().title);
        self.render_node(NodeId::ROOT, 1, &mut out);
        out
    }

    fn render_node(&self, node: NodeId, depth: usize, out: &mut String) {
        let Some(panel) = self.node(node) else {
            return;
        };
        for (index, entry) in panel.entries.iter().enumerate() {
            let action = self.action_at(EntryRef { node, index });
            let mut flags = Vec::new();
            if !action.is_none() {
                flags.push(action.name().to_string());
            }
            if entry.shaded {
                flags.push("shaded".to_string());
            }
            if entry.ticked {
                flags.push("ticked".to_string());
            }
            if let Some(Child::Dialog(dialog)) = entry.child {
                flags.push(format!("dialog:{dialog}"));
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };
            let _ = writeln!(out, "{}{}{}", "  ".repeat(depth), entry.text, flags);
            if entry.separator_after && !entry.terminal {
                let _ = writeln!(out, "{}----", "  ".repeat(depth));
            }
            if let Some(Child::Menu(child)) = entry.child {
                self.render_node(child, depth + 1, out);
            }
        }
    }
}

struct ParsedPath<'a> {
    /// Segments with any trailing `_` removed.
    segments: Vec<&'a str>,
    separator: bool,
}

impl<'a> ParsedPath<'a> {
    fn parse(path: &'a str) -> Option<Self> {
        let segments = path
            .split('.')
            .map(|s| s.strip_suffix('_').unwrap_or(s))
            .collect::<Vec<_>>();
        if segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        Some(Self {
            segments,
            separator: path.ends_with('_'),
        })
    }
}

struct Compiler<'a> {
    spec: &'a MenuSpec,
    paths: Vec<ParsedPath<'a>>,
    claimed: Vec<bool>,
    messages: &'a dyn Lookup,
    nodes: Vec<MenuNode>,
    bindings: Vec<ActionBinding>,
}

impl<'a> Compiler<'a> {
    /// Builds the panel holding every item of `range` at `depth` below
    /// `prefix`, then recurses into each of its entries.
    fn add(&mut self, depth: usize, range: Range<usize>, prefix: &[&'a str], title_key: &str) -> Option<NodeId> {
        let matches = range
            .clone()
            .filter(|&i| {
                let path = &self.paths[i];
                path.segments.len() == depth + 1 && path.segments.starts_with(prefix)
            })
            .collect::<Vec<_>>();
        if matches.is_empty() {
            return None;
        }

        let entries = matches
            .iter()
            .map(|&i| {
                self.claimed[i] = true;
                let path = &self.paths[i];
                let key = path.segments[depth];
                let mut entry = MenuEntry::new(key, self.messages.lookup(key));
                entry.separator_after = path.separator;
                if let Some(dialog) = self.spec.items[i].sub_window {
                    entry.child = Some(Child::Dialog(dialog));
                    entry.warn_before_open = true;
                }
                entry
            })
            .collect::<Vec<_>>();

        let id = NodeId(self.nodes.len());
        self.nodes.push(MenuNode {
            title: self.messages.lookup(title_key).to_string(),
            title_key: title_key.to_string(),
            entries,
        });

        for (position, &i) in matches.iter().enumerate() {
            let item = &self.spec.items[i];
            if !item.action.is_none() {
                self.bindings.push(ActionBinding {
                    entry: EntryRef {
                        node: id,
                        index: position,
                    },
                    action: item.action,
                });
            }
            if item.sub_window.is_some() {
                continue;
            }

            let end = matches.get(position + 1).copied().unwrap_or(range.end);
            let prefix = self.paths[i].segments.clone();
            let key = prefix[depth];
            if let Some(child) = self.add(depth + 1, i..end, &prefix, key) {
                let entry = &mut self.nodes[id.0].entries[position];
                entry.child = Some(Child::Menu(child));
                entry.warn_before_open = true;
            }
        }

        mark_ends(&mut self.nodes[id.0].entries);
        Some(id)
    }
}

fn mark_ends(entries: &mut [MenuEntry]) {
    if let Some(first) = entries.first_mut() {
        first.title_indirected = true;
    }
    if let Some(last) = entries.last_mut() {
        last.terminal = true;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::messages::Messages;

    fn help_spec() -> MenuSpec {
        MenuSpec::new("NetMenu")
            .item("Help", Action::HelpOpenContents)
            .item("Help.HelpContent", Action::HelpOpenContents)
            .item("Help.HelpGuide", Action::HelpOpenGuide)
    }

    fn texts(node: &MenuNode) -> Vec<&str> {
        node.entries.iter().map(|e| e.text.as_str()).collect()
    }

    fn assert_invariants(def: &MenuDefinition) {
        for (_, node) in def.nodes() {
            assert!(!node.entries.is_empty());
            assert!(node.entries[0].title_indirected);
            let last = node.entries.len() - 1;
            for (i, entry) in node.entries.iter().enumerate() {
                assert_eq!(entry.terminal, i == last, "terminal flag on {}", entry.text);
                if entry.child.is_some() {
                    assert!(entry.warn_before_open, "warning flag on {}", entry.text);
                }
            }
        }
    }

    #[test]
    fn help_example_compiles_to_two_levels() {
        let def = MenuDefinition::compile(&help_spec(), &Messages::new()).unwrap();
        assert_invariants(&def);

        let root = def.root();
        assert_eq!(texts(root), vec!["Help"]);
        assert!(root.entries[0].warn_before_open);
        let help = EntryRef {
            node: NodeId::ROOT,
            index: 0,
        };
        assert_eq!(def.action_at(help), Action::HelpOpenContents);

        let Some(Child::Menu(child)) = root.entries[0].child else {
            panic!("Help should open a sub-menu");
        };
        let panel = def.node(child).unwrap();
        assert_eq!(texts(panel), vec!["HelpContent", "HelpGuide"]);
        assert!(!panel.entries[0].terminal);
        assert!(panel.entries[1].terminal);
        assert_eq!(
            def.action_at(EntryRef { node: child, index: 0 }),
            Action::HelpOpenContents
        );
        assert_eq!(
            def.action_at(EntryRef { node: child, index: 1 }),
            Action::HelpOpenGuide
        );
    }

    #[test]
    fn nested_chain_removes_one_segment_per_level() {
        let spec = MenuSpec::new("T")
            .item("A", Action::NoAction)
            .item("A.B", Action::NoAction)
            .item("A.B.C", Action::HelpOpenAbout);
        let def = MenuDefinition::compile(&spec, &Messages::new()).unwrap();
        assert_invariants(&def);

        let a = def.resolve(&[0]).unwrap();
        let b = def.resolve(&[0, 0]).unwrap();
        let c = def.resolve(&[0, 0, 0]).unwrap();
        assert_eq!(def.entry(a).unwrap().text, "A");
        assert_eq!(def.entry(b).unwrap().text, "B");
        assert_eq!(def.entry(c).unwrap().text, "C");
        assert!(def.entry(c).unwrap().child.is_none());
        assert_eq!(def.nodes().count(), 3);
        assert_eq!(def.bindings().len(), 1);
        assert!(def.resolve(&[0, 0, 0, 0]).is_none());
    }

    #[test]
    fn trailing_underscore_marks_separator_and_still_parents_children() {
        let spec = MenuSpec::new("T")
            .item("Object", Action::BrowserObject)
            .item("Object.SaveURL_", Action::NoAction)
            .item("Object.SaveURL.URI", Action::BrowserObjectSaveUrlUri)
            .item("Object.ObjReload", Action::BrowserObjectReload);
        let def = MenuDefinition::compile(&spec, &Messages::new()).unwrap();
        assert_invariants(&def);

        let save_url = def.entry(def.resolve(&[0, 0]).unwrap()).unwrap();
        assert_eq!(save_url.text, "SaveURL");
        assert!(save_url.separator_after);
        assert!(save_url.warn_before_open);
        let uri = def.entry(def.resolve(&[0, 0, 0]).unwrap()).unwrap();
        assert_eq!(uri.text, "URI");
        assert!(!def.entry(def.resolve(&[0, 1]).unwrap()).unwrap().separator_after);
    }

    #[test]
    fn deeper_items_are_not_claimed_at_shallower_depth() {
        let spec = MenuSpec::new("T")
            .item("Page", Action::BrowserPage)
            .item("Page.Export", Action::NoAction)
            .item("Page.Export.Draw", Action::BrowserExportDraw)
            .item("Page.Save", Action::BrowserSave)
            .item("Page.SaveComp", Action::BrowserSaveComplete);
        let def = MenuDefinition::compile(&spec, &Messages::new()).unwrap();
        let page = def.root().entries[0].child;
        let Some(Child::Menu(page)) = page else {
            panic!("Page should open a sub-menu");
        };
        assert_eq!(texts(def.node(page).unwrap()), vec!["Export", "Save", "SaveComp"]);
        // "Page.Save" is a textual prefix of "Page.SaveComp" but not a parent.
        assert!(def.entry(def.resolve(&[0, 1]).unwrap()).unwrap().child.is_none());
    }

    #[test]
    fn order_follows_declaration_not_alphabet() {
        let spec = MenuSpec::new("T")
            .item("Zebra", Action::NoAction)
            .item("Apple", Action::NoAction)
            .item("Mango", Action::NoAction);
        let def = MenuDefinition::compile(&spec, &Messages::new()).unwrap();
        assert_eq!(texts(def.root()), vec!["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn dialog_override_links_without_recursing() {
        let spec = MenuSpec::new("T")
            .dialog("Info", Action::NoAction, Dialog::Info)
            .item("Quit", Action::ApplicationQuit);
        let def = MenuDefinition::compile(&spec, &Messages::new()).unwrap();
        let info = &def.root().entries[0];
        assert_eq!(info.child, Some(Child::Dialog(Dialog::Info)));
        assert!(info.warn_before_open);
        assert_eq!(def.bindings().len(), 1);
    }

    #[test]
    fn children_under_dialog_override_are_orphaned() {
        let spec = MenuSpec::new("T")
            .dialog("Info", Action::NoAction, Dialog::Info)
            .item("Info.More", Action::NoAction);
        let err = MenuDefinition::compile(&spec, &Messages::new()).unwrap_err();
        assert_eq!(
            err,
            DefineError::Orphaned {
                title: "T".to_string(),
                path: "Info.More".to_string()
            }
        );
    }

    #[test]
    fn malformed_specs_are_rejected() {
        let empty = MenuSpec::new("T");
        assert!(matches!(
            MenuDefinition::compile(&empty, &Messages::new()),
            Err(DefineError::Empty { .. })
        ));

        let gap = MenuSpec::new("T").item("A..B", Action::NoAction);
        assert!(matches!(
            MenuDefinition::compile(&gap, &Messages::new()),
            Err(DefineError::EmptySegment { .. })
        ));

        let orphan = MenuSpec::new("T")
            .item("A", Action::NoAction)
            .item("B.C", Action::NoAction);
        assert!(matches!(
            MenuDefinition::compile(&orphan, &Messages::new()),
            Err(DefineError::Orphaned { .. })
        ));
    }

    #[test]
    fn translation_applies_to_titles_and_texts() {
        let messages: Messages = [("NetMenu", "Browser"), ("Help", "Hilfe"), ("HelpGuide", "Anleitung")]
            .into_iter()
            .collect();
        let def = MenuDefinition::compile(&help_spec(), &messages).unwrap();
        assert_eq!(def.root().title, "Browser");
        assert_eq!(def.root().entries[0].text, "Hilfe");
        assert_eq!(def.root().entries[0].key, "Help");

        let Some(Child::Menu(child)) = def.root().entries[0].child else {
            panic!("Help should open a sub-menu");
        };
        let panel = def.node(child).unwrap();
        assert_eq!(panel.title, "Hilfe");
        assert_eq!(texts(panel), vec!["HelpContent", "Anleitung"]);
    }

    #[test]
    fn retranslate_keeps_shape_and_flags() {
        let mut def = MenuDefinition::compile(&help_spec(), &Messages::new()).unwrap();
        def.set_shaded(Action::HelpOpenGuide, true);
        let before = def.clone();

        let messages: Messages = [("Help", "Aide"), ("HelpGuide", "Guide")].into_iter().collect();
        def.retranslate(&messages);

        assert_eq!(def.root().entries[0].text, "Aide");
        assert_eq!(def.nodes().count(), before.nodes().count());
        assert_eq!(def.bindings(), before.bindings());
        let guide = def.resolve(&[0, 1]).unwrap();
        assert_eq!(def.entry(guide).unwrap().text, "Guide");
        assert!(def.entry(guide).unwrap().shaded);

        // Recompiling gives the same result as retranslating.
        let mut recompiled = MenuDefinition::compile(&help_spec(), &messages).unwrap();
        recompiled.set_shaded(Action::HelpOpenGuide, true);
        assert_eq!(recompiled, def);
    }

    #[test]
    fn flag_setters_touch_every_bound_entry_and_nothing_else() {
        let mut def = MenuDefinition::compile(&help_spec(), &Messages::new()).unwrap();
        assert!(def.set_ticked(Action::HelpOpenContents, true));
        let ticked = def
            .nodes()
            .flat_map(|(_, n)| n.entries.iter())
            .filter(|e| e.ticked)
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ticked, vec!["Help", "HelpContent"]);
        assert!(!def.set_ticked(Action::ApplicationQuit, true));
    }

    #[test]
    fn checksum_follows_open_path_and_changes_on_toggle() {
        let mut def = MenuDefinition::compile(&help_spec(), &Messages::new()).unwrap();
        let closed = def.checksum(&[]);
        let open = def.checksum(&[0]);
        assert_eq!(closed, open);

        def.set_shaded(Action::HelpOpenGuide, true);
        assert_eq!(def.checksum(&[]), closed, "sub-menu not open");
        assert_ne!(def.checksum(&[0]), open);

        let shaded = def.checksum(&[0]);
        def.set_ticked(Action::HelpOpenGuide, true);
        assert_ne!(def.checksum(&[0]), shaded);
    }

    #[test]
    fn set_dialog_only_repoints_dialog_links() {
        let spec = MenuSpec::new("T")
            .item("Selection", Action::TreeSelection)
            .dialog("Selection.Edit", Action::TreeSelectionEdit, Dialog::Entry);
        let mut def = MenuDefinition::compile(&spec, &Messages::new()).unwrap();
        assert!(def.set_dialog(Action::TreeSelectionEdit, Dialog::Folder));
        let edit = def.resolve(&[0, 0]).unwrap();
        assert_eq!(def.entry(edit).unwrap().child, Some(Child::Dialog(Dialog::Folder)));

        def.set_dialog(Action::TreeSelection, Dialog::Folder);
        assert!(matches!(def.root().entries[0].child, Some(Child::Menu(_))));
    }

    #[test]
    fn flat_marks_ends_and_rejects_empty() {
        let entries = vec![MenuEntry::new("a", "a"), MenuEntry::new("b", "b")];
        let def = MenuDefinition::flat("Title", &Messages::new(), entries).unwrap();
        assert_invariants(&def);
        assert!(MenuDefinition::flat("Title", &Messages::new(), Vec::new()).is_none());
    }

    #[test]
    fn render_lists_entries_with_flags() {
        let spec = MenuSpec::new("T")
            .item("Back_", Action::BrowserNavigateBack)
            .item("Stop", Action::BrowserNavigateStop);
        let mut def = MenuDefinition::compile(&spec, &Messages::new()).unwrap();
        def.set_shaded(Action::BrowserNavigateStop, true);
        assert_eq!(
            def.render(),
            "T\n  Back [BrowserNavigateBack]\n  ----\n  Stop [BrowserNavigateStop, shaded]\n"
        );
    }
}
