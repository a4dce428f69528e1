//! Menus built at run time from live data rather than from a [`MenuSpec`].
//!
//! [`MenuSpec`]: super::MenuSpec

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::messages::Lookup;

use super::{MenuDefinition, MenuEntry};

const NO_BREAK_SPACE: char = '\u{a0}';

/// The languages menu plus the language code of each entry.
#[derive(Debug, Clone)]
pub struct LanguageMenu {
    pub definition: MenuDefinition,
    pub codes: Vec<String>,
}

/// Lists the two-letter sub-directories of `resources` that have a
/// translated `lang_xx` message. Codes without a translation are skipped.
pub fn languages(resources: &Path, messages: &dyn Lookup) -> Result<Option<LanguageMenu>> {
    let dir = fs::read_dir(resources)
        .with_context(|| format!("reading resources {}", resources.display()))?;

    let mut codes = Vec::new();
    for entry in dir {
        let entry = entry.with_context(|| format!("reading resources {}", resources.display()))?;
        if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name.chars().count() != 2 {
            continue;
        }
        if messages.get(&format!("lang_{name}")).is_none() {
            tracing::debug!(code = %name, "no language name, skipping");
            continue;
        }
        codes.push(name);
    }
    codes.sort();

    let entries = codes
        .iter()
        .map(|code| {
            let key = format!("lang_{code}");
            let text = messages.lookup(&key).to_string();
            MenuEntry::new(key, text)
        })
        .collect();
    Ok(MenuDefinition::flat("Languages", messages, entries)
        .map(|definition| LanguageMenu { definition, codes }))
}

/// Builds the recent URL menu. `None` when there is nothing to suggest.
pub fn url_suggest(urls: &[String], messages: &dyn Lookup) -> Option<MenuDefinition> {
    let entries = urls
        .iter()
        .map(|url| MenuEntry::new(url.as_str(), url.as_str()))
        .collect();
    MenuDefinition::flat("URLSuggest", messages, entries)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOption {
    pub text: String,
    pub selected: bool,
}

/// A `<select>` form control awaiting a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSelectControl {
    pub id: u64,
    pub options: Vec<FormOption>,
}

/// Builds the option menu for a select control. Spaces become no-break
/// spaces so a trailing word is not mistaken for a keyboard shortcut.
pub fn form_select(control: &FormSelectControl, messages: &dyn Lookup) -> Option<MenuDefinition> {
    let entries = control
        .options
        .iter()
        .map(|option| {
            let text = option.text.replace(' ', &NO_BREAK_SPACE.to_string());
            let mut entry = MenuEntry::new(text.clone(), text);
            entry.ticked = option.selected;
            entry
        })
        .collect();
    MenuDefinition::flat("SelectMenu", messages, entries)
}
