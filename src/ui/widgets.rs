//! Field widgets: the primitive inputs the wizard steps are built from.
//!
//! [`ChipGroup`] is pure state so its selection cap can be tested without a
//! terminal; the `prompt_*` functions drive `dialoguer` and are only used by
//! the interactive flow.

use anyhow::Result;
use dialoguer::{Input, Select};

use crate::ui::style as ui;

/// What happened when an option was toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// Selecting would exceed the cap; nothing changed.
    AtCapacity,
    /// The option is not offered by this group; nothing changed.
    Unknown,
}

/// Bounded multi-select over a fixed option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipGroup {
    options: Vec<String>,
    selected: Vec<String>,
    max_selection: usize,
}

impl ChipGroup {
    pub fn new<I, S>(options: I, max_selection: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected: Vec::new(),
            max_selection,
        }
    }

    /// Start from an existing selection, in order. Entries outside the option
    /// list are kept so they can still be deselected; duplicates and anything
    /// past the cap are dropped.
    pub fn with_selected(mut self, selected: &[String]) -> Self {
        for option in selected {
            if self.selected.len() >= self.max_selection {
                break;
            }
            if !self.is_selected(option) {
                self.selected.push(option.clone());
            }
        }
        self
    }

    pub fn toggle(&mut self, option: &str) -> ToggleOutcome {
        if let Some(pos) = self.selected.iter().position(|item| item == option) {
            self.selected.remove(pos);
            return ToggleOutcome::Deselected;
        }
        if !self.options.iter().any(|item| item == option) {
            return ToggleOutcome::Unknown;
        }
        if self.selected.len() >= self.max_selection {
            return ToggleOutcome::AtCapacity;
        }
        self.selected.push(option.to_string());
        ToggleOutcome::Selected
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.selected.iter().any(|item| item == option)
    }

    /// Unselected options cannot be picked once the cap is reached.
    pub fn is_disabled(&self, option: &str) -> bool {
        !self.is_selected(option) && self.selected.len() >= self.max_selection
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Options followed by any selected entries the option list lacks.
    pub fn choices(&self) -> Vec<String> {
        let extra = self
            .selected
            .iter()
            .filter(|item| !self.options.contains(item));
        self.options.iter().chain(extra).cloned().collect()
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn max_selection(&self) -> usize {
        self.max_selection
    }

    pub fn counter(&self) -> String {
        format!("{}/{} selected", self.selected.len(), self.max_selection)
    }

    pub fn into_selected(self) -> Vec<String> {
        self.selected
    }
}

/// Single-line text input. Required inputs refuse blank answers.
pub fn prompt_text(label: &str, hint: &str, current: &str, required: bool) -> Result<String> {
    let prompt = if hint.is_empty() {
        format!("  {label}")
    } else {
        format!("  {label} {}", ui::dim(format!("({hint})")))
    };

    let mut input = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(!required);
    if !current.is_empty() {
        input = input.with_initial_text(current);
    }
    if required {
        input = input.validate_with(|value: &String| -> Result<(), &str> {
            if value.trim().is_empty() {
                Err("This field is required")
            } else {
                Ok(())
            }
        });
    }

    Ok(input.interact_text()?.trim().to_string())
}

/// Free-text area. Rendered as a single prompt line in the terminal.
pub fn prompt_text_area(label: &str, hint: &str, current: &str, required: bool) -> Result<String> {
    prompt_text(label, hint, current, required)
}

/// Pick one value from `options`. Optional selects get a leading "skip" entry
/// that leaves the field empty.
pub fn prompt_select(label: &str, options: &[&str], current: &str, required: bool) -> Result<String> {
    let mut items: Vec<String> = Vec::with_capacity(options.len() + 1);
    if !required {
        items.push(ui::dim("(skip)"));
    }
    items.extend(options.iter().map(|option| (*option).to_string()));

    let offset = usize::from(!required);
    let default = options
        .iter()
        .position(|option| *option == current)
        .map_or(0, |pos| pos + offset);

    let idx = Select::new()
        .with_prompt(format!("  {label}"))
        .items(&items)
        .default(default)
        .interact()?;

    if idx < offset {
        Ok(String::new())
    } else {
        Ok(options[idx - offset].to_string())
    }
}

/// Toggle chips until the user picks "Done". Selecting past the cap is a
/// no-op with a notice.
pub fn prompt_chip_group(label: &str, mut group: ChipGroup) -> Result<Vec<String>> {
    loop {
        let choices = group.choices();
        let mut items: Vec<String> = choices
            .iter()
            .map(|option| {
                if group.is_selected(option) {
                    format!("[x] {option}")
                } else if group.is_disabled(option) {
                    ui::dim(format!("[ ] {option}"))
                } else {
                    format!("[ ] {option}")
                }
            })
            .collect();
        items.push(ui::success("Done"));

        let idx = Select::new()
            .with_prompt(format!(
                "  {label} {}",
                ui::dim(format!("(select max {}, {})", group.max_selection(), group.counter()))
            ))
            .items(&items)
            .default(items.len() - 1)
            .interact()?;

        let Some(option) = choices.get(idx) else {
            return Ok(group.into_selected());
        };

        if group.toggle(option) == ToggleOutcome::AtCapacity {
            println!(
                "  {} {}",
                ui::warning("!"),
                ui::dim(format!(
                    "At most {} channels. Deselect one first.",
                    group.max_selection()
                ))
            );
        }
    }
}
