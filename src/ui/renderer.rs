//! Plain-text rendering of a dashboard view model.
//!
//! Output is line-oriented so it works in any terminal or log. Colors are
//! optional ANSI sequences from [`palette`](crate::ui::palette).

use crate::ui::palette;
use crate::ui::viewmodel::{Body, CardInfo, DashboardViewModel, DisplayItem, EmptyState, FilterChip};
use std::fmt::Write as _;

/// Renders the view model to stdout.
pub fn render(vm: &DashboardViewModel, colored: bool) {
    print!("{}", render_to_string(vm, colored));
}

/// Renders the view model to a string.
#[must_use]
pub fn render_to_string(vm: &DashboardViewModel, colored: bool) -> String {
    let style = Style { colored };
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}{}{}  {} whisprs, {} unread",
        style.bold(),
        vm.header.title,
        style.reset(),
        vm.header.total,
        vm.header.unread
    );
    let _ = writeln!(out, "{}", render_chips(&vm.chips));
    let _ = write!(out, "{}view: {}  sort: {}", style.dim(), vm.view_mode, vm.sort_option);
    if !vm.search_term.is_empty() {
        let _ = write!(out, "  search: \"{}\"", vm.search_term);
    }
    let _ = writeln!(out, "{}", style.reset());
    let _ = writeln!(out, "{}", "-".repeat(48));

    match &vm.body {
        Body::Empty(empty) => render_empty(&mut out, empty, style),
        Body::Items(items) => {
            for item in items {
                render_item(&mut out, item, style);
            }
        }
        Body::Card(card) => render_card(&mut out, card, style),
    }

    if let Some(opened) = &vm.opened {
        let _ = writeln!(out, "{}", "=".repeat(48));
        let _ = writeln!(out, "{}{}{}", style.type_fg(opened), opened.type_label, style.reset());
        let _ = writeln!(out, "{}", opened.content);
        let _ = writeln!(out, "{}{}  id: {}{}", style.dim(), opened.time_ago, opened.id, style.reset());
    }

    out
}

fn render_chips(chips: &[FilterChip]) -> String {
    chips
        .iter()
        .map(|chip| {
            if chip.selected {
                format!("[*{} {}]", chip.label, chip.count)
            } else {
                format!("[{} {}]", chip.label, chip.count)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_empty(out: &mut String, empty: &EmptyState, style: Style) {
    let _ = writeln!(out, "{}", empty.message);
    if !empty.subtitle.is_empty() {
        let _ = writeln!(out, "{}{}{}", style.dim(), empty.subtitle, style.reset());
    }
}

fn render_item(out: &mut String, item: &DisplayItem, style: Style) {
    let marker = if item.is_read { ' ' } else { '•' };
    let _ = writeln!(
        out,
        "{marker} {}{:<16}{} {}  {}{}{}  [{}]",
        style.type_fg(item),
        item.type_label,
        style.reset(),
        item.content,
        style.dim(),
        item.time_ago,
        style.reset(),
        item.id
    );
}

fn render_card(out: &mut String, card: &CardInfo, style: Style) {
    let prev = if card.has_previous { "<" } else { " " };
    let next = if card.has_next { ">" } else { " " };
    let _ = writeln!(out, "{prev} {} {next}", card.position);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let indent = if card.drag_offset > 0.0 {
        (card.drag_offset / 10.0) as usize
    } else {
        0
    };
    let pad = " ".repeat(indent);

    let item = &card.item;
    let _ = writeln!(out, "{pad}{}{}{}", style.type_fg(item), item.type_label, style.reset());
    let _ = writeln!(out, "{pad}{}", item.content);
    let _ = writeln!(out, "{pad}{}{}{}", style.dim(), item.time_ago, style.reset());
    if card.drag_offset != 0.0 {
        let _ = writeln!(out, "{}drag {:+.0}{}", style.dim(), card.drag_offset, style.reset());
    }
}

#[derive(Clone, Copy)]
struct Style {
    colored: bool,
}

impl Style {
    const fn bold(self) -> &'static str {
        if self.colored { palette::bold() } else { "" }
    }

    const fn dim(self) -> &'static str {
        if self.colored { palette::dim() } else { "" }
    }

    const fn reset(self) -> &'static str {
        if self.colored { palette::reset() } else { "" }
    }

    fn type_fg(self, item: &DisplayItem) -> String {
        if self.colored {
            palette::fg(palette::type_color(item.kind))
        } else {
            String::new()
        }
    }
}
