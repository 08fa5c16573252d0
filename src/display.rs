//! Terminal rendering of search results and the assignment table.
//!
//! Everything returns a `String` so the CLI and the interactive session
//! print the same text. Colours go through `colored`, which honours
//! `--no-color` and `NO_COLOR` via its global override.

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::debug;

use crate::actions::action_labels;
use crate::cards::Hand;
use crate::chart::{ActionFrequencies, StrategyIndex};
use crate::rank_shape::ALL_SHAPES;
use crate::suit_assign::{assign, table_entry, SuitAssignment};
use crate::suit_pattern::{SuitPattern, ALL_PATTERNS, DISPLAY_ORDER};

pub const PROMPT_MESSAGE: &str = "Enter card ranks to see matching hands";
pub const LOADING_MESSAGE: &str = "Loading data...";
pub const NO_RESULTS_MESSAGE: &str = "No matching hands found";
pub const NO_PATTERN_DATA_MESSAGE: &str = "No pattern data available for this combination";

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

pub fn render_cards(hand: &Hand, assignment: &SuitAssignment) -> String {
    hand.ranks()
        .iter()
        .zip(assignment.suits())
        .zip(assignment.colors())
        .map(|((rank, suit), (r, g, b))| {
            format!(" {}{} ", rank, suit.glyph())
                .black()
                .bold()
                .on_truecolor(r, g, b)
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cards drawn when no suit assignment exists for the pattern.
pub fn render_unresolvable(hand: &Hand) -> String {
    let cards = hand
        .ranks()
        .iter()
        .map(|rank| format!(" {}? ", rank).white().bold().on_truecolor(90, 30, 30).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{}  {}", cards, "cannot assign suits".red())
}

// ---------------------------------------------------------------------------
// Search results
// ---------------------------------------------------------------------------

pub fn render_pattern(hand: &Hand, pattern: SuitPattern, freqs: &ActionFrequencies) -> String {
    let cards = match assign(pattern, hand) {
        Ok(assignment) => render_cards(hand, &assignment),
        Err(e) => {
            debug!(error = %e, "unresolvable suit assignment");
            render_unresolvable(hand)
        }
    };
    let labels = action_labels(freqs);
    format!(
        "  {:<12} {}\n               {}\n               {}",
        pattern.name().dimmed(),
        cards,
        labels.sb_line(),
        labels.bb_line(),
    )
}

pub fn render_combo(combo: &str, chart: &StrategyIndex) -> String {
    let mut lines = vec![format!("{}", combo.to_uppercase().bold())];

    let strategies = match chart.strategies(combo) {
        Some(s) => s,
        None => {
            lines.push(format!("  {}", NO_PATTERN_DATA_MESSAGE.dimmed()));
            return lines.join("\n");
        }
    };

    let hand = match Hand::parse(combo) {
        Ok(hand) => hand,
        Err(e) => {
            lines.push(format!("  {}", e.to_string().red()));
            return lines.join("\n");
        }
    };

    for pattern in DISPLAY_ORDER {
        if let Some(freqs) = strategies.get(&pattern) {
            lines.push(render_pattern(&hand, pattern, freqs));
        }
    }
    lines.join("\n")
}

pub fn render_results(matches: &[String], chart: &StrategyIndex) -> String {
    if matches.is_empty() {
        return NO_RESULTS_MESSAGE.yellow().to_string();
    }
    matches
        .iter()
        .map(|combo| render_combo(combo, chart))
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ---------------------------------------------------------------------------
// Assignment table
// ---------------------------------------------------------------------------

pub fn render_table() -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("shape")];
    header.extend(ALL_PATTERNS.iter().map(|p| Cell::new(p.name())));
    table.set_header(header);

    for shape in ALL_SHAPES {
        let mut row = vec![Cell::new(shape.as_str())];
        for pattern in ALL_PATTERNS {
            let cell = match table_entry(shape, pattern) {
                Some(entry) => Cell::new(entry.code()),
                None => Cell::new("-").fg(Color::Red),
            };
            row.push(cell.set_alignment(CellAlignment::Center));
        }
        table.add_row(row);
    }
    table.to_string()
}
