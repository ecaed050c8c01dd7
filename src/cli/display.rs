// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the levtrie CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `LEVTRIE_THEME` first (for explicit control), then `COLORFGBG` (set by some
//! terminals), then defaults to dark. Respects `NO_COLOR` and falls back to
//! plain text when stdout is not a TTY, so piping results into a file gives
//! clean words.
//!
//! # Theme detection order
//!
//! 1. `LEVTRIE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(name: &str) -> Option<Theme> {
    match name.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Background color index from `COLORFGBG` ("fg;bg"); 7+ except 8 is light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    Some(if bg >= 7 && bg != 8 {
        Theme::Light
    } else {
        Theme::Dark
    })
}

fn detect_theme() -> Theme {
    std::env::var("LEVTRIE_THEME")
        .ok()
        .and_then(|name| parse_theme(&name))
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|value| theme_from_colorfgbg(&value))
        })
        .unwrap_or(Theme::Dark)
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let (border, reset) = (border(), reset());
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset,
        content,
        " ".repeat(pad),
        border,
        reset
    );
}

/// Print a `label  value` line inside the box.
pub fn field(label: &str, value: &str) {
    let label = themed(GRAY, &[], &format!("{:<18}", label));
    row(&format!(" {}{}", label, value));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let (border, reset) = (border(), reset());
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// One query's line in verbose mode: `query (3): a, b, c`
pub fn query_line(query: &str, matches: &[&str]) -> String {
    let count = if matches.is_empty() {
        themed(RED, &[], "0")
    } else {
        themed(GREEN, &[BOLD], &matches.len().to_string())
    };
    format!(
        "{} ({}): {}",
        themed(CYAN, &[BOLD], query),
        count,
        matches.join(", ")
    )
}

/// Color-coded duration in seconds (green=fast, yellow=medium, red=slow)
pub fn timing_s(value: f64) -> String {
    let text = format!("{:.3} s", value);
    let color: fn() -> String = if value < 1.0 {
        GREEN
    } else if value < 10.0 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[], &text)
}

/// Cache hit ratio as a percentage, `N/A` before the first lookup.
pub fn hit_ratio(hits: usize, misses: usize) -> String {
    let total = hits + misses;
    if total == 0 {
        return themed(GRAY, &[DIM], "N/A");
    }
    let pct = hits as f64 / total as f64 * 100.0;
    format!("{:.1}% ({} hits / {} lookups)", pct, hits, total)
}
