use crossterm::terminal;

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;
pub const MIN_TITLE_WIDTH: usize = 20;

/// Current terminal width, falling back to the COLUMNS environment variable
/// and finally to 80 columns when not attached to a terminal.
pub fn terminal_width() -> usize {
    if let Ok((columns, _rows)) = terminal::size() {
        if columns > 0 {
            return columns as usize;
        }
    }
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Column widths for the line-per-question formats. Only the title column is
/// elastic; the rest are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub id: usize,
    pub title: usize,
    pub difficulty: usize,
    pub status: usize,
    pub rate: usize,
}

impl ColumnWidths {
    pub fn total(&self) -> usize {
        self.id + self.title + self.difficulty + self.status + self.rate + 4
    }
}

pub fn column_widths(terminal_width: usize) -> ColumnWidths {
    const ID: usize = 6;
    const DIFFICULTY: usize = 10;
    const STATUS: usize = 12;
    const RATE: usize = 8;
    const SEPARATORS: usize = 4;

    let used = ID + DIFFICULTY + STATUS + RATE + SEPARATORS;
    let title = terminal_width.saturating_sub(used).max(MIN_TITLE_WIDTH);

    ColumnWidths {
        id: ID,
        title,
        difficulty: DIFFICULTY,
        status: STATUS,
        rate: RATE,
    }
}

pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    let length = text.chars().count();
    if length <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return "...".chars().take(max_width).collect();
    }
    let mut truncated: String = text.chars().take(max_width - 3).collect();
    truncated.push_str("...");
    truncated
}
