//! ANSI styling helpers.

/// ANSI escape sequences.
pub mod colors {
    /// Bold.
    pub const BOLD: &str = "\x1b[1m";
    /// Dim.
    pub const DIM: &str = "\x1b[2m";
    /// Cyan foreground.
    pub const CYAN: &str = "\x1b[36m";
    /// Magenta foreground.
    pub const MAGENTA: &str = "\x1b[35m";
    /// Reset all attributes.
    pub const RESET: &str = "\x1b[0m";
}

/// Separator drawn between breadcrumb labels.
const CRUMB_SEPARATOR: &str = " › ";

/// Wraps `text` in `codes` and a reset.
fn paint(codes: &str, text: &str) -> String {
    format!("{codes}{text}{}", colors::RESET)
}

/// Bold cyan, for section headings.
pub fn heading(text: &str) -> String {
    paint(&format!("{}{}", colors::BOLD, colors::CYAN), text)
}

/// Dimmed text.
pub fn dim(text: &str) -> String {
    paint(colors::DIM, text)
}

/// A dimmed horizontal rule.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}

/// Renders a header hierarchy, root first, with the leaf in bold.
///
/// An empty hierarchy renders as a dimmed placeholder.
pub fn breadcrumb(labels: &[String]) -> String {
    let Some((leaf, ancestors)) = labels.split_last() else {
        return dim("(no context)");
    };

    let mut out = String::new();
    for label in ancestors {
        out.push_str(&paint(colors::MAGENTA, label));
        out.push_str(&dim(CRUMB_SEPARATOR));
    }
    out.push_str(&paint(&format!("{}{}", colors::BOLD, colors::MAGENTA), leaf));
    out
}

/// Renders a page list such as `p. 2, 3`, or an empty string if there are none.
pub fn pages(pages: Option<&[i64]>) -> String {
    match pages {
        Some([single]) => dim(&format!("p. {single}")),
        Some(list) if !list.is_empty() => {
            let joined: Vec<String> = list.iter().map(i64::to_string).collect();
            dim(&format!("pp. {}", joined.join(", ")))
        }
        _ => String::new(),
    }
}
