use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_display_width).sum()
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = grapheme_display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Truncate or right-pad with spaces to exactly `cells` terminal cells.
pub fn fit_to_width(s: &str, cells: usize) -> String {
    let mut out = truncate_to_width(s, cells);
    let w = display_width(&out);
    if w < cells {
        out.push_str(&" ".repeat(cells - w));
    }
    out
}

/// Display width of a grapheme cluster.
fn grapheme_display_width(g: &str) -> usize {
    if g == "\t" {
        return 4;
    }
    UnicodeWidthStr::width(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("Paint wall"), 10);
    }

    #[test]
    fn display_width_wide_and_combining() {
        assert_eq!(display_width("塗装"), 4);
        assert_eq!(display_width("Gerüst"), 6);
        assert_eq!(display_width("Geru\u{0308}st"), 6);
        assert_eq!(display_width("🎉"), 2);
    }

    #[test]
    fn display_width_tab() {
        assert_eq!(display_width("a\tb"), 6);
    }

    #[test]
    fn truncate_fits() {
        assert_eq!(truncate_to_width("Fix door", 8), "Fix door");
        assert_eq!(truncate_to_width("Fix door", 20), "Fix door");
    }

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_to_width("Paint the north wall", 8), "Paint t\u{2026}");
    }

    #[test]
    fn truncate_wide_boundary() {
        // 8 cells; budget 4 after the ellipsis keeps two wide chars
        assert_eq!(truncate_to_width("足場組立", 5), "足場\u{2026}");
        let result = truncate_to_width("足場組立", 4);
        assert!(display_width(&result) <= 4);
        assert!(result.ends_with('\u{2026}'));
    }

    #[test]
    fn truncate_degenerate_widths() {
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit_to_width("T1", 4), "T1  ");
        assert_eq!(fit_to_width("Scaffold", 5), "Scaf\u{2026}");
        assert_eq!(display_width(&fit_to_width("足場", 5)), 5);
    }
}
