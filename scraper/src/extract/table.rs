use scraper::{ElementRef, Html, Selector};

use crate::session::collapse_whitespace;

/// Decides whether a `<table>` is the one to extract.
///
/// The standings table has no id or class of its own, so any rule here is a
/// heuristic.
pub trait TableSelector {
    fn matches(&self, table: ElementRef<'_>) -> bool;
}

impl<F> TableSelector for F
where
    F: Fn(ElementRef<'_>) -> bool,
{
    fn matches(&self, table: ElementRef<'_>) -> bool {
        self(table)
    }
}

/// Matches the first table whose first row mentions a marker text.
#[derive(Debug, Clone)]
pub struct FirstRowContains {
    marker: String,
}

impl FirstRowContains {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl TableSelector for FirstRowContains {
    fn matches(&self, table: ElementRef<'_>) -> bool {
        let row_selector = Selector::parse("tr").unwrap();
        table
            .select(&row_selector)
            .next()
            .map(|row| collapse_whitespace(&row.text().collect::<String>()).contains(&self.marker))
            .unwrap_or(false)
    }
}

/// First table in document order accepted by `selector`.
pub fn locate_table<'a, T: TableSelector + ?Sized>(
    document: &'a Html,
    selector: &T,
) -> Option<ElementRef<'a>> {
    let table_selector = Selector::parse("table").unwrap();
    document
        .select(&table_selector)
        .find(|table| selector.matches(*table))
}

/// Trimmed `<td>` texts of every row of `table`, in document order.
///
/// Header cells (`<th>`) are not collected, so a pure header row comes back
/// empty.
pub fn table_rows(table: ElementRef<'_>) -> Vec<Vec<String>> {
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();
    table
        .select(&row_selector)
        .map(|row| {
            row.select(&cell_selector)
                .map(|cell| collapse_whitespace(&cell.text().collect::<String>()))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <table><tr><td>Hitting Statistics</td></tr><tr><td>x</td></tr></table>
        <table><tr><td>Pitching</td></tr><tr><td>Team Standings</td></tr></table>
        <table><tr><th>1995 AL Team   Standings</th></tr><tr><td>East</td></tr></table>
        <table><tr><td>1995 AL Team Standings</td></tr><tr><td>West</td></tr></table>
    "#;

    #[test]
    fn test_first_row_marker_picks_first_match() {
        let document = Html::parse_document(PAGE);
        let table = locate_table(&document, &FirstRowContains::new("Team Standings")).unwrap();
        let rows = table_rows(table);
        assert_eq!(rows, vec![Vec::<String>::new(), vec!["East".to_string()]]);
    }

    #[test]
    fn test_marker_only_checked_in_first_row() {
        let document = Html::parse_document(PAGE);
        let table = locate_table(&document, &FirstRowContains::new("Pitching")).unwrap();
        assert_eq!(table_rows(table)[1], vec!["Team Standings".to_string()]);
    }

    #[test]
    fn test_no_table_matches() {
        let document = Html::parse_document(PAGE);
        assert!(locate_table(&document, &FirstRowContains::new("Fielding")).is_none());
    }

    fn has_two_rows(table: ElementRef<'_>) -> bool {
        table_rows(table).len() == 2
    }

    #[test]
    fn test_function_selector() {
        let document = Html::parse_document(PAGE);
        let table = locate_table(&document, &has_two_rows).unwrap();
        assert_eq!(table_rows(table)[0], vec!["Hitting Statistics".to_string()]);
    }
}
