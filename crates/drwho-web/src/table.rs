/// Generic sortable, filterable table over an in-memory row set.
///
/// The results view hands its rows here rather than sorting inline.
/// Filtering is a case-insensitive substring match per column; sorting is
/// a stable sort on one column, comparing numerically when both cell
/// values parse as numbers. Unknown column keys are ignored.
use std::cmp::Ordering;

pub struct Column<T> {
    /// Stable key used in sort and filter query parameters.
    pub key: &'static str,
    /// Header text.
    pub title: &'static str,
    /// Cell text for a row.
    pub accessor: fn(&T) -> String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn parse(raw: Option<&str>) -> SortDir {
        match raw {
            Some("desc") => SortDir::Desc,
            _ => SortDir::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn toggled(self) -> SortDir {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub sort: Option<String>,
    pub dir: SortDir,
    /// (column key, needle) pairs; blank needles are inert.
    pub filters: Vec<(String, String)>,
}

/// Apply the filters and sort order to `rows`, returning references in
/// display order.
pub fn select<'a, T>(rows: &'a [T], columns: &[Column<T>], state: &TableState) -> Vec<&'a T> {
    let mut selected: Vec<&T> = rows
        .iter()
        .filter(|row| {
            state.filters.iter().all(|(key, needle)| {
                let needle = needle.trim();
                if needle.is_empty() {
                    return true;
                }
                match column(columns, key) {
                    Some(col) => (col.accessor)(row)
                        .to_lowercase()
                        .contains(&needle.to_lowercase()),
                    None => true,
                }
            })
        })
        .collect();

    if let Some(col) = state.sort.as_deref().and_then(|key| column(columns, key)) {
        selected.sort_by(|a, b| {
            let ord = compare_cells(&(col.accessor)(a), &(col.accessor)(b));
            match state.dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        });
    }

    selected
}

fn column<'a, T>(columns: &'a [Column<T>], key: &str) -> Option<&'a Column<T>> {
    columns.iter().find(|col| col.key == key)
}

fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}
