//! Result set rendering

use crate::accumulator::RenderMode;
use crate::connection::{Cell, RowCursor};
use crate::filter::FilterDirective;
use myclient_diagnostics::{ClientError, Result};
use std::io::Write;
use std::time::{Duration, Instant};

/// Text printed for a SQL `NULL`
pub const NULL_TEXT: &str = "NULL";

const VERTICAL_NAME_WIDTH: usize = 30;
const BANNER_STARS: &str = "***************************";

/// What a render pass printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// Rows admitted by the filter and printed
    pub rows: usize,
    /// Rows read from the cursor
    pub scanned: usize,
}

fn cell_text(cell: &Cell) -> &str {
    cell.as_deref().unwrap_or(NULL_TEXT)
}

/// Tab-joined column names
pub fn format_header(columns: &[String]) -> String {
    columns.join("\t")
}

/// Tab-joined cells of one row
pub fn format_tabular_row(row: &[Cell]) -> String {
    row.iter().map(cell_text).collect::<Vec<_>>().join("\t")
}

/// Banner plus one right-aligned `name: value` line per column
pub fn format_vertical_row(number: usize, columns: &[String], row: &[Cell]) -> String {
    let mut text = format!("{} {}. row {}", BANNER_STARS, number, BANNER_STARS);
    for (name, cell) in columns.iter().zip(row) {
        text.push('\n');
        text.push_str(&format!(
            "{:>width$}: {}",
            name,
            cell_text(cell),
            width = VERTICAL_NAME_WIDTH
        ));
    }
    text
}

/// Trailing `N rows in set (S.SS sec)` line
pub fn format_summary(rows: usize, mode: RenderMode, elapsed: Duration) -> String {
    let noun = match mode {
        RenderMode::Tabular => "rows",
        RenderMode::Vertical => "row",
    };
    format!("{} {} in set ({:.2} sec)", rows, noun, elapsed.as_secs_f64())
}

/// Drain `cursor` into `out`.
///
/// The filter only applies in tabular mode. The summary line is always
/// written; a cursor error stops reading and is returned after it.
pub fn render_rows(
    cursor: &mut dyn RowCursor,
    mode: RenderMode,
    filter: Option<&FilterDirective>,
    start: Instant,
    out: &mut dyn Write,
) -> Result<RenderSummary> {
    let columns = cursor.columns().to_vec();
    let filter = match mode {
        RenderMode::Tabular => filter,
        RenderMode::Vertical => None,
    };

    if mode == RenderMode::Tabular {
        writeln!(out, "{}", format_header(&columns))?;
    }

    let mut summary = RenderSummary {
        rows: 0,
        scanned: 0,
    };
    let mut failure = None;

    while let Some(next) = cursor.next_row() {
        let row = match next {
            Ok(row) => row,
            Err(e) => {
                failure = Some(e);
                break;
            }
        };
        summary.scanned += 1;

        if filter.is_some_and(|f| !f.admits(&row)) {
            continue;
        }
        summary.rows += 1;

        match mode {
            RenderMode::Tabular => writeln!(out, "{}", format_tabular_row(&row))?,
            RenderMode::Vertical => {
                writeln!(out, "{}", format_vertical_row(summary.rows, &columns, &row))?
            }
        }
    }

    writeln!(out, "{}", format_summary(summary.rows, mode, start.elapsed()))?;

    match failure {
        Some(e) => Err(ClientError::Render(e)),
        None => Ok(summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_wording_depends_on_mode() {
        let elapsed = Duration::from_millis(1234);
        assert_eq!(
            format_summary(2, RenderMode::Tabular, elapsed),
            "2 rows in set (1.23 sec)"
        );
        assert_eq!(
            format_summary(1, RenderMode::Vertical, elapsed),
            "1 row in set (1.23 sec)"
        );
    }

    #[test]
    fn vertical_row_layout() {
        let columns = vec!["id".to_string(), "name".to_string()];
        let row = vec![Some("7".to_string()), None];
        let expected = format!(
            "*************************** 3. row ***************************\n{:>30}: 7\n{:>30}: NULL",
            "id", "name"
        );
        assert_eq!(format_vertical_row(3, &columns, &row), expected);
    }

    #[test]
    fn tabular_row_renders_null() {
        let row = vec![Some("a".to_string()), None, Some(String::new())];
        assert_eq!(format_tabular_row(&row), "a\tNULL\t");
    }
}
