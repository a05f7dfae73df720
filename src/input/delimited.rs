use std::io::Read;

use tracing::{debug, warn};

use crate::chart::Chart;
use crate::core::Record;
use crate::error::ChartResult;
use crate::input::escape_markup;

/// Finds the label and value column indices named by `columns`
/// (`"label,value"`) in a header row.
///
/// Defaults to `(0, 1)` when `columns` does not name exactly two fields; a
/// name that is not found keeps its default.
#[must_use]
pub fn header_indices(header: &[&str], columns: &str) -> (usize, usize) {
    let (mut label_index, mut value_index) = (0, 1);
    let names: Vec<&str> = columns.split(',').collect();
    let [label_name, value_name] = names.as_slice() else {
        return (label_index, value_index);
    };
    for (i, field) in header.iter().enumerate() {
        if field == label_name {
            label_index = i;
        }
        if field == value_name {
            value_index = i;
        }
    }
    (label_index, value_index)
}

/// Reads comma-separated rows.
///
/// A row whose first field is `#` sets the title from its second field.
/// With `columns`, the first row is a header selecting the label and value
/// columns and its value column name becomes the title. Malformed rows are
/// logged and skipped; unparsable values read as zero.
pub fn read_csv<R: Read>(reader: R, columns: Option<&str>) -> ChartResult<Chart> {
    let columns = columns.filter(|columns| !columns.is_empty());
    let mut input = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut title = String::new();
    let mut records = Vec::new();
    let (mut label_index, mut value_index) = (0, 1);

    for (row, result) in input.records().enumerate() {
        let row_record = match result {
            Ok(row_record) => row_record,
            Err(err) => {
                warn!(row, error = %err, "skipping malformed csv row");
                continue;
            }
        };
        let fields: Vec<&str> = row_record.iter().collect();
        if fields.len() < 2 {
            continue;
        }
        if fields[0] == "#" {
            title = fields[1].to_owned();
            continue;
        }
        if let (0, Some(columns)) = (row, columns) {
            (label_index, value_index) = header_indices(&fields, columns);
            title = fields[value_index].to_owned();
            continue;
        }

        let (Some(label), Some(raw_value)) = (fields.get(label_index), fields.get(value_index))
        else {
            warn!(row, fields = fields.len(), "csv row is missing selected columns");
            continue;
        };
        let note = if fields.len() == 3 { fields[2] } else { "" };
        let value = raw_value.parse::<f64>().unwrap_or_else(|_| {
            debug!(row, field = *raw_value, "unparsable value; using 0");
            0.0
        });
        records.push(Record::new(escape_markup(label), value).with_note(escape_markup(note)));
    }

    debug!(records = records.len(), "read csv data");
    Ok(Chart::new(escape_markup(&title), records))
}

#[cfg(test)]
mod tests {
    use super::{header_indices, read_csv};

    #[test]
    fn header_indices_select_named_columns() {
        let header = ["Date", "Open", "High", "Close"];
        assert_eq!(header_indices(&header, "Date,Close"), (0, 3));
        assert_eq!(header_indices(&header, "Open,High"), (1, 2));
        assert_eq!(header_indices(&header, "Date"), (0, 1));
        assert_eq!(header_indices(&header, "Missing,Close"), (0, 3));
    }

    #[test]
    fn reads_selected_columns_with_header_title() {
        let input = "Date,Open,Close\n2024-01-02,10,11.5\n2024-01-03,11,12\n";
        let chart = read_csv(input.as_bytes(), Some("Date,Close")).expect("csv");
        assert_eq!(chart.title, "Close");
        assert_eq!(chart.records.len(), 2);
        assert_eq!(chart.records[0].label, "2024-01-02");
        assert_eq!(chart.records[0].value, 11.5);
        assert_eq!(chart.records[1].value, 12.0);
    }

    #[test]
    fn hash_row_sets_title_without_header_selection() {
        let input = "#,Sales <2024>\nNorth,10,red\nSouth,oops\n";
        let chart = read_csv(input.as_bytes(), None).expect("csv");
        assert_eq!(chart.title, "Sales &lt;2024&gt;");
        assert_eq!(chart.records.len(), 2);
        assert_eq!(chart.records[0].note, "red");
        assert_eq!(chart.records[1].value, 0.0);
    }
}
