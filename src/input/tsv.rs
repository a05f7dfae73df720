use std::io::BufRead;

use tracing::debug;

use crate::chart::Chart;
use crate::core::Record;
use crate::error::ChartResult;
use crate::input::escape_markup;

/// Reads `label<TAB>value[<TAB>note]` lines.
///
/// Blank lines are skipped, `# text` lines set the title, lines with fewer
/// than two fields are ignored and an unparsable value reads as zero. The
/// note is only taken from lines with exactly three fields.
pub fn read_tsv<R: BufRead>(reader: R) -> ChartResult<Chart> {
    let mut title = String::new();
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        if line.len() > 2 && line.starts_with('#') {
            title = line[1..].trim().to_owned();
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 2 {
            continue;
        }
        let note = if fields.len() == 3 { fields[2] } else { "" };
        let value = fields[1].parse::<f64>().unwrap_or_else(|_| {
            debug!(field = fields[1], "unparsable value; using 0");
            0.0
        });
        records.push(Record::new(escape_markup(fields[0]), value).with_note(escape_markup(note)));
    }

    debug!(records = records.len(), "read tsv data");
    Ok(Chart::new(escape_markup(&title), records))
}
