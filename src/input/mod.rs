//! Tabular readers that turn text input into a `Chart`.
//!
//! Two layouts are supported: tab-separated `label<TAB>value[<TAB>note]`
//! lines, and delimited (CSV) rows with optional header-based column
//! selection. Labels, notes and titles are markup-escaped on the way in.

mod delimited;
mod escape;
mod tsv;

use std::io::{BufReader, Read};

use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::error::ChartResult;

pub use delimited::{header_indices, read_csv};
pub use escape::escape_markup;
pub use tsv::read_tsv;

/// Which reader to use for a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Tsv,
    /// `columns` names the label and value columns, e.g. `"Date,Close"`.
    Csv {
        #[serde(default)]
        columns: Option<String>,
    },
}

/// Reads a chart from `reader` in the given format.
pub fn read_chart<R: Read>(reader: R, format: &InputFormat) -> ChartResult<Chart> {
    match format {
        InputFormat::Tsv => read_tsv(BufReader::new(reader)),
        InputFormat::Csv { columns } => read_csv(reader, columns.as_deref()),
    }
}
