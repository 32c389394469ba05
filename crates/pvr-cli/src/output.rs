use std::error::Error;
use std::io::{self, Write};

use pvr_core::serde::to_pretty_json;
use pvr_query::QueryOutcome;
use pvr_registry::CsvRecord;
use serde::Serialize;

use crate::config::OutputFormat;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", to_pretty_json(value)?);
    Ok(())
}

/// Writes a query result to stdout in the requested format.
pub fn print_outcome<R>(
    outcome: &QueryOutcome<'_, R>,
    format: OutputFormat,
    label: &str,
) -> Result<(), Box<dyn Error>>
where
    R: CsvRecord + Serialize,
{
    match format {
        OutputFormat::Json => print_json(outcome),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(io::stdout().lock());
            wtr.write_record(R::HEADER)?;
            for record in outcome.iter() {
                wtr.write_record(record.csv_row())?;
            }
            wtr.flush()?;
            Ok(())
        }
        OutputFormat::Table => {
            let mut out = io::stdout().lock();
            if outcome.matched_nothing() {
                writeln!(out, "No {label} match the current filters.")?;
                return Ok(());
            }
            if outcome.is_empty() {
                writeln!(out, "No {label} found.")?;
                return Ok(());
            }
            let rows: Vec<Vec<String>> = outcome.iter().map(CsvRecord::csv_row).collect();
            write_table(&mut out, R::HEADER, &rows)?;
            writeln!(out, "{} of {} {label}", outcome.len(), outcome.scanned)?;
            Ok(())
        }
    }
}

fn write_table<W: Write>(out: &mut W, header: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let header: Vec<String> = header.iter().map(|h| h.to_uppercase()).collect();
    write_row(out, &widths, &header)?;
    for row in rows {
        write_row(out, &widths, row)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, widths: &[usize], cells: &[String]) -> io::Result<()> {
    let line: Vec<String> = widths
        .iter()
        .zip(cells)
        .map(|(&width, cell)| format!("{cell:<width$}"))
        .collect();
    writeln!(out, "{}", line.join("  ").trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_pads_columns_to_widest_cell() {
        let mut buf = Vec::new();
        let rows = vec![
            vec!["qa".to_string(), "1.0.0".to_string()],
            vec!["classification".to_string(), "2.0.0".to_string()],
        ];
        write_table(&mut buf, &["type", "version"], &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "TYPE            VERSION");
        assert_eq!(lines[1], "qa              1.0.0");
        assert_eq!(lines[2], "classification  2.0.0");
    }
}
