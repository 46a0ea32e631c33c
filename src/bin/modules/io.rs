use super::cli::OutputFormat;
use super::error::CliError;
use enercalc::server::form::parse_field;
use enercalc::{IndicatorTable, Report};
use prettytable::*;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Splits a `KEY=N` argument into an equipment key and its count.
pub fn parse_count(argument: &str) -> Result<(String, i64), CliError> {
    let (key, count) = argument
        .split_once('=')
        .ok_or_else(|| CliError::CountParse {
            argument: argument.to_string(),
            details: "expected KEY=N".to_string(),
        })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::CountParse {
            argument: argument.to_string(),
            details: "missing equipment key".to_string(),
        });
    }

    let count = parse_field(key, Some(count)).map_err(|e| CliError::CountParse {
        argument: argument.to_string(),
        details: e.to_string(),
    })?;

    Ok((key.to_string(), count))
}

pub fn get_writer(output_path: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match output_path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

pub fn write_report<R: Report>(
    mut writer: Box<dyn Write>,
    report: &R,
    format: &OutputFormat,
    precision: usize,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Pretty => write_pretty_table(&mut writer, report, precision)?,
        OutputFormat::Csv => write_csv(&mut writer, report, precision)?,
        OutputFormat::Json => {
            report.ensure_finite()?;
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn box_format(with_intern: bool) -> format::TableFormat {
    let mut builder = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Title],
            format::LineSeparator::new('═', '╪', '╞', '╡'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1);

    if with_intern {
        builder = builder.separators(
            &[format::LinePosition::Intern],
            format::LineSeparator::new('─', '┼', '├', '┤'),
        );
    }
    builder.build()
}

fn write_pretty_table<R: Report>(
    writer: &mut dyn Write,
    report: &R,
    precision: usize,
) -> Result<(), CliError> {
    let mut title_table = Table::new();
    title_table.set_format(box_format(true));
    title_table.add_row(row![bc->report.title()]);
    title_table.print(writer)?;
    writeln!(writer)?;

    let mut data_table = Table::new();
    data_table.set_format(box_format(false));
    data_table.set_titles(row![bc->"Quantity", bc->"Value", bc->"Unit"]);
    for entry in report.entries().into_iter().chain(report.diagnostics()) {
        data_table.add_row(row![
            l->entry.name,
            r->entry.quantity.format(precision),
            l->entry.unit
        ]);
    }
    data_table.print(writer)?;

    Ok(())
}

fn write_csv<R: Report>(
    writer: &mut dyn Write,
    report: &R,
    precision: usize,
) -> Result<(), CliError> {
    writeln!(writer, "name,value,unit")?;
    for entry in report.entries().into_iter().chain(report.diagnostics()) {
        writeln!(
            writer,
            "{},{},{}",
            entry.name,
            entry.quantity.format(precision),
            entry.unit
        )?;
    }
    Ok(())
}

/// Prints the equipment classes of `table`, one per row.
pub fn write_indicator_table(
    mut writer: Box<dyn Write>,
    table: &IndicatorTable,
    format: &OutputFormat,
    precision: usize,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Pretty => {
            let mut data_table = Table::new();
            data_table.set_format(box_format(false));
            data_table.set_titles(row![
                bc->"Key",
                bc->"Description",
                bc->"ω (1/yr)",
                bc->"t_r (h)",
                bc->"μ (1/yr)",
                bc->"t_p (h)"
            ]);
            for (key, indicator) in table.iter() {
                data_table.add_row(row![
                    l->key,
                    l->indicator.description,
                    r->format!("{:.prec$}", indicator.failure_rate, prec = precision),
                    r->format!("{:.prec$}", indicator.recovery_time, prec = precision),
                    r->format!("{:.prec$}", indicator.repair_frequency, prec = precision),
                    r->indicator.repair_duration.map_or_else(|| "-".to_string(), |d| d.to_string())
                ]);
            }
            data_table.print(&mut writer)?;
        }
        OutputFormat::Csv => {
            writeln!(
                writer,
                "key,failure_rate,recovery_time,repair_frequency,repair_duration"
            )?;
            for (key, indicator) in table.iter() {
                writeln!(
                    writer,
                    "{},{:.*},{:.*},{:.*},{}",
                    key,
                    precision,
                    indicator.failure_rate,
                    precision,
                    indicator.recovery_time,
                    precision,
                    indicator.repair_frequency,
                    indicator
                        .repair_duration
                        .map_or_else(String::new, |d| d.to_string())
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, table)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
