use std::io::Write;

use owo_colors::OwoColorize;

use panex_core::{ExtractionFault, PanRecord};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print recoverable extraction faults as status lines.
pub fn print_faults(
    w: &mut dyn Write,
    faults: &[ExtractionFault],
    color: ColorMode,
) -> std::io::Result<()> {
    for fault in faults {
        if color.enabled() {
            writeln!(w, "{}", fault.yellow())?;
        } else {
            writeln!(w, "{}", fault)?;
        }
    }
    Ok(())
}

/// Print the recognized fields. Sentinel values are dimmed so a missed
/// field stands out from a recognized one.
pub fn print_record(
    w: &mut dyn Write,
    record: &PanRecord,
    color: ColorMode,
) -> std::io::Result<()> {
    write_field(w, "Name", record.name.as_str(), record.name.is_found(), color)?;
    write_field(
        w,
        "Permanent Account Number (PAN)",
        record.pan.as_str(),
        record.pan.is_found(),
        color,
    )?;
    Ok(())
}

fn write_field(
    w: &mut dyn Write,
    label: &str,
    value: &str,
    found: bool,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        if found {
            writeln!(w, "{}: {}", label, value.green())
        } else {
            writeln!(w, "{}: {}", label, value.dimmed())
        }
    } else {
        writeln!(w, "{}: {}", label, value)
    }
}
