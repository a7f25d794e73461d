//! Output formatting for route rendering.
//!
//! Text and rich renderings come from the library's report renderers; JSON is
//! the serialized report itself.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use flightnet_lib::{ComparisonReport, RouteRenderMode, RouteReport};

use crate::terminal::{format_currency, supports_color, supports_unicode, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text report.
    #[default]
    Text,
    /// Markdown-flavoured report.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Whether decorative output (logo, footer) may be printed.
    pub fn is_human(self) -> bool {
        !matches!(self, OutputFormat::Json)
    }

    fn render_mode(self) -> RouteRenderMode {
        match self {
            OutputFormat::Rich => RouteRenderMode::RichText,
            OutputFormat::Text | OutputFormat::Json => RouteRenderMode::PlainText,
        }
    }
}

/// Print the CLI logo banner.
///
/// Uses box-drawing characters when the locale advertises UTF-8 and respects
/// `NO_COLOR` / `TERM=dumb`.
pub fn print_logo() {
    let palette = if supports_color() {
        ColorPalette::colored()
    } else {
        ColorPalette::plain()
    };
    let (cyan, orange, reset) = (palette.cyan, palette.orange, palette.reset);

    if supports_unicode() {
        println!(
            "{cyan}╭──────────────────────────────────────╮{reset}
{cyan}│{orange}   ✈  F L I G H T N E T   ·   C L I   {cyan}│{reset}
{cyan}│{orange}      fuel-aware route optimizer      {cyan}│{reset}
{cyan}╰──────────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+--------------------------------------+
|  FLIGHTNET                           |
|  >> FUEL-AWARE ROUTE OPTIMIZER       |
+--------------------------------------+{reset}"
        );
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: std::time::Duration) {
    let palette = ColorPalette::detect();
    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{elapsed_ms}ms")
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };
    println!("\n{}Completed in {time_str}{}", palette.gray, palette.reset);
}

/// Render a single route report in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_route(report: &RouteReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => render_json(report),
        _ => {
            print!("{}", report.render(format.render_mode()));
            Ok(())
        }
    }
}

/// Render a cheapest/fastest comparison in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_comparison(report: &ComparisonReport, format: OutputFormat) -> io::Result<()> {
    if format == OutputFormat::Json {
        return render_json(report);
    }

    let palette = ColorPalette::detect();
    let mode = format.render_mode();
    for (title, route) in [("CHEAPEST", &report.cheapest), ("FASTEST", &report.fastest)] {
        println!("{}--- {title} ROUTE ---{}", palette.cyan, palette.reset);
        print!("{}", route.render(mode));
        println!();
    }

    if let (Some(cheapest), Some(fastest)) = (report.cheapest.summary(), report.fastest.summary()) {
        println!(
            "{}Cheapest:{} {} in {:.1} h | {}Fastest:{} {} in {:.1} h",
            palette.white_bold,
            palette.reset,
            format_currency(cheapest.overview.total_cost),
            cheapest.overview.total_block_time_hours,
            palette.white_bold,
            palette.reset,
            format_currency(fastest.overview.total_cost),
            fastest.overview.total_block_time_hours,
        );
    }
    Ok(())
}

/// Write any serializable value as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
