use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Args, Parser, Subcommand};
use rangecal_core::day::{Bounds, DayCell, Selection};
use rangecal_core::grid::validate_month;
use rangecal_core::list::build_month_list;
use rangecal_core::locale::MonthNames;
use rangecal_core::month::MonthRecord;
use rangecal_core::window::select_initial_window;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "rangecal",
    about = "Render and inspect date-range picker calendar models"
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RangeArgs {
    /// Selection start date (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Selection end date (YYYY-MM-DD)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Earliest visible date (YYYY-MM-DD)
    #[arg(long)]
    min: Option<NaiveDate>,

    /// Latest visible date (YYYY-MM-DD)
    #[arg(long)]
    max: Option<NaiveDate>,
}

impl RangeArgs {
    fn selection(&self) -> Selection {
        Selection {
            start: self.start,
            end: self.end,
        }
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            min: self.min,
            max: self.max,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single month grid
    Show {
        /// Month number (1-12)
        #[arg(short, long)]
        month: u32,

        /// Calendar year
        #[arg(short, long)]
        year: i32,

        #[command(flatten)]
        range: RangeArgs,

        /// Month-name table: english, spanish
        #[arg(long, default_value = "english")]
        locale: String,

        /// Emit the month record as JSON instead of a text grid
        #[arg(long)]
        json: bool,
    },

    /// Build a list of consecutive month records
    List {
        /// First month of the list (any date within it, YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,

        /// Additional months emitted after the first
        #[arg(long)]
        months: usize,

        /// How many leading months are marked visible
        #[arg(long, default_value = "2")]
        visible: usize,

        #[command(flatten)]
        range: RangeArgs,

        /// Month-name table: english, spanish
        #[arg(long, default_value = "english")]
        locale: String,

        /// Emit the records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a month list and narrow it to the window around a focus date
    Window {
        /// First month of the list (any date within it, YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,

        /// Additional months emitted after the first
        #[arg(long)]
        months: usize,

        /// How many leading months are marked visible before windowing
        #[arg(long, default_value = "2")]
        visible: usize,

        /// Focus date the window centers on (YYYY-MM-DD)
        #[arg(long)]
        focus: NaiveDate,

        /// Maximum number of materialized month records
        #[arg(long, default_value = "12")]
        max_size: usize,

        /// Months kept visible on each side of the focus
        #[arg(long, default_value = "2")]
        diff_visible: usize,

        #[command(flatten)]
        range: RangeArgs,

        /// Month-name table: english, spanish
        #[arg(long, default_value = "english")]
        locale: String,

        /// Emit the windowed records as JSON
        #[arg(long)]
        json: bool,
    },
}

fn month_names(locale: &str) -> Result<MonthNames> {
    match locale {
        "english" => Ok(MonthNames::english()),
        "spanish" => Ok(MonthNames::spanish()),
        other => anyhow::bail!("unknown locale: {other}. Expected: english, spanish"),
    }
}

/// One grid cell as a fixed-width token: day number plus a marker for
/// selection endpoints (#), active range days (*), and out-of-bounds days (-).
fn render_cell(day: &DayCell) -> String {
    if !day.is_month_date {
        return "  .".to_string();
    }
    let mark = if day.is_start_date || day.is_end_date {
        '#'
    } else if day.is_active {
        '*'
    } else if !day.is_visible {
        '-'
    } else {
        ' '
    };
    format!("{:>2}{mark}", day.date.day())
}

fn render_grid(days: &[DayCell]) -> String {
    let mut out = String::from("Mo  Tu  We  Th  Fr  Sa  Su\n");
    for week in days.chunks(7) {
        let row: Vec<String> = week.iter().map(render_cell).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

fn cmd_show(
    month: u32,
    year: i32,
    range: &RangeArgs,
    names: &MonthNames,
    json: bool,
) -> Result<()> {
    let month = validate_month(month).context("invalid --month")?;
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
        .with_context(|| format!("unrepresentable month: {year}-{month}"))?;

    let months = build_month_list(first_of_month, 0, 1, range.selection(), range.bounds(), names);
    let record = &months[0];

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    println!("{}", record.name);
    print!("{}", render_grid(&record.days));
    Ok(())
}

fn print_record_lines(months: &[MonthRecord]) {
    for month in months {
        let in_month = month.days.iter().filter(|d| d.is_month_date).count();
        let marker = if month.is_visible { "*" } else { " " };
        println!(
            "{marker} {:<8} {:<16} {in_month} day(s), {} cell(s)",
            month.id,
            month.name,
            month.days.len()
        );
    }
}

fn cmd_list(
    from: NaiveDate,
    months_length: usize,
    visible: usize,
    range: &RangeArgs,
    names: &MonthNames,
    json: bool,
) -> Result<()> {
    let months = build_month_list(
        from,
        months_length,
        visible,
        range.selection(),
        range.bounds(),
        names,
    );
    info!("built {} month record(s)", months.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&months)?);
        return Ok(());
    }

    print_record_lines(&months);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_window(
    from: NaiveDate,
    months_length: usize,
    visible: usize,
    focus: NaiveDate,
    max_size: usize,
    diff_visible: usize,
    range: &RangeArgs,
    names: &MonthNames,
    json: bool,
) -> Result<()> {
    let months = build_month_list(
        from,
        months_length,
        visible,
        range.selection(),
        range.bounds(),
        names,
    );
    let full_size = months.len();
    let windowed = select_initial_window(months, focus, max_size, diff_visible);
    info!(
        "windowed {} of {} month record(s) around {}-{}",
        windowed.len(),
        full_size,
        focus.year(),
        focus.month()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&windowed)?);
        return Ok(());
    }

    print_record_lines(&windowed);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    match &cli.command {
        Commands::Show {
            month,
            year,
            range,
            locale,
            json,
        } => {
            let names = month_names(locale)?;
            cmd_show(*month, *year, range, &names, *json)?;
        }
        Commands::List {
            from,
            months,
            visible,
            range,
            locale,
            json,
        } => {
            let names = month_names(locale)?;
            cmd_list(*from, *months, *visible, range, &names, *json)?;
        }
        Commands::Window {
            from,
            months,
            visible,
            focus,
            max_size,
            diff_visible,
            range,
            locale,
            json,
        } => {
            let names = month_names(locale)?;
            cmd_window(
                *from,
                *months,
                *visible,
                *focus,
                *max_size,
                *diff_visible,
                range,
                &names,
                *json,
            )?;
        }
    }

    Ok(())
}
