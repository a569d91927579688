use anyhow::Result;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use pmicbase::catalog::Catalog;
use pmicbase::model::PartRecord;
use pmicbase::stats::percentage;

/// Width of the text bars in the `stats` output.
const BAR_WIDTH: usize = 20;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse & analyze PMIC part reference catalogs", long_about = None)]
struct Cli {
    /// Catalog JSON file to use instead of the bundled dataset
    #[arg(long, value_name = "FILE")]
    data: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search parts by reference substring, optionally narrowed to a model prefix
    Search {
        /// Substring to match against part references (matches all if omitted)
        term: Option<String>,

        /// Keep only parts whose reference starts with this prefix
        #[arg(short, long, value_name = "PREFIX")]
        model: Option<String>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the distinct derived model keys
    Models {
        /// Print the keys as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show aggregate catalog statistics
    Stats {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the full catalog as a table
    Table {
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The catalog is loaded exactly once and handed to the command
    // handlers by reference; no query mutates it.
    let catalog = match &cli.data {
        Some(path) => Catalog::load(Utf8PathBuf::from(path))?,
        None => Catalog::bundled()?,
    };

    match cli.command {
        Commands::Search { term, model, json } => run_search(
            &catalog,
            term.as_deref().unwrap_or(""),
            model.as_deref().unwrap_or(""),
            json,
        ),
        Commands::Models { json } => run_models(&catalog, json),
        Commands::Stats { json } => run_stats(&catalog, json),
        Commands::Table { json } => run_table(&catalog, json),
    }
}

fn run_search(catalog: &Catalog, term: &str, model_prefix: &str, json: bool) -> Result<()> {
    let matches = catalog.search(term, model_prefix);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No matching parts.");
        return Ok(());
    }

    let widest = matches
        .iter()
        .map(|part| part.reference.chars().count())
        .max()
        .unwrap_or(0);
    for part in &matches {
        println!(
            "{:<width$}  [{}]  VCC {}  SCL {}  SDA {}",
            part.reference,
            badge(part),
            display_or(&part.vcc, "unspecified"),
            display_or(&part.scl, "n/a"),
            display_or(&part.sda, "n/a"),
            width = widest,
        );
    }
    println!();
    println!("{} of {} parts matched", matches.len(), catalog.len());
    Ok(())
}

fn run_models(catalog: &Catalog, json: bool) -> Result<()> {
    let keys = catalog.model_keys();

    if json {
        println!("{}", serde_json::to_string_pretty(&keys)?);
        return Ok(());
    }

    for key in &keys {
        println!("{key}");
    }
    println!();
    println!("{} model keys", keys.len());
    Ok(())
}

fn run_stats(catalog: &Catalog, json: bool) -> Result<()> {
    let stats = catalog.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Parts:             {}", stats.total);
    println!("Unique references: {}", stats.unique_references);
    println!(
        "With pin info:     {} ({})",
        stats.with_pin_info,
        fmt_percent(percentage(stats.with_pin_info, stats.total), 0)
    );
    println!();

    println!("I2C signal lines");
    print_signal_line("SCL active", stats.active_scl, stats.total);
    print_signal_line("SDA active", stats.active_sda, stats.total);
    println!();

    println!("Top models");
    if stats.top_models.is_empty() {
        println!("  (catalog is empty)");
        return Ok(());
    }
    // Bars are scaled relative to the most common model.
    let max_count = stats.top_models[0].count;
    for (rank, entry) in stats.top_models.iter().enumerate() {
        println!(
            "  #{} {:<4}  {:>4} parts  {}",
            rank + 1,
            entry.model,
            entry.count,
            ratio_bar(entry.count, max_count),
        );
    }
    Ok(())
}

fn run_table(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.parts())?);
        return Ok(());
    }

    let rows: Vec<[&str; 4]> = catalog
        .parts()
        .iter()
        .map(|part| {
            [
                display_or(&part.reference, "N/A"),
                display_or(&part.vcc, "N/A"),
                display_or(&part.scl, "N/A"),
                display_or(&part.sda, "N/A"),
            ]
        })
        .collect();

    let header = ["REFERENCE", "VCC", "SCL", "SDA"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    print_table_row(&header, &widths);
    println!(
        "{}  {}  {}  {}",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2]),
        "-".repeat(widths[3]),
    );
    for row in &rows {
        print_table_row(row, &widths);
    }
    println!();
    println!("{} parts", catalog.len());
    Ok(())
}

fn print_table_row(cells: &[&str; 4], widths: &[usize; 4]) {
    // Last column stays unpadded to avoid trailing whitespace.
    println!(
        "{:<w0$}  {:<w1$}  {:<w2$}  {}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    );
}

fn print_signal_line(label: &str, count: usize, total: usize) {
    let pct = percentage(count, total);
    println!(
        "  {:<10} {:>4} ({:>6})  {}",
        label,
        count,
        fmt_percent(pct, 1),
        percent_bar(pct),
    );
}

/// Model badge shown next to a search hit: the derived key, or `PMIC` when
/// the reference is empty.
fn badge(part: &PartRecord) -> String {
    let key = part.model_key();
    if key.is_empty() { "PMIC".to_string() } else { key }
}

fn display_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

/// Format an optional percentage with the given number of decimals;
/// `None` (empty catalog) renders as "n/a".
fn fmt_percent(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(pct) => format!("{pct:.decimals$}%"),
        None => "n/a".to_string(),
    }
}

fn percent_bar(pct: Option<f64>) -> String {
    let filled = match pct {
        Some(p) => ((p / 100.0) * BAR_WIDTH as f64).round() as usize,
        None => 0,
    };
    draw_bar(filled)
}

fn ratio_bar(count: usize, max: usize) -> String {
    if max == 0 {
        return draw_bar(0);
    }
    let filled = ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    draw_bar(filled)
}

fn draw_bar(filled: usize) -> String {
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
