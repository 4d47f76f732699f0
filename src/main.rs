use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use tracing::info;
use uuid::Uuid;

use datacerta::models::{ExpiryPolicy, FilterState, StatusClass, StockRecord};
use datacerta::services::{classifier, export, stock_view, summaries};

/// Offline dashboard over a JSON stock snapshot.
#[derive(Debug, Parser)]
#[command(name = "datacerta", version, about)]
struct Cli {
    /// Path to a JSON array of stock records.
    snapshot: PathBuf,

    /// Classification policy for the list view.
    #[arg(long, value_enum, default_value_t = PolicyArg::StockList)]
    policy: PolicyArg,

    /// Restrict to these store ids (repeatable).
    #[arg(long = "store")]
    stores: Vec<String>,

    /// Restrict to these location names (repeatable).
    #[arg(long = "location")]
    locations: Vec<String>,

    /// Restrict to these statuses: expired, critical, warning, ok (repeatable).
    #[arg(long = "status")]
    statuses: Vec<String>,

    /// Case-insensitive text search over description, code, and batch.
    #[arg(long)]
    search: Option<String>,

    /// Inclusive lower bound on expiration date (YYYY-MM-DD).
    #[arg(long)]
    from: Option<String>,

    /// Inclusive upper bound on expiration date (YYYY-MM-DD).
    #[arg(long)]
    to: Option<String>,

    #[arg(long, default_value_t = 1)]
    page: usize,

    #[arg(long)]
    page_size: Option<usize>,

    /// Write the full-snapshot export here.
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Dashboard,
    StockList,
}

impl From<PolicyArg> for ExpiryPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Dashboard => ExpiryPolicy::DashboardSummary,
            PolicyArg::StockList => ExpiryPolicy::StockList,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = datacerta::config::load_config().unwrap_or_default();
    datacerta::config::init_tracing(cfg.log_level(), cfg.log_json);

    let raw = std::fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("reading snapshot {}", cli.snapshot.display()))?;
    let records: Vec<StockRecord> =
        serde_json::from_str(&raw).context("parsing snapshot JSON")?;
    info!(records = records.len(), "snapshot loaded");

    let reference_date = Local::now().date_naive();
    let policy: ExpiryPolicy = cli.policy.into();

    let filter = FilterState {
        store_ids: cli
            .stores
            .iter()
            .map(|s| Uuid::parse_str(s).with_context(|| format!("invalid store id {}", s)))
            .collect::<Result<_, _>>()?,
        location_names: cli.locations.iter().cloned().collect(),
        status_classes: cli
            .statuses
            .iter()
            .map(|s| {
                StatusClass::from_str(s).map_err(|_| anyhow::anyhow!("invalid status {}", s))
            })
            .collect::<Result<_, _>>()?,
        date_range_start: parse_date(cli.from.as_deref())?,
        date_range_end: parse_date(cli.to.as_deref())?,
        search_text: cli.search,
        page: cli.page,
        page_size: cli.page_size.unwrap_or(cfg.default_page_size),
    };

    let view = stock_view::evaluate(&records, &filter, reference_date, policy);

    let (from, to) = view.display_range();
    println!(
        "expired {}  critical {}  warning {}  ok {}",
        view.counts.expired, view.counts.critical, view.counts.warning, view.counts.ok
    );
    println!(
        "showing {}-{} of {} (page {}/{})",
        from, to, view.total_items, view.page, view.total_pages
    );
    for item in &view.items {
        println!(
            "{:<40} {:<20} {:<15} {:>5}  {}  {}",
            item.product_description,
            item.store_name,
            item.location_name.as_deref().unwrap_or("-"),
            item.quantity,
            item.expiration_date.format(export::DATE_FORMAT),
            classifier::expiry_label(item.days_remaining(reference_date)),
        );
    }

    println!("\nstores:");
    for store in summaries::store_breakdown(&records, reference_date) {
        println!(
            "  {:<30} total {:>4}  expired {:>4}  rate {:>3}%",
            store.store_name, store.total, store.expired_count, store.fulfillment_rate
        );
    }

    println!("\nexpiring within {} days:", cfg.alert_window_days);
    for cat in summaries::upcoming_by_category_within(&records, reference_date, cfg.alert_window_days)
    {
        println!("  {:<30} {}", cat.category, cat.count);
    }

    println!("\nexpirations by month:");
    for bucket in summaries::expirations_by_month(&records, reference_date) {
        println!("  {} {:<4} {}", bucket.label, bucket.year, bucket.count);
    }

    let overview = summaries::monthly_overview(&records, reference_date);
    println!(
        "\ncollected {}  utilization {}%  avoided-loss estimate R$ {}",
        overview.total_collected, overview.utilization_rate, overview.estimated_avoided_loss
    );

    if let Some(path) = cli.export {
        export::export_stock_to_path(&records, reference_date, &path)?;
        println!("export written to {}", path.display());
    }

    Ok(())
}

fn parse_date(value: Option<&str>) -> anyhow::Result<Option<NaiveDate>> {
    value
        .map(|v| {
            NaiveDate::parse_from_str(v, "%Y-%m-%d").with_context(|| format!("invalid date {}", v))
        })
        .transpose()
}
