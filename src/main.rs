use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use ru_installment::input::{format_input_field, sanitize_percentage};
use ru_installment::{RawInput, View, render};

/// Renders the installment calculator page for the given form values.
#[derive(Debug, Parser)]
#[command(name = "installment", version)]
struct Args {
    /// Apartment cost, e.g. "10 000 000".
    #[arg(long, default_value = "")]
    cost: String,

    /// Down payment, e.g. "5 000 000".
    #[arg(long, default_value = "")]
    down_payment: String,

    /// Discount in percent, e.g. "5.5".
    #[arg(long, default_value = "")]
    discount: String,

    /// Date to count the installment period from (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print only the breakdown and schedule fragments.
    #[arg(long, conflicts_with = "json")]
    fragment: bool,

    /// Print the calculation as JSON instead of HTML.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ru_installment=info")),
        )
        .init();

    let args = Args::parse();

    let discount = sanitize_percentage(&args.discount)
        .with_context(|| format!("discount {:?} has more than one decimal point", args.discount))?;
    let raw = RawInput::new(
        format_input_field(&args.cost),
        format_input_field(&args.down_payment),
        discount,
    );
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    tracing::info!(
        cost = %raw.apartment_cost,
        down_payment = %raw.down_payment,
        discount = %raw.discount_percent,
        %today,
        "rendering calculator"
    );

    let view = View::recalculate(&raw, today);
    let output = if args.json {
        serde_json::to_string_pretty(&view)
            .context("failed to serialize the calculation")?
    } else if args.fragment {
        format!(
            "{}\n{}",
            render::breakdown_html(view.result.as_ref()),
            render::schedule_html(view.result.as_ref())
        )
    } else {
        render::page(&view)
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")
        .context("failed to write to stdout")?;
    Ok(())
}
