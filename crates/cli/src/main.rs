//! `OrderFlow` CLI - query order data and render print documents.
//!
//! # Usage
//!
//! ```bash
//! # List the orders placed on a date
//! of-cli orders list --date 2025-08-01 --status pending
//!
//! # Show one order from the remote webhook
//! of-cli --real orders show ORD-2024-003
//!
//! # Analytics for a date
//! of-cli analytics --date 2025-08-01
//!
//! # Orders eligible for printing
//! of-cli print list --from 2025-08-01 --to 2025-08-03
//!
//! # Render a packing list for two orders
//! of-cli print document --from 2025-08-01 --to 2025-08-03 \
//!     --kind packing-list --select ORD-2024-001 --select ORD-2024-004
//! ```
//!
//! # Commands
//!
//! - `orders list` / `orders show` - Order listing and detail
//! - `analytics` - Aggregate figures
//! - `print list` / `print document` - Print listing and rendered documents
//!
//! Mock data is used unless `--real` is passed; the webhook is configured
//! through the same environment variables as the dashboard server.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use orderflow_core::{DocumentKind, Filter, OrderStatus, Priority, Station};
use orderflow_dashboard::{DashboardConfig, DataMode, DataService};

mod commands;

#[derive(Parser)]
#[command(name = "of-cli")]
#[command(author, version, about = "OrderFlow order data tools")]
struct Cli {
    /// Query the remote webhook instead of the bundled mock orders
    #[arg(long, global = true)]
    real: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List or show orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Show analytics figures
    Analytics {
        /// Restrict to one order date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// List printable orders or render a document
    Print {
        #[command(subcommand)]
        action: PrintAction,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders with category totals
    List {
        /// Exact order date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Status (`pending`, `processing`, `shipped`, `delivered`, `all`)
        #[arg(short, long)]
        status: Option<Filter<OrderStatus>>,

        /// Priority (`high`, `medium`, `low`, `all`)
        #[arg(short, long)]
        priority: Option<Filter<Priority>>,

        /// Case-insensitive search over id, tracking code, customer and product
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one order
    Show {
        /// Order id, e.g. ORD-2024-001
        id: String,
    },
}

/// Date range and filters shared by the print commands.
#[derive(Args)]
struct PrintRange {
    /// First order date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    from: NaiveDate,

    /// Last order date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    to: NaiveDate,

    /// Packing station (`station1`, `station2`, `both`)
    #[arg(long, default_value = "both")]
    station: Station,

    /// Status (`pending`, `processing`, `shipped`, `delivered`, `all`)
    #[arg(long)]
    status: Option<Filter<OrderStatus>>,
}

#[derive(Subcommand)]
enum PrintAction {
    /// List orders eligible for printing
    List {
        #[command(flatten)]
        range: PrintRange,
    },
    /// Render a document for selected orders
    Document {
        #[command(flatten)]
        range: PrintRange,

        /// Document kind (`packing-list`, `shipping-label`, `invoice`,
        /// `order-summary`, `customs-declaration`)
        #[arg(short, long, default_value = "packing-list")]
        kind: DocumentKind,

        /// Order ids to include (repeatable)
        #[arg(long = "select", value_name = "ID", conflicts_with = "all")]
        select: Vec<String>,

        /// Include every listed order
        #[arg(long)]
        all: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let config = DashboardConfig::from_env()?;
    let service = DataService::from_config(&config.webhook)?;
    let mode = DataMode::from(cli.real);

    match cli.command {
        Commands::Orders { action } => match action {
            OrdersAction::List {
                date,
                status,
                priority,
                search,
            } => {
                let filters = commands::orders::ListFilters {
                    date,
                    status,
                    priority,
                    search,
                };
                commands::orders::list(&service, mode, filters).await?;
            }
            OrdersAction::Show { id } => commands::orders::show(&service, mode, &id).await?,
        },
        Commands::Analytics { date } => commands::analytics::summary(&service, mode, date).await?,
        Commands::Print { action } => match action {
            PrintAction::List { range } => {
                commands::print::list(&service, mode, &range.into_query()).await?;
            }
            PrintAction::Document {
                range,
                kind,
                select,
                all,
            } => {
                let pick = if all {
                    commands::print::Pick::All
                } else {
                    commands::print::Pick::Ids(select)
                };
                commands::print::document(&service, mode, &range.into_query(), kind, pick).await?;
            }
        },
    }
    Ok(())
}

impl PrintRange {
    fn into_query(self) -> orderflow_core::PrintOrdersQuery {
        let query = orderflow_core::PrintOrdersQuery::new(self.from, self.to, self.station);
        match self.status {
            Some(status) => query.with_status(status),
            None => query,
        }
    }
}
