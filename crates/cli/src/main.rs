//! Cafenet CLI - role-gated dashboards for the cafenet backend.
//!
//! # Usage
//!
//! ```bash
//! # Log in and persist the session
//! cafenet login -u sari
//!
//! # Admin dashboard
//! cafenet admin overview
//!
//! # Staff billing form
//! cafenet staff billing -c 3 -r 2 --package premium --hours 3
//!
//! # Customer shop: repeated --item flags merge into one cart line
//! cafenet shop order --item 1 --item 1 --item 4
//! ```
//!
//! # Commands
//!
//! - `login` / `logout` / `whoami` - session management
//! - `admin overview` - counters plus customer, staff, transaction, and room tables
//! - `staff billing|rooms|customers` - billing form and its side tables
//! - `shop status|products|order` - customer dashboard

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use cafenet_core::{BillingPackage, ProductCategory};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "cafenet")]
#[command(author, version, about = "Cafenet seat-and-billing dashboards")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password (falls back to `CAFENET_PASSWORD`)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Clear the persisted session
    Logout,
    /// Show the logged-in identity
    Whoami,
    /// Admin dashboard
    Admin {
        #[command(subcommand)]
        view: AdminView,
    },
    /// Staff dashboard
    Staff {
        #[command(subcommand)]
        view: StaffView,
    },
    /// Customer dashboard
    Shop {
        #[command(subcommand)]
        view: ShopView,
    },
}

#[derive(Subcommand)]
enum AdminView {
    /// Counters plus customer, staff, transaction, and room tables
    Overview,
}

#[derive(Subcommand)]
enum StaffView {
    /// Open a billing session for a customer
    Billing {
        /// Customer account id
        #[arg(short, long)]
        customer: i64,

        /// Room id
        #[arg(short, long)]
        room: i64,

        /// Billing package (`regular` or `premium`)
        #[arg(long, default_value = "regular")]
        package: BillingPackage,

        /// Duration in hours (minimum 1)
        #[arg(long, default_value_t = 2)]
        hours: u32,
    },
    /// List rooms that are free to bill
    Rooms,
    /// List customer accounts
    Customers,
}

#[derive(Subcommand)]
enum ShopView {
    /// Show the active billing session
    Status,
    /// Browse shop products
    Products {
        /// Menu tab (`makanan`, `minuman`, or `cemilan`)
        #[arg(long, default_value = "makanan")]
        category: ProductCategory,
    },
    /// Build a cart from product ids and check out
    Order {
        /// Product id to add; repeat the flag to add more (duplicates
        /// merge into one line)
        #[arg(long = "item", required = true)]
        items: Vec<i64>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let context = commands::Context::from_env()?;

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&context, &username, password).await?;
        }
        Commands::Logout => commands::auth::logout(&context)?,
        Commands::Whoami => commands::auth::whoami(&context),
        Commands::Admin {
            view: AdminView::Overview,
        } => commands::admin::overview(&context).await?,
        Commands::Staff { view } => match view {
            StaffView::Billing {
                customer,
                room,
                package,
                hours,
            } => commands::staff::create_billing(&context, customer, room, package, hours).await?,
            StaffView::Rooms => commands::staff::rooms(&context).await?,
            StaffView::Customers => commands::staff::customers(&context).await?,
        },
        Commands::Shop { view } => match view {
            ShopView::Status => commands::shop::status(&context).await?,
            ShopView::Products { category } => {
                commands::shop::products(&context, category).await?;
            }
            ShopView::Order { items } => commands::shop::order(&context, &items).await?,
        },
    }
    Ok(())
}
