//! Storefront terminal client.
//!
//! Browses the catalog over the JSON API, keeps the cart in a local file and
//! drives checkout end to end.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use storefront::cart::{CartManager, CartObserver, LineUuid, NewLine};
use storefront::checkout::CheckoutOrchestrator;
use storefront::checkout::form::{CardDetails, CheckoutForm, CustomerInfo};
use storefront::storage::FileStore;

use crate::gateway::{ApiClient, HttpCheckoutGateway};

mod fallback;
mod gateway;
mod render;

#[derive(Debug, Parser)]
#[command(name = "storefront-demo", about = "Storefront terminal client", long_about = None)]
struct Cli {
    /// Base URL of the storefront JSON API
    #[arg(long, env = "STOREFRONT_URL", default_value = "http://localhost:3000")]
    server_url: String,

    /// Where the cart is persisted between invocations
    #[arg(long, env = "STOREFRONT_CART", default_value = ".storefront-cart.json")]
    cart_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products, optionally limited to one category
    Browse {
        /// Category id to filter by
        #[arg(long)]
        category: Option<String>,
    },

    /// List categories
    Categories,

    /// Search products by name, description or tag
    Search { query: String },

    /// Add a product to the cart
    Add {
        product_id: String,

        /// How many units to add
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },

    /// Show the cart
    Cart,

    /// Set a cart line's quantity
    SetQty { line: Uuid, quantity: u32 },

    /// Remove a cart line
    Remove { line: Uuid },

    /// Empty the cart
    Clear,

    /// Pay for the cart's contents
    Checkout(CheckoutArgs),
}

#[derive(Debug, Args)]
struct CheckoutArgs {
    /// Customer full name
    #[arg(long)]
    name: String,

    /// Customer email address
    #[arg(long)]
    email: String,

    /// Delivery address
    #[arg(long)]
    address: String,

    /// Card number
    #[arg(long)]
    card_number: String,

    /// Card expiry, MM/YY
    #[arg(long)]
    expiry: String,

    /// Card verification value
    #[arg(long)]
    cvv: String,
}

/// Prints the running item count the way a shop header badge would.
struct CountBadge;

impl CartObserver for CountBadge {
    fn count_changed(&self, count: u32) {
        println!("cart: {count} item(s)");
    }
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = ApiClient::new(&cli.server_url);

    match cli.command {
        Commands::Browse { category } => browse(&client, category.as_deref()).await,
        Commands::Categories => {
            let categories = match client.categories().await {
                Ok(categories) => categories,
                Err(error) => {
                    eprintln!("catalog unavailable ({error:#}), showing the built-in list");
                    fallback::categories()
                }
            };

            println!("{}", render::category_table(&categories));
        }
        Commands::Search { query } => search(&client, &query).await,
        Commands::Add { product_id, quantity } => {
            let product = client
                .product(&product_id)
                .await
                .with_context(|| format!("failed to fetch product {product_id:?}"))?;

            let mut cart = open_cart(&cli.cart_file)?;
            cart.add_line_with_quantity(
                NewLine {
                    name: product.name.clone(),
                    price: product.price,
                    image: product.image,
                },
                quantity,
            )?;

            println!("added {} to the cart", product.name);
        }
        Commands::Cart => {
            let cart = open_cart(&cli.cart_file)?;

            if cart.is_empty() {
                println!("the cart is empty");
            } else {
                println!("{}", render::cart_table(cart.lines()));
                println!("total: {}", cart.formatted_total());
            }
        }
        Commands::SetQty { line, quantity } => {
            let mut cart = open_cart(&cli.cart_file)?;
            cart.set_quantity(LineUuid::from_uuid(line), quantity)?;

            println!("total: {}", cart.formatted_total());
        }
        Commands::Remove { line } => {
            let mut cart = open_cart(&cli.cart_file)?;
            cart.remove_line(LineUuid::from_uuid(line))?;

            println!("total: {}", cart.formatted_total());
        }
        Commands::Clear => {
            let mut cart = open_cart(&cli.cart_file)?;
            cart.clear()?;

            println!("the cart is empty");
        }
        Commands::Checkout(args) => checkout(&client, &cli.cart_file, args).await?,
    }

    Ok(())
}

async fn browse(client: &ApiClient, category: Option<&str>) {
    let fetched = match category {
        Some(category) => client.products_in_category(category).await,
        None => client.products().await,
    };

    let products = match fetched {
        Ok(products) => products,
        Err(error) => {
            eprintln!("catalog unavailable ({error:#}), showing the built-in list");
            let all = fallback::products();
            match category {
                Some(category) => all
                    .into_iter()
                    .filter(|product| product.category == category)
                    .collect(),
                None => all,
            }
        }
    };

    println!("{}", render::product_table(&products));
}

async fn search(client: &ApiClient, query: &str) {
    let products = match client.search(query).await {
        Ok(products) => products,
        Err(error) => {
            eprintln!("catalog unavailable ({error:#}), searching the built-in list");
            let needle = query.to_lowercase();
            fallback::products()
                .into_iter()
                .filter(|product| product.name.to_lowercase().contains(&needle))
                .collect()
        }
    };

    if products.is_empty() {
        println!("no products match {query:?}");
    } else {
        println!("{}", render::product_table(&products));
    }
}

fn open_cart(cart_file: &Path) -> anyhow::Result<CartManager<FileStore>> {
    let mut cart = CartManager::restore(FileStore::new(cart_file))
        .context("failed to open the cart file")?;

    cart.subscribe(Box::new(CountBadge));

    Ok(cart)
}

async fn checkout(client: &ApiClient, cart_file: &Path, args: CheckoutArgs) -> anyhow::Result<()> {
    let mut cart = open_cart(cart_file)?;

    let form = CheckoutForm {
        customer: CustomerInfo {
            name: args.name,
            email: args.email,
            address: args.address,
        },
        payment_method: "card".to_string(),
        card: CardDetails {
            number: args.card_number,
            expiry: args.expiry,
            cvv: args.cvv,
        },
    };

    let orchestrator = CheckoutOrchestrator::new(HttpCheckoutGateway::new(client.clone()));

    let mut phases = orchestrator.phases();
    tokio::spawn(async move {
        while phases.changed().await.is_ok() {
            println!("checkout: {:?}", *phases.borrow_and_update());
        }
    });

    let receipt = orchestrator
        .checkout(&mut cart, &form)
        .await
        .map_err(|error| anyhow!("checkout failed: {error}"))?;

    println!("order {} paid", receipt.order_id);
    println!("payment {}", receipt.payment_id);
    println!("charged {}", storefront::prices::format_amount(receipt.amount));

    Ok(())
}
