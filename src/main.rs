//! Koszyk CLI
//!
//! One subcommand per cart operation. Every mutation loads the persisted
//! cart, applies the change, saves, and re-renders the receipt.

use std::{fs, io, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use koszyk::{
    cart::Cart,
    products::Product,
    receipt::write_receipt,
    render::render_cart,
    store::CartStore,
};

/// A file-persisted shopping cart with HTML and terminal render surfaces.
#[derive(Debug, Parser)]
#[command(name = "koszyk", version)]
struct Cli {
    /// Path of the cart file; defaults to the platform data directory
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a product to the cart, or bump its quantity if already present
    Add {
        /// Product name
        #[arg(long)]
        name: String,

        /// Raw price string, e.g. "199,99 PLN"
        #[arg(long)]
        price: String,

        /// Product image URL
        #[arg(long)]
        image: String,

        /// Product page URL; identity key within the cart
        #[arg(long)]
        url: String,
    },

    /// Remove the item at a 0-based index
    Remove {
        /// Index of the item in the cart
        index: usize,
    },

    /// Increase the quantity of the item at a 0-based index
    Increase {
        /// Index of the item in the cart
        index: usize,
    },

    /// Decrease the quantity of the item at a 0-based index, removing it at 1
    Decrease {
        /// Index of the item in the cart
        index: usize,
    },

    /// Empty the cart
    Clear,

    /// Show the cart as a terminal receipt
    Show,

    /// Render the cart widget as an HTML fragment
    Html {
        /// Output file path; prints to stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[expect(clippy::print_stdout, reason = "CLI output")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = match cli.store {
        Some(path) => CartStore::new(path),
        None => CartStore::at_default_location()?,
    };

    match cli.command {
        Command::Add {
            name,
            price,
            image,
            url,
        } => {
            let cart = mutate(&store, |cart| {
                cart.add(Product {
                    name,
                    price,
                    image,
                    url,
                });
            })?;
            write_receipt(io::stdout(), &cart)?;
        }
        Command::Remove { index } => {
            let cart = mutate(&store, |cart| cart.remove(index))?;
            write_receipt(io::stdout(), &cart)?;
        }
        Command::Increase { index } => {
            let cart = mutate(&store, |cart| cart.increase_quantity(index))?;
            write_receipt(io::stdout(), &cart)?;
        }
        Command::Decrease { index } => {
            let cart = mutate(&store, |cart| cart.decrease_quantity(index))?;
            write_receipt(io::stdout(), &cart)?;
        }
        Command::Clear => {
            store.clear()?;
            write_receipt(io::stdout(), &Cart::new())?;
        }
        Command::Show => {
            write_receipt(io::stdout(), &store.load()?)?;
        }
        Command::Html { out } => {
            let html = render_cart(&store.load()?);

            match out {
                Some(path) => fs::write(path, html)?,
                None => println!("{html}"),
            }
        }
    }

    Ok(())
}

/// Load, apply one mutation, and persist; returns the updated cart.
fn mutate(store: &CartStore, op: impl FnOnce(&mut Cart)) -> Result<Cart> {
    let mut cart = store.load()?;

    op(&mut cart);
    store.save(&cart)?;

    Ok(cart)
}
