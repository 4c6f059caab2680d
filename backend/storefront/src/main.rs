use std::time::Duration;

use catalog::fetch_catalog;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tokio::io::{AsyncBufReadExt, BufReader, stdin};
use tracing_subscriber::{EnvFilter, fmt};

use storefront::{
    checkout::CONFIRMATION_DELAY,
    command::Command,
    session::{Session, View},
    view::{
        render_cart, render_cart_summary, render_confirmation, render_detail, render_help,
        render_listing,
    },
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Catalog endpoint
    #[arg(long, default_value = "http://localhost:3001/api/products")]
    url: String,

    /// Seconds before the catalog fetch gives up
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = Client::builder()
        .timeout(Duration::from_secs(args.timeout))
        .build()?;

    let mut session = Session::new();
    load(&mut session, &client, &args.url, false).await?;

    println!("{}", render_listing(&session));
    println!("\nType `help` for commands.");

    let mut lines = BufReader::new(stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        if let Err(e) = run(&mut session, &client, &args.url, command).await {
            println!("{e}");
        }
    }

    Ok(())
}

async fn load(
    session: &mut Session,
    client: &Client,
    url: &str,
    retry: bool,
) -> anyhow::Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    pb.set_message("Loading delicious items...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let fetch = fetch_catalog(client, url);
    let result = if retry {
        session.retry(fetch).await
    } else {
        session.load(fetch).await;
        Ok(())
    };

    pb.finish_and_clear();

    Ok(result?)
}

async fn run(
    session: &mut Session,
    client: &Client,
    url: &str,
    command: Command,
) -> anyhow::Result<()> {
    match command {
        Command::List => {
            session.back_to_catalog();
            print_catalog(session);
        }
        Command::Category(category) => {
            session.select_category(category);
            session.back_to_catalog();
            print_catalog(session);
        }
        Command::Show(product_id) => {
            println!("{}", render_detail(session.open_detail(&product_id)?));
        }
        Command::Close => {
            session.close_detail();
            print_catalog(session);
        }
        Command::Add(product_id) => {
            match product_id {
                Some(product_id) => session.add_to_cart(&product_id)?,
                None => session.add_selected()?,
            }

            println!("Added to cart!");
            print_summary(session);
        }
        Command::Increment(product_id) => {
            session.cart_mut().increment(&product_id);
            print_cart_or_summary(session);
        }
        Command::Decrement(product_id) => {
            session.cart_mut().decrement(&product_id);
            print_cart_or_summary(session);
        }
        Command::Quantity(product_id, quantity) => {
            session.cart_mut().set_quantity(&product_id, quantity);
            print_cart_or_summary(session);
        }
        Command::Remove(product_id) => {
            session.cart_mut().remove(&product_id);
            print_cart_or_summary(session);
        }
        Command::Clear => {
            session.cart_mut().clear();
            print_cart_or_summary(session);
        }
        Command::Cart => {
            session.open_cart();
            println!("{}", render_cart(session));
        }
        Command::Back => {
            session.back_to_catalog();
            print_catalog(session);
        }
        Command::Checkout(payment) => {
            let confirmation = session.checkout(payment, &mut rand::rng())?;
            println!("{}", render_confirmation(&confirmation));

            tokio::time::sleep(CONFIRMATION_DELAY).await;
            session.finish_checkout();

            print_catalog(session);
        }
        Command::Retry => {
            load(session, client, url, true).await?;
            print_catalog(session);
        }
        Command::Help => println!("{}", render_help()),
        Command::Quit => {}
    }

    Ok(())
}

fn print_catalog(session: &Session) {
    println!("{}", render_listing(session));
    print_summary(session);
}

fn print_summary(session: &Session) {
    if let Some(summary) = render_cart_summary(session.cart()) {
        println!("\n{summary}");
    }
}

fn print_cart_or_summary(session: &Session) {
    match session.view() {
        View::Cart => println!("{}", render_cart(session)),
        _ => print_summary(session),
    }
}
