use std::str::FromStr;

use thiserror::Error;

use crate::{
    category::{Category, UnknownCategory},
    checkout::{PaymentMethod, UnknownPaymentMethod},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    List,
    Category(Category),
    Show(String),
    Close,
    Add(Option<String>),
    Increment(String),
    Decrement(String),
    Quantity(String, i64),
    Remove(String),
    Clear,
    Cart,
    Back,
    Checkout(PaymentMethod),
    Retry,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs a product id")]
    MissingProduct(&'static str),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error(transparent)]
    Category(#[from] UnknownCategory),

    #[error(transparent)]
    Payment(#[from] UnknownPaymentMethod),
}

fn product_arg(name: &'static str, arg: Option<&str>) -> Result<String, CommandError> {
    arg.map(str::to_string).ok_or(CommandError::MissingProduct(name))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_lowercase();
        let arg = words.next();

        Ok(match verb.as_str() {
            "list" | "ls" => Command::List,
            "category" | "cat" => Command::Category(arg.unwrap_or("all").parse()?),
            "show" => Command::Show(product_arg("show", arg)?),
            "close" => Command::Close,
            "add" => Command::Add(arg.map(str::to_string)),
            "inc" | "+" => Command::Increment(product_arg("inc", arg)?),
            "dec" | "-" => Command::Decrement(product_arg("dec", arg)?),
            "qty" => {
                let product_id = product_arg("qty", arg)?;
                let raw = words.next().unwrap_or_default();
                let quantity = raw
                    .parse()
                    .map_err(|_| CommandError::InvalidQuantity(raw.to_string()))?;

                Command::Quantity(product_id, quantity)
            }
            "remove" | "rm" => Command::Remove(product_arg("remove", arg)?),
            "clear" => Command::Clear,
            "cart" => Command::Cart,
            "back" => Command::Back,
            "checkout" | "pay" => Command::Checkout(match arg {
                Some(method) => method.parse()?,
                None => PaymentMethod::default(),
            }),
            "retry" => Command::Retry,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb)),
        })
    }
}
