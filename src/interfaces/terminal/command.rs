use crate::domain::payment::PaymentMethod;
use crate::error::CheckoutError;
use std::str::FromStr;
use thiserror::Error;

/// One line of terminal input.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Scan(String),
    Adjust { id: String, delta: i64 },
    Remove(String),
    Products,
    Cart,
    State,
    Pay,
    Method(PaymentMethod),
    Confirm,
    Cancel,
    Help,
    Quit,
    Empty,
}

/// Why a line could not be turned into a [`Command`].
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("Usage: {0}")]
    MissingArgument(&'static str),
    #[error("Not a quantity change: {0}")]
    InvalidDelta(String),
    #[error("Unknown payment method: {0} (cash, card, upi)")]
    InvalidMethod(String),
    #[error("Too many arguments: {0}")]
    TooManyArguments(String),
}

impl FromStr for Command {
    type Err = ParseError;

    /// Barcode arguments run to the end of the line, so ids containing
    /// spaces can be scanned with `scan <id>`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Empty);
        }
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "scan" | "add" => Self::Scan(barcode(rest, "scan <barcode>")?),
            "inc" | "+" => Self::Adjust {
                id: barcode(rest, "inc <barcode>")?,
                delta: 1,
            },
            "dec" | "-" => Self::Adjust {
                id: barcode(rest, "dec <barcode>")?,
                delta: -1,
            },
            "rm" | "remove" => Self::Remove(barcode(rest, "rm <barcode>")?),
            "qty" => {
                let (id, delta) = rest
                    .rsplit_once(char::is_whitespace)
                    .ok_or(ParseError::MissingArgument("qty <barcode> <delta>"))?;
                Self::Adjust {
                    id: barcode(id.trim(), "qty <barcode> <delta>")?,
                    delta: delta
                        .parse()
                        .map_err(|_| ParseError::InvalidDelta(delta.to_string()))?,
                }
            }
            "method" | "select" => {
                let method = barcode(rest, "method <cash|card|upi>")?;
                Self::Method(
                    method
                        .parse()
                        .map_err(|_: CheckoutError| ParseError::InvalidMethod(method))?,
                )
            }
            keyword => {
                if !rest.is_empty() {
                    return Err(ParseError::TooManyArguments(line.to_string()));
                }
                match keyword {
                    "products" | "catalog" => Self::Products,
                    "cart" => Self::Cart,
                    "state" => Self::State,
                    "pay" | "checkout" => Self::Pay,
                    "confirm" => Self::Confirm,
                    "cancel" => Self::Cancel,
                    "help" | "?" => Self::Help,
                    "quit" | "exit" => Self::Quit,
                    _ => Self::Scan(head.to_string()),
                }
            }
        };
        Ok(command)
    }
}

fn barcode(rest: &str, usage: &'static str) -> Result<String, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument(usage))
    } else {
        Ok(rest.to_string())
    }
}

pub const HELP: &str = "\
Commands:
  <barcode> | scan <barcode>   add one unit of a product
  inc <barcode> | + <barcode>  one more unit
  dec <barcode> | - <barcode>  one less unit
  qty <barcode> <delta>        change quantity by delta
  rm <barcode>                 remove a line
  products                     list the catalog
  cart                         show the cart
  state                        dump checkout state as JSON
  pay                          open the payment step
  method <cash|card|upi>       choose a payment method
  confirm                      pay
  cancel                       close the payment step
  quit                         leave";
