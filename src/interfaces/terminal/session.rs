use super::command::{Command, HELP};
use super::render;
use crate::application::checkout::CheckoutService;
use crate::application::notice::Notice;
use crate::domain::payment::PaymentStatus;
use crate::error::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{Instant, sleep_until};

enum Event {
    Line(Option<String>),
    ResetDue,
    Interrupt,
}

enum Flow {
    Continue,
    Quit,
}

/// Runs the interactive checkout until `quit`, end of input or Ctrl-C.
///
/// Lines are read one at a time; the success display is taken down when
/// its deadline passes even if no input arrives. A success display still
/// pending at exit is waited out so the cart is always left cleared.
pub async fn run<R, W>(checkout: &mut CheckoutService, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    render::banner(out)?;

    loop {
        out.flush()?;
        let deadline = checkout.reset_deadline();
        let event = tokio::select! {
            biased;
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => Event::ResetDue,
            Ok(()) = tokio::signal::ctrl_c() => Event::Interrupt,
            line = lines.next_line() => Event::Line(line?),
        };

        match event {
            Event::ResetDue => {
                checkout.finish_payment()?;
                render::reset(out)?;
            }
            Event::Interrupt | Event::Line(None) => break,
            Event::Line(Some(line)) => {
                if let Flow::Quit = handle_line(checkout, &line, out).await? {
                    break;
                }
            }
        }
    }

    if checkout.settle().await?.is_some() {
        render::reset(out)?;
    }
    out.flush()?;
    Ok(())
}

async fn handle_line<W: Write>(
    checkout: &mut CheckoutService,
    line: &str,
    out: &mut W,
) -> Result<Flow> {
    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(e) => {
            render::notice(out, &Notice::error(e.to_string()))?;
            return Ok(Flow::Continue);
        }
    };
    log::debug!("Command: {command:?}");

    match command {
        Command::Scan(id) => match checkout.scan(&id) {
            Ok(Some(notice)) => render::notice(out, &notice)?,
            Ok(None) => {}
            Err(e) => render::notice(out, &Notice::from(&e))?,
        },
        Command::Adjust { id, delta } => match checkout.adjust_quantity(&id, delta) {
            Ok(Some(_)) => render::cart(out, checkout)?,
            Ok(None) => {}
            Err(e) => render::notice(out, &Notice::from(&e))?,
        },
        Command::Remove(id) => match checkout.remove_item(&id) {
            Ok(Some(notice)) => render::notice(out, &notice)?,
            Ok(None) => {}
            Err(e) => render::notice(out, &Notice::from(&e))?,
        },
        Command::Products => render::products(out, checkout.catalog())?,
        Command::Cart => render::cart(out, checkout)?,
        Command::State => {
            let json = serde_json::to_string_pretty(&checkout.snapshot())?;
            writeln!(out, "{json}")?;
        }
        Command::Pay => match checkout.open_payment() {
            Ok(_) => render::payment(out, checkout)?,
            Err(e) => render::notice(out, &Notice::from(&e))?,
        },
        Command::Method(method) => match checkout.select_payment_method(method) {
            Ok(()) => render::payment(out, checkout)?,
            Err(e) => render::notice(out, &Notice::from(&e))?,
        },
        Command::Confirm => confirm(checkout, out).await?,
        Command::Cancel => match checkout.cancel_payment() {
            Ok(()) => render::notice(out, &Notice::info("Payment cancelled", "Cart kept"))?,
            Err(e) => render::notice(out, &Notice::from(&e))?,
        },
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(Flow::Quit),
        Command::Empty => {}
    }
    Ok(Flow::Continue)
}

async fn confirm<W: Write>(checkout: &mut CheckoutService, out: &mut W) -> Result<()> {
    if checkout.payment().selected_method().is_some() {
        render::payment_processing(out)?;
        out.flush()?;
    }

    let outcome = tokio::select! {
        result = checkout.confirm_payment() => Some(result),
        Ok(()) = tokio::signal::ctrl_c() => None,
    };

    match outcome {
        Some(Ok(confirmation)) => render::success(out, &confirmation)?,
        Some(Err(e)) => render::notice(out, &Notice::from(&e))?,
        None => {
            if checkout.payment().status() == PaymentStatus::Processing {
                checkout.abort_payment()?;
            }
            render::notice(
                out,
                &Notice::info("Payment interrupted", "Select a method to try again"),
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckoutConfig;

    async fn run_script(checkout: &mut CheckoutService, script: &str) -> String {
        let mut out = Vec::new();
        run(checkout, script.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_scripted_checkout() {
        let mut checkout = CheckoutService::with_config(CheckoutConfig::default());
        let script = "1\n1\n3\ncart\npay\nconfirm\nmethod card\nconfirm\n";

        let text = run_script(&mut checkout, script).await;

        assert!(text.contains("[ok] Added to cart: Fresh Milk (1L)"));
        assert!(text.contains("[ok] Quantity updated: Fresh Milk (1L) x2"));
        assert!(text.contains("[ok] Added to cart: Basmati Rice (1kg)"));
        assert!(text.contains("Total: ₹250"));
        assert!(text.contains("[error] Please select a payment method"));
        assert!(text.contains("Processing..."));
        assert!(text.contains("Amount Paid: ₹250 via Card"));
        assert!(text.contains("Cart cleared"));

        assert!(checkout.cart().is_empty());
        assert_eq!(checkout.payment().status(), PaymentStatus::Idle);
    }

    #[tokio::test]
    async fn test_unknown_barcode_and_bad_input() {
        let mut checkout = CheckoutService::with_config(CheckoutConfig::default());
        let script = "  42  \nqty 1 many\n\n2\nrm 2\nrm 2\n";

        let text = run_script(&mut checkout, script).await;

        assert!(text.contains("[error] Product not found: No product with barcode 42"));
        assert!(text.contains("[error] Not a quantity change: many"));
        assert!(text.contains("[info] Removed from cart: Whole Wheat Bread"));
        assert_eq!(text.matches("Removed from cart").count(), 1);
        assert!(checkout.cart().is_empty());
    }

    #[tokio::test]
    async fn test_locked_controls_and_cancel() {
        let mut checkout = CheckoutService::with_config(CheckoutConfig::default());
        let script = "pay\n5\npay\n6\ncancel\n6\nquit\n7\n";

        let text = run_script(&mut checkout, script).await;

        assert!(text.contains("[error] Cart is empty"));
        assert!(text.contains("[error] Payment in progress"));
        assert!(text.contains("[info] Payment cancelled"));
        assert_eq!(checkout.cart().line("5").unwrap().quantity, 1);
        assert_eq!(checkout.cart().line("6").unwrap().quantity, 1);
        assert!(checkout.cart().line("7").is_none());
    }

    #[tokio::test]
    async fn test_state_dump() {
        let mut checkout = CheckoutService::with_config(CheckoutConfig::default());
        let text = run_script(&mut checkout, "8\n+ 8\nstate\n").await;

        assert!(text.contains("\"item_count\": 2"));
        assert!(text.contains("\"total\": \"190\""));
        assert!(text.contains("\"status\": \"idle\""));
    }
}
