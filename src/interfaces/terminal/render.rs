use crate::application::checkout::CheckoutService;
use crate::application::notice::Notice;
use crate::domain::payment::{PaymentConfirmation, PaymentMethod, PaymentStatus};
use crate::domain::ports::Catalog;
use std::io::{self, Write};

pub fn banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "SmartRetail POS - Professional Checkout System")?;
    writeln!(out, "Type a barcode to scan it, or 'help' for commands.")
}

pub fn notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    writeln!(out, "{notice}")
}

pub fn products<W: Write>(out: &mut W, catalog: &dyn Catalog) -> io::Result<()> {
    writeln!(out, "Products")?;
    for product in catalog.products() {
        writeln!(
            out,
            "  #{:<4} {:<32} {}",
            product.id, product.name, product.unit_price
        )?;
    }
    Ok(())
}

pub fn cart<W: Write>(out: &mut W, checkout: &CheckoutService) -> io::Result<()> {
    let cart = checkout.cart();
    writeln!(out, "Shopping Cart ({} items)", cart.item_count())?;
    if cart.is_empty() {
        return writeln!(out, "  Cart is empty");
    }

    for line in cart.lines() {
        writeln!(
            out,
            "  #{:<4} {:<32} {} x {:<3} {}",
            line.product.id,
            line.product.name,
            line.product.unit_price,
            line.quantity,
            line.line_total()
        )?;
    }
    writeln!(out, "  Subtotal: {}", cart.subtotal())?;
    writeln!(out, "  Tax: {}", cart.tax())?;
    writeln!(out, "  Total: {}", cart.total())
}

pub fn payment<W: Write>(out: &mut W, checkout: &CheckoutService) -> io::Result<()> {
    let session = checkout.payment();
    match session.status() {
        PaymentStatus::Idle => writeln!(out, "No payment in progress"),
        PaymentStatus::AwaitingSelection => {
            writeln!(out, "Select Payment Method - Total Amount: {}", checkout.total())?;
            for method in PaymentMethod::ALL {
                let marker = if session.selected_method() == Some(method) {
                    "*"
                } else {
                    " "
                };
                writeln!(
                    out,
                    "  [{marker}] {:<5} {}",
                    method.label(),
                    method.description()
                )?;
            }
            match session.selected_method() {
                Some(_) => writeln!(out, "Type 'confirm' to pay {}", checkout.total()),
                None => writeln!(out, "Type 'method <cash|card|upi>' to choose"),
            }
        }
        PaymentStatus::Processing => payment_processing(out),
        PaymentStatus::Succeeded => writeln!(out, "Payment Successful!"),
    }
}

pub fn payment_processing<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Processing...")
}

pub fn success<W: Write>(out: &mut W, confirmation: &PaymentConfirmation) -> io::Result<()> {
    writeln!(out, "Payment Successful!")?;
    writeln!(out, "Thank you for shopping with us")?;
    writeln!(
        out,
        "Amount Paid: {} via {}",
        confirmation.amount, confirmation.method
    )
}

pub fn reset<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Cart cleared. Ready for the next customer.")
}
