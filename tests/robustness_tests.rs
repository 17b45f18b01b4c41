mod common;

use predicates::prelude::*;

#[test]
fn test_unknown_barcode_keeps_cart() {
    let mut cmd = common::checkout_cmd();
    cmd.write_stdin("2\n99\ncart\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "[error] Product not found: No product with barcode 99",
        ))
        .stdout(predicate::str::contains("Shopping Cart (1 items)"))
        .stdout(predicate::str::contains("Total: ₹40"));
}

#[test]
fn test_confirm_without_method_stays_open() {
    let mut cmd = common::checkout_cmd();
    cmd.write_stdin("4\npay\nconfirm\n5\ncancel\ncart\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[error] Please select a payment method"))
        .stdout(predicate::str::contains("[error] Payment in progress"))
        .stdout(predicate::str::contains("[info] Payment cancelled"))
        .stdout(predicate::str::contains("Total: ₹150"))
        .stdout(predicate::str::contains("Amount Paid").not());
}

#[test]
fn test_quantity_never_negative() {
    let mut cmd = common::checkout_cmd();
    cmd.write_stdin("6\nqty 6 4\nqty 6 -10\ncart\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total: ₹900"))
        .stdout(predicate::str::contains("Cart is empty"));
}

#[test]
fn test_malformed_commands_are_reported() {
    let mut cmd = common::checkout_cmd();
    cmd.write_stdin("method bitcoin\nqty\ncart now please\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[error] Unknown payment method: bitcoin"))
        .stdout(predicate::str::contains("[error] Usage: qty <barcode> <delta>"))
        .stdout(predicate::str::contains("[error] Too many arguments"));
}
