use assert_cmd::Command;
use assert_cmd::cargo_bin;

/// The checkout binary with both payment delays switched off.
pub fn checkout_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin!("pos-checkout"));
    cmd.args(["--processing-delay-ms", "0", "--success-delay-ms", "0"]);
    cmd
}
