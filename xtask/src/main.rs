use xshell::{cmd, Shell};

use crate::flags::XtaskCmd;

mod flags;

const DEFAULT_SCALE_ITEMS: usize = 1_000_000;

fn main() -> anyhow::Result<()> {
    let flags = flags::Xtask::from_env()?;
    let sh = Shell::new()?;
    match flags.subcommand {
        XtaskCmd::Fix(_) => {
            cmd!(sh, "cargo fmt --all").run()?;
            cmd!(sh, "cargo fix --workspace --allow-dirty --allow-staged -q").run()?;
            cmd!(sh, "cargo clippy --workspace --fix --allow-dirty --allow-staged").run()?;
            cmd!(sh, "cargo sort -w").run()?;
        }
        XtaskCmd::Watch(_) => {
            let check = "clippy --workspace --all-targets";
            cmd!(sh, "cargo watch -x {check}").run()?;
        }
        XtaskCmd::Test(_) => {
            cmd!(sh, "cargo test --workspace").run()?;
        }
        XtaskCmd::Scale(scale) => {
            let items = scale.items.unwrap_or(DEFAULT_SCALE_ITEMS).to_string();
            cmd!(sh, "cargo run --release -p growvec_cli -- scale --items {items}").run()?;
        }
    }

    Ok(())
}
