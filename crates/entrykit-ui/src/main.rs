#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    clippy::pedantic,
    clippy::nursery,
    missing_docs
)]
//! Demo gallery binary: mounts every component under Trunk, prints build
//! instructions elsewhere.

#[cfg(target_arch = "wasm32")]
fn main() {
    entrykit_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    let mut stderr = io::stderr().lock();
    stderr.write_all(
        b"The entrykit-ui demo is intended for wasm32; build with `trunk serve` or `cargo build --target wasm32-unknown-unknown`.\n",
    )?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_main_writes_warning() -> std::io::Result<()> {
        main()
    }
}
