//! Print the raw-constant contract to stdout, one `NAME;VALUE` line per
//! constant. Takes no flags; the output is consumed by diff tooling and
//! must stay stable.

use std::io::{self, Write};

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    modcurve::contract::dump(&mut out)?;
    out.flush()
}
