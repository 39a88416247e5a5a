//! Validate a single gpEID and print its decomposition.
//!
//! Usage:
//!   gpeid_check '=Gebäude1+HLK_Sensor.001:Siemens.ABC123'
//!   echo '=Gebäude1+HLK_Sensor.001:Siemens.ABC123' | gpeid_check
//!
//! On success, prints the canonical identifier and a per-component
//! breakdown. On failure, prints every diagnostic with its character offset
//! and exits 1.

use gpeid::validate;
use std::io::{self, Read};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s)?;
        s
    } else {
        args.join(" ")
    };
    let token = input.trim();
    if token.is_empty() {
        eprintln!("usage: gpeid_check <gpeid> (or pipe one on stdin)");
        std::process::exit(2);
    }

    let result = validate(token);
    match result.gpeid {
        Some(id) => {
            println!("valid gpEID: {id}");
            println!("{}", id.summary());
        }
        None => {
            eprintln!("invalid gpEID: {token}");
            for d in &result.diagnostics {
                eprintln!("  offset {}: {}", d.offset, d.kind);
            }
            std::process::exit(1);
        }
    }
    Ok(())
}
