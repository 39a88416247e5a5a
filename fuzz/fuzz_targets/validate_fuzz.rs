//! Validator fuzz target: feed arbitrary bytes to the gpEID grammar engine.
//! The engine must not panic; it returns a Validation either way, and a valid
//! result must re-render to a string that validates again.
//! Build with: cargo fuzz run validate_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    let result = gpeid::validate(s);
    if let Some(id) = result.gpeid {
        assert!(gpeid::validate(&id.to_string()).is_valid());
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run validate_fuzz");
}
