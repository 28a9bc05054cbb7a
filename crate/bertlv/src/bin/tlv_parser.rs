use std::io::{Write, stdin, stdout};

use bertlv::{decode, pretty_print};

/// A simple command-line parser for BER-TLV data.
/// It reads hex strings from the user, decodes them, and prints the
/// resulting TLV tree. The parser continues until the user types "quit"
/// or "exit".
fn main() {
    println!("TLV Parser - Enter hex strings (or 'quit' to exit)");
    loop {
        print!("> ");
        stdout().flush().unwrap();

        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            println!("Error reading input");
            continue;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "exit" {
            break;
        }

        match hex::decode(input) {
            Ok(bytes) => match decode(&bytes) {
                Ok(tlvs) => println!("\n{}", pretty_print(&tlvs)),
                Err(e) => println!("ERROR parsing TLV: {e}"),
            },
            Err(e) => {
                println!("ERROR parsing hex string: {e}");
            }
        }
    }
}
