//! Command-line report for a parity-check matrix.
//!
//! Usage: `paritycheck [MATRIX] [LIMIT]`, e.g.
//! `paritycheck "{{1,1,1,1,0},{0,1,0,0,1}}" 2`. Invalid arguments fall back
//! to a built-in example with a printed notice; the library itself never
//! substitutes defaults.

use paritycheck::LinearCode;

const DEFAULT_MATRIX: &str =
    "{{0,1,1,1,1,0,0,0},{1,0,1,1,0,1,0,0},{1,1,0,1,0,0,1,0},{1,1,1,0,0,0,0,1}}";
const DEFAULT_LIMIT: i64 = 2;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let limit = match args.get(1) {
        None => DEFAULT_LIMIT,
        Some(raw) => match raw.parse::<i64>() {
            Ok(limit) if limit >= 2 => limit,
            Ok(_) => {
                println!("The limit has to be >= 2, so limit={DEFAULT_LIMIT} will be used");
                DEFAULT_LIMIT
            }
            Err(_) => {
                println!("Limit could not be parsed. Limit = {DEFAULT_LIMIT} will be used.");
                DEFAULT_LIMIT
            }
        },
    };

    let code = match args.first() {
        None => LinearCode::new(DEFAULT_MATRIX, limit)
            .expect("built-in example matrix is valid"),
        Some(raw) => match LinearCode::new(raw, limit) {
            Ok(code) => code,
            Err(error) => {
                println!(
                    "The matrix could not be parsed ({error}). Make sure to put it in \
                     quotation marks and refer to the readme for example inputs"
                );
                LinearCode::new(DEFAULT_MATRIX, limit)
                    .expect("built-in example matrix is valid")
            }
        },
    };

    println!("Parity check matrix: {}", code.parity_check());
    match code.generator_matrix() {
        Some(generator) => println!("Original generator matrix: {generator}"),
        None => println!(
            "Original generator matrix: a valid generator matrix could not be \
             calculated, but might still exist"
        ),
    }
    println!("With the original generator matrix, {}", code.summary());
    println!("Hamming distance: {}", code.hamming_distance());
    println!("Number of valid codewords: {}", code.codeword_count());
    println!("Valid codewords:");
    for codeword in code.codewords() {
        let entries: Vec<String> = codeword.iter().map(|v| v.to_string()).collect();
        println!("({})", entries.join(", "));
    }
}
