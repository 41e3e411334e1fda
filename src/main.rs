// Prints the course's worked examples under an optional numeric config.
// Usage:
//   cargo run -- [config.json]
// Set RUST_LOG=debug to see clamping records.
use std::process;

use log::info;

use ferrite_intro::{cross_entropy_with, softmax_with, NumericConfig};

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match NumericConfig::load_json(&path) {
            Ok(config) => {
                info!("loaded numeric config from {path}");
                config
            }
            Err(e) => {
                eprintln!("failed to load config {path}: {e}");
                process::exit(1);
            }
        },
        None => NumericConfig::default(),
    };

    println!("ferrite-intro: softmax and cross-entropy");
    println!("config: {config:?}");

    let logits = [1.0, 2.0, 3.0];
    match softmax_with(&logits, &config) {
        Ok(probs) => println!("softmax({logits:?}) = {probs:.4?}"),
        Err(e) => println!("softmax({logits:?}) failed: {e}"),
    }

    let cases: [(&[f64], &[f64]); 3] = [
        (&[1.0, 0.0, 1.0, 1.0], &[0.4, 0.6, 0.1, 0.5]),
        (&[1.0], &[1.0]),
        (&[], &[]),
    ];
    for (labels, predictions) in cases {
        match cross_entropy_with(labels, predictions, &config) {
            Ok(loss) => println!("cross_entropy({labels:?}, {predictions:?}) = {loss:.4}"),
            Err(e) => println!("cross_entropy({labels:?}, {predictions:?}) failed: {e}"),
        }
    }
}
