/// Generates a sample ITCH Add Order feed to sample_itch.bin
///
/// Takes no arguments; uses the default generator configuration with a fixed
/// seed so repeated runs produce the same file.

use itch_feedgen::{FeedGenerator, GenerateError, GeneratorConfig};

const OUTPUT_PATH: &str = "sample_itch.bin";

fn run() -> Result<u64, GenerateError> {
    let mut generator = FeedGenerator::new(GeneratorConfig::default());
    generator.generate_to_file(OUTPUT_PATH)
}

fn main() {
    match run() {
        Ok(count) => {
            println!("Generated {} ITCH messages to {}", count, OUTPUT_PATH);
        }
        Err(e) => {
            eprintln!("feed generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
