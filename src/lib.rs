/// ITCH Feed Generator - Sample Market Data Synthesizer
///
/// Synthesizes binary market-data files conforming to a simplified subset of
/// the NASDAQ ITCH "Add Order" message, for use as test input to downstream
/// parsers. Features include:
/// - Fixed-layout 36-byte big-endian Add Order encoding
/// - Range validation at the encoder boundary (48-bit timestamps, ASCII symbols)
/// - Seeded, reproducible random feed generation
/// - Sequential file output, one complete record per write

pub mod protocol;
pub mod encoder;
pub mod generator;

pub use protocol::{AddOrder, Side, MESSAGE_SIZE, SYMBOL_SIZE, TIMESTAMP_MAX};
pub use encoder::{encode_add_order, encode_add_order_into, EncodeError};
pub use generator::{FeedGenerator, GeneratorConfig, GenerateError};
