/// Synthetic Add Order feed generator
///
/// Produces a deterministic stream of random Add Order events from a seeded
/// RNG and appends the encoded records to a byte sink in generation order.
/// Timestamps advance by a fixed step and order refs by 1 per message, so
/// consumers can assume non-decreasing timestamps.

use crate::encoder::{encode_add_order_into, EncodeError};
use crate::protocol::{AddOrder, Side, MESSAGE_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

pub type GenerateResult<T> = Result<T, GenerateError>;

/// Generation parameters. Defaults match the sample feed shipped with the
/// project: 50k messages starting at 09:30 (34200s in ns since midnight),
/// one order per microsecond.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub message_count: u64,
    pub start_timestamp: u64,
    pub timestamp_step: u64,
    pub start_order_ref: u64,
    pub shares_range: RangeInclusive<u32>,
    pub price_range: RangeInclusive<u32>,
    pub symbols: Vec<String>,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            message_count: 50_000,
            start_timestamp: 34_200_000_000_000,
            timestamp_step: 1_000,
            start_order_ref: 1_000_000,
            shares_range: 100..=10_000,
            price_range: 1_000_000..=2_000_000,
            symbols: ["AAPL", "MSFT", "GOOGL", "TSLA", "AMZN"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            seed: 0,
        }
    }
}

/// Seeded feed generator. The RNG is owned, never process-global: the same
/// seed yields a byte-identical feed.
pub struct FeedGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    next_timestamp: u64,
    next_order_ref: u64,
}

impl FeedGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let next_timestamp = config.start_timestamp;
        let next_order_ref = config.start_order_ref;
        FeedGenerator {
            config,
            rng,
            next_timestamp,
            next_order_ref,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draw the next random order. Timestamp and order ref advance even if
    /// the caller drops the event.
    pub fn next_order(&mut self) -> AddOrder {
        let symbol_idx = self.rng.gen_range(0..self.config.symbols.len());
        let side = if self.rng.gen_bool(0.5) {
            Side::Buy
        } else {
            Side::Sell
        };

        let order = AddOrder {
            timestamp: self.next_timestamp,
            order_ref: self.next_order_ref,
            shares: self.rng.gen_range(self.config.shares_range.clone()),
            stock: self.config.symbols[symbol_idx].clone(),
            price: self.rng.gen_range(self.config.price_range.clone()),
            side: side.as_byte(),
        };

        self.next_timestamp += self.config.timestamp_step;
        self.next_order_ref += 1;

        order
    }

    /// Encode `message_count` records into the sink, one complete 36-byte
    /// record per write. Returns the record count.
    pub fn write_feed<W: Write>(&mut self, out: &mut W) -> GenerateResult<u64> {
        let mut record = [0u8; MESSAGE_SIZE];
        let count = self.config.message_count;

        for _ in 0..count {
            let order = self.next_order();
            encode_add_order_into(&order, &mut record)?;
            out.write_all(&record)?;
        }

        Ok(count)
    }

    /// Generate the full feed to a file opened in binary write mode. The
    /// writer is flushed before returning so the file holds exactly
    /// `message_count * 36` bytes on success.
    pub fn generate_to_file<P: AsRef<Path>>(&mut self, path: P) -> GenerateResult<u64> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let count = self.write_feed(&mut writer)?;
        writer.flush()?;
        Ok(count)
    }
}
