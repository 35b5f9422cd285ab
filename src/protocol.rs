/// Simplified NASDAQ ITCH Add Order wire format
///
/// Fixed 36-byte record, all multi-byte integers big-endian ("network order"):
///   - msg_type: u8, literal 'A' (1 byte)
///   - stock_locate: u16, fixed 1 (2 bytes)
///   - tracking_number: u16, fixed 0 (2 bytes)
///   - timestamp: u48, nanoseconds since midnight (6 bytes)
///   - order_ref: u64 (8 bytes)
///   - buy_sell: u8, 'B' or 'S' (1 byte)
///   - shares: u32 (4 bytes)
///   - stock: 8 ASCII bytes, right-padded with spaces
///   - price: u32, fixed-point with 4 implied decimals (4 bytes)
///
/// No length prefix, no checksum: records are concatenated back to back.

pub const MESSAGE_SIZE: usize = 36;

pub const MSG_TYPE_ADD_ORDER: u8 = b'A';

/// Placeholder header values; a real feed assigns these per instrument/session.
pub const STOCK_LOCATE: u16 = 1;
pub const TRACKING_NUMBER: u16 = 0;

/// ITCH timestamps are 48-bit nanoseconds since midnight.
pub const TIMESTAMP_MAX: u64 = (1 << 48) - 1;

pub const SYMBOL_SIZE: usize = 8;

// Field offsets within a record
pub const OFFSET_MSG_TYPE: usize = 0;
pub const OFFSET_STOCK_LOCATE: usize = 1;
pub const OFFSET_TRACKING_NUMBER: usize = 3;
pub const OFFSET_TIMESTAMP: usize = 5;
pub const OFFSET_ORDER_REF: usize = 11;
pub const OFFSET_SIDE: usize = 19;
pub const OFFSET_SHARES: usize = 20;
pub const OFFSET_STOCK: usize = 24;
pub const OFFSET_PRICE: usize = 32;

/// Buy/sell indicator for well-formed producers.
///
/// The wire field is a raw byte; the encoder writes whatever byte it is
/// handed. `Side` keeps the generator honest.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy = b'B',
    Sell = b'S',
}

impl Side {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'B' => Some(Side::Buy),
            b'S' => Some(Side::Sell),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

/// A logical Add Order event, constructed per message and consumed by the
/// encoder. The side is a raw byte so callers control exactly what lands on
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOrder {
    pub timestamp: u64,
    pub order_ref: u64,
    pub shares: u32,
    pub stock: String,
    pub price: u32,
    pub side: u8,
}

// Compile-time assertions for record layout
const _: () = {
    assert!(OFFSET_STOCK_LOCATE == OFFSET_MSG_TYPE + 1);
    assert!(OFFSET_TRACKING_NUMBER == OFFSET_STOCK_LOCATE + 2);
    assert!(OFFSET_TIMESTAMP == OFFSET_TRACKING_NUMBER + 2);
    assert!(OFFSET_ORDER_REF == OFFSET_TIMESTAMP + 6);
    assert!(OFFSET_SIDE == OFFSET_ORDER_REF + 8);
    assert!(OFFSET_SHARES == OFFSET_SIDE + 1);
    assert!(OFFSET_STOCK == OFFSET_SHARES + 4);
    assert!(OFFSET_PRICE == OFFSET_STOCK + SYMBOL_SIZE);
    assert!(MESSAGE_SIZE == OFFSET_PRICE + 4);
};

/// Convert price from fixed-point (hundredths of a cent) to float dollars
pub fn price_from_fixed(fixed: u32) -> f64 {
    fixed as f64 / 1e4
}

/// Convert price in dollars to fixed-point
pub fn price_to_fixed(price: f64) -> u32 {
    (price * 1e4) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_conversion() {
        assert_eq!(Side::from_byte(b'B'), Some(Side::Buy));
        assert_eq!(Side::from_byte(b'S'), Some(Side::Sell));
        assert_eq!(Side::from_byte(b'X'), None);
        assert_eq!(Side::Buy.as_byte(), b'B');
        assert_eq!(Side::Sell.as_byte(), b'S');
    }

    #[test]
    fn test_price_conversions() {
        assert_eq!(price_to_fixed(150.0), 1_500_000);
        assert_eq!(price_from_fixed(1_500_000), 150.0);

        let price = 123.4567;
        let back = price_from_fixed(price_to_fixed(price));
        assert!((back - price).abs() < 1e-4);
    }

    #[test]
    fn test_timestamp_max() {
        assert_eq!(TIMESTAMP_MAX, 0xFFFF_FFFF_FFFF);
    }
}
