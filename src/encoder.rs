/// Add Order message encoder
///
/// Maps a logical `AddOrder` event onto the fixed 36-byte big-endian record.
/// Encoding is pure: no allocation beyond the output array, no hidden state,
/// byte-identical output for identical input.

use crate::protocol::*;
use byteorder::{BigEndian, ByteOrder};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("timestamp {value} exceeds 48-bit range (max {max})", max = TIMESTAMP_MAX)]
    TimestampOutOfRange { value: u64 },

    #[error("stock symbol {symbol:?} contains non-ASCII characters")]
    NonAsciiSymbol { symbol: String },
}

pub type EncodeResult<T> = Result<T, EncodeError>;

/// Encode an Add Order event into a caller-provided record buffer.
///
/// The timestamp must fit in 48 bits and the symbol must be ASCII; both are
/// rejected with a range error rather than silently truncated. Symbols longer
/// than 8 bytes are cut to 8, shorter ones right-padded with spaces. The side
/// byte is written verbatim, unvalidated.
pub fn encode_add_order_into(order: &AddOrder, out: &mut [u8; MESSAGE_SIZE]) -> EncodeResult<()> {
    if order.timestamp > TIMESTAMP_MAX {
        return Err(EncodeError::TimestampOutOfRange {
            value: order.timestamp,
        });
    }
    if !order.stock.is_ascii() {
        return Err(EncodeError::NonAsciiSymbol {
            symbol: order.stock.clone(),
        });
    }

    out[OFFSET_MSG_TYPE] = MSG_TYPE_ADD_ORDER;
    BigEndian::write_u16(&mut out[OFFSET_STOCK_LOCATE..OFFSET_TRACKING_NUMBER], STOCK_LOCATE);
    BigEndian::write_u16(&mut out[OFFSET_TRACKING_NUMBER..OFFSET_TIMESTAMP], TRACKING_NUMBER);
    BigEndian::write_u48(&mut out[OFFSET_TIMESTAMP..OFFSET_ORDER_REF], order.timestamp);
    BigEndian::write_u64(&mut out[OFFSET_ORDER_REF..OFFSET_SIDE], order.order_ref);
    out[OFFSET_SIDE] = order.side;
    BigEndian::write_u32(&mut out[OFFSET_SHARES..OFFSET_STOCK], order.shares);

    // Right-pad with spaces, truncate past 8 bytes
    let symbol = order.stock.as_bytes();
    let n = symbol.len().min(SYMBOL_SIZE);
    out[OFFSET_STOCK..OFFSET_STOCK + n].copy_from_slice(&symbol[..n]);
    out[OFFSET_STOCK + n..OFFSET_PRICE].fill(b' ');

    BigEndian::write_u32(&mut out[OFFSET_PRICE..MESSAGE_SIZE], order.price);

    Ok(())
}

/// Encode an Add Order event into a fresh 36-byte record.
pub fn encode_add_order(order: &AddOrder) -> EncodeResult<[u8; MESSAGE_SIZE]> {
    let mut out = [0u8; MESSAGE_SIZE];
    encode_add_order_into(order, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> AddOrder {
        AddOrder {
            timestamp: 34_200_000_000_000,
            order_ref: 1_000_000,
            shares: 500,
            stock: "AAPL".to_string(),
            price: 1_500_000,
            side: b'B',
        }
    }

    #[test]
    fn test_record_header() {
        let msg = encode_add_order(&sample_order()).unwrap();
        assert_eq!(msg.len(), MESSAGE_SIZE);
        assert_eq!(msg[0], b'A');
        assert_eq!(BigEndian::read_u16(&msg[1..3]), 1);
        assert_eq!(BigEndian::read_u16(&msg[3..5]), 0);
    }

    #[test]
    fn test_timestamp_out_of_range() {
        let mut order = sample_order();
        order.timestamp = 1 << 48;
        assert_eq!(
            encode_add_order(&order),
            Err(EncodeError::TimestampOutOfRange { value: 1 << 48 })
        );
    }

    #[test]
    fn test_timestamp_at_max() {
        let mut order = sample_order();
        order.timestamp = TIMESTAMP_MAX;
        let msg = encode_add_order(&order).unwrap();
        assert_eq!(BigEndian::read_u48(&msg[5..11]), TIMESTAMP_MAX);
    }

    #[test]
    fn test_non_ascii_symbol() {
        let mut order = sample_order();
        order.stock = "AÄPL".to_string();
        assert!(matches!(
            encode_add_order(&order),
            Err(EncodeError::NonAsciiSymbol { .. })
        ));
    }

    #[test]
    fn test_side_byte_verbatim() {
        let mut order = sample_order();
        order.side = b'X';
        let msg = encode_add_order(&order).unwrap();
        assert_eq!(msg[19], b'X');
    }
}
