use itch_wire::layout::{min_len, tag};

/// Message type identified by byte 0 of a message.
///
/// ```text
/// ┌─────┬────────────────┬─────────┐
/// │ Tag │ Variant        │ Min len │
/// ├─────┼────────────────┼─────────┤
/// │ 'S' │ SystemEvent    │ 12      │
/// │ 'A' │ AddOrder       │ 36      │
/// │ 'P' │ Trade          │ 44      │
/// │ 'L' │ StockDirectory │ 22      │
/// │ 'D' │ DeleteOrder    │ 19      │
/// │ 'U' │ ReplaceOrder   │ 35      │
/// │ 'X' │ OrderCancel    │ 23      │
/// └─────┴────────────────┴─────────┘
/// ```
///
/// Every other byte maps to `Unknown(tag)` so the raw value survives for
/// diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageType {
    SystemEvent,
    AddOrder,
    Trade,
    StockDirectory,
    DeleteOrder,
    ReplaceOrder,
    OrderCancel,
    Unknown(u8),
}

impl MessageType {
    /// All recognized variants, in table order.
    pub const KNOWN: [Self; 7] = [
        Self::SystemEvent,
        Self::AddOrder,
        Self::Trade,
        Self::StockDirectory,
        Self::DeleteOrder,
        Self::ReplaceOrder,
        Self::OrderCancel,
    ];

    pub fn from_wire_id(id: u8) -> Self {
        match id {
            tag::SYSTEM_EVENT => Self::SystemEvent,
            tag::ADD_ORDER => Self::AddOrder,
            tag::TRADE => Self::Trade,
            tag::STOCK_DIRECTORY => Self::StockDirectory,
            tag::DELETE_ORDER => Self::DeleteOrder,
            tag::REPLACE_ORDER => Self::ReplaceOrder,
            tag::ORDER_CANCEL => Self::OrderCancel,
            other => Self::Unknown(other),
        }
    }

    pub fn wire_id(self) -> u8 {
        match self {
            Self::SystemEvent => tag::SYSTEM_EVENT,
            Self::AddOrder => tag::ADD_ORDER,
            Self::Trade => tag::TRADE,
            Self::StockDirectory => tag::STOCK_DIRECTORY,
            Self::DeleteOrder => tag::DELETE_ORDER,
            Self::ReplaceOrder => tag::REPLACE_ORDER,
            Self::OrderCancel => tag::ORDER_CANCEL,
            Self::Unknown(id) => id,
        }
    }

    /// Minimum message length needed to decode every field of this type.
    /// `None` for unknown tags, which have no layout.
    pub fn min_len(self) -> Option<usize> {
        match self {
            Self::SystemEvent => Some(min_len::SYSTEM_EVENT),
            Self::AddOrder => Some(min_len::ADD_ORDER),
            Self::Trade => Some(min_len::TRADE),
            Self::StockDirectory => Some(min_len::STOCK_DIRECTORY),
            Self::DeleteOrder => Some(min_len::DELETE_ORDER),
            Self::ReplaceOrder => Some(min_len::REPLACE_ORDER),
            Self::OrderCancel => Some(min_len::ORDER_CANCEL),
            Self::Unknown(_) => None,
        }
    }

    /// Human-readable name used in console output.
    pub fn name(self) -> &'static str {
        match self {
            Self::SystemEvent => "System Event",
            Self::AddOrder => "Add Order",
            Self::Trade => "Trade",
            Self::StockDirectory => "Stock Directory",
            Self::DeleteOrder => "Delete Order",
            Self::ReplaceOrder => "Replace Order",
            Self::OrderCancel => "Order Cancel",
            Self::Unknown(_) => "Unknown",
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_variants_roundtrip() {
        let table = [
            (MessageType::SystemEvent, b'S', 12),
            (MessageType::AddOrder, b'A', 36),
            (MessageType::Trade, b'P', 44),
            (MessageType::StockDirectory, b'L', 22),
            (MessageType::DeleteOrder, b'D', 19),
            (MessageType::ReplaceOrder, b'U', 35),
            (MessageType::OrderCancel, b'X', 23),
        ];

        for (variant, wire, min) in table {
            assert_eq!(variant.wire_id(), wire, "wire_id mismatch for {variant:?}");
            assert_eq!(MessageType::from_wire_id(wire), variant);
            assert_eq!(variant.min_len(), Some(min));
            assert!(variant.is_known());
        }
        assert_eq!(MessageType::KNOWN.len(), table.len());
    }

    #[test]
    fn unknown_value_preserved() {
        let unknown = MessageType::from_wire_id(b'Z');
        assert_eq!(unknown, MessageType::Unknown(b'Z'));
        assert_eq!(unknown.wire_id(), b'Z');
        assert_eq!(unknown.min_len(), None);
        assert!(!unknown.is_known());
    }

    #[test]
    fn lowercase_tags_are_unknown() {
        assert_eq!(MessageType::from_wire_id(b's'), MessageType::Unknown(b's'));
        assert_eq!(MessageType::from_wire_id(0x00), MessageType::Unknown(0x00));
    }
}
