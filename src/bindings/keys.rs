//! Binding Keys Module
//!
//! Key and entry types for the two directions of the binding cache.
//!
//! Both key types derive `Hash` and `Eq`, so hashing mixes every field
//! properly and equality compares the two operands field by field.

use crate::bindings::{Channel, LongId, ShortId};

// == Forward Key ==
/// Key for the forward direction: channel + short ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForwardKey {
    pub channel: Channel,
    pub short_id: ShortId,
}

// == Inverse Key ==
/// Key for the inverse direction: channel + long address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InverseKey {
    pub channel: Channel,
    pub long_id: LongId,
}

// == Forward Entry ==
/// Value stored in the forward direction: the long address a short ID
/// resolves to, plus optional display metadata owned by the entry.
#[derive(Debug, Clone)]
pub struct ForwardEntry {
    /// The 24-bit-range station address
    pub long_id: LongId,
    /// Caller-attached display label (e.g. a callsign), if any
    pub label: Option<String>,
}

// == Inverse Entry ==
/// Value stored in the inverse direction. Holds only the short ID needed to
/// recover the forward key during deletion.
#[derive(Debug, Clone, Copy)]
pub struct InverseEntry {
    pub short_id: ShortId,
}
