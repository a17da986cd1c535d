//! Booking status catalog entry.

/// A named status code bookings reference.
///
/// The status set is data-driven: rows can be added or removed through the
/// admin surface, and a row cannot be deleted while any booking references it
/// (enforced by the foreign key's RESTRICT).
#[derive(Debug, Clone)]
pub struct BookingStatus {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Input data for creating a status.
#[derive(Debug, Clone)]
pub struct NewBookingStatus {
    pub name: String,
    pub description: Option<String>,
}
