// Class of service records: one booking code with its seat count and cabin

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cabin {
    First,
    Business,
    PremiumEconomy,
    Economy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassOfService {
    pub booking_code: String,
    pub num_seats: u16,
    pub cabin: Cabin,
}

// Per-segment availability: every record offered on one travel segment
pub type ClassOfServiceList = Vec<ClassOfService>;

impl ClassOfService {
    pub fn new(booking_code: &str, num_seats: u16, cabin: Cabin) -> Self {
        Self {
            booking_code: booking_code.to_string(),
            num_seats,
            cabin,
        }
    }

    // True when this record sells `booking_code` with at least `seats` seats left
    pub fn is_available(&self, booking_code: &str, seats: u16) -> bool {
        self.booking_code == booking_code && self.num_seats >= seats
    }
}
