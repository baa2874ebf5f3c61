//! Dashboard courier counts

use std::fmt;

use crate::directory::{Courier, CourierStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourierStats {
    pub total: usize,
    pub pending: usize,
    pub in_transit: usize,
    pub delivered: usize,
    pub returned: usize,
}

impl CourierStats {
    pub fn from_couriers(couriers: &[Courier]) -> Self {
        let mut stats = Self::default();
        for courier in couriers {
            stats.record(courier.status);
        }
        stats
    }

    pub fn record(&mut self, status: CourierStatus) {
        self.total += 1;
        match status {
            CourierStatus::Pending => self.pending += 1,
            CourierStatus::InTransit => self.in_transit += 1,
            CourierStatus::Delivered => self.delivered += 1,
            CourierStatus::Returned => self.returned += 1,
        }
    }
}

impl fmt::Display for CourierStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.total == 1 { "courier" } else { "couriers" };
        write!(
            f,
            "{} {} | {} pending | {} in transit | {} delivered | {} returned",
            self.total, noun, self.pending, self.in_transit, self.delivered, self.returned
        )
    }
}
