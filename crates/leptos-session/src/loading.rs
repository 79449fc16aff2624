//! In-flight request counter behind the global loading indicator

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingCounter {
    in_flight: u32,
}

impl LoadingCounter {
    pub fn start(&mut self) {
        self.in_flight = self.in_flight.saturating_add(1);
    }

    /// Never goes below zero
    pub fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_requests() {
        let mut counter = LoadingCounter::default();
        counter.start();
        counter.start();
        counter.settle();
        // One request still out, indicator stays up
        assert!(counter.is_loading());
        counter.settle();
        assert!(!counter.is_loading());
    }

    #[test]
    fn test_settle_saturates() {
        let mut counter = LoadingCounter::default();
        counter.settle();
        assert_eq!(counter.in_flight(), 0);
        counter.start();
        assert_eq!(counter.in_flight(), 1);
    }
}
