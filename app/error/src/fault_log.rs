//! Bounded in-memory fault log

use crate::{FaultHandler, FaultReport};
use heapless::Vec;

/// Fault handler that keeps the first `N` reports
///
/// Reports past capacity are counted, not stored.
#[derive(Debug, Clone)]
pub struct FaultLog<const N: usize> {
    reports: Vec<FaultReport, N>,
    dropped: usize,
}

impl<const N: usize> FaultLog<N> {
    /// Create an empty log
    pub const fn new() -> Self {
        Self {
            reports: Vec::new(),
            dropped: 0,
        }
    }

    /// Stored reports, oldest first
    pub fn reports(&self) -> &[FaultReport] {
        &self.reports
    }

    /// Number of stored reports
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Check if no reports are stored
    ///
    /// Dropped reports do not count; see [`has_faults`](Self::has_faults).
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Check if anything has been reported, stored or dropped
    pub fn has_faults(&self) -> bool {
        !self.reports.is_empty() || self.dropped > 0
    }

    /// Most recent stored report
    pub fn last(&self) -> Option<&FaultReport> {
        self.reports.last()
    }

    /// Number of reports that did not fit
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Forget all reports
    pub fn clear(&mut self) {
        self.reports.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> Default for FaultLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FaultHandler for FaultLog<N> {
    fn on_fault(&mut self, report: FaultReport) {
        if self.reports.push(report).is_err() {
            self.dropped += 1;
        }
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for FaultLog<N> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "FaultLog{{ stored: {}, dropped: {} }}",
            self.reports.len(),
            self.dropped
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_reports_and_counts_overflow() {
        let mut log: FaultLog<2> = FaultLog::new();
        for code in 1..=4 {
            log.on_fault(FaultReport::anonymous(code));
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.dropped(), 2);
        assert_eq!(log.reports()[0].error_code, 1);
        assert_eq!(log.last().map(|r| r.error_code), Some(2));
    }

    #[test]
    fn clear_resets_everything() {
        let mut log: FaultLog<1> = FaultLog::new();
        log.on_fault(FaultReport::anonymous(1));
        log.on_fault(FaultReport::anonymous(2));
        log.clear();
        assert!(log.is_empty());
        assert!(!log.has_faults());
        assert_eq!(log.dropped(), 0);
    }

    #[test]
    fn zero_capacity_only_counts() {
        let mut log: FaultLog<0> = FaultLog::new();
        log.on_fault(FaultReport::anonymous(1));
        assert_eq!(log.len(), 0);
        assert!(log.is_empty());
        assert!(log.has_faults());
        assert_eq!(log.dropped(), 1);
    }
}
