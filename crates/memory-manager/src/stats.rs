// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Allocation statistics for diagnostics.

/// Cumulative statistics about a [`MemoryPool`](crate::MemoryPool).
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct AllocationStats {
    /// Number of admitted non-empty reservations.
    pub total_allocations: u64,
    /// Number of reservations rejected because of the budget.
    pub oom_count: u64,
    /// Peak reserved bytes.
    pub peak_allocated_bytes: usize,
    /// Total bytes ever admitted, including bytes since released.
    pub cumulative_allocated_bytes: u64,
    /// Number of releases.
    pub total_deallocations: u64,
}

impl AllocationStats {
    /// Reservations admitted but not yet released.
    pub fn outstanding(&self) -> u64 {
        self.total_allocations.saturating_sub(self.total_deallocations)
    }

    pub(crate) fn record_allocation(&mut self, size: usize) {
        self.total_allocations += 1;
        self.cumulative_allocated_bytes += size as u64;
    }

    pub(crate) fn record_oom(&mut self) {
        self.oom_count += 1;
    }

    pub(crate) fn record_deallocation(&mut self) {
        self.total_deallocations += 1;
    }

    pub(crate) fn update_peak(&mut self, current_bytes: usize) {
        self.peak_allocated_bytes = self.peak_allocated_bytes.max(current_bytes);
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Reservations: {} admitted, {} released, {} rejected, peak {} bytes, {} bytes cumulative",
            self.total_allocations,
            self.total_deallocations,
            self.oom_count,
            self.peak_allocated_bytes,
            self.cumulative_allocated_bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let s = AllocationStats::default();
        assert_eq!(s.total_allocations, 0);
        assert_eq!(s.outstanding(), 0);
    }

    #[test]
    fn test_peak_tracking() {
        let mut s = AllocationStats::default();
        s.update_peak(100);
        assert_eq!(s.peak_allocated_bytes, 100);
        s.update_peak(50);
        assert_eq!(s.peak_allocated_bytes, 100); // Doesn't decrease.
        s.update_peak(200);
        assert_eq!(s.peak_allocated_bytes, 200);
    }

    #[test]
    fn test_outstanding() {
        let mut s = AllocationStats::default();
        s.record_allocation(1000);
        s.record_allocation(500);
        s.record_deallocation();
        assert_eq!(s.outstanding(), 1);
        assert_eq!(s.cumulative_allocated_bytes, 1500);
    }

    #[test]
    fn test_summary() {
        let mut s = AllocationStats::default();
        s.record_allocation(64);
        s.record_oom();
        s.update_peak(64);
        let summary = s.summary();
        assert!(summary.contains("1 admitted"));
        assert!(summary.contains("1 rejected"));
        assert!(summary.contains("peak 64 bytes"));
    }
}
