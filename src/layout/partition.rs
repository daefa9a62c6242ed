//! One-pass partitioning of a roster into layout groups
//!
//! Every layout pass builds its groups once: key → member indices, each list
//! in roster order. Rank within a group is the list position, so there is no
//! per-member rescan and no ambiguity about tie-breaking.

use std::collections::BTreeMap;

use crate::types::{CoarseBand, EmployeeRecord, EngagementLevel};

/// Sub-partition of a coarse band in the bullseye
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubBand {
    /// Inner sub-band: about to enter the next ring in
    Edge,
    /// Outer sub-band: settled inside the ring
    Core,
    /// Innermost band has no edge; members alternate two radii
    Alternating,
}

/// Bullseye group a member belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BandKey {
    pub band: CoarseBand,
    pub sub_band: SubBand,
}

impl BandKey {
    pub fn of(level: EngagementLevel) -> Self {
        let band = level.coarse_band();
        let sub_band = if band == CoarseBand::Practitioner {
            SubBand::Alternating
        } else if level.is_edge() {
            SubBand::Edge
        } else {
            SubBand::Core
        };
        Self { band, sub_band }
    }
}

/// Ordered member lists keyed by group
#[derive(Debug, Clone)]
pub struct Partition<K> {
    groups: BTreeMap<K, Vec<usize>>,
}

impl<K: Ord + Copy> Partition<K> {
    /// Group `records` by `key`, preserving roster order inside each group
    pub fn build<F>(records: &[EmployeeRecord], key: F) -> Self
    where
        F: Fn(&EmployeeRecord) -> K,
    {
        let mut groups: BTreeMap<K, Vec<usize>> = BTreeMap::new();
        for (index, record) in records.iter().enumerate() {
            groups.entry(key(record)).or_default().push(index);
        }
        Self { groups }
    }

    /// Indices (into the source slice) of the members of `key`; empty if none
    pub fn members(&self, key: &K) -> &[usize] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Non-empty groups in key order
    pub fn groups(&self) -> impl Iterator<Item = (&K, &[usize])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of members across all groups
    pub fn member_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl Partition<BandKey> {
    pub fn by_band_key(records: &[EmployeeRecord]) -> Self {
        Self::build(records, |r| BandKey::of(r.engagement_level()))
    }
}

impl Partition<CoarseBand> {
    pub fn by_coarse_band(records: &[EmployeeRecord]) -> Self {
        Self::build(records, |r| r.engagement_level().coarse_band())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::fixtures::roster_of;
    use EngagementLevel::*;

    #[test]
    fn test_band_key_mapping() {
        assert_eq!(
            BandKey::of(EdgeOfNewcomer),
            BandKey {
                band: CoarseBand::Outsider,
                sub_band: SubBand::Edge
            }
        );
        assert_eq!(BandKey::of(Newcomer).sub_band, SubBand::Core);
        assert_eq!(BandKey::of(EdgeOfPractitioner).band, CoarseBand::Explorer);
        assert_eq!(BandKey::of(EdgeOfPro).sub_band, SubBand::Alternating);
        assert_eq!(BandKey::of(Pro).band, CoarseBand::Practitioner);
    }

    #[test]
    fn test_partition_preserves_roster_order() {
        let records = roster_of(&[Outsider, Newcomer, Outsider, EdgeOfNewcomer, Outsider]);
        let partition = Partition::by_band_key(&records);
        let core = BandKey {
            band: CoarseBand::Outsider,
            sub_band: SubBand::Core,
        };
        assert_eq!(partition.members(&core), &[0, 2, 4]);
    }

    #[test]
    fn test_partition_covers_every_member_once() {
        let records = roster_of(&EngagementLevel::all());
        let partition = Partition::by_band_key(&records);
        assert_eq!(partition.member_count(), records.len());

        let mut seen: Vec<usize> = partition.groups().flat_map(|(_, m)| m.to_vec()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..records.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_missing_group_is_empty() {
        let records = roster_of(&[Explorer]);
        let partition = Partition::by_coarse_band(&records);
        assert!(partition.members(&CoarseBand::Outsider).is_empty());
        assert_eq!(partition.members(&CoarseBand::Explorer), &[0]);
    }

    #[test]
    fn test_empty_roster() {
        let partition = Partition::by_coarse_band(&[]);
        assert_eq!(partition.member_count(), 0);
        assert_eq!(partition.groups().count(), 0);
    }
}
