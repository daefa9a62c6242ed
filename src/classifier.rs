//! Engagement Classifier
//!
//! Derives the engagement level from usage facts with a strict priority
//! decision tree. Certification status always wins over usage recency:
//!
//! 1. pro certified → `pro`
//! 2. in pro program → `edge_of_pro`
//! 3. practitioner certified → `practitioner`
//! 4. in practitioner program → `edge_of_practitioner`
//! 5. never used → `outsider`
//! 6. used within 4 weeks → `explorer` (≥ 3 of the last 4 weeks) or `newcomer`
//! 7. used before that → `edge_of_explorer` (streak ≥ 3 weeks) or `edge_of_newcomer`

use chrono::{DateTime, Duration, Utc};

use crate::types::{EngagementLevel, UsageFacts};

/// Usage newer than this many weeks counts as recent
pub const RECENT_WINDOW_WEEKS: i64 = 4;

/// Usage-fact generation spreads older usage back to this horizon
pub const STALE_WINDOW_WEEKS: i64 = 12;

/// Minimum active weeks (of the last 4) for `explorer`
pub const EXPLORER_MIN_WEEKS: u8 = 3;

/// Minimum past streak for `edge_of_explorer`
pub const EDGE_OF_EXPLORER_MIN_STREAK: u8 = 3;

/// Reference instant plus the recent/stale horizons derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizons {
    pub now: DateTime<Utc>,
    pub recent: DateTime<Utc>,
    pub stale: DateTime<Utc>,
}

impl Horizons {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            recent: now - Duration::weeks(RECENT_WINDOW_WEEKS),
            stale: now - Duration::weeks(STALE_WINDOW_WEEKS),
        }
    }
}

/// Pure classifier bound to one reference instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementClassifier {
    horizons: Horizons,
}

impl EngagementClassifier {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            horizons: Horizons::at(now),
        }
    }

    pub fn horizons(&self) -> Horizons {
        self.horizons
    }

    /// Classify usage facts. Same facts and same "now" always give the same level.
    pub fn classify(&self, facts: &UsageFacts) -> EngagementLevel {
        if facts.pro_certified {
            return EngagementLevel::Pro;
        }
        if facts.in_pro_program {
            return EngagementLevel::EdgeOfPro;
        }
        if facts.practitioner_certified {
            return EngagementLevel::Practitioner;
        }
        if facts.in_practitioner_program {
            return EngagementLevel::EdgeOfPractitioner;
        }

        let Some(last_usage) = facts.last_usage_timestamp else {
            return EngagementLevel::Outsider;
        };

        if last_usage > self.horizons.recent {
            if facts.weeks_used_in_past_4 >= EXPLORER_MIN_WEEKS {
                EngagementLevel::Explorer
            } else {
                EngagementLevel::Newcomer
            }
        } else if facts.consecutive_weeks_used >= EDGE_OF_EXPLORER_MIN_STREAK {
            EngagementLevel::EdgeOfExplorer
        } else {
            EngagementLevel::EdgeOfNewcomer
        }
    }
}

/// Canonical usage facts that classify to `level` under `horizons`.
///
/// Handy for fixtures and demos that need a member at a given level.
pub fn exemplar_facts(level: EngagementLevel, horizons: &Horizons) -> UsageFacts {
    let recent_usage = Some(horizons.now - Duration::days(1));
    let old_usage = Some(horizons.recent - Duration::weeks(2));
    match level {
        EngagementLevel::Pro => UsageFacts {
            pro_certified: true,
            ..Default::default()
        },
        EngagementLevel::EdgeOfPro => UsageFacts {
            in_pro_program: true,
            ..Default::default()
        },
        EngagementLevel::Practitioner => UsageFacts {
            practitioner_certified: true,
            ..Default::default()
        },
        EngagementLevel::EdgeOfPractitioner => UsageFacts {
            in_practitioner_program: true,
            ..Default::default()
        },
        EngagementLevel::Outsider => UsageFacts::default(),
        EngagementLevel::Explorer => UsageFacts {
            last_usage_timestamp: recent_usage,
            weeks_used_in_past_4: EXPLORER_MIN_WEEKS,
            ..Default::default()
        },
        EngagementLevel::Newcomer => UsageFacts {
            last_usage_timestamp: recent_usage,
            weeks_used_in_past_4: 1,
            ..Default::default()
        },
        EngagementLevel::EdgeOfExplorer => UsageFacts {
            last_usage_timestamp: old_usage,
            consecutive_weeks_used: EDGE_OF_EXPLORER_MIN_STREAK,
            ..Default::default()
        },
        EngagementLevel::EdgeOfNewcomer => UsageFacts {
            last_usage_timestamp: old_usage,
            consecutive_weeks_used: 1,
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
    }

    fn classifier() -> EngagementClassifier {
        EngagementClassifier::new(reference_now())
    }

    #[test]
    fn test_horizons() {
        let h = Horizons::at(reference_now());
        assert_eq!(h.now - h.recent, Duration::weeks(4));
        assert_eq!(h.now - h.stale, Duration::weeks(12));
    }

    #[test]
    fn test_practitioner_certified_only() {
        let facts = UsageFacts {
            practitioner_certified: true,
            ..Default::default()
        };
        assert_eq!(classifier().classify(&facts), EngagementLevel::Practitioner);
    }

    #[test]
    fn test_pro_program_beats_practitioner_certificate() {
        let facts = UsageFacts {
            in_pro_program: true,
            practitioner_certified: true,
            ..Default::default()
        };
        assert_eq!(classifier().classify(&facts), EngagementLevel::EdgeOfPro);
    }

    #[test]
    fn test_pro_certified_beats_everything() {
        let facts = UsageFacts {
            last_usage_timestamp: None,
            pro_certified: true,
            in_pro_program: true,
            practitioner_certified: true,
            in_practitioner_program: true,
            ..Default::default()
        };
        assert_eq!(classifier().classify(&facts), EngagementLevel::Pro);
    }

    #[test]
    fn test_practitioner_program_beats_recent_usage() {
        let facts = UsageFacts {
            last_usage_timestamp: Some(reference_now()),
            weeks_used_in_past_4: 4,
            in_practitioner_program: true,
            ..Default::default()
        };
        assert_eq!(
            classifier().classify(&facts),
            EngagementLevel::EdgeOfPractitioner
        );
    }

    #[test]
    fn test_never_used_is_outsider() {
        assert_eq!(
            classifier().classify(&UsageFacts::default()),
            EngagementLevel::Outsider
        );
    }

    #[test]
    fn test_recent_frequent_usage_is_explorer() {
        let facts = UsageFacts {
            last_usage_timestamp: Some(reference_now() - Duration::days(6)),
            weeks_used_in_past_4: 3,
            ..Default::default()
        };
        assert_eq!(classifier().classify(&facts), EngagementLevel::Explorer);
    }

    #[test]
    fn test_recent_sparse_usage_is_newcomer() {
        let facts = UsageFacts {
            last_usage_timestamp: Some(reference_now() - Duration::days(6)),
            weeks_used_in_past_4: 2,
            ..Default::default()
        };
        assert_eq!(classifier().classify(&facts), EngagementLevel::Newcomer);
    }

    #[test]
    fn test_old_usage_short_streak_is_edge_of_newcomer() {
        let facts = UsageFacts {
            last_usage_timestamp: Some(reference_now() - Duration::weeks(8)),
            consecutive_weeks_used: 1,
            ..Default::default()
        };
        assert_eq!(classifier().classify(&facts), EngagementLevel::EdgeOfNewcomer);
    }

    #[test]
    fn test_old_usage_long_streak_is_edge_of_explorer() {
        let facts = UsageFacts {
            last_usage_timestamp: Some(reference_now() - Duration::weeks(8)),
            consecutive_weeks_used: 5,
            weeks_used_in_past_4: 4,
            ..Default::default()
        };
        assert_eq!(classifier().classify(&facts), EngagementLevel::EdgeOfExplorer);
    }

    #[test]
    fn test_usage_exactly_at_recent_horizon_is_not_recent() {
        let facts = UsageFacts {
            last_usage_timestamp: Some(reference_now() - Duration::weeks(4)),
            weeks_used_in_past_4: 4,
            ..Default::default()
        };
        assert_eq!(classifier().classify(&facts), EngagementLevel::EdgeOfNewcomer);
    }

    #[test]
    fn test_exemplar_facts_classify_to_their_level() {
        let c = classifier();
        for level in EngagementLevel::all() {
            let facts = exemplar_facts(level, &c.horizons());
            assert_eq!(c.classify(&facts), level, "exemplar for {level}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_facts() -> impl Strategy<Value = UsageFacts> {
            (
                prop::option::of(0i64..(20 * 7 * 24)),
                0u8..=4,
                0u8..=7,
                any::<bool>(),
                any::<bool>(),
                any::<bool>(),
                any::<bool>(),
            )
                .prop_map(
                    |(hours_ago, weeks, streak, prac_prog, prac_cert, pro_prog, pro_cert)| {
                        UsageFacts {
                            last_usage_timestamp: hours_ago
                                .map(|h| reference_now() - Duration::hours(h)),
                            weeks_used_in_past_4: weeks,
                            consecutive_weeks_used: streak,
                            in_practitioner_program: prac_prog,
                            practitioner_certified: prac_cert,
                            in_pro_program: pro_prog,
                            pro_certified: pro_cert,
                        }
                    },
                )
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            /// Pro certification overrides every other fact
            #[test]
            fn prop_pro_certified_is_pro(mut facts in arb_facts()) {
                facts.pro_certified = true;
                prop_assert_eq!(classifier().classify(&facts), EngagementLevel::Pro);
            }

            /// No flags and no usage always means outsider
            #[test]
            fn prop_no_flags_no_usage_is_outsider(weeks in 0u8..=4, streak in 0u8..=7) {
                let facts = UsageFacts {
                    weeks_used_in_past_4: weeks,
                    consecutive_weeks_used: streak,
                    ..Default::default()
                };
                prop_assert_eq!(classifier().classify(&facts), EngagementLevel::Outsider);
            }

            /// Classification is idempotent
            #[test]
            fn prop_classify_idempotent(facts in arb_facts()) {
                let a = classifier().classify(&facts);
                let b = classifier().classify(&facts.clone());
                prop_assert_eq!(a, b);
            }

            /// Any program or certificate lands at practitioner or above
            #[test]
            fn prop_flags_reach_practitioner_band(facts in arb_facts()) {
                let flagged = facts.pro_certified
                    || facts.in_pro_program
                    || facts.practitioner_certified
                    || facts.in_practitioner_program;
                let level = classifier().classify(&facts);
                prop_assert_eq!(flagged, level >= EngagementLevel::EdgeOfPractitioner);
            }
        }
    }
}
