//! Usage Fact Generator
//!
//! Produces the raw attributes the classifier consumes. Last usage is
//! recent for 60% of members (0-27 whole days ago), lands between the recent
//! and stale horizons for 20%, and is absent for the rest.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::classifier::Horizons;
use crate::types::UsageFacts;

/// Share of members with usage inside the recent window
pub const RECENT_SHARE: f64 = 0.6;
/// Cumulative share with any usage (recent + older)
pub const EVER_USED_SHARE: f64 = 0.8;

pub const PRACTITIONER_PROGRAM_RATE: f64 = 0.15;
pub const PRACTITIONER_CERTIFIED_RATE: f64 = 0.10;
pub const PRO_PROGRAM_RATE: f64 = 0.08;
pub const PRO_CERTIFIED_RATE: f64 = 0.03;

/// Draws usage facts relative to fixed horizons
#[derive(Debug, Clone, Copy)]
pub struct UsageFactGenerator {
    horizons: Horizons,
}

impl UsageFactGenerator {
    pub fn new(horizons: Horizons) -> Self {
        Self { horizons }
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> UsageFacts {
        UsageFacts {
            last_usage_timestamp: self.last_usage(rng),
            weeks_used_in_past_4: rng.gen_range(0..=4),
            consecutive_weeks_used: rng.gen_range(0..=7),
            in_practitioner_program: rng.gen_bool(PRACTITIONER_PROGRAM_RATE),
            practitioner_certified: rng.gen_bool(PRACTITIONER_CERTIFIED_RATE),
            in_pro_program: rng.gen_bool(PRO_PROGRAM_RATE),
            pro_certified: rng.gen_bool(PRO_CERTIFIED_RATE),
        }
    }

    fn last_usage<R: Rng>(&self, rng: &mut R) -> Option<DateTime<Utc>> {
        let roll: f64 = rng.gen();
        if roll < RECENT_SHARE {
            let days_ago = rng.gen_range(0..28);
            Some(self.horizons.now - Duration::days(days_ago))
        } else if roll < EVER_USED_SHARE {
            let window = (self.horizons.recent - self.horizons.stale).num_milliseconds();
            let back = (rng.gen::<f64>() * window as f64) as i64;
            Some(self.horizons.recent - Duration::milliseconds(back))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn horizons() -> Horizons {
        Horizons::at(Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_facts_within_ranges() {
        let generator = UsageFactGenerator::new(horizons());
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let facts = generator.generate(&mut rng);
            assert!(facts.weeks_used_in_past_4 <= 4);
            assert!(facts.consecutive_weeks_used <= 7);
            if let Some(ts) = facts.last_usage_timestamp {
                assert!(ts <= horizons().now);
                assert!(ts >= horizons().stale);
            }
        }
    }

    #[test]
    fn test_usage_mix_is_roughly_sixty_twenty_twenty() {
        let h = horizons();
        let generator = UsageFactGenerator::new(h);
        let mut rng = StdRng::seed_from_u64(7);
        let (mut recent, mut older, mut never) = (0, 0, 0);
        for _ in 0..5000 {
            match generator.generate(&mut rng).last_usage_timestamp {
                Some(ts) if ts > h.recent => recent += 1,
                Some(_) => older += 1,
                None => never += 1,
            }
        }
        assert!((2700..3300).contains(&recent), "recent = {recent}");
        assert!((800..1200).contains(&older), "older = {older}");
        assert!((800..1200).contains(&never), "never = {never}");
    }

    #[test]
    fn test_same_seed_same_facts() {
        let generator = UsageFactGenerator::new(horizons());
        let a = generator.generate(&mut StdRng::seed_from_u64(99));
        let b = generator.generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
