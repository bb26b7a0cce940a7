//! Simulated dashboard figures.

use rand::Rng;

/// Shown in a metric tile until its value arrives.
pub use shared_types::PLACEHOLDER;

pub const METRIC_DELAY_MS: u64 = 2500;
pub const COUNT_UP_STEPS: u32 = 20;
pub const COUNT_UP_TICK_MS: u64 = 50;

/// Metric tiles on the generic department dashboard: element id and label.
pub const DEPARTMENT_METRICS: [(&str, &str); 6] = [
    ("statPatients", "Patients Today"),
    ("statFollowups", "Follow-ups"),
    ("statAccounts", "Accounts Pending"),
    ("statDiagnostics", "Diagnostics"),
    ("statMessages", "Messages"),
    ("statQueue", "In Queue"),
];

pub fn roll_metric<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1..=40)
}

/// Width of a progress bar, in percent.
pub fn roll_progress<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(10..=99)
}

/// Figures for the doctor's stat tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoctorStats {
    pub patients: u32,
    pub queue: u32,
    pub prescriptions: u32,
    pub referrals: u32,
}

impl DoctorStats {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            patients: rng.gen_range(5..=24),
            queue: rng.gen_range(0..=5),
            prescriptions: rng.gen_range(3..=17),
            referrals: rng.gen_range(0..=4),
        }
    }
}

/// Successive values shown while a tile counts up to `target`. The last
/// frame is always `target`.
pub fn count_up(target: u32) -> Vec<u32> {
    if target == 0 {
        return vec![0];
    }
    (1..=COUNT_UP_STEPS)
        .map(|step| target * step / COUNT_UP_STEPS)
        .collect()
}

/// Counters shown on the customer care dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CareStats {
    pub new_patients: u32,
    pub queue: u32,
    pub routed: u32,
    pub sent_accounts: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn doctor_stats_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let stats = DoctorStats::roll(&mut rng);
            assert!((5..=24).contains(&stats.patients));
            assert!(stats.queue <= 5);
            assert!((3..=17).contains(&stats.prescriptions));
            assert!(stats.referrals <= 4);
        }
    }

    #[test]
    fn metrics_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            assert!((1..=40).contains(&roll_metric(&mut rng)));
            assert!((10..=99).contains(&roll_progress(&mut rng)));
        }
    }

    #[test]
    fn count_up_ends_on_target() {
        let frames = count_up(7);
        assert_eq!(frames.len(), COUNT_UP_STEPS as usize);
        assert_eq!(frames.last(), Some(&7));
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(count_up(0), vec![0]);
    }
}
