//! Achievement ladder derived from completion

use std::fmt;

/// Points per percentage point of completion
const POINTS_PER_PERCENT: u32 = 10;

/// Milestone ladder: points targets below the top tier
const MILESTONES: [u32; 3] = [100, 200, 500];

/// Named achievement bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Beginner,
    ConsistentStarter,
    DedicatedScholar,
    MasterLearner,
}

impl Tier {
    /// Tier for a points total
    pub fn from_points(points: u32) -> Self {
        match points {
            0..=99 => Self::Beginner,
            100..=199 => Self::ConsistentStarter,
            200..=499 => Self::DedicatedScholar,
            _ => Self::MasterLearner,
        }
    }

    /// Display name of the tier
    pub fn name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::ConsistentStarter => "Consistent Starter",
            Self::DedicatedScholar => "Dedicated Scholar",
            Self::MasterLearner => "Master Learner",
        }
    }

    /// Flavor line shown on the achievement screen
    pub fn flavor(&self) -> &'static str {
        match self {
            Self::Beginner => "You're just getting started!",
            Self::ConsistentStarter => "Great start! Keep the momentum!",
            Self::DedicatedScholar => "You're halfway there! Keep going!",
            Self::MasterLearner => "You've completed over 50% of your roadmap!",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Next points target and the tasks left to reach it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub target_points: u32,
    pub tasks_remaining: u32,
}

/// Evaluated achievement state for a completion ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub tier: Tier,
    pub points: u32,
    /// None once the top tier is reached
    pub next_milestone: Option<Milestone>,
}

/// Map a completion ratio in [0, 1] to points, tier, and next milestone
///
/// Points scale 0-1000: 10 points per percent complete, percent rounded to
/// the nearest integer, so points always land on a multiple of 10 and the
/// milestone arithmetic below stays exact.
pub fn evaluate(ratio: f64) -> Achievement {
    let points = (ratio * 100.0).round() as u32 * POINTS_PER_PERCENT;
    let tier = Tier::from_points(points);

    let next_milestone = MILESTONES
        .iter()
        .find(|&&target| points < target)
        .map(|&target| Milestone {
            target_points: target,
            tasks_remaining: (target - points) / POINTS_PER_PERCENT,
        });

    Achievement {
        tier,
        points,
        next_milestone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_complete_is_master_learner() {
        let a = evaluate(0.5);

        assert_eq!(a.points, 500);
        assert_eq!(a.tier, Tier::MasterLearner);
        assert!(a.next_milestone.is_none());
    }

    #[test]
    fn test_fifteen_percent_is_consistent_starter() {
        let a = evaluate(0.15);

        assert_eq!(a.points, 150);
        assert_eq!(a.tier, Tier::ConsistentStarter);
        let m = a.next_milestone.unwrap();
        assert_eq!(m.target_points, 200);
        assert_eq!(m.tasks_remaining, 5);
    }

    #[test]
    fn test_zero_ratio() {
        let a = evaluate(0.0);

        assert_eq!(a.points, 0);
        assert_eq!(a.tier, Tier::Beginner);
        let m = a.next_milestone.unwrap();
        assert_eq!(m.target_points, 100);
        assert_eq!(m.tasks_remaining, 10);
    }

    #[test]
    fn test_full_ratio() {
        let a = evaluate(1.0);

        assert_eq!(a.points, 1000);
        assert_eq!(a.tier, Tier::MasterLearner);
        assert!(a.next_milestone.is_none());
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_points(99), Tier::Beginner);
        assert_eq!(Tier::from_points(100), Tier::ConsistentStarter);
        assert_eq!(Tier::from_points(199), Tier::ConsistentStarter);
        assert_eq!(Tier::from_points(200), Tier::DedicatedScholar);
        assert_eq!(Tier::from_points(499), Tier::DedicatedScholar);
        assert_eq!(Tier::from_points(500), Tier::MasterLearner);
    }

    #[test]
    fn test_percent_rounding() {
        // One of three tasks complete: 33.33...% rounds to 33%.
        let a = evaluate(1.0 / 3.0);
        assert_eq!(a.points, 330);
        assert_eq!(a.tier, Tier::DedicatedScholar);
        let m = a.next_milestone.unwrap();
        assert_eq!(m.target_points, 500);
        assert_eq!(m.tasks_remaining, 17);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(Tier::ConsistentStarter.to_string(), "Consistent Starter");
    }
}
