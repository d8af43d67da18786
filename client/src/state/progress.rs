//! Read-only learning dashboard data and derived figures.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use serde::{Deserialize, Serialize};

use crate::util::percent::percent;

/// Points needed to go from one level to the next.
pub const POINTS_PER_LEVEL: u32 = 350;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_exercises: u32,
    pub completed_exercises: u32,
    pub total_tutorials: u32,
    pub completed_tutorials: u32,
    pub streak_days: u32,
    pub total_points: u32,
    pub level: u32,
    pub next_level_points: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            total_exercises: 124,
            completed_exercises: 67,
            total_tutorials: 18,
            completed_tutorials: 12,
            streak_days: 7,
            total_points: 2450,
            level: 8,
            next_level_points: 2800,
        }
    }
}

impl Stats {
    pub fn exercise_completion(&self) -> f64 {
        percent(self.completed_exercises as usize, self.total_exercises as usize)
    }

    pub fn tutorial_completion(&self) -> f64 {
        percent(self.completed_tutorials as usize, self.total_tutorials as usize)
    }

    /// Progress through the current level, clamped to 0..=100.
    pub fn level_progress(&self) -> f64 {
        let level_floor = f64::from(self.level.saturating_sub(1)) * f64::from(POINTS_PER_LEVEL);
        let raw = (f64::from(self.total_points) - level_floor) / f64::from(POINTS_PER_LEVEL) * 100.0;
        raw.clamp(0.0, 100.0)
    }

    pub fn points_to_next_level(&self) -> u32 {
        self.next_level_points.saturating_sub(self.total_points)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Success,
    Warning,
    Destructive,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "tone-primary",
            Self::Success => "tone-success",
            Self::Warning => "tone-warning",
            Self::Destructive => "tone-destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub skill: String,
    /// Percent, 0 to 100.
    pub level: u32,
    pub tone: Tone,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub day: String,
    pub completed: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementIcon {
    Book,
    Code,
    Zap,
}

impl AchievementIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Book => "📖",
            Self::Code => "</>",
            Self::Zap => "⚡",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: AchievementIcon,
    pub earned: String,
}

/// Everything the progress tab renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub stats: Stats,
    pub skills: Vec<SkillLevel>,
    pub weekly_activity: Vec<DailyActivity>,
    pub achievements: Vec<Achievement>,
}

impl Default for ProgressSnapshot {
    fn default() -> Self {
        let skill = |skill: &str, level: u32, tone: Tone| SkillLevel { skill: skill.to_owned(), level: level.min(100), tone };
        let day = |day: &str, completed: u32| DailyActivity { day: day.to_owned(), completed };
        let achievement = |id: u32, title: &str, description: &str, icon: AchievementIcon, earned: &str| Achievement {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            icon,
            earned: earned.to_owned(),
        };

        Self {
            stats: Stats::default(),
            skills: vec![
                skill("JavaScript", 85, Tone::Success),
                skill("React", 72, Tone::Primary),
                skill("Algorithms", 58, Tone::Warning),
                skill("Python", 45, Tone::Destructive),
            ],
            weekly_activity: vec![
                day("Mon", 3),
                day("Tue", 5),
                day("Wed", 2),
                day("Thu", 4),
                day("Fri", 6),
                day("Sat", 3),
                day("Sun", 4),
            ],
            achievements: vec![
                achievement(1, "First Steps", "Completed your first tutorial", AchievementIcon::Book, "2 days ago"),
                achievement(2, "Code Warrior", "Solved 50 coding exercises", AchievementIcon::Code, "1 week ago"),
                achievement(3, "Streak Master", "7-day learning streak", AchievementIcon::Zap, "Today"),
            ],
        }
    }
}

impl ProgressSnapshot {
    /// Bar heights relative to the busiest day, as percentages.
    pub fn activity_heights(&self) -> Vec<f64> {
        let busiest = self.weekly_activity.iter().map(|d| d.completed).max().unwrap_or(0);
        self.weekly_activity
            .iter()
            .map(|d| percent(d.completed as usize, busiest as usize))
            .collect()
    }
}
