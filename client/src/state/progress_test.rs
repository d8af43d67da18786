use super::*;
use crate::util::percent::rounded;

#[test]
fn default_stats_completion_percentages() {
    let stats = Stats::default();
    assert_eq!(rounded(stats.exercise_completion()), 54);
    assert_eq!(rounded(stats.tutorial_completion()), 67);
}

#[test]
fn level_progress_at_level_floor_is_zero() {
    // 2450 points at level 8: (2450 - 7 * 350) / 350 = 0.
    let stats = Stats::default();
    assert_eq!(stats.level_progress(), 0.0);
}

#[test]
fn level_progress_part_way_through_level() {
    let stats = Stats { total_points: 2450 + 175, ..Stats::default() };
    assert!((stats.level_progress() - 50.0).abs() < 1e-9);
}

#[test]
fn level_progress_is_clamped() {
    let ahead = Stats { total_points: 10_000, ..Stats::default() };
    let behind = Stats { total_points: 0, ..Stats::default() };
    assert_eq!(ahead.level_progress(), 100.0);
    assert_eq!(behind.level_progress(), 0.0);
}

#[test]
fn points_to_next_level() {
    assert_eq!(Stats::default().points_to_next_level(), 350);
    let past = Stats { total_points: 3000, ..Stats::default() };
    assert_eq!(past.points_to_next_level(), 0);
}

#[test]
fn zero_totals_do_not_divide_by_zero() {
    let stats = Stats { total_exercises: 0, total_tutorials: 0, ..Stats::default() };
    assert_eq!(stats.exercise_completion(), 0.0);
    assert_eq!(stats.tutorial_completion(), 0.0);
}

#[test]
fn activity_heights_are_relative_to_busiest_day() {
    let snapshot = ProgressSnapshot::default();
    let heights = snapshot.activity_heights();
    assert_eq!(heights.len(), 7);
    assert_eq!(heights[4], 100.0);
    assert!((heights[0] - 50.0).abs() < f64::EPSILON);
}

#[test]
fn activity_heights_with_idle_week_are_zero() {
    let mut snapshot = ProgressSnapshot::default();
    for day in &mut snapshot.weekly_activity {
        day.completed = 0;
    }
    assert!(snapshot.activity_heights().iter().all(|h| *h == 0.0));
}

#[test]
fn skill_levels_stay_in_range() {
    let snapshot = ProgressSnapshot::default();
    assert_eq!(snapshot.skills.len(), 4);
    assert!(snapshot.skills.iter().all(|s| s.level <= 100));
}

#[test]
fn snapshot_serializes_lowercase_enums() {
    let json = serde_json::to_value(ProgressSnapshot::default()).unwrap();
    assert_eq!(json["skills"][0]["tone"], "success");
    assert_eq!(json["achievements"][2]["icon"], "zap");
    assert_eq!(json["stats"]["level"], 8);
}
