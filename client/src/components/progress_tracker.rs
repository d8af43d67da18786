//! Progress tab: stat tiles, completion bars, skills, activity, achievements.

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::state::progress::{ProgressSnapshot, Tone};
use crate::util::percent::rounded;

fn stat_tile(glyph: &'static str, tone: Tone, value: u32, label: &'static str) -> impl IntoView {
    view! {
        <div class="card stat-tile">
            <div class=format!("stat-tile__icon {}", tone.class())>{glyph}</div>
            <div>
                <p class="stat-tile__value">{value}</p>
                <p class="muted small">{label}</p>
            </div>
        </div>
    }
}

#[component]
pub fn ProgressTracker() -> impl IntoView {
    let snapshot = expect_context::<RwSignal<ProgressSnapshot>>().get_untracked();
    let stats = snapshot.stats.clone();
    let heights = snapshot.activity_heights();

    let exercise_completion = stats.exercise_completion();
    let tutorial_completion = stats.tutorial_completion();

    view! {
        <div class="progress-tracker">
            <div class="tab-header">
                <div>
                    <h2>"Progress Tracker"</h2>
                    <p class="muted">"Monitor your learning journey and achievements"</p>
                </div>
                <span class="badge badge--outline">
                    <span class="tone-warning">"🏆"</span>
                    {format!(" Level {}", stats.level)}
                </span>
            </div>

            <div class="stat-grid">
                {stat_tile("◎", Tone::Success, stats.completed_exercises, "Exercises Done")}
                {stat_tile("📖", Tone::Primary, stats.completed_tutorials, "Tutorials Done")}
                {stat_tile("⚡", Tone::Warning, stats.streak_days, "Day Streak")}
                {stat_tile("★", Tone::Destructive, stats.total_points, "Total Points")}
            </div>

            <div class="two-col">
                <div class="card">
                    <h3>"Learning Progress"</h3>
                    <div class="meter">
                        <div class="meter__row">
                            <span>"Exercises"</span>
                            <strong>{format!("{}/{}", stats.completed_exercises, stats.total_exercises)}</strong>
                        </div>
                        <ProgressBar value=exercise_completion/>
                        <p class="muted small">{format!("{}% completed", rounded(exercise_completion))}</p>
                    </div>
                    <div class="meter">
                        <div class="meter__row">
                            <span>"Tutorials"</span>
                            <strong>{format!("{}/{}", stats.completed_tutorials, stats.total_tutorials)}</strong>
                        </div>
                        <ProgressBar value=tutorial_completion/>
                        <p class="muted small">{format!("{}% completed", rounded(tutorial_completion))}</p>
                    </div>
                    <div class="meter">
                        <div class="meter__row">
                            <span>"Level Progress"</span>
                            <strong>{format!("{}/{}", stats.total_points, stats.next_level_points)}</strong>
                        </div>
                        <ProgressBar value=stats.level_progress()/>
                        <p class="muted small">{format!("{} points to next level", stats.points_to_next_level())}</p>
                    </div>
                </div>

                <div class="card">
                    <h3>"Skill Levels"</h3>
                    {snapshot
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="meter">
                                    <div class="meter__row">
                                        <span>{skill.skill.clone()}</span>
                                        <span class="muted">{format!("{}%", skill.level)}</span>
                                    </div>
                                    <ProgressBar value=f64::from(skill.level) tone=skill.tone.class()/>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="two-col">
                <div class="card">
                    <h3>
                        <span class="tone-primary">"▦ "</span>
                        "Weekly Activity"
                    </h3>
                    <div class="activity">
                        {snapshot
                            .weekly_activity
                            .iter()
                            .zip(heights)
                            .map(|(day, height)| {
                                view! {
                                    <div class="activity__day" title=format!("{} completed", day.completed)>
                                        <div class="activity__bar" style=format!("height: {height:.1}%")></div>
                                        <span class="muted small">{day.day.clone()}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="card">
                    <h3>
                        <span class="tone-warning">"🏆 "</span>
                        "Recent Achievements"
                    </h3>
                    {snapshot
                        .achievements
                        .iter()
                        .map(|achievement| {
                            view! {
                                <div class="achievement">
                                    <div class="achievement__icon tone-warning">{achievement.icon.glyph()}</div>
                                    <div class="achievement__text">
                                        <p class="achievement__title">{achievement.title.clone()}</p>
                                        <p class="muted small">{achievement.description.clone()}</p>
                                    </div>
                                    <span class="muted small">{achievement.earned.clone()}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
