//! Exercise catalog and browser filter state.
//!
//! DESIGN
//! ======
//! The catalog is static data shared by the browser view and the server's
//! `/api/exercises` route, so both apply the same `ExerciseFilter`.

#[cfg(test)]
#[path = "exercises_test.rs"]
mod exercises_test;

use serde::{Deserialize, Serialize};

use crate::util::percent::percent;

/// Filter value meaning "do not filter on this field".
pub const ALL: &str = "All";

/// Category options offered by the dropdown, including ones with no exercises yet.
pub const CATEGORIES: [&str; 6] = [ALL, "JavaScript", "React", "Algorithms", "Python", "Data Structures"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Badge tone class for this tier.
    pub fn tone(self) -> &'static str {
        match self {
            Self::Beginner => "tone-success",
            Self::Intermediate => "tone-warning",
            Self::Advanced => "tone-destructive",
        }
    }
}

/// Dropdown options for the difficulty filter.
pub fn difficulty_options() -> Vec<&'static str> {
    std::iter::once(ALL).chain(Difficulty::ALL.iter().map(|d| d.as_str())).collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub duration: String,
    /// Average rating, 0 to 5.
    pub rating: f64,
    pub completed: bool,
    pub tags: Vec<String>,
}

impl Exercise {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: &str,
        title: &str,
        description: &str,
        difficulty: Difficulty,
        category: &str,
        duration: &str,
        rating: f64,
        completed: bool,
        tags: &[&str],
    ) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
            difficulty,
            category: category.to_owned(),
            duration: duration.to_owned(),
            rating: rating.clamp(0.0, 5.0),
            completed,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }
}

/// The built-in exercise list.
pub fn catalog() -> Vec<Exercise> {
    vec![
        Exercise::new(
            "1",
            "Array Manipulation Basics",
            "Learn fundamental array operations including map, filter, and reduce methods.",
            Difficulty::Beginner,
            "JavaScript",
            "15 min",
            4.8,
            true,
            &["arrays", "methods", "basics"],
        ),
        Exercise::new(
            "2",
            "Async/Await Patterns",
            "Master asynchronous JavaScript with promises and async/await syntax.",
            Difficulty::Intermediate,
            "JavaScript",
            "25 min",
            4.9,
            false,
            &["async", "promises", "patterns"],
        ),
        Exercise::new(
            "3",
            "React Component Architecture",
            "Build scalable React applications with proper component design patterns.",
            Difficulty::Advanced,
            "React",
            "45 min",
            4.7,
            false,
            &["react", "components", "architecture"],
        ),
        Exercise::new(
            "4",
            "Algorithm: Binary Search",
            "Implement and optimize binary search algorithm with various data structures.",
            Difficulty::Intermediate,
            "Algorithms",
            "30 min",
            4.6,
            true,
            &["algorithms", "search", "optimization"],
        ),
    ]
}

/// Search text plus the two dropdown selections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseFilter {
    pub search: String,
    pub difficulty: String,
    pub category: String,
}

impl Default for ExerciseFilter {
    fn default() -> Self {
        Self { search: String::new(), difficulty: ALL.to_owned(), category: ALL.to_owned() }
    }
}

impl ExerciseFilter {
    /// Case-insensitive search over title or description; exact dropdown matches.
    pub fn matches(&self, exercise: &Exercise) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = exercise.title.to_lowercase().contains(&needle)
            || exercise.description.to_lowercase().contains(&needle);
        let matches_difficulty = self.difficulty == ALL || exercise.difficulty.as_str() == self.difficulty;
        let matches_category = self.category == ALL || exercise.category == self.category;
        matches_search && matches_difficulty && matches_category
    }

    pub fn apply<'a>(&self, exercises: &'a [Exercise]) -> Vec<&'a Exercise> {
        exercises.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Browser view state: the (locally mutable) list and the active filter.
#[derive(Clone, Debug, PartialEq)]
pub struct ExercisesState {
    pub items: Vec<Exercise>,
    pub filter: ExerciseFilter,
}

impl Default for ExercisesState {
    fn default() -> Self {
        Self { items: catalog(), filter: ExerciseFilter::default() }
    }
}

impl ExercisesState {
    pub fn visible(&self) -> Vec<Exercise> {
        self.filter.apply(&self.items).into_iter().cloned().collect()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|e| e.completed).count()
    }

    pub fn completion_percent(&self) -> f64 {
        percent(self.completed_count(), self.items.len())
    }

    /// Flip the local completion flag. Returns the new value, or `None` if
    /// no exercise has that id.
    pub fn toggle_completed(&mut self, id: &str) -> Option<bool> {
        let exercise = self.items.iter_mut().find(|e| e.id == id)?;
        exercise.completed = !exercise.completed;
        Some(exercise.completed)
    }
}
