//! Synthetic data generation for development and test stores.
//!
//! Generation is pure and takes any [`Rng`], so tests can drive it with a
//! seeded generator. Seeding itself comes in two functionally equivalent
//! variants: [`seed_sequential`] inserts row by row, [`seed_batch`] inserts
//! each collection in one statement and links tasks via the returned
//! project IDs.

use chrono::{Days, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;

use taskboard_db::models::project::CreateProject;
use taskboard_db::models::status::Status;
use taskboard_db::models::task::CreateTask;
use taskboard_db::repositories::{ProjectRepo, TaskRepo};
use taskboard_db::types::DbId;
use taskboard_db::{DbPool, StoreResult};

/// Number of projects inserted by a default seeding run.
pub const DEFAULT_PROJECT_COUNT: usize = 10;
/// Task count range per project for the sequential variant (inclusive).
pub const MIN_TASKS_PER_PROJECT: usize = 5;
pub const MAX_TASKS_PER_PROJECT: usize = 8;
/// Fixed task count per project for the batch variant.
pub const BATCH_TASKS_PER_PROJECT: usize = 5;

const ADJECTIVES: [&str; 10] = [
    "brisk", "quiet", "solid", "amber", "rustic", "lucid", "nimble", "prime", "vivid", "stray",
];

const PROJECT_NOUNS: [&str; 10] = [
    "falcon", "harbor", "lantern", "orchard", "summit", "beacon", "quarry", "meadow", "anchor",
    "canyon",
];

const TASK_VERBS: [&str; 10] = [
    "parse", "index", "compress", "bypass", "calculate", "synthesize", "reboot", "navigate",
    "quantify", "transmit",
];

const TASK_NOUNS: [&str; 10] = [
    "firewall", "protocol", "bandwidth", "interface", "matrix", "driver", "pixel", "capacitor",
    "bus", "array",
];

const COLLABORATOR_POOL: [&str; 6] = [
    "ana@example.com",
    "ben@example.com",
    "carla@example.com",
    "dev@example.com",
    "erin@example.com",
    "felix@example.com",
];

/// Totals reported by a completed seeding run.
#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    pub projects: usize,
    pub tasks: usize,
}

/// Lowercase a name and collapse non-alphanumeric runs into single hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn pick(rng: &mut impl Rng, words: &[&'static str]) -> &'static str {
    // The word lists are never empty.
    words.choose(rng).copied().unwrap_or("")
}

fn pick_status(rng: &mut impl Rng) -> Status {
    *Status::ALL.choose(rng).unwrap_or(&Status::Active)
}

fn pick_collaborators(rng: &mut impl Rng, min: usize, max: usize) -> Vec<String> {
    let count = rng.random_range(min..=max);
    COLLABORATOR_POOL
        .choose_multiple(rng, count)
        .map(|email| email.to_string())
        .collect()
}

/// Generate a random project insert. The slug is always derived from the
/// generated name.
pub fn project_input(rng: &mut impl Rng) -> CreateProject {
    let name = format!(
        "{} {}",
        capitalize(pick(&mut *rng, &ADJECTIVES)),
        capitalize(pick(&mut *rng, &PROJECT_NOUNS))
    );
    let slug = slugify(&name);
    CreateProject {
        name,
        slug,
        status: pick_status(&mut *rng),
        collaborators: pick_collaborators(&mut *rng, 1, 3),
    }
}

/// Generate a random task insert linked to `project_id`.
///
/// The link always carries the parent project's full identifier; tasks are
/// never attached to anything else.
pub fn task_input(rng: &mut impl Rng, project_id: DbId) -> CreateTask {
    let name = format!("{} {}", pick(&mut *rng, &TASK_VERBS), pick(&mut *rng, &TASK_NOUNS));
    let description = format!(
        "{} the {} {} before the next sync",
        capitalize(pick(&mut *rng, &TASK_VERBS)),
        pick(&mut *rng, &ADJECTIVES),
        pick(&mut *rng, &TASK_NOUNS)
    );
    let due_date = if rng.random_bool(0.5) {
        Some(Utc::now().date_naive() + Days::new(rng.random_range(1..=30)))
    } else {
        None
    };
    CreateTask {
        name,
        description,
        status: pick_status(&mut *rng),
        due_date,
        project_id,
        collaborators: pick_collaborators(&mut *rng, 2, 2),
    }
}

/// Insert `project_count` projects one at a time, each followed by its tasks.
///
/// Task counts are drawn per project from
/// [`MIN_TASKS_PER_PROJECT`]..=[`MAX_TASKS_PER_PROJECT`]. The first failed
/// insert aborts the run.
pub async fn seed_sequential(
    pool: &DbPool,
    rng: &mut impl Rng,
    project_count: usize,
) -> StoreResult<SeedSummary> {
    let mut total_tasks = 0;
    for _ in 0..project_count {
        let project = ProjectRepo::create(pool, &project_input(&mut *rng)).await?;
        let task_count = rng.random_range(MIN_TASKS_PER_PROJECT..=MAX_TASKS_PER_PROJECT);
        for _ in 0..task_count {
            TaskRepo::create(pool, &task_input(&mut *rng, project.id)).await?;
        }
        total_tasks += task_count;
        tracing::debug!(project_id = project.id, tasks = task_count, "Seeded project");
    }
    Ok(SeedSummary {
        projects: project_count,
        tasks: total_tasks,
    })
}

/// Insert all projects in one batch, then all tasks in one batch, linking
/// each task to a returned project ID.
pub async fn seed_batch(
    pool: &DbPool,
    rng: &mut impl Rng,
    project_count: usize,
    tasks_per_project: usize,
) -> StoreResult<SeedSummary> {
    let project_inputs: Vec<CreateProject> =
        (0..project_count).map(|_| project_input(&mut *rng)).collect();
    let projects = ProjectRepo::create_many(pool, &project_inputs).await?;

    let task_inputs: Vec<CreateTask> = projects
        .iter()
        .flat_map(|project| {
            (0..tasks_per_project)
                .map(|_| task_input(&mut *rng, project.id))
                .collect::<Vec<_>>()
        })
        .collect();
    let tasks = TaskRepo::create_many(pool, &task_inputs).await?;

    Ok(SeedSummary {
        projects: projects.len(),
        tasks: tasks.len(),
    })
}
