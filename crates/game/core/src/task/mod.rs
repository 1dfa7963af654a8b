//! Daily and weekly tasks that grant bonus experience.
//!
//! The catalog is static. Progress lives in a [`TaskBoard`] holding one bucket
//! per period; buckets are replaced with empty ones whenever their period key
//! stops matching the current date.

mod board;
mod period;

pub use board::{Rollover, TaskBoard, TaskPeriodState, TaskProgress, TaskStatus};
pub use period::{PeriodKeys, day_key, week_key};

/// Period a task accumulates over.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TaskPeriod {
    Daily,
    Weekly,
}

/// Counter a task's target is compared against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProgressField {
    PlayCount,
    WinCount,
    TotalExp,
}

/// Catalog identifiers, persisted by their snake_case names.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TaskId {
    #[strum(serialize = "daily_play_1")]
    #[cfg_attr(feature = "serde", serde(rename = "daily_play_1"))]
    DailyPlay1,
    #[strum(serialize = "daily_play_5")]
    #[cfg_attr(feature = "serde", serde(rename = "daily_play_5"))]
    DailyPlay5,
    #[strum(serialize = "daily_win_1")]
    #[cfg_attr(feature = "serde", serde(rename = "daily_win_1"))]
    DailyWin1,
    #[strum(serialize = "daily_exp_100")]
    #[cfg_attr(feature = "serde", serde(rename = "daily_exp_100"))]
    DailyExp100,
    #[strum(serialize = "weekly_play_20")]
    #[cfg_attr(feature = "serde", serde(rename = "weekly_play_20"))]
    WeeklyPlay20,
    #[strum(serialize = "weekly_win_5")]
    #[cfg_attr(feature = "serde", serde(rename = "weekly_win_5"))]
    WeeklyWin5,
    #[strum(serialize = "weekly_exp_500")]
    #[cfg_attr(feature = "serde", serde(rename = "weekly_exp_500"))]
    WeeklyExp500,
}

impl TaskId {
    pub fn definition(self) -> &'static TaskDefinition {
        TASKS
            .iter()
            .find(|task| task.id == self)
            .unwrap_or(&TASKS[0])
    }
}

/// A static catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskDefinition {
    pub id: TaskId,
    pub period: TaskPeriod,
    pub name: &'static str,
    pub description: &'static str,
    /// Completed once the selected counter reaches this value.
    pub target: u64,
    /// Bonus experience granted on completion.
    pub reward: u64,
    pub field: ProgressField,
}

pub static TASKS: [TaskDefinition; 7] = [
    TaskDefinition {
        id: TaskId::DailyPlay1,
        period: TaskPeriod::Daily,
        name: "Play 1 Game",
        description: "Play 1 game today",
        target: 1,
        reward: 10,
        field: ProgressField::PlayCount,
    },
    TaskDefinition {
        id: TaskId::DailyPlay5,
        period: TaskPeriod::Daily,
        name: "Play 5 Games",
        description: "Play 5 games today",
        target: 5,
        reward: 50,
        field: ProgressField::PlayCount,
    },
    TaskDefinition {
        id: TaskId::DailyWin1,
        period: TaskPeriod::Daily,
        name: "Win 1 Game",
        description: "Win at least 1 game today",
        target: 1,
        reward: 30,
        field: ProgressField::WinCount,
    },
    TaskDefinition {
        id: TaskId::DailyExp100,
        period: TaskPeriod::Daily,
        name: "Earn 100 EXP",
        description: "Earn 100 EXP today",
        target: 100,
        reward: 20,
        field: ProgressField::TotalExp,
    },
    TaskDefinition {
        id: TaskId::WeeklyPlay20,
        period: TaskPeriod::Weekly,
        name: "Play 20 Games",
        description: "Play 20 games this week",
        target: 20,
        reward: 200,
        field: ProgressField::PlayCount,
    },
    TaskDefinition {
        id: TaskId::WeeklyWin5,
        period: TaskPeriod::Weekly,
        name: "Win 5 Games",
        description: "Win at least 5 games this week",
        target: 5,
        reward: 150,
        field: ProgressField::WinCount,
    },
    TaskDefinition {
        id: TaskId::WeeklyExp500,
        period: TaskPeriod::Weekly,
        name: "Earn 500 EXP",
        description: "Earn 500 EXP this week",
        target: 500,
        reward: 100,
        field: ProgressField::TotalExp,
    },
];

/// Catalog entries of one period, in catalog order.
pub fn tasks_for(period: TaskPeriod) -> impl Iterator<Item = &'static TaskDefinition> {
    TASKS.iter().filter(move |task| task.period == period)
}
