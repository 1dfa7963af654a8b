use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::period::PeriodKeys;
use super::{ProgressField, TASKS, TaskDefinition, TaskId, TaskPeriod};

/// Counters accumulated over one period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TaskProgress {
    pub play_count: u64,
    pub win_count: u64,
    /// Base experience earned from plays, before task bonuses.
    pub total_exp: u64,
}

impl TaskProgress {
    pub fn get(&self, field: ProgressField) -> u64 {
        match field {
            ProgressField::PlayCount => self.play_count,
            ProgressField::WinCount => self.win_count,
            ProgressField::TotalExp => self.total_exp,
        }
    }
}

/// One period's bucket: key, completed tasks and counters.
///
/// Completed ids only ever grow while the key stays the same.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskPeriodState {
    pub key: String,
    pub completed: BTreeSet<TaskId>,
    pub progress: TaskProgress,
}

impl TaskPeriodState {
    /// An empty bucket for `key`.
    pub fn fresh(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn is_completed(&self, id: TaskId) -> bool {
        self.completed.contains(&id)
    }
}

/// Which buckets a rollover replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rollover {
    pub daily: bool,
    pub weekly: bool,
}

impl Rollover {
    pub fn any(&self) -> bool {
        self.daily || self.weekly
    }
}

/// A catalog entry with its current progress, for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskStatus {
    pub task: &'static TaskDefinition,
    pub current: u64,
    pub completed: bool,
}

impl TaskStatus {
    /// Progress toward the target in percent, capped at 100.
    pub fn percent(&self) -> u64 {
        if self.task.target == 0 {
            return 100;
        }
        (self.current.saturating_mul(100) / self.task.target).min(100)
    }
}

/// Daily and weekly task buckets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "stored::StoredBoard", into = "stored::StoredBoard")
)]
pub struct TaskBoard {
    pub daily: TaskPeriodState,
    pub weekly: TaskPeriodState,
}

impl TaskBoard {
    /// Empty buckets for the periods containing `today`.
    pub fn new(today: NaiveDate) -> Self {
        let keys = PeriodKeys::for_date(today);
        Self {
            daily: TaskPeriodState::fresh(keys.day),
            weekly: TaskPeriodState::fresh(keys.week),
        }
    }

    /// Keeps each stored bucket whose key matches today's period and replaces
    /// the others with empty ones.
    pub fn init(previous: Option<TaskBoard>, today: NaiveDate) -> Self {
        let mut board = previous.unwrap_or_else(|| Self::new(today));
        board.roll_over(today);
        board
    }

    /// Replaces buckets whose period has ended. Returns what was replaced.
    pub fn roll_over(&mut self, today: NaiveDate) -> Rollover {
        let keys = PeriodKeys::for_date(today);
        let daily = self.daily.key != keys.day;
        if daily {
            self.daily = TaskPeriodState::fresh(keys.day);
        }
        let weekly = self.weekly.key != keys.week;
        if weekly {
            self.weekly = TaskPeriodState::fresh(keys.week);
        }
        Rollover { daily, weekly }
    }

    pub fn period(&self, period: TaskPeriod) -> &TaskPeriodState {
        match period {
            TaskPeriod::Daily => &self.daily,
            TaskPeriod::Weekly => &self.weekly,
        }
    }

    fn period_mut(&mut self, period: TaskPeriod) -> &mut TaskPeriodState {
        match period {
            TaskPeriod::Daily => &mut self.daily,
            TaskPeriod::Weekly => &mut self.weekly,
        }
    }

    /// Counts one play in both buckets.
    pub fn record_play(&mut self, won: bool, exp: u64) {
        for state in [&mut self.daily, &mut self.weekly] {
            let progress = &mut state.progress;
            progress.play_count = progress.play_count.saturating_add(1);
            if won {
                progress.win_count = progress.win_count.saturating_add(1);
            }
            progress.total_exp = progress.total_exp.saturating_add(exp);
        }
    }

    /// Current value of the counter a task is measured by.
    pub fn current(&self, id: TaskId) -> u64 {
        let task = id.definition();
        self.period(task.period).progress.get(task.field)
    }

    pub fn is_completed(&self, id: TaskId) -> bool {
        self.period(id.definition().period).is_completed(id)
    }

    /// Marks every task that has reached its target and was not yet complete.
    ///
    /// Returns the newly completed tasks in catalog order.
    pub fn complete_ready(&mut self) -> Vec<&'static TaskDefinition> {
        let mut newly = Vec::new();
        for task in &TASKS {
            if self.is_completed(task.id) || self.current(task.id) < task.target {
                continue;
            }
            self.period_mut(task.period).completed.insert(task.id);
            newly.push(task);
        }
        newly
    }

    /// Every catalog entry with its progress, in catalog order.
    pub fn statuses(&self) -> Vec<TaskStatus> {
        TASKS
            .iter()
            .map(|task| TaskStatus {
                task,
                current: self.current(task.id),
                completed: self.is_completed(task.id),
            })
            .collect()
    }
}

/// Persisted shape: `{ daily: { date, completed, progress }, weekly: { week, ... } }`
/// with completed tasks stored as an id → `true` map.
#[cfg(feature = "serde")]
mod stored {
    use std::collections::BTreeMap;

    use super::{TaskBoard, TaskPeriodState, TaskProgress};
    use crate::task::TaskId;

    #[derive(serde::Serialize, serde::Deserialize)]
    pub struct StoredBoard {
        #[serde(default)]
        daily: StoredPeriod,
        #[serde(default)]
        weekly: StoredPeriod,
    }

    #[derive(Default, serde::Serialize, serde::Deserialize)]
    struct StoredPeriod {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        week: Option<String>,
        #[serde(default)]
        completed: BTreeMap<String, bool>,
        #[serde(default)]
        progress: TaskProgress,
    }

    impl StoredPeriod {
        fn into_state(self, key: Option<String>) -> TaskPeriodState {
            let completed = self
                .completed
                .into_iter()
                .filter(|(_, done)| *done)
                .filter_map(|(id, _)| id.parse::<TaskId>().ok())
                .collect();
            TaskPeriodState {
                key: key.unwrap_or_default(),
                completed,
                progress: self.progress,
            }
        }

        fn from_state(state: TaskPeriodState, daily: bool) -> Self {
            let (date, week) = if daily {
                (Some(state.key), None)
            } else {
                (None, Some(state.key))
            };
            Self {
                date,
                week,
                completed: state
                    .completed
                    .into_iter()
                    .map(|id| (id.to_string(), true))
                    .collect(),
                progress: state.progress,
            }
        }
    }

    impl From<StoredBoard> for TaskBoard {
        fn from(stored: StoredBoard) -> Self {
            let daily_key = stored.daily.date.clone();
            let weekly_key = stored.weekly.week.clone();
            Self {
                daily: stored.daily.into_state(daily_key),
                weekly: stored.weekly.into_state(weekly_key),
            }
        }
    }

    impl From<TaskBoard> for StoredBoard {
        fn from(board: TaskBoard) -> Self {
            Self {
                daily: StoredPeriod::from_state(board.daily, true),
                weekly: StoredPeriod::from_state(board.weekly, false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn played_board(today: NaiveDate) -> TaskBoard {
        let mut board = TaskBoard::new(today);
        board.record_play(true, 45);
        board.record_play(false, 5);
        board.complete_ready();
        board
    }

    #[test]
    fn same_day_passes_through_unchanged() {
        let today = date(2026, 10, 19);
        let board = played_board(today);
        let kept = TaskBoard::init(Some(board.clone()), today);
        assert_eq!(kept, board);
    }

    #[test]
    fn yesterday_rolls_daily_bucket_only() {
        // 2026-10-19 is a Monday; the weekly key only moves on Saturdays.
        let yesterday = date(2026, 10, 18);
        let today = date(2026, 10, 19);
        let board = played_board(yesterday);

        let mut rolled = board.clone();
        let rollover = rolled.roll_over(today);

        assert_eq!(rollover, Rollover { daily: true, weekly: false });
        assert_eq!(rolled.daily, TaskPeriodState::fresh("2026-10-19"));
        assert_eq!(rolled.weekly, board.weekly);
    }

    #[test]
    fn new_week_rolls_both() {
        let board = played_board(date(2026, 10, 16));
        let rolled = TaskBoard::init(Some(board), date(2026, 10, 24));
        assert_eq!(rolled.daily.progress, TaskProgress::default());
        assert!(rolled.weekly.completed.is_empty());
        assert_eq!(rolled.weekly.key, "2026-W44");
    }

    #[test]
    fn missing_board_starts_fresh() {
        let board = TaskBoard::init(None, date(2026, 10, 19));
        assert_eq!(board.daily.key, "2026-10-19");
        assert_eq!(board.weekly.key, "2026-W43");
        assert!(board.statuses().iter().all(|s| s.current == 0 && !s.completed));
    }

    #[test]
    fn first_play_completes_play_one() {
        let mut board = TaskBoard::new(date(2026, 10, 19));
        board.record_play(false, 5);
        let done: Vec<TaskId> = board.complete_ready().iter().map(|t| t.id).collect();
        assert_eq!(done, vec![TaskId::DailyPlay1]);
    }

    #[test]
    fn winning_big_completes_several_at_once() {
        let mut board = TaskBoard::new(date(2026, 10, 19));
        board.record_play(true, 5000);
        let done: Vec<TaskId> = board.complete_ready().iter().map(|t| t.id).collect();
        assert_eq!(
            done,
            vec![
                TaskId::DailyPlay1,
                TaskId::DailyWin1,
                TaskId::DailyExp100,
                TaskId::WeeklyExp500
            ]
        );
        let bonus: u64 = done.iter().map(|id| id.definition().reward).sum();
        assert_eq!(bonus, 160);
    }

    #[test]
    fn completion_is_reported_once() {
        let mut board = TaskBoard::new(date(2026, 10, 19));
        board.record_play(false, 5);
        assert_eq!(board.complete_ready().len(), 1);
        board.record_play(false, 5);
        assert!(board.complete_ready().is_empty());
        assert!(board.is_completed(TaskId::DailyPlay1));
    }

    #[test]
    fn progress_tracks_both_periods() {
        let mut board = TaskBoard::new(date(2026, 10, 19));
        for _ in 0..5 {
            board.record_play(true, 25);
        }
        assert_eq!(board.current(TaskId::DailyPlay5), 5);
        assert_eq!(board.current(TaskId::WeeklyWin5), 5);
        assert_eq!(board.current(TaskId::DailyExp100), 125);
        assert_eq!(board.current(TaskId::WeeklyPlay20), 5);

        let statuses = board.statuses();
        let weekly_play = statuses
            .iter()
            .find(|s| s.task.id == TaskId::WeeklyPlay20)
            .unwrap();
        assert_eq!(weekly_play.percent(), 25);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn stored_shape_uses_date_week_and_completed_map() {
        let board = played_board(date(2026, 10, 19));
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["daily"]["date"], "2026-10-19");
        assert_eq!(json["weekly"]["week"], "2026-W43");
        assert_eq!(json["daily"]["completed"]["daily_play_1"], true);
        assert_eq!(json["daily"]["progress"]["playCount"], 2);
        assert!(json["weekly"].get("date").is_none());

        let back: TaskBoard = serde_json::from_value(json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn huge_stored_counters_saturate() {
        let today = date(2026, 10, 19);
        let mut board = TaskBoard::new(today);
        board.daily.progress = TaskProgress {
            play_count: u64::MAX,
            win_count: u64::MAX,
            total_exp: u64::MAX - 1,
        };
        board.record_play(true, 5000);

        assert_eq!(board.daily.progress.play_count, u64::MAX);
        assert_eq!(board.daily.progress.win_count, u64::MAX);
        assert_eq!(board.daily.progress.total_exp, u64::MAX);
        assert_eq!(board.weekly.progress.play_count, 1);
        assert!(board.statuses().iter().all(|status| status.percent() <= 100));
        assert_eq!(board.statuses()[0].percent(), 100);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn stored_unknown_or_false_entries_are_dropped() {
        let json = r#"{
            "daily": {
                "date": "2026-10-19",
                "completed": { "daily_play_1": true, "daily_play_5": false, "retired_task": true },
                "progress": { "playCount": 1, "winCount": 0, "totalExp": 5 }
            },
            "weekly": { "week": "2026-W43" }
        }"#;
        let board: TaskBoard = serde_json::from_str(json).unwrap();
        assert_eq!(
            board.daily.completed.iter().copied().collect::<Vec<_>>(),
            vec![TaskId::DailyPlay1]
        );
        assert_eq!(board.weekly.progress, TaskProgress::default());
    }
}
