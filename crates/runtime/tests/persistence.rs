use std::fs;

use chrono::NaiveDate;
use mahjong_core::{GameConfig, PlayerProfile};
use mahjong_runtime::{
    FileStore, FixedClock, HISTORY_KEY, InMemoryStore, KeyValueStore, PlaySession,
    ProfileRepository, RepositoryError, RuntimeConfig, TASKS_KEY, TOTAL_EXP_KEY,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Shares one in-memory store and rejects task board writes while `broken`.
struct FlakyTasks<'a> {
    inner: &'a InMemoryStore,
    broken: bool,
}

impl KeyValueStore for FlakyTasks<'_> {
    fn get(&self, key: &str) -> mahjong_runtime::repository::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> mahjong_runtime::repository::Result<()> {
        if self.broken && key == TASKS_KEY {
            return Err(RepositoryError::Io(std::io::Error::other("disk full")));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> mahjong_runtime::repository::Result<()> {
        self.inner.remove(key)
    }

    fn keys(&self) -> mahjong_runtime::repository::Result<Vec<String>> {
        self.inner.keys()
    }
}

#[test]
fn stored_entries_use_the_browser_layout() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path()).unwrap();
    let mut session = PlaySession::open(store, FixedClock::on(today())).unwrap();
    session
        .play(&RuntimeConfig::default().receipt("0xffff0123456789", Some(12)))
        .unwrap();

    let total = fs::read_to_string(dir.path().join("hashMahjongTotalExp.json")).unwrap();
    assert_eq!(total, "85");

    let history: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("hashMahjongHistory.json")).unwrap(),
    )
    .unwrap();
    let record = &history[0];
    assert_eq!(record["seed10"], "0123456789");
    assert_eq!(record["chainId"], "1776");
    assert_eq!(record["blockNumber"], "12");
    assert_eq!(record["rule"]["id"], 15);
    assert_eq!(record["rule"]["name"], "Straight-5");
    assert_eq!(record["timestamp"], "2026-10-19T12:00:00Z");

    let tasks: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("hashMahjongTasks.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(tasks["daily"]["date"], "2026-10-19");
    assert_eq!(tasks["weekly"]["week"], "2026-W43");
    assert_eq!(tasks["daily"]["completed"]["daily_win_1"], true);
    assert_eq!(tasks["weekly"]["progress"]["totalExp"], 45);
}

#[test]
fn malformed_entries_recover_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path()).unwrap();
    store.set(TOTAL_EXP_KEY, "2300").unwrap();
    store.set(HISTORY_KEY, "[{\"seed10\": 12}]").unwrap();
    store.set(TASKS_KEY, "not json at all").unwrap();

    let repository = ProfileRepository::new(store);
    let profile = repository.load(today()).unwrap();

    assert_eq!(profile.total_exp, 2300);
    assert_eq!(profile.level(), 10);
    assert!(profile.history.is_empty());
    assert_eq!(profile.tasks, PlayerProfile::new(today()).tasks);
}

#[test]
fn history_is_capped_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let config = RuntimeConfig::default();

    for batch in 0..2u64 {
        let store = FileStore::new(dir.path()).unwrap();
        let mut session = PlaySession::open(store, FixedClock::on(today())).unwrap();
        for n in 0..30u64 {
            let hash = format!("0x{:010x}", batch * 100 + n);
            session.play(&config.receipt(hash, Some(n))).unwrap();
        }
    }

    let repository = ProfileRepository::new(FileStore::new(dir.path()).unwrap());
    let profile = repository.load(today()).unwrap();
    assert_eq!(profile.history.len(), GameConfig::HISTORY_LIMIT);
    // 60 plays; the first ten were evicted.
    assert_eq!(profile.history.iter().next().unwrap().tx_hash, "0x000000000a");
    assert_eq!(profile.history.latest().unwrap().tx_hash, "0x0000000081");
    assert_eq!(profile.tasks.daily.progress.play_count, 60);
}

#[test]
fn reset_removes_every_entry() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path()).unwrap();
    let mut session = PlaySession::open(store, FixedClock::on(today())).unwrap();
    session
        .play(&RuntimeConfig::default().receipt("0x0a1b2c3d4e", None))
        .unwrap();
    session.reset().unwrap();

    let store = FileStore::new(dir.path()).unwrap();
    assert!(store.keys().unwrap().is_empty());
}

#[test]
fn failed_task_write_does_not_pay_bonus_twice() {
    let backing = InMemoryStore::new();
    let receipt = RuntimeConfig::default().receipt("0x0000000000", None);

    let broken = FlakyTasks {
        inner: &backing,
        broken: true,
    };
    let mut session = PlaySession::open(broken, FixedClock::on(today())).unwrap();
    assert!(session.play(&receipt).is_err());
    assert_eq!(session.profile().total_exp, 0);
    assert!(backing.keys().unwrap().is_empty());

    let healthy = FlakyTasks {
        inner: &backing,
        broken: false,
    };
    let mut session = PlaySession::open(healthy, FixedClock::on(today())).unwrap();
    let report = session.play(&receipt).unwrap();
    assert_eq!(report.total_exp, 5160);

    let profile = ProfileRepository::new(FlakyTasks {
        inner: &backing,
        broken: false,
    })
    .load(today())
    .unwrap();
    assert_eq!(profile.total_exp, 5160);
    assert_eq!(profile.history.len(), 1);
    assert_eq!(profile.tasks.daily.progress.play_count, 1);
}
