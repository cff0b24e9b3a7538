use predicates::str::contains;

mod common;
use common::{TestEnv, FIXTURE_DECK};

#[test]
fn points_deck_at_latest_common_step_without_creating_backup() {
    let env = TestEnv::new();
    env.write_deck("SPE1", FIXTURE_DECK);
    env.touch_report_pair("SPE1", 9);
    env.touch_report_pair("SPE1", 10);

    env.cmd().arg("SPE1").assert().success();

    let deck = env.deck_text("SPE1");
    assert!(deck.contains("RESTART\n SPE1 0010 /\n"));
    let restart = deck.find("RESTART").expect("record present");
    let include = deck.find("INCLUDE").expect("include kept");
    assert!(restart < include, "record must precede the INCLUDE it supersedes");
    assert!(!env.path("SPE1.DATA.BACKUP").exists());
}

#[test]
fn accepts_the_name_with_data_extension() {
    let env = TestEnv::new();
    env.write_deck("SPE1", FIXTURE_DECK);
    env.touch_report_pair("SPE1", 4);

    env.cmd().arg("SPE1.DATA").assert().success();

    assert!(env.deck_text("SPE1").contains(" SPE1 0004 /"));
}

#[test]
fn step_lacking_its_s_twin_is_skipped() {
    let env = TestEnv::new();
    env.write_deck("SPE1", FIXTURE_DECK);
    env.touch_report_pair("SPE1", 3);
    env.touch_report("SPE1", 'X', 5);

    env.cmd().arg("SPE1").assert().success();

    assert!(env.deck_text("SPE1").contains(" SPE1 0003 /"));
}

#[test]
fn no_common_step_fails_and_leaves_the_deck_untouched() {
    let env = TestEnv::new();
    env.write_deck("SPE1", FIXTURE_DECK);
    env.touch_report("SPE1", 'X', 1);
    env.touch_report("SPE1", 'X', 2);

    env.cmd()
        .arg("SPE1")
        .assert()
        .failure()
        .stderr(contains("no report step with both"));

    assert_eq!(env.deck_text("SPE1"), FIXTURE_DECK);
}

#[test]
fn restore_without_backup_file_fails() {
    let env = TestEnv::new();
    env.write_deck("SPE1", FIXTURE_DECK);
    env.touch_report_pair("SPE1", 1);

    env.cmd()
        .args(["SPE1", "--restore"])
        .assert()
        .failure()
        .stderr(contains("does not exist"));
}

#[test]
fn backup_then_restore_round_trip_rewrites_the_original_content() {
    let env = TestEnv::new();
    env.write_deck("SPE1", FIXTURE_DECK);
    env.touch_report_pair("SPE1", 2);

    env.cmd().args(["SPE1", "--backup"]).assert().success();

    let backup = std::fs::read_to_string(env.path("SPE1.DATA.BACKUP")).expect("read backup");
    assert_eq!(backup, FIXTURE_DECK, "backup must hold the pre-rewrite deck");

    // simulate outside corruption of the working deck
    env.write_deck("SPE1", "GARBAGE\n");

    env.cmd().args(["SPE1", "--restore"]).assert().success();

    let deck = env.deck_text("SPE1");
    assert!(!deck.contains("GARBAGE"));
    assert!(deck.contains("Original three-phase case"));
    assert!(deck.contains(" SPE1 0002 /"));
}

#[test]
fn reruns_are_idempotent() {
    let env = TestEnv::new();
    env.write_deck("SPE1", FIXTURE_DECK);
    env.touch_report_pair("SPE1", 7);

    env.cmd().arg("SPE1").assert().success();
    let first = env.deck_text("SPE1");

    env.cmd().arg("SPE1").assert().success();
    let second = env.deck_text("SPE1");

    assert_eq!(first, second);
}

#[test]
fn stale_record_is_replaced_not_duplicated() {
    let env = TestEnv::new();
    let stale = FIXTURE_DECK.replace(
        "INCLUDE\n 'init.inc' /\n",
        "RESTART\n 'SPE1' 1 /\n",
    );
    env.write_deck("SPE1", &stale);
    env.touch_report_pair("SPE1", 6);

    env.cmd().arg("SPE1").assert().success();

    let deck = env.deck_text("SPE1");
    assert_eq!(deck.matches("RESTART").count(), 1);
    assert!(deck.contains(" SPE1 0006 /"));
}

#[test]
fn verbose_flag_does_not_change_the_result() {
    let env = TestEnv::new();
    env.write_deck("SPE1", FIXTURE_DECK);
    env.touch_report_pair("SPE1", 3);

    env.cmd().args(["SPE1", "--verbose"]).assert().success();
    let verbose = env.deck_text("SPE1");

    env.write_deck("SPE1", FIXTURE_DECK);
    env.cmd().arg("SPE1").assert().success();

    assert_eq!(verbose, env.deck_text("SPE1"));
}
