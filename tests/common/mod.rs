use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Deck used by most flows: a SOLUTION section reading its initial state
/// from an INCLUDE, plus the surrounding sections a real deck carries.
pub const FIXTURE_DECK: &str = "\
-- SPE1 base deck
RUNSPEC
TITLE
 Original three-phase case /

DIMENS
 10 10 3 /

SOLUTION

INCLUDE
 'init.inc' /

SUMMARY
FOPR

SCHEDULE
TSTEP
 10*30 /

END
";

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().join("run");
        fs::create_dir_all(&dir).expect("create run dir");
        Self { _tmp: tmp, dir }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("redeck").expect("binary under test");
        cmd.current_dir(&self.dir);
        cmd
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn write_deck(&self, base: &str, text: &str) {
        fs::write(self.path(&format!("{base}.DATA")), text).expect("write deck");
    }

    pub fn deck_text(&self, base: &str) -> String {
        fs::read_to_string(self.path(&format!("{base}.DATA"))).expect("read deck")
    }

    pub fn touch_report(&self, base: &str, kind: char, step: u32) {
        fs::write(self.path(&format!("{base}.{kind}{step:04}")), b"").expect("write report file");
    }

    pub fn touch_report_pair(&self, base: &str, step: u32) {
        self.touch_report(base, 'X', step);
        self.touch_report(base, 'S', step);
    }
}
