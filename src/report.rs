use std::fmt;

use log::warn;

/// How many individual mismatches a single report logs before going quiet.
const MAX_LOGGED: u64 = 8;

/// Tally of one verification check.
///
/// A mismatch is a disagreement between two conversions.  Disagreements
/// where both sides are NaN but with different payloads are counted
/// separately: they are tolerated, but still reported.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub name: &'static str,
    pub checked: u64,
    pub mismatches: u64,
    pub nan_mismatches: u64,
    logged: u64,
}

impl CheckReport {
    pub fn new(name: &'static str) -> CheckReport {
        CheckReport {
            name,
            checked: 0,
            mismatches: 0,
            nan_mismatches: 0,
            logged: 0,
        }
    }

    #[inline]
    pub fn pass(&mut self) {
        self.checked += 1;
    }

    pub fn mismatch(&mut self, detail: fmt::Arguments) {
        self.checked += 1;
        self.mismatches += 1;
        if self.logged < MAX_LOGGED {
            self.logged += 1;
            warn!("{}: {}", self.name, detail);
        }
    }

    #[inline]
    pub fn nan_mismatch(&mut self) {
        self.checked += 1;
        self.nan_mismatches += 1;
    }

    /// Folds the counts of another report of the same check into this one.
    pub fn merge(&mut self, other: &CheckReport) {
        debug_assert_eq!(self.name, other.name);
        self.checked += other.checked;
        self.mismatches += other.mismatches;
        self.nan_mismatches += other.nan_mismatches;
        self.logged += other.logged;
    }

    pub fn passed(&self) -> bool {
        self.mismatches == 0
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:<32} {:>10} checked, {} mismatches",
            self.name, self.checked, self.mismatches
        )?;
        if self.nan_mismatches > 0 {
            write!(f, ", {} NaN differences (tolerated)", self.nan_mismatches)?;
        }
        if self.passed() {
            write!(f, "  [ok]")
        } else {
            write!(f, "  [FAILED]")
        }
    }
}

/// Why a verification run failed.
#[derive(Debug)]
pub enum CheckFailure {
    /// The named checks found conversions that disagree, with the number
    /// of mismatches each.
    Mismatches(Vec<(&'static str, u64)>),

    /// Hardware cross-checks were required, but the CPU can't do them.
    HardwareUnavailable,
}

impl CheckFailure {
    pub fn from_reports(reports: &[CheckReport]) -> Option<CheckFailure> {
        let failed: Vec<_> = reports
            .iter()
            .filter(|r| !r.passed())
            .map(|r| (r.name, r.mismatches))
            .collect();

        if failed.is_empty() {
            None
        } else {
            Some(CheckFailure::Mismatches(failed))
        }
    }
}

impl std::error::Error for CheckFailure {}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CheckFailure::Mismatches(ref failed) => {
                write!(f, "{} check(s) failed:", failed.len())?;
                for &(name, count) in failed.iter() {
                    write!(f, " {} ({} mismatches)", name, count)?;
                }
                Ok(())
            }
            CheckFailure::HardwareUnavailable => write!(
                f,
                "hardware half conversion was required, but this CPU doesn't support it"
            ),
        }
    }
}
