//! Demonstration drivers: each one runs the variants of a function side by side
//! and collects the outcome into a [`Report`].

use crate::depth::Depth;
use crate::error::Result;
use crate::factorial::{factorial_accum, factorial_loop, factorial_naive_with};
use crate::fibonacci::{
    fib_accum, fib_cached, fib_memoized, fib_memoizer, fib_naive_with, fib_stepwise,
};
use crate::power::{power_accum, power_fast, power_naive_with};
use crate::sum::{sum_accum, sum_loop, sum_naive_with};
use crate::timing::{format_elapsed, timed};
use clap::ValueEnum;
use itertools::Itertools;
use log::{debug, info, warn};
use std::fmt;
use std::time::Duration;

/// Above this the tree-recursive Fibonacci is not run at all.
pub const NAIVE_FIB_MAX: u64 = 35;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Demo {
    Sum,
    Factorial,
    Power,
    Fibonacci,
    StackOverflow,
    Memoize,
    All,
}

impl Demo {
    /// Every single demonstration, in the order `all` runs them.
    pub const EACH: [Demo; 6] = [
        Demo::Sum,
        Demo::Factorial,
        Demo::Power,
        Demo::Fibonacci,
        Demo::StackOverflow,
        Demo::Memoize,
    ];

    fn default_input(&self) -> Option<u64> {
        match self {
            Demo::Sum => Some(1000),
            Demo::Factorial => Some(20),
            Demo::Power => Some(32),
            Demo::Fibonacci | Demo::Memoize => Some(30),
            Demo::StackOverflow => Some(100_000),
            Demo::All => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Input of the demo; each demo has its own default.
    pub input: Option<u64>,
    pub max_depth: usize,
}

/// What happened to one variant of a demonstration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ran {
        result: Result<u64>,
        elapsed: Duration,
    },
    Skipped {
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Row {
    pub variant: String,
    pub outcome: Outcome,
}

impl Row {
    fn run<F: FnOnce() -> Result<u64>>(variant: &str, f: F) -> Row {
        let t = timed(f);
        match &t.value {
            Ok(value) => debug!("{}: {} in {:?}", variant, value, t.elapsed),
            Err(e) => warn!("{}: {}", variant, e),
        }
        Row {
            variant: variant.to_string(),
            outcome: Outcome::Ran {
                result: t.value,
                elapsed: t.elapsed,
            },
        }
    }

    fn skipped(variant: &str, reason: String) -> Row {
        debug!("{}: skipped, {}", variant, reason);
        Row {
            variant: variant.to_string(),
            outcome: Outcome::Skipped { reason },
        }
    }

    /// The result of the variant, `None` when it did not run.
    pub fn result(&self) -> Option<&Result<u64>> {
        match &self.outcome {
            Outcome::Ran { result, .. } => Some(result),
            Outcome::Skipped { .. } => None,
        }
    }

    pub fn elapsed(&self) -> Option<Duration> {
        match self.outcome {
            Outcome::Ran { elapsed, .. } => Some(elapsed),
            Outcome::Skipped { .. } => None,
        }
    }

    fn result_str(&self) -> String {
        match &self.outcome {
            Outcome::Ran { result: Ok(value), .. } => value.to_string(),
            Outcome::Ran { result: Err(e), .. } => format!("caught: {}", e),
            Outcome::Skipped { reason } => format!("skipped: {}", reason),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub name: &'static str,
    pub title: String,
    pub rows: Vec<Row>,
    pub notes: Vec<String>,
}

impl Report {
    fn new(name: &'static str, title: String) -> Self {
        Report {
            name,
            title,
            rows: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Whether every variant that ran and succeeded returned the same value.
    pub fn variants_agree(&self) -> bool {
        self.rows
            .iter()
            .filter_map(|r| r.result())
            .filter_map(|r| r.as_ref().ok())
            .all_equal()
    }

    fn note_agreement(mut self) -> Self {
        let note = if self.variants_agree() {
            "all variants agree"
        } else {
            "variants DISAGREE"
        };
        self.notes.push(note.to_string());
        self
    }

    pub fn as_csv(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| {
                let elapsed = r
                    .elapsed()
                    .map(|e| e.as_nanos().to_string())
                    .unwrap_or_default();
                format!("{},{},{},{}", self.name, r.variant, r.result_str(), elapsed)
            })
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        let width = self.rows.iter().map(|r| r.variant.len()).max().unwrap_or(0);
        for row in &self.rows {
            let elapsed = row.elapsed().map(format_elapsed).unwrap_or_default();
            writeln!(
                f,
                "  {:<width$}  {:<24}  {}",
                row.variant,
                row.result_str(),
                elapsed,
                width = width
            )?;
        }
        for note in &self.notes {
            writeln!(f, "  {}", note)?;
        }
        Ok(())
    }
}

pub fn run(demo: Demo, config: &DemoConfig) -> Vec<Report> {
    let Some(default_input) = demo.default_input() else {
        return Demo::EACH.iter().flat_map(|&d| run(d, config)).collect();
    };
    let input = config.input.unwrap_or(default_input);
    let depth = Depth::new(config.max_depth);
    info!("running {:?} demo on input {}", demo, input);
    let report = match demo {
        Demo::Sum => sum(input, depth),
        Demo::Factorial => factorial(input, depth),
        Demo::Power => power(input, depth),
        Demo::Fibonacci => fibonacci(input, depth),
        Demo::StackOverflow => stack_overflow(input, depth),
        Demo::Memoize => memoize(input),
        Demo::All => unreachable!("`all` has no input of its own"),
    };
    vec![report]
}

pub fn sum(n: u64, depth: Depth) -> Report {
    let mut report = Report::new("sum", format!("Sum of [1, {}]", n));
    report.rows = vec![
        Row::run("naive", || sum_naive_with(1, n, depth)),
        Row::run("accumulator", || sum_accum(1, n)),
        Row::run("loop", || sum_loop(1, n)),
    ];
    report.note_agreement()
}

pub fn factorial(n: u64, depth: Depth) -> Report {
    let mut report = Report::new("factorial", format!("Factorial of {}", n));
    report.rows = vec![
        Row::run("naive", || factorial_naive_with(n, depth)),
        Row::run("accumulator", || factorial_accum(n)),
        Row::run("loop", || factorial_loop(n)),
    ];
    report.note_agreement()
}

pub fn power(n: u64, depth: Depth) -> Report {
    let mut report = Report::new("power", format!("2 to the power {}", n));
    report.rows = vec![
        Row::run("naive", || power_naive_with(2, n, depth)),
        Row::run("accumulator", || power_accum(2, n)),
        Row::run("square-and-multiply", || power_fast(2, n)),
    ];
    report.note_agreement()
}

pub fn fibonacci(n: u64, depth: Depth) -> Report {
    let mut report = Report::new("fibonacci", format!("Fibonacci number {}", n));
    let naive = if n <= NAIVE_FIB_MAX {
        Row::run("naive", || fib_naive_with(n, depth))
    } else {
        Row::skipped("naive", format!("exponential above {}", NAIVE_FIB_MAX))
    };
    report.rows = vec![
        naive,
        Row::run("memoized", || fib_memoized(n)),
        Row::run("cached", || fib_cached(n)),
        Row::run("accumulator", || fib_accum(n)),
    ];
    report.note_agreement()
}

/// Runs the naive forms past the depth limit; the failure is caught and shown,
/// then the accumulator forms compute the same input.
pub fn stack_overflow(n: u64, depth: Depth) -> Report {
    let mut report = Report::new(
        "stack-overflow",
        format!(
            "Recursion on {} with a limit of {} frames",
            n,
            depth.limit()
        ),
    );
    report.rows = vec![
        Row::run("naive sum", || sum_naive_with(1, n, depth)),
        Row::run("accumulator sum", || sum_accum(1, n)),
        Row::run("naive factorial", || factorial_naive_with(n, depth)),
    ];
    let caught = report.rows.iter().filter(|r| matches!(r.result(), Some(Err(_)))).count();
    report
        .notes
        .push(format!("{} failure(s) caught and reported", caught));
    report
}

/// Compares the number of underlying invocations of the tree recursion with the
/// memoized one.
pub fn memoize(n: u64) -> Report {
    let mut report = Report::new("memoize", format!("Invocations for Fibonacci number {}", n));
    let mut fib = fib_memoizer();
    let first = Row::run("memoized, first call", || fib_stepwise(&mut fib, n));
    let misses = fib.misses();
    let second = Row::run("memoized, second call", || fib_stepwise(&mut fib, n));
    report.rows = vec![first, second];
    report.notes.push(format!(
        "memoized: {} invocations, {} cache hits, {} entries",
        fib.misses(),
        fib.hits(),
        fib.len()
    ));
    report.notes.push(format!(
        "second call invoked the computation {} more time(s)",
        fib.misses() - misses
    ));
    match naive_invocations(n) {
        Ok(calls) => report
            .notes
            .push(format!("naive: {} invocations", calls)),
        Err(e) => report.notes.push(format!("naive: {}", e)),
    }
    report
}

/// Calls made by the tree recursion for `fib(n)`: `2 * fib(n + 1) - 1`.
pub fn naive_invocations(n: u64) -> Result<u64> {
    let next = fib_accum(n.saturating_add(1))?;
    crate::error::mul(next, 2, "naive_invocations", n).map(|c| c - 1)
}

/// Renders the reports in the requested format.
pub fn render(reports: &[Report], csv: bool) -> String {
    if csv {
        let mut lines = vec!["demo,variant,result,elapsed_ns".to_string()];
        lines.extend(reports.iter().flat_map(|r| r.as_csv()));
        lines.join("\n") + "\n"
    } else {
        reports.iter().map(|r| r.to_string()).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::DEFAULT_DEPTH_LIMIT;
    use crate::error::RecursionError;

    fn config(input: Option<u64>) -> DemoConfig {
        DemoConfig {
            input,
            max_depth: DEFAULT_DEPTH_LIMIT,
        }
    }

    #[test]
    fn sum_report() {
        let reports = run(Demo::Sum, &config(Some(10)));
        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert!(report.variants_agree());
        assert!(report.rows.iter().all(|r| r.result() == Some(&Ok(55))));
        assert_eq!(report.notes, vec!["all variants agree".to_string()]);
    }

    #[test]
    fn stack_overflow_is_caught() {
        let report = stack_overflow(100_000, Depth::new(1000));
        assert_eq!(
            report.rows[0].result(),
            Some(&Err(RecursionError::DepthExceeded { limit: 1000 }))
        );
        assert_eq!(report.rows[1].result(), Some(&Ok(5_000_050_000)));
        assert!(matches!(report.rows[2].result(), Some(Err(_))));
        assert_eq!(report.notes, vec!["2 failure(s) caught and reported".to_string()]);
        assert!(report.to_string().contains("caught: stack exhausted"));
    }

    #[test]
    fn naive_fibonacci_is_skipped_for_large_input() {
        let report = fibonacci(50, Depth::default());
        let naive = &report.rows[0];
        assert_eq!(naive.variant, "naive");
        assert_eq!(
            naive.outcome,
            Outcome::Skipped {
                reason: "exponential above 35".to_string()
            }
        );
        assert_eq!(naive.result(), None);
        assert_eq!(naive.elapsed(), None);
        assert_eq!(naive.result_str(), "skipped: exponential above 35");
        assert_eq!(report.rows[1].result(), Some(&Ok(12_586_269_025)));
        assert!(report.variants_agree());
        assert_eq!(report.notes, vec!["all variants agree".to_string()]);
    }

    #[test]
    fn memoize_counts() {
        let report = memoize(30);
        assert_eq!(report.rows[0].result(), Some(&Ok(832_040)));
        assert_eq!(report.rows[1].result(), Some(&Ok(832_040)));
        assert_eq!(
            report.notes[1],
            "second call invoked the computation 0 more time(s)"
        );
        assert_eq!(report.notes[2], "naive: 2692537 invocations");
    }

    #[test]
    fn naive_call_count() {
        assert_eq!(naive_invocations(0), Ok(1));
        assert_eq!(naive_invocations(1), Ok(1));
        assert_eq!(naive_invocations(2), Ok(3));
        assert_eq!(naive_invocations(5), Ok(15));
    }

    #[test]
    fn all_runs_every_demo() {
        let reports = run(Demo::All, &config(None));
        let names: Vec<_> = reports.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["sum", "factorial", "power", "fibonacci", "stack-overflow", "memoize"]
        );
    }

    #[test]
    fn csv_output() {
        let reports = run(Demo::Factorial, &config(Some(5)));
        let csv = render(&reports, true);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "demo,variant,result,elapsed_ns");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("factorial,naive,120,"));
    }

    #[test]
    fn skipped_row_in_csv_has_no_timing() {
        let report = fibonacci(40, Depth::default());
        let csv = report.as_csv();
        assert_eq!(csv[0], "fibonacci,naive,skipped: exponential above 35,");
        assert!(csv[1].starts_with("fibonacci,memoized,102334155,"));
    }
}
