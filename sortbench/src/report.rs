use std::{cmp::Ordering, fmt, time::Duration};

use colored::Colorize;
use seqsort::Algorithm;

/// Runs the sorter under test and measures it.
pub fn timed_sort<T: PartialOrd + Clone>(
    algorithm: Algorithm,
    input: &[T],
) -> anyhow::Result<(Vec<T>, Duration)> {
    let (result, elapsed) = harness::measure(|| algorithm.sort(input));
    Ok((result?, elapsed))
}

pub fn format_millis(elapsed: Duration) -> String {
    format!("{:.2}ms", elapsed.as_secs_f64() * 1000.0)
}

pub fn format_list<T: fmt::Display>(values: &[T]) -> String {
    let items = values.iter().map(|v| v.to_string()).collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}

/// Describes every position where `actual` disagrees with `expected`.
pub fn mismatches<T: PartialOrd + fmt::Debug>(expected: &[T], actual: &[T]) -> Vec<String> {
    if expected.len() != actual.len() {
        return vec![format!(
            "Length mismatch: std {} vs seqsort {}",
            expected.len(),
            actual.len()
        )];
    }
    expected
        .iter()
        .zip(actual)
        .enumerate()
        .filter(|(_, (e, a))| e.partial_cmp(a) != Some(Ordering::Equal))
        .map(|(i, (e, a))| format!("Index {i}: std {e:?} vs seqsort {a:?}"))
        .collect()
}

/// Prints the comparison outcome. Returns whether both arrays matched.
pub fn print_comparison(mismatches: &[String]) -> bool {
    if mismatches.is_empty() {
        println!("✅ {}", "Arrays match perfectly!".green());
        return true;
    }
    for m in mismatches {
        println!("❌ {}", m.red());
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_sort_sorts() -> anyhow::Result<()> {
        let (sorted, _) = timed_sort(Algorithm::Unstable, &[3, 1, 2])?;
        assert_eq!(sorted, vec![1, 2, 3]);
        assert!(timed_sort(Algorithm::Stable, &[1.0, f64::NAN]).is_err());
        Ok(())
    }

    #[test]
    fn mismatch_messages() {
        assert!(mismatches(&[1, 2], &[1, 2]).is_empty());
        assert_eq!(
            mismatches(&[1, 2, 3], &[1, 3, 3]),
            vec!["Index 1: std 2 vs seqsort 3"]
        );
        assert_eq!(
            mismatches(&[1], &[1, 2]),
            vec!["Length mismatch: std 1 vs seqsort 2"]
        );
    }

    #[test]
    fn formatting() {
        assert_eq!(format_list(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(format_list::<i32>(&[]), "[]");
        assert_eq!(format_millis(Duration::from_micros(1500)), "1.50ms");
    }
}
