use clap::ValueEnum;
use rand::{rngs::SmallRng, Rng};

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab_case")]
pub enum DataKind {
    #[value(alias = "int", alias = "numbers")]
    Whole,
    #[value(alias = "float")]
    Floats,
    #[value(alias = "string")]
    Strings,
    All,
}

/// Integers in `[-1000, 1000)`.
pub fn whole_numbers(rng: &mut SmallRng, n: usize) -> Vec<i32> {
    (0..n).map(|_| rng.gen_range(-1000..1000)).collect()
}

/// Floats in `[-1000, 1000)`.
pub fn floats(rng: &mut SmallRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(-1000.0..1000.0)).collect()
}

/// Alphanumeric strings of 3 to 9 characters.
pub fn strings(rng: &mut SmallRng, n: usize) -> Vec<String> {
    (0..n)
        .map(|_| {
            let len = rng.gen_range(3..10);
            (0..len)
                .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn generated_values_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        let ints = whole_numbers(&mut rng, 500);
        assert_eq!(ints.len(), 500);
        assert!(ints.iter().all(|v| (-1000..1000).contains(v)));
        let floats = floats(&mut rng, 500);
        assert!(floats.iter().all(|v| v.is_finite() && (-1000.0..1000.0).contains(v)));
        let strings = strings(&mut rng, 500);
        for s in &strings {
            assert!((3..10).contains(&s.len()));
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn same_seed_same_data() {
        let a = whole_numbers(&mut SmallRng::seed_from_u64(1), 32);
        let b = whole_numbers(&mut SmallRng::seed_from_u64(1), 32);
        assert_eq!(a, b);
    }

    #[test]
    fn kind_aliases() {
        assert_eq!(DataKind::from_str("int", true), Ok(DataKind::Whole));
        assert_eq!(DataKind::from_str("float", true), Ok(DataKind::Floats));
        assert_eq!(DataKind::from_str("all", true), Ok(DataKind::All));
        assert!(DataKind::from_str("bytes", true).is_err());
    }
}
