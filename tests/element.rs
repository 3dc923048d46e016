use seqsort::{is_sorted, sort, sort_unstable, Algorithm, Element, InvalidInputError};

fn parse(values: &[&str]) -> Vec<Element> {
    values.iter().map(|s| s.parse().unwrap()).collect()
}

#[test]
fn test_parse() {
    assert!(matches!("42".parse::<Element>(), Ok(Element::Int(42))));
    assert!(matches!(" -7 ".parse::<Element>(), Ok(Element::Int(-7))));
    assert!(matches!("2.5".parse::<Element>(), Ok(Element::Float(v)) if v == 2.5));
    assert!(matches!("pear".parse::<Element>(), Ok(Element::Str(s)) if s == "pear"));
}

#[test]
fn test_mixed_numbers_sort_numerically() -> anyhow::Result<()> {
    let list = parse(&["3", "2.5", "-1", "10", "0.0"]);
    let sorted = sort(&list)?;
    let printed = sorted.iter().map(|e| e.to_string()).collect::<Vec<_>>();
    assert_eq!(printed, vec!["-1", "0.0", "2.5", "3", "10"]);
    Ok(())
}

#[test]
fn test_int_and_float_compare_equal() {
    assert_eq!(Element::Int(2), Element::Float(2.0));
    assert!(Element::Int(2) < Element::Float(2.5));
    assert!(Element::from("a") < Element::from("b"));
}

#[test]
fn test_strings_and_numbers_are_invalid_input() {
    let list = parse(&["1", "2", "pear"]);
    assert_eq!(sort(&list), Err(InvalidInputError { left: 1, right: 2 }));
    assert!(sort_unstable(&list).is_err());
    let list = parse(&["pear", "1"]);
    assert!(sort(&list).is_err());
}

#[test]
fn test_json_round_trip() -> anyhow::Result<()> {
    let list: Vec<Element> = serde_json::from_str(r#"[3, "b", 1.5, "a"]"#)?;
    assert!(matches!(list[0], Element::Int(3)));
    assert!(matches!(list[2], Element::Float(_)));
    let strings = list
        .into_iter()
        .filter(|e| matches!(e, Element::Str(_)))
        .collect::<Vec<_>>();
    let sorted = sort(&strings)?;
    assert_eq!(serde_json::to_string(&sorted)?, r#"["a","b"]"#);
    Ok(())
}

fn permutations(items: &[Element]) -> Vec<Vec<Element>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut all = vec![];
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let first = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first.clone());
            all.push(tail);
        }
    }
    all
}

#[test]
fn test_big_ints_compare_exactly_with_floats() {
    const P53: i64 = 1 << 53;
    assert!(Element::Int(P53 + 1) > Element::Float(P53 as f64));
    assert!(Element::Float(P53 as f64) < Element::Int(P53 + 1));
    assert_eq!(Element::Int(P53), Element::Float(P53 as f64));
    assert!(Element::Int(i64::MAX) < Element::Float(9.3e18));
    assert!(Element::Int(i64::MIN) == Element::Float(i64::MIN as f64));
    assert!(Element::Int(i64::MIN) > Element::Float(f64::NEG_INFINITY));
    assert!(Element::Int(-3) < Element::Float(-2.5));
    assert!(Element::Int(-2) > Element::Float(-2.5));
    assert!(Element::Int(1).partial_cmp(&Element::Float(f64::NAN)).is_none());
}

#[test]
fn test_big_ints_mixed_with_equal_float_sort_in_order() -> anyhow::Result<()> {
    const P53: i64 = 1 << 53;
    let items = [
        Element::Int(P53 + 1),
        Element::Float(P53 as f64),
        Element::Int(P53),
        Element::Int(P53 + 1),
        Element::Int(P53),
    ];
    for list in permutations(&items) {
        for algorithm in [Algorithm::Stable, Algorithm::Unstable] {
            let sorted = algorithm.sort(&list)?;
            let ints = sorted
                .iter()
                .filter_map(|e| match e {
                    Element::Int(v) => Some(*v),
                    _ => None,
                })
                .collect::<Vec<_>>();
            assert_eq!(ints, vec![P53, P53, P53 + 1, P53 + 1], "{algorithm:?} {list:?}");
            assert!(is_sorted(&sorted));
        }
    }
    Ok(())
}
