use blockset::{Bitset, Bitset8, Bitset16, Bitset32, Bitset64, ParseBitsetError};
use std::collections::{BTreeSet, HashSet};

#[test]
fn test_codec_scenario() {
    let bitset = Bitset32::from_blocks([0, 5, 100]);
    assert_eq!(bitset.to_string(), "0|5|100");

    let parsed: Bitset32 = "0|5|100".parse().unwrap();
    assert_eq!(parsed, bitset);
    assert!(parsed.has(32)); // 5 = 0b101 in block 1
    assert!(parsed.has(34));

    assert_eq!(Bitset32::parse("").unwrap(), Bitset32::new());
    assert!(matches!(
        Bitset32::parse("qwe"),
        Err(ParseBitsetError::InvalidDigit { index: 0, .. })
    ));
}

#[test]
fn test_parse_error_leaves_no_partial_result() {
    let result: Result<Bitset8, _> = "1|2|3|999|4".parse();
    assert_eq!(
        result,
        Err(ParseBitsetError::OutOfRange {
            index: 3,
            segment: "999".into(),
            bits: 8,
        })
    );
}

#[test]
fn test_same_text_different_widths() {
    let text = "1|256";
    assert!(Bitset8::parse(text).is_err());

    let b16 = Bitset16::parse(text).unwrap();
    assert_eq!(b16.iter().collect::<Vec<_>>(), [0, 24]);

    let b64 = Bitset64::parse(text).unwrap();
    assert_eq!(b64.iter().collect::<Vec<_>>(), [0, 72]);
}

#[test]
fn test_set_semantics_match_btreeset() {
    let ops: &[(char, u32)] = &[
        ('s', 5),
        ('s', 900),
        ('t', 5),
        ('t', 64),
        ('c', 900),
        ('s', 63),
        ('c', 12_345),
        ('t', 12_345),
        ('s', 0),
    ];

    let mut bitset = Bitset16::new();
    let mut reference = BTreeSet::new();
    for &(op, n) in ops {
        match op {
            's' => {
                bitset.set(n);
                reference.insert(n);
            }
            'c' => {
                bitset.clear(n);
                reference.remove(&n);
            }
            't' => {
                bitset.toggle(n);
                if !reference.remove(&n) {
                    reference.insert(n);
                }
            }
            _ => unreachable!(),
        }
    }

    assert_eq!(bitset.iter().collect::<Vec<_>>(), reference.iter().copied().collect::<Vec<_>>());
    assert_eq!(bitset.count_ones(), reference.len());
}

#[test]
fn test_cross_length_algebra() {
    let short: Bitset64 = [1, 2].into_iter().collect();
    let long: Bitset64 = [2, 3, 500].into_iter().collect();

    let mut a = short.clone();
    a.or(&long);
    assert_eq!(a.block_count(), long.block_count());
    assert_eq!(a.iter().collect::<Vec<_>>(), [1, 2, 3, 500]);

    let mut b = long.clone();
    b.and(&short);
    // Only block 0 overlaps; block 7 keeps position 500.
    assert_eq!(b.iter().collect::<Vec<_>>(), [2, 500]);
    assert_eq!(long.intersection(&short).iter().collect::<Vec<_>>(), [2]);

    assert_eq!(short.count_diff(&long), 3);
}

#[test]
fn test_or_accepts_raw_blocks() {
    let mut bitset = Bitset8::new();
    bitset.or([0b0000_0001, 0, 0b1000_0000]);
    assert_eq!(bitset.iter().collect::<Vec<_>>(), [0, 23]);

    bitset.and(&[0xff, 0xff, 0][..]);
    assert_eq!(bitset.iter().collect::<Vec<_>>(), [0]);
}

#[test]
fn test_operators() {
    let a: Bitset32 = [1, 40, 90].into_iter().collect();
    let b: Bitset32 = [40, 41].into_iter().collect();

    let union = &a | &b;
    assert_eq!(union.iter().collect::<Vec<_>>(), [1, 40, 41, 90]);

    let inter = &a & &b;
    assert_eq!(inter.iter().collect::<Vec<_>>(), [40]);

    let mut c = a.clone();
    c |= &b;
    assert_eq!(c, union);

    let mut d = a.clone();
    d &= &b;
    // `&=` keeps blocks past the end of `b`, like `and`.
    assert_eq!(d.iter().collect::<Vec<_>>(), [40, 90]);

    let moved = a.clone() | b.clone();
    assert_eq!(moved, union);
    let moved = a & b;
    assert_eq!(moved, inter);
}

#[test]
fn test_subset_disjoint() {
    let a: Bitset16 = [1, 3].into_iter().collect();
    let b: Bitset16 = [1].into_iter().collect();

    assert!(b.is_subset(&a));
    assert!(!a.is_subset(&b));
    assert!(Bitset16::new().is_subset(&b));

    let c: Bitset16 = [2, 100].into_iter().collect();
    assert!(a.is_disjoint(&c));
    assert!(!a.is_disjoint(&b));
}

#[test]
fn test_equality_is_structural() {
    let a = Bitset64::from_blocks([1]);
    let b = Bitset64::from_blocks([1, 0]);
    assert_ne!(a, b);
    assert!(a.eq_rtrim(&b));
    assert!(b.eq_rtrim(&a));

    let mut b = b;
    b.shrink();
    assert_eq!(a, b);

    let mut seen = HashSet::new();
    seen.insert(a.clone());
    assert!(seen.contains(&b));
}

#[test]
fn test_conversions() {
    let blocks = vec![1u16, 0, 7];
    let bitset = Bitset::from(blocks.clone());
    assert_eq!(bitset.as_slice(), blocks.as_slice());
    assert_eq!(Bitset::from(blocks.as_slice()), bitset);
    assert_eq!(Bitset::from([1u16, 0, 7]), bitset);

    let back: Vec<u16> = bitset.into();
    assert_eq!(back, blocks);
}

#[test]
fn test_iterators() {
    let mut bitset: Bitset8 = [9, 2, 30].into_iter().collect();
    bitset.extend([4, 2]);

    assert_eq!((&bitset).into_iter().collect::<Vec<_>>(), [2, 4, 9, 30]);
    let mut total = 0;
    for n in &bitset {
        total += n;
    }
    assert_eq!(total, 45);

    let mut owned = bitset.into_iter();
    assert_eq!(owned.next(), Some(2));
    assert_eq!(owned.collect::<Vec<_>>(), [4, 9, 30]);
}

#[test]
fn test_debug_shows_blocks() {
    let bitset = Bitset8::from_blocks([1, 0]);
    assert_eq!(format!("{bitset:?}"), "Bitset([1, 0])");
}

#[test]
fn test_with_capacity_has_no_blocks() {
    let mut bitset = Bitset16::with_capacity(1000);
    assert_eq!(bitset.block_count(), 0);
    bitset.set(999);
    assert_eq!(bitset.block_count(), 63);
}
