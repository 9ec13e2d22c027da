//! Natural ordering of pin numbers.
//!
//! Pin numbers come in three flavours, sorted in this order:
//! plain integers (`"1"`, `"10"`), grid positions made of a letter run and an
//! optional index (`"A1"`, `"AA10"`), and anything else, compared as text.

use std::cmp::Ordering;

use crate::Pin;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey<'a> {
    Numeric(i64),
    Grid {
        row_len: usize,
        row: String,
        index: u64,
    },
    Other(&'a str),
}

impl<'a> SortKey<'a> {
    fn new(num: &'a str) -> Self {
        if let Ok(n) = num.parse() {
            return Self::Numeric(n);
        }

        let row_len = num
            .bytes()
            .take_while(u8::is_ascii_alphabetic)
            .count();
        if row_len == 0 {
            return Self::Other(num);
        }
        let (row, rest) = num.split_at(row_len);
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let index = match &rest[..digits_len] {
            "" => 0,
            digits => digits.parse().unwrap_or(u64::MAX),
        };
        Self::Grid {
            row_len,
            row: row.to_ascii_uppercase(),
            index,
        }
    }
}

/// Compare two pin numbers
pub fn compare(a: &str, b: &str) -> Ordering {
    SortKey::new(a).cmp(&SortKey::new(b))
}

/// Stable sort by pin number; pins with equal keys keep discovery order.
pub fn sort_pins(pins: &mut [Pin<'_>]) {
    pins.sort_by_cached_key(|pin| SortKey::new(pin.num.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PinNum;
    use rstest::*;

    fn sorted<'a>(nums: &[&'a str]) -> Vec<&'a str> {
        let mut nums = nums.to_vec();
        nums.sort_by(|a, b| compare(a, b));
        nums
    }

    #[rstest]
    #[case(&["10", "2", "1"], &["1", "2", "10"])]
    #[case(&["A1", "B2", "A10"], &["A1", "A10", "B2"])]
    #[case(&["3", "A1"], &["3", "A1"])]
    #[case(&["A1", "3"], &["3", "A1"])]
    #[case(&["AA1", "B1", "A2"], &["A2", "B1", "AA1"])]
    #[case(&["b2", "A3", "B1"], &["A3", "B1", "b2"])]
    #[case(&["A", "A0", "A1"], &["A", "A0", "A1"])]
    #[case(&["EP", "1", "MH2", "MH1"], &["1", "EP", "MH1", "MH2"])]
    #[case(&["~", "A1", "1"], &["1", "A1", "~"])]
    #[case(&["_2", "-", "_10"], &["-", "_10", "_2"])]
    #[case(&["-1", "0", "2"], &["-1", "0", "2"])]
    fn orders_pin_numbers(#[case] input: &[&str], #[case] expected: &[&str]) {
        assert_eq!(sorted(input), expected);
    }

    #[test]
    fn letter_prefix_with_suffix_sorts_as_grid() {
        assert_eq!(compare("A1x", "A2"), Ordering::Less);
        assert_eq!(compare("A1x", "10"), Ordering::Greater);
        assert_eq!(compare("A1x", "~"), Ordering::Less);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let pin = |num, net| Pin {
            num: PinNum(num),
            name: "",
            net,
            typ: "passive",
        };
        let mut pins = vec![
            pin("2", "first"),
            pin("a1", "second"),
            pin("1", "third"),
            pin("A1", "fourth"),
            pin("2", "fifth"),
        ];
        sort_pins(&mut pins);
        let order: Vec<_> = pins.iter().map(|pin| (pin.num.0, pin.net)).collect();
        assert_eq!(
            order,
            vec![
                ("1", "third"),
                ("2", "first"),
                ("2", "fifth"),
                ("a1", "second"),
                ("A1", "fourth"),
            ]
        );
    }
}
