//! Deterministic multi-key ordering of to-do items.
//!
//! # Invariants
//! - Unchecked items always precede checked items, whatever the sort mode.
//! - Within one completion group the sort mode picks the secondary key.
//! - Sorting is stable, so equal keys keep insertion order.

use crate::model::item::Item;
use crate::model::settings::SortMode;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Returns a ranked copy of `items`.
pub fn rank(items: &[Item], mode: SortMode) -> Vec<Item> {
    let mut ranked = items.to_vec();
    ranked.sort_by(|a, b| compare(a, b, mode));
    ranked
}

/// Total order used by `rank`.
pub fn compare(a: &Item, b: &Item, mode: SortMode) -> Ordering {
    a.checked.cmp(&b.checked).then_with(|| match mode {
        SortMode::Time => a.id.cmp(&b.id),
        SortMode::TimeDesc => b.id.cmp(&a.id),
        SortMode::Abc => collate(&a.text, &b.text),
    })
}

/// Locale-style text comparison.
///
/// Levels, applied in order until one differs:
/// 1. base letters, ignoring accents and case (`"e" == "É"`)
/// 2. accents
/// 3. case, lowercase first
/// 4. raw code points, so only identical strings compare equal
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_marks(a).cmp(case_marks(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(text: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (CharClass::of(c), c))
}

/// Primary-level grouping: spaces, then punctuation and symbols, then digits,
/// then letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Symbol,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            Self::Space
        } else if c.is_numeric() {
            Self::Digit
        } else if c.is_alphabetic() {
            Self::Letter
        } else {
            Self::Symbol
        }
    }
}

fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

fn case_marks(text: &str) -> impl Iterator<Item = bool> + '_ {
    text.nfd().map(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::{collate, rank};
    use crate::model::item::Item;
    use crate::model::settings::SortMode;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cmp::Ordering;

    fn item(id: i64, text: &str, checked: bool) -> Item {
        Item {
            id,
            text: text.to_string(),
            checked,
        }
    }

    fn random_collection(rng: &mut StdRng) -> Vec<Item> {
        let len = rng.gen_range(0..40);
        let mut ids: Vec<i64> = (1..=len as i64).collect();
        for i in (1..ids.len()).rev() {
            let j = rng.gen_range(0..=i);
            ids.swap(i, j);
        }
        ids.into_iter()
            .map(|id| item(id, &format!("task {}", rng.gen_range(0..1000)), rng.gen()))
            .collect()
    }

    #[test]
    fn unchecked_items_always_rank_first() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let items = random_collection(&mut rng);
            for mode in SortMode::ALL {
                let ranked = rank(&items, mode);
                let first_checked = ranked.iter().position(|it| it.checked);
                if let Some(boundary) = first_checked {
                    assert!(ranked[boundary..].iter().all(|it| it.checked));
                }
            }
        }
    }

    #[test]
    fn time_desc_is_reverse_of_time_within_groups() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let items = random_collection(&mut rng);
            let asc = rank(&items, SortMode::Time);
            let desc = rank(&items, SortMode::TimeDesc);

            for checked in [false, true] {
                let asc_ids: Vec<i64> = asc
                    .iter()
                    .filter(|it| it.checked == checked)
                    .map(|it| it.id)
                    .collect();
                let mut desc_ids: Vec<i64> = desc
                    .iter()
                    .filter(|it| it.checked == checked)
                    .map(|it| it.id)
                    .collect();
                assert!(asc_ids.windows(2).all(|pair| pair[0] < pair[1]));
                desc_ids.reverse();
                assert_eq!(asc_ids, desc_ids);
            }
        }
    }

    #[test]
    fn rank_does_not_mutate_input() {
        let items = vec![item(2, "b", true), item(1, "a", false)];
        let snapshot = items.clone();
        let _ = rank(&items, SortMode::Abc);
        assert_eq!(items, snapshot);
    }

    #[test]
    fn abc_groups_by_completion_then_text() {
        let items = vec![
            item(1, "pear", false),
            item(2, "apple", true),
            item(3, "Banana", false),
            item(4, "cherry", true),
        ];
        let texts: Vec<String> = rank(&items, SortMode::Abc)
            .into_iter()
            .map(|it| it.text)
            .collect();
        assert_eq!(texts, ["Banana", "pear", "apple", "cherry"]);
    }

    #[test]
    fn collate_ignores_case_and_accents_before_tiebreaking() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("école", "ecole"), Ordering::Greater);
        assert_eq!(collate("école", "edge"), Ordering::Less);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn collate_puts_symbols_and_digits_before_letters() {
        for symbol in ["_x", "~x", "{x", "#x", "-x", " x"] {
            assert_eq!(collate(symbol, "a"), Ordering::Less, "{symbol}");
            assert_eq!(collate(symbol, "9"), Ordering::Less, "{symbol}");
        }
        assert_eq!(collate("9 lives", "a"), Ordering::Less);
        assert_eq!(collate("10", "9"), Ordering::Less);
        assert_eq!(collate(" x", "_x"), Ordering::Less);
    }

    #[test]
    fn identical_text_keeps_insertion_order() {
        let items = vec![item(9, "dup", false), item(3, "dup", false)];
        let ids: Vec<i64> = rank(&items, SortMode::Abc)
            .iter()
            .map(|it| it.id)
            .collect();
        assert_eq!(ids, [9, 3]);
    }
}
