use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tagmap::tag_map;

#[test]
fn equality_is_slotwise() {
    let a = tag_map! { "x" => 1, "y" => "same" };
    let b = tag_map! { "x" => 1, "y" => "same" };
    assert_eq!(a, b);
}

#[test]
fn one_differing_slot_breaks_equality() {
    let base = tag_map! { "x" => 1, "y" => 2, "z" => 3 };
    assert_ne!(base, tag_map! { "x" => 9, "y" => 2, "z" => 3 });
    assert_ne!(base, tag_map! { "x" => 1, "y" => 9, "z" => 3 });
    assert_ne!(base, tag_map! { "x" => 1, "y" => 2, "z" => 9 });
}

#[test]
fn ordering_is_lexicographic_in_slot_order() {
    // An earlier slot dominates later ones.
    let low = tag_map! { "major" => 1, "minor" => 9 };
    let high = tag_map! { "major" => 2, "minor" => 0 };
    assert!(low < high);
    assert_eq!(low.cmp(&high), Ordering::Less);

    // Equal heads defer to the tail.
    let a = tag_map! { "major" => 1, "minor" => 3 };
    let b = tag_map! { "major" => 1, "minor" => 4 };
    assert!(a < b);
    assert!(b > a);
    assert_eq!(a.cmp(&a), Ordering::Equal);
}

#[test]
fn partial_ordering_respects_incomparable_values() {
    let a = tag_map! { "v" => f64::NAN };
    let b = tag_map! { "v" => 1.0 };
    assert_eq!(a.partial_cmp(&b), None);
    assert_ne!(a, a);
}

#[test]
fn mixed_value_type_comparison() {
    // Slots compare across value types wherever the values themselves do.
    let owned = tag_map! { "name" => String::from("x"), "n" => 1 };
    let borrowed = tag_map! { "name" => "x", "n" => 1 };
    assert_eq!(owned, borrowed);
    assert_ne!(owned, tag_map! { "name" => "y", "n" => 1 });
}

#[test]
fn equal_maps_hash_alike() {
    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    let a = tag_map! { "x" => 1u32, "y" => "s" };
    let b = tag_map! { "x" => 1u32, "y" => "s" };
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn maps_sort_inside_std_collections() {
    let mut rows = vec![
        tag_map! { "k" => 3, "v" => 'c' },
        tag_map! { "k" => 1, "v" => 'a' },
        tag_map! { "k" => 2, "v" => 'b' },
    ];
    rows.sort();
    let keys: Vec<i32> = rows.iter().map(|r| *tagmap::get!(r, "k")).collect();
    assert_eq!(keys, vec![1, 2, 3]);
}
