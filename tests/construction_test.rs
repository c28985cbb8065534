use tagmap::prelude::*;
use tagmap::{Cons, Nil};

#[test]
fn empty_map() {
    let empty = tag_map! {};
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
    assert_eq!(empty, Nil);
}

#[test]
fn literal_construction_preserves_order() {
    let person = tag_map! {
        "name" => "Alice",
        "age" => 30,
        "active" => true,
    };
    assert_eq!(person.len(), 3);
    assert!(!person.is_empty());
    assert_eq!(person.index_of::<tag!("name"), _>(), 0);
    assert_eq!(person.index_of::<tag!("age"), _>(), 1);
    assert_eq!(person.index_of::<tag!("active"), _>(), 2);
}

#[test]
fn manual_cons_matches_macro() {
    let by_hand = tagmap::map::checked(tagmap::map::cons(
        Tagged::<tag!("x"), _>::new(1),
        tagmap::map::cons(Tagged::<tag!("y"), _>::new(2), Nil),
    ));
    let by_macro = tag_map! { "x" => 1, "y" => 2 };
    assert_eq!(by_hand, by_macro);
}

#[test]
fn default_fills_every_slot() {
    type Settings = Cons<tag!("retries"), u32, Cons<tag!("label"), String, Nil>>;

    let settings = Settings::default();
    assert_eq!(get!(settings, "retries"), &0);
    assert_eq!(get!(settings, "label"), "");
}

#[test]
fn clone_is_independent() {
    let original = tag_map! { "msg" => String::from("hi") };
    let mut copy = original.clone();
    copy.get_mut::<tag!("msg"), _>().push_str(" there");
    assert_eq!(get!(original, "msg"), "hi");
    assert_eq!(get!(copy, "msg"), "hi there");
}

#[test]
fn convert_widens_slot_types() {
    type Wide = Cons<tag!("count"), u64, Cons<tag!("label"), String, Nil>>;

    let narrow = tag_map! { "count" => 7u8, "label" => "seven" };
    let wide: Wide = narrow.convert();
    assert_eq!(get!(wide, "count"), &7u64);
    assert_eq!(get!(wide, "label"), "seven");
}

#[test]
fn convert_builds_owned_values_from_borrows() {
    type Owned = Cons<tag!("host"), String, Cons<tag!("path"), String, Nil>>;

    let borrowed = tag_map! { "host" => "localhost", "path" => "/health" };
    let owned: Owned = borrowed.convert();
    assert_eq!(get!(owned, "host"), "localhost");
    assert_eq!(get!(owned, "path"), "/health");
}

#[test]
fn borrowed_views_share_tags() {
    let mut source = tag_map! { "a" => 10, "b" => 20 };

    let refs = source.as_refs();
    assert_eq!(**get!(refs, "a"), 10);
    assert_eq!(**get!(refs, "b"), 20);

    let muts = source.as_muts();
    let a: &mut i32 = take!(muts, "a");
    *a += 5;
    assert_eq!(get!(source, "a"), &15);
}
