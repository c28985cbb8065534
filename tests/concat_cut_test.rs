use tagmap::prelude::*;

#[test]
fn concat_appends_right_operand() {
    let base = tag_map! { "id" => 7u32, "name" => "svc" };
    let extra = tag_map! { "port" => 9000u16 };

    let joined = base.concat(extra);
    assert_eq!(joined.len(), 3);
    assert_eq!(joined.index_of::<tag!("id"), _>(), 0);
    assert_eq!(joined.index_of::<tag!("port"), _>(), 2);
    assert_eq!(get!(joined, "port"), &9000);
}

#[test]
fn concat_with_empty_is_identity() {
    let m = tag_map! { "k" => 1 };
    assert_eq!(tag_map! {}.concat(m), m);
    assert_eq!(m.concat(tag_map! {}), m);
}

#[test]
fn free_function_concat() {
    let a = tag_map! { "left" => 'l' };
    let b = tag_map! { "right" => 'r' };
    let joined = concat(a, b);
    assert_eq!(get!(joined, "left"), &'l');
    assert_eq!(get!(joined, "right"), &'r');
}

#[test]
fn pluck_splits_entry_from_remainder() {
    let m = tag_map! { "a" => 1, "b" => 2, "c" => 3 };

    let (entry, rest) = pluck::<tag!("b"), _, _>(m);
    assert_eq!(entry.into_inner(), 2);
    assert_eq!(rest.len(), 2);
    assert_eq!(rest.index_of::<tag!("a"), _>(), 0);
    assert_eq!(rest.index_of::<tag!("c"), _>(), 1);
}

#[test]
fn cut_projects_in_requested_order() {
    let m = tag_map! { "a" => 1, "b" => 2, "c" => 3, "d" => 4 };

    let projected = cut!(m, "d", "b");
    assert_eq!(projected.len(), 2);
    assert_eq!(projected.index_of::<tag!("d"), _>(), 0);
    assert_eq!(projected.index_of::<tag!("b"), _>(), 1);
    assert_eq!(get!(projected, "d"), &4);
    assert_eq!(get!(projected, "b"), &2);
}

#[test]
fn cut_moves_unclonable_values() {
    let m = tag_map! {
        "keep" => String::from("kept"),
        "drop" => String::from("dropped"),
    };
    let projected = cut!(m, "keep");
    assert_eq!(take!(projected, "keep"), "kept");
}

#[test]
fn cut_over_a_borrowed_view_leaves_the_source_intact() {
    let source = tag_map! {
        "keep" => String::from("kept"),
        "copy" => String::from("copied"),
    };

    let copied = cut!(source.as_refs(), "copy").cloned();
    assert_eq!(take!(copied, "copy"), "copied");

    // The source still owns both values.
    assert_eq!(get!(source, "keep"), "kept");
    assert_eq!(get!(source, "copy"), "copied");
}

#[test]
fn cut_of_every_key_reorders() {
    let m = tag_map! { "x" => 1, "y" => 2 };
    let flipped = cut!(m, "y", "x");
    assert_eq!(flipped, tag_map! { "y" => 2, "x" => 1 });
}
