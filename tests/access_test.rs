use tagmap::prelude::*;
use tagmap::primitives::index::{I0, I1, I2};

#[test]
fn single_key_lookup() {
    let m = tag_map! { "host" => "localhost", "port" => 8080u16 };
    assert_eq!(get!(m, "host"), &"localhost");
    assert_eq!(get!(m, "port"), &8080);
}

#[test]
fn multi_key_lookup_in_requested_order() {
    let m = tag_map! { "a" => 1, "b" => 2, "c" => 3 };

    // Requested order, not slot order.
    let (c, a, b) = get!(m, "c", "a", "b");
    assert_eq!((*c, *a, *b), (3, 1, 2));

    // The same key may be requested more than once.
    let (x, y) = get!(m, "b", "b");
    assert_eq!((*x, *y), (2, 2));
}

#[test]
fn mutation_through_the_tag() {
    let mut m = tag_map! { "hits" => 0u32, "label" => String::from("page") };
    *m.get_mut::<tag!("hits"), _>() += 1;
    *m.get_mut::<tag!("hits"), _>() += 1;
    m.get_mut::<tag!("label"), _>().push_str("-views");
    assert_eq!(get!(m, "hits"), &2);
    assert_eq!(get!(m, "label"), "page-views");
}

#[test]
fn take_moves_the_value_out() {
    let m = tag_map! { "owned" => String::from("gone"), "n" => 3 };
    let owned: String = take!(m, "owned");
    assert_eq!(owned, "gone");
}

#[test]
fn positional_access() {
    let mut m = tag_map! { "first" => 'a', "second" => 'b', "third" => 'c' };

    assert_eq!(*m.at::<I0>().value(), 'a');
    assert_eq!(*m.at::<I2>().value(), 'c');
    assert_eq!(format!("{}", m.at::<I1>().tag_name()), "second");

    *m.at_mut::<I1>().value_mut() = 'B';
    assert_eq!(get!(m, "second"), &'B');

    let entry = m.into_at::<I2>();
    let (name, value) = entry.into_parts();
    assert_eq!(format!("{name}"), "third");
    assert_eq!(value, 'c');
}

#[test]
fn apply_spreads_selected_values() {
    let m = tag_map! { "name" => "Ada", "born" => 1815, "city" => "London" };

    let line = apply!(
        |name: &&str, born: &i32| format!("{name}, {born}"),
        m, "name", "born"
    );
    assert_eq!(line, "Ada, 1815");

    // Order follows the request, not the map.
    let swapped = apply!(|born: &i32, name: &&str| format!("{born} {name}"), m, "born", "name");
    assert_eq!(swapped, "1815 Ada");
}

#[test]
fn lookup_ignores_value_types() {
    // Two slots with the same value type are still told apart by tag.
    let m = tag_map! { "x" => 1i64, "y" => 1i64 };
    let (x, y) = get!(m, "x", "y");
    assert_eq!(*x, *y);
    assert_eq!(m.index_of::<tag!("y"), _>(), 1);
}
