// Window selection tests: trailing 7, short input, idempotence

use perfsummary::summary::window::{WINDOW_SIZE, trailing, window};

#[test]
fn window_size_is_seven() {
    assert_eq!(WINDOW_SIZE, 7);
}

#[test]
fn trailing_keeps_last_seven_in_order() {
    let items: Vec<u32> = (1..=10).collect();
    assert_eq!(trailing(&items), &[4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(window(items), vec![4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn shorter_input_is_returned_unchanged() {
    let items = vec!["a", "b", "c"];
    assert_eq!(trailing(&items), &["a", "b", "c"]);
    assert_eq!(window(items), vec!["a", "b", "c"]);
}

#[test]
fn exactly_seven_is_unchanged() {
    let items: Vec<u32> = (0..7).collect();
    assert_eq!(window(items.clone()), items);
}

#[test]
fn empty_input_stays_empty() {
    let items: Vec<u32> = vec![];
    assert!(trailing(&items).is_empty());
    assert!(window(items).is_empty());
}

#[test]
fn windowing_is_idempotent() {
    for n in 0..20u32 {
        let items: Vec<u32> = (0..n).collect();
        let once = window(items);
        let twice = window(once.clone());
        assert_eq!(once, twice, "n = {}", n);
        assert_eq!(trailing(&once), once.as_slice());
    }
}
