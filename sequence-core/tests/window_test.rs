use sequence_core::Window;

#[test]
fn test_window_from_array() {
    let window = Window::from([1, 2, 3]);
    assert_eq!(window.width(), 3);
    assert_eq!(window, [1, 2, 3]);
}

#[test]
fn test_window_get() {
    let window = Window::from([10, 20]);
    assert_eq!(window.get(0), Some(&10));
    assert_eq!(window.get(1), Some(&20));
    assert_eq!(window.get(2), None);
}

#[test]
fn test_window_index() {
    let window = Window::from(['a', 'b', 'c']);
    assert_eq!(window[0], 'a');
    assert_eq!(window[2], 'c');
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_window_index_out_of_bounds_panics() {
    let window = Window::from([1, 2]);
    let _ = window[2];
}

#[test]
fn test_window_try_collect() {
    let window: Option<Window<usize, 3>> = Window::try_collect(|k| Some(k * 2));
    assert_eq!(window, Some(Window::from([0, 2, 4])));
}

#[test]
fn test_window_try_collect_short_input() {
    let window: Option<Window<usize, 3>> = Window::try_collect(|k| if k < 2 { Some(k) } else { None });
    assert_eq!(window, None);
}

#[test]
fn test_window_fill_with() {
    let window: Window<usize, 4> = Window::fill_with(|k| k + 1);
    assert_eq!(window, [1, 2, 3, 4]);
}

#[test]
fn test_window_iteration() {
    let window = Window::from([1, 2, 3]);
    let collected: Vec<i32> = window.iter().copied().collect();
    assert_eq!(collected, vec![1, 2, 3]);
    let owned: Vec<i32> = window.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3]);
}

#[test]
fn test_window_value_semantics() {
    let window = Window::from([1, 2]);
    let copy = window;
    assert_eq!(window, copy);
}
