use super::*;

// =============================================================
// get / set
// =============================================================

#[test]
fn store_returns_initial_value() {
    let store = Store::new(7_u32);
    assert_eq!(store.get(), 7);
}

#[test]
fn store_default_uses_type_default() {
    let store: Store<String> = Store::default();
    assert_eq!(store.get(), "");
}

#[test]
fn store_set_replaces_value() {
    let store = Store::new(1_u32);
    store.set(2);
    assert_eq!(store.get(), 2);
    assert_eq!(store.with(|v| *v * 10), 20);
}

#[test]
fn store_clones_share_value() {
    let a = Store::new(String::from("a"));
    let b = a.clone();
    b.set(String::from("b"));
    assert_eq!(a.get(), "b");
}

// =============================================================
// subscribe
// =============================================================

#[test]
fn subscribers_see_every_set_in_order() {
    let store = Store::new(0_u32);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |v| sink.borrow_mut().push(*v));

    store.set(1);
    store.set(3);

    assert_eq!(*seen.borrow(), vec![1, 2, 3]);
}

#[test]
fn setting_the_same_value_does_not_notify() {
    let store = Store::new(0_u32);
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    store.subscribe(move |_| counter.set(counter.get() + 1));

    store.set(0);
    store.set(1);
    store.set(1);

    assert_eq!(hits.get(), 1);
    assert_eq!(store.get(), 1);
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = Store::new(0_u32);
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let id = store.subscribe(move |_| counter.set(counter.get() + 1));

    store.set(1);
    store.unsubscribe(id);
    store.set(2);

    assert_eq!(hits.get(), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn unsubscribe_unknown_id_is_ignored() {
    let store = Store::new(0_u32);
    let id = store.subscribe(|_| {});
    store.unsubscribe(id);
    store.unsubscribe(id);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn clear_subscribers_drops_all_listeners() {
    let store = Store::new(0_u32);
    store.subscribe(|_| {});
    store.subscribe(|_| {});
    assert_eq!(store.subscriber_count(), 2);
    store.clear_subscribers();
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn subscriber_can_read_store_during_notification() {
    let store = Store::new(0_u32);
    let observed = Rc::new(Cell::new(0));
    let reader = store.clone();
    let sink = Rc::clone(&observed);
    store.subscribe(move |_| sink.set(reader.get()));

    store.set(5);

    assert_eq!(observed.get(), 5);
}

#[test]
fn subscriber_can_write_store_during_notification() {
    let store = Store::new(0_u32);
    let writer = store.clone();
    store.subscribe(move |v| {
        if *v == 1 {
            writer.set(2);
        }
    });

    store.set(1);

    assert_eq!(store.get(), 2);
}
