use std::cell::Cell;

use super::*;

fn counter(location: &MemoryLocation) -> (Rc<Cell<u32>>, Subscription) {
    let hits = Rc::new(Cell::new(0));
    let hits_for_listener = Rc::clone(&hits);
    let subscription = location
        .subscribe(Rc::new(move || hits_for_listener.set(hits_for_listener.get() + 1)))
        .expect("memory subscribe is infallible");
    (hits, subscription)
}

// =============================================================
// Paths and history entries
// =============================================================

#[test]
fn new_location_reports_initial_path() {
    let location = MemoryLocation::new("/start");
    assert_eq!(location.path(), "/start");
    assert_eq!(location.entries(), vec!["/start".to_owned()]);
}

#[test]
fn default_location_starts_at_root() {
    assert_eq!(MemoryLocation::default().path(), "/");
}

#[test]
fn push_appends_entry_and_moves_cursor() {
    let location = MemoryLocation::new("/");
    location.push("/about").expect("push");
    assert_eq!(location.path(), "/about");
    assert_eq!(location.entries(), vec!["/".to_owned(), "/about".to_owned()]);
}

#[test]
fn push_accepts_arbitrary_strings_verbatim() {
    let location = MemoryLocation::new("/");
    location.push("not a path?x=1#frag").expect("push");
    assert_eq!(location.path(), "not a path?x=1#frag");
}

#[test]
fn push_after_back_discards_forward_entries() {
    let location = MemoryLocation::new("/");
    location.push("/a").expect("push");
    location.push("/b").expect("push");
    assert!(location.back());
    location.push("/c").expect("push");
    assert_eq!(location.entries(), vec!["/".to_owned(), "/a".to_owned(), "/c".to_owned()]);
    assert!(!location.forward());
}

#[test]
fn push_does_not_notify() {
    let location = MemoryLocation::new("/");
    let (hits, _sub) = counter(&location);
    location.push("/about").expect("push");
    assert_eq!(hits.get(), 0);
}

// =============================================================
// Native navigation
// =============================================================

#[test]
fn back_and_forward_move_cursor_and_notify() {
    let location = MemoryLocation::new("/");
    location.push("/about").expect("push");
    let (hits, _sub) = counter(&location);

    assert!(location.back());
    assert_eq!(location.path(), "/");
    assert_eq!(hits.get(), 1);

    assert!(location.forward());
    assert_eq!(location.path(), "/about");
    assert_eq!(hits.get(), 2);
}

#[test]
fn back_at_first_entry_is_noop() {
    let location = MemoryLocation::new("/");
    let (hits, _sub) = counter(&location);
    assert!(!location.back());
    assert_eq!(location.path(), "/");
    assert_eq!(hits.get(), 0);
}

#[test]
fn forward_at_last_entry_is_noop() {
    let location = MemoryLocation::new("/");
    let (hits, _sub) = counter(&location);
    assert!(!location.forward());
    assert_eq!(hits.get(), 0);
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn announce_notifies_every_listener_once() {
    let location = MemoryLocation::new("/");
    let (first, _a) = counter(&location);
    let (second, _b) = counter(&location);
    location.announce().expect("announce");
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 1);
}

#[test]
fn dropping_subscription_unregisters_listener() {
    let location = MemoryLocation::new("/");
    let (hits, sub) = counter(&location);
    assert_eq!(location.listener_count(), 1);
    drop(sub);
    assert_eq!(location.listener_count(), 0);
    location.announce().expect("announce");
    assert_eq!(hits.get(), 0);
}

#[test]
fn unsubscribe_only_removes_its_own_listener() {
    let location = MemoryLocation::new("/");
    let (kept, _kept_sub) = counter(&location);
    let (removed, removed_sub) = counter(&location);
    removed_sub.unsubscribe();
    location.announce().expect("announce");
    assert_eq!(kept.get(), 1);
    assert_eq!(removed.get(), 0);
    assert_eq!(location.listener_count(), 1);
}

#[test]
fn listener_can_read_path_during_notification() {
    let location = MemoryLocation::new("/");
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_for_listener = Rc::clone(&seen);
    let reader = location.clone();
    let _sub = location
        .subscribe(Rc::new(move || seen_for_listener.borrow_mut().push(reader.path())))
        .expect("subscribe");
    location.push("/about").expect("push");
    location.announce().expect("announce");
    assert!(location.back());
    assert_eq!(*seen.borrow(), vec!["/about".to_owned(), "/".to_owned()]);
}

#[test]
fn subscription_outliving_location_drops_cleanly() {
    let location = MemoryLocation::new("/");
    let (_hits, sub) = counter(&location);
    drop(location);
    drop(sub);
}

#[test]
fn subscription_debug_reports_active() {
    let location = MemoryLocation::new("/");
    let (_hits, sub) = counter(&location);
    assert!(format!("{sub:?}").contains("active: true"));
}

#[test]
fn location_error_messages_are_descriptive() {
    assert_eq!(LocationError::NoWindow.to_string(), "no browser window available");
    assert_eq!(
        LocationError::History("SecurityError".to_owned()).to_string(),
        "history operation failed: SecurityError"
    );
    assert_eq!(LocationError::Event("nope".to_owned()).to_string(), "navigation event failed: nope");
}
