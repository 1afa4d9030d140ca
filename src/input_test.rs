use super::*;

// =============================================================
// PointerHub
// =============================================================

#[test]
fn hub_starts_idle() {
    let hub = PointerHub::new();
    assert!(hub.is_idle());
    assert_eq!(hub.attached(), 0);
}

#[test]
fn hub_listen_and_unlisten() {
    let hub = PointerHub::new();
    let a = hub.listen(ListenerKind::Move);
    let b = hub.listen(ListenerKind::Up);
    assert_ne!(a, b);
    assert_eq!(hub.attached(), 2);
    assert_eq!(hub.attached_of(ListenerKind::Move), 1);

    hub.unlisten(a);
    assert_eq!(hub.attached_of(ListenerKind::Move), 0);
    assert_eq!(hub.attached_of(ListenerKind::Up), 1);

    // Unknown or repeated handles are ignored.
    hub.unlisten(a);
    assert_eq!(hub.attached(), 1);
}

// =============================================================
// PointerCapture
// =============================================================

#[test]
fn capture_registers_move_and_up() {
    let hub = Rc::new(PointerHub::new());
    let capture = PointerCapture::acquire(Rc::clone(&hub));
    assert!(!capture.is_released());
    assert_eq!(hub.attached_of(ListenerKind::Move), 1);
    assert_eq!(hub.attached_of(ListenerKind::Up), 1);
}

#[test]
fn capture_release_runs_once() {
    let hub = Rc::new(PointerHub::new());
    let mut capture = PointerCapture::acquire(Rc::clone(&hub));
    assert!(capture.release());
    assert!(capture.is_released());
    assert!(hub.is_idle());
    assert!(!capture.release());
}

#[test]
fn capture_released_on_drop() {
    let hub = Rc::new(PointerHub::new());
    {
        let _capture = PointerCapture::acquire(Rc::clone(&hub));
        assert_eq!(hub.attached(), 2);
    }
    assert!(hub.is_idle());
}

#[test]
fn capture_drop_after_release_leaves_other_listeners() {
    let hub = Rc::new(PointerHub::new());
    let unrelated = hub.listen(ListenerKind::Move);
    let mut capture = PointerCapture::acquire(Rc::clone(&hub));
    capture.release();
    drop(capture);
    assert_eq!(hub.attached(), 1);
    hub.unlisten(unrelated);
    assert!(hub.is_idle());
}

#[test]
fn pointer_event_at() {
    let ev = PointerEvent::at(3.0, 4.0);
    assert_eq!(ev.client, Point::new(3.0, 4.0));
}

#[test]
fn detach_all_then_release_is_harmless() {
    let hub = Rc::new(PointerHub::new());
    let mut capture = PointerCapture::acquire(Rc::clone(&hub));
    hub.detach_all();
    assert!(hub.is_idle());
    assert!(capture.release());
    assert!(hub.is_idle());
}
