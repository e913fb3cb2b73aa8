use textbook_background_server::gate::PendingClients;

#[test]
fn second_entry_for_same_id_is_rejected() {
    let pending = PendingClients::new();
    let guard = pending.try_enter("10.0.0.1");
    assert!(guard.is_some());
    assert!(pending.try_enter("10.0.0.1").is_none());
    drop(guard);
}

#[test]
fn dropping_the_guard_releases_the_slot() {
    let pending = PendingClients::new();
    {
        let _guard = pending.try_enter("10.0.0.1").unwrap();
        assert!(pending.contains("10.0.0.1"));
    }
    assert!(!pending.contains("10.0.0.1"));
    assert!(pending.try_enter("10.0.0.1").is_some());
}

#[test]
fn different_ids_do_not_conflict() {
    let pending = PendingClients::new();
    let a = pending.try_enter("10.0.0.1");
    let b = pending.try_enter("10.0.0.2");
    assert!(a.is_some());
    assert!(b.is_some());
    assert_eq!(pending.len(), 2);
    drop(a);
    assert_eq!(pending.len(), 1);
    drop(b);
    assert!(pending.is_empty());
}

#[test]
fn concurrent_claims_admit_exactly_one() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};

    let pending = Arc::new(PendingClients::new());
    let admitted = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let pending = pending.clone();
            let admitted = admitted.clone();
            let barrier = barrier.clone();
            std::thread::spawn(move || {
                barrier.wait();
                if let Some(guard) = pending.try_enter("10.0.0.1") {
                    admitted.fetch_add(1, Ordering::SeqCst);
                    // Hold the slot until every thread has tried.
                    std::thread::sleep(std::time::Duration::from_millis(50));
                    drop(guard);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(admitted.load(Ordering::SeqCst), 1);
    assert!(pending.is_empty());
}
