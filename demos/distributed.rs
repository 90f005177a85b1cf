use rand::{rng, Rng};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use snowuid::{UidGenerator, DEFAULT_EPOCH};

fn main() {
    // Two "processes" share one ID space; the tag keeps them apart.
    let generators = [
        Arc::new(UidGenerator::tagged(DEFAULT_EPOCH, 0, 1)),
        Arc::new(UidGenerator::tagged(DEFAULT_EPOCH, 0, 2)),
    ];
    let mut handles = vec![];

    // Several threads share each generator; no lock needed
    for thread_id in 0..4 {
        let generator = Arc::clone(&generators[thread_id % 2]);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = generator.next_id();
                let parts = generator.extract(&id);

                println!(
                    "Thread {} generated ID {} {} (tag={:?}, ts={}, counter={})",
                    thread_id, i, id, parts.tag, parts.timestamp, parts.counter
                );

                // Verify ID uniqueness
                assert!(ids.insert(id), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    // Collect all generated IDs
    let mut all_ids = HashSet::new();
    for handle in handles {
        let thread_ids = handle.join().unwrap();
        all_ids.extend(thread_ids);
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 20, "IDs collided across threads!");
    println!("All IDs are unique!");
}
