use snowuid::{Uid, UidGenerator, DEFAULT_EPOCH};

fn main() {
    // Create a generator with the default epoch and a counter starting at 666
    let generator = UidGenerator::new(DEFAULT_EPOCH, 666);

    // Generate some IDs
    let id1 = generator.next_id();
    let id2 = generator.next_id();
    let id3 = generator.next_id();

    println!("Generated IDs:");
    print_id(id1, &generator);
    print_id(id2, &generator);
    print_id(id3, &generator);

    // Round-trip through the text form
    let text = id2.to_string();
    let parsed: Uid = text.parse().unwrap();
    assert_eq!(parsed, id2);

    // Or extract components individually
    let ts = generator.extract.timestamp(&parsed);
    let counter = generator.extract.counter(&parsed);
    let random = generator.extract.random(&parsed);
    println!("\nComponents of {text} (extracted individually):");
    println!("  Timestamp: {ts} (Unix seconds)");
    println!("  Counter: {counter}");
    println!("  Random: {random:04x}");

    // A tagged generator stamps a static byte in front of every ID
    let tagged = UidGenerator::tagged(DEFAULT_EPOCH, 0, 7);
    println!("\nTagged ID:");
    print_id(tagged.next_id(), &tagged);
}

fn print_id(id: Uid, generator: &UidGenerator) {
    let parts = generator.extract(&id);
    let datetime = parts.datetime().unwrap();

    println!(
        "  ID: {id}, Bytes: {:?}, Human date: {datetime}, Counter: {}, Random: {}, Tag: {:?}",
        id.as_bytes(),
        parts.counter,
        parts.random_hex(),
        parts.tag
    );
}
