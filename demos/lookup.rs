//! Walk through the cascading lookup the way a two-select form would
//!
//! Run with: cargo run --example lookup

use muni::{get_municipalities_by_initial, get_municipality_initials, get_prefecture_initials};

fn main() {
    println!("=== Municipality Lookup Demo ===\n");

    // Step 1: the prefecture select
    let prefectures = get_prefecture_initials();
    let letters: Vec<String> = prefectures.iter().map(char::to_string).collect();
    println!("1️⃣  Prefecture initials: {}", letters.join(" "));
    println!();

    // Step 2: the municipality select, enabled once a prefecture initial is picked
    let wakayama = get_municipality_initials("W");
    let letters: Vec<String> = wakayama.iter().map(char::to_string).collect();
    println!("2️⃣  Municipality initials under 'W': {}", letters.join(" "));
    println!();

    // Step 3: the results
    println!("3️⃣  Municipalities for ('H', 'C'):");
    for record in get_municipalities_by_initial("H", "C") {
        println!("   • {}", record);
    }
    println!();

    // Input is normalized: first character only, any case
    println!("4️⃣  Municipalities for (\"none\", \"gigant\"):");
    for record in get_municipalities_by_initial("none", "gigant") {
        println!("   • {}", record);
    }
}
