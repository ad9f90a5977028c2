use flate2::Compression;
use flate2::write::GzEncoder;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=data/municipalities.json");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let input_path = "data/municipalities.json";
    let output_path = Path::new(&out_dir).join("municipalities.json.gz");

    let json_data = fs::read(input_path).expect("Failed to read data/municipalities.json");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(&json_data)
        .expect("Failed to compress municipality data");
    let compressed_data = encoder.finish().expect("Failed to finish compression");

    fs::write(&output_path, &compressed_data).expect("Failed to write compressed dataset");

    let original_kb = json_data.len() as f64 / 1024.0;
    let compressed_kb = compressed_data.len() as f64 / 1024.0;

    println!(
        "cargo:warning=Municipality dataset embedded: {:.1} KB -> {:.1} KB",
        original_kb, compressed_kb
    );
}
