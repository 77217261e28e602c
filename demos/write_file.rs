//! Write a few buffers to a file and read them back.
//!
//! Run with: cargo run --example write_file -- [path]

use plainio::{FileWriter, Writer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "out.bin".to_string());

    {
        let mut out = FileWriter::open(&path, "wb")?;
        for chunk in [&b"ABC"[..], b"DE"] {
            let written = out.write(chunk);
            if written < chunk.len() {
                eprintln!("short write: {written} of {} byte(s)", chunk.len());
            }
        }
        out.finish()?;
    }

    let data = std::fs::read(&path)?;
    println!("{path}: {} byte(s): {}", data.len(), String::from_utf8_lossy(&data));
    Ok(())
}
