use std::path::PathBuf;

use qrstudio_render_engine::compositor::wrap_caption;
use qrstudio_render_engine::font::FixedWidthFont;

fn load_fixture_captions() -> Vec<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("captions.txt");

    let content = std::fs::read_to_string(path).expect("fixture captions should be readable");
    content
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(str::to_string)
        .collect()
}

fn fnv1a_64(input: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in input.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[test]
fn caption_wrap_fixture_signature_is_stable() {
    let captions = load_fixture_captions();
    assert_eq!(captions.len(), 6);

    // 10 px fixed advance against 150 px available: 15 characters per line.
    let font = FixedWidthFont::new(10.0);
    let signature = captions
        .iter()
        .enumerate()
        .map(|(idx, caption)| format!("{idx}|{}", wrap_caption(caption, 150.0, &font).join("/")))
        .collect::<Vec<_>>()
        .join("\n");

    let total_lines: usize = captions
        .iter()
        .map(|caption| wrap_caption(caption, 150.0, &font).len())
        .sum();

    assert_eq!(total_lines, 11);
    assert_eq!(fnv1a_64(&signature), 0xd8c193e5ac8bc624);
}

#[test]
fn fixture_breaks_land_at_last_fitting_character() {
    let captions = load_fixture_captions();
    let font = FixedWidthFont::new(10.0);

    let lines = wrap_caption(&captions[0], 150.0, &font);
    assert_eq!(lines, vec!["https://www.goo", "gle.com"]);

    // CJK sample: character-by-character wrapping splits inside the text
    // even though it has few spaces.
    let lines = wrap_caption(&captions[3], 150.0, &font);
    assert_eq!(lines, vec!["這是一個中文 QR Code ", "測試"]);
}
