use dmd_engine::{
    ClockSize, ClockType, Transition, load_document, save_document,
    limits::{DISPLAY_HEIGHT, DISPLAY_WIDTH},
};
use pretty_assertions::assert_eq;

/// Build a document JSON the way foreign tools write it: uppercase digits,
/// an unusual delimiter, stale frame numbers.
fn foreign_document() -> String {
    let mut rows = Vec::new();
    for y in 0..DISPLAY_HEIGHT {
        let digits: String = (0..DISPLAY_WIDTH).map(|x| char::from_digit(((x + y) % 16) as u32, 16).unwrap().to_ascii_uppercase()).collect();
        rows.push(format!("\":{digits}\""));
    }
    let bitmap = rows.join(",");
    format!(
        r#"{{
  "header": {{
    "intro_transition": "Enable",
    "outro_transition": "Disable",
    "clock_type": "ClockVendorMode",
    "clock_size": "ClockSmall",
    "clock_start_frame": 0,
    "clock_end_frame": 3,
    "clock_position_x": 96,
    "clock_position_y": 20
  }},
  "frames": [ {{ "bitmap": [{bitmap}], "duration": 120, "frame_num": 9 }} ]
}}"#
    )
}

#[test]
fn loading_then_saving_preserves_rows_and_header() {
    let document = load_document(&foreign_document()).unwrap();
    assert_eq!(Transition::Enable, document.header.intro_transition);
    assert_eq!(ClockType::Other("ClockVendorMode".to_string()), document.header.clock_type);
    assert_eq!(ClockSize::ClockSmall, document.header.clock_size);

    let mut copy = document.clone();
    let saved = save_document(&mut copy).unwrap();
    let reloaded = load_document(&saved).unwrap();

    // every row survives byte-for-byte, delimiter and digit case included
    for (a, b) in document.frames[0].bitmap.iter().zip(&reloaded.frames[0].bitmap) {
        assert_eq!(a.as_str(), b.as_str());
    }
    assert_eq!(document.header, reloaded.header);
    // only frame_num is rewritten
    assert_eq!(9, document.frames[0].frame_num);
    assert_eq!(0, reloaded.frames[0].frame_num);
}

#[test]
fn saving_twice_is_stable() {
    let mut document = load_document(&foreign_document()).unwrap();
    let first = save_document(&mut document).unwrap();
    let mut reloaded = load_document(&first).unwrap();
    let second = save_document(&mut reloaded).unwrap();
    assert_eq!(first, second);
}

#[test]
fn truncated_payload_is_rejected_wholesale() {
    let text = foreign_document();
    assert!(load_document(&text[..text.len() / 2]).is_err());
}
