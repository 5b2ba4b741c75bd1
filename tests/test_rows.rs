use glyphsheet::detection::rows::{band_span, letters_for_row};

#[test]
fn bands_share_equal_height_and_last_absorbs_remainder() {
    // 521 / 13 = 40 remainder 1
    for row in 0..12 {
        assert_eq!(band_span(521, 13, row), (row * 40, (row + 1) * 40));
    }
    assert_eq!(band_span(521, 13, 12), (480, 521));
}

#[test]
fn exact_division_leaves_no_remainder() {
    assert_eq!(band_span(520, 13, 0), (0, 40));
    assert_eq!(band_span(520, 13, 12), (480, 520));
}

#[test]
fn last_band_never_exceeds_image_height() {
    for height in [519, 520, 521, 533, 1000] {
        let (_, y2) = band_span(height, 13, 12);
        assert_eq!(y2, height);
    }
}

#[test]
fn rows_map_to_consecutive_letter_pairs() {
    assert_eq!(letters_for_row(0), Some(('A', 'B')));
    assert_eq!(letters_for_row(5), Some(('K', 'L')));
    assert_eq!(letters_for_row(12), Some(('Y', 'Z')));
}

#[test]
fn rows_past_the_alphabet_end_processing() {
    assert_eq!(letters_for_row(13), None);
    assert_eq!(letters_for_row(100), None);
}
