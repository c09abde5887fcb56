//! End-to-end scenarios for the alignment engine.

use cinealign_align::align;
use cinealign_core::{overlaps, touches, MediaInstant};
use cinealign_intertitle::TitleRange;
use cinealign_subtitle::SubtitleCue;

fn cue(start_s: f64, end_s: f64, text: &str) -> SubtitleCue {
    SubtitleCue::new(
        MediaInstant::from_seconds_f64(start_s),
        MediaInstant::from_seconds_f64(end_s),
        text,
    )
}

fn assert_close(actual: MediaInstant, expected_ms: i64) {
    let diff = (actual.as_millis() - expected_ms).abs();
    assert!(
        diff <= 2,
        "expected ~{}ms, got {}ms",
        expected_ms,
        actual.as_millis()
    );
}

#[test]
fn overlapping_cues_without_titles_are_separated_proportionally() {
    let film = align(vec![cue(1.0, 3.0, "a"), cue(2.0, 4.0, "b")], Vec::new());

    assert_eq!(film.cues.len(), 2);
    assert_eq!(film.cues[0].start.as_millis(), 1000);
    assert_eq!(film.cues[0].end.as_millis(), 2500);
    assert_eq!(film.cues[1].start.as_millis(), 2500);
    assert_eq!(film.cues[1].end.as_millis(), 4000);
    assert!(film.ranges.is_empty());
}

#[test]
fn single_cue_snaps_to_its_title() {
    // Title card on frames 0..=2 at 1 fps: instants 0s..2s.
    let film = align(vec![cue(1.0, 3.0, "a")], vec![TitleRange::new(0, 2, 1.0)]);

    assert_eq!(film.cues[0].start.as_millis(), 0);
    assert_eq!(film.cues[0].end.as_millis(), 2000);
}

#[test]
fn detached_cue_passes_through_untouched() {
    // The cue shares no time with the title; they land in separate
    // clusters and neither disturbs the other.
    let film = align(
        vec![cue(100.0, 103.0, "far away")],
        vec![TitleRange::new(0, 5, 1.0)],
    );

    assert_eq!(film.cues[0].start.as_millis(), 100_000);
    assert_eq!(film.cues[0].end.as_millis(), 103_000);
}

#[test]
fn ranges_are_joined_before_alignment() {
    let film = align(
        Vec::new(),
        vec![TitleRange::new(1, 5, 1.0), TitleRange::new(6, 10, 1.0)],
    );

    assert_eq!(film.ranges.len(), 1);
    assert_eq!(film.ranges[0].start_frame, 1);
    assert_eq!(film.ranges[0].end_frame, 10);
    assert!(film.cues.is_empty());
}

#[test]
fn two_cards_three_cues() {
    // Two title cards (10s..14s and 20s..24s at 1 fps). The first two cues
    // drift around the first card, the third around the second.
    let film = align(
        vec![
            cue(9.0, 12.0, "one"),
            cue(12.5, 15.0, "two"),
            cue(21.0, 23.0, "three"),
        ],
        vec![TitleRange::new(10, 14, 1.0), TitleRange::new(20, 24, 1.0)],
    );

    assert_eq!(film.cues.len(), 3);
    let (one, two, three) = (&film.cues[0], &film.cues[1], &film.cues[2]);

    // The first cluster's cues fill their card edge to edge, sharing its
    // span without overlapping.
    assert_eq!(one.start.as_millis(), 10_000);
    assert_eq!(two.end.as_millis(), 14_000);
    assert_eq!(one.end, two.start);
    assert_close(one.end, 12_182);
    assert!(!overlaps(one, two));
    assert!(touches(one, two));

    // The lone cue of the second cluster takes the whole second card.
    assert_eq!(three.start.as_millis(), 20_000);
    assert_eq!(three.end.as_millis(), 24_000);

    // Text rode along with the re-timing.
    assert_eq!(one.text, "one");
    assert_eq!(two.text, "two");
    assert_eq!(three.text, "three");
}

#[test]
fn cue_straddling_two_cards_buckets_onto_one() {
    // One cue overlapping two cards within a single cluster: it is
    // assigned to exactly one card (the larger overlap) and ends up inside
    // that card's bounds.
    let film = align(
        vec![cue(3.0, 11.0, "straddler"), cue(11.5, 14.0, "second")],
        vec![TitleRange::new(2, 8, 1.0), TitleRange::new(10, 14, 1.0)],
    );

    assert_eq!(film.cues.len(), 2);
    for c in &film.cues {
        let inside_first = c.start.as_millis() >= 2000 && c.end.as_millis() <= 8000;
        let inside_second = c.start.as_millis() >= 10_000 && c.end.as_millis() <= 14_000;
        assert!(
            inside_first || inside_second,
            "cue {:?} escaped both cards",
            c.text
        );
    }
}

#[test]
fn output_never_contains_overlapping_cues() {
    let film = align(
        vec![
            cue(0.5, 3.0, "a"),
            cue(1.0, 4.0, "b"),
            cue(3.5, 7.0, "c"),
            cue(6.0, 9.0, "d"),
        ],
        vec![TitleRange::new(1, 4, 1.0), TitleRange::new(6, 8, 1.0)],
    );

    for i in 0..film.cues.len() {
        for j in (i + 1)..film.cues.len() {
            assert!(
                !overlaps(&film.cues[i], &film.cues[j]),
                "cues {} and {} overlap",
                i,
                j
            );
        }
    }
}
