//! The two-phase alignment engine.
//!
//! Phase one merges cues and intertitle ranges into a single timeline and
//! partitions it into maximal clusters of mutually overlapping periods;
//! clusters never influence each other. Phase two solves each cluster:
//! the cluster's cues are rescaled as a group onto its intertitles' overall
//! bounds, bucketed onto the single intertitle each overlaps most, fitted
//! to that intertitle's own bounds, and repaired with gap covering and a
//! final overlap separation.

use tracing::debug;

use cinealign_core::{
    cover_gaps, fix_overlaps, overlap_span, overlaps, sort_periods, MediaInstant, MediaSpan,
    Period,
};
use cinealign_intertitle::{join_touching_ranges, TitleRange};
use cinealign_subtitle::SubtitleCue;

/// One entry on the combined timeline.
///
/// Deliberately a closed enum: the per-cluster solve separates cues from
/// intertitles again, and that split has to be exhaustive.
#[derive(Debug, Clone)]
enum TimelineItem {
    Cue(SubtitleCue),
    Title(TitleRange),
}

impl Period for TimelineItem {
    fn valid(&self) -> bool {
        match self {
            TimelineItem::Cue(cue) => cue.valid(),
            TimelineItem::Title(title) => title.valid(),
        }
    }

    fn start(&self) -> MediaInstant {
        match self {
            TimelineItem::Cue(cue) => cue.start(),
            TimelineItem::Title(title) => title.start(),
        }
    }

    fn end(&self) -> MediaInstant {
        match self {
            TimelineItem::Cue(cue) => cue.end(),
            TimelineItem::Title(title) => title.end(),
        }
    }

    fn with_bounds(&self, start: MediaInstant, end: MediaInstant) -> Self {
        match self {
            TimelineItem::Cue(cue) => TimelineItem::Cue(cue.with_bounds(start, end)),
            TimelineItem::Title(title) => TimelineItem::Title(title.with_bounds(start, end)),
        }
    }
}

/// The engine's output: re-timed cues, plus the (touching-joined) ranges
/// they were aligned against.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedFilm {
    pub cues: Vec<SubtitleCue>,
    pub ranges: Vec<TitleRange>,
}

/// Aligns subtitle cues to the film's intertitle ranges.
///
/// The ranges are touching-joined first; the joined list is returned
/// alongside the cues and is not otherwise altered. Cue order in the
/// output follows cluster order on the timeline. Total over valid input.
pub fn align(cues: Vec<SubtitleCue>, ranges: Vec<TitleRange>) -> AlignedFilm {
    let ranges = join_touching_ranges(&ranges);

    let mut items: Vec<TimelineItem> = cues
        .into_iter()
        .map(TimelineItem::Cue)
        .chain(ranges.iter().cloned().map(TimelineItem::Title))
        .collect();
    sort_periods(&mut items);

    let clusters = partition(items);
    debug!(clusters = clusters.len(), "partitioned combined timeline");

    let mut aligned = Vec::new();
    for cluster in clusters {
        aligned.extend(solve_cluster(cluster));
    }
    AlignedFilm {
        cues: aligned,
        ranges,
    }
}

/// Greedily gathers sorted items into maximal clusters: an item joins the
/// current cluster iff it overlaps the cluster's aggregate bounds.
fn partition(items: Vec<TimelineItem>) -> Vec<Vec<TimelineItem>> {
    let mut clusters: Vec<Vec<TimelineItem>> = Vec::new();
    for item in items {
        match clusters.last_mut() {
            Some(cluster) if overlaps(&item, cluster) => cluster.push(item),
            _ => clusters.push(vec![item]),
        }
    }
    clusters
}

fn solve_cluster(cluster: Vec<TimelineItem>) -> Vec<SubtitleCue> {
    let mut cues = Vec::new();
    let mut titles = Vec::new();
    for item in cluster {
        match item {
            TimelineItem::Cue(cue) => cues.push(cue),
            TimelineItem::Title(title) => titles.push(title),
        }
    }

    if cues.is_empty() {
        return Vec::new();
    }
    if titles.is_empty() {
        // No intertitles to align against; only repair cue-on-cue overlap.
        return fix_overlaps(&cues);
    }

    // Pull the whole cue group onto the intertitles' aggregate bounds.
    let fitted = cues.with_bounds(titles.start(), titles.end());

    // Bucket each cue onto the intertitle it now overlaps most.
    let mut buckets: Vec<Vec<SubtitleCue>> = vec![Vec::new(); titles.len()];
    for cue in fitted {
        buckets[best_title(&cue, &titles)].push(cue);
    }

    let mut result = Vec::new();
    for (bucket, title) in buckets.into_iter().zip(&titles) {
        if bucket.is_empty() {
            continue;
        }
        let on_title = bucket.with_bounds(title.start(), title.end());
        result.extend(cover_gaps(&on_title));
    }
    // Independent per-title fitting can reintroduce overlap at bucket
    // seams; one final separation repairs it.
    fix_overlaps(&result)
}

/// The index of the title sharing the largest overlap with `cue`; ties go
/// to the earliest index.
fn best_title(cue: &SubtitleCue, titles: &[TitleRange]) -> usize {
    let mut best = 0;
    let mut best_shared = MediaSpan::ZERO;
    for (index, title) in titles.iter().enumerate() {
        let shared = overlap_span(cue, title);
        if shared > best_shared {
            best_shared = shared;
            best = index;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(start_s: f64, end_s: f64, text: &str) -> SubtitleCue {
        SubtitleCue::new(
            MediaInstant::from_seconds_f64(start_s),
            MediaInstant::from_seconds_f64(end_s),
            text,
        )
    }

    #[test]
    fn test_partition_splits_at_first_gap() {
        let mut items = vec![
            TimelineItem::Cue(cue(0.0, 2.0, "a")),
            TimelineItem::Cue(cue(1.0, 3.0, "b")),
            TimelineItem::Cue(cue(5.0, 6.0, "c")),
        ];
        sort_periods(&mut items);
        let clusters = partition(items);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].len(), 2);
        assert_eq!(clusters[1].len(), 1);
    }

    #[test]
    fn test_partition_uses_aggregate_bounds() {
        // "c" overlaps only the union of "a" and "b", not "a" itself;
        // still one cluster.
        let mut items = vec![
            TimelineItem::Cue(cue(0.0, 2.0, "a")),
            TimelineItem::Cue(cue(1.0, 5.0, "b")),
            TimelineItem::Cue(cue(4.0, 6.0, "c")),
        ];
        sort_periods(&mut items);
        assert_eq!(partition(items).len(), 1);
    }

    #[test]
    fn test_cue_only_cluster_gets_overlap_repair() {
        let out = solve_cluster(vec![
            TimelineItem::Cue(cue(1.0, 3.0, "a")),
            TimelineItem::Cue(cue(2.0, 4.0, "b")),
        ]);
        assert_eq!(out[0].end.as_millis(), 2500);
        assert_eq!(out[1].start.as_millis(), 2500);
    }

    #[test]
    fn test_title_only_cluster_yields_no_cues() {
        let out = solve_cluster(vec![TimelineItem::Title(TitleRange::new(0, 10, 1.0))]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_tied_overlap_buckets_to_first_title() {
        let titles = vec![TitleRange::new(0, 2, 1.0), TitleRange::new(4, 6, 1.0)];
        let c = cue(2.0, 4.0, "tie");
        // No overlap with either: also defaults to the first.
        assert_eq!(best_title(&c, &titles), 0);

        let c = cue(1.0, 5.0, "tie");
        assert_eq!(best_title(&c, &titles), 0);
    }
}
