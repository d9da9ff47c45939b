use crate::track::Interval;

/// How one candidate interval sits relative to the speech window bracketed
/// by two consecutive reference intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Placement {
    /// The candidate silence overruns the expected speech region beyond
    /// tolerance on both ends; carries the reported mismatch clipped to
    /// the reference window.
    Overrun(Interval),
    /// The candidate is silent where expected, within tolerance
    Consistent,
    /// The candidate does not interact with this window
    Unrelated,
}

/// Classifies candidate interval `c` against the window bracketed by
/// consecutive reference intervals `a` and `b` (a before b).
///
/// The overrun test runs first: a candidate that spans across `a`'s right
/// edge toward `b`'s left edge beyond tolerance on both ends is a mismatch
/// even when it also fits the looser containment test. Ties at exact
/// tolerance boundaries classify as consistent rather than overrun.
fn classify(a: Interval, b: Interval, c: Interval, tolerance: f64) -> Placement {
    if c.start < b.start - tolerance && c.end > a.end + tolerance {
        // Clip to the portion inside the reference's speech region
        let start = if c.start > a.end { c.start } else { a.end };
        Placement::Overrun(Interval::new(start, b.start))
    } else if c.start >= a.end - tolerance && c.end <= b.start + tolerance {
        Placement::Consistent
    } else {
        Placement::Unrelated
    }
}

/// Walks two sorted interval lists and reports where the candidate's
/// silence pattern diverges from the reference's, within `tolerance`
/// seconds of slack on interval boundaries.
///
/// Each candidate interval is classified against the speech window between
/// two consecutive reference intervals, so the result is insensitive to
/// sample-level offsets between the two takes. Consistent pairings report
/// nothing; only overruns (and a trailing gap past the final reference
/// window) are emitted. With fewer than two reference intervals no window
/// can be formed and the result is empty.
pub fn align(reference: &[Interval], candidate: &[Interval], tolerance: f64) -> Vec<Interval> {
    let mut mismatches = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i + 1 < reference.len() && j < candidate.len() {
        let a = reference[i];
        let b = reference[i + 1];
        let c = candidate[j];

        if let Placement::Overrun(gap) = classify(a, b, c, tolerance) {
            mismatches.push(gap);
        }

        // At the final reference window and final candidate interval,
        // also check for silence running past where the reference's
        // speech resumes. The right comparison is strict so a zero
        // tolerance never yields a zero-width gap.
        if i + 2 == reference.len() && j + 1 == candidate.len() {
            if c.start + tolerance <= b.end && b.end < c.end - tolerance {
                mismatches.push(Interval::new(b.end, c.end));
            }
        }

        if c.start > b.start {
            i += 1;
        } else {
            j += 1;
        }
    }

    log::info!(
        "Alignment found {} mismatches ({} reference, {} candidate intervals, tolerance {} s)",
        mismatches.len(),
        reference.len(),
        candidate.len(),
        tolerance
    );

    mismatches
}
