//! k-means clustering of sampled pixels in RGB space.
//!
//! Seeding draws k distinct sample indices from an injected random source;
//! everything after that is deterministic. Empty clusters keep their previous
//! centroid: the cluster count never shrinks mid-run, and duplicate centroids
//! are allowed to survive to the output.

use std::collections::HashSet;

use rand::Rng;
use tracing::trace;

use crate::color::Rgb;

/// The mean color of a cluster, kept at float precision across iterations.
///
/// Rounded to [`Rgb`] only at the formatting step so that luminance ordering
/// happens on the unrounded means.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Centroid {
    fn from_rgb(color: Rgb) -> Self {
        Self {
            r: color.r as f64,
            g: color.g as f64,
            b: color.b as f64,
        }
    }

    /// Perceptual luminance of the raw channels (0.2126/0.7152/0.0722
    /// weighting, no gamma). The palette ordering key.
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Round to 8-bit channels.
    pub fn round(&self) -> Rgb {
        Rgb {
            r: self.r.round().clamp(0.0, 255.0) as u8,
            g: self.g.round().clamp(0.0, 255.0) as u8,
            b: self.b.round().clamp(0.0, 255.0) as u8,
        }
    }
}

/// Squared Euclidean distance between a sample and a centroid in RGB space.
fn distance_sq(pixel: Rgb, centroid: &Centroid) -> f64 {
    let dr = pixel.r as f64 - centroid.r;
    let dg = pixel.g as f64 - centroid.g;
    let db = pixel.b as f64 - centroid.b;
    dr * dr + dg * dg + db * db
}

/// Partition `samples` into `k` clusters and return their centroids.
///
/// `k` is clamped to the sample count; an empty sample set returns an empty
/// vector immediately. Initial centroids are `k` distinct samples chosen
/// uniformly without replacement from `rng`.
///
/// Each iteration assigns every sample to its nearest centroid (squared
/// Euclidean distance, ties broken toward the lowest centroid index), stops
/// early once no assignment changed, and otherwise recomputes each non-empty
/// cluster's centroid as the mean of its samples. Clusters left empty by an
/// iteration keep their previous centroid.
///
/// Output order corresponds to cluster index; callers wanting luminance order
/// sort afterwards.
pub fn cluster<R: Rng + ?Sized>(
    samples: &[Rgb],
    k: usize,
    max_iterations: usize,
    rng: &mut R,
) -> Vec<Centroid> {
    if samples.is_empty() || k == 0 {
        return Vec::new();
    }
    let n = samples.len();
    let k = k.min(n);

    // Seed from k distinct sample indices.
    let mut used = HashSet::with_capacity(k);
    let mut centroids = Vec::with_capacity(k);
    while centroids.len() < k {
        let idx = rng.gen_range(0..n);
        if used.insert(idx) {
            centroids.push(Centroid::from_rgb(samples[idx]));
        }
    }

    let mut assignments = vec![usize::MAX; n];
    for iteration in 0..max_iterations {
        // Assignment: first minimum wins, so ties prefer the lowest index.
        let mut moved = false;
        for (i, &pixel) in samples.iter().enumerate() {
            let mut best = 0;
            let mut best_dist = distance_sq(pixel, &centroids[0]);
            for (c, centroid) in centroids.iter().enumerate().skip(1) {
                let d = distance_sq(pixel, centroid);
                if d < best_dist {
                    best_dist = d;
                    best = c;
                }
            }
            if assignments[i] != best {
                assignments[i] = best;
                moved = true;
            }
        }

        if !moved {
            trace!(iteration, "cluster assignments reached a fixed point");
            break;
        }

        // Update: componentwise mean per non-empty cluster.
        let mut sums = vec![[0.0f64; 3]; k];
        let mut counts = vec![0usize; k];
        for (i, &pixel) in samples.iter().enumerate() {
            let c = assignments[i];
            sums[c][0] += pixel.r as f64;
            sums[c][1] += pixel.g as f64;
            sums[c][2] += pixel.b as f64;
            counts[c] += 1;
        }
        for c in 0..k {
            if counts[c] == 0 {
                continue;
            }
            let count = counts[c] as f64;
            centroids[c] = Centroid {
                r: sums[c][0] / count,
                g: sums[c][1] / count,
                b: sums[c][2] / count,
            };
        }
    }

    centroids
}
