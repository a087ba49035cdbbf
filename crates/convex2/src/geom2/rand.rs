//! Random convex polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - A small, deterministic sampler of convex polygons for randomized tests
//!   and benchmarks. Parameterizable, reproducible, and hull-validated.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2pi), add bounded angular
//!   and radial jitter, then take the convex hull of the resulting ring of
//!   points. Determinism uses a replay token `(seed, index)` mixed into a
//!   single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::GeomError;
use super::polygon::ConvexPolygon;
use super::types::Point;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing 2pi/n. Clamped to
    /// [0, 0.49] so neighboring rays never swap.
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude): radii are
    /// `base_radius * (1 + u)` with `u` in `[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius around the origin.
    pub base_radius: f64,
    /// Random global phase in [0, 2pi)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random convex polygon via radial jitter + convex hull.
///
/// The polygon surrounds the origin for vertex counts of 4 and above (the
/// largest angular gap stays below pi); a 3-gon may exclude it.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Result<ConvexPolygon, GeomError> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng).max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let pts: Vec<Point> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            Point::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    ConvexPolygon::from_points(&pts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            base_radius: 1.0,
            random_phase: true,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_radial(cfg, tok).expect("poly");
        let p2 = draw_polygon_radial(cfg, tok).expect("poly");
        assert_eq!(p1.len(), p2.len());
        for (a, b) in p1.vertices().iter().zip(p2.vertices()) {
            assert!(a.eq_eps(*b));
        }
    }

    #[test]
    fn draws_surround_the_origin() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(8),
            ..RadialCfg::default()
        };
        for index in 0..20 {
            let p = draw_polygon_radial(cfg, ReplayToken { seed: 5, index }).expect("poly");
            assert!(p.len() >= 3 && p.len() <= 8);
            assert!(p.contains(Point::origin()));
            assert!(p.area() > 0.0);
        }
    }
}
