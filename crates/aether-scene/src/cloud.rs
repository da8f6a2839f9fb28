//! Point cloud generation: shell, volume, and cube sampling with palette colors.
//!
//! Generation runs once per layer at startup. The resulting [`PointCloud`]
//! is immutable: it can be read and uploaded but never resized.

use std::f64::consts::TAU;

use aether_common::Color;
use aether_config::schema::{CloudShapeConfig, PaletteEntry};
use rand::Rng;

/// A single generated point, uploaded verbatim as a GPU instance.
///
/// Layout: position(vec3) + color(vec4) = 28 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CloudPoint {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl CloudPoint {
    /// Distance from the origin.
    pub fn radius(&self) -> f32 {
        let [x, y, z] = self.position;
        (x * x + y * y + z * z).sqrt()
    }
}

/// Spatial sampling policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CloudShape {
    /// Radius uniform across `[inner, outer]`.
    Shell { inner: f32, outer: f32 },
    /// Uniform density inside a ball: `r = radius * cbrt(u)`.
    Volume { radius: f32 },
    /// Uniform inside an axis-aligned cube.
    Cube { half_extent: f32 },
}

impl From<&CloudShapeConfig> for CloudShape {
    fn from(config: &CloudShapeConfig) -> Self {
        match *config {
            CloudShapeConfig::Shell {
                inner_radius,
                outer_radius,
            } => CloudShape::Shell {
                inner: inner_radius as f32,
                outer: outer_radius as f32,
            },
            CloudShapeConfig::Volume { radius } => CloudShape::Volume {
                radius: radius as f32,
            },
            CloudShapeConfig::Cube { half_extent } => CloudShape::Cube {
                half_extent: half_extent as f32,
            },
        }
    }
}

impl CloudShape {
    /// Draw one position from this shape.
    pub fn sample(&self, rng: &mut impl Rng) -> [f32; 3] {
        match *self {
            CloudShape::Shell { inner, outer } => {
                let u: f64 = rng.gen();
                let r = inner as f64 + u * (outer as f64 - inner as f64);
                on_sphere(r, rng)
            }
            CloudShape::Volume { radius } => {
                let u: f64 = rng.gen();
                let r = radius as f64 * u.cbrt();
                on_sphere(r, rng)
            }
            CloudShape::Cube { half_extent } => {
                let h = half_extent as f64;
                let mut axis = || ((rng.gen::<f64>() - 0.5) * 2.0 * h) as f32;
                [axis(), axis(), axis()]
            }
        }
    }
}

/// Uniform direction on the sphere of radius `r`.
fn on_sphere(r: f64, rng: &mut impl Rng) -> [f32; 3] {
    let theta = TAU * rng.gen::<f64>();
    let phi = (2.0 * rng.gen::<f64>() - 1.0).acos();
    [
        (r * phi.sin() * theta.cos()) as f32,
        (r * phi.sin() * theta.sin()) as f32,
        (r * phi.cos()) as f32,
    ]
}

/// One palette bucket: the color wins when the draw exceeds `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteBucket {
    pub threshold: f32,
    pub color: Color,
}

/// Ordered color buckets for weighted per-point color selection.
///
/// Buckets are checked in order and the first whose threshold is strictly
/// below the draw wins. The last bucket is the fallback. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    buckets: Vec<PaletteBucket>,
}

impl Palette {
    /// Every point gets `color`.
    pub fn uniform(color: Color) -> Self {
        Self {
            buckets: vec![PaletteBucket {
                threshold: 0.0,
                color,
            }],
        }
    }

    /// Build from config entries, falling back to `fallback` when `entries`
    /// is empty. Unparseable colors become white.
    pub fn from_config(entries: &[PaletteEntry], fallback: &str) -> Self {
        if entries.is_empty() {
            return Self::uniform(parse_color(fallback));
        }
        Self {
            buckets: entries
                .iter()
                .map(|e| PaletteBucket {
                    threshold: e.threshold as f32,
                    color: parse_color(&e.color),
                })
                .collect(),
        }
    }

    /// True when every point receives the same color.
    pub fn is_uniform(&self) -> bool {
        self.buckets.len() == 1
    }

    /// Color for a uniform draw `v` in `[0, 1)`.
    pub fn pick(&self, v: f32) -> Color {
        self.buckets
            .iter()
            .find(|b| b.threshold < v)
            .or_else(|| self.buckets.last())
            .map(|b| b.color)
            .unwrap_or(Color::WHITE)
    }
}

fn parse_color(hex: &str) -> Color {
    Color::from_hex(hex).unwrap_or_else(|| {
        tracing::warn!("invalid point color {hex:?}, using white");
        Color::WHITE
    })
}

/// A fixed-size set of colored points.
#[derive(Debug, Clone)]
pub struct PointCloud {
    points: Vec<CloudPoint>,
}

impl PointCloud {
    /// Generate exactly `count` points.
    ///
    /// The color draw is skipped for uniform palettes, so a uniform cloud
    /// consumes three draws per point.
    pub fn generate(
        count: usize,
        shape: CloudShape,
        palette: &Palette,
        rng: &mut impl Rng,
    ) -> Self {
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            let position = shape.sample(rng);
            let color = if palette.is_uniform() {
                palette.pick(1.0)
            } else {
                palette.pick(rng.gen())
            };
            points.push(CloudPoint {
                position,
                color: color.to_rgba_f32(),
            });
        }
        Self { points }
    }

    /// A single point, used for actors drawn through the point pipeline.
    pub fn single(position: [f32; 3], color: Color) -> Self {
        Self {
            points: vec![CloudPoint {
                position,
                color: color.to_rgba_f32(),
            }],
        }
    }

    pub fn points(&self) -> &[CloudPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aether_config::schema::default_star_palette;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f32 = 1e-4;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn cloud_point_layout_is_28_bytes() {
        assert_eq!(std::mem::size_of::<CloudPoint>(), 28);
        assert_eq!(std::mem::align_of::<CloudPoint>(), 4);
    }

    #[test]
    fn generates_exactly_n_points() {
        let palette = Palette::uniform(Color::WHITE);
        for n in [0usize, 1, 7, 100, 4000] {
            let cloud =
                PointCloud::generate(n, CloudShape::Volume { radius: 1.0 }, &palette, &mut rng());
            assert_eq!(cloud.len(), n);
        }
        let empty =
            PointCloud::generate(0, CloudShape::Cube { half_extent: 1.0 }, &palette, &mut rng());
        assert!(empty.is_empty());
    }

    #[test]
    fn shell_radius_stays_in_band() {
        let palette = Palette::uniform(Color::WHITE);
        let cloud = PointCloud::generate(
            2000,
            CloudShape::Shell {
                inner: 1.2,
                outer: 2.7,
            },
            &palette,
            &mut rng(),
        );
        for p in cloud.points() {
            let r = p.radius();
            assert!(r >= 1.2 - EPS && r <= 2.7 + EPS, "r = {r}");
        }
    }

    #[test]
    fn volume_radius_stays_in_ball() {
        let palette = Palette::uniform(Color::WHITE);
        let cloud = PointCloud::generate(
            2000,
            CloudShape::Volume { radius: 400.0 },
            &palette,
            &mut rng(),
        );
        for p in cloud.points() {
            assert!(p.radius() <= 400.0 + 0.01);
        }
    }

    #[test]
    fn volume_is_uniform_in_r_cubed() {
        let radius = 10.0f32;
        let palette = Palette::uniform(Color::WHITE);
        let n = 20_000;
        let cloud = PointCloud::generate(n, CloudShape::Volume { radius }, &palette, &mut rng());

        // Ten equal bins over [0, R³]; each should hold about a tenth.
        let r3_max = radius.powi(3);
        let mut bins = [0usize; 10];
        for p in cloud.points() {
            let frac = (p.radius().powi(3) / r3_max).clamp(0.0, 0.999_999);
            bins[(frac * 10.0) as usize] += 1;
        }
        let expected = n as f64 / 10.0;
        for (i, &count) in bins.iter().enumerate() {
            let dev = (count as f64 - expected).abs() / expected;
            assert!(dev < 0.1, "bin {i} has {count}, expected ~{expected}");
        }
    }

    #[test]
    fn cube_points_stay_inside_extent() {
        let palette = Palette::uniform(Color::WHITE);
        let cloud = PointCloud::generate(
            500,
            CloudShape::Cube { half_extent: 25.0 },
            &palette,
            &mut rng(),
        );
        for p in cloud.points() {
            assert!(p.position.iter().all(|c| c.abs() <= 25.0));
        }
    }

    #[test]
    fn same_seed_same_cloud() {
        let palette = Palette::from_config(&default_star_palette(), "#ffffff");
        let shape = CloudShape::Volume { radius: 5.0 };
        let a = PointCloud::generate(64, shape, &palette, &mut rng());
        let b = PointCloud::generate(64, shape, &palette, &mut rng());
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn palette_picks_first_bucket_below_draw() {
        let palette = Palette::from_config(&default_star_palette(), "#ffffff");
        assert_eq!(palette.pick(0.95), Color::WHITE);
        assert_eq!(palette.pick(0.9), Color::from_rgba(0x99, 0x4d, 0xff, 255));
        assert_eq!(palette.pick(0.7), Color::from_rgba(0x99, 0x4d, 0xff, 255));
        assert_eq!(palette.pick(0.3), Color::from_rgba(0x66, 0x99, 0xff, 255));
        // Exactly zero falls through to the last bucket.
        assert_eq!(palette.pick(0.0), Color::from_rgba(0x66, 0x99, 0xff, 255));
    }

    #[test]
    fn palette_weights_match_thresholds() {
        let palette = Palette::from_config(&default_star_palette(), "#ffffff");
        let cloud = PointCloud::generate(
            20_000,
            CloudShape::Volume { radius: 1.0 },
            &palette,
            &mut rng(),
        );
        let white = cloud
            .points()
            .iter()
            .filter(|p| p.color == Color::WHITE.to_rgba_f32())
            .count() as f64
            / cloud.len() as f64;
        assert!((white - 0.1).abs() < 0.02, "white share {white}");
    }

    #[test]
    fn empty_palette_uses_fallback_color() {
        let palette = Palette::from_config(&[], "#a5b4fc");
        assert!(palette.is_uniform());
        assert_eq!(palette.pick(0.5), Color::from_rgba(0xa5, 0xb4, 0xfc, 255));
    }

    #[test]
    fn invalid_palette_color_becomes_white() {
        let palette = Palette::from_config(&[PaletteEntry::new(0.0, "nope")], "#000000");
        assert_eq!(palette.pick(0.5), Color::WHITE);
    }

    #[test]
    fn shape_from_config() {
        let shape = CloudShape::from(&CloudShapeConfig::Shell {
            inner_radius: 1.2,
            outer_radius: 2.7,
        });
        assert_eq!(
            shape,
            CloudShape::Shell {
                inner: 1.2,
                outer: 2.7
            }
        );
    }
}
