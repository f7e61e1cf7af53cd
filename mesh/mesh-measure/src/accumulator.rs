//! Single-pass metric accumulation.

use std::borrow::Borrow;

use mesh_quality::QualityAccumulator;
use mesh_types::{Aabb, Point3, Triangle, Vector3};
use tracing::{debug, info};

use crate::error::{MeasureError, MeasureResult};
use crate::metrics::{CenterOfMass, GeometryMetrics, TriangleAreaStats};
use crate::{Dimensions, MeasureOptions};

/// Running sum with Kahan compensation.
///
/// Summing millions of small tetrahedron volumes naively loses the low bits
/// of each term once the total grows; the compensation term carries them.
#[derive(Debug, Clone, Copy, Default)]
struct KahanSum {
    sum: f64,
    compensation: f64,
}

impl KahanSum {
    #[inline]
    fn add(&mut self, value: f64) {
        let y = value - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    #[inline]
    const fn total(&self) -> f64 {
        self.sum
    }
}

/// Folds a triangle stream into [`GeometryMetrics`].
///
/// Owned by a single analysis. Memory is constant unless mesh-quality
/// analysis is enabled, in which case it grows with the number of distinct
/// vertices and edges.
///
/// # Example
///
/// ```
/// use mesh_measure::{MeasureOptions, MetricsAccumulator};
/// use mesh_types::unit_cube;
///
/// let mut acc = MetricsAccumulator::new(MeasureOptions::fast()).unwrap();
/// for tri in unit_cube() {
///     acc.push(&tri);
/// }
/// let metrics = acc.finish(0).unwrap();
/// assert!((metrics.volume - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct MetricsAccumulator {
    options: MeasureOptions,
    bounds: Aabb,
    triangle_count: usize,
    rejected_count: usize,
    signed_volume: KahanSum,
    surface_area: KahanSum,
    min_area: f64,
    max_area: f64,
    weighted_centroid: Vector3<f64>,
    centroid_sum: Vector3<f64>,
    quality: Option<QualityAccumulator>,
    quality_skipped: bool,
}

impl MetricsAccumulator {
    /// Create an empty accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::InvalidParams`] if the options fail
    /// [`MeasureOptions::validate`].
    pub fn new(options: MeasureOptions) -> MeasureResult<Self> {
        options.validate()?;
        let quality = options
            .mesh_quality
            .then(|| QualityAccumulator::new(options.vertex_epsilon));
        Ok(Self {
            options,
            bounds: Aabb::empty(),
            triangle_count: 0,
            rejected_count: 0,
            signed_volume: KahanSum::default(),
            surface_area: KahanSum::default(),
            min_area: f64::INFINITY,
            max_area: 0.0,
            weighted_centroid: Vector3::zeros(),
            centroid_sum: Vector3::zeros(),
            quality,
            quality_skipped: false,
        })
    }

    /// Options this accumulator was created with.
    #[must_use]
    pub const fn options(&self) -> &MeasureOptions {
        &self.options
    }

    /// Triangles accepted so far.
    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    /// Add one triangle.
    ///
    /// Triangles with a NaN or infinite coordinate are counted as rejected
    /// and otherwise ignored.
    pub fn push(&mut self, triangle: &Triangle) {
        if !triangle.is_finite() {
            self.rejected_count += 1;
            debug!(
                index = self.triangle_count + self.rejected_count - 1,
                "rejected non-finite triangle"
            );
            return;
        }
        self.triangle_count += 1;

        self.bounds.include_triangle(triangle);
        self.signed_volume.add(triangle.signed_volume());

        let area = triangle.area();
        self.surface_area.add(area);

        if self.options.triangle_area_stats {
            self.min_area = self.min_area.min(area);
            self.max_area = self.max_area.max(area);
        }

        if self.options.center_of_mass {
            let centroid = triangle.centroid().coords;
            self.weighted_centroid += centroid * area;
            self.centroid_sum += centroid;
        }

        self.push_quality(triangle);
    }

    fn push_quality(&mut self, triangle: &Triangle) {
        let over_limit = self
            .options
            .quality_triangle_limit
            .is_some_and(|limit| self.triangle_count > limit);

        if over_limit && self.quality.take().is_some() {
            self.quality_skipped = true;
            info!(
                limit = ?self.options.quality_triangle_limit,
                "triangle count exceeds quality limit, skipping mesh-quality analysis"
            );
        }

        if let Some(quality) = &mut self.quality {
            quality.push(triangle);
        }
    }

    /// Produce the final metrics.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::NoGeometry`] if no triangle was accepted.
    #[allow(clippy::cast_precision_loss)]
    // Precision: counts are only used as divisors for means
    pub fn finish(self, file_size: u64) -> MeasureResult<GeometryMetrics> {
        if self.bounds.is_empty() {
            return Err(MeasureError::NoGeometry);
        }

        let signed_volume = self.signed_volume.total();
        let surface_area = self.surface_area.total();
        let count = self.triangle_count as f64;

        let center_of_mass = self.options.center_of_mass.then(|| {
            let coords = if surface_area > 0.0 {
                self.weighted_centroid / surface_area
            } else {
                self.centroid_sum / count
            };
            let absolute = Point3::from(coords);
            CenterOfMass {
                absolute,
                relative_percent: self.bounds.relative_position(&absolute),
            }
        });

        let triangle_areas = self.options.triangle_area_stats.then(|| TriangleAreaStats {
            min: self.min_area,
            max: self.max_area,
            avg: surface_area / count,
        });

        let mesh_quality = self.quality.as_ref().map(QualityAccumulator::finish);

        debug!(
            triangles = self.triangle_count,
            rejected = self.rejected_count,
            signed_volume,
            surface_area,
            quality_skipped = self.quality_skipped,
            "measured"
        );

        Ok(GeometryMetrics {
            triangle_count: self.triangle_count,
            rejected_triangle_count: self.rejected_count,
            dimensions: Dimensions::from_bounds(&self.bounds),
            bounds: self.bounds,
            volume: signed_volume.abs(),
            signed_volume,
            surface_area,
            file_size,
            center_of_mass,
            mesh_quality,
            triangle_areas,
        })
    }
}

/// Measure a triangle sequence in one pass.
///
/// # Errors
///
/// Returns [`MeasureError::InvalidParams`] for invalid options and
/// [`MeasureError::NoGeometry`] if the sequence yields no finite triangle.
pub fn measure_triangles<I>(
    triangles: I,
    file_size: u64,
    options: &MeasureOptions,
) -> MeasureResult<GeometryMetrics>
where
    I: IntoIterator,
    I::Item: Borrow<Triangle>,
{
    let mut acc = MetricsAccumulator::new(options.clone())?;
    for triangle in triangles {
        acc.push(triangle.borrow());
    }
    acc.finish(file_size)
}
