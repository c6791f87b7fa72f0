//! Line probing of a recovered field.
//!
//! Produces a 1-D profile of one stress component along a straight segment
//! through the mesh: evenly spaced sample points between two planar
//! coordinates, the interpolated value at each point, and a cumulative
//! distance axis for plotting or export.
//!
//! Interpolation itself (locating the enclosing element and evaluating its
//! shape functions) belongs to the mesh provider; this module only drives
//! it through the [`FieldSampler`] contract and applies the missing-value
//! policy to what comes back.

use crate::error::{Error, Result};
use crate::types::{Point3, StressComponent};

/// Interpolates a recovered field at arbitrary coordinates.
///
/// Implementations locate the element enclosing `point` and evaluate its
/// shape functions against the field for `component`; `None` signals a
/// point outside the mesh.
pub trait FieldSampler {
    /// Interpolated value at a point, or `None` outside the mesh.
    fn sample_at(&self, point: Point3, component: StressComponent) -> Option<f64>;
}

/// Probe configuration.
#[derive(Debug, Clone, Copy)]
pub struct ProbeOptions {
    /// Elevation of the reference plane the probe segment lies on.
    ///
    /// Profiles are extracted on the cut surface, which the upstream
    /// geometry convention places at z = 1.
    pub plane_z: f64,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self { plane_z: 1.0 }
    }
}

/// A sampled line profile: parallel point/value sequences plus a distance
/// axis.
#[derive(Debug, Clone)]
pub struct LineProfile {
    /// Sample coordinates, evenly spaced from start to end.
    pub points: Vec<Point3>,
    /// Interpolated values; missing samples are `f64::NAN`.
    pub values: Vec<f64>,
    /// Euclidean distance from the first point to each point.
    pub distance: Vec<f64>,
}

impl LineProfile {
    /// Number of samples in the profile.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the profile holds no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Sample one stress component along the segment from `start` to `end`.
///
/// `count` is the number of intervals; the profile holds `count + 1`
/// samples. Both endpoints are planar (x, y) coordinates placed on the
/// reference plane from `options`.
///
/// A returned value of exactly zero is reinterpreted as missing: the mesh
/// provider reports zero for points it cannot attribute to any element,
/// and suppressing those beats plotting extrapolation artifacts outside
/// the mesh boundary. The trade-off is that a genuinely zero-stress sample
/// is masked as well.
pub fn probe_line(
    sampler: &dyn FieldSampler,
    component: StressComponent,
    start: (f64, f64),
    end: (f64, f64),
    count: usize,
    options: ProbeOptions,
) -> Result<LineProfile> {
    if count < 3 {
        return Err(Error::ProbeResolution(count));
    }
    if start == end {
        return Err(Error::DegenerateSegment);
    }

    let p0 = Point3::new(start.0, start.1, options.plane_z);
    let p1 = Point3::new(end.0, end.1, options.plane_z);

    let mut points = Vec::with_capacity(count + 1);
    let mut values = Vec::with_capacity(count + 1);
    let mut distance = Vec::with_capacity(count + 1);

    for i in 0..=count {
        let t = i as f64 / count as f64;
        let point = p0 + (p1 - p0) * t;

        let value = match sampler.sample_at(point, component) {
            Some(v) if v != 0.0 => v,
            _ => f64::NAN,
        };

        points.push(point);
        values.push(value);
        distance.push((point - p0).norm());
    }

    Ok(LineProfile {
        points,
        values,
        distance,
    })
}
