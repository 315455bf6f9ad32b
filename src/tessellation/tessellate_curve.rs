use crate::geometry::Curve;

use super::{Polyline, TessellationParams};

/// Samples a parametric curve into a polyline at a fixed parameter step.
///
/// Open curves always sample both ends of their domain. Closed curves take
/// `round(1/s) + 1` samples at whole multiples of the step, so the closing
/// point meets the first one when `1/s` is a whole number.
pub struct TessellateCurve<'a, C: Curve + ?Sized> {
    curve: &'a C,
    params: TessellationParams,
}

impl<'a, C: Curve + ?Sized> TessellateCurve<'a, C> {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(curve: &'a C, params: TessellationParams) -> Self {
        Self { curve, params }
    }

    /// Executes the tessellation, returning a polyline.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        let domain = self.curve.domain();
        let step = self.params.step;
        let points = if self.curve.is_closed() {
            // A rounded-up turn count may run past the end of the domain.
            step.closed_parameters()
                .map(|fraction| self.curve.evaluate(domain.t_min + domain.span() * fraction))
                .collect()
        } else {
            step.parameters()
                .map(|fraction| self.curve.evaluate(domain.lerp(fraction)))
                .collect()
        };
        Polyline { points }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Bezier, Circle, Hermite};
    use crate::math::{Point3, Vector3};
    use crate::tessellation::Step;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn circle_with_default_step_has_101_points() {
        let circle = Circle::new(Point3::new(250.0, 250.0, 0.0), 100.0).unwrap();
        let polyline = TessellateCurve::new(&circle, TessellationParams::default()).execute();
        assert_eq!(polyline.len(), 101);
        let first = polyline.points[0];
        let last = polyline.points[100];
        assert!((first - last).norm() < 1e-9);
        assert!((first - Point3::new(350.0, 250.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn circle_points_lie_on_circle() {
        let circle = Circle::new(Point3::new(1.0, 2.0, 7.0), 3.0).unwrap();
        let params = TessellationParams::new(Step::new(0.05).unwrap());
        for q in TessellateCurve::new(&circle, params).execute().points {
            let d = ((q.x - 1.0).powi(2) + (q.y - 2.0).powi(2)).sqrt();
            assert!((d - 3.0).abs() < 1e-9);
            assert!((q.z - 7.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn circle_with_uneven_step_stops_short_of_a_full_turn() {
        let circle = Circle::new(Point3::origin(), 1.0).unwrap();
        let params = TessellationParams::new(Step::new(0.3).unwrap());
        let polyline = TessellateCurve::new(&circle, params).execute();
        assert_eq!(polyline.len(), 4);
        let last = polyline.points[3];
        let expected = circle.evaluate(0.9);
        assert!((last - expected).norm() < 1e-12);
        assert!((last - polyline.points[0]).norm() > 0.5);
    }

    #[test]
    fn circle_turn_count_rounds_up() {
        let circle = Circle::new(Point3::origin(), 1.0).unwrap();
        let params = TessellationParams::new(Step::new(0.4).unwrap());
        let polyline = TessellateCurve::new(&circle, params).execute();
        assert_eq!(polyline.len(), 4);
        assert!((polyline.points[3] - circle.evaluate(1.2)).norm() < 1e-12);
    }

    #[test]
    fn bezier_polyline_keeps_exact_endpoints() {
        let curve = Bezier::cubic(p(0.0, 0.0), p(10.0, 50.0), p(90.0, 50.0), p(100.0, 0.0));
        let params = TessellationParams::new(Step::new(0.3).unwrap());
        let polyline = TessellateCurve::new(&curve, params).execute();
        assert_eq!(polyline.len(), 5);
        assert_eq!(polyline.points[0], p(0.0, 0.0));
        assert_eq!(polyline.points[4], p(100.0, 0.0));
    }

    #[test]
    fn hermite_polyline_endpoints() {
        let curve = Hermite::new(p(0.0, 0.0), p(10.0, 0.0), Vector3::y(), -Vector3::y()).unwrap();
        let polyline = TessellateCurve::new(&curve, TessellationParams::default()).execute();
        assert_eq!(polyline.len(), 101);
        assert_eq!(polyline.points[0], p(0.0, 0.0));
        assert!((polyline.points[100] - p(10.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn works_through_trait_object() {
        let circle = Circle::new(Point3::origin(), 1.0).unwrap();
        let curve: &dyn Curve = &circle;
        let polyline = TessellateCurve::new(curve, TessellationParams::new(Step::new(0.5).unwrap())).execute();
        assert_eq!(polyline.len(), 3);
    }
}
