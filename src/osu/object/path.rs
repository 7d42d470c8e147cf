use rosu_map::section::{
    general::GameMode,
    hit_objects::{BorrowedCurve, CurveBuffers, PathControlPoint},
};

use crate::model::hit_object::Pos;

/// Geometry of a slider's path.
///
/// Progress values are expected to be in `[0, 1]` where `0` is the start
/// and `1` is the end of the path.
pub trait PathGeometry {
    /// The position at the given progress, relative to the slider's
    /// position.
    fn position_at(&self, progress: f64) -> Pos;

    /// The total length of the path.
    fn dist(&self) -> f64;
}

impl PathGeometry for BorrowedCurve<'_> {
    fn position_at(&self, progress: f64) -> Pos {
        BorrowedCurve::position_at(self, progress)
    }

    fn dist(&self) -> f64 {
        BorrowedCurve::dist(self)
    }
}

/// The path of a slider.
///
/// Keeps the control points and the declared length around so the curve can
/// be computed on demand. Its length and both endpoints are computed once on
/// creation.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderPath {
    control_points: Box<[PathControlPoint]>,
    expected_dist: Option<f64>,
    dist: f64,
    start_pos: Pos,
    end_pos: Pos,
}

impl SliderPath {
    pub fn new(control_points: Box<[PathControlPoint]>, expected_dist: Option<f64>) -> Self {
        Self::new_with_bufs(control_points, expected_dist, &mut CurveBuffers::default())
    }

    pub fn new_with_bufs(
        control_points: Box<[PathControlPoint]>,
        expected_dist: Option<f64>,
        bufs: &mut CurveBuffers,
    ) -> Self {
        let mut path = Self {
            control_points,
            expected_dist,
            dist: 0.0,
            start_pos: Pos::default(),
            end_pos: Pos::default(),
        };

        let curve = path.curve(bufs);
        let dist = curve.dist();
        let start_pos = curve.position_at(0.0);
        let end_pos = curve.position_at(1.0);

        path.dist = dist;
        path.start_pos = start_pos;
        path.end_pos = end_pos;

        path
    }

    pub fn control_points(&self) -> &[PathControlPoint] {
        &self.control_points
    }

    pub const fn expected_dist(&self) -> Option<f64> {
        self.expected_dist
    }

    /// The total length of the path.
    pub const fn dist(&self) -> f64 {
        self.dist
    }

    /// Position at progress `0`.
    pub const fn start_pos(&self) -> Pos {
        self.start_pos
    }

    /// Position at progress `1`.
    pub const fn end_pos(&self) -> Pos {
        self.end_pos
    }

    /// Compute the curve through the control points.
    ///
    /// Without control points the curve has length `0` and every position
    /// is the origin.
    pub fn curve<'a>(&self, bufs: &'a mut CurveBuffers) -> SliderCurve<'a> {
        let inner = (!self.control_points.is_empty()).then(|| {
            BorrowedCurve::new(GameMode::Osu, &self.control_points, self.expected_dist, bufs)
        });

        SliderCurve { inner }
    }
}

/// A computed slider path, see [`SliderPath::curve`].
pub struct SliderCurve<'a> {
    inner: Option<BorrowedCurve<'a>>,
}

impl PathGeometry for SliderCurve<'_> {
    fn position_at(&self, progress: f64) -> Pos {
        self.inner
            .as_ref()
            .map_or(Pos::default(), |curve| curve.position_at(progress))
    }

    fn dist(&self) -> f64 {
        self.inner.as_ref().map_or(0.0, |curve| curve.dist())
    }
}
