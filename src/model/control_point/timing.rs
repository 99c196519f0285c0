use crate::error::MalformedChart;

/// A timing point as handed over by the parser.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RawTimingPoint {
    pub time: f64,
    /// Milliseconds per beat for uninherited points.
    ///
    /// Inherited points store a negative inverse slider velocity percentage
    /// instead, e.g. `-50.0` for a 2x multiplier.
    pub beat_len: f64,
}

impl RawTimingPoint {
    pub const fn new(time: f64, beat_len: f64) -> Self {
        Self { time, beat_len }
    }

    /// Whether the point only modifies the slider velocity.
    pub fn is_inherited(&self) -> bool {
        self.beat_len < 0.0
    }
}

/// Timing-related info about a control point after resolving inherited
/// slider velocity multipliers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimingPoint {
    pub time: f64,
    /// Effective milliseconds per beat, always positive.
    pub beat_len: f64,
    /// Slider velocity multiplier; `1.0` for uninherited points.
    pub slider_velocity: f64,
    pub inherited: bool,
}

impl TimingPoint {
    pub const DEFAULT_BEAT_LEN: f64 = 1000.0;

    pub fn bpm(&self) -> f64 {
        60_000.0 / self.beat_len
    }
}

/// Resolved timing points, stored latest first.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingPoints {
    points: Box<[TimingPoint]>,
}

impl TimingPoints {
    /// Resolve the raw points of a chart.
    ///
    /// Points are stably sorted by time, the first one is pinned to `0` and
    /// every inherited point gets the beat length of the most recent
    /// uninherited point scaled by its multiplier.
    pub fn resolve(raw: &[RawTimingPoint]) -> Result<Self, MalformedChart> {
        let mut sorted = raw.to_vec();
        sorted.sort_by(|a, b| a.time.total_cmp(&b.time));

        let Some(first) = sorted.first_mut() else {
            return Err(MalformedChart::NoTimingPoints);
        };

        if first.is_inherited() {
            return Err(MalformedChart::InheritedFirstPoint);
        }

        first.time = 0.0;
        let mut beat_len = first.beat_len;

        let mut points: Vec<_> = sorted
            .iter()
            .map(|raw| {
                if raw.is_inherited() {
                    TimingPoint {
                        time: raw.time,
                        beat_len: beat_len * raw.beat_len / -100.0,
                        slider_velocity: -100.0 / raw.beat_len,
                        inherited: true,
                    }
                } else {
                    beat_len = raw.beat_len;

                    TimingPoint {
                        time: raw.time,
                        beat_len,
                        slider_velocity: 1.0,
                        inherited: false,
                    }
                }
            })
            .collect();

        points.reverse();

        Ok(Self {
            points: points.into_boxed_slice(),
        })
    }

    /// Finds the governing [`TimingPoint`], i.e. the latest point at or
    /// before the given time.
    pub fn at(&self, time: f64) -> Option<&TimingPoint> {
        let i = self.points.partition_point(|point| point.time > time);

        self.points.get(i)
    }

    /// The chronologically first point.
    pub fn first(&self) -> Option<&TimingPoint> {
        self.points.last()
    }

    /// Iterate over the points latest first.
    pub fn iter(&self) -> std::slice::Iter<'_, TimingPoint> {
        self.points.iter()
    }

    /// Iterate over the points in chronological order.
    pub fn chronological(&self) -> std::iter::Rev<std::slice::Iter<'_, TimingPoint>> {
        self.points.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<'a> IntoIterator for &'a TimingPoints {
    type Item = &'a TimingPoint;
    type IntoIter = std::slice::Iter<'a, TimingPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::util::float_ext::FloatExt;

    use super::*;

    fn raw(points: &[(f64, f64)]) -> Vec<RawTimingPoint> {
        points
            .iter()
            .map(|&(time, beat_len)| RawTimingPoint::new(time, beat_len))
            .collect()
    }

    #[test]
    fn resolves_inherited_points() {
        let points = TimingPoints::resolve(&raw(&[
            (0.0, 500.0),
            (1000.0, -50.0),
            (2000.0, 300.0),
            (3000.0, -200.0),
        ]))
        .unwrap();

        let chronological: Vec<_> = points.chronological().copied().collect();

        assert!(chronological[0].beat_len.eq(500.0));
        assert!(!chronological[0].inherited);
        assert!(chronological[1].beat_len.eq(250.0));
        assert!(chronological[1].slider_velocity.eq(2.0));
        assert!(chronological[1].inherited);
        assert!(chronological[2].beat_len.eq(300.0));
        assert!(chronological[3].beat_len.eq(600.0));
        assert!(chronological[3].slider_velocity.eq(0.5));
        assert!(chronological.iter().all(|point| point.beat_len > 0.0));
    }

    #[test]
    fn stored_latest_first() {
        let points = TimingPoints::resolve(&raw(&[(0.0, 500.0), (1000.0, -50.0), (2000.0, 300.0)]))
            .unwrap();

        let times: Vec<_> = points.iter().map(|point| point.time).collect();

        assert_eq!(times, [2000.0, 1000.0, 0.0]);
    }

    #[test]
    fn pins_first_point() {
        let points = TimingPoints::resolve(&raw(&[(120.0, 500.0), (1000.0, 400.0)])).unwrap();

        assert!(points.first().unwrap().time.eq(0.0));
        assert!(points.at(50.0).unwrap().beat_len.eq(500.0));
    }

    #[test]
    fn lookup() {
        let points = TimingPoints::resolve(&raw(&[(0.0, 500.0), (1000.0, -50.0), (2000.0, 300.0)]))
            .unwrap();

        assert!(points.at(-1.0).is_none());
        assert!(points.at(0.0).unwrap().time.eq(0.0));
        assert!(points.at(999.0).unwrap().time.eq(0.0));
        assert!(points.at(1000.0).unwrap().time.eq(1000.0));
        assert!(points.at(5000.0).unwrap().time.eq(2000.0));
    }

    #[test]
    fn lookup_is_monotonic() {
        let points = TimingPoints::resolve(&raw(&[
            (0.0, 500.0),
            (250.0, -80.0),
            (250.0, -120.0),
            (1000.0, 400.0),
            (1700.0, -50.0),
        ]))
        .unwrap();

        let mut prev = f64::NEG_INFINITY;

        for time in (0..2500).step_by(10).map(f64::from) {
            let curr = points.at(time).unwrap().time;
            assert!(prev <= curr, "{prev} > {curr} at {time}");
            prev = curr;
        }
    }

    #[test]
    fn later_point_wins_on_equal_time() {
        let points =
            TimingPoints::resolve(&raw(&[(0.0, 500.0), (250.0, -80.0), (250.0, -200.0)])).unwrap();

        assert!(points.at(250.0).unwrap().slider_velocity.eq(0.5));
    }

    #[test]
    fn sorts_unordered_input() {
        let points = TimingPoints::resolve(&raw(&[(1000.0, -50.0), (0.0, 400.0)])).unwrap();

        assert!(points.at(1000.0).unwrap().beat_len.eq(200.0));
    }

    #[test]
    fn rejects_empty_and_inherited_first() {
        assert!(matches!(
            TimingPoints::resolve(&[]),
            Err(MalformedChart::NoTimingPoints)
        ));
        assert!(matches!(
            TimingPoints::resolve(&raw(&[(0.0, -100.0)])),
            Err(MalformedChart::InheritedFirstPoint)
        ));
    }
}
