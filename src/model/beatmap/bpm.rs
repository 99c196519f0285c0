use std::iter;

use crate::model::control_point::{TimingPoint, TimingPoints};

/// The BPM whose uninherited timing points govern the largest share of the
/// map, used as baseline for osu!mania scroll speed.
///
/// The last uninherited point spans until `last_time`, usually the start
/// time of the last hit object.
pub fn main_bpm(timing_points: &TimingPoints, last_time: f64) -> f64 {
    let uninherited: Vec<&TimingPoint> = timing_points
        .chronological()
        .filter(|point| !point.inherited)
        .collect();

    let mut bpm_points = BeatLenDuration::new(last_time);

    let next_times = uninherited
        .iter()
        .skip(1)
        .map(|point| point.time)
        .chain(iter::once(last_time));

    uninherited
        .iter()
        .zip(next_times)
        .for_each(|(curr, next_time)| bpm_points.add(curr.beat_len, curr.time, next_time));

    let beat_len = bpm_points
        .most_common()
        .or_else(|| uninherited.first().map(|point| point.beat_len))
        .unwrap_or(TimingPoint::DEFAULT_BEAT_LEN);

    60_000.0 / beat_len
}

/// Maps `beat_len` to a cumulative duration.
///
/// Entries keep insertion order so that ties resolve to the earliest
/// beat length.
struct BeatLenDuration {
    last_time: f64,
    entries: Vec<(f64, f64)>,
}

impl BeatLenDuration {
    const fn new(last_time: f64) -> Self {
        Self {
            last_time,
            entries: Vec::new(),
        }
    }

    fn add(&mut self, beat_len: f64, curr_time: f64, next_time: f64) {
        let beat_len = (1000.0 * beat_len).round() / 1000.0;

        let idx = match self
            .entries
            .iter()
            .position(|(entry, _)| entry.to_bits() == beat_len.to_bits())
        {
            Some(idx) => idx,
            None => {
                self.entries.push((beat_len, 0.0));

                self.entries.len() - 1
            }
        };

        if curr_time <= self.last_time {
            self.entries[idx].1 += next_time - curr_time;
        }
    }

    fn most_common(&self) -> Option<f64> {
        self.entries
            .iter()
            .fold(None, |best: Option<(f64, f64)>, &(beat_len, duration)| match best {
                Some((_, best_duration)) if best_duration >= duration => best,
                _ if duration > 0.0 => Some((beat_len, duration)),
                _ => best,
            })
            .map(|(beat_len, _)| beat_len)
    }
}
