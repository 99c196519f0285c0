use super::TimingPoints;

impl TimingPoints {
    /// Tempo- and slider-velocity-normalized distance between two points in
    /// time.
    ///
    /// Every timing segment intersecting `[from, to]` contributes its span
    /// weighted by its BPM relative to `main_bpm` and by the active slider
    /// velocity. Equal BPM and velocity thus yield equal scroll speed. An
    /// uninherited point does not reset the velocity.
    ///
    /// The result is negative if `from` lies after `to`.
    pub fn scroll_offset(&self, from: f64, to: f64, main_bpm: f64) -> f64 {
        let mut total = 0.0;
        let mut last_time = 0.0_f64;
        let mut current_bpm = self.first().map_or(main_bpm, |point| point.bpm());
        let mut current_sv = 1.0;

        for point in self.chronological() {
            if point.time > to {
                break;
            }

            if point.time > from {
                let bpm_factor = current_bpm / main_bpm;
                total += bpm_factor * current_sv * (point.time - last_time.max(from));
            }

            if point.inherited {
                current_sv = point.slider_velocity;
            } else {
                current_bpm = point.bpm();
            }

            last_time = point.time;
        }

        if last_time < to {
            let bpm_factor = current_bpm / main_bpm;
            total += bpm_factor * current_sv * (to - last_time.max(from));
        }

        total
    }
}
