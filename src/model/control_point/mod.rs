pub use self::timing::{RawTimingPoint, TimingPoint, TimingPoints};

mod scroll;
mod timing;
