use smallvec::SmallVec;

/// Default number of ticks requested for the value axis.
pub const DEFAULT_TICK_COUNT: usize = 5;

pub type TickValues = SmallVec<[f64; 12]>;

/// Returns "nice" tick values (1, 2 or 5 times a power of ten) covering
/// `[start, end]`, roughly `count` of them.
///
/// A zero-width or non-finite extent yields the single value `start`.
#[must_use]
pub fn nice_ticks(start: f64, end: f64, count: usize) -> TickValues {
    let mut ticks = TickValues::new();
    let Some(step) = nice_step(start, end, count) else {
        if start.is_finite() {
            ticks.push(start);
        }
        return ticks;
    };

    let (low, high) = if start <= end { (start, end) } else { (end, start) };
    let first = (low / step - 1e-9).ceil();
    let last = (high / step + 1e-9).floor();
    let mut index = first;
    while index <= last {
        ticks.push(index * step);
        index += 1.0;
    }
    ticks
}

/// Tick spacing used by [`nice_ticks`].
#[must_use]
pub fn nice_step(start: f64, end: f64, count: usize) -> Option<f64> {
    let span = (end - start).abs();
    if !span.is_finite() || span == 0.0 || count == 0 {
        return None;
    }

    let target = span / count as f64;
    let mut step = 10f64.powf(target.log10().floor());
    let error = count as f64 / span * step;
    if error <= 0.15 {
        step *= 10.0;
    } else if error <= 0.35 {
        step *= 5.0;
    } else if error <= 0.75 {
        step *= 2.0;
    }
    Some(step)
}

/// Formats a tick with just enough decimals for its step.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-(step.log10() + 0.01).floor()).max(0.0) as usize
    } else {
        0
    };
    let formatted = format!("{value:.decimals$}");
    if formatted.starts_with('-') && formatted.trim_start_matches(['-', '0', '.']).is_empty() {
        formatted[1..].to_owned()
    } else {
        formatted
    }
}
