/// Sample an endlessly repeating linear keyframe track.
///
/// Keyframes are evenly spaced over `duration_sec`. The first value is held
/// until `delay_sec` has elapsed; the delay applies once, not per cycle.
pub fn sample_looped(values: &[f32], duration_sec: f32, delay_sec: f32, elapsed_sec: f32) -> f32 {
    let (first, last_index) = match values {
        [] => return 0.0,
        [only] => return *only,
        [first, ..] => (*first, values.len() - 1),
    };
    if duration_sec <= 0.0 || elapsed_sec <= delay_sec {
        return first;
    }
    let t = ((elapsed_sec - delay_sec) % duration_sec) / duration_sec;
    let pos = t * last_index as f32;
    let i = (pos.floor() as usize).min(last_index - 1);
    let frac = pos - i as f32;
    values[i] + (values[i + 1] - values[i]) * frac
}
