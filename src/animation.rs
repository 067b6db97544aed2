//! Animation curves
//!
//! Pure functions of elapsed time. Front ends sample a frame each repaint
//! and apply opacity/offset/scale to whatever they are drawing.

use std::f32::consts::TAU;
use std::time::Duration;

/// Default transition length
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);
/// Page-load slide-up length
pub const PAGE_LOAD_DURATION: Duration = Duration::from_millis(600);
/// Delay between consecutive elements on page load
pub const STAGGER_STEP: Duration = Duration::from_millis(100);
/// Rise distance of slide-up, in points
pub const SLIDE_UP_DISTANCE: f32 = 20.0;

/// A sampled animation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
    /// Radians
    pub rotation: f32,
}

impl AnimationFrame {
    pub const REST: AnimationFrame = AnimationFrame {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
        rotation: 0.0,
    };

    /// Opacity as an 8-bit alpha
    pub fn alpha(&self) -> u8 {
        (self.opacity.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl Default for AnimationFrame {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    FadeIn { duration: Duration },
    SlideUp { duration: Duration },
    /// Enter from the right by `distance` points
    SlideInRight { duration: Duration, distance: f32 },
    /// Leave to the right by `distance` points
    SlideOutRight { duration: Duration, distance: f32 },
    Bounce,
    Shake,
    /// Infinite
    Pulse,
    /// Infinite, one turn per second
    Spin,
}

impl Animation {
    pub fn fade_in() -> Self {
        Animation::FadeIn {
            duration: DEFAULT_DURATION,
        }
    }

    pub fn slide_up() -> Self {
        Animation::SlideUp {
            duration: DEFAULT_DURATION,
        }
    }

    /// Length of one run; `None` for looping animations
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Animation::FadeIn { duration }
            | Animation::SlideUp { duration }
            | Animation::SlideInRight { duration, .. }
            | Animation::SlideOutRight { duration, .. } => Some(*duration),
            Animation::Bounce => Some(Duration::from_millis(600)),
            Animation::Shake => Some(Duration::from_millis(500)),
            Animation::Pulse | Animation::Spin => None,
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.duration().is_some_and(|d| elapsed >= d)
    }

    /// Sample the animation `elapsed` after it started
    pub fn frame(&self, elapsed: Duration) -> AnimationFrame {
        let mut frame = AnimationFrame::REST;
        match *self {
            Animation::FadeIn { duration } => {
                frame.opacity = ease(progress(elapsed, duration));
            }
            Animation::SlideUp { duration } => {
                let t = ease(progress(elapsed, duration));
                frame.opacity = t;
                frame.offset_y = SLIDE_UP_DISTANCE * (1.0 - t);
            }
            Animation::SlideInRight { duration, distance } => {
                let t = ease(progress(elapsed, duration));
                frame.opacity = t;
                frame.offset_x = distance * (1.0 - t);
            }
            Animation::SlideOutRight { duration, distance } => {
                let t = ease(progress(elapsed, duration));
                frame.opacity = 1.0 - t;
                frame.offset_x = distance * t;
            }
            Animation::Bounce => {
                let t = progress(elapsed, Duration::from_millis(600));
                frame.offset_y = keyframes(
                    &[
                        (0.0, 0.0),
                        (0.2, 0.0),
                        (0.4, -30.0),
                        (0.43, -30.0),
                        (0.53, 0.0),
                        (0.7, -15.0),
                        (0.8, 0.0),
                        (0.9, -4.0),
                        (1.0, 0.0),
                    ],
                    t,
                );
            }
            Animation::Shake => {
                let t = progress(elapsed, Duration::from_millis(500));
                frame.offset_x = keyframes(
                    &[
                        (0.0, 0.0),
                        (0.1, -10.0),
                        (0.2, 10.0),
                        (0.3, -10.0),
                        (0.4, 10.0),
                        (0.5, -10.0),
                        (0.6, 10.0),
                        (0.7, -10.0),
                        (0.8, 10.0),
                        (0.9, -10.0),
                        (1.0, 0.0),
                    ],
                    t,
                );
            }
            Animation::Pulse => {
                let t = cycle(elapsed, Duration::from_secs(2));
                frame.scale = keyframes(&[(0.0, 1.0), (0.5, 1.05), (1.0, 1.0)], t);
            }
            Animation::Spin => {
                frame.rotation = cycle(elapsed, Duration::from_secs(1)) * TAU;
            }
        }
        frame
    }
}

/// Page-load stagger: element `index` runs a slide-up after `index * 100ms`
pub fn staggered_slide_up(index: usize, elapsed: Duration) -> AnimationFrame {
    let delay = STAGGER_STEP * index as u32;
    match elapsed.checked_sub(delay) {
        Some(local) => Animation::SlideUp {
            duration: PAGE_LOAD_DURATION,
        }
        .frame(local),
        None => AnimationFrame {
            opacity: 0.0,
            offset_y: SLIDE_UP_DISTANCE,
            ..AnimationFrame::REST
        },
    }
}

/// True once every one of `count` staggered elements has settled
pub fn stagger_finished(count: usize, elapsed: Duration) -> bool {
    let last = STAGGER_STEP * count.saturating_sub(1) as u32 + PAGE_LOAD_DURATION;
    elapsed >= last
}

fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

fn cycle(elapsed: Duration, period: Duration) -> f32 {
    let period = period.as_secs_f32();
    (elapsed.as_secs_f32() % period) / period
}

/// Piecewise-linear interpolation over `(t, value)` stops sorted by `t`
fn keyframes(stops: &[(f32, f32)], t: f32) -> f32 {
    let Some(&(first_t, first_v)) = stops.first() else {
        return 0.0;
    };
    if t <= first_t {
        return first_v;
    }
    for pair in stops.windows(2) {
        let (t0, v0) = pair[0];
        let (t1, v1) = pair[1];
        if t <= t1 {
            if t1 <= t0 {
                return v1;
            }
            return v0 + (v1 - v0) * (t - t0) / (t1 - t0);
        }
    }
    stops.last().map_or(0.0, |&(_, v)| v)
}

/// CSS `ease`, i.e. cubic-bezier(0.25, 0.1, 0.25, 1.0)
pub fn ease(t: f32) -> f32 {
    cubic_bezier(0.25, 0.1, 0.25, 1.0, t)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    if x == 0.0 || x == 1.0 {
        return x;
    }

    let bezier = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let bezier_slope = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    // Newton-Raphson on the x curve, then bisection if the slope flattens.
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < 1e-5 {
            return bezier(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = bezier(x1, x2, s);
        if (value - x).abs() < 1e-5 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_ease_endpoints_and_monotonic() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        let mut last = 0.0;
        for i in 1..=20 {
            let v = ease(i as f32 / 20.0);
            assert!(v >= last);
            last = v;
        }
        // CSS ease runs ahead of linear around the middle
        assert!(ease(0.5) > 0.7);
    }

    #[test]
    fn test_fade_in() {
        let anim = Animation::fade_in();
        assert_eq!(anim.frame(ms(0)).opacity, 0.0);
        assert_eq!(anim.frame(ms(300)).opacity, 1.0);
        assert!(anim.is_finished(ms(300)));
        assert!(!anim.is_finished(ms(299)));
    }

    #[test]
    fn test_slide_in_right_settles_at_rest() {
        let anim = Animation::SlideInRight {
            duration: ms(300),
            distance: 350.0,
        };
        let start = anim.frame(ms(0));
        assert_eq!(start.offset_x, 350.0);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(anim.frame(ms(400)), AnimationFrame::REST);
    }

    #[test]
    fn test_bounce_peak() {
        let frame = Animation::Bounce.frame(ms(240));
        assert!((frame.offset_y + 30.0).abs() < 0.01);
        assert_eq!(Animation::Bounce.frame(ms(600)).offset_y, 0.0);
    }

    #[test]
    fn test_shake_alternates() {
        assert!((Animation::Shake.frame(ms(50)).offset_x + 10.0).abs() < 0.01);
        assert!((Animation::Shake.frame(ms(100)).offset_x - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_looping_animations_never_finish() {
        assert!(!Animation::Pulse.is_finished(ms(60_000)));
        assert!(!Animation::Spin.is_finished(ms(60_000)));
        let pulse = Animation::Pulse.frame(ms(1000));
        assert!((pulse.scale - 1.05).abs() < 0.001);
    }

    #[test]
    fn test_stagger() {
        let hidden = staggered_slide_up(3, ms(250));
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.offset_y, SLIDE_UP_DISTANCE);

        assert_eq!(staggered_slide_up(3, ms(900)), AnimationFrame::REST);
        assert!(!stagger_finished(4, ms(899)));
        assert!(stagger_finished(4, ms(900)));
        assert!(stagger_finished(0, ms(600)));
    }

    #[test]
    fn test_alpha() {
        assert_eq!(AnimationFrame::REST.alpha(), 255);
        let faded = AnimationFrame {
            opacity: 0.0,
            ..AnimationFrame::REST
        };
        assert_eq!(faded.alpha(), 0);
    }
}
