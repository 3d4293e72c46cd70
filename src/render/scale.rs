//! Value-to-color interpolation over multi-stop gradients.

use crate::theme::Rgb;

/// Linear interpolation between two colors, t in [0, 1].
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
    Rgb::new(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Sample a piecewise-linear gradient at `value` over `domain`.
/// Values outside the domain clamp to the end stops.
pub fn sample_gradient(stops: &[Rgb], domain: [f64; 2], value: f64) -> Rgb {
    match stops {
        [] => Rgb::new(0, 0, 0),
        [only] => *only,
        _ => {
            let span = domain[1] - domain[0];
            let t = if span == 0.0 {
                0.0
            } else {
                ((value - domain[0]) / span).clamp(0.0, 1.0)
            };
            let scaled = t * (stops.len() - 1) as f64;
            let idx = (scaled.floor() as usize).min(stops.len() - 2);
            lerp_rgb(stops[idx], stops[idx + 1], scaled - idx as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOPS: [Rgb; 3] = [Rgb::new(0, 0, 0), Rgb::new(100, 100, 100), Rgb::new(200, 0, 200)];

    #[test]
    fn test_gradient_hits_the_stops() {
        assert_eq!(sample_gradient(&STOPS, [0.0, 10.0], 0.0), STOPS[0]);
        assert_eq!(sample_gradient(&STOPS, [0.0, 10.0], 5.0), STOPS[1]);
        assert_eq!(sample_gradient(&STOPS, [0.0, 10.0], 10.0), STOPS[2]);
    }

    #[test]
    fn test_gradient_clamps_outside_the_domain() {
        assert_eq!(sample_gradient(&STOPS, [20.0, 100.0], 5.0), STOPS[0]);
        assert_eq!(sample_gradient(&STOPS, [20.0, 100.0], 250.0), STOPS[2]);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = lerp_rgb(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), 0.5);
        assert_eq!(mid, Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_degenerate_domain_uses_low_stop() {
        assert_eq!(sample_gradient(&STOPS, [7.0, 7.0], 7.0), STOPS[0]);
    }
}
