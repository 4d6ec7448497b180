//! Continuous scales: linear, base-10 logarithmic and square-root.
//!
//! Tick generation follows d3-scale so axes read the way the classic chart does.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn normalize(a: f64, b: f64, x: f64) -> f64 {
    let d = b - a;
    if d == 0.0 { 0.5 } else { (x - a) / d }
}

/// Affine map between a domain and a range, optionally clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
    clamp: bool,
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self {
            domain,
            range,
            clamp: false,
        }
    }

    /// Clamp outputs of both [`apply`](Self::apply) and [`invert`](Self::invert) to their
    /// intervals.
    pub fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    pub fn apply(&self, x: f64) -> f64 {
        let mut t = normalize(self.domain[0], self.domain[1], x);
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        lerp(self.range[0], self.range[1], t)
    }

    pub fn invert(&self, y: f64) -> f64 {
        let mut t = normalize(self.range[0], self.range[1], y);
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        lerp(self.domain[0], self.domain[1], t)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain[0], self.domain[1], count)
    }

    /// Spacing between consecutive [`ticks`](Self::ticks), used for label precision.
    pub fn tick_step(&self, count: usize) -> f64 {
        let (lo, hi) = ordered(self.domain[0], self.domain[1]);
        tick_step(lo, hi, count)
    }
}

/// `log10` map from a strictly positive domain to a range.
///
/// Non-positive inputs have no image and map to NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LogScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn apply(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return f64::NAN;
        }
        let t = normalize(
            self.domain[0].log10(),
            self.domain[1].log10(),
            x.log10(),
        );
        lerp(self.range[0], self.range[1], t)
    }

    pub fn invert(&self, y: f64) -> f64 {
        let t = normalize(self.range[0], self.range[1], y);
        10f64.powf(lerp(self.domain[0].log10(), self.domain[1].log10(), t))
    }

    /// Ticks at 1..9 multiples of each power of ten when the domain spans fewer decades than
    /// `count`, otherwise at evenly spaced powers.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (u, v) = ordered(self.domain[0], self.domain[1]);
        let reversed = self.domain[1] < self.domain[0];
        let n = count as f64;
        let i = u.log10();
        let j = v.log10();

        let mut z = Vec::new();
        if j - i < n {
            for p in (i.floor() as i32)..=(j.ceil() as i32) {
                for k in 1..10 {
                    let t = f64::from(k) * 10f64.powi(p);
                    if t < u {
                        continue;
                    }
                    if t > v {
                        break;
                    }
                    z.push(t);
                }
            }
            if z.len() * 2 < count {
                z = linear_ticks(u, v, count);
            }
        } else {
            let c = (j - i).min(n).max(0.0) as usize;
            z = linear_ticks(i, j, c)
                .into_iter()
                .map(|e| 10f64.powf(e))
                .collect();
        }

        if reversed {
            z.reverse();
        }
        z
    }

    /// Label for a tick, or `None` when the tick should stay unlabeled.
    ///
    /// Thinning keeps labels whose leading digit is at most `k = max(1, 10 * count / n)`, where
    /// `n` is the number of default (`count = 10`) ticks.
    pub fn tick_label(&self, value: f64, count: usize) -> Option<String> {
        let n = self.ticks(10).len().max(1) as f64;
        let k = (10.0 * count as f64 / n).max(1.0);

        let mut lead = value / 10f64.powf(value.log10().round());
        if lead * 10.0 < 10.0 - 0.5 {
            lead *= 10.0;
        }
        (lead <= k).then(|| format_thousands(value))
    }
}

/// Square-root scale (power scale with exponent 0.5).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl SqrtScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, x: f64) -> f64 {
        let t = normalize(
            signed_sqrt(self.domain[0]),
            signed_sqrt(self.domain[1]),
            signed_sqrt(x),
        );
        lerp(self.range[0], self.range[1], t)
    }
}

fn signed_sqrt(x: f64) -> f64 {
    if x < 0.0 { -(-x).sqrt() } else { x.sqrt() }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Decimal exponent and 1/2/5/10 factor of the step yielding about `count` ticks.
fn tick_spec(start: f64, stop: f64, count: usize) -> Option<(i32, f64)> {
    let step = (stop - start) / (count.max(1) as f64);
    if !(step > 0.0) || !step.is_finite() {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    Some((power as i32, factor))
}

fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    match tick_spec(start, stop, count) {
        Some((power, factor)) => 10f64.powi(power) * factor,
        None => 0.0,
    }
}

/// Nicely rounded ticks within `[start, stop]` (either order).
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = ordered(start, stop);
    let Some((power, factor)) = tick_spec(lo, hi, count) else {
        return Vec::new();
    };

    // Negative exponents divide by the inverse step so values like 0.3 stay exact.
    let mut out = Vec::new();
    if power < 0 {
        let inc = 10f64.powi(-power) / factor;
        let mut i1 = (lo * inc).round();
        let mut i2 = (hi * inc).round();
        if i1 / inc < lo {
            i1 += 1.0;
        }
        if i2 / inc > hi {
            i2 -= 1.0;
        }
        let mut i = i1;
        while i <= i2 {
            out.push(i / inc);
            i += 1.0;
        }
    } else {
        let inc = 10f64.powi(power) * factor;
        let mut i1 = (lo / inc).round();
        let mut i2 = (hi / inc).round();
        if i1 * inc < lo {
            i1 += 1.0;
        }
        if i2 * inc > hi {
            i2 -= 1.0;
        }
        let mut i = i1;
        while i <= i2 {
            out.push(i * inc);
            i += 1.0;
        }
    }

    if stop < start {
        out.reverse();
    }
    out
}

/// Label precision for linear ticks spaced `step` apart.
pub fn format_linear_tick(v: f64, step: f64) -> String {
    if step >= 0.95 {
        format!("{v:.0}")
    } else if step >= 0.095 {
        format!("{v:.1}")
    } else if step >= 0.0095 {
        format!("{v:.2}")
    } else {
        format!("{v:.3}")
    }
}

/// Round to an integer and group thousands with commas (`12345.6` → `"12,346"`).
pub fn format_thousands(v: f64) -> String {
    let n = v.round() as i64;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scale/continuous.rs"]
mod tests;
