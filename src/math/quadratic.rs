/// Solution of `a·t² + b·t + c = 0`.
///
/// `roots` is `Some((t1, t2))` with `t1 = (-b + √delta) / 2a` and
/// `t2 = (-b - √delta) / 2a` whenever `delta >= 0`. For `a > 0` this gives
/// `t1 >= t2`. `a == 0` is not special-cased.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quadratic {
    pub delta: f32,
    pub roots: Option<(f32, f32)>,
}

impl Quadratic {
    pub fn solve(a: f32, b: f32, c: f32) -> Quadratic {
        let delta = b * b - 4.0 * a * c;
        if delta < 0.0 {
            return Quadratic { delta, roots: None };
        }
        let delta_sqrt = delta.sqrt();
        Quadratic {
            delta,
            roots: Some(((-b + delta_sqrt) / (2.0 * a), (-b - delta_sqrt) / (2.0 * a))),
        }
    }
}
