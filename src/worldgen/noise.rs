//integer-lattice pseudo noise; all arithmetic wraps as 32 bit signed

const OCTAVES: u32 = 5;
const BASE_AMPLITUDE: f64 = 0.55;
const BASE_FREQUENCY: f64 = 0.004;
const OCTAVE_SEED_STEP: i32 = 97;

/// deterministic noise in (-1, 1], a pure function of its three arguments
pub fn noise(x: i32, y: i32, seed: i32) -> f64 {
    let n = x.wrapping_mul(73_856_093) ^ y.wrapping_mul(19_349_663) ^ seed;
    let n = (n << 13) ^ n;
    let n = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(15_731).wrapping_add(789_221))
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff;
    1.0 - n as f64 / 1_073_741_824.0
}

/// fractal height from summed noise octaves, roughly in [0, 0.6]
pub struct HeightField {
    seed: i32,
}

impl HeightField {
    pub fn new(seed: i32) -> Self {
        HeightField { seed: seed }
    }

    pub fn height_at(&self, tx: i32, ty: i32) -> f64 {
        let mut height = 0.0;
        let mut amplitude = BASE_AMPLITUDE;
        let mut frequency = BASE_FREQUENCY;
        for octave in 0..OCTAVES {
            let seed = self.seed.wrapping_add(OCTAVE_SEED_STEP * octave as i32);
            //quantize so the noise stays purely integer; truncation toward
            //zero sets the frequency content and must not change
            let nx = (tx as f64 * frequency * 10_000.0) as i32;
            let ny = (ty as f64 * frequency * 10_000.0) as i32;
            height += amplitude * (noise(nx, ny, seed) * 0.5 + 0.5);
            amplitude *= 0.5;
            frequency *= 2.0;
        }
        height
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn repeatable() {
        for x in -20..20 {
            for y in -20..20 {
                assert_eq!(noise(x, y, 12345), noise(x, y, 12345));
            }
        }
        let field = HeightField::new(12345);
        assert_eq!(field.height_at(1000, -3), field.height_at(1000, -3));
    }

    #[test]
    fn in_range() {
        for x in -50..50 {
            for y in -50..50 {
                let n = noise(x * 31, y * 17, 12345);
                assert!(n > -1.0 - 1e-9 && n <= 1.0, "noise out of range: {}", n);
            }
        }
    }

    #[test]
    fn depends_on_every_argument() {
        let base = noise(10, 20, 12345);
        assert!((0..100).any(|i| noise(10 + i, 20, 12345) != base));
        assert!((0..100).any(|i| noise(10, 20 + i, 12345) != base));
        assert!((0..100).any(|i| noise(10, 20, 12345 + i) != base));
    }

    #[test]
    fn height_bounds() {
        //amplitude schedule sums to just over 1.06, so heights stay under that
        let field = HeightField::new(12345);
        for x in 0..64 {
            for y in 0..64 {
                let h = field.height_at(x * 97, y * 53);
                assert!(h >= 0.0 && h < 1.07, "height out of range: {}", h);
            }
        }
    }

    #[test]
    fn seeds_decorrelate() {
        let a = HeightField::new(12345);
        let b = HeightField::new(54321);
        assert!((0..50).any(|i| a.height_at(i, i) != b.height_at(i, i)));
    }
}
