use super::{hash_block_pos, PolarGaussian, RandomDeriverImpl, RandomImpl};

pub struct Xoroshiro {
    seed: XoroshiroSeed,
    gaussian_cache: Option<f64>,
}

impl Xoroshiro {
    fn new(lo: i64, hi: i64) -> Self {
        if (lo | hi) == 0 {
            return Self {
                seed: XoroshiroSeed {
                    lo: -7046029254386353131i64,
                    hi: 7640891576956012809i64,
                },
                gaussian_cache: None,
            };
        }
        Self {
            seed: XoroshiroSeed { lo, hi },
            gaussian_cache: None,
        }
    }

    fn next(&mut self, bits: u64) -> u64 {
        (self.seed.next() as u64) >> (64 - bits)
    }
}

impl PolarGaussian for Xoroshiro {
    fn gaussian_cache(&mut self) -> &mut Option<f64> {
        &mut self.gaussian_cache
    }
}

impl RandomImpl for Xoroshiro {
    fn from_seed(seed: u64) -> Self {
        let seed = XoroshiroSeed::mixed_seed(seed as i64);
        Self::new(seed.lo, seed.hi)
    }

    fn split(&mut self) -> Self {
        Self::new(self.seed.next(), self.seed.next())
    }

    #[allow(refining_impl_trait)]
    fn next_splitter(&mut self) -> XoroshiroSplitter {
        XoroshiroSplitter {
            lo: self.seed.next(),
            hi: self.seed.next(),
        }
    }

    fn next_i32(&mut self) -> i32 {
        self.seed.next() as i32
    }

    fn next_bounded_i32(&mut self, bound: i32) -> i32 {
        let mut l = (self.next_i32() as u64) & 0xFFFFFFFF;
        let mut m = l.wrapping_mul(bound as u64);
        let mut n = m & 4294967295u64;
        if n < bound as u64 {
            let i = (((!bound).wrapping_add(1)) as u64) % (bound as u64);
            while n < i {
                l = self.next_i32() as u64;
                m = l.wrapping_mul(bound as u64);
                n = m & 4294967295u64;
            }
        }
        let o = m >> 32;
        o as i32
    }

    fn next_i64(&mut self) -> i64 {
        self.seed.next()
    }

    fn next_bool(&mut self) -> bool {
        (self.seed.next() & 1) != 0
    }

    fn next_f32(&mut self) -> f32 {
        self.next(24) as f32 * 5.9604645E-8f32
    }

    fn next_f64(&mut self) -> f64 {
        self.next(53) as f64 * 1.110223E-16f32 as f64
    }

    fn next_gaussian(&mut self) -> f64 {
        self.polar_gaussian()
    }

    fn skip(&mut self, count: i32) {
        for _ in 0..count {
            self.seed.next();
        }
    }
}

struct XoroshiroSeed {
    lo: i64,
    hi: i64,
}

fn mix_stafford_13(seed: i64) -> i64 {
    let seed = (seed ^ ((seed as u64) >> 30) as i64).wrapping_mul(-4658895280553007687i64);
    let seed = (seed ^ ((seed as u64) >> 27) as i64).wrapping_mul(-7723592293110705685i64);
    seed ^ ((seed as u64) >> 31) as i64
}

impl XoroshiroSeed {
    fn split(&self, lo: i64, hi: i64) -> Self {
        Self {
            lo: self.lo ^ lo,
            hi: self.hi ^ hi,
        }
    }

    fn mix(&self) -> Self {
        Self {
            lo: mix_stafford_13(self.lo),
            hi: mix_stafford_13(self.hi),
        }
    }

    fn next(&mut self) -> i64 {
        let l = self.lo;
        let m = self.hi;
        let n = l.wrapping_add(m).rotate_left(17).wrapping_add(l);
        let o = m ^ l;
        self.lo = l.rotate_left(49) ^ o ^ (o << 21);
        self.hi = o.rotate_left(28);
        n
    }

    fn unmixed_seed(seed: i64) -> Self {
        let l = seed ^ 7640891576956012809i64;
        let m = l.wrapping_add(-7046029254386353131i64);
        Self { lo: l, hi: m }
    }

    fn mixed_seed(seed: i64) -> Self {
        Self::unmixed_seed(seed).mix()
    }
}

#[derive(Clone)]
pub struct XoroshiroSplitter {
    lo: i64,
    hi: i64,
}

impl RandomDeriverImpl for XoroshiroSplitter {
    #[allow(refining_impl_trait)]
    fn split_pos(&self, x: i32, y: i32, z: i32) -> Xoroshiro {
        let l = hash_block_pos(x, y, z);
        let m = l ^ self.lo;
        Xoroshiro::new(m, self.hi)
    }

    #[allow(refining_impl_trait)]
    fn split_u64(&self, seed: u64) -> Xoroshiro {
        Xoroshiro::new(seed as i64 ^ self.lo, seed as i64 ^ self.hi)
    }

    #[allow(refining_impl_trait)]
    fn split_string(&self, seed: &str) -> Xoroshiro {
        let bytes = md5::compute(seed.as_bytes());
        let l = i64::from_be_bytes(bytes[0..8].try_into().unwrap());
        let m = i64::from_be_bytes(bytes[8..16].try_into().unwrap());

        let new_seed = XoroshiroSeed { lo: l, hi: m }.split(self.lo, self.hi);
        Xoroshiro::new(new_seed.lo, new_seed.hi)
    }
}
