//! 2D gradient noise and fractal Brownian motion.
//!
//! Uses a fixed permutation table rather than a seeded one so that terrain
//! heights are reproducible across runs and builds.

/// Classic Perlin permutation of 0..=255.
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Permutation mirrored to 512 entries so `P[i + 1]` never needs wrapping.
const P: [u8; 512] = mirrored(PERMUTATION);

const fn mirrored(perm: [u8; 256]) -> [u8; 512] {
    let mut out = [0u8; 512];
    let mut i = 0;
    while i < 256 {
        out[i] = perm[i];
        out[i + 256] = perm[i];
        i += 1;
    }
    out
}

/// The 12 edge gradients of a cube; only x and y take part in 2D noise.
const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0], [-1.0, 1.0, 0.0], [1.0, -1.0, 0.0], [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [1.0, 0.0, -1.0], [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0], [0.0, -1.0, 1.0], [0.0, 1.0, -1.0], [0.0, -1.0, -1.0],
];

#[inline]
fn dot(g: &[f64; 3], x: f64, y: f64) -> f64 {
    g[0] * x + g[1] * y
}

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[inline]
fn gradient(hash: u8) -> &'static [f64; 3] {
    &GRAD3[hash as usize % 12]
}

/// 2D Perlin noise. Returns a value in `[-1, 1]`; exactly 0 on integer lattice points.
pub fn noise2d(x: f64, y: f64) -> f64 {
    let fx = x.floor();
    let fy = y.floor();
    // Two's complement wrap keeps negative coordinates in 0..=255
    let xi = (fx as i64 & 255) as usize;
    let yi = (fy as i64 & 255) as usize;

    let x = x - fx;
    let y = y - fy;

    let u = fade(x);
    let v = fade(y);

    let a = P[xi] as usize + yi;
    let b = P[xi + 1] as usize + yi;

    let n00 = dot(gradient(P[a]), x, y);
    let n10 = dot(gradient(P[b]), x - 1.0, y);
    let n01 = dot(gradient(P[a + 1]), x, y - 1.0);
    let n11 = dot(gradient(P[b + 1]), x - 1.0, y - 1.0);

    lerp(lerp(n00, n10, u), lerp(n01, n11, u), v)
}

/// Parameters for fractal Brownian motion
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FbmParams {
    pub octaves: u32,     // Noise layers
    pub lacunarity: f64,  // Frequency multiplier per octave
    pub persistence: f64, // Amplitude multiplier per octave
}

impl Default for FbmParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

impl FbmParams {
    /// Default lacunarity and persistence with a custom octave count
    pub fn with_octaves(octaves: u32) -> Self {
        Self {
            octaves,
            ..Default::default()
        }
    }
}

/// Sum of `octaves` noise layers, normalized by total amplitude so the result stays in `[-1, 1]`.
///
/// Zero octaves yields 0.0.
pub fn fbm(x: f64, y: f64, octaves: u32, lacunarity: f64, persistence: f64) -> f64 {
    let mut value = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_value = 0.0;

    for _ in 0..octaves {
        value += noise2d(x * frequency, y * frequency) * amplitude;
        max_value += amplitude;
        amplitude *= persistence;
        frequency *= lacunarity;
    }

    if max_value == 0.0 {
        return 0.0;
    }
    value / max_value
}

/// [`fbm`] with a parameter struct
pub fn fbm_with(x: f64, y: f64, params: FbmParams) -> f64 {
    fbm(x, y, params.octaves, params.lacunarity, params.persistence)
}
