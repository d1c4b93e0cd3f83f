use rand::Rng;

/// Fallback color for appointments without a resolvable resource: a random
/// translucent RGBA with uniform 0..=255 channels and fixed 0.4 alpha.
pub fn random_translucent_color() -> String {
    let mut rng = rand::rng();
    let r: u8 = rng.random_range(0..=255);
    let g: u8 = rng.random_range(0..=255);
    let b: u8 = rng.random_range(0..=255);
    format!("rgba({r},{g},{b},0.4)")
}
