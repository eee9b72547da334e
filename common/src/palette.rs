//! Segment colours for the wheel.

use rand::Rng;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A random `#RRGGBB` colour with uppercase hex digits.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut color = String::with_capacity(7);
    color.push('#');
    for _ in 0..6 {
        color.push(HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char);
    }
    color
}

pub fn random_colors<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
    (0..count).map(|_| random_color(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn colors_are_hex_triplets() {
        let mut rng = StdRng::seed_from_u64(7);
        let colors = random_colors(50, &mut rng);
        assert_eq!(colors.len(), 50);
        for color in &colors {
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(
                color[1..]
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
            );
        }
    }

    #[test]
    fn zero_segments_zero_colors() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_colors(0, &mut rng).is_empty());
    }
}
