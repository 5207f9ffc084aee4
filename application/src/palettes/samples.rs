use rand::Rng;

use domain::color::ColorKey;
use domain::library::{PaletteId, SavedPalette};

const SAMPLE_PALETTES: [(&str, &str, usize); 4] = [
    ("1", "Vivid Tones", 5),
    ("2", "Sunset Glow", 4),
    ("3", "Ocean Dreams", 3),
    ("4", "Warm Memories", 5),
];

pub fn random_sample_palettes<R: Rng>(rng: &mut R) -> Vec<SavedPalette> {
    SAMPLE_PALETTES
        .iter()
        .map(|&(id, name, color_count)| {
            let colors = (0..color_count)
                .map(|_| ColorKey::from_rgb(rng.random(), rng.random(), rng.random()))
                .collect();
            SavedPalette::new(PaletteId::from(id), colors, Some(name.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn builds_four_named_palettes() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = random_sample_palettes(&mut rng);

        let summary: Vec<(&str, &str, usize)> = samples
            .iter()
            .map(|palette| (palette.id.as_str(), palette.display_name(), palette.colors.len()))
            .collect();

        assert_eq!(summary, SAMPLE_PALETTES.to_vec());
    }
}
