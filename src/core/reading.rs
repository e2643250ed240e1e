use crate::domain::model::SelectedPalette;
use rand::Rng;

// Template buckets keyed by selection size. Every placeholder a template
// uses must be substituted for its bucket below; nothing checks at compile
// time, so keep the sets in sync when adding templates.
const SINGLE_TEMPLATES: [&str; 3] = [
    "Your aura radiates pure {color} energy, signaling deep {trait1} within you. The {chakra} chakra is strongly activated, drawing {keyword1} into your life.",
    "A beautiful {color} light surrounds you, reflecting your {trait1} nature. Your {chakra} chakra speaks of {keyword1} and {keyword2}.",
    "The {color} glow of your {chakra} chakra reveals a soul that is {trait1} and {trait2}. Trust in your natural gift for {keyword1}.",
];

const DUAL_TEMPLATES: [&str; 3] = [
    "Your aura dances between {color1} and {color2}, creating a mesmerizing harmony. The {trait1} energy of your {chakra1} chakra blends beautifully with the {trait2} essence of your {chakra2}.",
    "A stunning blend of {color1} and {color2} surrounds you, revealing both {trait1} and {trait2} aspects of your being. Your {chakra1} and {chakra2} chakras are working in beautiful alignment.",
    "The interplay of {color1} and {color2} in your aura tells a story of {keyword1} meeting {keyword2}. You carry both {trait1} wisdom and {trait2} grace.",
];

const TRIPLE_TEMPLATES: [&str; 2] = [
    "Your aura pulses with the magnificent trinity of {color1}, {color2}, and {color3}. This rare combination speaks to a soul that is {trait1}, {trait2}, and {trait3}.",
    "Three powerful energies converge in your field: the {color1} of {keyword1}, the {color2} of {keyword2}, and the {color3} of {keyword3}. You are a multifaceted being of light.",
];

/// Renders a short reading from the selection with a random template. Only
/// the template choice is random; the substituted content is fixed by the
/// selection.
pub fn synthesize_reading(selection: &SelectedPalette) -> String {
    synthesize_reading_with(selection, &mut rand::rng())
}

/// Same as [`synthesize_reading`] with an injected RNG, for deterministic
/// testing.
pub fn synthesize_reading_with<R: Rng + ?Sized>(selection: &SelectedPalette, rng: &mut R) -> String {
    match selection.len() {
        1 => {
            let template = SINGLE_TEMPLATES[rng.random_range(0..SINGLE_TEMPLATES.len())];
            let color = selection.primary();
            template
                .replacen("{color}", &color.name.to_lowercase(), 1)
                .replacen("{chakra}", color.chakra, 1)
                .replacen("{trait1}", color.traits[0], 1)
                .replacen("{trait2}", color.traits[1], 1)
                .replacen("{keyword1}", color.keywords[0], 1)
                .replacen("{keyword2}", color.keywords[1], 1)
        }
        2 => {
            let template = DUAL_TEMPLATES[rng.random_range(0..DUAL_TEMPLATES.len())];
            let first = selection.primary();
            let second = selection.secondary();
            template
                .replacen("{color1}", &first.name.to_lowercase(), 1)
                .replacen("{color2}", &second.name.to_lowercase(), 1)
                .replacen("{chakra1}", first.chakra, 1)
                .replacen("{chakra2}", second.chakra, 1)
                .replacen("{trait1}", first.traits[0], 1)
                .replacen("{trait2}", second.traits[0], 1)
                .replacen("{keyword1}", first.keywords[0], 1)
                .replacen("{keyword2}", second.keywords[0], 1)
        }
        _ => {
            let template = TRIPLE_TEMPLATES[rng.random_range(0..TRIPLE_TEMPLATES.len())];
            let mut text = template.to_string();
            for (i, entry) in selection.iter().enumerate() {
                let n = i + 1;
                text = text
                    .replacen(&format!("{{color{n}}}"), &entry.name.to_lowercase(), 1)
                    .replacen(&format!("{{trait{n}}}"), entry.traits[0], 1)
                    .replacen(&format!("{{keyword{n}}}"), entry.keywords[0], 1);
            }
            text
        }
    }
}
