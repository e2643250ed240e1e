use serde::Serialize;

/// One entry of the fixed chakra catalog. All fields are static data; the
/// catalog is never mutated at runtime.
#[derive(Debug, Serialize)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub chakra: &'static str,
    pub hsl: &'static str,
    pub hex: &'static str,
    pub rgb: [u8; 3],
    pub traits: &'static [&'static str],
    pub element: &'static str,
    pub keywords: &'static [&'static str],
}

/// The seven chakra colors, root to crown. Catalog order matters: the
/// mapper's index arithmetic addresses entries by position.
pub static CHAKRA_PALETTE: [PaletteEntry; 7] = [
    PaletteEntry {
        name: "Red",
        chakra: "Root",
        hsl: "hsl(0, 85%, 60%)",
        hex: "#eb4d4d",
        rgb: [0xeb, 0x4d, 0x4d],
        traits: &["grounded", "passionate", "energetic", "vital", "courageous"],
        element: "Earth",
        keywords: &["survival", "stability", "physical energy", "primal force"],
    },
    PaletteEntry {
        name: "Orange",
        chakra: "Sacral",
        hsl: "hsl(25, 95%, 55%)",
        hex: "#f57c1f",
        rgb: [0xf5, 0x7c, 0x1f],
        traits: &["creative", "emotional", "sensual", "adventurous", "spontaneous"],
        element: "Water",
        keywords: &["creativity", "pleasure", "emotions", "flow"],
    },
    PaletteEntry {
        name: "Yellow",
        chakra: "Solar Plexus",
        hsl: "hsl(45, 95%, 55%)",
        hex: "#f5c91f",
        rgb: [0xf5, 0xc9, 0x1f],
        traits: &["confident", "optimistic", "powerful", "intellectual", "self-assured"],
        element: "Fire",
        keywords: &["personal power", "will", "confidence", "transformation"],
    },
    PaletteEntry {
        name: "Green",
        chakra: "Heart",
        hsl: "hsl(140, 60%, 45%)",
        hex: "#2eb872",
        rgb: [0x2e, 0xb8, 0x72],
        traits: &["loving", "compassionate", "healing", "balanced", "nurturing"],
        element: "Air",
        keywords: &["love", "compassion", "harmony", "connection"],
    },
    PaletteEntry {
        name: "Blue",
        chakra: "Throat",
        hsl: "hsl(200, 80%, 55%)",
        hex: "#2da3e0",
        rgb: [0x2d, 0xa3, 0xe0],
        traits: &["communicative", "truthful", "expressive", "calm", "authentic"],
        element: "Sound",
        keywords: &["communication", "truth", "expression", "clarity"],
    },
    PaletteEntry {
        name: "Indigo",
        chakra: "Third Eye",
        hsl: "hsl(240, 60%, 55%)",
        hex: "#4747c2",
        rgb: [0x47, 0x47, 0xc2],
        traits: &["intuitive", "wise", "perceptive", "spiritual", "insightful"],
        element: "Light",
        keywords: &["intuition", "wisdom", "perception", "inner vision"],
    },
    PaletteEntry {
        name: "Violet",
        chakra: "Crown",
        hsl: "hsl(280, 70%, 60%)",
        hex: "#a855c9",
        rgb: [0xa8, 0x55, 0xc9],
        traits: &["enlightened", "connected", "transcendent", "imaginative", "divine"],
        element: "Thought",
        keywords: &["spirituality", "consciousness", "unity", "bliss"],
    },
];

pub fn entry_by_name(name: &str) -> Option<&'static PaletteEntry> {
    CHAKRA_PALETTE
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
}
