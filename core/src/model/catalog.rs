use crate::model::ranking::GLOBAL_LANGUAGE_CODE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Medium {
    pub id: u32,
    pub description: &'static str,
    pub unit: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const MEDIA: &[Medium] = &[
    Medium { id: 1, description: "Book", unit: "pages" },
    Medium { id: 2, description: "Manga", unit: "pages" },
    Medium { id: 3, description: "Net article", unit: "pages" },
    Medium { id: 4, description: "Full game", unit: "minutes" },
    Medium { id: 5, description: "Game", unit: "screens" },
    Medium { id: 6, description: "Lyric", unit: "songs" },
    Medium { id: 7, description: "News", unit: "articles" },
    Medium { id: 8, description: "Nico", unit: "minutes" },
    Medium { id: 9, description: "Subs", unit: "minutes" },
    Medium { id: 10, description: "Sentences", unit: "sentences" },
];

pub const LANGUAGES: &[Language] = &[
    Language { code: "ara", name: "Arabic" },
    Language { code: "zho", name: "Chinese" },
    Language { code: "hrv", name: "Croatian" },
    Language { code: "ces", name: "Czech" },
    Language { code: "dan", name: "Danish" },
    Language { code: "nld", name: "Dutch" },
    Language { code: "eng", name: "English" },
    Language { code: "epo", name: "Esperanto" },
    Language { code: "fin", name: "Finnish" },
    Language { code: "fra", name: "French" },
    Language { code: "deu", name: "German" },
    Language { code: "ell", name: "Greek" },
    Language { code: "heb", name: "Hebrew" },
    Language { code: "hun", name: "Hungarian" },
    Language { code: "ind", name: "Indonesian" },
    Language { code: "ita", name: "Italian" },
    Language { code: "jpn", name: "Japanese" },
    Language { code: "kor", name: "Korean" },
    Language { code: "lat", name: "Latin" },
    Language { code: "nor", name: "Norwegian" },
    Language { code: "pol", name: "Polish" },
    Language { code: "por", name: "Portuguese" },
    Language { code: "rus", name: "Russian" },
    Language { code: "spa", name: "Spanish" },
    Language { code: "swe", name: "Swedish" },
    Language { code: "tha", name: "Thai" },
    Language { code: "tur", name: "Turkish" },
    Language { code: "ukr", name: "Ukrainian" },
    Language { code: "vie", name: "Vietnamese" },
];

/// Chart palette. Colors are handed out by position and wrap around.
pub const GRAPH_COLOR_RANGE: [&str; 25] = [
    "#12939A", "#79C7E3", "#1A3177", "#FF9833", "#EF5D28",
    "#19CDD7", "#DDB27C", "#88572C", "#FF991F", "#F15C17",
    "#223F9A", "#DA70BF", "#125C77", "#4DC19C", "#776E57",
    "#17B8BE", "#F6D18A", "#B7885E", "#FFCB99", "#F89570",
    "#829AE3", "#E79FD5", "#1E96BE", "#89DAC1", "#B3AD9E",
];

pub fn graph_color(index: usize) -> &'static str {
    GRAPH_COLOR_RANGE[index % GRAPH_COLOR_RANGE.len()]
}

pub fn language_by_code(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code == code)
}

pub fn medium_by_id(id: u32) -> Option<&'static Medium> {
    MEDIA.iter().find(|m| m.id == id)
}

pub fn language_name(code: &str) -> String {
    if code == GLOBAL_LANGUAGE_CODE {
        return "Global".to_string();
    }
    language_by_code(code)
        .map(|l| l.name.to_string())
        .unwrap_or_else(|| code.to_string())
}

pub fn medium_description(id: u32) -> String {
    medium_by_id(id)
        .map(|m| m.description.to_string())
        .unwrap_or_else(|| format!("Medium #{}", id))
}

pub fn medium_unit(id: u32) -> String {
    medium_by_id(id)
        .map(|m| m.unit.to_string())
        .unwrap_or_else(|| "units".to_string())
}
