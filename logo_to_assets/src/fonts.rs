/// Candidate caption fonts, tried in order. The macOS paths come first,
/// followed by common Linux installs.
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Avenir.ttc",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];

/// Loads the first candidate font that exists and parses.
pub fn load_caption_font() -> Result<ab_glyph::FontVec, crate::Error> {
    for path in FONT_CANDIDATES {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => continue,
        };
        match ab_glyph::FontVec::try_from_vec(bytes) {
            Ok(font) => {
                log::info!("Using caption font {path}");
                return Ok(font);
            }
            Err(err) => log::warn!("Skipping unparsable font {path}: {err}"),
        }
    }
    Err(crate::Error::NoUsableFont)
}
