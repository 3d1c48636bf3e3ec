//! Display name to path/URL token conversion.
//!
//! The same function names generated files (`app/<slug>.html`) and fills the
//! `component_file_name` placeholder, so references inside generated content
//! always line up with the files on disk.

/// Convert a display name into a lowercase, hyphen-delimited `[a-z0-9-]` token.
///
/// Latin letters with diacritics are transliterated and combining marks are
/// dropped, so composed and decomposed spellings agree. camelCase humps and
/// runs of whitespace, `_` or `-` become a single `-`. Any other character is
/// deleted. Leading and trailing hyphens are trimmed, so the result may be
/// empty.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    let mut prev_lower_or_digit = false;

    for c in name.chars() {
        if is_separator(c) {
            pending_hyphen = true;
            prev_lower_or_digit = false;
            continue;
        }

        let folded = transliterate(c);
        if folded.is_none() && !c.is_ascii_alphanumeric() {
            // Punctuation, combining marks and other scripts vanish without a break.
            continue;
        }

        let is_upper = c.is_uppercase();
        if is_upper && prev_lower_or_digit {
            pending_hyphen = true;
        }
        if pending_hyphen && !slug.is_empty() {
            slug.push('-');
        }
        pending_hyphen = false;

        match folded {
            Some(ascii) => slug.push_str(ascii),
            None => slug.push(c.to_ascii_lowercase()),
        }
        prev_lower_or_digit = !is_upper;
    }

    slug
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}

/// Fold a Latin letter with diacritics to its ASCII spelling.
fn transliterate(c: char) -> Option<&'static str> {
    let folded = match c {
        'ą' | 'à' | 'á' | 'ä' | 'â' | 'ã' | 'å' | 'ă' | 'Ą' | 'À' | 'Á' | 'Ä' | 'Â' | 'Ã'
        | 'Å' | 'Ă' => "a",
        'æ' | 'Æ' => "ae",
        'ç' | 'ć' | 'č' | 'Ç' | 'Ć' | 'Č' => "c",
        'ď' | 'Ď' => "d",
        'ę' | 'è' | 'é' | 'ë' | 'ê' | 'ě' | 'Ę' | 'È' | 'É' | 'Ë' | 'Ê' | 'Ě' => "e",
        'ì' | 'í' | 'ï' | 'î' | 'Ì' | 'Í' | 'Ï' | 'Î' => "i",
        'ł' | 'Ł' => "l",
        'ñ' | 'ń' | 'ň' | 'Ñ' | 'Ń' | 'Ň' => "n",
        'ò' | 'ó' | 'ö' | 'ô' | 'õ' | 'ø' | 'Ò' | 'Ó' | 'Ö' | 'Ô' | 'Õ' | 'Ø' => "o",
        'œ' | 'Œ' => "oe",
        'ř' | 'Ř' => "r",
        'ś' | 'ș' | 'š' | 'ş' | 'Ś' | 'Ș' | 'Š' | 'Ş' => "s",
        'ß' => "ss",
        'ț' | 'ť' | 'ţ' | 'Ț' | 'Ť' | 'Ţ' => "t",
        'ù' | 'ú' | 'ü' | 'û' | 'ů' | 'Ù' | 'Ú' | 'Ü' | 'Û' | 'Ů' => "u",
        'ý' | 'ÿ' | 'Ý' | 'Ÿ' => "y",
        'ż' | 'ź' | 'ž' | 'Ż' | 'Ź' | 'Ž' => "z",
        _ => return None,
    };
    Some(folded)
}
