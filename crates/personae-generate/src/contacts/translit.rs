use crate::errors::GenerationError;

/// Latin spelling of a lowercase Cyrillic letter.
fn latin(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' | 'й' => "i",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "ie",
        'ы' => "y",
        'ь' => "",
        'ю' => "iu",
        'я' => "ia",
        _ => return None,
    };
    Some(latin)
}

/// Lowercase and transliterate a composed login.
///
/// Digits and the `.`, `_`, `-` separators pass through; any other
/// character that has no mapping is an error rather than being dropped.
pub fn transliterate(login: &str) -> Result<String, GenerationError> {
    let mut out = String::with_capacity(login.len());
    for ch in login.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_digit() || matches!(ch, '.' | '_' | '-') {
            out.push(ch);
            continue;
        }
        let mapped = latin(ch).ok_or_else(|| GenerationError::UnmappedCharacter {
            ch,
            login: login.to_string(),
        })?;
        out.push_str(mapped);
    }
    Ok(out)
}
