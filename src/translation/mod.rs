use amino_acids::AminoAcid;

pub mod amino_acids;
pub mod distance;
pub mod pairs;

// Ambiguity codes only exist for translation, they have no distances.
const AMBIGUITY_CODES: [(&str, char); 2] = [("Asx", 'B'), ("Glx", 'Z')];

/// Translates three-letter codes to uppercase one-letter codes.
///
/// Input is case-insensitive (`"ser"`, `"SER"` and `"Ser"` are equivalent).
/// Besides the 20 standard amino acids, `Asx` and `Glx` translate to `B` and `Z`.
/// Unknown codes yield `None` at their position; the call itself never fails.
///
/// # Examples
///
/// ```
/// use grantham::to_one_letter;
///
/// assert_eq!(to_one_letter(&["Ser", "glx", "Serine"]), vec![Some('S'), Some('Z'), None]);
/// ```
pub fn to_one_letter<S: AsRef<str>>(codes: &[S]) -> Vec<Option<char>> {
    codes
        .iter()
        .map(|code| {
            let code = title_case(code.as_ref());
            AMBIGUITY_CODES
                .iter()
                .find(|(three, _)| *three == code)
                .map(|(_, one)| *one)
                .or_else(|| AminoAcid::from_abbreviation(&code).map(|aa| aa.one_letter()))
        })
        .collect()
}

/// Translates one-letter codes to title-case three-letter codes.
///
/// Input is case-insensitive. Anything that is not a single known letter,
/// including three-letter codes such as `"Ser"`, yields `None`.
///
/// # Examples
///
/// ```
/// use grantham::to_three_letter;
///
/// assert_eq!(to_three_letter(&["s", "B", "Ser"]), vec![Some("Ser"), Some("Asx"), None]);
/// ```
pub fn to_three_letter<S: AsRef<str>>(codes: &[S]) -> Vec<Option<&'static str>> {
    codes
        .iter()
        .map(|code| {
            let upper = code.as_ref().to_uppercase();
            let mut chars = upper.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => AMBIGUITY_CODES
                    .iter()
                    .find(|(_, one)| *one == letter)
                    .map(|(three, _)| *three)
                    .or_else(|| AminoAcid::from_one_letter(letter).map(|aa| aa.abbreviation())),
                _ => None,
            }
        })
        .collect()
}

fn title_case(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
