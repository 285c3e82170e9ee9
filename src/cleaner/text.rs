/// Title-case a free-text value: the first alphabetic character of each word
/// is uppercased and the rest lowercased. A word starts at an alphabetic
/// character preceded by a non-alphabetic one (or the start of the string),
/// so `"1 main st"` becomes `"1 Main St"` and `"o'brien rd"` becomes
/// `"O'Brien Rd"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_alphabetic = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}
