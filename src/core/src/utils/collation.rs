use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Orders display names the way a reader expects rather than by code point:
/// letters compare case- and accent-insensitively first ("Çaykur" sits between
/// "Bursa" and "Denizli"), then accents, then case with lowercase first.
/// Byte order settles whatever is left so the result is a total order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

fn base_key(name: &str) -> Vec<char> {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(fold_dotless_i)
        .collect()
}

fn accent_key(name: &str) -> Vec<char> {
    name.nfd()
        .flat_map(char::to_lowercase)
        .map(fold_dotless_i)
        .collect()
}

fn case_key(name: &str) -> Vec<bool> {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}

// 'ı' has no decomposition, keep it next to 'i' instead of after 'z'
fn fold_dotless_i(c: char) -> char {
    match c {
        'ı' => 'i',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&'static str]) -> Vec<&'static str> {
        let mut names = names.to_vec();
        names.sort_by(|a, b| compare_names(a, b));
        names
    }

    #[test]
    fn test_case_does_not_outrank_letters() {
        assert_eq!(
            sorted(&["Bursa", "Denizli", "adana", "Çaykur"]),
            vec!["adana", "Bursa", "Çaykur", "Denizli"]
        );
    }

    #[test]
    fn test_accents_only_break_ties() {
        assert_eq!(sorted(&["Çorum", "Cide", "Ceyhan"]), vec!["Ceyhan", "Cide", "Çorum"]);
        assert_eq!(compare_names("Ödemiş", "Ordu"), Ordering::Less);
        assert_eq!(compare_names("Ovacık", "Övacık"), Ordering::Less);
    }

    #[test]
    fn test_turkish_i_variants_stay_near_i() {
        assert_eq!(sorted(&["Zonguldak", "Isparta", "İzmir"]), vec!["Isparta", "İzmir", "Zonguldak"]);
        assert_eq!(compare_names("ılgaz", "zeytin"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_equal_letters() {
        assert_eq!(compare_names("rize", "Rize"), Ordering::Less);
        assert_eq!(compare_names("Rize", "Rize"), Ordering::Equal);
    }
}
