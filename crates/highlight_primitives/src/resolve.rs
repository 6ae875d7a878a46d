use smallvec::SmallVec;

/// Expands every occurrence of `substring` in `text` into the character
/// indices it covers.
///
/// Every start offset is tested, so overlapping occurrences are all found.
/// Indices are emitted by ascending start offset and then ascending position
/// inside the occurrence; indices shared by overlapping occurrences repeat.
/// Indices count `char`s, not bytes.
pub fn substring_indices(text: &str, substring: &str) -> SmallVec<[usize; 8]> {
    let mut indices = SmallVec::new();
    if substring.is_empty() {
        return indices;
    }

    let substring_len = substring.chars().count();
    for (char_index, (byte_offset, _)) in text.char_indices().enumerate() {
        if text[byte_offset..].starts_with(substring) {
            indices.extend(char_index..char_index + substring_len);
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn overlapping_occurrences_are_all_found() {
        assert_eq!(substring_indices("aaa", "aa").as_slice(), &[0, 1, 1, 2]);
    }

    #[test]
    fn match_at_the_end_of_the_text_is_found() {
        assert_eq!(substring_indices("hello", "lo").as_slice(), &[3, 4]);
        assert_eq!(substring_indices("abc", "abc").as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn missing_substring_yields_nothing() {
        assert!(substring_indices("hello", "xyz").is_empty());
    }

    #[test]
    fn longer_substring_than_text_yields_nothing() {
        assert!(substring_indices("ab", "abc").is_empty());
        assert!(substring_indices("", "a").is_empty());
    }

    #[test]
    fn empty_substring_yields_nothing() {
        assert!(substring_indices("abc", "").is_empty());
    }

    #[test]
    fn indices_count_characters_not_bytes() {
        assert_eq!(substring_indices("héllo wörld", "wö").as_slice(), &[6, 7]);
        assert_eq!(substring_indices("日本日本", "本").as_slice(), &[1, 3]);
    }

    #[test]
    fn repeated_words_are_found_in_order() {
        assert_eq!(
            substring_indices("the cat and the hat", "the").as_slice(),
            &[0, 1, 2, 12, 13, 14]
        );
    }

    proptest! {
        #[test]
        fn indices_stay_inside_some_occurrence(
            text in "[ab]{0,24}",
            substring in "[ab]{1,4}",
        ) {
            let chars: Vec<char> = text.chars().collect();
            let needle: Vec<char> = substring.chars().collect();
            let starts: Vec<usize> = (0..chars.len())
                .filter(|&start| chars[start..].starts_with(&needle))
                .collect();

            let indices = substring_indices(&text, &substring);

            prop_assert_eq!(indices.len(), starts.len() * needle.len());
            for index in indices {
                prop_assert!(index < chars.len());
                prop_assert!(
                    starts
                        .iter()
                        .any(|&start| (start..start + needle.len()).contains(&index))
                );
            }
        }
    }
}
