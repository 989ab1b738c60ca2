//! Person-name comparison used when a slot has no tag.

use crate::constants::MIN_NAME_PREFIX_LEN;

/// Strength of a name match; ordered weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NameMatch {
    None,
    /// Given names only agree on a shared prefix ("Kasia" / "Katarzyna" do not,
    /// "Ka" / "Kat" do)
    Prefix,
    Exact,
}

/// Case-folded, whitespace-separated tokens.
pub fn name_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Compare two given names: equal, or the shorter is a prefix of the longer
/// sharing at least [`MIN_NAME_PREFIX_LEN`] characters.
pub fn compare_given(a: &str, b: &str) -> NameMatch {
    if a == b {
        return NameMatch::Exact;
    }
    let (shorter, longer) = if a.chars().count() <= b.chars().count() { (a, b) } else { (b, a) };
    if shorter.chars().count() >= MIN_NAME_PREFIX_LEN && longer.starts_with(shorter) {
        NameMatch::Prefix
    } else {
        NameMatch::None
    }
}

/// Match a title fragment against a `(given, family)` pair, in written
/// ("Jan Nowak") and swapped ("Nowak Jan") order.
pub fn match_person(fragment: &str, given_name: &str, family_name: &str) -> NameMatch {
    let tokens = name_tokens(fragment);
    let given = name_tokens(given_name);
    let family = name_tokens(family_name);

    if given.is_empty() || family.is_empty() || tokens.len() != given.len() + family.len() {
        return NameMatch::None;
    }

    let (direct_given, direct_family) = tokens.split_at(given.len());
    let (swapped_family, swapped_given) = tokens.split_at(family.len());

    compare_split(direct_given, direct_family, &given, &family)
        .max(compare_split(swapped_given, swapped_family, &given, &family))
}

fn compare_split(
    fragment_given: &[String],
    fragment_family: &[String],
    given: &[String],
    family: &[String],
) -> NameMatch {
    if fragment_family != family {
        return NameMatch::None;
    }
    compare_given(&fragment_given.join(" "), &given.join(" "))
}
