//! Identifier building blocks: name slugs and short random suffixes.

use rand::Rng;

use crate::constants::EVENT_SLUG_MAX_LEN;

const SUFFIX_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Lower-case a name and collapse every non-alphanumeric run into a single
/// `-`, trimming separators at both ends and bounding the length.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars().flat_map(|c| c.to_lowercase()) {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug.chars().take(EVENT_SLUG_MAX_LEN).collect()
}

/// A short lowercase base-36 suffix.  The suffix space is the only
/// collision defense of the legacy id scheme; the store rejects duplicates
/// and callers retry with a fresh suffix.
pub fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| SUFFIX_CHARS[rng.gen_range(0..SUFFIX_CHARS.len())] as char)
        .collect()
}
