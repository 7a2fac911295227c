use std::collections::HashSet;

/// Case-insensitive Jaccard index of two tag collections
///
/// Tags are lowercased before comparison and duplicates collapse. Two empty
/// collections score 0.0 rather than being undefined.
///
/// # Returns
/// `|A ∩ B| / |A ∪ B|` in the range 0.0..=1.0
pub fn jaccard<A, B>(a: A, b: B) -> f64
where
    A: IntoIterator,
    A::Item: AsRef<str>,
    B: IntoIterator,
    B::Item: AsRef<str>,
{
    let set_a = normalize(a);
    let set_b = normalize(b);

    if set_a.is_empty() && set_b.is_empty() {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    intersection as f64 / union.max(1) as f64
}

#[inline]
fn normalize<I>(tags: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tags.into_iter().map(|tag| tag.as_ref().to_lowercase()).collect()
}
