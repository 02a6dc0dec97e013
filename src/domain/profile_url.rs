use itertools::Itertools;

pub const PROFILE_MARKER: &str = "linkedin.com/in/";

/// Drops everything from the first `?` on.
pub fn clean_profile_url(url: &str) -> &str {
    match url.split_once('?') {
        Some((path, _tracking)) => path,
        None => url,
    }
}

/// Profile urls in first-seen order, cleaned and without duplicates.
///
/// The marker is checked after cleaning, so a marker that only appears in
/// the query string does not make a url a profile.
pub fn extract_profile_urls<I, S>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    urls.into_iter()
        .filter_map(|url| {
            let url = clean_profile_url(url.as_ref());
            url.contains(PROFILE_MARKER).then(|| url.to_string())
        })
        .unique()
        .collect()
}
