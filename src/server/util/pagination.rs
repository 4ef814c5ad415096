//! Absolute `next`/`previous` links for paginated responses.
//!
//! Links are built on the configured public base URL rather than the request's `Host`
//! header, so they stay correct behind a reverse proxy. Every query parameter of the
//! incoming request except `page` is carried over unchanged.

use axum::http::Uri;
use url::{form_urlencoded, Url};

use crate::{model::api::PageDto, server::model::page::Page};

/// Converts a domain page into the `{count, next, previous, results}` response body.
///
/// # Arguments
/// - `page` - Page of domain items
/// - `base_url` - Public base URL of the API
/// - `uri` - URI of the incoming request (path and query)
/// - `into_dto` - Conversion applied to every item
pub fn into_page_dto<T, D>(
    page: Page<T>,
    base_url: &Url,
    uri: &Uri,
    into_dto: impl FnMut(T) -> D,
) -> PageDto<D> {
    let next = page
        .has_next()
        .then(|| page_link(base_url, uri, Some(page.request.page + 1)));
    let previous = page.has_previous().then(|| {
        // The first page is addressed without a page parameter.
        let target = page.request.page - 1;
        page_link(base_url, uri, (target > 1).then_some(target))
    });

    PageDto {
        count: page.total,
        next,
        previous,
        results: page.items.into_iter().map(into_dto).collect(),
    }
}

/// Builds the absolute URL of another page of the same listing.
fn page_link(base_url: &Url, uri: &Uri, page: Option<u64>) -> String {
    let mut url = base_url.clone();
    url.set_path(&format!(
        "{}{}",
        base_url.path().trim_end_matches('/'),
        uri.path()
    ));

    let mut pairs: Vec<(String, String)> = uri
        .query()
        .map(|query| {
            form_urlencoded::parse(query.as_bytes())
                .filter(|(key, _)| key != "page")
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect()
        })
        .unwrap_or_default();
    if let Some(page) = page {
        pairs.push(("page".to_string(), page.to_string()));
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }

    url.to_string()
}
