use serde::{Deserialize, Serialize};

pub const INVALID_PAGE_DETAIL: &str = "Invalid page.";

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Page-number pagination envelope: total count plus relative links to the
/// neighboring pages.
#[derive(Debug, Serialize)]
pub struct PageEnvelope<T> {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// A `page` outside `1..=total_pages`. Maps to a 404 at the endpoint.
#[derive(Debug, PartialEq, Eq)]
pub struct InvalidPage;

/// Slices `items` into the requested page. An empty first page is allowed;
/// anything past the last page (or page 0) is invalid.
pub fn paginate<T>(
    items: Vec<T>,
    query: &PageQuery,
    default_page_size: usize,
    base_path: &str,
) -> Result<PageEnvelope<T>, InvalidPage> {
    let page_size = query.page_size.unwrap_or(default_page_size).max(1);
    let page = query.page.unwrap_or(1);
    if page == 0 {
        return Err(InvalidPage);
    }

    let count = items.len();
    let total_pages = count.div_ceil(page_size).max(1);
    if page > total_pages {
        return Err(InvalidPage);
    }

    let results: Vec<T> = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    // Keep an explicit page_size in the links only when the client sent one.
    let link = |target: usize| match query.page_size {
        Some(size) => format!("{}?page={}&page_size={}", base_path, target, size),
        None => format!("{}?page={}", base_path, target),
    };
    let next = (page < total_pages).then(|| link(page + 1));
    let previous = (page > 1).then(|| link(page - 1));

    Ok(PageEnvelope {
        count,
        next,
        previous,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<usize>, page_size: Option<usize>) -> PageQuery {
        PageQuery { page, page_size }
    }

    #[test]
    fn empty_first_page_is_allowed() {
        let page = paginate::<u32>(vec![], &PageQuery::default(), 10, "/companies/").unwrap();
        assert_eq!(page.count, 0);
        assert!(page.results.is_empty());
        assert_eq!(page.next, None);
        assert_eq!(page.previous, None);
    }

    #[test]
    fn slices_and_links_between_pages() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(items, &query(Some(2), Some(2)), 10, "/companies/").unwrap();
        assert_eq!(page.count, 5);
        assert_eq!(page.results, vec![3, 4]);
        assert_eq!(page.next.as_deref(), Some("/companies/?page=3&page_size=2"));
        assert_eq!(
            page.previous.as_deref(),
            Some("/companies/?page=1&page_size=2")
        );
    }

    #[test]
    fn out_of_range_page_is_invalid() {
        assert_eq!(
            paginate(vec![1, 2], &query(Some(0), None), 10, "/companies/").unwrap_err(),
            InvalidPage
        );
        assert_eq!(
            paginate(vec![1, 2], &query(Some(2), None), 10, "/companies/").unwrap_err(),
            InvalidPage
        );
    }

    #[test]
    fn default_page_size_comes_from_config() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(items, &PageQuery::default(), 3, "/companies/").unwrap();
        assert_eq!(page.results, vec![1, 2, 3]);
        assert_eq!(page.next.as_deref(), Some("/companies/?page=2"));
    }
}
