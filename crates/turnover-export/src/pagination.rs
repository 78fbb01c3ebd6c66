//! Splitting target codes across output pages.

use turnover_core::errors::ExportError;

/// `ceil(codes / pages)`. Zero pages is rejected.
pub fn codes_per_page(codes: usize, pages: usize) -> Result<usize, ExportError> {
    if pages == 0 {
        return Err(ExportError::InvalidPageCount { pages });
    }
    Ok(codes.div_ceil(pages).max(1))
}

/// Consecutive chunks of `codes`, each holding `codes_per_page` codes except
/// possibly the last. Fewer than `pages` chunks come back when the quota
/// exhausts the codes early, and none when there are no codes.
pub fn paginate<T>(codes: &[T], pages: usize) -> Result<Vec<&[T]>, ExportError> {
    let quota = codes_per_page(codes.len(), pages)?;
    Ok(codes.chunks(quota).collect())
}
