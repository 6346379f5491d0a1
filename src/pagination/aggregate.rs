//! Materialize a whole listing

use super::types::{Page, PageIterator};
use crate::error::Result;

/// Call `next` until the iterator is exhausted and fold every page together.
///
/// Entities keep their arrival order and counts are summed. The first error
/// is returned and anything gathered so far is dropped.
pub async fn collect_pages<I>(iter: &mut I) -> Result<I::Page>
where
    I: PageIterator,
{
    let mut all = <I::Page as Default>::default();
    while let Some(page) = iter.next().await? {
        all.append(page);
    }
    Ok(all)
}
