use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Pick `NUM_CATEGORIES` distinct category ids out of the service's listing.
pub async fn fetch_category_ids<S, R>(source: &S, rng: &mut R) -> Result<Vec<CategoryId>>
where
    S: QuizSource,
    R: Rng + ?Sized,
{
    let listing = source.list_categories(CATEGORY_POOL_SIZE).await?;
    let ids = dedup_preserving_order(listing.into_iter().map(|summary| summary.id).collect());
    log::debug!("Category pool has {} distinct ids", ids.len());
    sample_without_replacement(ids, NUM_CATEGORIES, rng)
}

/// Fetch one category and keep `NUM_CLUES` random clues of it, all hidden.
pub async fn fetch_category<S, R>(source: &S, id: CategoryId, rng: &mut R) -> Result<Category>
where
    S: QuizSource,
    R: Rng + ?Sized,
{
    let detail = source.category(id).await?;
    log::trace!(
        "Category {} ({:?}) has {} clues",
        id,
        detail.title,
        detail.clues.len()
    );
    let clues = sample_without_replacement(detail.clues, NUM_CLUES, rng)?
        .into_iter()
        .map(|record| Clue::new(record.question, record.answer))
        .collect();
    Ok(Category::new(detail.title, clues))
}

/// Fetch a whole board, one category after the other in the order the ids were drawn.
pub async fn load_round<S, R>(source: &S, rng: &mut R) -> Result<Board>
where
    S: QuizSource,
    R: Rng + ?Sized,
{
    let ids = fetch_category_ids(source, rng).await?;
    log::debug!("Loading categories {:?}", ids);

    let mut board = Board::new();
    for id in ids {
        board.push(fetch_category(source, id, rng).await?);
    }
    Ok(board)
}
