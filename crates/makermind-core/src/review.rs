//! Project journal: reviews keyed by project id, newest first.

use crate::ids;
use crate::types::{Review, ReviewBook};
use chrono::Local;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Build a review from form input. A rating outside 1–5 or blank text
/// yields `None`.
pub fn compose_review(project_id: &str, rating: u8, text: &str) -> Option<Review> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) || text.trim().is_empty() {
        return None;
    }
    Some(Review {
        id: ids::next_id(),
        project_id: project_id.to_string(),
        rating,
        text: text.to_string(),
        date: Local::now().format("%-m/%-d/%Y").to_string(),
    })
}

/// Prepend `review` to its project's list.
pub fn add_review(prev: &ReviewBook, review: Review) -> ReviewBook {
    let mut next = prev.clone();
    next.entry(review.project_id.clone())
        .or_default()
        .insert(0, review);
    next
}

pub fn reviews_for<'a>(book: &'a ReviewBook, project_id: &str) -> &'a [Review] {
    book.get(project_id).map(Vec::as_slice).unwrap_or(&[])
}

/// Mean rating for a project, if it has any reviews.
pub fn average_rating(book: &ReviewBook, project_id: &str) -> Option<f64> {
    let reviews = reviews_for(book, project_id);
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    Some(f64::from(total) / reviews.len() as f64)
}
