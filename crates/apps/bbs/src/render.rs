//! Text rendering for the terminal front-end
//!
//! Pure functions from snapshots to display strings, so the output can be
//! tested without a terminal. User-facing strings are Japanese, matching
//! the product's original UI; logs stay English.

use board::{Comment, Identity, PageControl, Thread, ThreadListMeta, ThreadSummary};
use chrono::{DateTime, Local, Utc};

/// The `コメント数:2/100` tally shown next to threads and comment lists
pub fn comment_ratio(count: usize, max: usize) -> String {
    format!("コメント数:{count}/{max}")
}

fn local_time(parsed: Option<DateTime<Utc>>, raw: &str) -> String {
    match parsed {
        Some(ts) => ts
            .with_timezone(&Local)
            .format("%Y/%m/%d %H:%M:%S")
            .to_string(),
        None => raw.to_string(),
    }
}

/// The thread listing: greeting, capacity banner, one block per thread.
///
/// Threads owned by the signed-in user are marked with `*` (the delete
/// affordance; the server still decides whether a delete is allowed).
pub fn thread_page(
    threads: &[ThreadSummary],
    meta: &ThreadListMeta,
    identity: &Identity,
) -> String {
    let mut out = String::new();

    if !identity.is_anonymous() {
        out.push_str(&format!("{} さん、こんにちは！\n", identity.name));
    }
    if meta.is_limit_reached {
        out.push_str("スレッド数の上限に達しています\n");
    }

    if threads.is_empty() {
        out.push_str("スレッドがありません\n");
        return out;
    }

    for thread in threads {
        let marker = if thread.is_owned_by(identity) { " *" } else { "" };
        out.push_str(&format!("[{}] {}{}\n", thread.id, thread.name, marker));
        out.push_str(&format!(
            "    {}・{}\n",
            comment_ratio(thread.comment_count, meta.max_comments),
            local_time(thread.created_at(), &thread.created_at),
        ));
    }
    out
}

/// A thread's detail page: title, tally, capacity banner, comments
/// numbered descending (the newest comment gets the highest number).
pub fn comment_page(
    thread: &Thread,
    comments: &[Comment],
    count: usize,
    max: usize,
    is_limit_reached: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", thread.name));
    out.push_str(&format!("{}\n", comment_ratio(count, max)));
    if is_limit_reached {
        out.push_str("コメント上限に達しています\n");
    }

    let total = comments.len();
    for (index, comment) in comments.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}  {}\n",
            total - index,
            comment.name,
            local_time(comment.created_at(), &comment.created_at),
        ));
        out.push_str(&format!("   {}\n", comment.message));
    }
    out
}

/// The pagination bar, e.g. `‹ 1 … 4 [5] 6 … 10 ›`
pub fn pagination_bar(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(|control| match control {
            PageControl::Previous { .. } => "‹".to_string(),
            PageControl::Next { .. } => "›".to_string(),
            PageControl::Ellipsis => "…".to_string(),
            PageControl::Page {
                number,
                selected: true,
            } => format!("[{number}]"),
            PageControl::Page { number, .. } => number.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
