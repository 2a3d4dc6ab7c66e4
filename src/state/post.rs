//! Per-post interaction state machine.
//!
//! ARCHITECTURE
//! ============
//! One `PostInteraction` instance backs one rendered post card. It owns the
//! like toggle (optimistic, snapshot-rollback), the lazily-fetched comments
//! panel, the single active reply target, and the locally tracked counters.
//! The report modal and image lightbox are independent machines kept next
//! to it. Every transition is a plain method so the rules stay testable
//! without a browser; `PostCard` wraps the struct in an `RwSignal` and maps
//! request outcomes back onto it.
//!
//! ERROR HANDLING
//! ==============
//! Remote failures never escape the owning card: a failed like rolls back
//! via its snapshot, a failed comments fetch leaves an empty loaded panel,
//! and the report modal maps outcomes to its own notices.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use crate::net::types::{Comment, Post, Reply};

/// Immutable capture of the pre-click like state.
///
/// Taken before the optimistic flip and applied verbatim on rollback, so a
/// failed request restores the exact pre-click values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LikeSnapshot {
    liked: bool,
    like_count: i64,
}

/// Comments panel visibility and loading status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommentsPanel {
    #[default]
    Collapsed,
    Loading,
    Loaded,
}

/// Whether non-blank content is present (the send guard for comments,
/// replies, and report reasons).
pub fn submittable(content: &str) -> bool {
    !content.trim().is_empty()
}

/// Interaction state for one rendered post.
#[derive(Clone, Debug)]
pub struct PostInteraction {
    pub liked: bool,
    pub like_count: i64,
    pub comment_count: i64,
    pub panel: CommentsPanel,
    pub comments: Vec<Comment>,
    /// Guards the one-time comments fetch for this component lifetime.
    loaded: bool,
    /// The single comment currently accepting a reply, if any.
    pub reply_target: Option<String>,
}

impl PostInteraction {
    /// Seed interaction state from a feed post.
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        Self {
            liked: post.liked,
            like_count: post.like_count,
            comment_count: post.comment_count,
            panel: CommentsPanel::default(),
            comments: Vec::new(),
            loaded: false,
            reply_target: None,
        }
    }

    /// Apply the optimistic like flip and return the pre-click snapshot.
    pub fn toggle_like(&mut self) -> LikeSnapshot {
        let snapshot = LikeSnapshot {
            liked: self.liked,
            like_count: self.like_count,
        };
        self.liked = !self.liked;
        self.like_count += if self.liked { 1 } else { -1 };
        snapshot
    }

    /// Restore the pre-click like state after a failed request.
    pub fn rollback_like(&mut self, snapshot: LikeSnapshot) {
        self.liked = snapshot.liked;
        self.like_count = snapshot.like_count;
    }

    /// Toggle the comments panel. Returns `true` when the caller must start
    /// the one-time comments fetch.
    pub fn toggle_comments(&mut self) -> bool {
        match self.panel {
            CommentsPanel::Collapsed => {
                if self.loaded {
                    self.panel = CommentsPanel::Loaded;
                    false
                } else {
                    self.panel = CommentsPanel::Loading;
                    true
                }
            }
            CommentsPanel::Loading | CommentsPanel::Loaded => {
                self.panel = CommentsPanel::Collapsed;
                false
            }
        }
    }

    /// Install the fetched comment list and mark the fetch done.
    pub fn comments_loaded(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
        self.finish_comments_fetch();
    }

    /// Record a failed comments fetch: the panel shows its empty state and
    /// the fetch is not repeated.
    pub fn comments_failed(&mut self) {
        self.finish_comments_fetch();
    }

    fn finish_comments_fetch(&mut self) {
        self.loaded = true;
        if self.panel == CommentsPanel::Loading {
            self.panel = CommentsPanel::Loaded;
        }
    }

    /// Insert a freshly created comment at the head (most-recent-first) and
    /// bump the local counter.
    pub fn insert_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
        self.comment_count += 1;
    }

    /// Toggle the reply input on a comment. Opening a target closes any
    /// other; at most one comment accepts a reply at a time.
    pub fn toggle_reply(&mut self, comment_id: &str) {
        if self.reply_target.as_deref() == Some(comment_id) {
            self.reply_target = None;
        } else {
            self.reply_target = Some(comment_id.to_owned());
        }
    }

    /// Close the active reply input, if any.
    pub fn close_reply(&mut self) {
        self.reply_target = None;
    }

    /// Whether `comment_id` is the active reply target.
    #[must_use]
    pub fn is_reply_target(&self, comment_id: &str) -> bool {
        self.reply_target.as_deref() == Some(comment_id)
    }

    /// Append a stored reply to its parent comment, in place. A reply whose
    /// parent is not in the list (stale response) is dropped.
    pub fn append_reply(&mut self, reply: Reply) {
        if let Some(parent) = self.comments.iter_mut().find(|c| c.id == reply.comment_id) {
            parent.replies.push(reply);
        }
    }
}

// =============================================================
// Report modal
// =============================================================

/// Report modal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportModal {
    #[default]
    Closed,
    Open,
    Submitting,
}

/// Terminal outcome of a report request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The report was stored.
    Accepted,
    /// The server answered 409: this user already reported this post.
    Duplicate,
    /// Any other failure.
    Failed,
}

pub const REPORT_ACCEPTED_MESSAGE: &str = "Report submitted. Thank you.";
pub const REPORT_DUPLICATE_MESSAGE: &str = "You have already reported this post.";
pub const REPORT_FAILED_MESSAGE: &str = "Could not submit the report. Please try again.";

/// Map a report outcome to the next modal state and the notice to show.
///
/// Duplicates close the modal like a success (resubmitting cannot help);
/// only the generic failure keeps it open for another attempt.
pub fn resolve_report(outcome: ReportOutcome) -> (ReportModal, &'static str) {
    match outcome {
        ReportOutcome::Accepted => (ReportModal::Closed, REPORT_ACCEPTED_MESSAGE),
        ReportOutcome::Duplicate => (ReportModal::Closed, REPORT_DUPLICATE_MESSAGE),
        ReportOutcome::Failed => (ReportModal::Open, REPORT_FAILED_MESSAGE),
    }
}

// =============================================================
// Image lightbox
// =============================================================

/// Thumbnails rendered inline before the "+N" overflow indicator.
pub const MAX_THUMBNAILS: usize = 4;

/// How many thumbnails to render for an image list of `image_count`.
#[must_use]
pub fn visible_thumbnails(image_count: usize) -> usize {
    image_count.min(MAX_THUMBNAILS)
}

/// How many images are collapsed behind the "+N" indicator.
#[must_use]
pub fn hidden_thumbnails(image_count: usize) -> usize {
    image_count.saturating_sub(MAX_THUMBNAILS)
}

/// Image lightbox over a post's image list. Navigation wraps circularly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    index: Option<usize>,
}

impl Lightbox {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.index.is_some()
    }

    /// The displayed image index while open.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        self.index
    }

    /// Open at the clicked thumbnail. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize, image_count: usize) {
        if index < image_count {
            self.index = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.index = None;
    }

    /// Advance to the next image, wrapping past the end.
    pub fn next(&mut self, image_count: usize) {
        if let Some(i) = self.index {
            if image_count > 0 {
                self.index = Some((i + 1) % image_count);
            }
        }
    }

    /// Step to the previous image, wrapping before the start.
    pub fn prev(&mut self, image_count: usize) {
        if let Some(i) = self.index {
            if image_count > 0 {
                self.index = Some((i + image_count - 1) % image_count);
            }
        }
    }
}
