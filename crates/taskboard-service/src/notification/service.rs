//! Notification queries and creation.
//!
//! The read side (list, unread count, mark read) serves clients that are
//! not connected to the delivery channel; the creation path is invoked by
//! the realtime translator. All caller-facing methods are scoped to the
//! context's identity and never see another user's records.

use std::sync::Arc;

use uuid::Uuid;

use taskboard_core::result::AppResult;
use taskboard_core::types::pagination::{PageRequest, PageResponse};
use taskboard_database::repositories::notification::NotificationRepository;
use taskboard_entity::notification::{Notification, NotificationKind};

use crate::context::RequestContext;

/// Manages user notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(repo: Arc<NotificationRepository>) -> Self {
        Self { repo }
    }

    /// Lists notifications for the current user, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        self.repo.find_by_recipient(ctx.user_id, &page).await
    }

    /// Gets a single notification owned by the current user.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Notification> {
        self.repo.find_by_id(id, ctx.user_id).await
    }

    /// Gets the unread notification count for the current user.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.repo.count_unread(ctx.user_id).await
    }

    /// Marks a notification as read. Idempotent.
    pub async fn mark_read(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Notification> {
        self.repo.mark_read(id, ctx.user_id).await
    }

    /// Marks a notification as read on behalf of a delivery channel,
    /// which carries a bare identity rather than a request context.
    pub async fn mark_read_for(&self, recipient: Uuid, id: Uuid) -> AppResult<Notification> {
        self.repo.mark_read(id, recipient).await
    }

    /// Marks all unread notifications as read; returns how many changed.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> AppResult<u64> {
        self.repo.mark_all_read(ctx.user_id).await
    }

    /// Persists a new notification for a recipient.
    ///
    /// Called by the realtime translator; workflow code never reaches the
    /// store directly.
    pub async fn create_notification(
        &self,
        recipient: Uuid,
        kind: NotificationKind,
        title: &str,
        message: &str,
        related_project: Option<Uuid>,
        related_task: Option<Uuid>,
    ) -> AppResult<Notification> {
        self.repo
            .create(recipient, kind, title, message, related_project, related_task)
            .await
    }
}
