// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Notifications from the button to its host
//!
//! Notifications are fire and forget. A button without a sink logs them and
//! moves on.

use std::sync::mpsc::Sender;

use crate::model::ColorValue;

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationCode {
    SelectionChanged,
    DropDown,
    CloseUp,
    SelectionEndOk,
    SelectionEndCancel,
}

/// A notification with the raw colors involved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub code: NotificationCode,
    pub current: ColorValue,
    pub previous: ColorValue,
}

impl Notification {
    pub fn new(code: NotificationCode, current: ColorValue, previous: ColorValue) -> Self {
        Self {
            code,
            current,
            previous,
        }
    }
}

/// Receives notifications
pub trait NotificationSink: Send {
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Sender<Notification> {
    fn notify(&mut self, notification: Notification) {
        if self.send(notification).is_err() {
            tracing::debug!("Notification receiver dropped: {:?}", notification.code);
        }
    }
}

impl<F> NotificationSink for F
where
    F: FnMut(Notification) + Send,
{
    fn notify(&mut self, notification: Notification) {
        self(notification)
    }
}
