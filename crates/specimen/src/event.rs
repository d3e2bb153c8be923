//! Preview events for the host.

use specimen_text::LoadErrorKind;

/// Events emitted by a [`FontPreview`](crate::FontPreview).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewEvent {
    /// A face finished loading and its content is installed.
    Loaded {
        /// Generation of the load that completed.
        generation: u64,
        /// Family and style of the new face.
        title: String,
    },

    /// The current load failed. The previous face, if any, is still shown.
    LoadFailed {
        generation: u64,
        kind: LoadErrorKind,
        /// Human-readable error message.
        message: String,
    },

    /// The preview's size may have changed; the host should measure again.
    ResizeRequested,
}

impl PreviewEvent {
    /// Check if this is a load event.
    pub fn is_loaded(&self) -> bool {
        matches!(self, PreviewEvent::Loaded { .. })
    }

    /// Check if this is a failure event.
    pub fn is_failed(&self) -> bool {
        matches!(self, PreviewEvent::LoadFailed { .. })
    }

    /// Generation the event relates to, if any.
    pub fn generation(&self) -> Option<u64> {
        match self {
            PreviewEvent::Loaded { generation, .. } => Some(*generation),
            PreviewEvent::LoadFailed { generation, .. } => Some(*generation),
            PreviewEvent::ResizeRequested => None,
        }
    }
}

/// A buffer of preview events drained by the host.
#[derive(Debug, Default)]
pub struct PreviewEventBuffer {
    events: Vec<PreviewEvent>,
}

impl PreviewEventBuffer {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: PreviewEvent) {
        self.events.push(event);
    }

    /// Drain all events from the buffer.
    pub fn drain(&mut self) -> impl Iterator<Item = PreviewEvent> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
