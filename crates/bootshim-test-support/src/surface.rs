//! In-memory rendering surface.

use bootshim_core::{ErrorNotice, RenderSurface, SurfaceError, SurfaceResult};

/// Child of a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Content rendered before the loader ran (arbitrary markup).
    Markup(String),
    /// A notice appended by the loader.
    Notice(ErrorNotice),
}

/// Surface that keeps its children in memory and counts mutations.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    children: Vec<Node>,
    clear_calls: usize,
    append_calls: usize,
    fail_on: Option<&'static str>,
}

impl RecordingSurface {
    /// Empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface pre-populated with markup children.
    #[must_use]
    pub fn with_markup<I, T>(children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            children: children
                .into_iter()
                .map(|child| Node::Markup(child.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Surface whose `operation` (`"clear"` or `"append_notice"`) fails.
    #[must_use]
    pub fn failing_on(operation: &'static str) -> Self {
        Self {
            fail_on: Some(operation),
            ..Self::default()
        }
    }

    /// Current children, in order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Notices currently present.
    #[must_use]
    pub fn notices(&self) -> Vec<&ErrorNotice> {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Notice(notice) => Some(notice),
                Node::Markup(_) => None,
            })
            .collect()
    }

    /// Number of `clear` calls observed.
    #[must_use]
    pub const fn clear_calls(&self) -> usize {
        self.clear_calls
    }

    /// Number of `append_notice` calls observed.
    #[must_use]
    pub const fn append_calls(&self) -> usize {
        self.append_calls
    }

    /// Whether the surface has never been mutated.
    #[must_use]
    pub const fn is_untouched(&self) -> bool {
        self.clear_calls == 0 && self.append_calls == 0
    }

    fn check(&self, operation: &'static str) -> SurfaceResult<()> {
        if self.fail_on == Some(operation) {
            return Err(SurfaceError::operation(operation, "scripted surface failure"));
        }
        Ok(())
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self) -> SurfaceResult<()> {
        self.clear_calls += 1;
        self.check("clear")?;
        self.children.clear();
        Ok(())
    }

    fn append_notice(&mut self, notice: &ErrorNotice) -> SurfaceResult<()> {
        self.append_calls += 1;
        self.check("append_notice")?;
        self.children.push(Node::Notice(notice.clone()));
        Ok(())
    }
}
