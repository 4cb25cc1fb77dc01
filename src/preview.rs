// External Crate Imports
use color_eyre::{Result, eyre::eyre};
use tracing::{debug, info};

// Local Crate Imports
use crate::{
    config::Config,
    error::AttachError,
    media::{MediaKind, SelectedFile},
    target::{MediaPreview, Target},
};

// Public API ==========================================================================================================

/// A file input that previews its selected files inside of a separate target container
///
/// The platform drives the lifecycle: `attach()` when the input enters the document, `change()` whenever its
/// selection changes, `finish()` once each file returned from `change()` has been read, and `detach()` when the input
/// leaves the document.
#[derive(Debug)]
pub struct FilePreviewInput<T> {
    lifecycle: Lifecycle<T>,
    generation: u64,
}

/// A file that passed validation and is waiting on its contents to be read
#[derive(Clone, Debug)]
pub struct PendingRead<N> {
    index: usize,
    file: SelectedFile,
    kind: MediaKind,
    node: N,
    generation: u64,
}

/// A claim on the target made by `FilePreviewInput::select()`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Selection(u64);

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Completion {
    Rendered,
    /// The selection changed (or the input was detached) while the file was being read
    Discarded,
}

impl<T: Target> FilePreviewInput<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lifecycle: Lifecycle::Detached,
            generation: 0,
        }
    }

    #[must_use]
    pub const fn attached(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Attached { .. })
    }

    #[must_use]
    pub const fn config(&self) -> Option<&Config> {
        match &self.lifecycle {
            Lifecycle::Attached { config, .. } => Some(config),
            Lifecycle::Detached => None,
        }
    }

    #[must_use]
    pub const fn target(&self) -> Option<&T> {
        match &self.lifecycle {
            Lifecycle::Attached { target, .. } => Some(target),
            Lifecycle::Detached => None,
        }
    }

    /// Reads the input's configuration and resolves its target, replacing any previous attachment
    ///
    /// `attribute` is queried with un-prefixed `data-*` names (see `crate::config`) and `lookup` with the id named by
    /// `target-for`. On failure the input is left detached.
    pub fn attach(
        &mut self,
        attribute: impl Fn(&str) -> Option<String>,
        lookup: impl FnOnce(&str) -> Option<T>,
    ) -> Result<(), AttachError> {
        if self.attached() {
            self.detach();
        }

        let (config, target) = Config::read(attribute, lookup)?;
        info!(target_for = config.target_for(), "attached `FilePreviewInput`");
        self.lifecycle = Lifecycle::Attached { config, target };

        Ok(())
    }

    pub fn detach(&mut self) {
        if let Lifecycle::Attached { config, .. } = &self.lifecycle {
            info!(target_for = config.target_for(), "detached `FilePreviewInput`");
        }

        self.lifecycle = Lifecycle::Detached;
        self.generation += 1;
    }

    /// Clears the target and fills it with error messages or insertion points for a new selection
    ///
    /// Files that are too large or that aren't images, audio or video have the error message rendered straight away.
    /// Every other file is returned as a `PendingRead` that should be completed with `finish()`, in any order.
    pub fn change(&mut self, files: &[SelectedFile]) -> Result<Vec<PendingRead<T::Node>>> {
        let selection = self.select();
        let pending = self.render(selection, files)?;

        Ok(pending.unwrap_or_default())
    }

    /// Claims the next selection, invalidating any earlier ones, before anything about its files is known
    ///
    /// Platforms that need to wait on file metadata should call this as soon as the selection changes, then pass the
    /// `Selection` on to `render()` once the files are ready.
    pub fn select(&mut self) -> Selection {
        self.generation += 1;
        Selection(self.generation)
    }

    /// Does the work of `change()` for a `Selection` claimed earlier
    ///
    /// Returns `None`, leaving the target untouched, if another selection has been claimed since (or the input has been
    /// detached).
    pub fn render(
        &mut self,
        selection: Selection,
        files: &[SelectedFile],
    ) -> Result<Option<Vec<PendingRead<T::Node>>>> {
        if selection.0 != self.generation {
            debug!(files = files.len(), "discarding superseded selection");
            return Ok(None);
        }

        let Lifecycle::Attached { config, target } = &mut self.lifecycle else {
            return Err(eyre!("a `FilePreviewInput` must be attached to handle a `change`"));
        };

        target.clear()?;

        debug!(files = files.len(), generation = selection.0, "handling `change`");

        let list = target.is_list();
        let mut pending = Vec::new();
        for (index, file) in files.iter().enumerate() {
            let node = if list {
                target.append_list_item()?
            } else {
                target.root()
            };

            let kind = file
                .kind()
                .filter(|_| config.max_size().allows(file.size()));
            if let Some(kind) = kind {
                pending.push(PendingRead {
                    index,
                    file: file.clone(),
                    kind,
                    node,
                    generation: selection.0,
                });
            } else {
                debug!(
                    name = file.name(),
                    size = file.size(),
                    mime = file.mime(),
                    "file can't be previewed"
                );
                target.insert_html(&node, &config.error_message().render(file))?;
            }
        }

        Ok(Some(pending))
    }

    /// Renders a preview from the contents of a file read for an earlier `change()`
    ///
    /// A `data_url` of `None` means the read produced nothing, which is an error for that file. Reads belonging to a
    /// selection that has since been replaced are discarded without touching the target.
    pub fn finish(&mut self, read: PendingRead<T::Node>, data_url: Option<String>) -> Result<Completion> {
        if read.generation != self.generation {
            debug!(name = read.file.name(), "discarding stale read");
            return Ok(Completion::Discarded);
        }

        let Lifecycle::Attached { target, .. } = &mut self.lifecycle else {
            return Ok(Completion::Discarded);
        };

        let data_url = data_url.ok_or_else(|| eyre!("loading `{}` failed", read.file.name()))?;
        let media = MediaPreview::new(read.kind, data_url, read.file.name());
        target.append_media(&read.node, &media)?;

        Ok(Completion::Rendered)
    }
}

impl<T: Target> Default for FilePreviewInput<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> PendingRead<N> {
    /// The position of this file within the selection passed to `change()`
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn file(&self) -> &SelectedFile {
        &self.file
    }

    #[must_use]
    pub const fn kind(&self) -> MediaKind {
        self.kind
    }
}

// Private Helper Code =================================================================================================

#[derive(Debug)]
enum Lifecycle<T> {
    Detached,
    Attached { config: Config, target: T },
}

// Unit Tests ==========================================================================================================
