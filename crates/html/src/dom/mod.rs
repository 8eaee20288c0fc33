pub mod abort;
pub mod event;
pub mod event_target;
pub mod window;

use crate::config::ViewportConfig;
use anyhow::{Result, anyhow};
use indextree::{Arena, Node, NodeId};
use js::{CellId, Realm};
use log::debug;
use window::Window;

/// Why a layout update was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpdateLayoutReason {
    MediaQueryListMatches,
    WindowResize,
}

/// Index of a document in a `DocumentTree`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DocumentId(NodeId);

/// A non-owning reference to a document: its arena index plus the cell id the
/// collector knows it by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DocumentHandle {
    pub id: DocumentId,
    pub cell: CellId,
}

#[derive(Debug)]
pub struct Document {
    cell: CellId,
    url: String,
    /// `None` once the browsing context has been torn down.
    window: Option<Window>,
    layout_count: u64,
    last_layout_reason: Option<UpdateLayoutReason>,
}

impl Document {
    fn new(cell: CellId, url: &str, viewport: ViewportConfig) -> Self {
        Self {
            cell,
            url: url.to_owned(),
            window: Some(Window::new(viewport)),
            layout_count: 0,
            last_layout_reason: None,
        }
    }

    #[inline]
    pub const fn cell(&self) -> CellId {
        self.cell
    }

    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[inline]
    pub const fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// How many layout updates this document has performed.
    #[inline]
    pub const fn layout_count(&self) -> u64 {
        self.layout_count
    }

    #[inline]
    pub const fn last_layout_reason(&self) -> Option<UpdateLayoutReason> {
        self.last_layout_reason
    }
}

/// What a media query list needs from the documents around it.
pub trait BrowsingContextHost {
    /// The document whose frame contains `document`, if it is nested.
    fn container_document(&self, document: DocumentId) -> Option<DocumentId>;

    /// Bring `document`'s layout up to date.
    fn update_layout(&mut self, document: DocumentId, reason: UpdateLayoutReason);

    /// The live window of `document`, if it still has one.
    fn window(&self, document: DocumentId) -> Option<&Window>;

    /// The realm new platform objects are allocated in.
    fn realm_mut(&mut self) -> &mut Realm;
}

/// Arena of documents. A document nested in a frame is a child of its
/// container document.
#[derive(Debug)]
pub struct DocumentTree {
    arena: Arena<Document>,
    realm: Realm,
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new(Realm::default())
    }
}

impl DocumentTree {
    pub fn new(realm: Realm) -> Self {
        Self {
            arena: Arena::new(),
            realm,
        }
    }

    /// Resolve a handle, rejecting handles whose slot was freed or reused.
    fn live(&self, id: DocumentId) -> Option<&Node<Document>> {
        let node = self.arena.get(id.0)?;
        (!id.0.is_removed(&self.arena)).then_some(node)
    }

    fn live_mut(&mut self, id: DocumentId) -> Option<&mut Node<Document>> {
        self.live(id)?;
        self.arena.get_mut(id.0)
    }

    /// Create a top-level document with its own window.
    pub fn create_document(&mut self, url: &str, viewport: ViewportConfig) -> DocumentHandle {
        let cell = self.realm.allocate();
        let id = DocumentId(self.arena.new_node(Document::new(cell, url, viewport)));
        debug!("created document {url} as {cell:?}");
        DocumentHandle { id, cell }
    }

    /// Create a document inside a frame of `container`.
    ///
    /// # Errors
    /// Returns an error if `container` is no longer part of the tree.
    pub fn create_nested_document(
        &mut self,
        container: DocumentId,
        url: &str,
        viewport: ViewportConfig,
    ) -> Result<DocumentHandle> {
        if self.live(container).is_none() {
            return Err(anyhow!("container document {container:?} was removed"));
        }
        let handle = self.create_document(url, viewport);
        container.0.checked_append(handle.id.0, &mut self.arena)?;
        Ok(handle)
    }

    /// Remove a document along with every document nested inside it.
    pub fn remove_document(&mut self, id: DocumentId) {
        if self.live(id).is_some() {
            debug!("removing document {id:?} and its nested documents");
            id.0.remove_subtree(&mut self.arena);
        }
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.live(id).map(Node::get)
    }

    pub fn handle(&self, id: DocumentId) -> Option<DocumentHandle> {
        self.document(id).map(|document| DocumentHandle {
            id,
            cell: document.cell,
        })
    }

    pub fn window_mut(&mut self, id: DocumentId) -> Option<&mut Window> {
        let node = self.live_mut(id)?;
        node.get_mut().window.as_mut()
    }

    /// Tear down the document's browsing context, leaving it without a window.
    pub fn discard_window(&mut self, id: DocumentId) {
        if let Some(node) = self.live_mut(id) {
            debug!("discarding window of {id:?}");
            node.get_mut().window = None;
        }
    }
}

impl BrowsingContextHost for DocumentTree {
    fn container_document(&self, document: DocumentId) -> Option<DocumentId> {
        let node = self.live(document)?;
        node.parent().map(DocumentId)
    }

    fn update_layout(&mut self, document: DocumentId, reason: UpdateLayoutReason) {
        if let Some(node) = self.live_mut(document) {
            let state = node.get_mut();
            state.layout_count += 1;
            state.last_layout_reason = Some(reason);
            debug!("layout update #{} for {document:?} ({reason:?})", state.layout_count);
        }
    }

    fn window(&self, document: DocumentId) -> Option<&Window> {
        self.document(document)?.window()
    }

    fn realm_mut(&mut self) -> &mut Realm {
        &mut self.realm
    }
}
