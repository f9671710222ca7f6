//! Fakes for the injected seams: renderer, sink, settings backend, workspace.

use crate::host::{DiagramBlock, OutputSink, SettingsBackend, Workspace};
use crate::render::{DiagramRenderer, RenderFailure, RenderOptions};
use futures::future::BoxFuture;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::sync::{Arc, Mutex};

pub enum FakeBehavior {
    /// Emits a fixed-size `<svg>` that embeds the source text.
    EchoSvg,
    Fixed(String),
    Fail(String),
}

pub struct FakeRenderer {
    pub behavior: FakeBehavior,
    pub seen: Mutex<Vec<RenderOptions>>,
}

impl FakeRenderer {
    pub fn new(behavior: FakeBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn last_options(&self) -> Option<RenderOptions> {
        self.seen.lock().ok().and_then(|seen| seen.last().cloned())
    }
}

impl DiagramRenderer for FakeRenderer {
    fn render_svg<'a>(
        &'a self,
        source: &'a str,
        options: &'a RenderOptions,
    ) -> BoxFuture<'a, Result<String, RenderFailure>> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(options.clone());
        }
        let out: Result<String, RenderFailure> = match &self.behavior {
            FakeBehavior::EchoSvg => Ok(format!(
                r#"<svg width="640" height="480"><text>{source}</text></svg>"#
            )),
            FakeBehavior::Fixed(markup) => Ok(markup.clone()),
            FakeBehavior::Fail(message) => Err(message.clone().into()),
        };
        Box::pin(async move { out })
    }
}

/// Records the sink call sequence and replays it into a "current content"
/// model, so tests can assert on what would be visible.
#[derive(Default)]
pub struct RecordingSink {
    pub contents: RefCell<Vec<String>>,
    pub loading: Cell<bool>,
    pub clears: Cell<usize>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn visible(&self) -> String {
        self.contents.borrow().join("")
    }
}

impl OutputSink for RecordingSink {
    fn clear(&self) {
        self.clears.set(self.clears.get() + 1);
        self.contents.borrow_mut().clear();
    }

    fn set_loading(&self, active: bool) {
        self.loading.set(active);
    }

    fn append_markup(&self, markup: &str) {
        self.contents.borrow_mut().push(markup.to_string());
    }
}

/// A sink whose target the host already discarded: every write is a no-op.
pub struct DetachedSink;

impl OutputSink for DetachedSink {
    fn clear(&self) {}
    fn set_loading(&self, _active: bool) {}
    fn append_markup(&self, _markup: &str) {}
}

#[derive(Default)]
pub struct MemoryBackend {
    pub blob: RefCell<Option<Value>>,
}

impl MemoryBackend {
    pub fn new(blob: Option<Value>) -> Arc<Self> {
        Arc::new(Self {
            blob: RefCell::new(blob),
        })
    }
}

impl SettingsBackend for MemoryBackend {
    fn load_blob(&self) -> Option<Value> {
        self.blob.borrow().clone()
    }

    fn save_blob(&self, blob: &Value) {
        *self.blob.borrow_mut() = Some(blob.clone());
    }
}

/// Two views: every block is "visible", only the first is "active".
#[derive(Default)]
pub struct FakeWorkspace {
    pub blocks: Vec<(String, Arc<RecordingSink>)>,
    pub broadcasts: Cell<usize>,
}

impl FakeWorkspace {
    pub fn with_blocks(sources: &[&str]) -> Self {
        Self {
            blocks: sources
                .iter()
                .map(|source| (source.to_string(), RecordingSink::new()))
                .collect(),
            broadcasts: Cell::new(0),
        }
    }
}

impl Workspace for FakeWorkspace {
    fn visible_blocks(&self) -> Vec<DiagramBlock> {
        self.broadcasts.set(self.broadcasts.get() + 1);
        self.blocks
            .iter()
            .map(|(source, sink)| DiagramBlock {
                source: source.clone(),
                sink: sink.clone() as Arc<dyn OutputSink>,
            })
            .collect()
    }

    fn active_view_blocks(&self) -> Vec<DiagramBlock> {
        self.blocks
            .first()
            .map(|(source, sink)| DiagramBlock {
                source: source.clone(),
                sink: sink.clone() as Arc<dyn OutputSink>,
            })
            .into_iter()
            .collect()
    }
}
