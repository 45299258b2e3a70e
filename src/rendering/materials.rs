use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::assets::mesh::MeshData;

use super::material::{Material, ParamValue};

/// Material that logs every call at debug level and counts draws. Used by the
/// demo binary so a headless run still shows what a frame would submit.
pub struct DebugMaterial {
    name: String,
    bound: bool,
    draw_calls: u64,
}

impl DebugMaterial {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: false,
            draw_calls: 0,
        }
    }

    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }
}

impl Material for DebugMaterial {
    fn bind(&mut self) {
        debug!("[{}] bind", self.name);
        self.bound = true;
    }

    fn unbind(&mut self) {
        debug!("[{}] unbind", self.name);
        self.bound = false;
    }

    fn set_param(&mut self, name: &str, value: ParamValue) {
        debug!("[{}] set {} = {:?}", self.name, name, value);
    }

    fn draw(&mut self, mesh: &MeshData) {
        self.draw_calls += 1;
        debug!(
            "[{}] draw #{}: {} vertices, {} indices",
            self.name,
            self.draw_calls,
            mesh.vertices.len(),
            mesh.num_indices()
        );
    }
}

/// One call observed by a [`RecordingMaterial`].
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialEvent {
    Bound,
    Unbound,
    Param { name: String, value: ParamValue },
    Draw { index_count: usize },
}

/// Shared event log of a [`RecordingMaterial`].
pub type MaterialLog = Arc<Mutex<Vec<MaterialEvent>>>;

/// Material that records every call for later inspection. The log handle is
/// shared so callers can keep reading it after the material moves into a
/// registry.
pub struct RecordingMaterial {
    log: MaterialLog,
}

impl RecordingMaterial {
    pub fn new() -> (Self, MaterialLog) {
        let log: MaterialLog = Arc::default();
        (Self { log: Arc::clone(&log) }, log)
    }

    fn record(&self, event: MaterialEvent) {
        self.log.lock().expect("material log poisoned").push(event);
    }
}

impl Material for RecordingMaterial {
    fn bind(&mut self) {
        self.record(MaterialEvent::Bound);
    }

    fn unbind(&mut self) {
        self.record(MaterialEvent::Unbound);
    }

    fn set_param(&mut self, name: &str, value: ParamValue) {
        self.record(MaterialEvent::Param {
            name: name.to_string(),
            value,
        });
    }

    fn draw(&mut self, mesh: &MeshData) {
        self.record(MaterialEvent::Draw {
            index_count: mesh.indices.len(),
        });
    }
}
