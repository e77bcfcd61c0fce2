//! Pointer event scripts for headless sessions

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tilesnap_designer::{Point, TileSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// One recorded pointer event in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptEvent {
    pub event: PointerEventKind,
    pub x: f64,
    pub y: f64,
}

impl ScriptEvent {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Totals gathered while replaying a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    pub events: usize,
    pub drags: usize,
    pub snaps: usize,
    pub added: usize,
    pub removed: usize,
}

/// Read a JSON array of pointer events.
pub fn load_script(path: &Path) -> anyhow::Result<Vec<ScriptEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let events = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse script {}", path.display()))?;
    Ok(events)
}

/// Feed `events` to `session` in order.
pub fn replay(session: &mut TileSession, events: &[ScriptEvent]) -> anyhow::Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for (index, event) in events.iter().enumerate() {
        let pos = event.position();
        match event.event {
            PointerEventKind::Down => session.pointer_down(pos),
            PointerEventKind::Move => {
                let outcome = session
                    .pointer_move(pos)
                    .with_context(|| format!("Event {} (move) failed", index))?;
                if outcome.drag_started {
                    summary.drags += 1;
                }
            }
            PointerEventKind::Up => {
                let outcome = session
                    .pointer_up(pos)
                    .with_context(|| format!("Event {} (up) failed", index))?;
                summary.snaps += usize::from(outcome.snapped);
                summary.added += usize::from(outcome.added.is_some());
                summary.removed += usize::from(outcome.removed.is_some());
            }
        }
        summary.events += 1;
    }

    Ok(summary)
}
