//! Scripted authoring session.
//!
//! Stands in for the animation-construction flow: creates a few shapes, shows
//! and hides them with `clear_all_except`, and exercises interactive picking.
//! Each step is snapshotted for the final report.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tableau_engine::interactive::SelectionMode;
use tableau_engine::prelude::*;

/// Names and bounds for the entities the session creates. Plays the role of
/// the external geometry layer that owns the real entities.
#[derive(Debug, Default)]
pub struct Catalog {
    names: HashMap<EntityId, String>,
    bounds: HashMap<EntityId, Rect>,
}

impl Catalog {
    pub fn spawn(&mut self, name: &str, bounds: Rect) -> EntityId {
        let id = EntityId::new();
        self.names.insert(id, name.to_owned());
        self.bounds.insert(id, bounds);
        id
    }

    pub fn register(&mut self, id: EntityId, name: &str) {
        self.names.insert(id, name.to_owned());
    }

    pub fn label(&self, id: EntityId) -> String {
        self.names.get(&id).cloned().unwrap_or_else(|| id.to_string())
    }

    fn labels(&self, ids: &[EntityId]) -> Vec<String> {
        ids.iter().map(|&id| self.label(id)).collect()
    }
}

impl BoundsSource for Catalog {
    fn bounds(&self, id: EntityId) -> Option<Rect> {
        self.bounds.get(&id).copied()
    }
}

/// Runs the script and returns one JSON snapshot per step.
pub fn run() -> Result<Vec<Value>> {
    let mut catalog = Catalog::default();
    let viewport = EntityId::new();
    let highlight = EntityId::new();
    catalog.register(viewport, "frame");
    catalog.register(highlight, "selection_highlight");

    let mut scene = InteractiveScene::with_infrastructure(viewport, highlight)
        .context("failed to set up interactive scene")?;
    let mut steps = Vec::new();

    let circle = catalog.spawn("circle", Rect::new(-3.0, -1.0, 2.0, 2.0));
    let square = catalog.spawn("square", Rect::new(-1.0, -1.0, 2.0, 2.0));
    let triangle = catalog.spawn("triangle", Rect::new(1.0, -1.0, 2.0, 2.0));

    scene.add(&[circle, square, triangle]);
    steps.push(snapshot("add circle, square, triangle", &scene, &catalog));

    scene.clear_all_except(&[circle, square]);
    steps.push(snapshot("clear_all_except circle, square", &scene, &catalog));

    let picked = scene.select_at(Vec2::new(-2.5, 0.0), &catalog, SelectionMode::Replace);
    log::info!("click at (-2.5, 0) picked {:?}", picked.map(|id| catalog.label(id)));
    steps.push(snapshot("click on circle", &scene, &catalog));

    let title = catalog.spawn("title", Rect::new(-2.0, 2.0, 4.0, 0.5));
    scene.clear_all_except(&[title, square]);
    steps.push(snapshot("clear_all_except title, square", &scene, &catalog));

    let box_hits = scene.select_in_rect(
        Rect::from_corners(Vec2::new(-4.0, -2.0), Vec2::new(4.0, 3.0)),
        &catalog,
        SelectionMode::Replace,
    );
    log::info!("box select hit {box_hits} entities");
    steps.push(snapshot("box select everything", &scene, &catalog));

    scene.bring_to_front(&[square]);
    steps.push(snapshot("bring square to front", &scene, &catalog));

    scene.clear_all_except(&[]);
    steps.push(snapshot("clear_all_except nothing", &scene, &catalog));

    Ok(steps)
}

fn snapshot(action: &str, scene: &InteractiveScene, catalog: &Catalog) -> Value {
    let live = catalog.labels(scene.live_entities());
    log::info!("{action}: live = [{}]", live.join(", "));
    json!({
        "action": action,
        "live": live,
        "selectable": catalog.labels(scene.selection_index().entities()),
        "selected": catalog.labels(scene.selected()),
    })
}
