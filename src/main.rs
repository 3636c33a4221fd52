use std::io;
use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use crossterm::cursor;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use mxcif::camera::Camera;
use mxcif::Aabb;
use mxcif::Entry;
use mxcif::ObjectId;
use mxcif::QuadTree;
use mxcif::QuadTreeError;
use mxcif::Spatial;

const WORLD: Aabb = Aabb::new(0., 0., 64., 32.);

/// Per-object velocity, in world units per frame
type Velocity = (f32, f32);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let frames: usize = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("Invalid frame count \"{arg}\""))?,
        None => 200,
    };

    let mut tree = QuadTree::new(WORLD, 4);
    let ids = scatter(&mut tree, 24)?;

    let mut cam = Camera::new(128, 64, WORLD);
    let viewport = Aabb::new(16., 8., 48., 24.);

    let mut stdout = io::stdout();
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;

    for frame in 0..frames {
        for &id in &ids {
            step(&mut tree, id)?;
        }

        cam.reset();
        cam.draw_tree(&tree);
        cam.draw_outline(&viewport);

        let inside = tree.get_enclosed(&viewport).len();
        let touching = tree.get_overlapping(&viewport).len();

        execute!(
            stdout,
            cursor::MoveTo(0, 0),
            style::Print(cam.render().replace('\n', "\r\n")),
            style::Print(format!(
                "frame {frame:>4}  nodes {:>4}  viewport: {inside:>2} inside, {touching:>2} touching",
                tree.nodes().len()
            )),
            cursor::MoveToNextLine(1)
        )?;
        stdout.flush()?;

        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 30));
    }

    info!(objects = tree.len(), nodes = tree.nodes().len(), "done");

    Ok(())
}

/// Spread `n` boxes over the world with deterministic sizes and velocities.
fn scatter(tree: &mut QuadTree<Entry<Velocity>>, n: usize) -> anyhow::Result<Vec<ObjectId>> {
    let mut ids = Vec::with_capacity(n);

    for i in 0..n {
        let f = i as f32;
        let (x, y) = ((f * 7.3) % 60., (f * 4.1) % 28.);
        let size = 1. + (i % 3) as f32;
        let v = (((i % 5) as f32 - 2.) * 0.3, ((i % 7) as f32 - 3.) * 0.2);

        let bounds = Aabb::new(x, y, x + size, y + size);
        let id = tree
            .insert(Entry::new(bounds, v))
            .context("Failed to scatter objects")?;

        ids.push(id);
    }

    Ok(ids)
}

/// Advance one object, bouncing it off the world edges.
fn step(tree: &mut QuadTree<Entry<Velocity>>, id: ObjectId) -> anyhow::Result<()> {
    let res = tree.relocate(id, |e| {
        let (mut dx, mut dy) = e.payload;
        let b = e.bounds().translated(dx, dy);

        if b.min.x < WORLD.min.x || b.max.x > WORLD.max.x {
            dx = -dx;
        }
        if b.min.y < WORLD.min.y || b.max.y > WORLD.max.y {
            dy = -dy;
        }

        e.payload = (dx, dy);
        e.translate(dx, dy);
    });

    match res {
        Ok(_) => Ok(()),
        Err(QuadTreeError::LeftBounds { id }) => {
            warn!(id, "object escaped the world");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
