//! Headless replay of a short scripted input session.
//!
//! ```text
//! vantage [settings.json] [options.toml] [half-extent]
//! ```
//!
//! Builds a rig for a cube-shaped scene, feeds it a wheel flick, an orbit
//! drag, a fly stretch, a framing request and a focus pick, and logs the
//! pose and every state change. Run with `RUST_LOG=info` (or `debug` for
//! the rig's own decisions).

use std::path::Path;

use glam::{Vec2, Vec3};
use vantage::camera::{CameraMode, Pose};
use vantage::input::{InputEvent, Key, MouseButton, PointerKind};
use vantage::options::Options;
use vantage::rig::{CameraRig, RigCommand, SceneBounds};
use vantage::settings::Settings;
use vantage::state::StateEvent;
use vantage::VantageError;

const DT: f32 = 1.0 / 60.0;
const FRAMES: u32 = 600;
const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

enum Action {
    Event(InputEvent),
    Command(RigCommand),
}

fn mouse_down(x: f32, y: f32) -> Action {
    Action::Event(InputEvent::PointerDown {
        id: 1,
        kind: PointerKind::Mouse,
        button: MouseButton::Left,
        x,
        y,
    })
}

fn mouse_move(x: f32, y: f32) -> Action {
    Action::Event(InputEvent::PointerMove {
        id: 1,
        kind: PointerKind::Mouse,
        x,
        y,
    })
}

fn mouse_up(x: f32, y: f32) -> Action {
    Action::Event(InputEvent::PointerUp {
        id: 1,
        kind: PointerKind::Mouse,
        button: MouseButton::Left,
        x,
        y,
    })
}

fn key(key: Key, pressed: bool) -> Action {
    Action::Event(InputEvent::Key { key, pressed })
}

/// Frame-stamped actions, in frame order.
fn script() -> Vec<(u32, Action)> {
    let center = VIEWPORT * 0.5;
    let mut steps = vec![
        (120, Action::Event(InputEvent::wheel_lines(2.0))),
        (150, mouse_down(center.x, center.y)),
    ];
    for i in 1..=20 {
        steps.push((150 + i, mouse_move(center.x + i as f32 * 6.0, center.y)));
    }
    steps.extend([
        (171, mouse_up(center.x + 120.0, center.y)),
        (240, key(Key::W, true)),
        (300, key(Key::W, false)),
        (360, Action::Command(RigCommand::Frame)),
        (420, Action::Command(RigCommand::SetCameraMode(CameraMode::Orbit))),
        (
            480,
            Action::Command(RigCommand::Pick {
                x: center.x,
                y: center.y,
            }),
        ),
    ]);
    steps
}

fn load(args: &[String]) -> Result<(Settings, Options, SceneBounds), VantageError> {
    let settings = match args.first() {
        Some(path) => Settings::load(Path::new(path))?,
        None => Settings::default(),
    };
    let options = match args.get(1) {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    let extent = match args.get(2) {
        Some(text) => text.parse::<f32>().map_err(|e| {
            VantageError::SettingsParse(format!("half-extent '{text}': {e}"))
        })?,
        None => 1.0,
    };
    Ok((settings, options, SceneBounds::new(Vec3::ZERO, Vec3::splat(extent))))
}

fn log_pose(frame: u32, rig: &CameraRig, pose: &Pose) {
    let eye = pose.position;
    let target = pose.calc_target();
    log::info!(
        "frame {frame:3} {:?} eye ({:.3}, {:.3}, {:.3}) target ({:.3}, {:.3}, {:.3})",
        rig.camera_mode(),
        eye.x,
        eye.y,
        eye.z,
        target.x,
        target.y,
        target.z,
    );
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (settings, options, bounds) = match load(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("{e}");
            log::error!(
                "Usage: vantage [settings.json] [options.toml] [half-extent]"
            );
            std::process::exit(1);
        }
    };

    let mut rig = CameraRig::new(&settings, options, bounds);
    rig.set_viewport(VIEWPORT.x, VIEWPORT.y);

    let mut steps = script().into_iter().peekable();
    for frame in 0..FRAMES {
        while let Some((_, action)) =
            steps.next_if(|(at, _)| *at == frame)
        {
            match action {
                Action::Event(event) => rig.handle_event(event),
                Action::Command(command) => rig.execute(command),
            }
        }

        // Stand-in hit test: everything lands on the scene center
        if let Some(request) = rig.take_pick_request() {
            let _ = rig.resolve_pick(request, Some(bounds.center));
        }

        let pose = rig.update(DT);
        for change in rig.drain_events() {
            if !matches!(change, StateEvent::AnimationTime(_)) {
                log::info!("frame {frame:3} {change:?}");
            }
        }
        if frame % 60 == 0 {
            log_pose(frame, &rig, &pose);
        }
    }
    log_pose(FRAMES, &rig, &rig.pose());
}
